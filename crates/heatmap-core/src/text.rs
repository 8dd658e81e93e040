// File: crates/heatmap-core/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout for tick labels, axis titles and the legend.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Horizontal anchoring of a label relative to its x coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Center,
    Right,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, numeric: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        if numeric {
            // tabular digits keep legend and hour labels aligned
            ts.set_font_families(&["DejaVu Sans Mono", "Roboto Mono", "Consolas", "Menlo", "monospace"]);
        } else {
            ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "sans-serif"]);
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, numeric: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color, numeric));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, numeric: bool) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT, numeric).longest_line()
    }

    /// Draw `text` with its baseline at `y`, anchored horizontally at `x`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, numeric: bool, anchor: Anchor) {
        let mut p = self.layout(text, size, color, numeric);
        let w = p.longest_line();
        let left = match anchor {
            Anchor::Left => x,
            Anchor::Center => x - w * 0.5,
            Anchor::Right => x - w,
        };
        // Paragraph draws from top-left; approximate ascent from the size
        p.paint(canvas, (left, y - size * 0.8));
    }

    /// Draw `text` rotated 90 degrees counter-clockwise, centred on `(x, y)`.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        canvas.save();
        canvas.rotate(-90.0, Some(skia::Point::new(x, y)));
        self.draw(canvas, text, x, y + size * 0.35, size, color, false, Anchor::Center);
        canvas.restore();
    }
}
