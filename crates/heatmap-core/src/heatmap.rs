// File: crates/heatmap-core/src/heatmap.rs
// Summary: Heatmap plot assembly and headless rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{Axis, AxisSide};
use crate::colorbar::{Colorbar, Orientation};
use crate::colormap::Colormap;
use crate::error::HeatmapResult;
use crate::geometry::RectI32;
use crate::grid::{HeatmapGrid, HeatmapGridBuilder};
use crate::layout::{HeatmapLayout, LayoutInput, LegendSpace, TICK_LEN};
use crate::options::HeatmapOptions;
use crate::scale::{ColorScale, IndexScale};
use crate::series::{TimeFrame, TimeSeries};
use crate::style::FontSizes;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, DPI, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub dpi: f32,
    pub insets: Insets,
    pub theme: Theme,
    pub fonts: FontSizes,
    /// Skip text for pixel-stable output across platforms.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            dpi: DPI,
            insets: Insets::default(),
            theme: Theme::default(),
            fonts: FontSizes::default(),
            draw_labels: true,
        }
    }
}

/// A pivoted grid plus everything needed to draw it.
#[derive(Clone, Debug)]
pub struct HeatmapPlot {
    pub column: String,
    pub data: HeatmapGrid,
    /// Columns of the grid.
    pub x_axis: Axis,
    /// Rows of the grid, first row drawn at the top.
    pub y_axis: Axis,
    pub colorbar: Option<Colorbar>,
    pub colormap: Colormap,
    pub title: Option<String>,
}

impl HeatmapPlot {
    /// Select `column` from `frame` and build the plot.
    pub fn from_frame(frame: &TimeFrame, column: &str, opts: &HeatmapOptions) -> HeatmapResult<Self> {
        let series = frame.column(column)?;
        Self::from_series(&series, opts)
    }

    pub fn from_series(series: &TimeSeries, opts: &HeatmapOptions) -> HeatmapResult<Self> {
        opts.validate()?;
        let data = HeatmapGridBuilder::new()
            .scaling(opts.scaling)
            .fill_value(opts.fill_value)
            .vmin(opts.vmin)
            .vmax(opts.vmax)
            .transpose(opts.transpose)
            .build(series)?;

        let x_side = if opts.transpose { AxisSide::Top } else { AxisSide::Bottom };
        let x_axis = Axis::new(data.grid.cols(), x_side, opts.x_ticks)?;
        let y_axis = Axis::new(data.grid.rows(), AxisSide::Left, opts.y_ticks)?;

        let colorbar = if opts.with_colorbar {
            let orientation = if opts.transpose { Orientation::Horizontal } else { Orientation::Vertical };
            Some(Colorbar::new(opts.colorbar_label.resolve(series.name()), orientation, opts.colorbar_ticks)?)
        } else {
            None
        };

        Ok(Self {
            column: series.name().to_string(),
            data,
            x_axis,
            y_axis,
            colorbar,
            colormap: opts.colormap,
            title: opts.title.clone(),
        })
    }

    pub fn layout(&self, opts: &RenderOptions) -> HeatmapLayout {
        let legend = self.colorbar.as_ref().map(|cb| {
            // legend length is unknown before layout; the figure edge is a close upper bound
            let guess = match cb.orientation {
                Orientation::Horizontal => opts.width as f32,
                Orientation::Vertical => opts.height as f32,
            };
            let tick_chars = cb.ticks(&self.data.bounds, guess).iter().map(|t| t.label.chars().count()).max().unwrap_or(0);
            LegendSpace { orientation: cb.orientation, has_label: cb.label.is_some(), tick_chars }
        });
        let y_label_chars = self.y_axis.ticks.ticks.iter().map(|t| t.label.chars().count()).max().unwrap_or(0);
        HeatmapLayout::compute(&LayoutInput {
            width: opts.width,
            height: opts.height,
            dpi: opts.dpi,
            insets: opts.insets,
            fonts: opts.fonts,
            x_axis_top: self.x_axis.side == AxisSide::Top,
            has_title: self.title.is_some(),
            y_label_chars,
            legend,
        })
    }

    /// Draw into a caller-provided canvas sized `opts.width` x `opts.height`.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) -> Result<()> {
        let layout = self.layout(opts);
        if !layout.is_valid() {
            anyhow::bail!("figure {}x{} too small for heatmap layout", opts.width, opts.height);
        }
        let shaper = opts.draw_labels.then(TextShaper::new);
        let scale = ColorScale::new(self.data.bounds.vmin, self.data.bounds.vmax);

        canvas.clear(opts.theme.background);
        draw_cells(canvas, &layout.plot, self, &scale);
        draw_frame(canvas, &layout.plot, opts.theme.frame);
        draw_x_axis(canvas, &layout.plot, &self.x_axis, opts, shaper.as_ref());
        draw_y_axis(canvas, &layout.plot, &self.y_axis, opts, shaper.as_ref());
        if let (Some(cb), Some(rect)) = (&self.colorbar, layout.legend) {
            draw_colorbar(canvas, &rect, cb, self, &scale, opts, shaper.as_ref());
        }
        if let (Some(title), Some(sh)) = (&self.title, shaper.as_ref()) {
            let size = FontSizes::px(opts.fonts.large, opts.dpi);
            let y = opts.insets.top as f32 + size;
            sh.draw(canvas, title, opts.width as f32 * 0.5, y, size, opts.theme.title, false, Anchor::Center);
        }
        Ok(())
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts)?;
        Ok(surface)
    }

    /// Render to PNG bytes in memory.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the heatmap to a PNG at `output_png_path`.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, &bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "wrote heatmap png");
        Ok(())
    }

    /// Render to an unpremultiplied RGBA8 buffer: (pixels, width, height, stride).
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading surface pixels failed");
        }
        Ok((pixels, opts.width, opts.height, stride))
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_cells(canvas: &skia::Canvas, plot: &RectI32, plot_data: &HeatmapPlot, scale: &ColorScale) {
    let grid = &plot_data.data.grid;
    let (nr, nc) = grid.shape();
    let xs = IndexScale::new(plot.left as f32, plot.right as f32, nc);
    let ys = IndexScale::new(plot.top as f32, plot.bottom as f32, nr);

    let mut paint = skia::Paint::default();
    paint.set_style(skia::paint::Style::Fill);
    // no anti-aliasing: neighbouring cells must meet without seams
    paint.set_anti_alias(false);

    for r in 0..nr {
        let (y0, y1) = (ys.to_px(r as f64), ys.to_px((r + 1) as f64));
        for c in 0..nc {
            let Some(v) = grid.get(r, c) else { continue };
            paint.set_color(plot_data.colormap.sample(scale.normalize(v)));
            let (x0, x1) = (xs.to_px(c as f64), xs.to_px((c + 1) as f64));
            canvas.draw_rect(skia::Rect::from_ltrb(x0, y0, x1, y1), &paint);
        }
    }
}

fn draw_frame(canvas: &skia::Canvas, rect: &RectI32, color: skia::Color) {
    let mut paint = skia::Paint::default();
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);
    paint.set_color(color);
    canvas.draw_rect(rect.to_skia(), &paint);
}

fn tick_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    paint.set_color(color);
    paint
}

fn draw_x_axis(canvas: &skia::Canvas, plot: &RectI32, axis: &Axis, opts: &RenderOptions, shaper: Option<&TextShaper>) {
    let xs = IndexScale::new(plot.left as f32, plot.right as f32, axis.cells);
    let paint = tick_paint(opts.theme.tick);
    let small = FontSizes::px(opts.fonts.small, opts.dpi);
    let medium = FontSizes::px(opts.fonts.medium, opts.dpi);
    let top = axis.side == AxisSide::Top;
    let edge = if top { plot.top as f32 } else { plot.bottom as f32 };
    let dir = if top { -1.0 } else { 1.0 };

    for tick in &axis.ticks.ticks {
        let x = xs.to_px(tick.position as f64);
        canvas.draw_line((x, edge), (x, edge + dir * TICK_LEN), &paint);
        if let Some(sh) = shaper {
            let baseline = if top { edge - TICK_LEN - small * 0.3 } else { edge + TICK_LEN + small };
            sh.draw(canvas, &tick.label, x, baseline, small, opts.theme.axis_label, true, Anchor::Center);
        }
    }
    if let Some(sh) = shaper {
        let cx = (plot.left + plot.right) as f32 * 0.5;
        let baseline = if top { edge - TICK_LEN - small * 1.4 - medium * 0.4 } else { edge + TICK_LEN + small * 1.4 + medium };
        sh.draw(canvas, &axis.title, cx, baseline, medium, opts.theme.axis_label, false, Anchor::Center);
    }
}

fn draw_y_axis(canvas: &skia::Canvas, plot: &RectI32, axis: &Axis, opts: &RenderOptions, shaper: Option<&TextShaper>) {
    let ys = IndexScale::new(plot.top as f32, plot.bottom as f32, axis.cells);
    let paint = tick_paint(opts.theme.tick);
    let small = FontSizes::px(opts.fonts.small, opts.dpi);
    let medium = FontSizes::px(opts.fonts.medium, opts.dpi);
    let edge = plot.left as f32;

    let mut widest = 0.0f32;
    for tick in &axis.ticks.ticks {
        let y = ys.to_px(tick.position as f64);
        canvas.draw_line((edge - TICK_LEN, y), (edge, y), &paint);
        if let Some(sh) = shaper {
            widest = widest.max(sh.measure_width(&tick.label, small, true));
            sh.draw(canvas, &tick.label, edge - TICK_LEN - 3.0, y + small * 0.35, small, opts.theme.axis_label, true, Anchor::Right);
        }
    }
    if let Some(sh) = shaper {
        let cx = (edge - TICK_LEN - 3.0 - widest - medium * 0.8).max(medium * 0.6);
        let cy = (plot.top + plot.bottom) as f32 * 0.5;
        sh.draw_vertical(canvas, &axis.title, cx, cy, medium, opts.theme.axis_label);
    }
}

fn draw_colorbar(
    canvas: &skia::Canvas,
    rect: &RectI32,
    colorbar: &Colorbar,
    plot_data: &HeatmapPlot,
    scale: &ColorScale,
    opts: &RenderOptions,
    shaper: Option<&TextShaper>,
) {
    let horizontal = colorbar.orientation == Orientation::Horizontal;
    let length = if horizontal { rect.width() } else { rect.height() };
    let mut paint = skia::Paint::default();
    paint.set_style(skia::paint::Style::Fill);
    paint.set_anti_alias(false);

    // one-pixel strips, low values at the left/bottom
    for i in 0..length {
        let t = if length > 1 { i as f64 / (length - 1) as f64 } else { 0.0 };
        paint.set_color(plot_data.colormap.sample(t));
        let strip = if horizontal {
            let x = (rect.left + i) as f32;
            skia::Rect::from_ltrb(x, rect.top as f32, x + 1.0, rect.bottom as f32)
        } else {
            let y = (rect.bottom - 1 - i) as f32;
            skia::Rect::from_ltrb(rect.left as f32, y, rect.right as f32, y + 1.0)
        };
        canvas.draw_rect(strip, &paint);
    }
    draw_frame(canvas, rect, opts.theme.frame);

    let small = FontSizes::px(opts.fonts.small, opts.dpi);
    let tick = tick_paint(opts.theme.tick);
    let ticks = colorbar.ticks(&plot_data.data.bounds, length as f32);
    let mut widest = 0.0f32;
    for t in &ticks {
        let f = scale.normalize(t.value) as f32;
        if horizontal {
            let x = rect.left as f32 + f * rect.width() as f32;
            let b = rect.bottom as f32;
            canvas.draw_line((x, b), (x, b + TICK_LEN), &tick);
            if let Some(sh) = shaper {
                sh.draw(canvas, &t.label, x, b + TICK_LEN + small, small, opts.theme.axis_label, true, Anchor::Center);
            }
        } else {
            let y = rect.bottom as f32 - f * rect.height() as f32;
            let r = rect.right as f32;
            canvas.draw_line((r, y), (r + TICK_LEN, y), &tick);
            if let Some(sh) = shaper {
                widest = widest.max(sh.measure_width(&t.label, small, true));
                sh.draw(canvas, &t.label, r + TICK_LEN + 3.0, y + small * 0.35, small, opts.theme.axis_label, true, Anchor::Left);
            }
        }
    }

    if let (Some(label), Some(sh)) = (&colorbar.label, shaper) {
        if horizontal {
            let cx = (rect.left + rect.right) as f32 * 0.5;
            let baseline = rect.bottom as f32 + TICK_LEN + small * 2.5;
            sh.draw(canvas, label, cx, baseline, small, opts.theme.axis_label, false, Anchor::Center);
        } else {
            let cx = rect.right as f32 + TICK_LEN + 3.0 + widest + small * 0.9;
            let cy = (rect.top + rect.bottom) as f32 * 0.5;
            sh.draw_vertical(canvas, label, cx, cy, small, opts.theme.axis_label);
        }
    }
}
