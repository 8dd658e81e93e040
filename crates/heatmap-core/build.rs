// File: crates/heatmap-core/build.rs
// Summary: Links the Windows system library Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Registry calls (RegOpenKeyExW and friends) used by Skia/ICU font lookup.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
