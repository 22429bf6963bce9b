/// Text output for percii: percentile quantization and row assembly.

pub mod text;

pub use text::{quantize_grid, render_text};
