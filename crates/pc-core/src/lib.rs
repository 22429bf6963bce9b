/// Configuration, types, and shared structures for percii.
///
/// This crate contains all shared types, the error taxonomy, and the
/// configuration logic used across the percii workspace.

pub mod config;
pub mod error;
pub mod grid;
pub mod palette;

pub use config::{FitMode, RenderConfig};
pub use error::CoreError;
pub use grid::{FrameBuffer, GlyphGrid, ScalarGrid};
pub use palette::GlyphRamp;
