/// Image acquisition for percii: loading, downsampling, brightness extraction.

pub mod brightness;
pub mod image;
pub mod resize;

pub use brightness::brightness_grid;
pub use image::{load_image, resolve_image_path};
pub use resize::{downsample, scaled_dims};
