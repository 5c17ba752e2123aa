mod color;
mod swatch;

pub use color::*;
pub use swatch::*;
