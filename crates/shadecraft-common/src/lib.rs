pub mod errors;
pub mod types;

pub use errors::{ColorParseError, ConfigError, ShadeError};
pub use types::{Color, ColorAdjustment, ColorEntry, Hsl, Oklch, Rgb};

pub type Result<T> = std::result::Result<T, ShadeError>;
