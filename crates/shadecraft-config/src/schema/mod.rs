//! Configuration schema types for shadecraft.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod output;
mod palette;

pub use logging::*;
pub use output::*;
pub use palette::*;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadecraftConfig {
    pub palette: PaletteConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}
