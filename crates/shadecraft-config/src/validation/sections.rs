use shadecraft_color::theme::{sanitize_theme_name, DEFAULT_THEME_NAME};

use super::helpers::{validate_one_of, validate_range, validate_seed};
use crate::schema::{PaletteMode, ShadecraftConfig, LOG_LEVELS};

/// Largest palette the generator is asked for.
pub(crate) const MAX_COUNT: u32 = 20;

pub(crate) fn validate_palette(errors: &mut Vec<String>, config: &ShadecraftConfig) {
    let palette = &config.palette;

    validate_range(errors, "palette.count", palette.count, 1, MAX_COUNT);
    validate_seed(errors, "palette.seed", &palette.seed);
    if palette.mode == PaletteMode::Two {
        validate_seed(errors, "palette.second_seed", &palette.second_seed);
    }

    // A blank name is the default; a non-blank one must survive sanitizing.
    let name = palette.name.trim();
    if !name.is_empty()
        && name != DEFAULT_THEME_NAME
        && sanitize_theme_name(name) == DEFAULT_THEME_NAME
    {
        errors.push(format!(
            "palette.name = {:?} has no usable characters",
            palette.name
        ));
    }
}

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &ShadecraftConfig) {
    validate_one_of(errors, "logging.level", &config.logging.level, LOG_LEVELS);
}
