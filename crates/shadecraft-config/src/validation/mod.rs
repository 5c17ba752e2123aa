//! Configuration validation.
//!
//! Each section has its own check; this orchestrator runs them all and
//! collects every problem into a single `ConfigError`.

mod helpers;
mod sections;


use crate::schema::ShadecraftConfig;
use shadecraft_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ShadecraftConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_palette(&mut errors, config);
    sections::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
