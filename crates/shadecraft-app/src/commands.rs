//! Subcommand implementations. Each returns the text to print on stdout.

use std::io::Read;

use shadecraft_color::{
    adjust_color, determine_palette_position, format_oklch, generate_css_variables,
    generate_palette, generate_palette_from_two_colors, generate_tailwind_theme,
    index_for_position, oklch_to_hex, seed_hex, string_to_oklch, wrap_root,
};
use shadecraft_common::{ColorAdjustment, Result, ShadeError};
use shadecraft_config::{OutputFormat, PaletteMode, ShadecraftConfig};
use shadecraft_tailwind::{convert_css_to_tailwind, preprocess_css_input, SNIPPETS};
use tracing::debug;

use crate::cli::Command;

pub fn run(command: Command, config: &ShadecraftConfig) -> Result<String> {
    match command {
        Command::Palette {
            seed,
            second,
            count,
            name,
            format,
        } => {
            let request = PaletteRequest {
                seed: seed.unwrap_or_else(|| config.palette.seed.clone()),
                second: second.or_else(|| {
                    (config.palette.mode == PaletteMode::Two)
                        .then(|| config.palette.second_seed.clone())
                }),
                count: count.unwrap_or(config.palette.count) as usize,
                name: name.unwrap_or_else(|| config.palette.name.clone()),
                format: format.map_or(config.output.format, Into::into),
                wrap_root: config.output.wrap_root,
            };
            palette(&request)
        }
        Command::Adjust {
            seed,
            index,
            lightness,
            chroma,
            hue,
        } => {
            let adjustment = ColorAdjustment {
                index,
                lightness,
                chroma,
                hue,
            };
            to_json(&adjust_color(&seed, &adjustment))
        }
        Command::Position { seed } => Ok(position(&seed)),
        Command::Oklch { color } => Ok(oklch(&color)),
        Command::Convert { text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };
            Ok(convert(&text))
        }
        Command::Examples => Ok(examples()),
        Command::Config => Ok(shadecraft_config::config_to_json(config)),
    }
}

/// Fully resolved `palette` arguments.
#[derive(Debug, Clone)]
pub struct PaletteRequest {
    pub seed: String,
    pub second: Option<String>,
    pub count: usize,
    pub name: String,
    pub format: OutputFormat,
    pub wrap_root: bool,
}

pub fn palette(request: &PaletteRequest) -> Result<String> {
    let entries = match &request.second {
        Some(second) => generate_palette_from_two_colors(&request.seed, second, request.count),
        None => generate_palette(&request.seed, request.count),
    };
    debug!(
        seed = %request.seed,
        second = ?request.second,
        steps = entries.len(),
        "palette generated"
    );

    let rendered = match request.format {
        OutputFormat::Tailwind => generate_tailwind_theme(&request.name, &entries),
        OutputFormat::Css => {
            let vars = generate_css_variables(&request.name, &entries);
            if request.wrap_root {
                wrap_root(&vars)
            } else {
                vars.trim_end().to_string()
            }
        }
        OutputFormat::Json => to_json(&entries)?,
    };
    Ok(rendered)
}

pub fn position(seed: &str) -> String {
    let slot = determine_palette_position(seed);
    format!(
        "position: {slot}\nindex: {}\nhex: {}",
        index_for_position(slot),
        seed_hex(seed)
    )
}

pub fn oklch(color: &str) -> String {
    let triple = string_to_oklch(color);
    format!("{}\n{}", format_oklch(triple), oklch_to_hex(triple))
}

pub fn convert(text: &str) -> String {
    convert_css_to_tailwind(preprocess_css_input(text))
}

pub fn examples() -> String {
    SNIPPETS
        .iter()
        .map(|snippet| {
            format!(
                "/* {} */\n{}\n=> class=\"{}\"\n",
                snippet.name,
                snippet.css,
                convert_css_to_tailwind(snippet.css)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| ShadeError::Other(format!("failed to serialize: {e}")))
}
