use clap::{Parser, Subcommand, ValueEnum};
use shadecraft_config::OutputFormat;
use std::path::PathBuf;

/// shadecraft: Tailwind palettes from seed colors, and CSS to Tailwind classes.
#[derive(Parser, Debug)]
#[command(name = "shadecraft", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `shadecraft_color=trace`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a palette from one seed, or interpolate between two.
    Palette {
        /// Seed color (hex, rgb(), hsl(), a CSS name or oklch()).
        seed: Option<String>,

        /// Second seed; switches to two-color interpolation.
        #[arg(long)]
        second: Option<String>,

        /// Number of steps.
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=20))]
        count: Option<u32>,

        /// Theme name used in the custom property names.
        #[arg(long)]
        name: Option<String>,

        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Override lightness, chroma or hue of a color.
    Adjust {
        seed: String,

        /// Palette index for the result (defaults to 500).
        #[arg(long)]
        index: Option<u32>,

        #[arg(long)]
        lightness: Option<f64>,

        #[arg(long)]
        chroma: Option<f64>,

        #[arg(long, allow_hyphen_values = true)]
        hue: Option<f64>,
    },

    /// Show which palette slot a color lands in.
    Position { seed: String },

    /// Show a color's oklch() triple and its hex.
    Oklch { color: String },

    /// Translate CSS declarations (or HTML with a style attribute) to classes.
    ///
    /// Reads standard input when TEXT is omitted.
    Convert { text: Option<String> },

    /// Translate the bundled sample snippets.
    Examples,

    /// Print the effective configuration as JSON.
    Config,
}

/// Palette output format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Tailwind,
    Css,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Tailwind => OutputFormat::Tailwind,
            FormatArg::Css => OutputFormat::Css,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
