mod cli;
mod commands;

use std::process::ExitCode;

use shadecraft_config::ShadecraftConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "shadecraft=info";

fn main() -> ExitCode {
    let args = cli::parse();

    // The config picks the level, so loading runs under a scoped stderr
    // subscriber that only knows the flag or the default.
    let directive = args.log_level.as_deref().unwrap_or(DEFAULT_DIRECTIVE);
    let bootstrap = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(directive))
        .finish();
    let loaded = tracing::subscriber::with_default(bootstrap, || {
        shadecraft_config::load_config(args.config.as_deref())
    });

    let log_directive = args.log_level.clone().unwrap_or_else(|| match &loaded {
        Ok(config) => format!("shadecraft={}", config.logging.level),
        Err(_) => DEFAULT_DIRECTIVE.to_string(),
    });
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(&log_directive))
        .init();

    tracing::debug!("shadecraft v{} starting", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        ShadecraftConfig::default()
    });

    match commands::run(args.command, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn log_filter(directive: &str) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .unwrap_or_else(|_| DEFAULT_DIRECTIVE.parse().unwrap()),
    )
}
