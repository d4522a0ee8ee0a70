mod commands;

use clap::{Parser, Subcommand};
use quickpanel_core::config;
use tracing::{debug, info};

#[derive(Parser)]
#[command(
    name = "quickpanel",
    version,
    about = "Localized labels for the quick-settings panel"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the localized string for a key.
    Translate {
        /// Language code (defaults to `panel.language` from the config).
        #[arg(short, long)]
        lang: Option<String>,
        /// The key to translate. Everything after it is part of the key,
        /// so `--lang` must come first.
        #[arg(trailing_var_arg = true)]
        key: Vec<String>,
    },
    /// List translation keys and their languages.
    Keys {
        /// Print the table as JSON.
        #[arg(long)]
        json: bool,
    },
    /// List language codes present in the table.
    Languages,
    /// Validate the translation table.
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The log filter depends on the config, so the load is reported below.
    let (cfg, source) = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.panel.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match source {
        config::ConfigSource::Defaults => info!("{}", commands::config_status(&cli.config, source)),
        config::ConfigSource::File => debug!("{}", commands::config_status(&cli.config, source)),
    }

    let output = match cli.command {
        Commands::Translate { lang, key } => {
            if key.is_empty() {
                anyhow::bail!("no key provided. Usage: quickpanel translate [--lang <code>] <key>");
            }
            let lang = lang.unwrap_or(cfg.panel.language);
            let mut text = commands::handle_translate(&key, &lang);
            text.push('\n');
            text
        }
        Commands::Keys { json: true } => {
            let mut text = commands::handle_keys_json()?;
            text.push('\n');
            text
        }
        Commands::Keys { json: false } => commands::handle_keys(),
        Commands::Languages => commands::handle_languages(),
        Commands::Check => commands::handle_check()?,
    };
    print!("{output}");

    Ok(())
}
