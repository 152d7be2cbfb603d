// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::future::Future;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use mtbridge::app_config::{self, Config};
use mtbridge::app_controller::Controller;
use mtbridge::translation::TranslationRequestHandler;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a text and print the result record as JSON
    Translate {
        /// Source language name (e.g., 'English', 'Hebrew')
        #[arg(short, long)]
        source_language: String,

        /// Destination language name (e.g., 'Hebrew', 'Russian')
        #[arg(short = 't', long)]
        destination_language: String,

        /// Text to translate
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// List supported language pairs and the models serving them
    Pairs,

    /// Translate the built-in sample sentences
    Demo,

    /// Generate shell completions for mtbridge
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// mtbridge - Opus-MT translation requests as JSON records
#[derive(Parser, Debug)]
#[command(name = "mtbridge")]
#[command(version)]
#[command(about = "Translate text with Helsinki-NLP Opus-MT models and get JSON records back")]
#[command(long_about = "mtbridge validates a language pair, picks the matching Helsinki-NLP Opus-MT model
and translates the text through the Hugging Face inference API. Every request
prints one JSON record with the outcome.

EXAMPLES:
    mtbridge translate -s English -t Hebrew \"Today is Tuesday\"
    mtbridge translate -s Hebrew -t Russian \"שלום\"
    mtbridge pairs
    mtbridge --debug demo
    mtbridge completions bash > mtbridge.bash

SUPPORTED PAIRS (default configuration):
    English -> Hebrew   Helsinki-NLP/opus-mt-en-he
    Hebrew  -> Russian  Helsinki-NLP/opus-mt-he-ru

CONFIGURATION:
    Configuration is stored in conf.json by default. If the config file doesn't
    exist, a default one is created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,

    /// Trace the first translated line of every request
    #[arg(short, long, global = true)]
    debug: bool,

    /// Hugging Face API token
    #[arg(long, env = "HF_API_TOKEN", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Inference endpoint models are addressed under
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Do not show a spinner while waiting for the backend
    #[arg(long, global = true)]
    no_progress: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI colour for log level
    fn decoration_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌ ", "1;31"),
            Level::Warn => ("🚧 ", "1;33"),
            Level::Info => ("", "1;32"),
            Level::Debug => ("🔍 ", "1;36"),
            Level::Trace => ("📋 ", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, colour) = Self::decoration_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {}{}\x1B[0m", colour, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Accept everything at the logger, filter with the max level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "mtbridge", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    log::set_max_level(config.effective_level_filter());

    let controller = Controller::with_config(config)?;

    match &cli.command {
        Commands::Translate {
            source_language,
            destination_language,
            text,
        } => {
            let json = with_spinner(
                !cli.no_progress,
                format!("Translating {} -> {}", source_language, destination_language),
                controller.translate(source_language, destination_language, text),
            )
            .await;
            println!("{}", json);
        }
        Commands::Pairs => {
            for info in controller.pairs() {
                println!("{} -> {}\t{}", info.pair.source, info.pair.destination, info.model_identifier);
            }
        }
        Commands::Demo => {
            let results = with_spinner(!cli.no_progress, "Running sample translations".to_string(), controller.run_demo()).await;
            for result in &results {
                println!("{}", TranslationRequestHandler::serialize(result));
            }
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}

/// Load the config file and apply command line overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let path = Path::new(&cli.config_path);
    let mut config = Config::load_or_create(path)
        .with_context(|| format!("Failed to load config file: {}", cli.config_path))?;

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    if cli.debug {
        config.translation.debug = true;
        if config.log_level.to_level_filter() < LevelFilter::Debug {
            config.log_level = app_config::LogLevel::Debug;
        }
    }

    if let Some(api_key) = &cli.api_key {
        config.backend.api_key = api_key.clone();
    }

    if let Some(endpoint) = &cli.endpoint {
        config.backend.endpoint = endpoint.clone();
    }

    debug!("Using configuration from {}", path.display());
    Ok(config)
}

/// Await `future` while a spinner runs on stderr
async fn with_spinner<T>(enabled: bool, message: String, future: impl Future<Output = T>) -> T {
    if !enabled {
        return future.await;
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));

    let output = future.await;
    spinner.finish_and_clear();
    output
}
