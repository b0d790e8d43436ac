// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use crate::app_config::{Config, ServiceProvider};
use app_controller::Controller;

mod app_config;
mod app_controller;
mod clipboard;
mod errors;
mod formatting;
mod languages;
mod notify;
mod providers;
mod session;

/// CLI Wrapper for ServiceProvider to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliServiceProvider {
    Gemini,
    Rest,
}

impl From<CliServiceProvider> for ServiceProvider {
    fn from(cli_provider: CliServiceProvider) -> Self {
        match cli_provider {
            CliServiceProvider::Gemini => ServiceProvider::Gemini,
            CliServiceProvider::Rest => ServiceProvider::Rest,
        }
    }
}

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

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a code snippet between languages (default command)
    #[command(alias = "translate")]
    Translate(TranslateArgs),

    /// List the languages the translator supports
    Languages {
        /// Configuration file path
        #[arg(short, long, default_value = "conf.json")]
        config_path: String,
    },

    /// Generate shell completions for codeshift
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Input file containing the code snippet ('-' or omitted reads stdin)
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Source language key (e.g. 'javascript', 'cpp')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language key (e.g. 'python', 'java')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Translation service to use
    #[arg(short, long, value_enum)]
    provider: Option<CliServiceProvider>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Copy the translated code to the clipboard
    #[arg(long)]
    copy: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// codeshift - LLM-powered code translator
///
/// Translates code snippets between programming languages using an
/// LLM-backed translation service.
#[derive(Parser, Debug)]
#[command(name = "codeshift")]
#[command(version = "0.1.0")]
#[command(about = "LLM-powered code translator")]
#[command(long_about = "codeshift translates code snippets between programming languages.

EXAMPLES:
    codeshift snippet.js -t python              # Translate a file to Python
    cat snippet.js | codeshift -s javascript -t cpp
    codeshift snippet.js -t java --copy         # Also copy the result
    codeshift languages                         # List supported languages
    codeshift completions bash > codeshift.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically. The Gemini API key is
    read from service.api_key or the GEMINI_API_KEY environment variable.

SUPPORTED SERVICES:
    gemini - Google Gemini generateContent API (default: gemini-1.5-flash)
    rest   - Generic code-translation REST endpoint")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file containing the code snippet ('-' or omitted reads stdin)
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Source language key (e.g. 'javascript', 'cpp')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language key (e.g. 'python', 'java')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Translation service to use
    #[arg(short, long, value_enum)]
    provider: Option<CliServiceProvider>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Copy the translated code to the clipboard
    #[arg(long)]
    copy: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
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

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
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
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "codeshift", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Languages { config_path }) => {
            let config = load_config(&config_path, &None)?;
            let controller = Controller::with_config(config)?;
            print!("{}", controller.list_languages()?);
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => {
            // Default behavior - use top-level args
            let translate_args = TranslateArgs {
                input_path: cli.input_path,
                source_language: cli.source_language,
                target_language: cli.target_language,
                provider: cli.provider,
                model: cli.model,
                copy: cli.copy,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_translate(translate_args).await
        }
    }
}

/// Load the configuration file, creating a default one if it doesn't exist
fn load_config(config_path: &str, log_level: &Option<CliLogLevel>) -> Result<Config> {
    let config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );
        let config = Config::default();

        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;
        config
    };

    let mut config = config;
    if let Some(level) = log_level {
        config.log_level = level.clone().into();
    }
    Ok(config)
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(level_filter(&cmd_log_level.clone().into()));
    }

    let mut config = load_config(&options.config_path, &options.log_level)?;

    // Override config with CLI options if provided
    if let Some(provider) = &options.provider {
        config.service.provider = provider.clone().into();
    }
    if let Some(model) = &options.model {
        config.service.model = model.clone();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    let input = read_input(&options.input_path)?;

    let controller = Controller::with_config(config)?;
    let result = controller
        .run(
            input,
            options.source_language.as_deref(),
            options.target_language.as_deref(),
            options.copy,
        )
        .await?;

    println!("{}", result);
    Ok(())
}

/// Read the snippet to translate from a file or stdin
fn read_input(input_path: &Option<PathBuf>) -> Result<String> {
    match input_path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .context(format!("Failed to read input file: {:?}", path)),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}
