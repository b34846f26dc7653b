// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]
// Add other lints specific to this module that you want to allow but not auto-fix

use anyhow::{Result, anyhow, Context};
use log::{LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use lexiband::app_config::{self, Config};
use lexiband::app_controller::Controller;

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
    /// Build the readability report CSV (default command)
    Report(ReportArgs),

    /// Generate shell completions for lexiband
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ReportArgs {
    /// Full output file path, overriding directory and file name
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory to write the report into, keeping the default file name
    #[arg(short = 'd', long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path (JSON)
    #[arg(short, long)]
    config_path: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// lexiband - Lexile Band Readability Report Builder
///
/// Turns the built-in set of Lexile-leveled academic reading passages into a
/// spreadsheet-ready CSV report enriched with readability statistics.
#[derive(Parser, Debug)]
#[command(name = "lexiband")]
#[command(author = "lexiband developers")]
#[command(version = "0.1.0")]
#[command(about = "Readability report builder for leveled reading passages")]
#[command(long_about = "lexiband computes word counts, sentence counts and average sentence length for
the built-in 1300-1500 Lexile band passages and writes them as a CSV report.

EXAMPLES:
    lexiband                                    # Write band-1300-1500.csv next to the executable
    lexiband -o /tmp/report.csv                 # Write the report to an explicit path
    lexiband -d ./reports                       # Change the directory, keep the file name
    lexiband -c conf.json                       # Load settings from a config file
    lexiband --log-level debug                  # Verbose per-passage logging
    lexiband completions bash > lexiband.bash   # Generate bash completions

CONFIGURATION:
    Configuration is optional. When --config-path points to a JSON file its
    settings are loaded first and command line flags override them.

OUTPUT:
    A UTF-8 CSV prefixed with a byte order mark. Every field is double-quoted
    and rows end with a bare line feed; one row per passage plus a header row.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Full output file path, overriding directory and file name
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory to write the report into, keeping the default file name
    #[arg(short = 'd', long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path (JSON)
    #[arg(short, long)]
    config_path: Option<String>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
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
    // Verbosity changes at runtime go through log::set_max_level, so defer to
    // the global filter rather than a level captured at init time
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
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

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "lexiband", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Report(args)) => {
            // Use the explicit report subcommand args
            run_report(args)
        }
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let report_args = ReportArgs {
                output: cli.output,
                output_dir: cli.output_dir,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_report(report_args)
        }
    }
}

fn run_report(options: ReportArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    // Load configuration when a file is given, otherwise start from defaults
    let mut config = match &options.config_path {
        Some(config_path) => {
            let file = File::open(config_path)
                .context(format!("Failed to open config file: {}", config_path))?;

            let reader = BufReader::new(file);
            serde_json::from_reader::<_, Config>(reader)
                .context(format!("Failed to parse config file: {}", config_path))?
        }
        None => Config::default(),
    };

    // Override config with CLI options if provided
    if let Some(dir) = &options.output_dir {
        config.output.directory = Some(dir.clone());
    }

    if let Some(path) = &options.output {
        // A full path overrides both directory and file name; a bare file
        // name lands in the current directory
        let parent = path.parent().filter(|p| !p.as_os_str().is_empty());
        config.output.directory = Some(parent.unwrap_or(Path::new(".")).to_path_buf());
        config.output.filename = path
            .file_name()
            .ok_or_else(|| anyhow!("Output path has no file name: {:?}", path))?
            .to_string_lossy()
            .to_string();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        // Just update the max level without reinitializing the logger
        log::set_max_level(config.log_level.to_level_filter());
    }

    // Create controller and build the report
    let controller = Controller::with_config(config)?;
    controller.run()
}
