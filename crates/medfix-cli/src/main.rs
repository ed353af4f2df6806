mod commands;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use medfix::config::load_config_or_default;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "medfix", version, about = "Hospital maintenance complaint dashboard")]
struct Cli {
    /// Path to the JSON config file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `medfix=trace`
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Show counters, rankings and the pending queue
    Summary {
        /// Read a local CSV export instead of fetching the sheet
        #[arg(long, value_name = "CSV")]
        file: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List records matching a free-text query
    Search {
        query: String,
        #[arg(long, value_name = "CSV")]
        file: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Suggest a repair priority for one record
    Advise {
        /// Record id, e.g. `row-7`
        id: String,
        #[arg(long, value_name = "CSV")]
        file: Option<PathBuf>,
        /// Use the keyword advisor even when an API key is configured
        #[arg(long)]
        offline: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Sync now, then again for every line read from stdin until EOF
    Watch,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match load_config_or_default(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if cli.json_logs {
        config.logging.json = true;
    }
    medfix::logging::init(&config.logging);

    let result = match cli.cmd {
        Cmd::Summary { file, format } => {
            commands::summary(&config, file.as_deref(), format).await
        }
        Cmd::Search {
            query,
            file,
            format,
        } => commands::search(&config, &query, file.as_deref(), format).await,
        Cmd::Advise {
            id,
            file,
            offline,
            format,
        } => commands::advise(&config, &id, file.as_deref(), offline, format).await,
        Cmd::Watch => commands::watch(&config).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
