// Rust guideline compliant 2026-08-20

//! Treescope CLI Application
//!
//! Command-line interface for resolving search expressions against
//! component tree documents.

use clap::Parser;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use treescope_core::Config;

pub mod commands;
pub mod output;
pub mod terminal;

pub use output::{create_formatter, OutputFormatter};
pub use terminal::should_use_color;

#[derive(Parser, Debug)]
#[command(
    name = "tscope",
    version,
    about = "Treescope: wildcard search-expression resolution over component trees",
    long_about = "Treescope resolves search expressions such as '@form:input*' against a component tree document. Trees are stored as JSON files; expressions combine keywords, exact identifiers, and wildcard patterns scoped by naming containers.",
    after_help = "Examples:\n  tscope resolve \"input*\" --tree view.json\n  tscope resolve \"@form:*name*\" --tree view.json --from input1\n  tscope resolve \":toolbar save\" --tree view.json\n  tscope inspect --tree view.json --id form1\n  tscope check --tree view.json\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Directory holding treescope.toml
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append logs to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Resolve a search expression against a tree document
    Resolve {
        /// The search expression
        expression: String,

        /// Path to the tree document
        #[arg(long)]
        tree: String,

        /// Identifier of a starting node (repeatable; default: the root)
        #[arg(long)]
        from: Vec<String>,
    },

    /// Print a tree document as an outline
    Inspect {
        /// Path to the tree document
        #[arg(long)]
        tree: String,

        /// Identifier of the subtree root to inspect
        #[arg(long)]
        id: Option<String>,
    },

    /// Check a tree document for identifier problems
    Check {
        /// Path to the tree document
        #[arg(long)]
        tree: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_dir = cli.config.clone().unwrap_or_else(|| ".".to_string());
    let config = Config::load(Path::new(&config_dir))?;

    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.log_level.clone());
    let _guard = init_tracing(&log_level, cli.log_file.as_deref())?;

    // Determine output format and color usage
    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None => {
            if cli.json {
                "json"
            } else {
                match config.output_format {
                    treescope_core::OutputFormat::Json => "json",
                    treescope_core::OutputFormat::Table => "table",
                    treescope_core::OutputFormat::Plain => "plain",
                }
            }
        }
    };
    let formatter = create_formatter(format, use_color);

    match cli.command {
        Some(Commands::Resolve {
            expression,
            tree,
            from,
        }) => {
            commands::resolve::execute(expression, tree, from, &config, formatter.as_ref())?;
        }
        Some(Commands::Inspect { tree, id }) => {
            commands::inspect::execute(tree, id, &config, formatter.as_ref())?;
        }
        Some(Commands::Check { tree }) => {
            commands::check::execute(tree, &config)?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn init_tracing(log_level: &str, log_file: Option<&str>) -> anyhow::Result<Option<WorkerGuard>> {
    let level = parse_log_level(log_level)?;

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

fn parse_log_level(level: &str) -> anyhow::Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => anyhow::bail!("Invalid log level '{}'", other),
    }
}
