use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use board_filter::config::{OutputFormat, ViewerConfig};

mod cmd;

#[derive(Parser)]
#[command(name = "board-filter")]
#[command(version, about = "Filter Kanban board snapshots the way the board view does")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a board-filter.toml. Defaults to ./board-filter.toml, then the user config dir
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the issues of a board snapshot that pass the filters
    Apply {
        /// Board snapshot (JSON)
        #[arg(short, long)]
        board: PathBuf,

        /// Filter query, e.g. "&project=TDP&assignee=__NO_ASSIGNEE__"
        #[arg(short, long)]
        query: Option<String>,

        /// Output format: text, json
        #[arg(long)]
        format: Option<OutputFormat>,
    },
    /// Print the canonical query string once stale keys are dropped
    Query {
        /// Board snapshot (JSON)
        #[arg(short, long)]
        board: PathBuf,

        query: String,
    },
    /// Print the initial checkbox state of a dimension's filter form
    Form {
        /// Board snapshot (JSON)
        #[arg(short, long)]
        board: PathBuf,

        /// One of: project, priority, issue-type, assignee, component
        #[arg(short, long)]
        dimension: String,

        #[arg(short, long)]
        query: Option<String>,
    },
    /// View or initialize configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a default board-filter.toml in the current directory
    Init {
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let working_dir = std::env::current_dir().context("Failed to get current directory")?;
    // Loaded per command so `config init` can replace a broken file.
    let load_config = || {
        ViewerConfig::discover(cli.config.as_deref(), &working_dir)
            .context("Failed to load configuration")
    };

    match &cli.command {
        Commands::Apply {
            board,
            query,
            format,
        } => {
            let config = load_config()?;
            let query = config.effective_query(query.as_deref());
            cmd::cmd_apply(board, query, config.effective_format(*format))?;
        }
        Commands::Query { board, query } => cmd::cmd_query(board, query)?,
        Commands::Form {
            board,
            dimension,
            query,
        } => {
            let config = load_config()?;
            let query = config.effective_query(query.as_deref());
            cmd::cmd_form(board, dimension, query)?;
        }
        Commands::Config { command } => match command {
            Some(ConfigCommands::Init { force }) => cmd::cmd_config_init(&working_dir, *force)?,
            None | Some(ConfigCommands::Show) => cmd::cmd_config_show(&load_config()?)?,
        },
    }

    Ok(())
}
