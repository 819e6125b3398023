//! Chapiz breeds CLI - breed autocomplete from the terminal
//!
//! Scores, ranks and suggests breeds the way the pet profile forms do, with
//! recent selections persisted between runs.

use chapiz_cli::output::{report_error, OutputFormat, Status};
use chapiz_telemetry::TelemetryConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod app;
mod breeds;
mod commands;

use app::App;
use commands::{config, interactive, rank, recent, score, suggest};

/// Breed autocomplete for Chapiz pet profiles
#[derive(Parser)]
#[command(name = "chapiz-breeds")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Breed list as a JSON array (defaults to the built-in cat breeds)
    #[arg(long, global = true)]
    breeds: Option<PathBuf>,

    /// Configuration file (defaults to .chapiz.toml lookup)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Recent-selection namespace
    #[arg(long, global = true)]
    namespace: Option<String>,

    /// Directory for recent selections
    #[arg(long, global = true)]
    storage_dir: Option<PathBuf>,

    /// Print collected metrics to stderr on exit
    #[arg(long, global = true)]
    stats: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single query against a target string
    Score {
        /// Search text
        query: String,

        /// Text to score against
        target: String,
    },

    /// Rank breeds against a query
    Rank {
        /// Search text
        query: String,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Drop matches scoring below this
        #[arg(short, long)]
        min_score: Option<u32>,

        /// Breed field to search (repeatable)
        #[arg(long = "field")]
        fields: Vec<String>,
    },

    /// Suggest breeds, surfacing recent selections
    Suggest {
        /// Search text; omit to browse
        #[arg(default_value = "")]
        query: String,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Ignore recent selections
        #[arg(long)]
        no_recent: bool,
    },

    /// Suggest breeds as lines are typed on stdin
    ///
    /// Each line replaces the current input; suggestions are shown once
    /// input has been quiet for `input.debounce_ms`.
    Interactive {
        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Manage recent selections
    Recent {
        #[command(subcommand)]
        action: RecentAction,
    },

    /// Show the effective configuration
    Config,
}

#[derive(Subcommand)]
enum RecentAction {
    /// List recent selections, most recent first
    List,

    /// Record a confirmed selection
    Add {
        /// Breed ID
        id: String,
    },

    /// Forget all recent selections
    Clear,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = chapiz_telemetry::init_with_config(TelemetryConfig::for_cli(cli.verbose)) {
        Status::warning(&e.to_string());
    }

    let format = cli.format;
    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => match e.downcast_ref::<chapiz_core::Error>() {
            Some(err) => {
                report_error(err, format);
                ExitCode::from(u8::try_from(err.exit_code()).unwrap_or(1))
            }
            None => {
                Status::error(&format!("{e:#}"));
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let stats = cli.stats;
    let result = dispatch(cli);

    // Reported on failures too, including ones before any command ran.
    if stats {
        match serde_json::to_string_pretty(&chapiz_telemetry::metrics().export_json()) {
            Ok(json) => eprintln!("{json}"),
            Err(e) => Status::warning(&format!("Could not export metrics: {e}")),
        }
    }

    result
}

fn dispatch(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        format,
        breeds,
        config: config_path,
        namespace,
        storage_dir,
        command,
        ..
    } = cli;

    let load = || {
        App::load(app::Options {
            config: config_path.as_deref(),
            breeds: breeds.as_deref(),
            namespace: namespace.clone(),
            storage_dir: storage_dir.clone(),
            format,
        })
    };

    match command {
        // Scoring two strings needs neither config nor breeds.
        Commands::Score { query, target } => score::run(&query, &target, format),
        Commands::Rank { query, limit, min_score, fields } => {
            rank::run(&load()?, &query, limit, min_score, &fields)
        }
        Commands::Suggest { query, limit, no_recent } => {
            suggest::run(&load()?, &query, limit, !no_recent)
        }
        Commands::Interactive { limit } => interactive::run(&load()?, limit),
        Commands::Recent { action } => {
            let app = load()?;
            match action {
                RecentAction::List => recent::list(&app),
                RecentAction::Add { id } => recent::add(&app, &id),
                RecentAction::Clear => recent::clear(&app),
            }
        }
        Commands::Config => config::run(&load()?),
    }
}
