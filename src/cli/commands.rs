use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::engine::{Engine, EngineConfig, EngineHandle, IndexStats, SnapshotOrigin, StalenessPolicy};
use crate::models::{SearchResult, TypeFilter};
use crate::tui::run_interactive;
use crate::utils::{default_snapshot_dir, format_path_with_tilde, get_root_dir, sanitize_name};

#[derive(Parser)]
#[command(name = "dirsearch")]
#[command(version = "0.1.0")]
#[command(about = "Index a directory tree and search it by name", long_about = None)]
pub struct Cli {
    /// Directory to index (default: $DIRSEARCH_ROOT, then the current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Staleness timeout in seconds
    #[arg(long, global = true, default_value_t = 60)]
    pub timeout: u64,

    /// Where snapshot files are kept (default: $DIRSEARCH_SNAPSHOT_DIR, then the cache directory)
    #[arg(long, global = true)]
    pub snapshot_dir: Option<PathBuf>,

    /// Snapshot file name or path, instead of one derived from the root
    #[arg(long, global = true)]
    pub snapshot_key: Option<String>,

    /// Rebuild a cached snapshot older than the timeout instead of trusting it
    #[arg(long, global = true)]
    pub rebuild_if_stale: bool,

    /// Descend into symlinked directories
    #[arg(long, global = true)]
    pub follow_links: bool,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search file and directory names
    Search {
        /// Case-insensitive substring to look for
        query: String,
        /// Keep only one group: all, doc or img
        #[arg(long = "type", default_value = "all")]
        type_filter: TypeFilter,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Walk the root again and overwrite the snapshot
    Index,
    /// Show statistics about the snapshot
    Stats,
    /// Interactive search interface
    Interactive,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Some(Commands::Search { query, type_filter, json }) => {
            let engine = Engine::new(engine_config(&cli)?)?;
            let results = engine.search_filtered(query, *type_filter);
            print_results(&results, *json)?;
        }
        Some(Commands::Index) => {
            let engine = Engine::new_rebuilt(engine_config(&cli)?)?;
            let stats = engine.stats();
            println!("Indexed {} directories, {} files", stats.directories, stats.files);
            println!("Snapshot: {}", format_path_with_tilde(&stats.snapshot_path));
        }
        Some(Commands::Stats) => {
            let engine = Engine::new(engine_config(&cli)?)?;
            print_stats(&engine.stats());
        }
        Some(Commands::Interactive) => {
            let engine = Engine::new(engine_config(&cli)?)?;
            run_interactive(EngineHandle::new(engine))?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

/// Install the stderr subscriber; stdout stays free for results
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // Already installed (e.g. when run() is called twice in-process) is fine
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

fn engine_config(cli: &Cli) -> Result<EngineConfig> {
    let root = match &cli.root {
        Some(root) => root.clone(),
        None => get_root_dir()?,
    };
    let snapshot_dir = match &cli.snapshot_dir {
        Some(dir) => dir.clone(),
        None => default_snapshot_dir().context("No snapshot directory available; pass --snapshot-dir")?,
    };
    let policy = if cli.rebuild_if_stale {
        StalenessPolicy::RebuildWhenOlderThanTimeout
    } else {
        StalenessPolicy::TrustCache
    };

    let mut config = EngineConfig::new(root, Duration::from_secs(cli.timeout))
        .with_snapshot_dir(snapshot_dir)
        .with_staleness_policy(policy)
        .with_follow_links(cli.follow_links);
    if let Some(key) = &cli.snapshot_key {
        config = config.with_snapshot_key(key.clone());
    }
    Ok(config)
}

fn print_results(results: &[SearchResult], json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(results).context("Failed to serialize results")?;
        println!("{}", out);
        return Ok(());
    }

    if results.is_empty() {
        eprintln!("No matches");
        return Ok(());
    }
    for result in results {
        println!(
            "{}\t{}\t{}",
            result.file_type,
            sanitize_name(&result.name),
            sanitize_name(&result.path.to_string_lossy())
        );
    }
    Ok(())
}

fn print_stats(stats: &IndexStats) {
    let origin = match stats.origin {
        SnapshotOrigin::Loaded => "loaded from snapshot file",
        SnapshotOrigin::Built => "built from disk",
    };

    println!("Directory Index Statistics");
    println!("==========================");
    println!("Root: {}", format_path_with_tilde(&stats.root));
    println!("Directories: {}", stats.directories);
    println!("Files: {}", stats.files);
    println!("Built at: {}", stats.built_at.format("%Y-%m-%d %H:%M:%S"));
    println!("Source: {}", origin);
    println!("Stale: {}", if stats.stale { "yes" } else { "no" });
    println!("Snapshot file: {}", format_path_with_tilde(&stats.snapshot_path));
}
