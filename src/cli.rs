//! Command-line interface for loopcheck.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::{self, ScanConfig};
use crate::detect::Walker;
use crate::report;

/// Exit codes. The gate contract is binary: anything that is not a clean
/// pass (critical findings, missing root, bad config) exits 1.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILED: i32 = 1;

/// Default config file names to search for.
const DEFAULT_CONFIG_NAMES: &[&str] = &["loopcheck.yaml", ".loopcheck.yaml"];

/// Starter config written by `loopcheck init`.
const DEFAULT_TEMPLATE: &str = include_str!("templates/default.yaml");

/// UI re-render loop gate - detect effect blocks that re-trigger themselves.
///
/// Loopcheck scans a source tree for reactive effect declarations whose
/// callbacks write the same state they depend on: effects with state
/// setters but no dependency array, and effects whose dependency array
/// lists the very state they set. Both patterns cause unbounded re-render
/// cycles, so any occurrence blocks deployment.
#[derive(Parser)]
#[command(name = "loopcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a source tree and gate on critical findings
    #[command(visible_alias = "check")]
    Scan(ScanArgs),
    /// Create a starter loopcheck configuration file
    Init(InitArgs),
}

/// Arguments for the scan command.
#[derive(Parser)]
pub struct ScanArgs {
    /// Root directory to scan
    #[arg(default_value = "src")]
    pub path: PathBuf,

    /// Path to config YAML file (default: auto-discover, else built-ins)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    pub format: String,

    /// Print each file as it is scanned
    #[arg(short, long)]
    pub verbose: bool,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "loopcheck.yaml")]
    pub output: PathBuf,
}

/// Discover a config file in the current directory.
fn discover_config() -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}

/// Load the explicit config, a discovered one, or built-in defaults.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<ScanConfig> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => discover_config(),
    };
    match path {
        Some(p) => ScanConfig::parse_file(&p),
        None => Ok(ScanConfig::default()),
    }
}

/// Run the scan command.
pub fn run_scan(args: &ScanArgs) -> anyhow::Result<i32> {
    // Validate format
    if args.format != "pretty" && args.format != "json" {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            args.format
        );
        return Ok(EXIT_FAILED);
    }

    // Load and validate config
    let cfg = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error parsing config: {}", e);
            return Ok(EXIT_FAILED);
        }
    };
    if let Err(e) = config::validate(&cfg) {
        eprintln!("Error: invalid config: {}", e);
        return Ok(EXIT_FAILED);
    }

    // Walk the tree. A missing root is fatal and bubbles up to main.
    let result = Walker::new(&args.path, cfg).verbose(args.verbose).run()?;

    let path_str = args.path.to_string_lossy().to_string();
    let safe = match args.format.as_str() {
        "json" => report::write_json(&path_str, &result)?,
        _ => report::write_pretty(&path_str, &result),
    };

    if safe {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_FAILED)
    }
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_FAILED);
    }

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_FAILED);
            }
        }
    }

    if let Err(e) = std::fs::write(&args.output, DEFAULT_TEMPLATE) {
        eprintln!("Error: failed to write config: {}", e);
        return Ok(EXIT_FAILED);
    }

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Edit {} to match your project layout",
        args.output.display()
    );
    println!(
        "  2. Run: loopcheck scan src --config {}",
        args.output.display()
    );

    Ok(EXIT_SUCCESS)
}
