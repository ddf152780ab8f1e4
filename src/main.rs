//! Loopcheck CLI entry point.

use clap::Parser;
use loopcheck::cli::{self, Cli, Commands, EXIT_FAILED};

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Scan(args) => match cli::run_scan(&args) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("Error: {}", e);
                EXIT_FAILED
            }
        },
        Commands::Init(args) => match cli::run_init(&args) {
            Ok(code) => code,
            Err(e) => {
                eprintln!("Error: {}", e);
                EXIT_FAILED
            }
        },
    };

    std::process::exit(exit_code);
}
