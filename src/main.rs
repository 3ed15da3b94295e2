//! dupewalk - Duplicate File Finder
//!
//! Entry point for the dupewalk CLI application.

use clap::Parser;
use dupewalk::{cli::Cli, error::ExitCode};

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Run the application logic
    match dupewalk::run_app(cli) {
        Ok(code) => std::process::exit(code.as_i32()),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    }
}
