use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use ldx::Walker;

/// Recursively list a directory tree, one long-format line per entry.
#[derive(Parser)]
#[command(name = "ldx", version, about)]
struct Cli {
    /// Root directory to list. Defaults to the current directory.
    root: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let root = cli.root.unwrap_or_else(|| PathBuf::from("."));

    let stdout = io::stdout().lock();
    match Walker::new(stdout).walk(&root) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ldx: {err}");
            ExitCode::FAILURE
        }
    }
}
