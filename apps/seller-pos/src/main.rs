//! Souk seller POS command line.

use clap::Parser;
use std::process::ExitCode;

use souk_pos::cli::{self, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    souk_pos::init_tracing();

    let cli = Cli::parse();
    match cli::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
