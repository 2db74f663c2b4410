//! CLI Adapter.

use clap::Parser;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "setup-assets")]
#[command(version)]
#[command(
    about = "Download the jQuery, chess.js and chessboard.js assets into static/",
    long_about = None
)]
struct Cli {}

pub fn run() {
    let Cli {} = Cli::parse();

    let result: Result<(), AppError> = crate::setup().map(|report| {
        tracing::info!(
            succeeded = report.succeeded().count(),
            failed = report.failed().count(),
            "asset setup finished"
        );
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
