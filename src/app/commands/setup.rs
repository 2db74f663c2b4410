//! Asset setup pipeline: ensure directories, fetch each asset, print the banner.

use std::path::Path;

use crate::app::AppContext;
use crate::domain::{AppError, AssetDescriptor, AssetDir, AssetOutcome, SetupReport};
use crate::ports::{AssetFetcher, AssetStore};

/// Execute the setup command.
///
/// Directory creation errors abort the run. Failures of individual assets are
/// printed and recorded in the report, and the remaining assets are still attempted.
pub fn execute<F, S>(
    ctx: &AppContext<F, S>,
    assets: &[AssetDescriptor],
) -> Result<SetupReport, AppError>
where
    F: AssetFetcher,
    S: AssetStore,
{
    println!(">>> INITIALIZING ASSET DOWNLOADER...");

    let mut report = SetupReport::default();

    for dir in AssetDir::ALL {
        let path = dir.relative_path();
        if ctx.store().ensure_dir(path)? {
            println!("[+] Created directory: {}", path.display());
            report.created_dirs.push(path.to_path_buf());
        }
    }

    for asset in assets {
        let destination = asset.destination_path();
        println!("[*] Downloading {}...", destination.display());

        let result = fetch_one(ctx, asset, &destination);
        match &result {
            Ok(_) => println!("    -> Success"),
            Err(e) => {
                tracing::warn!(url = %asset.source_url(), error = %e, "asset download failed");
                println!("    [!] FAILED: {}", e);
            }
        }

        report
            .outcomes
            .push(AssetOutcome { destination, result: result.map_err(|e| e.to_string()) });
    }

    println!("\n>>> SETUP COMPLETE.");
    println!("Note: Piece images are NOT included in this script.");
    println!("They must be obtained separately.");

    Ok(report)
}

fn fetch_one<F, S>(
    ctx: &AppContext<F, S>,
    asset: &AssetDescriptor,
    destination: &Path,
) -> Result<u64, AppError>
where
    F: AssetFetcher,
    S: AssetStore,
{
    let body = ctx.fetcher().fetch(asset.source_url())?;
    ctx.store().write(destination, &body)?;
    Ok(body.len() as u64)
}
