//! setup-assets: fetch the third-party front-end assets of the chess UI into `static/`.

pub mod app;
pub mod domain;
pub mod logging;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use app::AppContext;
use app::commands::setup as setup_command;
use domain::{HttpFetcherConfig, builtin_assets};
use services::{FilesystemAssetStore, HttpAssetFetcher};

pub use domain::{AppError, AssetDescriptor, AssetDir, AssetOutcome, SetupReport};

/// Download the builtin assets into `static/` under the current directory.
///
/// Individual download failures are printed and recorded in the report.
/// Only a failure to create the target directories is returned as an error.
pub fn setup() -> Result<SetupReport, AppError> {
    let store = FilesystemAssetStore::current()?;
    run_with_store(store)
}

/// Download the builtin assets into `static/` under `root`.
pub fn setup_in(root: &Path) -> Result<SetupReport, AppError> {
    run_with_store(FilesystemAssetStore::new(root.to_path_buf()))
}

fn run_with_store(store: FilesystemAssetStore) -> Result<SetupReport, AppError> {
    let fetcher = HttpAssetFetcher::new(&HttpFetcherConfig::default())?;
    let ctx = AppContext::new(fetcher, store);
    setup_command::execute(&ctx, &builtin_assets()?)
}
