mod asset;
mod config;
mod error;
mod report;

pub use asset::{AssetDescriptor, AssetDir, builtin_assets};
pub use config::HttpFetcherConfig;
pub use error::AppError;
pub use report::{AssetOutcome, SetupReport};
