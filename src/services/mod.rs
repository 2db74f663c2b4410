mod filesystem_asset_store;
mod http_asset_fetcher;

pub use filesystem_asset_store::FilesystemAssetStore;
pub use http_asset_fetcher::HttpAssetFetcher;
