mod asset_fetcher;
mod asset_store;

pub use asset_fetcher::AssetFetcher;
pub use asset_store::AssetStore;
