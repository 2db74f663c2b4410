mod fake_asset_fetcher;

pub use fake_asset_fetcher::FakeAssetFetcher;
