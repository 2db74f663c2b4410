use crate::ports::{AssetFetcher, AssetStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: AssetFetcher, S: AssetStore> {
    fetcher: F,
    store: S,
}

impl<F: AssetFetcher, S: AssetStore> AppContext<F, S> {
    /// Create a new application context.
    pub fn new(fetcher: F, store: S) -> Self {
        Self { fetcher, store }
    }

    /// Get a reference to the asset fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Get a reference to the asset store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
