use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use url::Url;

use crate::domain::AppError;
use crate::ports::AssetFetcher;

/// Fetcher that serves a fixed body and fails for selected URLs.
#[derive(Clone)]
pub struct FakeAssetFetcher {
    pub body: Vec<u8>,
    pub failing_urls: HashSet<String>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl FakeAssetFetcher {
    pub fn returning(body: &[u8]) -> Self {
        Self {
            body: body.to_vec(),
            failing_urls: HashSet::new(),
            requested: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn failing(mut self, url: &str) -> Self {
        self.failing_urls.insert(url.to_string());
        self
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl AssetFetcher for FakeAssetFetcher {
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, AppError> {
        self.requested.lock().unwrap().push(url.to_string());
        if self.failing_urls.contains(url.as_str()) {
            return Err(AppError::Http {
                url: url.to_string(),
                details: "simulated network error".to_string(),
            });
        }
        Ok(self.body.clone())
    }
}
