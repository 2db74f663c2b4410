//! Asset fetcher port definition.

use url::Url;

use crate::domain::AppError;

/// Port for retrieving the raw bytes behind a URL.
pub trait AssetFetcher {
    /// Perform a single GET of `url` and return the response body.
    ///
    /// Non-success statuses are reported as errors.
    fn fetch(&self, url: &Url) -> Result<Vec<u8>, AppError>;
}
