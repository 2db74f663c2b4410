use std::path::Path;

use crate::domain::AppError;

/// Port for the local destination of downloaded assets.
///
/// Paths are relative to the store root.
pub trait AssetStore {
    /// Create `dir` and its parents if missing. Returns `true` if it was created.
    fn ensure_dir(&self, dir: &Path) -> Result<bool, AppError>;

    /// Write `content` to `path`, replacing any existing file.
    fn write(&self, path: &Path, content: &[u8]) -> Result<(), AppError>;
}
