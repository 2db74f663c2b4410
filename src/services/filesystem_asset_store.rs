use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::AssetStore;

/// Filesystem-based asset store rooted at a working directory.
#[derive(Debug, Clone)]
pub struct FilesystemAssetStore {
    root: PathBuf,
}

impl FilesystemAssetStore {
    /// Create an asset store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create an asset store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

}

impl AssetStore for FilesystemAssetStore {
    fn ensure_dir(&self, dir: &Path) -> Result<bool, AppError> {
        let path = self.root.join(dir);
        if path.exists() {
            return Ok(false);
        }
        fs::create_dir_all(&path)?;
        Ok(true)
    }

    fn write(&self, path: &Path, content: &[u8]) -> Result<(), AppError> {
        let target = self.root.join(path);
        fs::write(&target, content)?;
        tracing::debug!(path = %target.display(), bytes = content.len(), "wrote asset");
        Ok(())
    }
}
