//! Asset descriptors and the builtin manifest.

use std::path::{Path, PathBuf};

use url::Url;

use super::AppError;

/// Directory an asset is written into, relative to the working root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetDir {
    Js,
    Css,
}

impl AssetDir {
    /// All asset directories, in creation order.
    pub const ALL: [AssetDir; 2] = [AssetDir::Js, AssetDir::Css];

    /// Path of the directory relative to the working root.
    pub fn relative_path(&self) -> &'static Path {
        match self {
            AssetDir::Js => Path::new("static/js"),
            AssetDir::Css => Path::new("static/css"),
        }
    }
}

/// Where an asset comes from and where it lands locally.
///
/// The local file name is independent of the URL, so an asset may be renamed on fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDescriptor {
    source_url: Url,
    dir: AssetDir,
    file_name: String,
}

impl AssetDescriptor {
    /// Build a descriptor, validating the URL and the destination file name.
    pub fn new(source_url: &str, dir: AssetDir, file_name: &str) -> Result<Self, AppError> {
        let url = Url::parse(source_url).map_err(|e| AppError::InvalidAssetUrl {
            url: source_url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::InvalidAssetUrl {
                url: source_url.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        if file_name.is_empty()
            || file_name == "."
            || file_name == ".."
            || file_name.contains(['/', '\\'])
        {
            return Err(AppError::InvalidAssetFileName(file_name.to_string()));
        }

        Ok(Self { source_url: url, dir, file_name: file_name.to_string() })
    }

    pub fn source_url(&self) -> &Url {
        &self.source_url
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Destination path relative to the working root, e.g. `static/js/chess.js`.
    pub fn destination_path(&self) -> PathBuf {
        self.dir.relative_path().join(&self.file_name)
    }
}

const BUILTIN_ASSETS: [(&str, AssetDir, &str); 4] = [
    ("https://code.jquery.com/jquery-3.5.1.min.js", AssetDir::Js, "jquery-3.5.1.min.js"),
    (
        "https://cdnjs.cloudflare.com/ajax/libs/chess.js/0.10.3/chess.min.js",
        AssetDir::Js,
        "chess.js",
    ),
    (
        "https://unpkg.com/@chrisoakman/chessboardjs@1.0.0/dist/chessboard-1.0.0.min.js",
        AssetDir::Js,
        "chessboard-1.0.0.min.js",
    ),
    (
        "https://unpkg.com/@chrisoakman/chessboardjs@1.0.0/dist/chessboard-1.0.0.min.css",
        AssetDir::Css,
        "chessboard-1.0.0.min.css",
    ),
];

/// The fixed list of front-end assets, in download order.
pub fn builtin_assets() -> Result<Vec<AssetDescriptor>, AppError> {
    BUILTIN_ASSETS
        .iter()
        .map(|(url, dir, file_name)| AssetDescriptor::new(url, *dir, file_name))
        .collect()
}
