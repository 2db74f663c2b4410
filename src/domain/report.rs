use std::path::PathBuf;

/// Result of fetching a single asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetOutcome {
    /// Destination relative to the working root.
    pub destination: PathBuf,
    /// Bytes written on success, error description on failure.
    pub result: Result<u64, String>,
}

impl AssetOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Summary of one setup run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupReport {
    /// Directories that did not exist and were created.
    pub created_dirs: Vec<PathBuf>,
    /// One entry per asset, in manifest order.
    pub outcomes: Vec<AssetOutcome>,
}

impl SetupReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &AssetOutcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failed(&self) -> impl Iterator<Item = &AssetOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(AssetOutcome::is_success)
    }
}
