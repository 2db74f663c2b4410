//! Shared testing utilities for setup-assets CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ASSET_PATHS: [&str; 4] = [
    "static/js/jquery-3.5.1.min.js",
    "static/js/chess.js",
    "static/js/chessboard-1.0.0.min.js",
    "static/css/chessboard-1.0.0.min.css",
];

/// Discard port on loopback; nothing listens there in test environments.
const DEAD_PROXY: &str = "http://127.0.0.1:9";

const PROXY_VARS: [&str; 6] =
    ["HTTPS_PROXY", "https_proxy", "HTTP_PROXY", "http_proxy", "ALL_PROXY", "all_proxy"];

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary inside the working directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("setup-assets").expect("Failed to locate setup-assets binary");
        cmd.current_dir(self.work_dir());
        cmd
    }

    /// Build a command whose every HTTP(S) request goes through a proxy nobody listens on.
    pub fn offline_cli(&self) -> Command {
        let mut cmd = self.cli();
        for var in PROXY_VARS {
            cmd.env(var, DEAD_PROXY);
        }
        cmd.env_remove("NO_PROXY").env_remove("no_proxy");
        cmd
    }

    pub fn asset_path(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }
}
