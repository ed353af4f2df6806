//! Temp-directory harness for tests that touch the filesystem.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;

use medfix::sync::{SheetFetcher, SyncError};

/// Isolated directory for config files and sheet exports.
pub struct TestHarness {
    temp_dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.temp_dir.path().to_path_buf()
    }

    /// Writes `content` to `name` inside the harness directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }
}

/// Fetcher that serves queued responses in order, then 503s.
pub struct QueuedFetcher {
    responses: Mutex<Vec<Result<String, SyncError>>>,
    pub calls: Arc<Mutex<usize>>,
}

impl QueuedFetcher {
    pub fn new(responses: Vec<Result<String, SyncError>>) -> Self {
        let mut responses = responses;
        responses.reverse();
        Self {
            responses: Mutex::new(responses),
            calls: Arc::new(Mutex::new(0)),
        }
    }
}

#[async_trait]
impl SheetFetcher for QueuedFetcher {
    async fn fetch_csv(&self) -> Result<String, SyncError> {
        *self.calls.lock().unwrap() += 1;
        self.responses
            .lock()
            .unwrap()
            .pop()
            .unwrap_or(Err(SyncError::Status { status: 503 }))
    }
}
