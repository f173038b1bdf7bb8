use plugin_osv_filter::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock LockfileReader for testing
#[derive(Clone)]
pub struct MockLockfileReader {
    pub content: String,
    pub should_fail: bool,
    pub requested: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockLockfileReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Serves a file from `tests/fixtures`
    pub fn from_fixture(relative: &str) -> Self {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(relative);
        Self::new(std::fs::read_to_string(path).unwrap())
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new(String::new())
        }
    }

    pub fn read_count(&self) -> usize {
        self.requested.lock().unwrap().len()
    }
}

impl LockfileReader for MockLockfileReader {
    fn read_lockfile(&self, lockfile_path: &Path) -> Result<String> {
        self.requested
            .lock()
            .unwrap()
            .push(lockfile_path.to_path_buf());
        if self.should_fail {
            anyhow::bail!("Mock lockfile read failure");
        }
        Ok(self.content.clone())
    }
}
