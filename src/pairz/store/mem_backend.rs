use super::StorageBackend;
use crate::error::{PairzError, Result};
use crate::model::Scope;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since pairz is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    blobs: RefCell<HashMap<(Scope, String), String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn load_blob(&self, scope: Scope, key: &str) -> Result<Option<String>> {
        let blobs = self.blobs.borrow();
        Ok(blobs.get(&(scope, key.to_string())).cloned())
    }

    fn save_blob(&self, scope: Scope, key: &str, blob: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(PairzError::Store("Simulated write error".to_string()));
        }
        let mut blobs = self.blobs.borrow_mut();
        blobs.insert((scope, key.to_string()), blob.to_string());
        Ok(())
    }

    fn blob_path(&self, _scope: Scope, key: &str) -> Result<PathBuf> {
        Ok(PathBuf::from(format!("memory://{}", key)))
    }
}
