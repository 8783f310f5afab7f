//! # Storage Layer
//!
//! Pairz persists one thing: the full, ordered pair list, serialized as text and stored
//! under a single key. Storage is split in two levels:
//!
//! 1. [`StorageBackend`]: raw blob I/O. Given a [`Scope`] and a key, read or write a
//!    string. Knows nothing about pairs.
//! 2. [`PersistenceGateway`]: binds a backend to one scope and one key, and converts
//!    between blobs and pair lists through the [`snapshot`] codec.
//!
//! ## Whole Snapshots Only
//!
//! Every save overwrites the blob with the complete list. There are no partial
//! updates, so the last save always wins and a reader never sees half a list.
//!
//! ## First Run
//!
//! A missing key (or a blank blob) means nothing was ever saved. [`PersistenceGateway::load`]
//! returns `Ok(None)` in that case so the caller can seed defaults.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Production backend, one `<key>.json` file per key,
//!   written atomically (tmp file then rename).
//! - [`mem_backend::MemBackend`]: In-memory backend for tests, with optional write
//!   failure simulation.
//!
//! ## Storage Layout
//!
//! ```text
//! .pairz/
//! ├── config.json     # Scope configuration
//! └── pairs.json      # Snapshot stored under the "pairs" key
//! ```

use crate::error::Result;
use crate::model::{Pair, Scope};
use std::path::PathBuf;
use tracing::debug;

pub mod fs_backend;
pub mod mem_backend;
pub mod snapshot;

/// Key the snapshot is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "pairs";

/// Abstract interface for raw blob storage.
///
/// Methods take `&self`; pairz is single-threaded, so backends that need to mutate
/// use interior mutability.
pub trait StorageBackend {
    /// Read the blob stored under `key`. Returns Ok(None) if nothing is stored.
    fn load_blob(&self, scope: Scope, key: &str) -> Result<Option<String>>;

    /// Replace the blob stored under `key`.
    /// MUST be atomic: a reader sees either the old blob or the new one.
    fn save_blob(&self, scope: Scope, key: &str, blob: &str) -> Result<()>;

    /// Where the blob for `key` lives. For MemBackend, a virtual path.
    fn blob_path(&self, scope: Scope, key: &str) -> Result<PathBuf>;
}

/// A backend bound to one scope and one key.
pub struct PersistenceGateway<B: StorageBackend> {
    backend: B,
    scope: Scope,
    key: String,
}

impl<B: StorageBackend> PersistenceGateway<B> {
    pub fn new(backend: B, scope: Scope, key: impl Into<String>) -> Self {
        Self {
            backend,
            scope,
            key: key.into(),
        }
    }

    /// Load the stored list, or `None` on first run.
    pub fn load(&self) -> Result<Option<Vec<Pair>>> {
        let blob = match self.backend.load_blob(self.scope, &self.key)? {
            Some(blob) if !blob.trim().is_empty() => blob,
            _ => {
                debug!(key = %self.key, scope = ?self.scope, "no snapshot stored");
                return Ok(None);
            }
        };

        let pairs = snapshot::decode(&self.key, &blob)?;
        debug!(key = %self.key, count = pairs.len(), "snapshot loaded");
        Ok(Some(pairs))
    }

    /// Overwrite the stored list with `pairs`.
    pub fn save(&self, pairs: &[Pair]) -> Result<()> {
        let blob = snapshot::encode(pairs)?;
        self.backend.save_blob(self.scope, &self.key, &blob)?;
        debug!(key = %self.key, count = pairs.len(), "snapshot saved");
        Ok(())
    }

    pub fn location(&self) -> Result<PathBuf> {
        self.backend.blob_path(self.scope, &self.key)
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
