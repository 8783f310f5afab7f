use super::StorageBackend;
use crate::error::{PairzError, Result};
use crate::model::Scope;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const BLOB_EXT: &str = ".json";

/// Stores each key as `<key>.json` inside the scope's directory.
pub struct FsBackend {
    project_root: Option<PathBuf>,
    global_root: PathBuf,
}

impl FsBackend {
    pub fn new(project_root: Option<PathBuf>, global_root: PathBuf) -> Self {
        Self {
            project_root,
            global_root,
        }
    }

    fn blob_filename(key: &str) -> String {
        format!("{}{}", key, BLOB_EXT)
    }

    fn get_store_path_by_scope(&self, scope: Scope) -> Result<PathBuf> {
        let root = match scope {
            Scope::Project => self.project_root.as_ref().ok_or_else(|| {
                PairzError::Store("No project scope available".to_string())
            })?,
            Scope::Global => &self.global_root,
        };
        Ok(root.clone())
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(PairzError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load_blob(&self, scope: Scope, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(scope, key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(PairzError::Io)?;
        Ok(Some(content))
    }

    fn save_blob(&self, scope: Scope, key: &str, blob: &str) -> Result<()> {
        let root = self.get_store_path_by_scope(scope)?;
        self.ensure_dir(&root)?;

        let target = root.join(Self::blob_filename(key));

        // Atomic write
        let tmp_file = root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_file, blob).map_err(PairzError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &target) {
            let _ = fs::remove_file(&tmp_file);
            return Err(PairzError::Io(e));
        }

        Ok(())
    }

    fn blob_path(&self, scope: Scope, key: &str) -> Result<PathBuf> {
        let root = self.get_store_path_by_scope(scope)?;
        Ok(root.join(Self::blob_filename(key)))
    }
}
