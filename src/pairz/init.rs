use crate::commands::PairzPaths;
use crate::config::PairzConfig;
use crate::controller::AppController;
use crate::error::{PairzError, Result};
use crate::model::Scope;
use crate::presenter::ListPresenter;
use crate::store::fs_backend::FsBackend;
use crate::store::PersistenceGateway;
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};

/// Overrides the global data directory (used by tests and portable installs).
pub const GLOBAL_DATA_ENV: &str = "PAIRZ_GLOBAL_DATA";

const PROJECT_DIR_NAME: &str = ".pairz";

pub struct PairzContext {
    pub paths: PairzPaths,
    pub scope: Scope,
    pub config: PairzConfig,
}

impl PairzContext {
    pub fn gateway(&self) -> PersistenceGateway<FsBackend> {
        let backend = FsBackend::new(self.paths.project.clone(), self.paths.global.clone());
        PersistenceGateway::new(backend, self.scope, self.config.storage_key.clone())
    }

    pub fn controller<P: ListPresenter>(&self, presenter: P) -> AppController<FsBackend, P> {
        AppController::new(self.gateway(), presenter)
    }
}

/// Find the nearest ancestor of `cwd` (inclusive) that already has a `.pairz`
/// directory. Stops at the home directory or the filesystem root.
pub fn find_project_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        if current.join(PROJECT_DIR_NAME).is_dir() {
            return Some(current);
        }

        if let Some(ref home) = home_dir {
            if &current == home {
                return None;
            }
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

pub fn global_data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(GLOBAL_DATA_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "pairz", "pairz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PairzError::Store("Could not determine the global data directory".into()))
}

pub fn initialize(cwd: &Path, use_global: bool) -> Result<PairzContext> {
    let project_dir = find_project_root(cwd)
        .unwrap_or_else(|| cwd.to_path_buf())
        .join(PROJECT_DIR_NAME);
    let paths = PairzPaths {
        project: Some(project_dir),
        global: global_data_dir()?,
    };

    let scope = if use_global {
        Scope::Global
    } else {
        Scope::Project
    };

    let config = PairzConfig::load(paths.scope_dir(scope)?)?;

    Ok(PairzContext {
        paths,
        scope,
        config,
    })
}
