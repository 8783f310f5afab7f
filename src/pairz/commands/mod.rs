use crate::config::PairzConfig;
use crate::error::{PairzError, Result};
use crate::model::{Pair, Scope};
use crate::validate::RejectionReason;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod sort;
pub mod startup;

#[derive(Debug, Clone)]
pub struct PairzPaths {
    pub project: Option<PathBuf>,
    pub global: PathBuf,
}

impl PairzPaths {
    pub fn scope_dir(&self, scope: Scope) -> Result<PathBuf> {
        match scope {
            Scope::Project => self
                .project
                .clone()
                .ok_or_else(|| PairzError::Store("Project scope is not available".to_string())),
            Scope::Global => Ok(self.global.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Pairs added, removed or seeded by the command
    pub affected_pairs: Vec<Pair>,
    /// Set when an add was turned down by the validator
    pub rejection: Option<RejectionReason>,
    /// True when the command changed the pair list
    pub mutated: bool,
    pub config: Option<PairzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_pairs(mut self, pairs: Vec<Pair>) -> Self {
        self.affected_pairs = pairs;
        self
    }

    pub fn with_config(mut self, config: PairzConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn mutated(mut self) -> Self {
        self.mutated = true;
        self
    }

    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }
}
