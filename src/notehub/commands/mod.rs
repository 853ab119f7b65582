use crate::config::HubConfig;
use crate::model::Eligibility;

pub mod config;
pub mod publish;
pub mod scan;
pub mod unpublish;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
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
    /// Scan output: one entry per publish-requested note
    pub scanned: Vec<Eligibility>,
    /// Paths of notes a transition actually moved
    pub affected: Vec<String>,
    pub config: Option<HubConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_scanned(mut self, scanned: Vec<Eligibility>) -> Self {
        self.scanned = scanned;
        self
    }

    pub fn with_config(mut self, config: HubConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Settings surface actions, keyed by CLI config key names.
#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}
