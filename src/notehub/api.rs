//! # API Facade
//!
//! Thin entry point over the command layer, generic over the storage
//! backend the way the rest of the core is:
//! - Production: `HubApi<FileStore>`
//! - Testing: `HubApi<InMemoryStore>`
//!
//! The facade dispatches and threads the loaded configuration into each
//! command; it holds no business logic and performs no terminal I/O.
//! Configuration is an explicit value here, not ambient state, so tests
//! can run isolated instances with differing settings.

use crate::commands;
use crate::config::HubConfig;
use crate::error::Result;
use crate::store::VaultStore;
use std::path::PathBuf;

pub use crate::commands::{CmdMessage, CmdResult, ConfigAction, MessageLevel};

pub struct HubApi<S: VaultStore> {
    store: S,
    config: HubConfig,
    config_dir: PathBuf,
}

impl<S: VaultStore> HubApi<S> {
    pub fn new(store: S, config: HubConfig, config_dir: PathBuf) -> Self {
        Self {
            store,
            config,
            config_dir,
        }
    }

    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    pub fn scan(&self) -> Result<CmdResult> {
        commands::scan::run(&self.store, &self.config)
    }

    pub fn publish(&mut self, paths: &[String]) -> Result<CmdResult> {
        commands::publish::run(&mut self.store, &self.config, paths)
    }

    pub fn unpublish(&mut self, paths: &[String]) -> Result<CmdResult> {
        commands::unpublish::run(&mut self.store, &self.config, paths)
    }

    pub fn edit_config(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }
}
