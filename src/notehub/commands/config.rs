use crate::commands::{CmdMessage, CmdResult, ConfigAction};
use crate::config::HubConfig;
use crate::error::{HubError, Result};
use std::path::Path;

pub const KEY_PUBLIC_FOLDER: &str = "public-folder";
pub const KEY_NOTES_FOLDER: &str = "notes-folder";
pub const KEY_REQUIRED_FIELDS: &str = "required-fields";

/// Show or edit the persisted configuration. Every `Set` normalizes the
/// input and saves the full blob immediately.
pub fn run(config_dir: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = HubConfig::load(config_dir)?;

    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            check_key(&key)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::Set(key, value) => {
            match key.as_str() {
                KEY_PUBLIC_FOLDER => config.set_public_folder(&value),
                KEY_NOTES_FOLDER => config.set_notes_folder(&value),
                KEY_REQUIRED_FIELDS => config.set_required_fields(&value),
                other => return Err(unknown_key(other)),
            }
            config.save(config_dir)?;

            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!("{} updated", key)));
            Ok(result.with_config(config))
        }
    }
}

fn check_key(key: &str) -> Result<()> {
    match key {
        KEY_PUBLIC_FOLDER | KEY_NOTES_FOLDER | KEY_REQUIRED_FIELDS => Ok(()),
        other => Err(unknown_key(other)),
    }
}

fn unknown_key(key: &str) -> HubError {
    HubError::Api(format!("Unknown config key: {}", key))
}
