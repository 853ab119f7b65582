use crate::commands::{CmdMessage, CmdResult};
use crate::config::HubConfig;
use crate::error::{HubError, Result};
use crate::model::{FieldValue, Header, FIELD_PUBLISH_DATE};
use crate::store::VaultStore;
use chrono::Local;

/// Publish the selected notes, strictly one after another so two moves
/// never race to create the destination folder. Each failure is reported
/// by name and does not halt the rest of the batch.
pub fn run<S: VaultStore>(
    store: &mut S,
    config: &HubConfig,
    paths: &[String],
) -> Result<CmdResult> {
    let date = Local::now().format("%Y-%m-%d").to_string();
    let mut result = CmdResult::default();

    for path in paths {
        match publish_one(store, config, path, &date) {
            Ok(new_path) => result.affected.push(new_path),
            Err(err) => {
                let name = path.rsplit('/').next().unwrap_or(path);
                result.add_message(CmdMessage::error(format!(
                    "Failed to publish {}: {}",
                    name, err
                )));
            }
        }
    }

    result.add_message(CmdMessage::success(format!(
        "Published {} notes to {}",
        result.affected.len(),
        config.public_folder
    )));
    Ok(result)
}

/// Transition a single note into the public folder. Not transactional:
/// a move failure after the header stamp leaves the stamp in place.
fn publish_one<S: VaultStore>(
    store: &mut S,
    config: &HubConfig,
    path: &str,
    date: &str,
) -> Result<String> {
    // The selection may be stale by the time we get here
    if !store.note_exists(path) {
        return Err(HubError::NoteNotFound(path.to_string()));
    }
    let note = store.get_note(path)?;

    if !store.folder_exists(&config.public_folder) {
        store.create_folder(&config.public_folder)?;
    }

    store.mutate_header(path, &mut |header| stamp_publish_date(header, date))?;

    let new_path = format!("{}/{}", config.public_folder, note.name);
    store.move_note(path, &new_path)?;
    Ok(new_path)
}

/// Pure header edit applied during publish.
pub fn stamp_publish_date(header: &mut Header, date: &str) {
    header.set(FIELD_PUBLISH_DATE, FieldValue::Str(date.to_string()));
}
