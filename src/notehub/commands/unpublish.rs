use crate::commands::{CmdMessage, CmdResult};
use crate::config::HubConfig;
use crate::error::{HubError, Result};
use crate::model::{Header, FIELD_IS_PUBLISHED, FIELD_PUBLISH_DATE};
use crate::store::VaultStore;

/// Move notes back into the notes folder, stripping publish metadata.
/// The "note is currently public" precondition is the caller's job; the
/// move itself runs unconditionally for any note it is given.
pub fn run<S: VaultStore>(
    store: &mut S,
    config: &HubConfig,
    paths: &[String],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for path in paths {
        match unpublish_one(store, config, path) {
            Ok((basename, new_path)) => {
                result.affected.push(new_path);
                result.add_message(CmdMessage::success(format!("Unpublished: {}", basename)));
            }
            Err(err) => {
                let name = path.rsplit('/').next().unwrap_or(path);
                result.add_message(CmdMessage::error(format!(
                    "Failed to unpublish {}: {}",
                    name, err
                )));
            }
        }
    }

    Ok(result)
}

fn unpublish_one<S: VaultStore>(
    store: &mut S,
    config: &HubConfig,
    path: &str,
) -> Result<(String, String)> {
    if !store.note_exists(path) {
        return Err(HubError::NoteNotFound(path.to_string()));
    }
    let note = store.get_note(path)?;

    if !store.folder_exists(&config.notes_folder) {
        store.create_folder(&config.notes_folder)?;
    }

    store.mutate_header(path, &mut clear_publish_fields)?;

    let new_path = format!("{}/{}", config.notes_folder, note.name);
    store.move_note(path, &new_path)?;
    Ok((note.basename, new_path))
}

/// Pure header edit applied during unpublish; absent fields are fine.
pub fn clear_publish_fields(header: &mut Header) {
    header.remove(FIELD_IS_PUBLISHED);
    header.remove(FIELD_PUBLISH_DATE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::FieldValue;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::VaultStore;

    fn published_header() -> Header {
        let mut header = Header::new();
        header.set(FIELD_IS_PUBLISHED, FieldValue::Str("yes".into()));
        header.set(FIELD_PUBLISH_DATE, FieldValue::Str("2024-01-01".into()));
        header.set("categories", FieldValue::List(vec!["eng".into()]));
        header
    }

    #[test]
    fn unpublish_moves_and_strips_metadata() {
        let mut fixture =
            StoreFixture::new().with_note("PUBLIC/x.md", Some(published_header()));
        let config = HubConfig::default();

        let result = run(
            &mut fixture.store,
            &config,
            &["PUBLIC/x.md".to_string()],
        )
        .unwrap();

        assert_eq!(result.affected, vec!["Notes/x.md"]);
        assert!(fixture.store.folder_exists("Notes"));

        let note = fixture.store.get_note("Notes/x.md").unwrap();
        let header = note.header.unwrap();
        assert!(!header.contains(FIELD_IS_PUBLISHED));
        assert!(!header.contains(FIELD_PUBLISH_DATE));
        assert!(header.contains("categories"));

        assert_eq!(result.messages[0].content, "Unpublished: x");
        assert_eq!(result.messages[0].level, MessageLevel::Success);
    }

    #[test]
    fn absent_publish_fields_are_not_an_error() {
        let mut fixture = StoreFixture::new().with_note("PUBLIC/x.md", Some(Header::new()));
        let config = HubConfig::default();

        let result = run(
            &mut fixture.store,
            &config,
            &["PUBLIC/x.md".to_string()],
        )
        .unwrap();
        assert_eq!(result.affected, vec!["Notes/x.md"]);
    }

    #[test]
    fn moves_any_note_it_is_given() {
        // Precondition enforcement lives in the CLI, not here
        let mut fixture = StoreFixture::new().with_note("Inbox/y.md", Some(Header::new()));
        let config = HubConfig::default();

        let result = run(&mut fixture.store, &config, &["Inbox/y.md".to_string()]).unwrap();
        assert_eq!(result.affected, vec!["Notes/y.md"]);
    }

    #[test]
    fn missing_note_is_reported() {
        let mut fixture = StoreFixture::new();
        let config = HubConfig::default();

        let result = run(&mut fixture.store, &config, &["gone.md".to_string()]).unwrap();
        assert!(result.affected.is_empty());
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Error && m.content.contains("gone.md")));
    }
}
