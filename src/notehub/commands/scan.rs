use crate::commands::CmdResult;
use crate::config::HubConfig;
use crate::error::Result;
use crate::model::{Eligibility, Note};
use crate::store::VaultStore;

/// Scan the vault for publish-requested notes and validate their
/// required fields. Pure read: the vault is not touched.
pub fn run<S: VaultStore>(store: &S, config: &HubConfig) -> Result<CmdResult> {
    let mut scanned = Vec::new();

    for note in store.list_notes()? {
        if let Some(eligibility) = evaluate(&note, config) {
            scanned.push(eligibility);
        }
    }

    Ok(CmdResult::default().with_scanned(scanned))
}

/// Evaluate a single note. Returns `None` for notes that are not
/// candidates: already published, headerless, or not publish-requested.
pub fn evaluate(note: &Note, config: &HubConfig) -> Option<Eligibility> {
    if note.is_under(&config.public_folder) {
        return None;
    }

    let header = note.header.as_ref()?;
    if !header.publish_requested() {
        return None;
    }

    let errors: Vec<String> = config
        .required_fields
        .iter()
        .filter(|field| header.field_missing(field))
        .map(|field| format!("Missing: {}", field))
        .collect();

    Some(Eligibility {
        path: note.path.clone(),
        basename: note.basename.clone(),
        valid: errors.is_empty(),
        errors,
    })
}
