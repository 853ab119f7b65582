use super::VaultStore;
use crate::error::{HubError, Result};
use crate::model::{Header, Note};
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// In-memory vault for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    notes: IndexMap<String, Option<Header>>,
    folders: BTreeSet<String>,
    failing_moves: BTreeSet<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_note(&mut self, path: impl Into<String>, header: Option<Header>) {
        self.notes.insert(path.into(), header);
    }

    /// Make every `move_note` of the given source path fail, to exercise
    /// per-note error handling in batch operations.
    pub fn fail_move_of(&mut self, path: impl Into<String>) {
        self.failing_moves.insert(path.into());
    }
}

impl VaultStore for InMemoryStore {
    fn list_notes(&self) -> Result<Vec<Note>> {
        Ok(self
            .notes
            .iter()
            .map(|(path, header)| Note::new(path.clone(), header.clone()))
            .collect())
    }

    fn get_note(&self, path: &str) -> Result<Note> {
        self.notes
            .get(path)
            .map(|header| Note::new(path, header.clone()))
            .ok_or_else(|| HubError::NoteNotFound(path.to_string()))
    }

    fn note_exists(&self, path: &str) -> bool {
        self.notes.contains_key(path)
    }

    fn folder_exists(&self, path: &str) -> bool {
        self.folders.contains(path)
    }

    fn create_folder(&mut self, path: &str) -> Result<()> {
        self.folders.insert(path.to_string());
        Ok(())
    }

    fn move_note(&mut self, path: &str, new_path: &str) -> Result<()> {
        if self.failing_moves.contains(path) {
            return Err(HubError::Store(format!("Injected move failure: {}", path)));
        }
        if self.notes.contains_key(new_path) {
            return Err(HubError::Store(format!(
                "Destination already exists: {}",
                new_path
            )));
        }
        let header = self
            .notes
            .shift_remove(path)
            .ok_or_else(|| HubError::NoteNotFound(path.to_string()))?;
        self.notes.insert(new_path.to_string(), header);
        Ok(())
    }

    fn mutate_header(&mut self, path: &str, f: &mut dyn FnMut(&mut Header)) -> Result<()> {
        let slot = self
            .notes
            .get_mut(path)
            .ok_or_else(|| HubError::NoteNotFound(path.to_string()))?;
        let header = slot.get_or_insert_with(Header::new);
        f(header);
        if header.is_empty() {
            *slot = None;
        }
        Ok(())
    }
}

// --- Test Fixtures ---
