//! Selection state for one publish confirmation cycle.
//!
//! The session holds scan results and the set of notes currently chosen
//! for publication, keyed by stable vault paths rather than live note
//! handles (the vault may change between scan and execution; the publish
//! command re-checks existence per note). It carries no I/O: the CLI
//! renders it and feeds toggles in, then hands the final selection to
//! the publish command.

use crate::model::Eligibility;

/// One dialog's worth of selection state. Valid notes start selected;
/// invalid notes are never selectable. Dropped when the dialog closes.
pub struct PublishSession {
    results: Vec<Eligibility>,
    selected: Vec<String>,
}

impl PublishSession {
    pub fn new(results: Vec<Eligibility>) -> Self {
        let selected = results
            .iter()
            .filter(|r| r.valid)
            .map(|r| r.path.clone())
            .collect();
        Self { results, selected }
    }

    pub fn valid(&self) -> impl Iterator<Item = &Eligibility> {
        self.results.iter().filter(|r| r.valid)
    }

    pub fn invalid(&self) -> impl Iterator<Item = &Eligibility> {
        self.results.iter().filter(|r| !r.valid)
    }

    pub fn is_selected(&self, path: &str) -> bool {
        self.selected.iter().any(|p| p == path)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Toggle the n-th valid note (1-based, matching the rendered list).
    /// Returns false when the position does not exist. Re-selecting a
    /// note appends it, so execution order is selection insertion order.
    pub fn toggle(&mut self, position: usize) -> bool {
        let Some(entry) = self.valid().nth(position.wrapping_sub(1)) else {
            return false;
        };
        let path = entry.path.clone();
        if let Some(idx) = self.selected.iter().position(|p| *p == path) {
            self.selected.remove(idx);
        } else {
            self.selected.push(path);
        }
        true
    }

    /// The chosen paths, in selection insertion order.
    pub fn selection(&self) -> &[String] {
        &self.selected
    }

    pub fn into_selection(self) -> Vec<String> {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eligibility(path: &str, valid: bool) -> Eligibility {
        Eligibility {
            path: path.to_string(),
            basename: path.trim_end_matches(".md").to_string(),
            valid,
            errors: if valid {
                vec![]
            } else {
                vec!["Missing: categories".to_string()]
            },
        }
    }

    fn session() -> PublishSession {
        PublishSession::new(vec![
            eligibility("a.md", true),
            eligibility("bad.md", false),
            eligibility("b.md", true),
        ])
    }

    #[test]
    fn valid_notes_start_selected() {
        let session = session();
        assert_eq!(session.selection(), ["a.md", "b.md"]);
        assert_eq!(session.invalid().count(), 1);
    }

    #[test]
    fn toggle_removes_then_reappends() {
        let mut session = session();
        assert!(session.toggle(1));
        assert_eq!(session.selection(), ["b.md"]);

        assert!(session.toggle(1));
        assert_eq!(session.selection(), ["b.md", "a.md"]);
        assert_eq!(session.selected_count(), 2);
    }

    #[test]
    fn toggle_out_of_range_is_refused() {
        let mut session = session();
        assert!(!session.toggle(0));
        assert!(!session.toggle(3));
        assert_eq!(session.selected_count(), 2);
    }

    #[test]
    fn selection_can_be_emptied() {
        let mut session = session();
        session.toggle(1);
        session.toggle(2);
        assert_eq!(session.selected_count(), 0);
        assert!(!session.is_selected("a.md"));
    }
}
