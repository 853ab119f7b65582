//! # Storage Layer
//!
//! This module defines the storage abstraction for notehub. The
//! [`VaultStore`] trait is the boundary to the host vault: everything the
//! publish workflow needs from the filesystem goes through it.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep the scan/publish logic **decoupled** from how notes are laid
//!   out on disk and how headers are serialized
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production vault rooted at a directory
//!   - Notes are `.md` files anywhere under the root (dot directories
//!     are skipped)
//!   - Headers are YAML frontmatter blocks delimited by `---` lines;
//!     the frontmatter wire format is owned entirely by this store
//!
//! - [`memory::InMemoryStore`]: In-memory vault for testing
//!   - No persistence
//!   - Can inject per-note move failures to exercise batch error paths
//!
//! ## Paths
//!
//! All paths crossing this boundary are vault-relative and
//! `/`-separated, regardless of platform. Folder creation is
//! idempotent. Moves are not transactional with header mutations: a
//! failure between the two leaves the note partially transitioned.

use crate::error::Result;
use crate::model::{Header, Note};

pub mod fs;
pub mod memory;

/// Abstract interface to the note vault.
pub trait VaultStore {
    /// List all markdown notes in the vault, in enumeration order.
    fn list_notes(&self) -> Result<Vec<Note>>;

    /// Get a single note by vault-relative path.
    fn get_note(&self, path: &str) -> Result<Note>;

    /// Whether a note currently exists at the given path.
    fn note_exists(&self, path: &str) -> bool;

    /// Whether a folder exists at the given path.
    fn folder_exists(&self, path: &str) -> bool;

    /// Create a folder (and any missing parents). No-op if present.
    fn create_folder(&mut self, path: &str) -> Result<()>;

    /// Move a note to a new vault-relative path, preserving content.
    fn move_note(&mut self, path: &str, new_path: &str) -> Result<()>;

    /// Apply in-place edits to a note's header and persist them. A note
    /// without a header gets an empty one to edit.
    fn mutate_header(&mut self, path: &str, f: &mut dyn FnMut(&mut Header)) -> Result<()>;
}
