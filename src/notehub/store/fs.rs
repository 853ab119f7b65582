use super::VaultStore;
use crate::error::{HubError, Result};
use crate::model::{FieldValue, Header, Note};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::{Path, PathBuf};

const NOTE_EXT: &str = ".md";
const FRONTMATTER_DELIM: &str = "---";

/// Production vault rooted at a directory on disk.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn abs(&self, path: &str) -> PathBuf {
        let mut abs = self.root.clone();
        for segment in path.split('/') {
            abs.push(segment);
        }
        abs
    }

    fn collect_notes(&self, dir: &Path, prefix: &str, out: &mut Vec<Note>) -> Result<()> {
        let mut entries: Vec<_> = fs::read_dir(dir)
            .map_err(HubError::Io)?
            .collect::<std::io::Result<_>>()
            .map_err(HubError::Io)?;
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let name = entry.file_name().to_string_lossy().into_owned();
            // Dot entries hold vault internals (.notehub among them)
            if name.starts_with('.') {
                continue;
            }

            let rel = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{}/{}", prefix, name)
            };

            let file_type = entry.file_type().map_err(HubError::Io)?;
            if file_type.is_dir() {
                self.collect_notes(&entry.path(), &rel, out)?;
            } else if name.ends_with(NOTE_EXT) {
                let content = fs::read_to_string(entry.path()).map_err(HubError::Io)?;
                let (header, _) = parse_document(&content);
                out.push(Note::new(rel, header));
            }
        }
        Ok(())
    }
}

impl VaultStore for FileStore {
    fn list_notes(&self) -> Result<Vec<Note>> {
        let mut notes = Vec::new();
        if self.root.exists() {
            self.collect_notes(&self.root, "", &mut notes)?;
        }
        Ok(notes)
    }

    fn get_note(&self, path: &str) -> Result<Note> {
        let abs = self.abs(path);
        if !abs.is_file() {
            return Err(HubError::NoteNotFound(path.to_string()));
        }
        let content = fs::read_to_string(abs).map_err(HubError::Io)?;
        let (header, _) = parse_document(&content);
        Ok(Note::new(path, header))
    }

    fn note_exists(&self, path: &str) -> bool {
        self.abs(path).is_file()
    }

    fn folder_exists(&self, path: &str) -> bool {
        self.abs(path).is_dir()
    }

    fn create_folder(&mut self, path: &str) -> Result<()> {
        fs::create_dir_all(self.abs(path)).map_err(HubError::Io)?;
        Ok(())
    }

    fn move_note(&mut self, path: &str, new_path: &str) -> Result<()> {
        let from = self.abs(path);
        if !from.is_file() {
            return Err(HubError::NoteNotFound(path.to_string()));
        }
        let to = self.abs(new_path);
        if to.exists() {
            return Err(HubError::Store(format!(
                "Destination already exists: {}",
                new_path
            )));
        }
        fs::rename(from, to).map_err(HubError::Io)?;
        Ok(())
    }

    fn mutate_header(&mut self, path: &str, f: &mut dyn FnMut(&mut Header)) -> Result<()> {
        let abs = self.abs(path);
        if !abs.is_file() {
            return Err(HubError::NoteNotFound(path.to_string()));
        }
        let content = fs::read_to_string(&abs).map_err(HubError::Io)?;
        let (header, body) = parse_document(&content);

        let mut header = header.unwrap_or_default();
        f(&mut header);

        let rendered = render_document(&header, body)?;
        fs::write(abs, rendered).map_err(HubError::Io)?;
        Ok(())
    }
}

/// Split a note into its header (if any) and body. A header is a leading
/// `---` line, YAML until the next `---` line, then the body. Files with
/// no frontmatter block, or an unparseable one, are treated as
/// headerless with the full content as body.
fn parse_document(content: &str) -> (Option<Header>, &str) {
    let Some(rest) = strip_delim_line(content) else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FRONTMATTER_DELIM {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            match parse_header(yaml) {
                Some(header) => return (Some(header), body),
                None => return (None, content),
            }
        }
        offset += line.len();
    }

    // Unterminated block: not a header
    (None, content)
}

fn strip_delim_line(content: &str) -> Option<&str> {
    let rest = content.strip_prefix(FRONTMATTER_DELIM)?;
    let rest = rest.strip_prefix('\r').unwrap_or(rest);
    rest.strip_prefix('\n')
}

fn parse_header(yaml: &str) -> Option<Header> {
    let value: Value = serde_yaml::from_str(yaml).ok()?;
    let Value::Mapping(map) = value else {
        return None;
    };

    let mut header = Header::new();
    for (key, value) in map {
        let Value::String(name) = key else { continue };
        if let Some(field) = field_from_yaml(value) {
            header.set(name, field);
        }
    }
    Some(header)
}

/// Coerce a YAML value into the header value model: strings and booleans
/// pass through, numbers become their string form, null fields are
/// dropped, sequences keep their scalar items.
fn field_from_yaml(value: Value) -> Option<FieldValue> {
    match value {
        Value::Bool(b) => Some(FieldValue::Bool(b)),
        Value::String(s) => Some(FieldValue::Str(s)),
        Value::Number(n) => Some(FieldValue::Str(n.to_string())),
        Value::Sequence(items) => {
            let items = items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    Value::Number(n) => Some(n.to_string()),
                    Value::Bool(b) => Some(b.to_string()),
                    _ => None,
                })
                .collect();
            Some(FieldValue::List(items))
        }
        _ => None,
    }
}

fn field_to_yaml(value: &FieldValue) -> Value {
    match value {
        FieldValue::Bool(b) => Value::Bool(*b),
        FieldValue::Str(s) => Value::String(s.clone()),
        FieldValue::List(items) => Value::Sequence(
            items.iter().map(|s| Value::String(s.clone())).collect(),
        ),
    }
}

fn render_document(header: &Header, body: &str) -> Result<String> {
    if header.is_empty() {
        return Ok(body.to_string());
    }

    let mut map = Mapping::new();
    for (name, value) in header.iter() {
        map.insert(Value::String(name.clone()), field_to_yaml(value));
    }
    let yaml = serde_yaml::to_string(&Value::Mapping(map)).map_err(HubError::Header)?;
    Ok(format!(
        "{}\n{}{}\n{}",
        FRONTMATTER_DELIM, yaml, FRONTMATTER_DELIM, body
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FIELD_PUBLISH_DATE;

    fn vault_with(files: &[(&str, &str)]) -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().unwrap();
        for (path, content) in files {
            let abs = dir.path().join(path);
            if let Some(parent) = abs.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(abs, content).unwrap();
        }
        let store = FileStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn lists_markdown_notes_recursively() {
        let (_dir, store) = vault_with(&[
            ("a.md", "body"),
            ("Notes/b.md", "body"),
            ("Notes/deep/c.md", "body"),
            ("ignored.txt", "body"),
            (".notehub/config.json", "{}"),
        ]);

        let notes = store.list_notes().unwrap();
        let paths: Vec<&str> = notes.iter().map(|n| n.path.as_str()).collect();
        assert_eq!(paths, ["Notes/b.md", "Notes/deep/c.md", "a.md"]);
    }

    #[test]
    fn parses_frontmatter_header() {
        let (_dir, store) = vault_with(&[(
            "n.md",
            "---\nisPublished: yes\ncategories:\n  - eng\n  - infra\n---\nBody text\n",
        )]);

        let note = store.get_note("n.md").unwrap();
        let header = note.header.unwrap();
        assert!(header.publish_requested());
        assert_eq!(
            header.get("categories"),
            Some(&FieldValue::List(vec!["eng".into(), "infra".into()]))
        );
    }

    #[test]
    fn headerless_note_has_no_header() {
        let (_dir, store) = vault_with(&[("n.md", "Just a body\n")]);
        assert!(store.get_note("n.md").unwrap().header.is_none());
    }

    #[test]
    fn unterminated_frontmatter_is_body() {
        let (_dir, store) = vault_with(&[("n.md", "---\nisPublished: yes\nno closing\n")]);
        assert!(store.get_note("n.md").unwrap().header.is_none());
    }

    #[test]
    fn coerces_scalars_and_drops_null() {
        let (_dir, store) = vault_with(&[(
            "n.md",
            "---\npriority: 3\ndraft: false\nowner: null\n---\n",
        )]);

        let header = store.get_note("n.md").unwrap().header.unwrap();
        assert_eq!(header.get("priority"), Some(&FieldValue::Str("3".into())));
        assert_eq!(header.get("draft"), Some(&FieldValue::Bool(false)));
        assert!(!header.contains("owner"));
    }

    #[test]
    fn mutate_header_preserves_body_and_order() {
        let (_dir, mut store) = vault_with(&[(
            "n.md",
            "---\ntitle: Roadmap\nisPublished: yes\n---\n# Heading\n\nBody stays.\n",
        )]);

        store
            .mutate_header("n.md", &mut |header| {
                header.set(FIELD_PUBLISH_DATE, FieldValue::Str("2024-05-01".into()));
            })
            .unwrap();

        let note = store.get_note("n.md").unwrap();
        let header = note.header.unwrap();
        let names: Vec<&String> = header.iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["title", "isPublished", "publishDate"]);

        let content = fs::read_to_string(store.root().join("n.md")).unwrap();
        assert!(content.ends_with("# Heading\n\nBody stays.\n"));
    }

    #[test]
    fn mutate_header_on_headerless_note_creates_block() {
        let (_dir, mut store) = vault_with(&[("n.md", "Body only\n")]);

        store
            .mutate_header("n.md", &mut |header| {
                header.set("owner", FieldValue::Str("sam".into()));
            })
            .unwrap();

        let content = fs::read_to_string(store.root().join("n.md")).unwrap();
        assert!(content.starts_with("---\n"));
        assert!(content.ends_with("Body only\n"));
    }

    #[test]
    fn removing_last_field_drops_the_block() {
        let (_dir, mut store) = vault_with(&[("n.md", "---\nonly: field\n---\nBody\n")]);

        store
            .mutate_header("n.md", &mut |header| {
                header.remove("only");
            })
            .unwrap();

        let content = fs::read_to_string(store.root().join("n.md")).unwrap();
        assert_eq!(content, "Body\n");
    }

    #[test]
    fn move_note_relocates_and_refuses_overwrite() {
        let (_dir, mut store) = vault_with(&[("a.md", "A"), ("PUBLIC/b.md", "B")]);

        store.create_folder("PUBLIC").unwrap();
        store.move_note("a.md", "PUBLIC/a.md").unwrap();
        assert!(store.note_exists("PUBLIC/a.md"));
        assert!(!store.note_exists("a.md"));

        let err = store.move_note("PUBLIC/a.md", "PUBLIC/b.md");
        assert!(err.is_err());
    }

    #[test]
    fn create_folder_is_idempotent() {
        let (_dir, mut store) = vault_with(&[]);
        store.create_folder("PUBLIC").unwrap();
        store.create_folder("PUBLIC").unwrap();
        assert!(store.folder_exists("PUBLIC"));
    }
}
