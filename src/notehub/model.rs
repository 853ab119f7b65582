use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Header field marking a note as requested for publication.
pub const FIELD_IS_PUBLISHED: &str = "isPublished";
/// Header field stamped with the publication date.
pub const FIELD_PUBLISH_DATE: &str = "publishDate";

/// A single frontmatter value. Scalars that are neither strings nor
/// booleans are coerced to their string form at the store boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Str(String),
    List(Vec<String>),
}

impl FieldValue {
    /// A field counts as empty when it is a list with no entries.
    pub fn is_empty_list(&self) -> bool {
        matches!(self, FieldValue::List(items) if items.is_empty())
    }
}

/// Structured metadata block of a note, preserving field order as
/// written in the source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Header {
    fields: IndexMap<String, FieldValue>,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// Remove a field if present; absent fields are not an error.
    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.shift_remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.fields.iter()
    }

    /// Whether the note asks to be published: `isPublished` equal to the
    /// string `"yes"`, the boolean `true`, or the string `"true"`. Any
    /// other value (or an absent field) means no.
    pub fn publish_requested(&self) -> bool {
        match self.get(FIELD_IS_PUBLISHED) {
            Some(FieldValue::Bool(true)) => true,
            Some(FieldValue::Str(s)) => s == "yes" || s == "true",
            _ => false,
        }
    }

    /// A required field is missing when absent or an empty list.
    pub fn field_missing(&self, name: &str) -> bool {
        match self.get(name) {
            None => true,
            Some(value) => value.is_empty_list(),
        }
    }
}

impl FromIterator<(String, FieldValue)> for Header {
    fn from_iter<T: IntoIterator<Item = (String, FieldValue)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// A markdown note as seen by the scanner: a vault-relative path, its
/// file name, and the parsed header (absent when the file carries no
/// frontmatter block).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Vault-relative path, `/`-separated (e.g. `Notes/roadmap.md`).
    pub path: String,
    /// File name with extension (e.g. `roadmap.md`).
    pub name: String,
    /// File name without extension (e.g. `roadmap`).
    pub basename: String,
    pub header: Option<Header>,
}

impl Note {
    pub fn new(path: impl Into<String>, header: Option<Header>) -> Self {
        let path = path.into();
        let name = path
            .rsplit('/')
            .next()
            .unwrap_or(path.as_str())
            .to_string();
        let basename = match name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem.to_string(),
            _ => name.clone(),
        };
        Self {
            path,
            name,
            basename,
            header,
        }
    }

    /// Whether this note lives under the given folder (prefix match on
    /// `folder + "/"`).
    pub fn is_under(&self, folder: &str) -> bool {
        self.path.starts_with(&format!("{}/", folder))
    }
}

/// Outcome of evaluating one publish-requested note against the
/// required-field list. Ephemeral: lives for one scan-and-confirm cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eligibility {
    pub path: String,
    pub basename: String,
    pub valid: bool,
    pub errors: Vec<String>,
}
