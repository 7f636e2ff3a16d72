use serde::Serialize;

pub const CREATE_NEW_NOTE_LABEL: &str = "Create new note";
pub const NOTE_EXTENSION: &str = "md";

/// A note known to the host index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    pub path: String,
    pub basename: String,
}

impl SourceRecord {
    pub fn new(path: impl Into<String>, basename: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            basename: basename.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasField {
    Single(String),
    Multiple(Vec<String>),
}

impl AliasField {
    /// Splits a comma-separated alias list, trimming each piece. Empty pieces are kept.
    pub fn from_comma_list(value: &str) -> Self {
        Self::Multiple(value.split(',').map(|s| s.trim().to_string()).collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteMetadata {
    pub aliases: Option<AliasField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionRecord {
    pub file_name: String,
    pub file_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub is_create_new_option: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl OptionRecord {
    pub fn for_file(file: &SourceRecord, alias: Option<String>) -> Self {
        Self {
            file_name: file.basename.clone(),
            file_path: file.path.clone(),
            alias,
            is_create_new_option: false,
            query: None,
        }
    }

    pub fn create_new(query: &str, directory: &str) -> Self {
        let separator = if directory.is_empty() { "" } else { "/" };
        Self {
            file_name: CREATE_NEW_NOTE_LABEL.to_string(),
            file_path: format!(
                "{}{separator}{}.{NOTE_EXTENSION}",
                directory.trim(),
                query.trim()
            ),
            alias: None,
            is_create_new_option: true,
            query: Some(query.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchKey {
    Alias,
    FileName,
}

/// One ranked suggestion, with the metadata a renderer needs to highlight the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedResult<T> {
    pub item: T,
    pub score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_key: Option<MatchKey>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub indices: Vec<u32>,
}

impl<T> RankedResult<T> {
    pub fn zero_score(item: T) -> Self {
        Self {
            item,
            score: Some(0),
            matched_key: None,
            indices: Vec::new(),
        }
    }

    pub fn unscored(item: T) -> Self {
        Self {
            item,
            score: None,
            matched_key: None,
            indices: Vec::new(),
        }
    }
}
