use std::collections::HashMap;

use crate::domain::models::{NoteMetadata, SourceRecord};

/// Read-only access to a note's front-matter metadata.
pub trait MetadataSource {
    fn metadata(&self, file: &SourceRecord) -> Option<&NoteMetadata>;
}

/// A snapshot of the host's notes together with their metadata.
pub trait NoteIndex: MetadataSource + Send {
    fn files(&self) -> &[SourceRecord];
}

#[derive(Debug, Clone, Default)]
pub struct StaticIndex {
    files: Vec<SourceRecord>,
    metadata: HashMap<String, NoteMetadata>,
}

impl StaticIndex {
    pub fn new(files: Vec<SourceRecord>) -> Self {
        Self {
            files,
            metadata: HashMap::new(),
        }
    }

    pub fn with_metadata(mut self, path: impl Into<String>, metadata: NoteMetadata) -> Self {
        self.metadata.insert(path.into(), metadata);
        self
    }
}

impl MetadataSource for StaticIndex {
    fn metadata(&self, file: &SourceRecord) -> Option<&NoteMetadata> {
        self.metadata.get(&file.path)
    }
}

impl NoteIndex for StaticIndex {
    fn files(&self) -> &[SourceRecord] {
        &self.files
    }
}
