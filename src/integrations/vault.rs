use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tracing::{info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::domain::models::{NoteMetadata, SourceRecord, NOTE_EXTENSION};
use crate::integrations::frontmatter::parse_note_metadata;
use crate::integrations::metadata::{MetadataSource, NoteIndex};

/// In-memory snapshot of every Markdown note under a vault directory.
#[derive(Debug, Clone)]
pub struct VaultIndex {
    root: PathBuf,
    files: Vec<SourceRecord>,
    metadata: HashMap<String, NoteMetadata>,
}

impl VaultIndex {
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(anyhow!("vault directory not found: {}", root.display()));
        }

        let mut files = Vec::new();
        let mut metadata = HashMap::new();

        let walker = WalkDir::new(&root)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));
        for entry in walker {
            let entry = entry
                .with_context(|| format!("failed walking vault: {}", root.display()))?;
            if !entry.file_type().is_file() || !is_note(entry.path()) {
                continue;
            }

            let Some(record) = source_record(&root, entry.path()) else {
                continue;
            };

            match fs::read_to_string(entry.path()) {
                Ok(content) => {
                    metadata.insert(record.path.clone(), parse_note_metadata(&content));
                }
                Err(err) => {
                    warn!(path = %entry.path().display(), error = %err, "failed reading note");
                }
            }
            files.push(record);
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        info!(root = %root.display(), notes = files.len(), "loaded vault");

        Ok(Self {
            root,
            files,
            metadata,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl MetadataSource for VaultIndex {
    fn metadata(&self, file: &SourceRecord) -> Option<&NoteMetadata> {
        self.metadata.get(&file.path)
    }
}

impl NoteIndex for VaultIndex {
    fn files(&self) -> &[SourceRecord] {
        &self.files
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn is_note(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(NOTE_EXTENSION))
}

fn source_record(root: &Path, path: &Path) -> Option<SourceRecord> {
    let relative = path.strip_prefix(root).ok()?;
    let segments = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<Vec<_>>>()?;
    let basename = path.file_stem()?.to_str()?;
    Some(SourceRecord::new(segments.join("/"), basename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_record_uses_forward_slashes_and_stem() {
        let root = Path::new("vault");
        let record = source_record(root, &root.join("Projects").join("Plan.md"))
            .expect("record for nested note");
        assert_eq!(record.path, "Projects/Plan.md");
        assert_eq!(record.basename, "Plan");
    }

    #[test]
    fn note_extension_is_case_insensitive() {
        assert!(is_note(Path::new("a/b.MD")));
        assert!(!is_note(Path::new("a/b.txt")));
        assert!(!is_note(Path::new("a/md")));
    }
}
