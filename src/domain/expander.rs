use crate::domain::models::{AliasField, OptionRecord, SourceRecord};
use crate::integrations::metadata::MetadataSource;

pub struct OptionExpander<'a, M: MetadataSource + ?Sized> {
    metadata: &'a M,
}

impl<'a, M: MetadataSource + ?Sized> OptionExpander<'a, M> {
    pub fn new(metadata: &'a M) -> Self {
        Self { metadata }
    }

    /// Turns every file under `folder` into one option per alias plus a bare option.
    ///
    /// `folder` is a literal prefix of the path, so `"Notes"` also admits `"NotesArchive/x.md"`.
    pub fn expand(&self, folder: &str, files: &[SourceRecord]) -> Vec<OptionRecord> {
        let mut options = Vec::new();

        for file in files.iter().filter(|f| f.path.starts_with(folder)) {
            let aliases = self.metadata.metadata(file).and_then(|m| m.aliases.as_ref());
            match aliases {
                Some(AliasField::Single(alias)) => {
                    options.push(OptionRecord::for_file(file, Some(alias.clone())));
                }
                Some(AliasField::Multiple(aliases)) => {
                    options.extend(
                        aliases
                            .iter()
                            .map(|alias| OptionRecord::for_file(file, Some(alias.clone()))),
                    );
                }
                None => {}
            }
            options.push(OptionRecord::for_file(file, None));
        }

        options
    }
}
