use tracing::debug;

use crate::domain::expander::OptionExpander;
use crate::domain::models::{OptionRecord, RankedResult, SourceRecord};
use crate::domain::ranker::{rank, SuggestionSettings};
use crate::integrations::metadata::MetadataSource;

/// Builds the suggestion list for one query against a snapshot of the host's notes.
pub fn suggest<M: MetadataSource + ?Sized>(
    folder: &str,
    files: &[SourceRecord],
    metadata: &M,
    query: &str,
    settings: &SuggestionSettings,
) -> Vec<RankedResult<OptionRecord>> {
    let options = OptionExpander::new(metadata).expand(folder, files);
    let option_count = options.len();
    let results = rank(options, query, settings);
    debug!(
        folder,
        query,
        options = option_count,
        results = results.len(),
        "computed suggestions"
    );
    results
}
