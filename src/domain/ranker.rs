use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::domain::models::{MatchKey, OptionRecord, RankedResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionSettings {
    pub show_add_new_note: bool,
    pub add_new_note_directory: String,
}

/// Ranks `options` against `query`.
///
/// An empty query lists every option in reverse order. Anything else, whitespace included, is
/// fuzzy-matched against each option's alias and file name. Query characters are always literal.
pub fn rank(
    options: Vec<OptionRecord>,
    query: &str,
    settings: &SuggestionSettings,
) -> Vec<RankedResult<OptionRecord>> {
    if query.is_empty() {
        return options
            .into_iter()
            .rev()
            .map(RankedResult::zero_score)
            .collect();
    }

    let mut results = fuzzy_rank(options, query);
    if settings.show_add_new_note {
        merge_create_new(&mut results, query, &settings.add_new_note_directory);
    }
    results
}

struct KeyMatch {
    key: MatchKey,
    score: u32,
    indices: Vec<u32>,
}

struct KeyMatcher {
    matcher: Matcher,
    pattern: Pattern,
    buf: Vec<char>,
}

impl KeyMatcher {
    fn new(query: &str) -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
            pattern: Pattern::new(
                query,
                CaseMatching::Ignore,
                Normalization::Smart,
                AtomKind::Fuzzy,
            ),
            buf: Vec::new(),
        }
    }

    fn match_key(&mut self, key: MatchKey, text: &str) -> Option<KeyMatch> {
        let mut indices = Vec::new();
        let haystack = Utf32Str::new(text, &mut self.buf);
        let score = self
            .pattern
            .indices(haystack, &mut self.matcher, &mut indices)?;
        indices.sort_unstable();
        indices.dedup();
        Some(KeyMatch {
            key,
            score,
            indices,
        })
    }

    fn best_match(&mut self, option: &OptionRecord) -> Option<KeyMatch> {
        let alias = option
            .alias
            .as_deref()
            .and_then(|alias| self.match_key(MatchKey::Alias, alias));
        let file_name = self.match_key(MatchKey::FileName, &option.file_name);

        match (alias, file_name) {
            (Some(alias), Some(file_name)) if file_name.score > alias.score => Some(file_name),
            (Some(alias), _) => Some(alias),
            (None, file_name) => file_name,
        }
    }
}

fn fuzzy_rank(options: Vec<OptionRecord>, query: &str) -> Vec<RankedResult<OptionRecord>> {
    // A blank query has no characters to match.
    if query.trim().is_empty() {
        return Vec::new();
    }

    let mut key_matcher = KeyMatcher::new(query);

    let mut ranked = Vec::new();
    for option in options {
        if let Some(found) = key_matcher.best_match(&option) {
            ranked.push(RankedResult {
                item: option,
                score: Some(found.score),
                matched_key: Some(found.key),
                indices: found.indices,
            });
        }
    }

    // Stable: equal scores keep expansion order.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

fn merge_create_new(results: &mut Vec<RankedResult<OptionRecord>>, query: &str, directory: &str) {
    let lowered = query.to_lowercase();
    if results
        .iter()
        .any(|r| r.item.file_name.to_lowercase() == lowered)
    {
        return;
    }

    results.retain(|r| !r.item.is_create_new_option);
    results.push(RankedResult::unscored(OptionRecord::create_new(
        query, directory,
    )));
}
