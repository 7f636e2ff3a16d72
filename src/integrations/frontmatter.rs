use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::domain::models::{AliasField, NoteMetadata};

/// Returns the YAML between a leading `---` line and the next `---` or `...` line.
pub fn extract_frontmatter(content: &str) -> Option<String> {
    let mut lines = content.lines();
    if lines.next()?.trim_end() != "---" {
        return None;
    }

    let mut yaml_lines = Vec::new();
    for line in lines {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            return Some(yaml_lines.join("\n"));
        }
        yaml_lines.push(line);
    }

    None
}

/// Reads alias metadata from a note. Malformed front matter is treated as having no aliases.
pub fn parse_note_metadata(content: &str) -> NoteMetadata {
    let Some(yaml) = extract_frontmatter(content) else {
        return NoteMetadata::default();
    };

    match serde_yaml::from_str::<Value>(&yaml) {
        Ok(Value::Mapping(mapping)) => metadata_from_mapping(&mapping),
        Ok(_) => NoteMetadata::default(),
        Err(err) => {
            debug!(error = %err, "ignoring unparseable front matter");
            NoteMetadata::default()
        }
    }
}

pub fn metadata_from_mapping(mapping: &Mapping) -> NoteMetadata {
    let single = mapping
        .get("alias")
        .and_then(scalar_text)
        .filter(|alias| !alias.is_empty());
    if let Some(alias) = single {
        return NoteMetadata {
            aliases: Some(AliasField::Single(alias)),
        };
    }

    let aliases = match mapping.get("aliases") {
        Some(Value::String(list)) if !list.is_empty() => Some(AliasField::from_comma_list(list)),
        Some(Value::Sequence(items)) => Some(AliasField::Multiple(
            items.iter().filter_map(scalar_text).collect(),
        )),
        _ => None,
    };

    NoteMetadata { aliases }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unterminated_block_is_not_frontmatter() {
        assert_eq!(extract_frontmatter("---\nalias: x\nbody"), None);
    }

    #[test]
    fn block_must_start_on_first_line() {
        assert_eq!(extract_frontmatter("\n---\nalias: x\n---\n"), None);
    }

    #[test]
    fn dots_close_the_block() {
        assert_eq!(
            extract_frontmatter("---\nalias: x\n...\nbody").as_deref(),
            Some("alias: x")
        );
    }

    #[test]
    fn numeric_alias_is_stringified() {
        let meta = parse_note_metadata("---\nalias: 2024\n---\n");
        assert_eq!(meta.aliases, Some(AliasField::Single("2024".to_string())));
    }
}
