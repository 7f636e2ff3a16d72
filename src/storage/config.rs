use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use crate::domain::ranker::SuggestionSettings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultConfig {
    pub root: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionConfig {
    pub folder: String,
    pub show_add_new_note: bool,
    pub add_new_note_directory: String,
}

impl SuggestionConfig {
    pub fn settings(&self) -> SuggestionSettings {
        SuggestionSettings {
            show_add_new_note: self.show_add_new_note,
            add_new_note_directory: self.add_new_note_directory.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub vault: VaultConfig,
    pub suggestions: SuggestionConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            vault: VaultConfig {
                root: PathBuf::from("."),
            },
            suggestions: SuggestionConfig::default(),
        }
    }
}

impl RuntimeConfig {
    pub fn default_path() -> PathBuf {
        env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".config/atlink/config.toml")
    }

    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::default_path())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut config = Self::default();
        config.merge_file(path)?;
        config.merge_env()?;
        Ok(config)
    }

    fn merge_file(&mut self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed reading config file: {}", path.display()))?;
        self.merge_toml_text(&content)
            .with_context(|| format!("failed parsing config TOML: {}", path.display()))
    }

    fn merge_toml_text(&mut self, content: &str) -> Result<()> {
        let mut section = String::new();

        for (idx, raw_line) in content.lines().enumerate() {
            let line = strip_comment(raw_line).trim();
            if line.is_empty() {
                continue;
            }

            if let Some(header) = line.strip_prefix('[') {
                let name = header
                    .strip_suffix(']')
                    .ok_or_else(|| anyhow!("line {}: invalid section syntax", idx + 1))?;
                section = name.trim().to_string();
                continue;
            }

            let (key, value_raw) = line
                .split_once('=')
                .ok_or_else(|| anyhow!("line {}: expected key=value", idx + 1))?;
            let value = parse_value(value_raw.trim())
                .with_context(|| format!("line {}: invalid value", idx + 1))?;

            self.apply_file_value(&section, key.trim(), value)
                .with_context(|| format!("line {}: invalid {section}.{}", idx + 1, key.trim()))?;
        }

        Ok(())
    }

    fn apply_file_value(&mut self, section: &str, key: &str, value: TomlValue) -> Result<()> {
        match (section, key) {
            ("vault", "root") => {
                self.vault.root = PathBuf::from(value.into_string()?);
            }
            ("suggestions", "folder") => {
                self.suggestions.folder = value.into_string()?;
            }
            ("suggestions", "show_add_new_note") => {
                self.suggestions.show_add_new_note = value.as_bool()?;
            }
            ("suggestions", "add_new_note_directory") => {
                self.suggestions.add_new_note_directory = value.into_string()?;
            }
            _ => {}
        }

        Ok(())
    }

    fn merge_env(&mut self) -> Result<()> {
        if let Ok(root) = env::var("ATLINK_VAULT") {
            self.vault.root = PathBuf::from(root);
        }
        if let Ok(folder) = env::var("ATLINK_FOLDER") {
            self.suggestions.folder = folder;
        }
        if let Ok(flag) = env::var("ATLINK_SHOW_ADD_NEW_NOTE") {
            self.suggestions.show_add_new_note =
                parse_bool(&flag).with_context(|| "invalid ATLINK_SHOW_ADD_NEW_NOTE".to_string())?;
        }
        if let Ok(directory) = env::var("ATLINK_ADD_NEW_NOTE_DIRECTORY") {
            self.suggestions.add_new_note_directory = directory;
        }

        Ok(())
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(anyhow!("invalid boolean '{value}' (expected true or false)")),
    }
}

fn strip_comment(line: &str) -> &str {
    let mut in_quotes = false;
    for (idx, ch) in line.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            '#' if !in_quotes => return &line[..idx],
            _ => {}
        }
    }
    line
}

#[derive(Debug, Clone)]
enum TomlValue {
    String(String),
    Bool(bool),
}

impl TomlValue {
    fn into_string(self) -> Result<String> {
        match self {
            Self::String(value) => Ok(value),
            Self::Bool(_) => Err(anyhow!("expected string value")),
        }
    }

    fn as_bool(&self) -> Result<bool> {
        match self {
            Self::Bool(value) => Ok(*value),
            Self::String(_) => Err(anyhow!("expected boolean value")),
        }
    }
}

fn parse_value(value: &str) -> Result<TomlValue> {
    let trimmed = value.trim();
    if let Some(rest) = trimmed.strip_prefix('"') {
        let inner = rest
            .strip_suffix('"')
            .ok_or_else(|| anyhow!("unterminated string"))?;
        return Ok(TomlValue::String(inner.to_string()));
    }

    match trimmed {
        "true" => Ok(TomlValue::Bool(true)),
        "false" => Ok(TomlValue::Bool(false)),
        _ => Ok(TomlValue::String(trimmed.to_string())),
    }
}
