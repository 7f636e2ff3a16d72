use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use tracing::warn;

use crate::domain::models::{OptionRecord, RankedResult};
use crate::domain::ranker::SuggestionSettings;
use crate::domain::suggest::suggest;
use crate::integrations::metadata::NoteIndex;
use crate::integrations::vault::VaultIndex;
use crate::storage::config::RuntimeConfig;
use crate::ui::Tui;

pub struct App {
    pub running: bool,
    pub status_message: String,
    pub selected_index: usize,
    query: String,
    folder: String,
    settings: SuggestionSettings,
    results: Vec<RankedResult<OptionRecord>>,
    selection: Option<OptionRecord>,
    index: Box<dyn NoteIndex>,
}

impl App {
    pub fn new(
        index: Box<dyn NoteIndex>,
        folder: impl Into<String>,
        settings: SuggestionSettings,
    ) -> Self {
        let mut app = Self {
            running: true,
            status_message: String::new(),
            selected_index: 0,
            query: String::new(),
            folder: folder.into(),
            settings,
            results: Vec::new(),
            selection: None,
            index,
        };
        app.refresh_results();
        app.status_message = format!("{} notes", app.index.files().len());
        app
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn results(&self) -> &[RankedResult<OptionRecord>] {
        &self.results
    }

    pub fn selected_result(&self) -> Option<&RankedResult<OptionRecord>> {
        self.results.get(self.selected_index)
    }

    pub fn selection(&self) -> Option<&OptionRecord> {
        self.selection.as_ref()
    }

    pub fn into_selection(self) -> Option<OptionRecord> {
        self.selection
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refresh_results();
    }

    pub fn backspace_input(&mut self) {
        if self.query.pop().is_some() {
            self.refresh_results();
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh_results();
    }

    pub fn select_next(&mut self) {
        let len = self.results.len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    pub fn select_previous(&mut self) {
        let len = self.results.len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    pub fn submit(&mut self) -> Result<()> {
        let selected = self
            .selected_result()
            .map(|r| r.item.clone())
            .ok_or_else(|| anyhow!("no suggestion selected"))?;
        self.status_message = format!("Selected {}", selected.file_path);
        self.selection = Some(selected);
        self.running = false;
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.selection = None;
        self.running = false;
    }

    fn refresh_results(&mut self) {
        self.results = suggest(
            &self.folder,
            self.index.files(),
            &*self.index,
            &self.query,
            &self.settings,
        );
        self.selected_index = 0;
        self.status_message = format!("{} suggestions", self.results.len());
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub debug: bool,
    pub config_path: Option<PathBuf>,
    pub vault: Option<PathBuf>,
    pub folder: Option<String>,
    pub query: Option<String>,
    pub json: bool,
}

pub fn run(options: RunOptions) -> Result<()> {
    init_tracing(options.debug);

    let mut config = match &options.config_path {
        Some(path) => RuntimeConfig::load_from_path(path),
        None => RuntimeConfig::load(),
    }
    .context("load runtime config")?;
    if let Some(vault) = options.vault {
        config.vault.root = vault;
    }
    if let Some(folder) = options.folder {
        config.suggestions.folder = folder;
    }

    let index = VaultIndex::load(&config.vault.root).context("load vault index")?;
    let settings = config.suggestions.settings();

    if let Some(query) = options.query {
        let results = suggest(
            &config.suggestions.folder,
            index.files(),
            &index,
            &query,
            &settings,
        );
        return print_results(&results, options.json);
    }

    let mut app = App::new(Box::new(index), config.suggestions.folder, settings);
    {
        let mut tui = Tui::new()?;
        if let Err(err) = tui.run(&mut app) {
            warn!(error = ?err, "tui exited with error");
            return Err(err);
        }
    }

    if let Some(selection) = app.into_selection() {
        print_selection(&selection, options.json)?;
    }
    Ok(())
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { "atlink=debug" } else { "atlink=info" };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .try_init();
}

fn print_results(results: &[RankedResult<OptionRecord>], json: bool) -> Result<()> {
    if json {
        let body = serde_json::to_string_pretty(results).context("failed to serialize results")?;
        println!("{body}");
        return Ok(());
    }

    for result in results {
        println!("{}", result_line(&result.item));
    }
    Ok(())
}

fn print_selection(selection: &OptionRecord, json: bool) -> Result<()> {
    if json {
        let body =
            serde_json::to_string_pretty(selection).context("failed to serialize selection")?;
        println!("{body}");
    } else {
        println!("{}", result_line(selection));
    }
    Ok(())
}

pub fn result_line(option: &OptionRecord) -> String {
    match (&option.alias, option.is_create_new_option) {
        (_, true) => format!("{}\t{}", option.file_name, option.file_path),
        (Some(alias), false) => format!("{}\t{alias}", option.file_path),
        (None, false) => option.file_path.clone(),
    }
}
