//! Per-run state shared by the commands

use crate::breeds;
use chapiz_cli::output::OutputFormat;
use chapiz_core::config::{Config, ConfigSchema};
use chapiz_search::{FileStore, Highlighter, RankOptions, RecentSelections, SuggestOptions};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

/// Bold underline, used for highlights when writing to a terminal
const TERMINAL_OPEN: &str = "\u{1b}[1;4m";
const TERMINAL_CLOSE: &str = "\u{1b}[0m";

/// Command-line overrides applied on top of the configuration file
pub struct Options<'a> {
    pub config: Option<&'a Path>,
    pub breeds: Option<&'a Path>,
    pub namespace: Option<String>,
    pub storage_dir: Option<PathBuf>,
    pub format: OutputFormat,
}

/// Loaded configuration, breed list and recent-selection store
pub struct App {
    pub config: Config,
    pub breeds: Vec<chapiz_search::Candidate>,
    pub recent: RecentSelections<FileStore>,
    pub format: OutputFormat,
}

impl App {
    pub fn load(options: Options<'_>) -> anyhow::Result<Self> {
        let mut config = Config::load(options.config)?;

        if let Some(namespace) = options.namespace {
            config.schema.recent.namespace = namespace;
        }
        if let Some(dir) = options.storage_dir {
            config.schema.recent.storage_dir = Some(dir);
        }
        config.schema.validate()?;

        let breeds = match options.breeds {
            Some(path) => breeds::load_file(path)?,
            None => breeds::builtin()?,
        };

        let store = match &config.schema.recent.storage_dir {
            Some(dir) => FileStore::new(dir),
            None => FileStore::open_default(),
        };
        let recent = RecentSelections::new(store, config.schema.recent.namespace.clone())
            .with_max_items(config.schema.recent.max_items);

        tracing::debug!(
            breeds = breeds.len(),
            namespace = recent.namespace(),
            storage = %recent.store().dir().display(),
            "App loaded"
        );

        Ok(Self {
            config,
            breeds,
            recent,
            format: options.format,
        })
    }

    pub fn schema(&self) -> &ConfigSchema {
        &self.config.schema
    }

    /// Highlight markers for the current output
    ///
    /// Text output to a terminal uses ANSI styling; everything else uses the
    /// configured markers.
    pub fn highlighter(&self) -> Highlighter {
        if self.format == OutputFormat::Text && std::io::stdout().is_terminal() {
            Highlighter::new(TERMINAL_OPEN, TERMINAL_CLOSE)
        } else {
            let markers = &self.schema().highlight;
            Highlighter::new(markers.open.clone(), markers.close.clone())
        }
    }

    pub fn rank_options(&self) -> RankOptions {
        let search = &self.schema().search;
        RankOptions::default()
            .with_limit(search.limit)
            .with_min_score(search.min_score)
            .with_search_fields(search.search_fields.iter().cloned())
            .with_highlighter(self.highlighter())
    }

    pub fn suggest_options(&self) -> SuggestOptions {
        SuggestOptions::from(self.rank_options())
            .with_include_recent(self.schema().search.include_recent)
    }

    pub fn find_breed(&self, id: &str) -> Option<&chapiz_search::Candidate> {
        self.breeds.iter().find(|b| b.id == id)
    }
}
