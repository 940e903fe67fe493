//! Builder for creating and configuring Assistant instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Assistant;
use crate::{
    config::AssistantConfig,
    db::Database,
    error::{AssistantError, Result},
    random::{RandomSource, ThreadRandom},
    store::{KeyValueStore, MemoryStore},
    tracker::{JobTracker, NoopTracker},
};

/// Builder for creating and configuring Assistant instances.
///
/// By default both the bookkeeping flags and tracked jobs live in a SQLite
/// database under the XDG data directory. Any piece can be replaced.
pub struct AssistantBuilder {
    database_path: Option<PathBuf>,
    in_memory: bool,
    config: AssistantConfig,
    store: Option<Box<dyn KeyValueStore>>,
    tracker: Option<Box<dyn JobTracker>>,
    random: Option<Box<dyn RandomSource>>,
}

impl AssistantBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            in_memory: false,
            config: AssistantConfig::default(),
            store: None,
            tracker: None,
            random: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/jobsy/jobsy.db` or `~/.local/share/jobsy/jobsy.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Keeps everything in memory: flags in a [`MemoryStore`] and completed
    /// jobs discarded, unless a store or tracker is supplied.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    pub fn with_config(mut self, config: AssistantConfig) -> Self {
        self.config = config;
        self
    }

    /// Uses `store` for the persistent bookkeeping flags.
    pub fn with_store(mut self, store: impl KeyValueStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Sends completed jobs to `tracker`.
    pub fn with_tracker(mut self, tracker: impl JobTracker + 'static) -> Self {
        self.tracker = Some(Box::new(tracker));
        self
    }

    /// Uses `random` to pick inactivity tips.
    pub fn with_random(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Some(Box::new(random));
        self
    }

    /// Builds the configured assistant.
    ///
    /// # Errors
    ///
    /// Returns `AssistantError::Configuration` or `AssistantError::InvalidInput`
    /// if the configuration is unusable
    /// Returns `AssistantError::FileSystem` if the database directory cannot be created
    /// Returns `AssistantError::Database` if database initialization fails
    pub fn build(self) -> Result<Assistant> {
        self.config.validate()?;

        let needs_database = !self.in_memory && (self.store.is_none() || self.tracker.is_none());
        let db_path = if needs_database {
            Some(self.resolve_database_path()?)
        } else {
            None
        };

        let store: Box<dyn KeyValueStore> = match (self.store, &db_path) {
            (Some(store), _) => store,
            (None, Some(path)) => Box::new(Database::new(path)?),
            (None, None) => Box::new(MemoryStore::new()),
        };

        let tracker: Box<dyn JobTracker> = match (self.tracker, &db_path) {
            (Some(tracker), _) => tracker,
            (None, Some(path)) => Box::new(Database::new(path)?),
            (None, None) => Box::new(NoopTracker),
        };

        let random = self.random.unwrap_or_else(|| Box::new(ThreadRandom));

        Ok(Assistant::new(self.config, store, tracker, random))
    }

    /// Opens the database the assistant would use, without building one.
    ///
    /// Used to inspect bookkeeping flags and tracked jobs directly.
    pub fn open_database(&self) -> Result<Database> {
        Database::new(self.resolve_database_path()?)
    }

    fn resolve_database_path(&self) -> Result<PathBuf> {
        let db_path = match &self.database_path {
            Some(path) => path.clone(),
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| AssistantError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Using database at {}", db_path.display());
        Ok(db_path)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    pub fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("jobsy")
            .place_data_file("jobsy.db")
            .map_err(|e| AssistantError::XdgDirectory(e.to_string()))
    }
}

impl Default for AssistantBuilder {
    fn default() -> Self {
        Self::new()
    }
}
