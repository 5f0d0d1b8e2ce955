//! Durable key-value storage for user preferences.
//!
//! Stands in for the browser's local storage: the site persists exactly one
//! value, the preferred language, under `STORAGE_KEY`.

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Key under which the preferred language code is stored.
pub const STORAGE_KEY: &str = "aj-preferred-language";

/// A string key-value store that outlives the process.
pub trait PreferenceStore {
    /// Read a value; `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory preferences (tests, or when no file is configured).
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a value already stored.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept in a JSON object file.
///
/// The whole file is rewritten on every `set`. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw file contents, `None` when the file is missing or blank.
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            debug!("Preferences file {} not found, starting empty", self.path.display());
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read preferences file {}", self.path.display()))?;
        Ok(Some(raw).filter(|raw| !raw.trim().is_empty()))
    }

    fn parse(&self, raw: &str) -> Result<BTreeMap<String, String>> {
        serde_json::from_str(raw)
            .with_context(|| format!("Failed to parse preferences file {}", self.path.display()))
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        match self.read()? {
            Some(raw) => self.parse(&raw),
            None => Ok(BTreeMap::new()),
        }
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // A file that cannot be read is left alone; one that cannot be parsed is replaced
        let mut values = match self.read()? {
            Some(raw) => self.parse(&raw).unwrap_or_else(|e| {
                warn!("{:#}, overwriting it", e);
                BTreeMap::new()
            }),
            None => BTreeMap::new(),
        };
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(&values).context("Failed to serialize preferences")?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write preferences file {}", self.path.display()))?;

        debug!("Stored preference {} in {}", key, self.path.display());
        Ok(())
    }
}
