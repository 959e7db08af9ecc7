//! Persisted home page
//!
//! A single `home_url` slot that survives restarts. It is read once when the
//! shell starts and overwritten every time the user marks a page as home.

use crate::error::{Result, ShellError};
use serde::{Deserialize, Serialize};
use std::{fs, io, path::{Path, PathBuf}};

/// Page loaded at startup when no home URL has been saved
pub const DEFAULT_HOME_URL: &str = "https://www.google.com";

/// Storage for the home URL
pub trait HomeStore {
    /// Saved home URL, or `None` if the user never set one
    fn get(&self) -> Result<Option<String>>;

    /// Replace the saved home URL
    fn set(&mut self, url: &str) -> Result<()>;
}

/// Home store kept only for the lifetime of the process
#[derive(Debug, Default, Clone)]
pub struct MemoryHomeStore {
    home_url: Option<String>,
}

impl MemoryHomeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_home(url: impl Into<String>) -> Self {
        Self { home_url: Some(url.into()) }
    }
}

impl HomeStore for MemoryHomeStore {
    fn get(&self) -> Result<Option<String>> {
        Ok(self.home_url.clone())
    }

    fn set(&mut self, url: &str) -> Result<()> {
        self.home_url = Some(url.to_string());
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    home_url: Option<String>,
}

/// Home store backed by a JSON preferences file
#[derive(Debug, Clone)]
pub struct FileHomeStore {
    path: PathBuf,
}

impl FileHomeStore {
    pub const FILE_NAME: &'static str = "prefs.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the per-user data directory, e.g. `~/.local/share/browser-shell/prefs.json`
    pub fn default_location() -> Option<Self> {
        let dirs = directories::ProjectDirs::from("", "", "browser-shell")?;
        Some(Self::new(dirs.data_dir().join(Self::FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persistence_error(&self, source: io::Error) -> ShellError {
        ShellError::Persistence { path: self.path.clone(), source }
    }

    fn read(&self) -> Result<Preferences> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Preferences::default()),
            Err(e) => return Err(self.persistence_error(e)),
        };

        serde_json::from_str(&contents)
            .map_err(|e| ShellError::InvalidPreferences { path: self.path.clone(), reason: e.to_string() })
    }
}

impl HomeStore for FileHomeStore {
    fn get(&self) -> Result<Option<String>> {
        Ok(self.read()?.home_url)
    }

    fn set(&mut self, url: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.persistence_error(e))?;
        }

        let prefs = Preferences { home_url: Some(url.to_string()) };
        let contents = serde_json::to_string_pretty(&prefs)?;
        fs::write(&self.path, contents).map_err(|e| self.persistence_error(e))?;

        log::debug!("Saved home URL to {}", self.path.display());
        Ok(())
    }
}
