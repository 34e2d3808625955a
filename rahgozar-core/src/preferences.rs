use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;

use crate::{CoreError, CoreResult};

/// The only key that survives a reload.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(CoreError::InvalidPreference {
                key: THEME_KEY.to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Key/value storage for user preferences.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> CoreResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> CoreResult<()>;

    /// Stored theme, or `Theme::System` when nothing was saved yet.
    fn theme(&self) -> CoreResult<Theme> {
        match self.get(THEME_KEY)? {
            Some(raw) => raw.parse(),
            None => Ok(Theme::default()),
        }
    }

    fn set_theme(&self, theme: Theme) -> CoreResult<()> {
        tracing::info!(theme = theme.as_str(), "theme preference saved");
        self.set(THEME_KEY, theme.as_str())
    }
}

/// Process-lifetime storage; nothing is written to disk.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences kept as a flat JSON object in a single file,
/// e.g. `{"theme":"dark"}`.
#[derive(Debug)]
pub struct JsonFilePreferences {
    path: PathBuf,
    guard: Mutex<()>,
}

impl JsonFilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> CoreResult<BTreeMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStore for JsonFilePreferences {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        let _lock = self.guard.lock().unwrap_or_else(|e| e.into_inner());
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        let _lock = self.guard.lock().unwrap_or_else(|e| e.into_inner());
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;
        Ok(())
    }
}
