//! Best-effort preference storage and the display theme toggle.
//!
//! Storage may be unavailable (private browsing, read-only disk). Callers treat every failure as
//! a no-op: [`ThemeToggle`] logs it and keeps working in memory.

use df_domain::constants::THEME_KEY;
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, warn};

#[df_derive::df_error]
pub enum PreferencesError {
    #[error("Preference storage is unavailable{}", format_context(.context))]
    Unavailable { context: Option<Cow<'static, str>> },

    #[error("Preference file error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Preference file is malformed{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

/// Key/value capability scoped to one origin.
pub trait Preferences: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, PreferencesError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PreferencesError>;
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RwLock<FxHashMap<String, String>>,
}

impl Preferences for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferencesError> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferencesError> {
        self.values.write().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store that refuses every access.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledPreferences;

impl Preferences for DisabledPreferences {
    fn get(&self, _key: &str) -> Result<Option<String>, PreferencesError> {
        Err(PreferencesError::Unavailable { context: None })
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PreferencesError> {
        Err(PreferencesError::Unavailable { context: None })
    }
}

/// JSON object on disk, rewritten on every `set`.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    lock: RwLock<()>,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: RwLock::new(()) }
    }

    fn read_all(&self) -> Result<FxHashMap<String, String>, PreferencesError> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(FxHashMap::default()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(FxHashMap::default()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Preferences for FilePreferences {
    fn get(&self, key: &str) -> Result<Option<String>, PreferencesError> {
        let _guard = self.lock.read();
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferencesError> {
        let _guard = self.lock.write();
        let mut values = self.read_all()?;
        values.insert(key.to_owned(), value.to_owned());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context(format!("creating {}", parent.display()))?;
        }
        let bytes = serde_json::to_vec_pretty(&values)?;
        fs::write(&self.path, bytes).context(format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl From<&str> for Theme {
    fn from(s: &str) -> Self {
        if s == "dark" { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Light/dark switch persisted under the `df-theme` key.
#[derive(Debug)]
pub struct ThemeToggle<P> {
    prefs: P,
    theme: Theme,
}

impl<P: Preferences> ThemeToggle<P> {
    /// Restores the saved theme, `light` when nothing is saved or storage fails.
    pub fn new(prefs: P) -> Self {
        let theme = match prefs.get(THEME_KEY) {
            Ok(Some(saved)) if !saved.is_empty() => Theme::from(saved.as_str()),
            Ok(_) => Theme::Light,
            Err(e) => {
                debug!(error = %e, "Theme preference unreadable, using light");
                Theme::Light
            },
        };
        Self { prefs, theme }
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// `aria-pressed` state of the toggle controls.
    #[must_use]
    pub fn aria_pressed(&self) -> bool {
        self.theme == Theme::Light
    }

    /// Flips the theme and saves it. A failed write keeps the new theme in memory.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(e) = self.prefs.set(THEME_KEY, self.theme.as_str()) {
            warn!(error = %e, "Theme preference not saved");
        }
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_to_light_without_saved_value() {
        let toggle = ThemeToggle::new(MemoryPreferences::default());
        assert_eq!(toggle.theme(), Theme::Light);
        assert!(toggle.aria_pressed());
    }

    #[test]
    fn test_restores_saved_theme() -> Result<(), PreferencesError> {
        let prefs = MemoryPreferences::default();
        prefs.set(THEME_KEY, "dark")?;

        let toggle = ThemeToggle::new(prefs);
        assert_eq!(toggle.theme(), Theme::Dark);
        assert!(!toggle.aria_pressed());
        Ok(())
    }

    #[test]
    fn test_toggle_persists() -> Result<(), PreferencesError> {
        let mut toggle = ThemeToggle::new(MemoryPreferences::default());
        assert_eq!(toggle.toggle(), Theme::Dark);
        assert_eq!(toggle.prefs.get(THEME_KEY)?.as_deref(), Some("dark"));
        assert_eq!(toggle.toggle(), Theme::Light);
        assert_eq!(toggle.prefs.get(THEME_KEY)?.as_deref(), Some("light"));
        Ok(())
    }

    #[test]
    fn test_unavailable_storage_is_tolerated() {
        let mut toggle = ThemeToggle::new(DisabledPreferences);
        assert_eq!(toggle.theme(), Theme::Light);
        assert_eq!(toggle.toggle(), Theme::Dark);
        assert_eq!(toggle.theme(), Theme::Dark);
    }

    #[test]
    fn test_file_preferences_survive_reopen() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("state").join("prefs.json");

        let mut toggle = ThemeToggle::new(FilePreferences::new(&path));
        toggle.toggle();

        let reopened = ThemeToggle::new(FilePreferences::new(&path));
        assert_eq!(reopened.theme(), Theme::Dark);
        Ok(())
    }

    #[test]
    fn test_malformed_file_reads_as_error() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("prefs.json");
        fs::write(&path, b"not json")?;

        let prefs = FilePreferences::new(&path);
        assert!(matches!(prefs.get(THEME_KEY), Err(PreferencesError::Decode { .. })));
        assert_eq!(ThemeToggle::new(prefs).theme(), Theme::Light);
        Ok(())
    }
}
