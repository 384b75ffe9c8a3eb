//! Light/dark theme preference
//!
//! Read once at startup, written back on every apply.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Anything other than `light` reads as dark
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle button label
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "🌞",
            Theme::Dark => "🌙",
        }
    }

    /// Whether the document root carries the `light` class
    pub fn root_has_light_class(&self) -> bool {
        *self == Theme::Light
    }
}

/// Current theme plus the store it persists to
pub struct ThemeController<S: KeyValueStore> {
    store: S,
    theme: Theme,
}

impl<S: KeyValueStore> ThemeController<S> {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "theme";

    /// Read the saved theme (dark when absent) and persist it back
    ///
    /// A failed write-back is logged and the controller is kept.
    pub fn load(store: S) -> Result<Self> {
        let theme = store
            .get(Self::STORAGE_KEY)?
            .map(|s| Theme::parse(&s))
            .unwrap_or_default();
        let mut controller = Self { store, theme };
        if let Err(e) = controller.apply(theme) {
            log::warn!("Could not save theme: {}", e);
        }
        log::info!("Theme loaded: {}", theme.as_str());
        Ok(controller)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch to `theme` and persist it
    pub fn apply(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        self.store.set(Self::STORAGE_KEY, theme.as_str())
    }

    /// Flip light/dark, returning the new theme
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        self.apply(next)?;
        Ok(next)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FxError;
    use crate::storage::MemoryStore;

    /// Reads a fixed value, rejects every write
    struct ReadOnlyStore(Option<String>);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(self.0.clone())
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(FxError::Storage("QuotaExceededError".to_string()))
        }
    }

    #[test]
    fn test_load_survives_failed_write() {
        let controller = ThemeController::load(ReadOnlyStore(Some("light".to_string()))).unwrap();
        assert_eq!(controller.theme(), Theme::Light);

        let mut controller = ThemeController::load(ReadOnlyStore(None)).unwrap();
        assert_eq!(controller.theme(), Theme::Dark);
        assert!(controller.toggle().is_err());
        assert_eq!(controller.theme(), Theme::Light);
    }

    #[test]
    fn test_defaults_to_dark_and_persists() {
        let controller = ThemeController::load(MemoryStore::new()).unwrap();
        assert_eq!(controller.theme(), Theme::Dark);
        let store = controller.into_store();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_persists_and_reloads() {
        let mut controller = ThemeController::load(MemoryStore::new()).unwrap();
        assert_eq!(controller.toggle().unwrap(), Theme::Light);

        // Fresh page load reads the saved value without another toggle
        let store = controller.into_store();
        let reloaded = ThemeController::load(store).unwrap();
        assert_eq!(reloaded.theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_twice_returns_to_dark() {
        let mut store = MemoryStore::new();
        let mut controller = ThemeController::load(&mut store).unwrap();
        controller.toggle().unwrap();
        controller.toggle().unwrap();
        assert_eq!(controller.theme(), Theme::Dark);
        drop(controller);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_unknown_value_reads_dark() {
        let mut store = MemoryStore::new();
        store.set("theme", "sepia").unwrap();
        let controller = ThemeController::load(store).unwrap();
        assert_eq!(controller.theme(), Theme::Dark);
    }

    #[test]
    fn test_icons_and_class() {
        assert_eq!(Theme::Light.icon(), "🌞");
        assert_eq!(Theme::Dark.icon(), "🌙");
        assert!(Theme::Light.root_has_light_class());
        assert!(!Theme::Dark.root_has_light_class());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        let t: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(t, Theme::Dark);
    }
}
