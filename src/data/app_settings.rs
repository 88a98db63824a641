use crate::data::persistence::{get_data_dir, Persistable};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;

pub const DEFAULT_MIN_YEAR: i32 = 1800;
pub const DEFAULT_MAX_YEAR: i32 = 2300;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// First year offered by the year picker.
    pub min_year: i32,
    /// Last year offered by the year picker.
    pub max_year: i32,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
        }
    }
}

/// Wrapper that reads the `settings` key from config.yaml.
/// `InfoPanelData` reads the same file for its `apps` and `usage` keys.
#[derive(Serialize, Deserialize, Default, Debug)]
struct SettingsWrapper {
    #[serde(default)]
    settings: AppSettings,
}

impl Persistable for SettingsWrapper {
    fn filename() -> &'static str {
        "config.yaml"
    }
}

impl AppSettings {
    pub fn load() -> Result<Self> {
        Self::load_from(&get_data_dir()?)
    }

    pub fn load_from(dir: &Path) -> Result<Self> {
        let settings = SettingsWrapper::load_from(dir)?.settings;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_year > self.max_year {
            bail!(
                "invalid year range in settings: min_year {} is after max_year {}",
                self.min_year,
                self.max_year
            );
        }
        Ok(())
    }

    pub fn year_range(&self) -> RangeInclusive<i32> {
        self.min_year..=self.max_year
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_app_settings_default_values() {
        let settings = AppSettings::default();
        assert_eq!(settings.min_year, 1800);
        assert_eq!(settings.max_year, 2300);
        assert_eq!(settings.year_range(), 1800..=2300);
    }

    #[test]
    fn test_settings_wrapper_missing_key_uses_default() {
        // When config.yaml has no 'settings' key, default values kick in
        let yaml = "apps: []";
        let wrapper: SettingsWrapper = serde_norway::from_str(yaml).unwrap();
        assert_eq!(wrapper.settings, AppSettings::default());
    }

    #[test]
    fn test_settings_partial_key_keeps_other_default() {
        let yaml = "settings:\n  max_year: 2100\n";
        let wrapper: SettingsWrapper = serde_norway::from_str(yaml).unwrap();
        assert_eq!(wrapper.settings.min_year, 1800);
        assert_eq!(wrapper.settings.max_year, 2100);
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let settings = AppSettings {
            min_year: 2000,
            max_year: 1999,
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(AppSettings::load_from(tmp.path()).unwrap(), AppSettings::default());
    }

    #[test]
    fn test_load_from_rejects_inverted_range_on_disk() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("config.yaml"),
            "settings:\n  min_year: 2300\n  max_year: 1800\n",
        )
        .unwrap();
        assert!(AppSettings::load_from(tmp.path()).is_err());
    }
}
