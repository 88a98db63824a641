use crate::data::{AppSettings, InfoPanelData, Persistable, PromotedApp};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Combined struct for writing config.yaml in one pass.
/// `AppSettings` and `InfoPanelData` both read config.yaml independently,
/// but writing them separately would overwrite each other, so we combine them here.
#[derive(Serialize, Deserialize, Default, Debug)]
struct ConfigFile {
    settings: AppSettings,
    apps: Vec<PromotedApp>,
    usage: Vec<String>,
}

impl Persistable for ConfigFile {
    fn filename() -> &'static str {
        "config.yaml"
    }
}

pub fn run() -> Result<()> {
    let dir = crate::data::persistence::get_data_dir()?;
    run_in_dir(&dir)?;
    log::info!("wrote default config to {}", dir.display());
    println!("Data files initialized successfully.");
    Ok(())
}

/// Writes the default config.yaml into `dir`. Exposed for unit testing.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    let info = InfoPanelData::default();
    let config = ConfigFile {
        settings: AppSettings::default(),
        apps: info.apps,
        usage: info.usage,
    };
    config.save_to(dir)
}
