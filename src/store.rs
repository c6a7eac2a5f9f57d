use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::models::SettingsMap;

/// Settings persisted between refresh passes.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsStore {
    pub tables: SettingsMap,
    pub last_refreshed: Option<DateTime<Utc>>,
}

impl SettingsStore {
    pub fn save_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".config").join("admin-settings").join("settings.json"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::save_path()?;
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let store: SettingsStore = serde_json::from_str(&content)?;
            Ok(store)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::save_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    pub fn mark_refreshed(&mut self) {
        self.last_refreshed = Some(Utc::now());
    }
}
