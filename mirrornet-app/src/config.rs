use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use shared::settings::Settings;

fn settings_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("io", "mirrornet", "mirrornet")?;
    Some(dirs.config_dir().join("settings.json"))
}

/// A missing or unreadable settings file is not an error, the defaults
/// cover a fresh install.
pub fn load_settings() -> Settings {
    match settings_path() {
        Some(path) => load_from(&path),
        None => {
            log::warn!("no config directory on this platform, using defaults");
            Settings::default()
        }
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let path = settings_path().ok_or_else(|| anyhow!("no config directory on this platform"))?;
    save_to(&path, settings)
}

fn load_from(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
            log::warn!("settings at {} did not parse: {e}", path.display());
            Settings::default()
        }),
        Err(_) => Settings::default(),
    }
}

fn save_to(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("failed to create config dir")?;
    }
    let json = serde_json::to_string_pretty(settings).context("failed to encode settings")?;
    std::fs::write(path, json).context("failed to write settings")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_survive_a_disk_round_trip() {
        let path = std::env::temp_dir().join("mirrornet-settings-roundtrip.json");
        let settings = Settings {
            storage_quota_gb: 120,
            bootstrap_nodes: vec!["node.example:9999".into()],
            ..Settings::default()
        };

        save_to(&path, &settings).unwrap();
        assert_eq!(load_from(&path), settings);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("mirrornet-settings-missing.json");
        std::fs::remove_file(&path).ok();
        assert_eq!(load_from(&path), Settings::default());
    }

    #[test]
    fn garbage_on_disk_yields_defaults() {
        let path = std::env::temp_dir().join("mirrornet-settings-garbage.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_from(&path), Settings::default());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn stale_fields_are_tolerated() {
        let path = std::env::temp_dir().join("mirrornet-settings-stale.json");
        std::fs::write(&path, r#"{"storage_quota_gb": 75, "dropped_option": true}"#).unwrap();
        let loaded = load_from(&path);
        assert_eq!(loaded.storage_quota_gb, 75);
        assert_eq!(loaded.listen_port, Settings::default().listen_port);
        std::fs::remove_file(&path).ok();
    }
}
