use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use lexifind_config::Config;
use serde::{Deserialize, Serialize};

pub const MAIN_PROFILE: &str = "main";

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// JSON profiles under `<root>/profiles/<name>.json`
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<user config dir>/LexiFind`
    pub fn default_location() -> anyhow::Result<Self> {
        let base = dirs::config_dir().context("no user config directory on this platform")?;
        Ok(Self::new(base.join("LexiFind")))
    }

    pub fn profiles_dir(&self) -> PathBuf {
        self.root.join("profiles")
    }

    fn profile_path(&self, name: &str) -> PathBuf {
        self.profiles_dir().join(format!("{name}.json"))
    }

    /// Create the profile folder and a default main profile if missing
    pub fn init(&self) -> anyhow::Result<()> {
        fs::create_dir_all(self.profiles_dir())
            .with_context(|| format!("failed creating {}", self.profiles_dir().display()))?;

        let main_profile = self.profile_path(MAIN_PROFILE);
        if !main_profile.exists() {
            let profile = Profile {
                name: MAIN_PROFILE.into(),
                value: Config::default(),
            };
            fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
            tracing::info!("Created main profile at {}", main_profile.display());
        }

        Ok(())
    }

    /// Load a profile by name, falling back to main and then to defaults.
    /// Environment overrides are not applied here.
    pub fn load(&self, name: &str) -> anyhow::Result<Config> {
        let profile_file = self.profile_path(name);
        if profile_file.exists() {
            return read_profile(&profile_file);
        }

        tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
        let main_file = self.profile_path(MAIN_PROFILE);
        if main_file.exists() {
            read_profile(&main_file)
        } else {
            Ok(Config::default())
        }
    }
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed reading profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("failed parsing profile {}", path.display()))?;
    Ok(profile.value)
}

/// Profile named by `LEXIFIND_PROFILE` (default main) with env overrides on top.
/// Any profile problem degrades to defaults rather than stopping the app.
pub fn load_config() -> Config {
    let name = std::env::var("LEXIFIND_PROFILE").unwrap_or_else(|_| MAIN_PROFILE.to_string());

    let loaded = ProfileStore::default_location().and_then(|store| {
        store.init()?;
        store.load(&name)
    });

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load profile {name}: {e:#}");
            Config::default()
        }
    };

    config.with_env_overrides()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_writes_default_main_profile() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());

        store.init().unwrap();

        let config = store.load(MAIN_PROFILE).unwrap();
        assert_eq!(config.generator.model, "gemini-2.5-flash");
        assert!(dir.path().join("profiles").join("main.json").exists());
    }

    #[test]
    fn init_keeps_existing_main_profile() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        fs::create_dir_all(store.profiles_dir()).unwrap();
        fs::write(
            store.profiles_dir().join("main.json"),
            r#"{"name":"main","value":{"generator":{"model":"gemini-2.0-flash"}}}"#,
        )
        .unwrap();

        store.init().unwrap();

        assert_eq!(store.load(MAIN_PROFILE).unwrap().generator.model, "gemini-2.0-flash");
    }

    #[test]
    fn unknown_profile_falls_back_to_main() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        fs::create_dir_all(store.profiles_dir()).unwrap();
        fs::write(
            store.profiles_dir().join("main.json"),
            r#"{"name":"main","value":{"ui":{"copy_indicator_ms":500}}}"#,
        )
        .unwrap();

        let config = store.load("classroom").unwrap();
        assert_eq!(config.ui.copy_indicator_ms, 500);
    }

    #[test]
    fn missing_store_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("nowhere"));

        let config = store.load("classroom").unwrap();
        assert_eq!(config.ui.copy_indicator_ms, 2000);
    }

    #[test]
    fn corrupt_profile_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path());
        fs::create_dir_all(store.profiles_dir()).unwrap();
        fs::write(store.profiles_dir().join("main.json"), "{ not json").unwrap();

        assert!(store.load(MAIN_PROFILE).is_err());
    }
}
