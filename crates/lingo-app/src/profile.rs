use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use lingo_config::Config;
use serde::{Deserialize, Serialize};

/// Picked up from the working directory when no `--config` is given
pub const DEFAULT_PROFILE_FILE: &str = "lingo.json";

/// A named configuration stored on disk
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    #[serde(default)]
    pub value: Config,
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let profile: Profile = serde_json::from_reader(reader)?;

    tracing::info!("Loaded profile '{}' from {}", profile.name, path.display());

    let mut config = profile.value;
    config.apply_env();
    Ok(config)
}

/// Explicit profile, then `lingo.json` in the working directory, then defaults
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return read_profile(path)
            .with_context(|| format!("failed to load profile {}", path.display()));
    }

    let local = Path::new(DEFAULT_PROFILE_FILE);
    if local.exists() {
        return read_profile(local)
            .with_context(|| format!("failed to load profile {}", local.display()));
    }

    Ok(Config::new())
}

/// Write the default profile, refusing to overwrite an existing file
pub fn write_default_profile(path: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_PROFILE_FILE));
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let profile = Profile {
        name: "main".into(),
        value: Config::default(),
    };
    fs::write(&path, serde_json::to_string_pretty(&profile)?)?;

    Ok(path)
}
