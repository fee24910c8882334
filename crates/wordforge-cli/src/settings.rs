use std::fs::{create_dir_all, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use wordforge_export::{HashAlgo, DEFAULT_GUESSES_PER_SECOND};

pub const SETTINGS_FILE: &str = "wordforge.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("toml encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
    #[error("invalid settings path: {0}")]
    Invalid(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Tool-level defaults, overridable per invocation by CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub run_dir: PathBuf,
    pub export_dir: PathBuf,
    pub hash_algo: HashAlgo,
    pub cap: Option<usize>,
    pub guesses_per_second: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            run_dir: PathBuf::from("runs"),
            export_dir: PathBuf::from("exports"),
            hash_algo: HashAlgo::Sha256,
            cap: None,
            guesses_per_second: DEFAULT_GUESSES_PER_SECOND,
        }
    }
}

/// Read `wordforge.toml` next to the working directory, writing the default
/// file on first use.
pub fn load_or_create_settings(path: &Path) -> SettingsResult<Settings> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        return Ok(settings);
    }

    let settings = Settings::default();
    save_settings(path, &settings)?;
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &Settings) -> SettingsResult<()> {
    let encoded = toml::to_string_pretty(settings)?;
    write_bytes_atomic(path, encoded.as_bytes())
}

fn write_bytes_atomic(path: &Path, data: &[u8]) -> SettingsResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent)?;
        }
    }

    let tmp_path = temp_path(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    std::fs::rename(&tmp_path, path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            sync_dir(parent)?;
        }
    }

    Ok(())
}

fn temp_path(path: &Path) -> SettingsResult<PathBuf> {
    let file_name = path
        .file_name()
        .ok_or_else(|| SettingsError::Invalid(path.display().to_string()))?;
    let tmp_name = format!("{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}

fn sync_dir(path: &Path) -> io::Result<()> {
    let dir = OpenOptions::new().read(true).open(path)?;
    dir.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_load_writes_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);

        let settings = load_or_create_settings(&path).expect("created");
        assert!(path.exists());
        assert_eq!(settings.run_dir, PathBuf::from("runs"));
        assert_eq!(settings.guesses_per_second, DEFAULT_GUESSES_PER_SECOND);
    }

    #[test]
    fn saved_settings_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);

        let mut settings = Settings::default();
        settings.cap = Some(5000);
        settings.hash_algo = HashAlgo::Sha512;
        save_settings(&path, &settings).expect("saved");

        let loaded = load_or_create_settings(&path).expect("loaded");
        assert_eq!(loaded.cap, Some(5000));
        assert_eq!(loaded.hash_algo, HashAlgo::Sha512);
    }
}
