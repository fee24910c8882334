use std::fs::{create_dir_all, OpenOptions};
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{DateTime, Utc};
use serde::Serialize;

use wordforge_core::Profile;

use super::{RegistryError, RegistryResult};

/// Serializable options for generation runs.
#[derive(Debug, Clone, Serialize)]
pub struct RunOptions {
    pub cap: Option<usize>,
    pub out: Option<PathBuf>,
}

/// Metadata captured at run start.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub run_id: String,
    pub started_at: DateTime<Utc>,
    pub profile_version: String,
    pub run_dir: PathBuf,
    pub options: RunOptions,
}

/// JSON config written to each run directory.
#[derive(Debug, Serialize)]
pub struct RunConfig {
    pub run_id: String,
    pub started_at: String,
    pub profile_version: String,
    pub options: RunOptions,
    pub git: GitInfo,
}

/// Git metadata for reproducibility.
#[derive(Debug, Serialize)]
pub struct GitInfo {
    pub commit: Option<String>,
    pub dirty: Option<bool>,
}

/// Paths for run artifacts. The wordlist and generation report are written
/// by the engine into `run_root`.
#[derive(Debug, Clone)]
pub struct RunPaths {
    pub run_root: PathBuf,
    pub logs_path: PathBuf,
    pub manifest_path: PathBuf,
}

/// Manifest recording who the run was for and what it produced.
#[derive(Debug, Serialize)]
pub struct RunManifest {
    pub run_id: String,
    pub finished_at: String,
    pub subject_name: String,
    pub subject_email: String,
    pub base_count: u64,
    pub candidate_count: u64,
    pub capped: bool,
    pub wordlist_path: PathBuf,
}

pub fn start_run(ctx: &RunContext) -> RegistryResult<RunPaths> {
    let timestamp = ctx.started_at.format("%Y-%m-%dT%H-%M-%SZ").to_string();
    let run_root = ctx.run_dir.join(format!("{timestamp}__run_{}", ctx.run_id));

    create_dir_all(&run_root)?;

    let config_path = run_root.join("config.json");
    let logs_path = run_root.join("logs.ndjson");
    let manifest_path = run_root.join("manifest.json");

    let config = RunConfig {
        run_id: ctx.run_id.clone(),
        started_at: ctx.started_at.to_rfc3339(),
        profile_version: ctx.profile_version.clone(),
        options: ctx.options.clone(),
        git: collect_git_info(),
    };

    write_json(&config_path, &config)?;

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&logs_path)?;

    Ok(RunPaths {
        run_root,
        logs_path,
        manifest_path,
    })
}

pub fn write_manifest(
    paths: &RunPaths,
    profile: &Profile,
    run_id: &str,
    base_count: u64,
    candidate_count: u64,
    capped: bool,
    wordlist_path: &Path,
) -> RegistryResult<()> {
    let manifest = RunManifest {
        run_id: run_id.to_string(),
        finished_at: Utc::now().to_rfc3339(),
        subject_name: profile.full_name(),
        subject_email: profile.email.clone(),
        base_count,
        candidate_count,
        capped,
        wordlist_path: wordlist_path.to_path_buf(),
    };
    write_json(&paths.manifest_path, &manifest)
}

pub fn collect_git_info() -> GitInfo {
    let commit = Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .and_then(|output| {
            if output.status.success() {
                Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
            } else {
                None
            }
        })
        .filter(|value| !value.is_empty());

    let dirty = Command::new("git")
        .args(["status", "--porcelain"])
        .output()
        .ok()
        .map(|output| !output.stdout.is_empty());

    GitInfo { commit, dirty }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> RegistryResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)?;
    serde_json::to_writer_pretty(file, value).map_err(RegistryError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        serde_json::from_value(serde_json::json!({
            "first_name": "Ann",
            "last_name": "Lee",
            "birth_day": 3,
            "birth_month": 9,
            "birth_year": 2005,
            "birthplace": "Delhi",
            "residence": "Mumbai",
            "phone_number": "1234567890",
            "email": "ann@example.com"
        }))
        .expect("valid profile")
    }

    #[test]
    fn start_run_creates_config_and_log_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ctx = RunContext {
            run_id: "abc123".to_string(),
            started_at: Utc::now(),
            profile_version: "1".to_string(),
            run_dir: dir.path().to_path_buf(),
            options: RunOptions {
                cap: Some(100),
                out: None,
            },
        };

        let paths = start_run(&ctx).expect("run started");
        assert!(paths.run_root.starts_with(dir.path()));
        assert!(paths
            .run_root
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with("__run_abc123")));
        assert!(paths.logs_path.exists());

        let config: serde_json::Value = serde_json::from_slice(
            &std::fs::read(paths.run_root.join("config.json")).expect("config readable"),
        )
        .expect("config is json");
        assert_eq!(config["run_id"], "abc123");
        assert_eq!(config["options"]["cap"], 100);
    }

    #[test]
    fn manifest_records_subject_and_counts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let ctx = RunContext {
            run_id: "abc123".to_string(),
            started_at: Utc::now(),
            profile_version: "1".to_string(),
            run_dir: dir.path().to_path_buf(),
            options: RunOptions {
                cap: None,
                out: None,
            },
        };
        let paths = start_run(&ctx).expect("run started");
        let wordlist = paths.run_root.join("wordlist.txt");

        write_manifest(&paths, &profile(), "abc123", 200, 3000, false, &wordlist)
            .expect("manifest written");

        let manifest: serde_json::Value = serde_json::from_slice(
            &std::fs::read(&paths.manifest_path).expect("manifest readable"),
        )
        .expect("manifest is json");
        assert_eq!(manifest["subject_name"], "Ann Lee");
        assert_eq!(manifest["subject_email"], "ann@example.com");
        assert_eq!(manifest["base_count"], 200);
        assert_eq!(manifest["candidate_count"], 3000);
    }
}
