mod registry;
mod settings;

use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use uuid::Uuid;

use wordforge_core::{
    normalize_profile, validate_profile, Error as CoreError, Profile, PROFILE_VERSION,
};
use wordforge_export::{
    estimate_brute_force, read_wordlist, simulate_dictionary, write_export, ExportError,
    ExportFormat, HashAlgo, DEFAULT_CHARSET,
};
use wordforge_generate::engine::GenerationEngine;
use wordforge_generate::errors::GenerationError;
use wordforge_generate::model::GenerateOptions;

use registry::{init_run_logging, start_run, write_manifest, RunContext, RunOptions};
use settings::{load_or_create_settings, SETTINGS_FILE};

#[derive(Debug, Error)]
enum CliError {
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error("settings error: {0}")]
    Settings(#[from] settings::SettingsError),
    #[error("profile error: {0}")]
    Core(#[from] CoreError),
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("export error: {0}")]
    Export(#[from] ExportError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "wordforge", version, about = "Targeted wordlist generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a candidate wordlist from a subject profile.
    Generate(GenerateArgs),
    /// Export a wordlist in a cracking-tool hash format.
    Export(ExportArgs),
    /// Estimate attack cost against a single target string.
    Simulate(SimulateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Path to the profile JSON document.
    #[arg(long, value_name = "FILE")]
    profile: PathBuf,
    /// Output directory for runs.
    #[arg(long)]
    run_dir: Option<PathBuf>,
    /// Optional extra copy of the wordlist.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Maximum number of candidates to emit.
    #[arg(long)]
    cap: Option<usize>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Plain wordlist to export, one candidate per line.
    #[arg(long, value_name = "FILE")]
    wordlist: PathBuf,
    /// Target tool format.
    #[arg(long, value_enum)]
    format: FormatArg,
    /// Digest algorithm for the hashes.
    #[arg(long, value_enum)]
    algo: Option<AlgoArg>,
    /// Directory for the export file.
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SimulateArgs {
    /// Target string to attack.
    #[arg(long)]
    target: String,
    /// Attack model to run.
    #[arg(long, value_enum)]
    attack: AttackArg,
    /// Wordlist for the dictionary attack.
    #[arg(long, value_name = "FILE")]
    wordlist: Option<PathBuf>,
    /// Guess rate for the brute-force projection.
    #[arg(long)]
    guesses_per_second: Option<u64>,
    /// Alphabet for the brute-force projection.
    #[arg(long)]
    charset: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum FormatArg {
    Hashcat,
    John,
}

impl From<FormatArg> for ExportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Hashcat => ExportFormat::Hashcat,
            FormatArg::John => ExportFormat::John,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum AlgoArg {
    Sha256,
    Sha512,
}

impl From<AlgoArg> for HashAlgo {
    fn from(value: AlgoArg) -> Self {
        match value {
            AlgoArg::Sha256 => HashAlgo::Sha256,
            AlgoArg::Sha512 => HashAlgo::Sha512,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum AttackArg {
    Dictionary,
    Brute,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Export(args) => run_export(args),
        Command::Simulate(args) => run_simulate(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let settings = load_or_create_settings(Path::new(SETTINGS_FILE))?;
    let run_dir = args.run_dir.unwrap_or_else(|| settings.run_dir.clone());
    let cap = args.cap.or(settings.cap);

    let raw = std::fs::read_to_string(&args.profile)?;
    let profile: Profile = serde_json::from_str(&raw)?;
    let profile = normalize_profile(profile);
    validate_profile(&profile)?;

    let run_id = Uuid::new_v4().to_string();
    let started_at = chrono::Utc::now();
    let ctx = RunContext {
        run_id: run_id.clone(),
        started_at,
        profile_version: PROFILE_VERSION.to_string(),
        run_dir,
        options: RunOptions {
            cap,
            out: args.out.clone(),
        },
    };

    let paths = start_run(&ctx)?;
    init_run_logging(&paths.logs_path)?;

    tracing::info!(event = "run_started", run_id = %run_id, subject = %profile.full_name());

    let engine = GenerationEngine::new(GenerateOptions {
        out_dir: paths.run_root.clone(),
        run_id: Some(run_id.clone()),
        cap,
    });
    let result = engine.run(&profile)?;

    write_manifest(
        &paths,
        &profile,
        &run_id,
        result.report.base_count,
        result.report.candidate_count,
        result.report.capped,
        &result.wordlist_path,
    )?;
    tracing::info!(event = "manifest_written", path = %paths.manifest_path.display());

    if let Some(out) = &args.out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        std::fs::copy(&result.wordlist_path, out)?;
        tracing::info!(event = "wordlist_copied", path = %out.display());
    }

    tracing::info!(
        event = "run_finished",
        status = "success",
        candidate_count = result.report.candidate_count
    );
    println!(
        "{} candidates written to {}",
        result.report.candidate_count,
        result.wordlist_path.display()
    );
    Ok(())
}

fn run_export(args: ExportArgs) -> Result<(), CliError> {
    let settings = load_or_create_settings(Path::new(SETTINGS_FILE))?;
    let format: ExportFormat = args.format.into();
    let algo = args
        .algo
        .map(HashAlgo::from)
        .unwrap_or(settings.hash_algo);
    let out_dir = args.out_dir.unwrap_or_else(|| settings.export_dir.clone());
    create_dir_all(&out_dir)?;

    let candidates = read_wordlist(&args.wordlist)?;
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let out_file = out_dir.join(format!("{}_{timestamp}.txt", format.name()));

    let lines = write_export(&out_file, format, algo, &candidates)?;
    println!("exported {lines} candidates to {}", out_file.display());
    Ok(())
}

fn run_simulate(args: SimulateArgs) -> Result<(), CliError> {
    let settings = load_or_create_settings(Path::new(SETTINGS_FILE))?;

    match args.attack {
        AttackArg::Dictionary => {
            let wordlist_path = args.wordlist.ok_or_else(|| {
                CliError::InvalidConfig("--wordlist is required for a dictionary attack".to_string())
            })?;
            let wordlist = read_wordlist(&wordlist_path)?;
            let outcome = simulate_dictionary(&args.target, &wordlist);
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }
        AttackArg::Brute => {
            let rate = args
                .guesses_per_second
                .unwrap_or(settings.guesses_per_second);
            let charset = args.charset.as_deref().unwrap_or(DEFAULT_CHARSET);
            let estimate = estimate_brute_force(&args.target, charset, rate)?;
            println!("{}", serde_json::to_string_pretty(&estimate)?);
        }
    }
    Ok(())
}
