use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::ExportError;

/// Mixed-case alphanumerics, the default brute-force alphabet.
pub const DEFAULT_CHARSET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default guess rate for brute-force projections, in guesses per second.
/// Roughly a single-GPU offline attack against a fast hash.
pub const DEFAULT_GUESSES_PER_SECOND: u64 = 1_000_000_000;

/// Result of running a wordlist against one target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryOutcome {
    pub target: String,
    pub attempts: u64,
    pub found: bool,
    pub duration_ms: u64,
    pub attempts_per_second: f64,
}

/// Try each wordlist entry against the target in order, stopping at the
/// first match.
pub fn simulate_dictionary(target: &str, wordlist: &[String]) -> DictionaryOutcome {
    let start = Instant::now();
    let mut attempts = 0u64;
    let mut found = false;

    for word in wordlist {
        attempts += 1;
        if word == target {
            found = true;
            break;
        }
    }

    let elapsed = start.elapsed();
    let seconds = elapsed.as_secs_f64();
    let outcome = DictionaryOutcome {
        target: target.to_string(),
        attempts,
        found,
        duration_ms: elapsed.as_millis() as u64,
        attempts_per_second: if seconds > 0.0 {
            attempts as f64 / seconds
        } else {
            0.0
        },
    };
    info!(
        attempts = outcome.attempts,
        found = outcome.found,
        duration_ms = outcome.duration_ms,
        "dictionary simulation finished"
    );
    outcome
}

/// Projected cost of exhausting every candidate up to the target's length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BruteForceEstimate {
    pub target_len: usize,
    pub charset_size: usize,
    /// Sum of charset_size^k for k in 1..=target_len. Saturates at f64 range
    /// rather than overflowing.
    pub search_space: f64,
    pub guesses_per_second: u64,
    pub projected_seconds: f64,
}

/// Work out the search space for the target's length over the charset and
/// project the exhaustion time at the given guess rate. Purely arithmetic;
/// no guesses are actually made.
pub fn estimate_brute_force(
    target: &str,
    charset: &str,
    guesses_per_second: u64,
) -> Result<BruteForceEstimate, ExportError> {
    if guesses_per_second == 0 {
        return Err(ExportError::ZeroGuessRate);
    }
    let charset_size = charset.chars().count();
    if charset_size == 0 {
        return Err(ExportError::EmptyCharset);
    }

    let target_len = target.chars().count();
    let base = charset_size as f64;
    let mut search_space = 0.0f64;
    let mut power = 1.0f64;
    for _ in 0..target_len {
        power *= base;
        search_space += power;
    }

    let estimate = BruteForceEstimate {
        target_len,
        charset_size,
        search_space,
        guesses_per_second,
        projected_seconds: search_space / guesses_per_second as f64,
    };
    info!(
        target_len = estimate.target_len,
        charset_size = estimate.charset_size,
        projected_seconds = estimate.projected_seconds,
        "brute-force estimate computed"
    );
    Ok(estimate)
}
