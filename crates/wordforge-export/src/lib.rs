//! Cracking-tool export formats and attack cost estimation for candidate
//! wordlists.

pub mod errors;
pub mod formats;
pub mod hashes;
pub mod simulate;

pub use errors::ExportError;
pub use formats::{read_wordlist, render_line, write_export, ExportFormat};
pub use hashes::{digest_hex, HashAlgo};
pub use simulate::{
    estimate_brute_force, simulate_dictionary, BruteForceEstimate, DictionaryOutcome,
    DEFAULT_CHARSET, DEFAULT_GUESSES_PER_SECOND,
};
