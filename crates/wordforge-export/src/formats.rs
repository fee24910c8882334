use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::ExportError;
use crate::hashes::{digest_hex, HashAlgo};

/// Cracking-tool export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Hashcat,
    John,
}

impl ExportFormat {
    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::Hashcat => "hashcat",
            ExportFormat::John => "john",
        }
    }
}

/// Load a plain wordlist, one candidate per line. Blank lines are dropped;
/// an entirely blank file is an error.
pub fn read_wordlist(path: &Path) -> Result<Vec<String>, ExportError> {
    let reader = BufReader::new(File::open(path)?);
    let mut candidates = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            candidates.push(trimmed.to_string());
        }
    }
    if candidates.is_empty() {
        return Err(ExportError::EmptyWordlist(path.display().to_string()));
    }
    Ok(candidates)
}

/// One export line for a single plaintext.
///
/// Hashcat takes bare `hash:plaintext`; John wants the algorithm signature
/// prefixed to the hash.
pub fn render_line(format: ExportFormat, algo: HashAlgo, plaintext: &str) -> String {
    let digest = digest_hex(algo, plaintext);
    match format {
        ExportFormat::Hashcat => format!("{digest}:{plaintext}"),
        ExportFormat::John => format!("{}{digest}:{plaintext}", algo.john_tag()),
    }
}

/// Write the whole wordlist in the given format, one line per candidate.
/// Returns the number of lines written.
pub fn write_export(
    path: &Path,
    format: ExportFormat,
    algo: HashAlgo,
    candidates: &[String],
) -> Result<u64, ExportError> {
    let mut writer = BufWriter::new(File::create(path)?);
    let mut lines = 0u64;
    for candidate in candidates {
        writeln!(writer, "{}", render_line(format, algo, candidate))?;
        lines += 1;
    }
    writer.flush()?;
    info!(
        path = %path.display(),
        format = format.name(),
        algo = algo.name(),
        lines,
        "export written"
    );
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashcat_line_is_hash_colon_plaintext() {
        let line = render_line(ExportFormat::Hashcat, HashAlgo::Sha256, "abc");
        assert_eq!(
            line,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad:abc"
        );
    }

    #[test]
    fn john_line_carries_signature_prefix() {
        let line = render_line(ExportFormat::John, HashAlgo::Sha256, "abc");
        assert!(line.starts_with("$SHA256$ba7816bf"));
        assert!(line.ends_with(":abc"));
    }
}
