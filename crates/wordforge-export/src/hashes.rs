use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha512};

/// Digest algorithms supported by the hash-format exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgo {
    Sha256,
    Sha512,
}

impl HashAlgo {
    /// Lowercase algorithm name as used in filenames and config.
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgo::Sha256 => "sha256",
            HashAlgo::Sha512 => "sha512",
        }
    }

    /// Signature prefix used by John the Ripper dynamic formats.
    pub fn john_tag(&self) -> &'static str {
        match self {
            HashAlgo::Sha256 => "$SHA256$",
            HashAlgo::Sha512 => "$SHA512$",
        }
    }
}

impl Default for HashAlgo {
    fn default() -> Self {
        HashAlgo::Sha256
    }
}

/// Lowercase-hex digest of the plaintext under the given algorithm.
pub fn digest_hex(algo: HashAlgo, plaintext: &str) -> String {
    match algo {
        HashAlgo::Sha256 => {
            let mut hasher = Sha256::new();
            hasher.update(plaintext.as_bytes());
            hex::encode(hasher.finalize())
        }
        HashAlgo::Sha512 => {
            let mut hasher = Sha512::new();
            hasher.update(plaintext.as_bytes());
            hex::encode(hasher.finalize())
        }
    }
}
