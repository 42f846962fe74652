//! Key material generation for signup
//!
//! Produces the "private key" / "public address" pair shown during signup.
//! Both strings are independent uniform draws over the lowercase hex
//! alphabet; there is no cryptographic relationship between them. They serve
//! only as session tokens in this demo, and the user is responsible for
//! saving them externally (the service never stores a generated pair).

use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::errors::OrpheusResult;

/// Length of the generated private secret, in hex symbols.
pub const PRIVATE_SECRET_LEN: usize = 64;
/// Length of the generated public identifier, in hex symbols.
pub const PUBLIC_IDENTIFIER_LEN: usize = 40;
/// File name offered for download of a generated pair.
pub const KEY_FILE_NAME: &str = "orpheus-keys.txt";

const HEX_ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// A generated identifier pair. Regenerating discards the previous pair;
/// there is no rotation or uniqueness tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub private_secret: String,
    pub public_identifier: String,
}

impl KeyPair {
    /// Generate a fresh pair: two independent uniform per-symbol draws.
    pub fn generate() -> Self {
        let mut rng = rand::rng();
        Self {
            private_secret: random_hex(&mut rng, PRIVATE_SECRET_LEN),
            public_identifier: random_hex(&mut rng, PUBLIC_IDENTIFIER_LEN),
        }
    }

    /// The plain-text export format offered to the user.
    pub fn export_text(&self) -> String {
        format!(
            "Private Key: {}\nPublic Key: {}",
            self.private_secret, self.public_identifier
        )
    }

    /// Write the export file into `dir` and return its path.
    pub fn write_key_file(&self, dir: &Path) -> OrpheusResult<PathBuf> {
        let path = dir.join(KEY_FILE_NAME);
        fs::write(&path, self.export_text())?;
        Ok(path)
    }
}

fn random_hex<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| HEX_ALPHABET[rng.random_range(0..HEX_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_lower_hex(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
    }

    #[test]
    fn test_generated_lengths_and_alphabet() {
        let pair = KeyPair::generate();
        assert_eq!(pair.private_secret.len(), PRIVATE_SECRET_LEN);
        assert_eq!(pair.public_identifier.len(), PUBLIC_IDENTIFIER_LEN);
        assert!(is_lower_hex(&pair.private_secret));
        assert!(is_lower_hex(&pair.public_identifier));
    }

    #[test]
    fn test_pairs_are_independent_draws() {
        let a = KeyPair::generate();
        let b = KeyPair::generate();
        // 64 uniform hex symbols colliding would point at a broken rng.
        assert_ne!(a.private_secret, b.private_secret);
        assert!(!a.private_secret.contains(&a.public_identifier));
    }

    #[test]
    fn test_export_text_format() {
        let pair = KeyPair {
            private_secret: "aa".repeat(32),
            public_identifier: "bb".repeat(20),
        };
        let text = pair.export_text();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            format!("Private Key: {}", "aa".repeat(32))
        );
        assert_eq!(
            lines.next().unwrap(),
            format!("Public Key: {}", "bb".repeat(20))
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_write_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let pair = KeyPair::generate();

        let path = pair.write_key_file(dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), KEY_FILE_NAME);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, pair.export_text());
    }
}
