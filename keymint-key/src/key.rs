//! License key derivation and validation.
//!
//! Derivation hashes the input with MD5 (as a string mixer, not for
//! security), then cuts and partially reverses the digest before grouping.
//! The exact slicing is load-bearing: keys issued long ago must keep
//! deriving to the same string, so it is reproduced index-for-index rather
//! than simplified.

use crate::error::{KeyError, KeyResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Group lengths of the formatted key.
pub const GROUP_LENGTHS: [usize; 5] = [5, 5, 4, 7, 7];

/// Total formatted length: 28 hex characters plus 4 hyphens.
pub const KEY_LENGTH: usize = 32;

/// A formatted license key.
///
/// Obtained either by deriving from an account identity string or by
/// validating an externally supplied string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LicenseKey(String);

impl LicenseKey {
    /// Derives the license key for an input string.
    ///
    /// Deterministic: the same input bytes always produce the same key.
    /// Lifecycle operations rely on this to re-locate remote records
    /// without storing a mapping.
    #[must_use]
    pub fn derive(input: &str) -> Self {
        let digest = format!("{:x}", md5::compute(input.as_bytes()));
        Self(group(&obfuscate(&digest)).to_ascii_uppercase())
    }

    /// Validates an externally supplied key string.
    ///
    /// Surrounding whitespace is tolerated and trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not 32 characters of uppercase hex
    /// in 5-5-4-7-7 hyphenated groups.
    pub fn parse(s: &str) -> KeyResult<Self> {
        let s = s.trim();
        if s.len() != KEY_LENGTH {
            return Err(KeyError::InvalidLength(s.len()));
        }

        let groups: Vec<&str> = s.split('-').collect();
        if groups.len() != GROUP_LENGTHS.len() {
            return Err(KeyError::InvalidGrouping);
        }
        for (group, expected) in groups.iter().zip(GROUP_LENGTHS) {
            if group.len() != expected {
                return Err(KeyError::InvalidGrouping);
            }
            if let Some(c) = group.chars().find(|c| !matches!(c, '0'..='9' | 'A'..='F')) {
                return Err(KeyError::InvalidCharacter(c));
            }
        }

        Ok(Self(s.to_string()))
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LicenseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LicenseKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Builds the 28-character obfuscated form of a 32-character hex digest:
/// the first 12 digest characters, 4 characters cut from the reversed
/// digest, then the last 12 digest characters reversed.
fn obfuscate(digest: &str) -> String {
    let reversed: String = digest.chars().rev().collect();
    let tail_reversed: String = digest[20..32].chars().rev().collect();
    format!("{}{}{}", &digest[..12], &reversed[10..14], tail_reversed)
}

/// Cuts the obfuscated form into 5-5-4-7-7 hyphenated groups.
fn group(obfuscated: &str) -> String {
    format!(
        "{}-{}-{}-{}-{}",
        &obfuscated[..5],
        &obfuscated[5..10],
        &obfuscated[10..14],
        &obfuscated[14..21],
        &obfuscated[21..28],
    )
}
