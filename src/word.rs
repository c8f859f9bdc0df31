//! Five-letter words.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::error::ParseWordError;
use crate::WORD_LENGTH;

/// A word of exactly [`WORD_LENGTH`] lowercase ASCII letters.
///
/// Words are plain values: they are `Copy`, hash cheaply and compare
/// lexicographically.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word([u8; WORD_LENGTH]);

impl Word {
    pub fn as_bytes(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Zero-based alphabet index (`a` = 0) of the letter at `position`.
    #[inline]
    pub fn letter(&self, position: usize) -> usize {
        (self.0[position] - b'a') as usize
    }
}

impl FromStr for Word {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        if !lower.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(ParseWordError::NotAlphabetic(s.to_string()));
        }
        let bytes: [u8; WORD_LENGTH] = lower
            .as_bytes()
            .try_into()
            .map_err(|_| ParseWordError::WrongLength(s.to_string()))?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            f.write_char(b as char)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({})", self)
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        &self.0[..] == other.as_bytes()
    }
}
