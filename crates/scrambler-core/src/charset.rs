//! Fixed alphabet the engine draws scramble characters from.

use crate::rng::RandomSource;
use crate::{Error, Result};

/// Default scramble alphabet: letters, digits, and punctuation glyphs
const DEFAULT_CHARS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!<>-_\\/[]{}=+*^?#$%&@";

/// A fixed, non-empty ordered set of characters.
///
/// Every flicker and filler character the engine produces is drawn
/// uniformly from one of these sets, independently per draw.
#[derive(Debug, Clone)]
pub struct Charset {
    chars: Vec<char>,
}

impl Default for Charset {
    fn default() -> Self {
        Self {
            chars: DEFAULT_CHARS.chars().collect(),
        }
    }
}

impl Charset {
    /// Build a charset from a string of candidate characters.
    /// Fails on an empty string.
    pub fn new(chars: &str) -> Result<Self> {
        if chars.is_empty() {
            return Err(Error::EmptyCharset);
        }
        Ok(Self {
            chars: chars.chars().collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Draw one character uniformly
    pub fn sample(&self, rng: &mut dyn RandomSource) -> char {
        self.chars[rng.next_index(self.chars.len())]
    }

    /// Draw `len` independent characters
    pub fn random_string(&self, len: usize, rng: &mut dyn RandomSource) -> String {
        (0..len).map(|_| self.sample(rng)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{FastrandSource, SequenceSource};

    #[test]
    fn test_empty_charset_rejected() {
        assert!(matches!(Charset::new(""), Err(Error::EmptyCharset)));
    }

    #[test]
    fn test_default_charset_non_empty() {
        let charset = Charset::default();
        assert!(!charset.is_empty());
    }

    #[test]
    fn test_sample_stays_in_set() {
        let charset = Charset::new("abc").unwrap();
        let mut rng = FastrandSource::with_seed(1);
        for _ in 0..100 {
            assert!("abc".contains(charset.sample(&mut rng)));
        }
    }

    #[test]
    fn test_random_string_length() {
        let charset = Charset::default();
        let mut rng = FastrandSource::with_seed(1);
        assert_eq!(charset.random_string(0, &mut rng).len(), 0);
        assert_eq!(charset.random_string(9, &mut rng).chars().count(), 9);
    }

    #[test]
    fn test_scripted_draws() {
        let charset = Charset::new("xyz").unwrap();
        let mut rng = SequenceSource::new(vec![0, 1, 2]);
        assert_eq!(charset.random_string(3, &mut rng), "xyz");
    }
}
