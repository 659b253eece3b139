use std::fmt;

use crate::constants::DEFAULT_MAX_WORD_LEN;
use crate::error::{Error, Result};

/// What to do with a token longer than the configured bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OversizePolicy {
    /// Keep the first `max_len` characters.
    #[default]
    Truncate,
    /// Fail with [`Error::OversizedWord`].
    Reject,
}

/// Length bound and oversize handling applied to every token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordLimits {
    pub max_len: usize,
    pub policy: OversizePolicy,
}

impl WordLimits {
    /// A zero bound is raised to 1 so every token keeps at least one character.
    pub fn new(max_len: usize, policy: OversizePolicy) -> Self {
        Self {
            max_len: max_len.max(1),
            policy,
        }
    }
}

impl Default for WordLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_WORD_LEN, OversizePolicy::default())
    }
}

/// A single token, case- and punctuation-sensitive, within the length bound.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(String);

impl Word {
    /// Apply `limits` to a raw token. Length is counted in characters.
    pub fn parse(raw: &str, limits: &WordLimits) -> Result<Self> {
        let len = raw.chars().count();
        if len <= limits.max_len {
            return Ok(Self(raw.to_string()));
        }

        match limits.policy {
            OversizePolicy::Truncate => {
                let kept: String = raw.chars().take(limits.max_len).collect();
                tracing::warn!(len, max = limits.max_len, "truncated oversized word to '{kept}'");
                Ok(Self(kept))
            }
            OversizePolicy::Reject => Err(Error::OversizedWord {
                word_prefix: raw.chars().take(limits.max_len).collect(),
                len,
                max: limits.max_len,
            }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(max_len: usize, policy: OversizePolicy) -> WordLimits {
        WordLimits::new(max_len, policy)
    }

    #[test]
    fn test_short_word_kept_verbatim() {
        let w = Word::parse("Cat!", &WordLimits::default()).unwrap();
        assert_eq!(w.as_str(), "Cat!");
    }

    #[test]
    fn test_exact_bound_is_not_oversized() {
        let raw = "a".repeat(DEFAULT_MAX_WORD_LEN);
        let w = Word::parse(&raw, &limits(DEFAULT_MAX_WORD_LEN, OversizePolicy::Reject)).unwrap();
        assert_eq!(w.as_str(), raw);
    }

    #[test]
    fn test_truncate_keeps_prefix() {
        let w = Word::parse("abcdefgh", &limits(3, OversizePolicy::Truncate)).unwrap();
        assert_eq!(w.as_str(), "abc");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let w = Word::parse("żółwie", &limits(3, OversizePolicy::Truncate)).unwrap();
        assert_eq!(w.as_str(), "żół");
    }

    #[test]
    fn test_reject_reports_length() {
        let err = Word::parse("abcdefgh", &limits(3, OversizePolicy::Reject)).unwrap_err();
        match err {
            Error::OversizedWord {
                word_prefix,
                len,
                max,
            } => {
                assert_eq!(word_prefix, "abc");
                assert_eq!(len, 8);
                assert_eq!(max, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_bound_raised_to_one() {
        assert_eq!(WordLimits::new(0, OversizePolicy::Truncate).max_len, 1);
    }
}
