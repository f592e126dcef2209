//! Six-digit codes and their renderings.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::hash::fnv1a_64;
use crate::prefix::utf8_prefix;

/// Default limit on the number of UTF-8 bytes hashed from the input.
///
/// Everything past the limit is ignored, so two labels sharing their first 32
/// bytes share a code. An earlier revision hashed 16 bytes; the limit is a
/// parameter so callers that need those codes can still produce them.
pub const DEFAULT_MAX_BYTES: usize = 32;

/// Reduction modulus mapping the hash onto six decimal digits.
const MODULUS: u64 = 1_000_000;

/// A deterministic six-digit code derived from a text label.
///
/// Codes are cheap value types: derive one with [`Code::new`], render it with
/// [`Code::plain`] or [`Code::spaced`]. The same label always produces the
/// same code; distinct labels may collide, which is acceptable for the casual
/// tagging the codes exist for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(u32);

impl Code {
    /// Derive the code for `text`, hashing at most [`DEFAULT_MAX_BYTES`]
    /// bytes of its UTF-8 encoding.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self::with_max_bytes(text, DEFAULT_MAX_BYTES)
    }

    /// Derive the code for `text` with an explicit byte limit.
    #[must_use]
    pub fn with_max_bytes(text: &str, max_bytes: usize) -> Self {
        let prefix = utf8_prefix(text, max_bytes);
        Self((fnv1a_64(prefix.as_bytes()) % MODULUS) as u32)
    }

    /// The numeric value in `0..=999_999`.
    #[must_use]
    pub fn digits(self) -> u32 {
        self.0
    }

    /// Six contiguous digits, zero-padded: `"259144"`.
    #[must_use]
    pub fn plain(self) -> String {
        format!("{:06}", self.0)
    }

    /// Three space-separated pairs, easier to read aloud: `"25 91 44"`.
    #[must_use]
    pub fn spaced(self) -> String {
        let plain = self.plain();
        format!("{} {} {}", &plain[0..2], &plain[2..4], &plain[4..6])
    }

    /// Render with the requested [`Grouping`].
    #[must_use]
    pub fn render(self, grouping: Grouping) -> String {
        match grouping {
            Grouping::Spaced => self.spaced(),
            Grouping::Plain => self.plain(),
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}", self.0)
    }
}

/// Controls how the six digits are grouped when rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Grouping {
    /// Three two-digit pairs: `"25 91 44"`.
    #[default]
    Spaced,
    /// Six contiguous digits: `"259144"`.
    Plain,
}

/// Error returned when a grouping name is not recognized.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown grouping '{0}', expected 'spaced' or 'plain'")]
pub struct ParseGroupingError(String);

impl FromStr for Grouping {
    type Err = ParseGroupingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "spaced" => Ok(Self::Spaced),
            "plain" => Ok(Self::Plain),
            other => Err(ParseGroupingError(other.to_string())),
        }
    }
}

/// Compute the rendered code for `text` in one call.
///
/// The whole pipeline behind one function: truncate to `max_bytes` on a
/// UTF-8 boundary, hash, reduce to six digits, render spaced or plain.
#[must_use]
pub fn compute(text: &str, spaced: bool, max_bytes: usize) -> String {
    let code = Code::with_max_bytes(text, max_bytes);
    if spaced { code.spaced() } else { code.plain() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_map_to_pinned_codes() {
        assert_eq!(Code::new("hello world!").spaced(), "25 91 44");
        assert_eq!(Code::new("hello world!!").spaced(), "53 22 67");
        assert_eq!(Code::new("hello world!!!").spaced(), "09 06 22");
        assert_eq!(Code::new("hello world!").plain(), "259144");
    }

    #[test]
    fn empty_label_reduces_the_offset_basis() {
        assert_eq!(Code::new("").digits(), 665_603);
        assert_eq!(Code::new("").spaced(), "66 56 03");
    }

    #[test]
    fn leading_zeros_are_preserved() {
        let code = Code::new("hello world!!!");
        assert_eq!(code.digits(), 90_622);
        assert_eq!(code.plain(), "090622");
    }

    #[test]
    fn display_matches_the_plain_rendering() {
        let code = Code::new("test");
        assert_eq!(code.to_string(), code.plain());
        assert_eq!(code.to_string(), "914231");
    }

    #[test]
    fn render_agrees_with_the_dedicated_accessors() {
        let code = Code::new("a");
        assert_eq!(code.render(Grouping::Spaced), code.spaced());
        assert_eq!(code.render(Grouping::Plain), code.plain());
    }

    #[test]
    fn compute_selects_the_grouping() {
        assert_eq!(compute("hello world!", true, DEFAULT_MAX_BYTES), "25 91 44");
        assert_eq!(compute("hello world!", false, DEFAULT_MAX_BYTES), "259144");
    }

    #[test]
    fn byte_limit_is_a_parameter() {
        // The 16-byte revision: bytes past the sixteenth stop mattering.
        assert_eq!(
            compute("hello world!!!!!!", true, 16),
            compute("hello world!!!!!", true, 16)
        );
        assert_eq!(Code::with_max_bytes("hello world!!!!!!", 16).digits(), 634_980);
        assert_eq!(Code::with_max_bytes("hello world!!!!!!", 32).digits(), 739_199);
    }

    #[test]
    fn zero_limit_hashes_the_empty_prefix() {
        assert_eq!(Code::with_max_bytes("anything", 0).digits(), 665_603);
    }

    #[test]
    fn grouping_parses_known_names() {
        assert_eq!("spaced".parse::<Grouping>().unwrap(), Grouping::Spaced);
        assert_eq!(" PLAIN ".parse::<Grouping>().unwrap(), Grouping::Plain);
        assert!("fancy".parse::<Grouping>().is_err());
    }

    #[test]
    fn grouping_parse_error_names_the_offender() {
        let err = "pairs".parse::<Grouping>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown grouping 'pairs', expected 'spaced' or 'plain'"
        );
    }
}
