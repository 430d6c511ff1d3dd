//! Rank value type and error kinds.

use super::digits::{self, BUCKET_SEPARATOR};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Failures raised by rank derivation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// Aligned precision would exceed the configured maximum.
    ///
    /// Every rank in the bucket must be regenerated (see
    /// [`RankEngine::rebalance`](super::RankEngine::rebalance)) before the
    /// insertion is retried.
    #[error("rank length {length} exceeds maximum {max_length}; bucket must be rebalanced")]
    RebalancingRequired { length: usize, max_length: usize },

    /// `previous` does not sort strictly before `next`.
    #[error("previous rank {previous:?} does not sort before next rank {next:?}")]
    InvalidOrder { previous: String, next: String },

    /// A rank string could not be parsed.
    #[error("malformed rank {input:?}: {reason}")]
    Malformed { input: String, reason: String },
}

/// A parsed rank: bucket plus base-26 fractional digits.
///
/// Ordering compares the bucket first, then the digits as fractions (the
/// shorter side padded with `'a'`), then length. Ranks derived with
/// `rank_between` within one bucket agree with plain string ordering of
/// their canonical form. A `rank_after` or `rank_successor` result that
/// carried into a new leading digit is a smaller fraction and sorts below
/// its input.
///
/// # Examples
///
/// ```
/// use u_lexorank::lexorank::Rank;
///
/// let low: Rank = "0|abc".parse().unwrap();
/// let legacy: Rank = "abd".parse().unwrap();
/// assert_eq!(legacy.bucket(), 0);
/// assert!(low < legacy);
/// assert_eq!(legacy.to_string(), "0|abd");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Rank {
    bucket: u32,
    digits: Vec<u8>,
}

impl Rank {
    /// Builds a rank from already validated parts.
    ///
    /// # Panics
    ///
    /// Panics if any digit is outside `0..26`.
    pub fn new(bucket: u32, digits: Vec<u8>) -> Self {
        assert!(
            digits.iter().all(|&d| d < digits::BASE),
            "rank digit out of range"
        );
        Self { bucket, digits }
    }

    /// Parses a rank string, trusting it to be well formed.
    pub(crate) fn parse_trusted(token: &str) -> Self {
        let (bucket, letters) = digits::parse_bucket_and_rank(token);
        Self {
            bucket,
            digits: digits::parse_rank(letters),
        }
    }

    pub fn bucket(&self) -> u32 {
        self.bucket
    }

    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of digit positions.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns the same digits moved into another bucket.
    pub fn with_bucket(mut self, bucket: u32) -> Self {
        self.bucket = bucket;
        self
    }

    /// The letter encoding of the digits, without bucket prefix.
    pub fn letters(&self) -> String {
        digits::render(&self.digits)
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bucket
            .cmp(&other.bucket)
            .then_with(|| digits::cmp_fraction(&self.digits, &other.digits))
            .then_with(|| self.digits.len().cmp(&other.digits.len()))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&digits::format_rank(&self.digits, self.bucket))
    }
}

impl FromStr for Rank {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: String| RankError::Malformed {
            input: s.to_string(),
            reason,
        };

        let (bucket, letters) = match s.split_once(BUCKET_SEPARATOR) {
            Some((bucket, letters)) => {
                let bucket = bucket
                    .parse::<u32>()
                    .map_err(|e| malformed(format!("invalid bucket {bucket:?}: {e}")))?;
                (bucket, letters)
            }
            None => (0, s),
        };

        if let Some(bad) = letters.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(malformed(format!("invalid digit {bad:?}")));
        }

        Ok(Self {
            bucket,
            digits: digits::parse_rank(letters),
        })
    }
}

impl TryFrom<String> for Rank {
    type Error = RankError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rank> for String {
    fn from(rank: Rank) -> Self {
        rank.to_string()
    }
}
