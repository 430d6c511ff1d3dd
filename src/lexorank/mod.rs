//! LexoRank: bucketed base-26 fractional ranks.
//!
//! A rank string has the form `"{bucket}|{letters}"`, where the letters
//! `'a'..='z'` are the digits of a base-26 fraction. Inserting between two
//! records only requires a rank strictly between theirs, which always exists
//! by extending precision. When precision reaches the configured maximum the
//! whole bucket must be regenerated with [`RankEngine::rebalance`].
//!
//! The free functions in this module use the default [`RankConfig`]
//! (6 digits by default, 200 at most). Use [`RankEngine`] directly for other
//! length bounds.
//!
//! # References
//!
//! - Atlassian, "LexoRank" ordering keys as used by Jira.
//! - Knuth, *The Art of Computer Programming* Vol. 2, §4.3.1 (multiple
//!   precision arithmetic, classical algorithms A, S and short division).

mod config;
mod digits;
mod engine;
mod types;

pub use config::RankConfig;
pub use digits::{
    decode_digit, encode_digit, format_rank, parse_bucket_and_rank, parse_rank, BASE,
    BUCKET_SEPARATOR, MAX_DIGIT, MID_DIGIT, MIN_DIGIT,
};
pub use engine::RankEngine;
pub use types::{Rank, RankError};

use std::cmp::Ordering;

/// See [`RankEngine::align`].
pub fn align(previous: &str, next: &str) -> Result<(String, String), RankError> {
    RankEngine::default().align(previous, next)
}

/// See [`RankEngine::min_rank`].
pub fn min_rank(expected_count: usize) -> String {
    RankEngine::default().min_rank(expected_count)
}

/// See [`RankEngine::max_rank`].
pub fn max_rank(expected_count: usize) -> String {
    RankEngine::default().max_rank(expected_count)
}

/// See [`RankEngine::rank_between`].
///
/// # Examples
///
/// ```
/// use u_lexorank::lexorank::{rank_between, RankError};
///
/// assert_eq!(rank_between(Some("0|a"), Some("0|b"), 10, false).unwrap(), "0|am");
/// assert!(matches!(
///     rank_between(Some("0|b"), Some("0|a"), 10, false),
///     Err(RankError::InvalidOrder { .. })
/// ));
/// ```
pub fn rank_between(
    previous: Option<&str>,
    next: Option<&str>,
    expected_count: usize,
    allow_unordered: bool,
) -> Result<String, RankError> {
    RankEngine::default().rank_between(previous, next, expected_count, allow_unordered)
}

/// See [`RankEngine::rank_after`].
pub fn rank_after(rank: &str, expected_count: usize) -> String {
    RankEngine::default().rank_after(rank, expected_count)
}

/// See [`RankEngine::rank_successor`].
pub fn rank_successor(rank: &str) -> String {
    RankEngine::default().rank_successor(rank)
}

/// See [`RankEngine::rebalance`].
pub fn rebalance(count: usize, bucket: u32) -> Vec<String> {
    RankEngine::default().rebalance(count, bucket)
}

/// See [`RankEngine::compare`].
pub fn compare(a: &str, b: &str) -> Ordering {
    RankEngine::default().compare(a, b)
}
