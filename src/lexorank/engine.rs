//! Rank derivation engine.

use super::config::RankConfig;
use super::digits::{
    self, format_rank, parse_bucket_and_rank, parse_rank, MAX_DIGIT, MID_DIGIT, MIN_DIGIT,
};
use super::types::{Rank, RankError};
use std::cmp::Ordering;
use std::iter;
use tracing::{debug, warn};

/// Derives ranks under a fixed [`RankConfig`].
///
/// The engine holds no state besides its configuration; every method is a
/// pure function of its arguments and may be called from any thread.
///
/// # Examples
///
/// ```
/// use u_lexorank::lexorank::{RankConfig, RankEngine};
///
/// let engine = RankEngine::new(RankConfig::default());
/// let first = engine.rank_between(None, None, 10, false).unwrap();
/// let second = engine.rank_between(Some(&first), None, 10, false).unwrap();
/// let middle = engine.rank_between(Some(&first), Some(&second), 10, false).unwrap();
/// assert!(first < middle && middle < second);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RankEngine {
    config: RankConfig,
}

impl RankEngine {
    /// Creates an engine.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails validation.
    pub fn new(config: RankConfig) -> Self {
        config.validate().expect("invalid RankConfig");
        Self { config }
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Pads the shorter digit string to the length of the longer one.
    ///
    /// `previous` is padded with `'a'` and `next` with `'z'`, each extended
    /// toward its own side of the gap.
    pub fn align(&self, previous: &str, next: &str) -> Result<(String, String), RankError> {
        let (previous, next) = self.align_digits(&parse_rank(previous), &parse_rank(next))?;
        Ok((digits::render(&previous), digits::render(&next)))
    }

    fn align_digits(&self, previous: &[u8], next: &[u8]) -> Result<(Vec<u8>, Vec<u8>), RankError> {
        let length = previous.len().max(next.len());
        if length > self.config.max_length {
            return Err(self.precision_exhausted(length));
        }
        Ok((
            digits::pad_right(previous, length, MIN_DIGIT),
            digits::pad_right(next, length, MAX_DIGIT),
        ))
    }

    fn precision_exhausted(&self, length: usize) -> RankError {
        warn!(
            length,
            max_length = self.config.max_length,
            "rank precision exhausted, bucket needs rebalancing"
        );
        RankError::RebalancingRequired {
            length,
            max_length: self.config.max_length,
        }
    }

    /// Smallest rank sized for `expected_count` items, in bucket 0.
    pub fn min_rank(&self, expected_count: usize) -> String {
        format_rank(&vec![MIN_DIGIT; self.config.rank_length(expected_count)], 0)
    }

    /// Largest rank sized for `expected_count` items, in bucket 0.
    pub fn max_rank(&self, expected_count: usize) -> String {
        format_rank(&vec![MAX_DIGIT; self.config.rank_length(expected_count)], 0)
    }

    /// Derives a rank strictly between `previous` and `next`.
    ///
    /// A missing bound is replaced by [`min_rank`](Self::min_rank) or
    /// [`max_rank`](Self::max_rank), lengthened to match the bound that was
    /// given, so a rank sized for a larger bucket can still be appended to.
    /// The result inherits the bucket of `previous`, else of `next`, else
    /// bucket 0.
    ///
    /// The midpoint is `previous + (next - previous) / 2` over the aligned
    /// digits. When the bounds are adjacent at the current precision the
    /// midpoint collapses onto `previous`; one extra mid-alphabet digit is
    /// then appended.
    ///
    /// # Errors
    ///
    /// - [`RankError::InvalidOrder`] if `previous` does not sort strictly
    ///   before `next` and `allow_unordered` is false. With
    ///   `allow_unordered` the bounds are swapped instead; equal bounds
    ///   are always rejected. With `previous` missing this also covers a
    ///   `next` made only of `'a'`, below which nothing fits.
    /// - [`RankError::RebalancingRequired`] if the result would exceed the
    ///   maximum length.
    pub fn rank_between(
        &self,
        previous: Option<&str>,
        next: Option<&str>,
        expected_count: usize,
        allow_unordered: bool,
    ) -> Result<String, RankError> {
        let bucket = previous
            .or(next)
            .map_or(0, |token| parse_bucket_and_rank(token).0);

        let length = self.config.rank_length(expected_count);
        let previous = previous.map(|token| parse_rank(parse_bucket_and_rank(token).1));
        let next = next.map(|token| parse_rank(parse_bucket_and_rank(token).1));

        // A missing bound is the edge of the range, as long as the other side.
        let mut low = previous.unwrap_or_else(|| {
            vec![MIN_DIGIT; length.max(next.as_ref().map_or(0, Vec::len))]
        });
        let open_above = next.is_none();
        let mut high = next.unwrap_or_else(|| vec![MAX_DIGIT; length.max(low.len())]);

        match digits::cmp_fraction(&low, &high) {
            Ordering::Less => {}
            // all 'z' below an open top still has room once extended
            Ordering::Equal if open_above => {}
            Ordering::Greater if allow_unordered => {
                debug!(
                    previous = %digits::render(&low),
                    next = %digits::render(&high),
                    "swapping unordered rank bounds"
                );
                std::mem::swap(&mut low, &mut high);
            }
            _ => {
                return Err(RankError::InvalidOrder {
                    previous: digits::render(&low),
                    next: digits::render(&high),
                });
            }
        }

        let (aligned_low, aligned_high) = self.align_digits(&low, &high)?;
        let mut mid = midpoint(&aligned_low, &aligned_high);

        // 'z' padding stretches a shorter upper bound past its real value.
        if high.len() < aligned_low.len() && digits::cmp_fraction(&mid, &high) != Ordering::Less {
            let exact_high = digits::pad_right(&high, aligned_low.len(), MIN_DIGIT);
            mid = midpoint(&aligned_low, &exact_high);
        }

        if mid == aligned_low {
            let length = mid.len() + 1;
            if length > self.config.max_length {
                return Err(self.precision_exhausted(length));
            }
            mid.push(MID_DIGIT);
            debug!(length, "extended rank precision between adjacent bounds");
        }

        Ok(format_rank(&mid, bucket))
    }

    /// Advances `rank` by an even-spacing step for `expected_count` items.
    ///
    /// The step is `floor(26^L / n - 0.5)` units of the `L`-th digit, where
    /// `L` is the rank length for `n` items; digits beyond position `L` are
    /// kept as they are. A carry out of the leading digit grows the rank on
    /// the left. The bucket is preserved.
    ///
    /// The integer value of the digits always increases. A result that grew
    /// on the left is a smaller fraction, so it sorts *below* `rank` under
    /// [`compare`](Self::compare) and [`Rank`]'s `Ord`; size `expected_count`
    /// so that appends stay clear of the top of the range.
    pub fn rank_after(&self, rank: &str, expected_count: usize) -> String {
        let (bucket, letters) = parse_bucket_and_rank(rank);
        let length = self.config.rank_length(expected_count);

        let mut head = parse_rank(letters);
        let tail = if head.len() > length {
            head.split_off(length)
        } else {
            head.resize(length, MIN_DIGIT);
            Vec::new()
        };

        let mut advanced = digits::add(&head, &spacing_step(expected_count, length));
        advanced.extend(tail);
        format_rank(&advanced, bucket)
    }

    /// The next representable rank: the digits plus one unit in the last
    /// position. The bucket is preserved.
    ///
    /// As with [`rank_after`](Self::rank_after), an all-`'z'` input carries
    /// into a new leading digit and the result sorts below its input under
    /// [`compare`](Self::compare).
    pub fn rank_successor(&self, rank: &str) -> String {
        let (bucket, letters) = parse_bucket_and_rank(rank);
        format_rank(&digits::add(&parse_rank(letters), &[1]), bucket)
    }

    /// Generates `count` evenly spaced ranks for `bucket`.
    ///
    /// The ranks share one length, increase strictly, and leave room below
    /// the first and above the last. Used to recover from
    /// [`RankError::RebalancingRequired`]: assign the results to the
    /// bucket's records in their current order, then retry the insertion.
    pub fn rebalance(&self, count: usize, bucket: u32) -> Vec<String> {
        let slots = count.saturating_add(1);
        let start = format_rank(&vec![MIN_DIGIT; self.config.rank_length(slots)], bucket);
        let ranks: Vec<String> = iter::successors(Some(start), |rank| {
            Some(self.rank_after(rank, slots))
        })
        .skip(1)
        .take(count)
        .collect();
        debug!(count, bucket, "rebalanced rank bucket");
        ranks
    }

    /// Orders two rank strings by bucket, then by digit value.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        Rank::parse_trusted(a).cmp(&Rank::parse_trusted(b))
    }
}

/// `low + (high - low) / 2` over equal-length digit sequences.
fn midpoint(low: &[u8], high: &[u8]) -> Vec<u8> {
    // high > low, so the sum never outgrows the operands
    let gap = digits::sub(high, low).unwrap_or_default();
    digits::add(low, &digits::halve(&gap))
}

/// `floor(26^length / n - 0.5)` as digits, computed as
/// `(2 * 26^length - n) / (2 * n)`. Never less than one unit.
fn spacing_step(expected_count: usize, length: usize) -> Vec<u8> {
    let count = expected_count.max(1) as u128;

    let mut numerator = vec![MIN_DIGIT; length + 1];
    numerator[0] = 2;

    let step = digits::sub(&numerator, &digits::from_value(count))
        .map(|numerator| digits::div_small(&numerator, 2 * count))
        .unwrap_or_default();

    match digits::trim_leading_zeros(&step) {
        [] => vec![1],
        trimmed => trimmed.to_vec(),
    }
}
