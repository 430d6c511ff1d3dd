//! Rank length configuration.

use super::digits::BASE;

/// Length bounds used when sizing new ranks.
///
/// # Examples
///
/// ```
/// use u_lexorank::lexorank::RankConfig;
///
/// let config = RankConfig::default()
///     .with_default_length(8)
///     .with_max_length(120);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.rank_length(10), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankConfig {
    /// Minimum number of digits for freshly generated ranks.
    pub default_length: usize,

    /// Hard precision limit. Aligning beyond this requires rebalancing.
    pub max_length: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            default_length: 6,
            max_length: 200,
        }
    }
}

impl RankConfig {
    pub fn with_default_length(mut self, length: usize) -> Self {
        self.default_length = length;
        self
    }

    pub fn with_max_length(mut self, length: usize) -> Self {
        self.max_length = length;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.default_length == 0 {
            return Err("default_length must be at least 1".into());
        }
        if self.max_length == 0 {
            return Err("max_length must be at least 1".into());
        }
        if self.default_length > self.max_length {
            return Err(format!(
                "default_length ({}) must not exceed max_length ({})",
                self.default_length, self.max_length
            ));
        }
        Ok(())
    }

    /// Number of digits needed to house `expected_count` items.
    ///
    /// Computes `2 * ceil(log_26(n))` clamped to
    /// `[default_length, max_length]`. Doubling the exponent leaves room for
    /// roughly `n` insertions between every pair of evenly spaced ranks.
    pub fn rank_length(&self, expected_count: usize) -> usize {
        let target = expected_count as u128;
        let mut exponent = 0usize;
        let mut capacity = 1u128;
        while capacity < target {
            capacity *= u128::from(BASE);
            exponent += 1;
        }
        (2 * exponent).clamp(self.default_length, self.max_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RankConfig::default();
        assert_eq!(config.default_length, 6);
        assert_eq!(config.max_length, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_lengths() {
        assert!(RankConfig::default().with_default_length(0).validate().is_err());
        assert!(RankConfig::default().with_max_length(0).validate().is_err());
    }

    #[test]
    fn test_validate_default_exceeds_max() {
        let config = RankConfig::default()
            .with_default_length(10)
            .with_max_length(8);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rank_length_small_counts_use_default() {
        let config = RankConfig::default();
        assert_eq!(config.rank_length(0), 6);
        assert_eq!(config.rank_length(1), 6);
        assert_eq!(config.rank_length(10), 6);
        // 26^3 = 17_576 covers 1_000 items -> 2 * 3 = 6
        assert_eq!(config.rank_length(1_000), 6);
    }

    #[test]
    fn test_rank_length_grows_with_count() {
        let config = RankConfig::default();
        // 26^4 = 456_976 < 1_000_000 <= 26^5
        assert_eq!(config.rank_length(1_000_000), 10);
        assert_eq!(config.rank_length(456_976), 8);
        assert_eq!(config.rank_length(456_977), 10);
    }

    #[test]
    fn test_rank_length_is_monotonic() {
        let config = RankConfig::default();
        let mut last = 0;
        for n in [0usize, 1, 26, 27, 676, 677, 17_576, 17_577, usize::MAX] {
            let length = config.rank_length(n);
            assert!(length >= last);
            last = length;
        }
    }

    #[test]
    fn test_rank_length_respects_max() {
        let config = RankConfig::default()
            .with_default_length(2)
            .with_max_length(4);
        assert_eq!(config.rank_length(usize::MAX), 4);
    }
}
