//! Bucketed lexicographic ranking (LexoRank).
//!
//! Provides order keys ("ranks") for manually ordered records, such that a
//! new key can always be placed strictly between two existing keys without
//! renumbering any other record:
//!
//! - **Midpoint derivation**: a rank strictly between two neighbours, growing
//!   precision when the neighbours are adjacent.
//! - **Even spacing**: forward steps sized from an expected item count, used
//!   for appends and for rebalancing a whole bucket.
//! - **Buckets**: independent numbering partitions encoded as a
//!   `"{bucket}|"` prefix on the rank string.
//!
//! # Architecture
//!
//! Everything is a pure function over strings and integers. Digits are
//! manipulated as base-26 digit vectors with explicit carry and borrow
//! propagation, so precision is bounded only by the configured maximum
//! rank length. Persisting ranks, and serialising concurrent writers that
//! target the same gap, is left to the caller.

pub mod lexorank;

#[cfg(feature = "wasm")]
pub mod wasm;
