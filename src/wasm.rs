//! JavaScript bindings for browser-side reordering.
//!
//! Mirrors the free functions of [`crate::lexorank`] with camelCase names.
//! Rank strings are validated on entry so malformed input raises an `Error`
//! carrying the [`RankError`](crate::lexorank::RankError) message instead of
//! aborting the module.

use crate::lexorank::{self, Rank};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct ParsedRank<'a> {
    bucket: u32,
    digits: &'a str,
}

#[wasm_bindgen(js_name = rankBetween)]
pub fn rank_between(
    previous: Option<String>,
    next: Option<String>,
    expected_count: usize,
    allow_unordered: bool,
) -> Result<String, JsError> {
    for token in previous.iter().chain(next.iter()) {
        token.parse::<Rank>()?;
    }
    let rank = lexorank::rank_between(
        previous.as_deref(),
        next.as_deref(),
        expected_count,
        allow_unordered,
    )?;
    Ok(rank)
}

#[wasm_bindgen(js_name = rankAfter)]
pub fn rank_after(rank: &str, expected_count: usize) -> Result<String, JsError> {
    rank.parse::<Rank>()?;
    Ok(lexorank::rank_after(rank, expected_count))
}

#[wasm_bindgen(js_name = rankSuccessor)]
pub fn rank_successor(rank: &str) -> Result<String, JsError> {
    rank.parse::<Rank>()?;
    Ok(lexorank::rank_successor(rank))
}

#[wasm_bindgen(js_name = minRank)]
pub fn min_rank(expected_count: usize) -> String {
    lexorank::min_rank(expected_count)
}

#[wasm_bindgen(js_name = maxRank)]
pub fn max_rank(expected_count: usize) -> String {
    lexorank::max_rank(expected_count)
}

/// Splits a rank into `{ bucket, digits }`, validating both parts.
#[wasm_bindgen(js_name = parseRank)]
pub fn parse_rank(token: &str) -> Result<JsValue, JsError> {
    token.parse::<Rank>()?;
    let (bucket, digits) = lexorank::parse_bucket_and_rank(token);
    serde_wasm_bindgen::to_value(&ParsedRank { bucket, digits })
        .map_err(|e| JsError::new(&e.to_string()))
}

#[wasm_bindgen]
pub fn rebalance(count: usize, bucket: u32) -> Vec<String> {
    lexorank::rebalance(count, bucket)
}

/// Compares two ranks, returning -1, 0 or 1 for use in `Array.sort`.
#[wasm_bindgen(js_name = compareRanks)]
pub fn compare_ranks(a: &str, b: &str) -> Result<i32, JsError> {
    let a: Rank = a.parse()?;
    let b: Rank = b.parse()?;
    Ok(a.cmp(&b) as i32)
}
