//! Letter codec and base-26 digit arithmetic.
//!
//! Digit vectors are big-endian: index 0 is the most significant digit.
//! Arithmetic helpers align their operands on the right (least significant
//! end), as for ordinary positional integers. Callers that treat a rank as
//! a fraction pad on the right themselves before calling in.

use std::cmp::Ordering;
use std::iter;

/// Size of the digit alphabet.
pub const BASE: u8 = 26;

/// Smallest digit, encoded as `'a'`.
pub const MIN_DIGIT: u8 = 0;

/// Largest digit, encoded as `'z'`.
pub const MAX_DIGIT: u8 = BASE - 1;

/// Digit appended when two ranks are adjacent at the current precision.
pub const MID_DIGIT: u8 = (MAX_DIGIT - MIN_DIGIT) / 2;

/// Separator between the bucket and the digit portion of a rank string.
pub const BUCKET_SEPARATOR: char = '|';

/// Encodes a digit in `0..26` as a letter in `'a'..='z'`.
///
/// # Panics
///
/// Panics if `value >= 26`.
pub fn encode_digit(value: u8) -> char {
    assert!(value < BASE, "rank digit out of range: {value}");
    char::from(b'a' + value)
}

/// Decodes a letter in `'a'..='z'` to its digit value.
///
/// # Panics
///
/// Panics if `letter` is not a lowercase ASCII letter.
pub fn decode_digit(letter: char) -> u8 {
    assert!(
        letter.is_ascii_lowercase(),
        "rank letter out of range: {letter:?}"
    );
    letter as u8 - b'a'
}

/// Converts a letter string to its digit sequence.
pub fn parse_rank(letters: &str) -> Vec<u8> {
    letters.chars().map(decode_digit).collect()
}

/// Renders a digit sequence as a canonical `"{bucket}|{letters}"` string.
pub fn format_rank(values: &[u8], bucket: u32) -> String {
    let mut out = String::with_capacity(values.len() + 4);
    out.push_str(&bucket.to_string());
    out.push(BUCKET_SEPARATOR);
    out.extend(values.iter().map(|&v| encode_digit(v)));
    out
}

/// Splits a rank string into its bucket and digit portion.
///
/// Strings without a separator predate bucket prefixes; they belong to
/// bucket 0 and the whole token is the digit portion.
///
/// # Panics
///
/// Panics if the bucket prefix is not a decimal integer.
pub fn parse_bucket_and_rank(token: &str) -> (u32, &str) {
    match token.split_once(BUCKET_SEPARATOR) {
        Some((bucket, letters)) => {
            let bucket = bucket
                .parse()
                .unwrap_or_else(|_| panic!("malformed rank bucket in {token:?}"));
            (bucket, letters)
        }
        None => (0, token),
    }
}

pub(crate) fn render(values: &[u8]) -> String {
    values.iter().map(|&v| encode_digit(v)).collect()
}

pub(crate) fn pad_right(values: &[u8], length: usize, fill: u8) -> Vec<u8> {
    let mut out = values.to_vec();
    if out.len() < length {
        out.resize(length, fill);
    }
    out
}

/// Compares two digit sequences as base-26 fractions.
///
/// The shorter side is treated as padded with [`MIN_DIGIT`], so `"b"` and
/// `"baa"` compare equal.
pub(crate) fn cmp_fraction(a: &[u8], b: &[u8]) -> Ordering {
    let width = a.len().max(b.len());
    let lhs = a.iter().copied().chain(iter::repeat(MIN_DIGIT)).take(width);
    let rhs = b.iter().copied().chain(iter::repeat(MIN_DIGIT)).take(width);
    lhs.cmp(rhs)
}

/// Decomposes `value` into base-26 digits, most significant first.
///
/// Zero decomposes to an empty vector.
pub(crate) fn from_value(mut value: u128) -> Vec<u8> {
    let base = u128::from(BASE);
    let mut out = Vec::new();
    while value > 0 {
        out.push((value % base) as u8);
        value /= base;
    }
    out.reverse();
    out
}

fn digit_at(values: &[u8], offset: usize) -> u8 {
    values
        .len()
        .checked_sub(offset + 1)
        .map_or(0, |index| values[index])
}

/// Adds two right-aligned digit sequences.
///
/// The result is as wide as the wider operand. A carry out of the most
/// significant position is decomposed into proper digits and prepended.
pub(crate) fn add(a: &[u8], b: &[u8]) -> Vec<u8> {
    let width = a.len().max(b.len());
    let mut out = vec![MIN_DIGIT; width];
    let mut carry = 0u128;
    for offset in 0..width {
        let sum = u128::from(digit_at(a, offset)) + u128::from(digit_at(b, offset)) + carry;
        out[width - 1 - offset] = (sum % u128::from(BASE)) as u8;
        carry = sum / u128::from(BASE);
    }
    if carry > 0 {
        let mut grown = from_value(carry);
        grown.extend(out);
        grown
    } else {
        out
    }
}

/// Subtracts right-aligned `b` from `a`.
///
/// Returns `None` when `b > a`. The result is as wide as the wider operand.
pub(crate) fn sub(a: &[u8], b: &[u8]) -> Option<Vec<u8>> {
    let width = a.len().max(b.len());
    let mut out = vec![MIN_DIGIT; width];
    let mut borrow = 0i16;
    for offset in 0..width {
        let mut diff = i16::from(digit_at(a, offset)) - i16::from(digit_at(b, offset)) - borrow;
        if diff < 0 {
            diff += i16::from(BASE);
            borrow = 1;
        } else {
            borrow = 0;
        }
        out[width - 1 - offset] = diff as u8;
    }
    (borrow == 0).then_some(out)
}

/// Long division by a small divisor, most significant digit first.
///
/// The quotient keeps the width of the dividend; the remainder is dropped.
pub(crate) fn div_small(values: &[u8], divisor: u128) -> Vec<u8> {
    debug_assert!(divisor > 0);
    let mut remainder = 0u128;
    values
        .iter()
        .map(|&digit| {
            let current = remainder * u128::from(BASE) + u128::from(digit);
            remainder = current % divisor;
            (current / divisor) as u8
        })
        .collect()
}

pub(crate) fn halve(values: &[u8]) -> Vec<u8> {
    div_small(values, 2)
}

pub(crate) fn trim_leading_zeros(values: &[u8]) -> &[u8] {
    let start = values
        .iter()
        .position(|&d| d != MIN_DIGIT)
        .unwrap_or(values.len());
    &values[start..]
}
