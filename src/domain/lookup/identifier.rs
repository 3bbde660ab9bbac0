// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Largest value that still fits in eight digits.
pub const MAX_IDENTIFIER: i64 = 99_999_999;

/// Reads an identifier the way a lenient integer conversion would: surrounding
/// whitespace and a leading sign are accepted, anything else must be digits.
pub fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Parses `raw` and checks that it can be written with eight digits.
pub fn parse_eight_digits(raw: &str) -> Option<u32> {
    parse_integer(raw)
        .filter(|n| (0..=MAX_IDENTIFIER).contains(n))
        .map(|n| n as u32)
}
