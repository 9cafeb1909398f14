// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Levenshtein edit distance.
//!
//! The table is filled row by row with the usual recurrence:
//!
//! ```text
//! d[i][0] = i
//! d[0][j] = j
//! d[i][j] = d[i-1][j-1]                                   if a[i] == b[j]
//!         = 1 + min(d[i-1][j], d[i][j-1], d[i-1][j-1])    otherwise
//! ```
//!
//! Only two rows are kept alive, so memory is O(|b|).

/// Computes the Levenshtein distance between `a` and `b`.
///
/// Characters are compared as Unicode scalar values, case-sensitively.
pub fn distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();

    // Row i-1 of the table; starts as d[0][j] = j
    let mut previous: Vec<usize> = (0..=b_chars.len()).collect();
    let mut current = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            current[j + 1] = if ca == cb {
                previous[j]
            } else {
                1 + previous[j].min(previous[j + 1]).min(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b_chars.len()]
}
