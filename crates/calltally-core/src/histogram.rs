//! Keyed day-of-month occurrence histogram backing the CSV report.

use std::collections::HashMap;

/// Sentinel key recording calls whose event log yielded no extractable code.
pub const INVALID_CODE_KEY: &str = "1000000000";

/// Counter slots per row: slot 0 holds the running total, slots 1..=31
/// count occurrences per day of month.
pub const ROW_SLOTS: usize = 32;

/// Parses the leading decimal integer of `value`: optional leading
/// whitespace and sign, then digits up to the first non-digit; `0` when
/// there are none. Values beyond the `i64` range saturate.
pub fn parse_leading_int(value: &str) -> i64 {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let mut parsed = 0_i64;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        parsed = parsed
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }
    if negative {
        parsed.saturating_neg()
    } else {
        parsed
    }
}

/// Occurrence counts per extracted code, keyed by the canonical decimal
/// form of the code. The map owns both keys and rows for its lifetime;
/// exclusive single-threaded access for the duration of a walk.
#[derive(Debug, Default)]
pub struct DayHistogram {
    rows: HashMap<String, [u64; ROW_SLOTS]>,
}

impl DayHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `key` on `day`.
    ///
    /// The key is normalized to canonical decimal form before lookup, so
    /// `"007"` and `"7"` accumulate into the same row. A new key
    /// allocates a zeroed row. Days outside 1..=31 leave every cell
    /// untouched, including the running total in slot 0.
    pub fn increment(&mut self, key: &str, day: i32) {
        let canonical = parse_leading_int(key).to_string();
        let row = self.rows.entry(canonical).or_insert([0; ROW_SLOTS]);
        if (1..=31).contains(&day) {
            row[day as usize] += 1;
            row[0] += 1;
        }
    }

    /// Rows ordered by ascending numeric key value.
    pub fn rows_sorted(&self) -> Vec<(&str, &[u64; ROW_SLOTS])> {
        let mut rows: Vec<_> = self
            .rows
            .iter()
            .map(|(key, row)| (key.as_str(), row))
            .collect();
        rows.sort_by_key(|(key, _)| parse_leading_int(key));
        rows
    }

    /// Looks up the row for `key` under the same normalization as
    /// [`DayHistogram::increment`].
    pub fn row(&self, key: &str) -> Option<&[u64; ROW_SLOTS]> {
        self.rows.get(&parse_leading_int(key).to_string())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_sum(row: &[u64; ROW_SLOTS]) -> u64 {
        row[1..].iter().sum()
    }

    #[test]
    fn total_slot_tracks_day_cells_across_increments() {
        let mut histogram = DayHistogram::new();
        for day in [1, 2, 2, 15, 31, 31, 31] {
            histogram.increment("42", day);
        }
        histogram.increment("7", 9);

        for (_, row) in histogram.rows_sorted() {
            assert_eq!(row[0], day_sum(row));
        }
        let row = histogram.row("42").expect("row for 42");
        assert_eq!(row[0], 7);
        assert_eq!(row[1], 1);
        assert_eq!(row[2], 2);
        assert_eq!(row[15], 1);
        assert_eq!(row[31], 3);
    }

    #[test]
    fn out_of_range_days_change_nothing() {
        let mut histogram = DayHistogram::new();
        for day in [0, 32, -1, -31, 100] {
            histogram.increment("9", day);
        }
        let row = histogram.row("9").expect("row is still allocated");
        assert!(row.iter().all(|cell| *cell == 0));
    }

    #[test]
    fn textual_variants_of_a_key_share_one_row() {
        let mut histogram = DayHistogram::new();
        histogram.increment("07", 3);
        histogram.increment("7", 3);
        histogram.increment(" 7", 4);

        assert_eq!(histogram.len(), 1);
        let row = histogram.row("7").expect("row for 7");
        assert_eq!(row[0], 3);
        assert_eq!(row[3], 2);
        assert_eq!(row[4], 1);
    }

    #[test]
    fn rows_sort_by_numeric_key_value() {
        let mut histogram = DayHistogram::new();
        for key in ["10", "2", INVALID_CODE_KEY, "007"] {
            histogram.increment(key, 1);
        }
        let keys: Vec<&str> = histogram.rows_sorted().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["2", "7", "10", INVALID_CODE_KEY]);
    }

    #[test]
    fn parse_leading_int_matches_atoi_semantics() {
        assert_eq!(parse_leading_int("42"), 42);
        assert_eq!(parse_leading_int("007"), 7);
        assert_eq!(parse_leading_int("  12ab"), 12);
        assert_eq!(parse_leading_int("-5"), -5);
        assert_eq!(parse_leading_int("+8"), 8);
        assert_eq!(parse_leading_int("abc"), 0);
        assert_eq!(parse_leading_int(""), 0);
        assert_eq!(parse_leading_int("99999999999999999999999"), i64::MAX);
    }
}
