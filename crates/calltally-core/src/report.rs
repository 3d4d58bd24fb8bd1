//! CSV rendering of the aggregated histogram.

use crate::histogram::{DayHistogram, INVALID_CODE_KEY, ROW_SLOTS};

/// Fixed header row: label columns, then one column per day of month.
pub const REPORT_HEADER: &str =
    "Keys,Total,1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16,17,18,19,20,21,22,23,24,25,26,27,28,29,30,31";

/// Label substituted for the sentinel key in the rendered report.
const INVALID_ROW_LABEL: &str = "Invalid";

/// Label of the trailing element-wise sum row.
const TOTAL_ROW_LABEL: &str = "Total";

/// Renders the histogram as CSV: header, one row per key in ascending
/// numeric key order, then a trailing `Total` row summing every column
/// across all rows (the invalid row included). Deterministic for a given
/// store; `\n` line endings, no quoting.
pub fn render_report(histogram: &DayHistogram) -> String {
    let mut out = String::new();
    out.push_str(REPORT_HEADER);
    out.push('\n');

    let mut totals = [0_u64; ROW_SLOTS];
    for (key, row) in histogram.rows_sorted() {
        let label = if key == INVALID_CODE_KEY {
            INVALID_ROW_LABEL
        } else {
            key
        };
        out.push_str(label);
        for (slot, value) in row.iter().enumerate() {
            totals[slot] += value;
            out.push(',');
            out.push_str(&value.to_string());
        }
        out.push('\n');
    }

    out.push_str(TOTAL_ROW_LABEL);
    for value in totals {
        out.push(',');
        out.push_str(&value.to_string());
    }
    out.push('\n');
    out
}
