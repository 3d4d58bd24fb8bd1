//! Aggregation primitives for the calltally report pipeline.
//!
//! Pure pieces with no network dependencies: the delimited-text code
//! extractor, the day-of-month histogram, the CSV renderer, and the
//! atomic file-write helper used for report artifacts.

pub mod atomic_io;
pub mod extract;
pub mod histogram;
pub mod report;

pub use atomic_io::write_text_atomic;
pub use extract::{extract_between, CODE_LEFT_DELIMITER, CODE_RIGHT_DELIMITER};
pub use histogram::{parse_leading_int, DayHistogram, INVALID_CODE_KEY, ROW_SLOTS};
pub use report::render_report;
