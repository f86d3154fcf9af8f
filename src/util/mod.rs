//! Utility modules for regdash.

mod timestamp;

pub use timestamp::{TimestampParseError, parse_created_at};
