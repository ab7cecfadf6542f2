//! Log lines: the canned sample set and the level counter

pub mod counter;
pub mod level;
pub mod store;

pub use counter::{count_entries, count_log_levels, parse_level, CountPolicy, LevelCounts};
pub use level::LogLevel;
pub use store::{sample_logs, SAMPLE_LOGS};
