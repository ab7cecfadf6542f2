//! Log level counter
//!
//! A line counts toward a level only when it starts with `[INFO]`, `[ERROR]`
//! or `[WARN]` at position 0. Nothing after the closing bracket is inspected,
//! so `[INFO]missing-space` counts as INFO. Anything else is skipped.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::logs::LogLevel;
use crate::{Error, Result};

static LEVEL_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(INFO|ERROR|WARN)\]").expect("level prefix pattern"));

/// Occurrences per observed level. Levels never seen have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelCounts(BTreeMap<LogLevel, usize>);

impl LevelCounts {
    /// Count for `level`, zero when absent
    pub fn get(&self, level: LogLevel) -> usize {
        self.0.get(&level).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LogLevel, usize)> + '_ {
        self.0.iter().map(|(level, count)| (*level, *count))
    }

    fn increment(&mut self, level: LogLevel) {
        *self.0.entry(level).or_insert(0) += 1;
    }
}

impl FromIterator<(LogLevel, usize)> for LevelCounts {
    fn from_iter<I: IntoIterator<Item = (LogLevel, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().filter(|(_, count)| *count > 0).collect())
    }
}

/// What to do with entries that are not strings at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CountPolicy {
    /// Treat them as unmatched lines
    #[default]
    Lenient,
    /// Fail on the first one
    Strict,
}

/// Extract the bracketed level prefix of a line, if recognized
pub fn parse_level(line: &str) -> Option<LogLevel> {
    let caps = LEVEL_PREFIX.captures(line)?;
    caps.get(1)?.as_str().parse().ok()
}

/// Tally recognized level prefixes across `lines`
pub fn count_log_levels<I, S>(lines: I) -> LevelCounts
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = LevelCounts::default();
    for line in lines {
        if let Some(level) = parse_level(line.as_ref()) {
            counts.increment(level);
        }
    }
    counts
}

/// Tally level prefixes across loosely-typed JSON entries.
///
/// String entries are counted like [`count_log_levels`]. Any other JSON value
/// is skipped under [`CountPolicy::Lenient`] and rejected with
/// [`Error::MalformedEntry`] under [`CountPolicy::Strict`].
pub fn count_entries(entries: &[Value], policy: CountPolicy) -> Result<LevelCounts> {
    let mut counts = LevelCounts::default();

    for (index, entry) in entries.iter().enumerate() {
        let found = match entry {
            Value::String(line) => {
                if let Some(level) = parse_level(line) {
                    counts.increment(level);
                }
                continue;
            }
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        };

        if policy == CountPolicy::Strict {
            return Err(Error::MalformedEntry { index, found });
        }
        tracing::trace!(index, found, "skipping non-string log entry");
    }

    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn counts(pairs: &[(LogLevel, usize)]) -> LevelCounts {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_mixed_levels() {
        let lines = ["[INFO] a", "[ERROR] b", "[INFO] c", "[WARN] d", "[ERROR] e"];

        let result = count_log_levels(lines);

        assert_eq!(
            result,
            counts(&[
                (LogLevel::Info, 2),
                (LogLevel::Error, 2),
                (LogLevel::Warn, 1)
            ])
        );
        assert_eq!(result.total(), 5);
    }

    #[test]
    fn test_empty_input_has_no_keys() {
        let result = count_log_levels(Vec::<String>::new());

        assert!(result.is_empty());
        assert_eq!(serde_json::to_value(&result).unwrap(), json!({}));
        assert_eq!(result.get(LogLevel::Info), 0);
    }

    #[test]
    fn test_prefix_boundary() {
        let lines = ["[DEBUG] x", "no-bracket line", "[INFO]missing-space"];

        let result = count_log_levels(lines);

        // Nothing is required after the closing bracket
        assert_eq!(result, counts(&[(LogLevel::Info, 1)]));
    }

    #[test]
    fn test_level_must_be_anchored_prefix() {
        let lines = [
            " [INFO] leading space",
            "INFO no brackets",
            "message mentions [ERROR] later",
            "[info] lower case",
            "[WARNING] longer tag",
            "[TRACE] unknown",
            "",
        ];

        assert!(count_log_levels(lines).is_empty());
    }

    #[test]
    fn test_sample_logs() {
        let result = count_log_levels(crate::logs::SAMPLE_LOGS);

        assert_eq!(
            result,
            counts(&[(LogLevel::Info, 2), (LogLevel::Error, 1)])
        );
        assert_eq!(result.get(LogLevel::Warn), 0);
    }

    #[test]
    fn test_serializes_as_level_map() {
        let result = count_log_levels(["[WARN] a", "[INFO] b", "[WARN] c"]);

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({ "INFO": 1, "WARN": 2 })
        );
    }

    #[test]
    fn test_lenient_skips_malformed_entries() {
        let entries = vec![
            json!({ "lvl": "INFO" }),
            Value::Null,
            json!({}),
            json!("[ERROR] real line"),
            json!(42),
        ];

        let result = count_entries(&entries, CountPolicy::Lenient).unwrap();

        assert_eq!(result, counts(&[(LogLevel::Error, 1)]));
    }

    #[test]
    fn test_strict_rejects_first_malformed_entry() {
        let entries = vec![json!("[INFO] ok"), Value::Null, json!({ "lvl": "INFO" })];

        let err = count_entries(&entries, CountPolicy::Strict).unwrap_err();

        match err {
            Error::MalformedEntry { index, found } => {
                assert_eq!(index, 1);
                assert_eq!(found, "null");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_strict_accepts_string_entries() {
        let entries = vec![json!("[INFO] a"), json!("garbage"), json!("[WARN] b")];

        let result = count_entries(&entries, CountPolicy::Strict).unwrap();

        assert_eq!(
            result,
            counts(&[(LogLevel::Info, 1), (LogLevel::Warn, 1)])
        );
    }

    #[test]
    fn test_strict_names_entry_type() {
        let cases = [
            (json!(true), "boolean"),
            (json!(7), "number"),
            (json!(["[INFO] nested"]), "array"),
            (json!({ "level": "INFO" }), "object"),
        ];

        for (entry, expected) in cases {
            let entries = vec![json!("[WARN] first"), entry];
            match count_entries(&entries, CountPolicy::Strict) {
                Err(Error::MalformedEntry { index, found }) => {
                    assert_eq!(index, 1);
                    assert_eq!(found, expected);
                }
                other => panic!("unexpected result: {other:?}"),
            }
        }
    }

    fn line_strategy() -> impl Strategy<Value = String> {
        let prefix = prop_oneof![
            Just("[INFO]"),
            Just("[ERROR]"),
            Just("[WARN]"),
            Just("[DEBUG]"),
            Just("[info]"),
            Just(" [INFO]"),
            Just("WARN"),
            Just(""),
        ];
        (prefix, "[a-z0-9 :-]{0,20}").prop_map(|(prefix, rest)| format!("{prefix}{rest}"))
    }

    fn expected_matches(lines: &[String]) -> usize {
        lines
            .iter()
            .filter(|line| {
                line.starts_with("[INFO]") || line.starts_with("[ERROR]") || line.starts_with("[WARN]")
            })
            .count()
    }

    proptest! {
        #[test]
        fn total_equals_matching_lines(lines in prop::collection::vec(line_strategy(), 0..40)) {
            let result = count_log_levels(&lines);

            prop_assert_eq!(result.total(), expected_matches(&lines));
            prop_assert!(result.len() <= LogLevel::ALL.len());
            prop_assert!(result.iter().all(|(_, count)| count > 0));
        }

        #[test]
        fn keys_stay_within_known_levels(lines in prop::collection::vec(".{0,24}", 0..20)) {
            let value = serde_json::to_value(count_log_levels(&lines)).unwrap();
            let map = value.as_object().unwrap();

            for key in map.keys() {
                prop_assert!(["INFO", "ERROR", "WARN"].contains(&key.as_str()));
            }
        }

        #[test]
        fn permutation_does_not_change_counts(
            (lines, shuffled) in prop::collection::vec(line_strategy(), 0..30)
                .prop_flat_map(|lines| (Just(lines.clone()), Just(lines).prop_shuffle()))
        ) {
            prop_assert_eq!(count_log_levels(&lines), count_log_levels(&shuffled));
        }
    }
}
