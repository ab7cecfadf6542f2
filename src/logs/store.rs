//! Fixed sample log set served by `/api/logs`

pub const SAMPLE_LOGS: [&str; 3] = [
    "[INFO] 2025-06-13T14:22:31Z - User logged in",
    "[ERROR] 2025-06-13T14:23:05Z - Failed to fetch profile",
    "[INFO] 2025-06-13T14:25:00Z - User logged out",
];

/// Owned copy of the sample logs, in their fixed order
pub fn sample_logs() -> Vec<String> {
    SAMPLE_LOGS.iter().map(|line| line.to_string()).collect()
}
