//! JSON serialization for estimated statistics.

use crate::statistics::EstimatedStatistics;

/// Serialize statistics to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `EstimatedStatistics`).
pub fn to_json(statistics: &EstimatedStatistics) -> Result<String, serde_json::Error> {
    serde_json::to_string(statistics)
}

/// Serialize statistics to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `EstimatedStatistics`).
pub fn to_json_pretty(statistics: &EstimatedStatistics) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(statistics)
}
