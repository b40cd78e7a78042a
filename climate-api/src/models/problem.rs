use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// RFC 7807 error body returned for rejected requests.
#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetails {
    /// Reference to the problem type
    #[serde(rename = "type")]
    pub problem_type: String,
    /// Short summary of the problem
    pub title: String,
    /// HTTP status code
    pub status: u16,
    /// Explanation specific to this occurrence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Validation messages keyed by field name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
    /// Correlation identifier for server side failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_id: Option<String>,
}
