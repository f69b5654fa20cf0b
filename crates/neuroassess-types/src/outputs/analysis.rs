use std::fmt;

use serde::{Deserialize, Serialize};

/// The assessment report produced by the most recent successful analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult(String);

impl AnalysisResult {
    pub fn new(report: impl Into<String>) -> Self {
        Self(report.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AnalysisResult {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
