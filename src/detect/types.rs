//! Core types for scan results.

use serde::{Deserialize, Serialize};

/// Severity levels for findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Critical,
    Warning,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Level::Critical => write!(f, "critical"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A single detected issue in one effect block.
///
/// `start_line` and `end_line` are 1-based and inclusive, and always satisfy
/// `start_line <= end_line`. The level is fixed at classification time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    pub level: Level,
    pub file: String,
    pub start_line: usize,
    pub end_line: usize,
    pub message: String,
    pub suggestion: String,
}

impl Finding {
    /// Location in `path:start-end` form, as printed in reports.
    pub fn location(&self) -> String {
        format!("{}:{}-{}", self.file, self.start_line, self.end_line)
    }
}

/// Results of scanning a source tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanResult {
    pub findings: Vec<Finding>,
    /// Number of files scanned successfully.
    pub scanned: usize,
    /// Number of files skipped because they could not be read.
    #[serde(default)]
    pub skipped: usize,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one file's findings to the result.
    pub fn extend(&mut self, findings: Vec<Finding>) {
        self.findings.extend(findings);
    }

    pub fn critical_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.level == Level::Critical)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.findings
            .iter()
            .filter(|f| f.level == Level::Warning)
            .count()
    }

    /// The deployment gate decision: safe when no Critical findings exist.
    pub fn deploy_safe(&self) -> bool {
        self.critical_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(level: Level) -> Finding {
        Finding {
            level,
            file: "src/app.tsx".to_string(),
            start_line: 3,
            end_line: 7,
            message: "test".to_string(),
            suggestion: "test".to_string(),
        }
    }

    #[test]
    fn test_deploy_safe_empty() {
        let result = ScanResult::new();
        assert!(result.deploy_safe());
        assert_eq!(result.critical_count(), 0);
    }

    #[test]
    fn test_deploy_safe_with_critical() {
        let mut result = ScanResult::new();
        result.extend(vec![finding(Level::Critical)]);
        assert!(!result.deploy_safe());
        assert_eq!(result.critical_count(), 1);
        assert_eq!(result.warning_count(), 0);
    }

    #[test]
    fn test_warnings_never_block() {
        let mut result = ScanResult::new();
        result.extend(vec![finding(Level::Warning)]);
        assert!(result.deploy_safe());
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_location_format() {
        let f = finding(Level::Critical);
        assert_eq!(f.location(), "src/app.tsx:3-7");
    }
}
