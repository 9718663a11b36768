use crate::models::FieldIssue;
use std::path::{Path, PathBuf};

/// A row the loader refused, with enough context to fix the source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIssue {
    pub line: u64,
    pub column: String,
    pub value: String,
    pub reason: String,
}

impl RowIssue {
    pub fn from_field(line: u64, issue: FieldIssue) -> Self {
        Self {
            line,
            column: issue.column.to_string(),
            value: issue.value,
            reason: issue.reason,
        }
    }

    /// A row the CSV layer could not split or map onto the header
    pub fn structural(line: u64, reason: impl Into<String>) -> Self {
        Self {
            line,
            column: "*".to_string(),
            value: String::new(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for RowIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.value.is_empty() {
            write!(f, "line {}: {} ({})", self.line, self.reason, self.column)
        } else {
            write!(
                f,
                "line {}: {} '{}': {}",
                self.line, self.column, self.value, self.reason
            )
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadReport {
    pub source: PathBuf,
    pub total_rows: usize,
    pub accepted_rows: usize,
    pub issues: Vec<RowIssue>,
}

impl LoadReport {
    pub fn new(source: &Path) -> Self {
        Self {
            source: source.to_path_buf(),
            total_rows: 0,
            accepted_rows: 0,
            issues: Vec::new(),
        }
    }

    pub fn record_accepted(&mut self) {
        self.total_rows += 1;
        self.accepted_rows += 1;
    }

    pub fn record_rejected(&mut self, issue: RowIssue) {
        self.total_rows += 1;
        self.issues.push(issue);
    }

    pub fn rejected_rows(&self) -> usize {
        self.issues.len()
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str(&format!("=== Load Report: {} ===\n", self.source.display()));
        summary.push_str(&format!("Total Rows: {}\n", self.total_rows));
        summary.push_str(&format!(
            "Accepted Rows: {} ({:.1}%)\n",
            self.accepted_rows,
            percentage(self.accepted_rows, self.total_rows)
        ));
        summary.push_str(&format!(
            "Rejected Rows: {} ({:.1}%)\n",
            self.rejected_rows(),
            percentage(self.rejected_rows(), self.total_rows)
        ));

        if !self.issues.is_empty() {
            summary.push_str("\nTop 10 Issues:\n");
            for (i, issue) in self.issues.iter().take(10).enumerate() {
                summary.push_str(&format!("  {}. {}\n", i + 1, issue));
            }
        }

        summary
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * part as f64 / total as f64
    }
}
