use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

/// Result of a single archive check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed
    Ok,
    /// Check passed, but something is missing or odd
    Warning(String),
    /// Check failed
    Failed(String),
}

impl CheckStatus {
    fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Ok)
    }

    fn is_failed(&self) -> bool {
        matches!(self, CheckStatus::Failed(_))
    }
}

/// One named check, usually scoped to an item (`item_001: contents`)
#[derive(Debug, Clone)]
pub struct ValidationCheck {
    /// Name of the check
    pub name: String,
    /// Outcome of the check
    pub status: CheckStatus,
}

impl ValidationCheck {
    pub(crate) fn ok(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Ok,
        }
    }

    pub(crate) fn warning(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Warning(message.into()),
        }
    }

    pub(crate) fn failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Failed(message.into()),
        }
    }
}

/// All checks run against one archive
#[derive(Debug)]
pub struct ValidationReport {
    /// Individual check results, in item order
    pub checks: Vec<ValidationCheck>,
    /// The archive root that was checked
    pub archive_path: String,
}

impl ValidationReport {
    /// Create an empty report for the given archive
    pub fn new(archive_path: impl Into<String>) -> Self {
        Self {
            checks: Vec::new(),
            archive_path: archive_path.into(),
        }
    }

    /// Add a check result
    pub fn add_check(&mut self, check: ValidationCheck) {
        self.checks.push(check);
    }

    /// True if any check failed
    pub fn has_failures(&self) -> bool {
        self.checks.iter().any(|c| c.status.is_failed())
    }

    /// True if any check produced a warning
    pub fn has_warnings(&self) -> bool {
        self.checks
            .iter()
            .any(|c| matches!(c.status, CheckStatus::Warning(_)))
    }

    /// Number of passed checks
    pub fn success_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_ok()).count()
    }

    /// Number of warnings
    pub fn warning_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| matches!(c.status, CheckStatus::Warning(_)))
            .count()
    }

    /// Number of failed checks
    pub fn failure_count(&self) -> usize {
        self.checks.iter().filter(|c| c.status.is_failed()).count()
    }

    fn verdict(&self) -> &'static str {
        if self.has_failures() {
            "Archive check FAILED"
        } else if self.has_warnings() {
            "Archive check PASSED with warnings"
        } else {
            "Archive check PASSED"
        }
    }

    /// Format the report with colors (requires the `colorized_output` feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            use console::Emoji;

            static OK: Emoji<'_, '_> = Emoji("✓", "[OK]");
            static WARN: Emoji<'_, '_> = Emoji("⚠", "[WARN]");
            static FAIL: Emoji<'_, '_> = Emoji("✗", "[FAIL]");

            let mut output = String::new();
            output.push_str(&format!("{}\n", style("SAF Archive Report").bold().cyan()));
            output.push_str(&format!("{}\n", style("==================").cyan()));
            output.push_str(&format!("{}: {}\n\n", style("Archive").bold(), self.archive_path));

            for check in &self.checks {
                match &check.status {
                    CheckStatus::Ok => {
                        output.push_str(&format!("[{}] {}\n", OK, style(&check.name).green()));
                    }
                    CheckStatus::Warning(msg) => {
                        output.push_str(&format!(
                            "[{}] {} - {}: {}\n",
                            WARN,
                            style(&check.name).yellow(),
                            style("WARNING").yellow().bold(),
                            msg
                        ));
                    }
                    CheckStatus::Failed(msg) => {
                        output.push_str(&format!(
                            "[{}] {} - {}: {}\n",
                            FAIL,
                            style(&check.name).red(),
                            style("FAILED").red().bold(),
                            msg
                        ));
                    }
                }
            }

            output.push('\n');
            output.push_str(&format!(
                "{}: {} passed, {} warnings, {} failed\n\n",
                style("Summary").bold(),
                style(self.success_count()).green(),
                style(self.warning_count()).yellow(),
                style(self.failure_count()).red()
            ));

            let verdict = if self.has_failures() {
                style(self.verdict()).red().bold()
            } else if self.has_warnings() {
                style(self.verdict()).yellow().bold()
            } else {
                style(self.verdict()).green().bold()
            };
            output.push_str(&format!("{}\n", verdict));

            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SAF Archive Report")?;
        writeln!(f, "==================")?;
        writeln!(f, "Archive: {}", self.archive_path)?;
        writeln!(f)?;

        for check in &self.checks {
            let symbol = match &check.status {
                CheckStatus::Ok => "✓",
                CheckStatus::Warning(_) => "⚠",
                CheckStatus::Failed(_) => "✗",
            };

            write!(f, "[{}] {}", symbol, check.name)?;

            match &check.status {
                CheckStatus::Ok => writeln!(f)?,
                CheckStatus::Warning(msg) => writeln!(f, " - WARNING: {}", msg)?,
                CheckStatus::Failed(msg) => writeln!(f, " - FAILED: {}", msg)?,
            }
        }

        writeln!(f)?;
        writeln!(
            f,
            "Summary: {} passed, {} warnings, {} failed",
            self.success_count(),
            self.warning_count(),
            self.failure_count()
        )?;
        writeln!(f)?;
        writeln!(f, "{}", self.verdict())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts_and_verdict() {
        let mut report = ValidationReport::new("archive");
        report.add_check(ValidationCheck::ok("item_001: contents"));
        assert_eq!(report.verdict(), "Archive check PASSED");

        report.add_check(ValidationCheck::warning("item_001: dublin_core.xml", "missing"));
        assert!(report.has_warnings());
        assert_eq!(report.verdict(), "Archive check PASSED with warnings");

        report.add_check(ValidationCheck::failed("item_002: contents", "gone.pdf missing"));
        assert_eq!(report.success_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.failure_count(), 1);

        let text = report.to_string();
        assert!(text.contains("[✗] item_002: contents - FAILED: gone.pdf missing"));
        assert!(text.ends_with("Archive check FAILED\n"));
    }
}
