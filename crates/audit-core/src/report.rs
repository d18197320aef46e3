//! Result presentation: pure transformation of an [`AuditReport`] into
//! display data. No validation happens here; whatever the service returned
//! is categorized and formatted as-is.

use chrono::DateTime;
use serde::Serialize;

use crate::models::AuditReport;

/// Display bucket derived from the compliance score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreTier {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl ScoreTier {
    /// Total over all reals; boundaries are inclusive of the upper bucket.
    pub fn for_score(score: f64) -> Self {
        if score >= 90.0 {
            ScoreTier::Excellent
        } else if score >= 80.0 {
            ScoreTier::Good
        } else if score >= 70.0 {
            ScoreTier::Fair
        } else {
            ScoreTier::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "Excellent",
            ScoreTier::Good => "Good",
            ScoreTier::Fair => "Fair",
            ScoreTier::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "excellent",
            ScoreTier::Good => "good",
            ScoreTier::Fair => "fair",
            ScoreTier::NeedsImprovement => "needs-improvement",
        }
    }

    /// Three-color ramp: green at 90+, orange down to 70, red below.
    pub fn color_hex(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "#48bb78",
            ScoreTier::Good | ScoreTier::Fair => "#ed8936",
            ScoreTier::NeedsImprovement => "#f56565",
        }
    }
}

/// Human-readable projection of an audit report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub document_name: String,
    pub compliance_score: f64,
    pub tier: ScoreTier,
    pub tier_label: &'static str,
    pub color_hex: &'static str,
    pub issue_count: usize,
    pub passed_count: usize,
    pub issues: Vec<String>,
    pub passed_checks: Vec<String>,
    pub audited_at: String,
}

impl ReportView {
    pub fn from_report(report: &AuditReport) -> Self {
        let tier = ScoreTier::for_score(report.compliance_score);
        ReportView {
            document_name: report.document_name.clone(),
            compliance_score: report.compliance_score,
            tier,
            tier_label: tier.label(),
            color_hex: tier.color_hex(),
            issue_count: report.issues.len(),
            passed_count: report.passed_checks.len(),
            issues: report.issues.clone(),
            passed_checks: report.passed_checks.clone(),
            audited_at: format_timestamp(&report.timestamp),
        }
    }
}

/// RFC 3339 timestamps are reformatted for display; anything else is shown
/// verbatim.
fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%Y-%m-%d %H:%M:%S %Z").to_string(),
        Err(_) => raw.to_string(),
    }
}
