use crate::core::context::ScanOptions;
use crate::validation::sql_error::DbmsSignature;
use serde::{Serialize, Serializer};

pub const BASELINE_ERROR: &str = "Could not fetch URL";

/// Kind of evidence behind a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evidence {
    /// Payload came back verbatim in the body
    Reflected,
    /// Body matched a database error signature
    SqlError(DbmsSignature),
    /// Body length moved by more than the divergence threshold
    ResponseDifference,
    /// Injected delay was observed
    TimeBasedBlind,
}

impl std::fmt::Display for Evidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Evidence::Reflected => write!(f, "reflected"),
            Evidence::SqlError(db) => write!(f, "sql_error_({})", db.tag()),
            Evidence::ResponseDifference => write!(f, "response_difference"),
            Evidence::TimeBasedBlind => write!(f, "time_based_blind"),
        }
    }
}

impl Serialize for Evidence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Finding {
    pub param: String,
    pub payload: String,
    pub url: String,
    pub evidence: Evidence,
    pub context: String,
}

impl Finding {
    pub fn new(param: &str, payload: &str, url: &str, evidence: Evidence, context: String) -> Self {
        Self {
            param: param.to_string(),
            payload: payload.to_string(),
            url: url.to_string(),
            evidence,
            context,
        }
    }
}

/// Outcome of one detector run against one URL
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DetectionResult {
    pub vulnerable: bool,
    pub findings: Vec<Finding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DetectionResult {
    pub fn from_findings(findings: Vec<Finding>) -> Self {
        Self {
            vulnerable: !findings.is_empty(),
            findings,
            error: None,
        }
    }

    /// Result for a target whose baseline could not be fetched
    pub fn unreachable() -> Self {
        Self {
            vulnerable: false,
            findings: Vec::new(),
            error: Some(BASELINE_ERROR.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xss: Option<DetectionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sqli: Option<DetectionResult>,
}

impl PageReport {
    pub fn vulnerable(&self) -> bool {
        self.xss.as_ref().map(|r| r.vulnerable).unwrap_or(false)
            || self.sqli.as_ref().map(|r| r.vulnerable).unwrap_or(false)
    }

    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.xss
            .iter()
            .chain(self.sqli.iter())
            .flat_map(|r| r.findings.iter())
    }
}

/// Aggregate of a whole scan: one entry per scanned page
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub target: String,
    pub scanned_at: String,
    pub duration_secs: f64,
    pub pages_crawled: usize,
    pub vulnerable: bool,
    pub options: ScanOptions,
    pub pages: Vec<PageReport>,
}

impl ScanReport {
    pub fn total_findings(&self) -> usize {
        self.pages.iter().map(|p| p.findings().count()).sum()
    }
}
