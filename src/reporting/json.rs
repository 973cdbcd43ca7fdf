use crate::reporting::model::ScanReport;
use serde::Serialize;

#[derive(Serialize)]
struct Report<'a> {
    tool: &'static str,
    version: &'static str,
    report_format: &'static str,
    #[serde(flatten)]
    scan: &'a ScanReport,
}

pub fn render(report: &ScanReport) -> anyhow::Result<String> {
    let report = Report {
        tool: "PROBEHOUND",
        version: env!("CARGO_PKG_VERSION"),
        report_format: "application/json",
        scan: report,
    };

    let json = serde_json::to_string_pretty(&report)?;
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::context::ScanOptions;
    use crate::reporting::model::{DetectionResult, PageReport};

    #[test]
    fn test_json_shape() {
        let report = ScanReport {
            target: "http://example.com/".to_string(),
            scanned_at: "2026-01-01T00:00:00+00:00".to_string(),
            duration_secs: 0.5,
            pages_crawled: 1,
            vulnerable: false,
            options: ScanOptions::default(),
            pages: vec![PageReport {
                url: "http://example.com/".to_string(),
                xss: Some(DetectionResult::unreachable()),
                sqli: None,
            }],
        };

        let value: serde_json::Value = serde_json::from_str(&render(&report).unwrap()).unwrap();
        assert_eq!(value["tool"], "PROBEHOUND");
        assert_eq!(value["target"], "http://example.com/");
        assert_eq!(value["options"]["max_pages"], 10);
        assert_eq!(value["pages"][0]["xss"]["error"], "Could not fetch URL");
        assert!(value["pages"][0].get("sqli").is_none());
    }
}
