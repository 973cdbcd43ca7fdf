use crate::http::client::HttpClient;
use crate::payload::catalog::sqli_payloads;
use crate::payload::injector::{mutate, MutationMode, Target};
use crate::reporting::model::{DetectionResult, Evidence, Finding};
use crate::validation::baseline::Baseline;
use crate::validation::diff::{diff, divergence_context};
use crate::validation::sql_error::{detect_sql_error, error_context};
use crate::validation::time_sqli::TimeBasedSqlEngine;

/// Probe `url` with the SQLi catalog using the default blind delay
pub async fn detect_sqli(
    client: &HttpClient,
    url: &str,
    deep_scan: bool,
    blind_detection: bool,
) -> DetectionResult {
    SqliScanner::new(deep_scan, blind_detection)
        .scan(client, url)
        .await
}

pub struct SqliScanner {
    pub deep_scan: bool,
    pub blind_detection: bool,
    pub time_engine: TimeBasedSqlEngine,
}

impl SqliScanner {
    pub fn new(deep_scan: bool, blind_detection: bool) -> Self {
        Self {
            deep_scan,
            blind_detection,
            time_engine: TimeBasedSqlEngine::default(),
        }
    }

    pub fn with_time_engine(mut self, time_engine: TimeBasedSqlEngine) -> Self {
        self.time_engine = time_engine;
        self
    }

    pub async fn scan(&self, client: &HttpClient, url: &str) -> DetectionResult {
        let baseline_resp = client.get(url).await;
        let Some(baseline) = Baseline::from_fetch(&baseline_resp) else {
            tracing::warn!("SQLi: baseline fetch failed for {}", url);
            return DetectionResult::unreachable();
        };

        let Ok(target) = Target::parse(url) else {
            return DetectionResult::unreachable();
        };

        tracing::debug!(
            "SQLi baseline: status={:?} size={}",
            baseline.status,
            baseline.body_len
        );

        let payloads = sqli_payloads(self.deep_scan, self.blind_detection);
        let mut findings = Vec::new();

        for param in target.injection_points() {
            let before = findings.len();
            tracing::debug!("SQLi: testing parameter '{}' with {} payloads", param, payloads.len());

            for payload in &payloads {
                let candidate = mutate(&target, &param, payload, MutationMode::Append);
                let response = client.get(&candidate).await;
                let text = response.text();

                if let Some(db) = detect_sql_error(text) {
                    tracing::info!("✓ SQL error ({}) on {} ← {}", db, param, payload);
                    findings.push(Finding::new(
                        &param,
                        payload,
                        &candidate,
                        Evidence::SqlError(db),
                        error_context(text),
                    ));
                } else if diff(&baseline, text, response.status()).is_divergent() {
                    tracing::info!("✓ Response divergence on {} ← {}", param, payload);
                    findings.push(Finding::new(
                        &param,
                        payload,
                        &candidate,
                        Evidence::ResponseDifference,
                        divergence_context(&baseline, text),
                    ));
                }
            }

            // blind fallback only for real parameters that showed nothing
            if self.blind_detection && target.has_params() && findings.len() == before {
                if let Some(result) = self.time_engine.probe(client, &target, &param).await {
                    if result.injectable {
                        tracing::info!(
                            "✓ Time-based blind SQLi on {} ({}ms)",
                            param,
                            result.elapsed.as_millis()
                        );
                        findings.push(Finding::new(
                            &param,
                            &result.payload,
                            &result.url,
                            Evidence::TimeBasedBlind,
                            format!(
                                "Response time delayed by >{} seconds",
                                self.time_engine.sleep.as_secs()
                            ),
                        ));
                    }
                }
            }
        }

        DetectionResult::from_findings(findings)
    }
}
