use crate::http::client::HttpClient;
use crate::payload::catalog::xss_payloads;
use crate::payload::injector::{mutate, MutationMode, Target};
use crate::reporting::model::{DetectionResult, Evidence, Finding};
use crate::validation::baseline::Baseline;
use crate::validation::reflection::find_reflection;

/// Probe every query parameter of `url` (or the synthetic `q`) with the
/// XSS catalog, stopping at the first reflected payload per parameter.
pub async fn detect_xss(client: &HttpClient, url: &str, deep_scan: bool) -> DetectionResult {
    let baseline_resp = client.get(url).await;
    let Some(baseline) = Baseline::from_fetch(&baseline_resp) else {
        tracing::warn!("XSS: baseline fetch failed for {}", url);
        return DetectionResult::unreachable();
    };

    let Ok(target) = Target::parse(url) else {
        return DetectionResult::unreachable();
    };

    tracing::debug!(
        "XSS baseline: status={:?} size={}",
        baseline.status,
        baseline.body_len
    );

    let payloads = xss_payloads(deep_scan);
    let mut findings = Vec::new();

    for param in target.injection_points() {
        tracing::debug!("XSS: testing parameter '{}' with {} payloads", param, payloads.len());

        for payload in &payloads {
            let candidate = mutate(&target, &param, payload, MutationMode::Replace);
            let response = client.get(&candidate).await;

            if let Some(context) = find_reflection(response.text(), payload) {
                tracing::info!("✓ Reflected XSS: {} ← {}", param, payload);
                findings.push(Finding::new(
                    &param,
                    payload,
                    &candidate,
                    Evidence::Reflected,
                    context,
                ));
                break;
            }
        }
    }

    DetectionResult::from_findings(findings)
}
