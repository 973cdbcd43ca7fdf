//! Response divergence: coarse body-length comparison against the baseline

use crate::validation::baseline::Baseline;

/// Minimum absolute body-length change, in bytes, that counts as divergence
pub const DIVERGENCE_THRESHOLD: usize = 100;

#[derive(Debug)]
pub struct DiffResult {
    pub status_changed: bool,
    pub body_len_delta: isize,
}

impl DiffResult {
    pub fn is_divergent(&self) -> bool {
        !self.status_changed && self.body_len_delta.unsigned_abs() > DIVERGENCE_THRESHOLD
    }
}

/// Compare a probe response with the baseline. Empty bodies on either side
/// never diverge; the status only counts when the baseline has one.
/// The same rule covers probes on the synthetic `q` parameter, so a status
/// change suppresses divergence there as well.
pub fn diff(baseline: &Baseline, text: &str, status: Option<u16>) -> DiffResult {
    if baseline.text.is_empty() || text.is_empty() {
        return DiffResult {
            status_changed: false,
            body_len_delta: 0,
        };
    }

    DiffResult {
        status_changed: baseline.status.is_some() && baseline.status != status,
        body_len_delta: text.len() as isize - baseline.body_len as isize,
    }
}

pub fn divergence_context(baseline: &Baseline, text: &str) -> String {
    format!("Baseline: {} bytes, Test: {} bytes", baseline.body_len, text.len())
}
