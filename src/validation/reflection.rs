//! Reflection classifier for XSS probes

const CONTEXT_BEFORE: usize = 50;
const CONTEXT_AFTER: usize = 100;

/// Returns the excerpt around the first verbatim occurrence of `payload`,
/// or `None` when the payload is not reflected.
///
/// The excerpt starts 50 characters before the occurrence and ends 100
/// characters after its start, clamped to the body.
pub fn find_reflection(body: &str, payload: &str) -> Option<String> {
    if payload.is_empty() {
        return None;
    }

    let start = body.find(payload)?;

    let lo = body[..start]
        .char_indices()
        .rev()
        .nth(CONTEXT_BEFORE - 1)
        .map(|(i, _)| i)
        .unwrap_or(0);

    let hi = body[start..]
        .char_indices()
        .nth(CONTEXT_AFTER)
        .map(|(i, _)| start + i)
        .unwrap_or(body.len());

    Some(body[lo..hi].to_string())
}
