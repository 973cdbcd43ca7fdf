use crate::http::response::FetchResult;

/// Unmutated response every probe is compared against
#[derive(Clone, Debug)]
pub struct Baseline {
    pub status: Option<u16>,
    pub body_len: usize,
    pub text: String,
}

impl Baseline {
    /// `None` when the baseline body is empty: nothing to scan against
    pub fn from_fetch(result: &FetchResult) -> Option<Self> {
        if result.is_empty() {
            return None;
        }

        Some(Self {
            status: result.status(),
            body_len: result.text().len(),
            text: result.text().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_baseline_rejected() {
        assert!(Baseline::from_fetch(&FetchResult::Unavailable).is_none());
    }
}
