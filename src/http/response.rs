#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Get body as UTF-8 string (lossy conversion)
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

/// Outcome of a single fetch.
///
/// Transport failures never surface as errors; they collapse into
/// `Unavailable`, which reads as an empty body with no status.
#[derive(Debug, Clone)]
pub enum FetchResult {
    Fetched { response: HttpResponse, text: String },
    Unavailable,
}

impl FetchResult {
    pub fn fetched(response: HttpResponse) -> Self {
        let text = response.body_text();
        FetchResult::Fetched { response, text }
    }

    pub fn text(&self) -> &str {
        match self {
            FetchResult::Fetched { text, .. } => text,
            FetchResult::Unavailable => "",
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            FetchResult::Fetched { response, .. } => Some(response.status),
            FetchResult::Unavailable => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, FetchResult::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_reads_as_empty() {
        let result = FetchResult::Unavailable;
        assert_eq!(result.text(), "");
        assert_eq!(result.status(), None);
        assert!(result.is_empty());
    }

    #[test]
    fn test_fetched_accessors() {
        let result = FetchResult::fetched(HttpResponse {
            status: 200,
            body: b"hello".to_vec(),
        });
        assert_eq!(result.text(), "hello");
        assert_eq!(result.status(), Some(200));
        assert!(!result.is_unavailable());
    }
}
