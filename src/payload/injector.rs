use url::Url;

/// Injection point used when the target URL carries no query parameters
pub const SYNTHETIC_PARAM: &str = "q";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationMode {
    /// Parameter value becomes exactly the payload
    Replace,
    /// Payload is appended to the parameter's first original value
    Append,
}

/// A parsed target URL with its query parameters grouped by name.
///
/// Parameters keep first-appearance order and every value of a repeated
/// parameter. Blank values are dropped, so `?id=` counts as no parameter.
#[derive(Debug, Clone)]
pub struct Target {
    url: Url,
    params: Vec<(String, Vec<String>)>,
}

impl Target {
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let url = Url::parse(raw)?;
        Ok(Self::from_url(url))
    }

    pub fn from_url(url: Url) -> Self {
        let mut params: Vec<(String, Vec<String>)> = Vec::new();

        for (k, v) in url.query_pairs() {
            if v.is_empty() {
                continue;
            }
            match params.iter_mut().find(|(name, _)| name.as_str() == k) {
                Some((_, values)) => values.push(v.to_string()),
                None => params.push((k.to_string(), vec![v.to_string()])),
            }
        }

        Self { url, params }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn params(&self) -> &[(String, Vec<String>)] {
        &self.params
    }

    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }

    /// Names probed by the detectors: the real parameters, or the synthetic `q`
    pub fn injection_points(&self) -> Vec<String> {
        if self.params.is_empty() {
            vec![SYNTHETIC_PARAM.to_string()]
        } else {
            self.params.iter().map(|(k, _)| k.clone()).collect()
        }
    }

    /// First original value of a parameter
    pub fn first_value(&self, param: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == param)
            .and_then(|(_, values)| values.first())
            .map(|v| v.as_str())
    }
}

/// Build the probe URL for one (parameter, payload) pair.
///
/// Other parameters are re-encoded with all their values; the mutated one
/// collapses to a single value. Without query parameters the whole query
/// becomes `q=<payload>` regardless of mode.
pub fn mutate(target: &Target, param: &str, payload: &str, mode: MutationMode) -> String {
    let mut url = target.url.clone();

    if target.params.is_empty() {
        url.query_pairs_mut()
            .clear()
            .append_pair(SYNTHETIC_PARAM, payload);
        return url.to_string();
    }

    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut found = false;

    for (k, values) in &target.params {
        if k == param {
            let value = match mode {
                MutationMode::Replace => payload.to_string(),
                MutationMode::Append => {
                    format!("{}{}", values.first().map(|v| v.as_str()).unwrap_or(""), payload)
                }
            };
            pairs.push((k.clone(), value));
            found = true;
        } else {
            for v in values {
                pairs.push((k.clone(), v.clone()));
            }
        }
    }

    if !found {
        pairs.push((param.to_string(), payload.to_string()));
    }

    url.query_pairs_mut().clear().extend_pairs(pairs);
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_groups_repeated_params() {
        let target = Target::parse("http://example.com/list?tag=a&id=7&tag=b").unwrap();
        assert_eq!(target.host(), Some("example.com"));
        assert_eq!(target.path(), "/list");
        assert_eq!(target.injection_points(), vec!["tag", "id"]);
        assert_eq!(target.params()[0].1, vec!["a", "b"]);
        assert_eq!(target.first_value("tag"), Some("a"));
    }

    #[test]
    fn test_blank_values_are_not_params() {
        let target = Target::parse("http://example.com/?q=").unwrap();
        assert!(!target.has_params());
        assert_eq!(target.injection_points(), vec![SYNTHETIC_PARAM]);
    }

    #[test]
    fn test_replace_keeps_other_params() {
        let target = Target::parse("http://example.com/s?q=shoes&page=2").unwrap();
        let url = mutate(&target, "q", "<b>", MutationMode::Replace);
        assert_eq!(url, "http://example.com/s?q=%3Cb%3E&page=2");
    }

    #[test]
    fn test_append_uses_first_value_only() {
        let target = Target::parse("http://example.com/item?id=1&id=2&sort=asc").unwrap();
        let url = mutate(&target, "id", "' OR 1=1--", MutationMode::Append);
        let reparsed = Url::parse(&url).unwrap();
        let pairs: Vec<(String, String)> = reparsed
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("id".to_string(), "1' OR 1=1--".to_string()),
                ("sort".to_string(), "asc".to_string()),
            ]
        );
    }

    #[test]
    fn test_other_multi_valued_params_preserved() {
        let target = Target::parse("http://example.com/?a=1&b=x&b=y").unwrap();
        let url = mutate(&target, "a", "P", MutationMode::Replace);
        assert_eq!(url, "http://example.com/?a=P&b=x&b=y");
    }

    #[test]
    fn test_synthetic_param_without_query() {
        let target = Target::parse("http://example.com/search").unwrap();
        let replaced = mutate(&target, SYNTHETIC_PARAM, "x y", MutationMode::Replace);
        let appended = mutate(&target, SYNTHETIC_PARAM, "x y", MutationMode::Append);
        assert_eq!(replaced, "http://example.com/search?q=x+y");
        assert_eq!(replaced, appended);
    }

    #[test]
    fn test_mutation_does_not_touch_target() {
        let target = Target::parse("http://example.com/?id=5").unwrap();
        let _ = mutate(&target, "id", "'", MutationMode::Append);
        assert_eq!(target.first_value("id"), Some("5"));
        assert_eq!(target.url().as_str(), "http://example.com/?id=5");
    }
}
