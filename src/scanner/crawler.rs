use crate::core::scope::Scope;
use crate::http::client::HttpClient;
use scraper::{Html, Selector};
use std::collections::{HashSet, VecDeque};
use url::Url;

/// Default page budget for link discovery
pub const DEFAULT_MAX_PAGES: usize = 10;

pub struct Crawler {
    pub max_pages: usize,
}

impl Default for Crawler {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PAGES)
    }
}

impl Crawler {
    pub fn new(max_pages: usize) -> Self {
        Self { max_pages }
    }

    /// Breadth-first same-origin discovery starting at `seed`.
    ///
    /// Every dequeued URL counts as visited, even when its fetch fails or
    /// returns something other than a 200 with a body; only such successful
    /// pages contribute links. Redirects are not followed.
    pub async fn crawl(&self, client: &HttpClient, seed: &str) -> HashSet<String> {
        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<String> = VecDeque::new();
        let scope = Scope::new(seed).ok();

        queue.push_back(seed.to_string());

        while visited.len() < self.max_pages {
            let Some(url) = queue.pop_front() else {
                break;
            };

            if !visited.insert(url.clone()) {
                continue;
            }

            let resp = client.fetch(&url, client.timeout(), false).await;
            if resp.status() != Some(200) || resp.is_empty() {
                tracing::debug!("Crawl: skipping {} (status {:?})", url, resp.status());
                continue;
            }

            let Some(scope) = scope.as_ref() else {
                continue;
            };

            for link in extract_links(resp.text(), scope) {
                if !visited.contains(&link) {
                    queue.push_back(link);
                }
            }
        }

        tracing::info!("Crawl visited {} pages from {}", visited.len(), seed);
        visited
    }
}

pub async fn crawl(client: &HttpClient, seed: &str, max_pages: usize) -> HashSet<String> {
    Crawler::new(max_pages).crawl(client, seed).await
}

/// Absolute in-scope anchor targets, in document order, as written in the page
pub fn extract_links(html: &str, scope: &Scope) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    let Ok(a_sel) = Selector::parse("a[href]") else {
        return links;
    };

    for el in document.select(&a_sel) {
        let Some(href) = el.value().attr("href") else {
            continue;
        };
        if !href.starts_with("http") {
            continue;
        }
        if let Ok(parsed) = Url::parse(href) {
            if scope.is_in_scope(&parsed) {
                links.push(href.to_string());
            }
        }
    }

    links
}
