//! Scan orchestration
//!
//! Optional crawl, then XSS and SQLi detection for every page, one request
//! at a time, folded into a single `ScanReport`.

use crate::core::context::{Context, OutputFormat};
use crate::http::client::HttpClient;
use crate::reporting::model::{PageReport, ScanReport};
use crate::scanner::crawler::Crawler;
use crate::sqli::SqliScanner;
use crate::validation::time_sqli::TimeBasedSqlEngine;
use crate::xss::detect_xss;
use anyhow::Context as _;
use std::collections::HashSet;
use std::time::Instant;

pub struct Engine {
    ctx: Context,
}

impl Engine {
    pub fn new(ctx: Context) -> anyhow::Result<Self> {
        Ok(Self { ctx })
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        let report = self.scan().await?;
        self.generate_report(&report)
    }

    pub async fn scan(&self) -> anyhow::Result<ScanReport> {
        let options = &self.ctx.options;
        tracing::info!("Starting scan against {}", self.ctx.target);
        tracing::info!(
            "Options: deep={} follow_links={} blind={}",
            options.deep_scan,
            options.follow_links,
            options.blind_detection
        );

        let started = Instant::now();
        let scanned_at = chrono::Utc::now().to_rfc3339();
        let client = HttpClient::with_timeout(self.ctx.timeout)?;

        // -------------------------------------------------
        // Link discovery
        // -------------------------------------------------
        let (pages_to_scan, pages_crawled) = if options.follow_links {
            let visited = Crawler::new(options.max_pages)
                .crawl(&client, &self.ctx.target)
                .await;
            let count = visited.len();
            (scan_order(&self.ctx.target, visited), count)
        } else {
            (vec![self.ctx.target.clone()], 1)
        };

        // -------------------------------------------------
        // Per-page detection
        // -------------------------------------------------
        let sqli = SqliScanner::new(options.deep_scan, options.blind_detection)
            .with_time_engine(TimeBasedSqlEngine::new(self.ctx.time_delay));

        let mut pages = Vec::with_capacity(pages_to_scan.len());
        for url in pages_to_scan {
            tracing::info!("Scanning {}", url);

            let xss_result = if self.ctx.run_xss {
                Some(detect_xss(&client, &url, options.deep_scan).await)
            } else {
                None
            };

            let sqli_result = if self.ctx.run_sqli {
                Some(sqli.scan(&client, &url).await)
            } else {
                None
            };

            let page = PageReport {
                url,
                xss: xss_result,
                sqli: sqli_result,
            };

            let count = page.findings().count();
            if count > 0 {
                tracing::warn!("{}: {} finding(s)", page.url, count);
            } else {
                tracing::info!("{}: no evidence", page.url);
            }

            pages.push(page);
        }

        let vulnerable = pages.iter().any(|p| p.vulnerable());
        let duration_secs = started.elapsed().as_secs_f64();
        tracing::info!("Scan completed in {:.1}s", duration_secs);

        Ok(ScanReport {
            target: self.ctx.target.clone(),
            scanned_at,
            duration_secs,
            pages_crawled,
            vulnerable,
            options: options.clone(),
            pages,
        })
    }

    /// Generate and output the final report
    fn generate_report(&self, report: &ScanReport) -> anyhow::Result<()> {
        let rendered = match self.ctx.output_format {
            OutputFormat::Json => crate::reporting::json::render(report)?,
            OutputFormat::Text => crate::reporting::text::render(report),
        };

        if let Some(ref output_file) = self.ctx.output_file {
            std::fs::write(output_file, &rendered)
                .with_context(|| format!("Failed to write report to {}", output_file))?;
            tracing::info!("Report saved to: {}", output_file);
        } else {
            println!("{}", rendered);
        }

        Ok(())
    }
}

/// Seed first, then the remaining visited pages in sorted order. A crawl
/// that visited nothing still scans the seed.
fn scan_order(seed: &str, visited: HashSet<String>) -> Vec<String> {
    let mut rest: Vec<String> = visited.into_iter().filter(|u| u != seed).collect();
    rest.sort();

    let mut order = Vec::with_capacity(rest.len() + 1);
    order.push(seed.to_string());
    order.extend(rest);
    order
}
