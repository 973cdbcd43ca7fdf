//! Global context for scan execution

use crate::cli::args::Cli;
use crate::scanner::crawler::DEFAULT_MAX_PAGES;
use crate::validation::time_sqli::DEFAULT_SLEEP_SECS;
use serde::Serialize;
use std::time::Duration;

/// Flags that decide which payloads are sent and whether links are followed
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScanOptions {
    pub deep_scan: bool,
    pub follow_links: bool,
    pub blind_detection: bool,
    pub max_pages: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            deep_scan: false,
            follow_links: false,
            blind_detection: false,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => anyhow::bail!("Unsupported output format: {}", other),
        }
    }
}

pub struct Context {
    pub target: String,
    pub options: ScanOptions,
    pub run_xss: bool,
    pub run_sqli: bool,
    pub timeout: Duration,
    pub time_delay: u64,
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: OutputFormat,
    pub output_file: Option<String>,
}

impl Context {
    pub fn new(target: &str, options: ScanOptions) -> Self {
        Self {
            target: target.to_string(),
            options,
            run_xss: true,
            run_sqli: true,
            timeout: crate::http::client::DEFAULT_TIMEOUT,
            time_delay: DEFAULT_SLEEP_SECS,
            quiet: false,
            verbose: false,
            output_format: OutputFormat::Text,
            output_file: None,
        }
    }

    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let target = cli.target.trim().to_string();
        if target.is_empty() {
            anyhow::bail!("Missing target URL");
        }

        if cli.skip_xss && cli.skip_sqli {
            anyhow::bail!("--skip-xss and --skip-sqli together leave nothing to scan");
        }

        let output_format = cli.format.parse::<OutputFormat>()?;

        Ok(Self {
            target,
            options: ScanOptions {
                deep_scan: cli.deep,
                follow_links: cli.follow_links,
                blind_detection: cli.blind,
                max_pages: cli.max_pages,
            },
            run_xss: !cli.skip_xss,
            run_sqli: !cli.skip_sqli,
            timeout: Duration::from_secs(cli.timeout),
            time_delay: cli.time_delay,
            quiet: cli.quiet,
            verbose: cli.verbose,
            output_format,
            output_file: cli.output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli() {
        let cli = Cli::parse_from([
            "probehound",
            "-t",
            " http://example.com/?id=1 ",
            "--deep",
            "--skip-xss",
            "--format",
            "JSON",
        ]);
        let ctx = Context::from_cli(cli).unwrap();
        assert_eq!(ctx.target, "http://example.com/?id=1");
        assert!(ctx.options.deep_scan);
        assert!(!ctx.options.follow_links);
        assert!(!ctx.run_xss);
        assert!(ctx.run_sqli);
        assert_eq!(ctx.output_format, OutputFormat::Json);
        assert_eq!(ctx.timeout, Duration::from_secs(8));
    }

    #[test]
    fn test_rejects_bad_format() {
        let cli = Cli::parse_from(["probehound", "-t", "http://example.com", "--format", "csv"]);
        assert!(Context::from_cli(cli).is_err());
    }

    #[test]
    fn test_rejects_skipping_everything() {
        let cli = Cli::parse_from([
            "probehound",
            "-t",
            "http://example.com",
            "--skip-xss",
            "--skip-sqli",
        ]);
        assert!(Context::from_cli(cli).is_err());
    }
}
