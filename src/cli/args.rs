use clap::Parser;

/// PROBEHOUND – heuristic reflected XSS and SQL injection probe
#[derive(Parser, Debug)]
#[command(
    name = "probehound",
    version,
    about = "PROBEHOUND – heuristic reflected XSS and SQL injection probe",
    long_about = r#"
PROBEHOUND sends crafted payloads into the query parameters of a target URL
and looks for evidence of weakness in the responses:

CROSS-SITE SCRIPTING (XSS):
  • Payload reflected verbatim in the response body
  • First reflecting payload per parameter is reported

SQL INJECTION:
  • Database error signatures (MySQL, SQLite, PostgreSQL, MSSQL, Oracle)
  • Response size divergence from the baseline page
  • Time-based blind fallback (--blind)

DISCOVERY:
  • Same-host link crawl with a page budget (--follow-links)

Findings are heuristic. A reported weakness is not proof of exploitability.
"#,
    after_help = r#"EXAMPLES:
  probehound -t "https://example.com/search?q=shoes"
  probehound -t "https://example.com/item?id=1" --deep --blind
  probehound -t https://example.com --follow-links --max-pages 25
  probehound -t "https://example.com/item?id=1" --format json -o report.json"#
)]
pub struct Cli {
    /// Target URL (e.g. https://example.com/page.php?id=1)
    #[arg(short, long, required = true)]
    pub target: String,

    // ═══════════════════════════════════════════════════════════════════
    // SCAN OPTIONS
    // ═══════════════════════════════════════════════════════════════════

    /// Add the advanced XSS payloads and the UNION SQLi payloads
    #[arg(long, help_heading = "SCAN OPTIONS")]
    pub deep: bool,

    /// Crawl same-host links from the target and scan every visited page
    #[arg(long = "follow-links", help_heading = "SCAN OPTIONS")]
    pub follow_links: bool,

    /// Add blind SQLi payloads and the time-based fallback probe
    #[arg(long, help_heading = "SCAN OPTIONS")]
    pub blind: bool,

    /// Page budget for --follow-links
    #[arg(long = "max-pages", default_value_t = 10, help_heading = "SCAN OPTIONS")]
    pub max_pages: usize,

    /// Skip XSS detection
    #[arg(long = "skip-xss", help_heading = "SCAN OPTIONS")]
    pub skip_xss: bool,

    /// Skip SQL injection detection
    #[arg(long = "skip-sqli", help_heading = "SCAN OPTIONS")]
    pub skip_sqli: bool,

    // ═══════════════════════════════════════════════════════════════════
    // PERFORMANCE
    // ═══════════════════════════════════════════════════════════════════

    /// Per-request timeout in seconds
    #[arg(
        long,
        default_value_t = 8,
        value_parser = clap::value_parser!(u64).range(1..),
        help_heading = "PERFORMANCE"
    )]
    pub timeout: u64,

    /// Injected delay in seconds for the time-based probe
    #[arg(
        long = "time-delay",
        default_value_t = 3,
        value_parser = clap::value_parser!(u64).range(1..),
        help_heading = "PERFORMANCE"
    )]
    pub time_delay: u64,

    // ═══════════════════════════════════════════════════════════════════
    // OUTPUT
    // ═══════════════════════════════════════════════════════════════════

    /// Skip the banner display
    #[arg(long, help_heading = "OUTPUT")]
    pub no_banner: bool,

    /// Quiet mode (warnings only)
    #[arg(short, long, help_heading = "OUTPUT")]
    pub quiet: bool,

    /// Verbose output (debug level)
    #[arg(short, long, help_heading = "OUTPUT")]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(long, default_value = "text", help_heading = "OUTPUT")]
    pub format: String,

    /// Output file path
    #[arg(short, long, help_heading = "OUTPUT")]
    pub output: Option<String>,
}
