use crate::reporting::model::{DetectionResult, Finding, ScanReport};
use unicode_width::UnicodeWidthStr;

// ==============================
// BOX CONFIGURATION
// ==============================

const BOX_WIDTH: usize = 70;
const INNER_WIDTH: usize = BOX_WIDTH - 2;

fn visual_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

fn top_border() -> String {
    format!("╔{}╗", "═".repeat(INNER_WIDTH))
}

fn middle_border() -> String {
    format!("╠{}╣", "═".repeat(INNER_WIDTH))
}

fn bottom_border() -> String {
    format!("╚{}╝", "═".repeat(INNER_WIDTH))
}

/// Left-aligned box line (emoji-safe)
fn box_line(content: &str) -> String {
    let safe_content = format!(" {} ", content);
    let width = visual_width(&safe_content);

    let padding = INNER_WIDTH.saturating_sub(width);
    format!("║{}{}║", safe_content, " ".repeat(padding))
}

/// Centered box line (emoji-safe)
fn box_line_centered(content: &str) -> String {
    let safe_content = format!(" {} ", content);
    let width = visual_width(&safe_content);

    if width >= INNER_WIDTH {
        return box_line(content);
    }

    let remaining = INNER_WIDTH - width;
    let left = remaining / 2;
    let right = remaining - left;

    format!(
        "║{}{}{}║",
        " ".repeat(left),
        safe_content,
        " ".repeat(right)
    )
}

// ==============================
// MAIN REPORT RENDERER
// ==============================

pub fn render(report: &ScanReport) -> String {
    let mut out: Vec<String> = Vec::new();
    let total = report.total_findings();

    out.push(String::new());
    out.push(top_border());
    if report.vulnerable {
        out.push(box_line_centered("POTENTIAL VULNERABILITIES DETECTED"));
    } else {
        out.push(box_line_centered("🎉 SCAN COMPLETE"));
    }
    out.push(middle_border());
    out.push(box_line(&format!("Target:        {}", report.target)));
    out.push(box_line(&format!("Pages scanned: {}", report.pages.len())));
    out.push(box_line(&format!("Duration:      {:.1}s", report.duration_secs)));
    out.push(box_line(&format!("Findings:      {}", total)));
    if !report.vulnerable {
        out.push(box_line("✅ No vulnerabilities detected"));
    }
    out.push(bottom_border());

    for page in &report.pages {
        out.push(String::new());
        out.push("═".repeat(80));
        out.push(format!("PAGE: {}", page.url));
        out.push("═".repeat(80));

        if let Some(xss) = &page.xss {
            render_detection(&mut out, "Cross-Site Scripting (XSS)", xss);
        }
        if let Some(sqli) = &page.sqli {
            render_detection(&mut out, "SQL Injection", sqli);
        }
    }

    out.push(String::new());
    out.join("\n")
}

fn render_detection(out: &mut Vec<String>, title: &str, result: &DetectionResult) {
    out.push(String::new());
    if let Some(error) = &result.error {
        out.push(format!("⚠️  {}: {}", title, error));
        return;
    }

    if !result.vulnerable {
        out.push(format!("✅ {}: no evidence", title));
        return;
    }

    out.push(format!("🔴 {}: {} finding(s)", title, result.findings.len()));
    for (idx, finding) in result.findings.iter().enumerate() {
        render_finding(out, idx + 1, finding);
    }
}

fn render_finding(out: &mut Vec<String>, number: usize, f: &Finding) {
    out.push(format!("\n   FINDING #{} [{}]", number, f.evidence));
    out.push(format!("   Parameter:  {}", f.param));
    out.push(format!("   Payload:    {}", f.payload));
    out.push(format!("   Probe URL:  {}", f.url));
    out.push("   Context:".to_string());
    for line in f.context.lines() {
        if !line.trim().is_empty() {
            out.push(format!("      {}", line.trim()));
        }
    }
}
