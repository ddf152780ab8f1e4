//! Output formatting for scan results.
//!
//! Two formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption
//!
//! Both writers return the deployment gate decision: `true` when the
//! result contains no Critical findings.

use colored::*;
use serde::{Deserialize, Serialize};

use crate::detect::{Finding, Level, ScanResult};

// =============================================================================
// JSON Format
// =============================================================================

/// JSON report structure.
#[derive(Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub path: String,
    pub files_scanned: usize,
    #[serde(default)]
    pub files_skipped: usize,
    pub passed: bool,
    pub critical: Vec<JsonFinding>,
    pub warnings: Vec<JsonFinding>,
}

/// One finding in JSON output.
#[derive(Serialize, Deserialize)]
pub struct JsonFinding {
    pub file: String,
    pub start_line: usize,
    pub end_line: usize,
    pub message: String,
    pub suggestion: String,
}

/// Build the JSON report value from a scan result.
pub fn build_json(path: &str, result: &ScanResult) -> JsonReport {
    let critical = result
        .findings
        .iter()
        .filter(|f| f.level == Level::Critical)
        .map(finding_to_json)
        .collect();
    let warnings = result
        .findings
        .iter()
        .filter(|f| f.level == Level::Warning)
        .map(finding_to_json)
        .collect();

    JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        path: path.to_string(),
        files_scanned: result.scanned,
        files_skipped: result.skipped,
        passed: result.deploy_safe(),
        critical,
        warnings,
    }
}

/// Write results as JSON to stdout.
pub fn write_json(path: &str, result: &ScanResult) -> anyhow::Result<bool> {
    let report = build_json(path, result);
    let json = serde_json::to_string_pretty(&report)?;
    println!("{}", json);
    Ok(report.passed)
}

fn finding_to_json(f: &Finding) -> JsonFinding {
    JsonFinding {
        file: f.file.clone(),
        start_line: f.start_line,
        end_line: f.end_line,
        message: f.message.clone(),
        suggestion: f.suggestion.clone(),
    }
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in pretty (human-readable) format.
pub fn write_pretty(path: &str, result: &ScanResult) -> bool {
    // Header
    println!();
    print!("  ");
    print!("{}", "loopcheck".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    // Scan info
    print!("  {}", "Scanning: ".dimmed());
    println!("{}", path);
    print!("  {}", "Files:    ".dimmed());
    print!("{}", result.scanned);
    if result.skipped > 0 {
        print!("{}", format!("  ({} skipped)", result.skipped).dimmed());
    }
    println!();
    println!();

    let critical: Vec<&Finding> = result
        .findings
        .iter()
        .filter(|f| f.level == Level::Critical)
        .collect();
    let warnings: Vec<&Finding> = result
        .findings
        .iter()
        .filter(|f| f.level == Level::Warning)
        .collect();

    if !critical.is_empty() {
        println!(
            "  {} ({}):",
            "Critical issues".red().bold(),
            critical.len()
        );
        println!();
        write_findings(&critical);
    }

    if !warnings.is_empty() {
        println!("  {} ({}):", "Warnings".yellow().bold(), warnings.len());
        println!();
        write_findings(&warnings);
    }

    // Summary
    println!(
        "  {} {} files scanned, {} critical, {} warnings",
        "Summary:".bold(),
        result.scanned,
        critical.len(),
        warnings.len()
    );
    println!();

    // Final gate banner
    let safe = result.deploy_safe();
    if safe {
        println!("  {}", "✓ SAFE TO DEPLOY".green().bold());
    } else {
        println!("  {}", "✗ DO NOT DEPLOY".red().bold());
    }
    println!();

    safe
}

fn write_findings(findings: &[&Finding]) {
    for (i, f) in findings.iter().enumerate() {
        print!("    {}) ", i + 1);
        println!("{}", f.location().blue());
        println!("       {}", f.message);
        println!("       {}", format!("fix: {}", f.suggestion).dimmed());
        println!();
    }
}
