//! Per-file scanning.
//!
//! Locates every effect-declaration line in one file, extracts the block
//! starting there, and classifies it. Declarations are processed
//! independently: no deduplication, and overlapping ranges from nested
//! effect-like text are accepted as-is.

use std::fs;
use std::path::Path;

use regex::Regex;

use super::classify::classify_block;
use super::extract::extract_block;
use super::types::Finding;

/// Scan one file for effect declarations.
///
/// `decl` is the compiled declaration matcher built from the configured
/// effect tokens; `rel_path` tags every finding with the file's
/// scan-root-relative path.
pub fn scan_file(path: &Path, rel_path: &str, decl: &Regex) -> anyhow::Result<Vec<Finding>> {
    let content = fs::read_to_string(path)?;
    Ok(scan_source(&content, rel_path, decl))
}

/// Scan in-memory source text. Split out from the file read so the
/// heuristic is testable without the filesystem.
pub fn scan_source(content: &str, rel_path: &str, decl: &Regex) -> Vec<Finding> {
    let lines: Vec<&str> = content.lines().collect();
    let mut findings = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if decl.is_match(line) {
            let block = extract_block(&lines, idx);
            findings.extend(classify_block(&block, rel_path));
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn decl() -> Regex {
        Regex::new(r"\b(?:useEffect)\s*\(").unwrap()
    }

    #[test]
    fn test_scan_source_multiple_effects() {
        let src = "\
import { useEffect, useState } from 'react';

export function Widget() {
  const [count, setCount] = useState(0);
  const [name, setName] = useState('');

  useEffect(() => {
    setCount(count + 1);
  }, [count]);

  useEffect(() => {
    setName('ready');
  });

  return null;
}
";
        let findings = scan_source(src, "widget.tsx", &decl());
        assert_eq!(findings.len(), 2);
        assert!(findings[0].message.contains("setCount"));
        assert!(findings[1].message.contains("no dependency array"));
        assert!(findings.iter().all(|f| f.file == "widget.tsx"));
    }

    #[test]
    fn test_scan_source_line_numbers() {
        let src = "const a = 1;\nuseEffect(() => {\n  setX(1);\n}, [x]);\n";
        let findings = scan_source(src, "a.ts", &decl());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].start_line, 2);
        assert_eq!(findings[0].end_line, 4);
    }

    #[test]
    fn test_scan_source_no_effects() {
        let src = "export const add = (a, b) => a + b;\n";
        assert!(scan_source(src, "math.ts", &decl()).is_empty());
    }

    #[test]
    fn test_scan_file_reads_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app.jsx");
        std::fs::write(&path, "useEffect(() => { setReady(true); });\n").unwrap();

        let findings = scan_file(&path, "app.jsx", &decl()).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].file, "app.jsx");
    }

    #[test]
    fn test_scan_file_missing_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gone.tsx");
        assert!(scan_file(&path, "gone.tsx", &decl()).is_err());
    }
}
