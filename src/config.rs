//! Scan configuration.
//!
//! Everything the walker treats as data rather than control flow lives
//! here: which construct names count as effect declarations, which file
//! extensions are eligible, and which directories and paths are excluded.
//! The file is optional; built-in defaults cover a typical React project.

use std::fs;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Scan configuration, optionally loaded from `loopcheck.yaml`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub name: String,
    /// Names of the effect constructs to scan for.
    #[serde(default = "default_effect_tokens")]
    pub effect_tokens: Vec<String>,
    /// File extensions eligible for scanning, without the leading dot.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Directory names pruned during the walk.
    #[serde(default = "default_excluded_dirs")]
    pub excluded_dirs: Vec<String>,
    /// Glob patterns for root-relative paths to exclude
    /// (e.g. "**/generated/**").
    #[serde(default)]
    pub excluded_paths: Vec<String>,
}

fn default_effect_tokens() -> Vec<String> {
    vec!["useEffect".to_string()]
}

fn default_extensions() -> Vec<String> {
    ["tsx", "jsx", "ts", "js"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_excluded_dirs() -> Vec<String> {
    [
        "node_modules",
        ".git",
        "dist",
        "build",
        ".next",
        "coverage",
        "test-results",
        "playwright-report",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            version: String::new(),
            name: String::new(),
            effect_tokens: default_effect_tokens(),
            extensions: default_extensions(),
            excluded_dirs: default_excluded_dirs(),
            excluded_paths: Vec::new(),
        }
    }
}

impl ScanConfig {
    /// Parse a configuration from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: ScanConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Whether a directory name is in the exclusion set.
    pub fn is_dir_excluded(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }

    /// Whether a root-relative path matches an exclusion glob.
    pub fn is_path_excluded(&self, path: &Path) -> bool {
        if self.excluded_paths.is_empty() {
            return false;
        }

        let path_str = path.to_string_lossy();

        for pattern in &self.excluded_paths {
            if let Ok(glob) = globset::Glob::new(pattern) {
                if glob.compile_matcher().is_match(&*path_str) {
                    return true;
                }
            }
        }
        false
    }

    /// Compile the effect-declaration matcher from the configured tokens.
    pub fn declaration_matcher(&self) -> anyhow::Result<Regex> {
        if self.effect_tokens.is_empty() {
            anyhow::bail!("no effect tokens configured");
        }
        let alternatives: Vec<String> = self
            .effect_tokens
            .iter()
            .map(|t| regex::escape(t))
            .collect();
        let pattern = format!(r"\b(?:{})\s*\(", alternatives.join("|"));
        Regex::new(&pattern)
            .map_err(|e| anyhow::anyhow!("compiling declaration matcher: {}", e))
    }
}

/// Validate a configuration for correctness.
pub fn validate(config: &ScanConfig) -> anyhow::Result<()> {
    if config.effect_tokens.is_empty() {
        anyhow::bail!("effect_tokens must not be empty");
    }
    for token in &config.effect_tokens {
        let identifier_shaped = !token.is_empty()
            && token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
            && !token.starts_with(|c: char| c.is_ascii_digit());
        if !identifier_shaped {
            anyhow::bail!("invalid effect token {:?}: must be an identifier", token);
        }
    }

    if config.extensions.is_empty() {
        anyhow::bail!("extensions must not be empty");
    }

    for pattern in &config.excluded_paths {
        globset::Glob::new(pattern)
            .map_err(|e| anyhow::anyhow!("invalid excluded_paths pattern {:?}: {}", pattern, e))?;
    }

    Ok(())
}
