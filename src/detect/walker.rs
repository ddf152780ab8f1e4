//! Source-tree walking and result aggregation.

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::config::ScanConfig;

use super::scanner::scan_file;
use super::types::ScanResult;

/// Fatal walk errors.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("directory not found: {}", .0.display())]
    RootNotFound(PathBuf),
}

/// Walks a source tree and aggregates per-file findings into one result.
pub struct Walker {
    root: PathBuf,
    config: ScanConfig,
    verbose: bool,
}

impl Walker {
    /// Create a new walker over `root`.
    pub fn new<P: AsRef<Path>>(root: P, config: ScanConfig) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            config,
            verbose: false,
        }
    }

    /// Set whether to print each file as it is scanned.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Run the scan.
    ///
    /// Fails fast when the root directory does not exist. Unreadable files
    /// are skipped with a stderr warning so one bad file cannot block the
    /// whole gate. Enumeration is sorted by file name, so an unchanged tree
    /// always yields the same findings in the same order.
    pub fn run(&self) -> anyhow::Result<ScanResult> {
        if !self.root.is_dir() {
            return Err(WalkError::RootNotFound(self.root.clone()).into());
        }

        let decl = self.config.declaration_matcher()?;
        let mut result = ScanResult::new();

        for entry in WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                !(e.file_type().is_dir()
                    && self.config.is_dir_excluded(&e.file_name().to_string_lossy()))
            })
        {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    eprintln!("Warning: {}", e);
                    result.skipped += 1;
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if !self.config.extensions.iter().any(|x| x == ext) {
                continue;
            }

            let rel = relative_path(path, &self.root);
            if self.config.is_path_excluded(Path::new(&rel)) {
                continue;
            }

            if self.verbose {
                eprintln!("scanning {}", rel);
            }

            match scan_file(path, &rel, &decl) {
                Ok(findings) => {
                    result.extend(findings);
                    result.scanned += 1;
                }
                Err(e) => {
                    eprintln!("Warning: skipping {}: {}", rel, e);
                    result.skipped += 1;
                }
            }
        }

        Ok(result)
    }
}

/// Path relative to the scan root, with forward slashes.
fn relative_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .unwrap_or_else(|_| path.to_string_lossy().to_string())
}
