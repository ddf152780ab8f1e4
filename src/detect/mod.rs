//! Detection pipeline for re-render loops.
//!
//! Data flows strictly upward: block extraction, block classification,
//! per-file scanning, tree walking/aggregation. No stage holds state
//! across invocations; each run is a pure function of the file tree.

mod classify;
mod extract;
mod scanner;
mod types;
mod walker;

pub use classify::classify_block;
pub use extract::{extract_block, EffectBlock};
pub use scanner::{scan_file, scan_source};
pub use types::{Finding, Level, ScanResult};
pub use walker::{WalkError, Walker};
