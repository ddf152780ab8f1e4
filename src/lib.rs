//! Loopcheck - UI re-render loop deployment gate.
//!
//! Loopcheck statically scans a JavaScript/TypeScript source tree for
//! effect declarations likely to cause infinite re-render cycles: effect
//! callbacks that call state setters without a dependency array, and
//! effects whose dependency array lists the state they themselves set.
//! It is a best-effort lexical heuristic, not a parser: blocks are
//! extracted by balanced-brace counting and classified with regex rules.
//!
//! # Architecture
//!
//! - `detect`: the scan pipeline - block extraction, classification,
//!   per-file scanning, and tree walking/aggregation
//! - `config`: YAML scan configuration (effect tokens, extensions,
//!   exclusions)
//! - `report`: output formatting (pretty, JSON) and the gate decision
//! - `cli`: command-line interface and exit codes

pub mod cli;
pub mod config;
pub mod detect;
pub mod report;

pub use config::ScanConfig;
pub use detect::{
    classify_block, extract_block, scan_file, scan_source, EffectBlock, Finding, Level,
    ScanResult, WalkError, Walker,
};
pub use report::JsonReport;
