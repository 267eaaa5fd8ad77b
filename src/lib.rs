//! Streaming top-N selection over line-delimited scored records.
//!
//! Input lines look like `42: {"id":"abc"}`. The scanner reads them one at a
//! time and keeps only the N highest-scoring records in a bounded min-heap,
//! so memory stays O(N) regardless of file size.

pub mod cli;
pub mod data_structures;
pub mod scanner;
pub mod types;
