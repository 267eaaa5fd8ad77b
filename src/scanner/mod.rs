//! Single-pass scan of a line-delimited record stream, keeping the top N
//! scores in a bounded min-heap.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, trace};

use crate::data_structures::min_heap::MinHeap;
use crate::types::Record;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid line format at line {0}")]
    MissingDelimiter(u64),
    #[error("Invalid score format at line {0}")]
    InvalidScore(u64),
    #[error("Invalid JSON at line {0}")]
    InvalidJson(u64),
    #[error("Missing or invalid 'id' field at line {0}")]
    InvalidId(u64),
    #[error("Io error {0:?}")]
    Io(#[from] std::io::Error),
}

/// Parses one line into a record.
///
/// Returns `Ok(None)` for blank or whitespace-only lines. Line numbers are
/// 1-based and count every physical line, blank ones included.
pub fn parse_line(line: &str, line_number: u64) -> Result<Option<Record>, ScanError> {
    if line.trim().is_empty() {
        return Ok(None);
    }

    let Some((score_part, json_part)) = line.split_once(": ") else {
        return Err(ScanError::MissingDelimiter(line_number));
    };

    let score: i64 = score_part
        .parse()
        .map_err(|_| ScanError::InvalidScore(line_number))?;

    let payload: Value =
        serde_json::from_str(json_part).map_err(|_| ScanError::InvalidJson(line_number))?;

    let id = payload
        .get("id")
        .and_then(Value::as_str)
        .ok_or(ScanError::InvalidId(line_number))?;

    Ok(Some(Record {
        score,
        id: id.to_string(),
    }))
}

/// Scans the stream and returns the `n` highest-scoring records, sorted by
/// descending score.
///
/// Lines are consumed strictly in order. The first malformed line aborts the
/// whole scan; no partial result is produced. At capacity, a new record is
/// admitted only if its score is strictly greater than the current minimum,
/// so equal-to-minimum scores are discarded.
///
/// Equal scores in the output keep the heap's drain order. That order is
/// deterministic for a given input but is not part of the contract.
pub fn select_top_n<R: BufRead>(reader: R, n: usize) -> Result<Vec<Record>, ScanError> {
    let mut heap: MinHeap<i64, String> = MinHeap::with_capacity(n);
    let mut line_number = 0u64;

    for line in reader.lines() {
        let line = line?;
        line_number += 1;

        let Some(record) = parse_line(&line, line_number)? else {
            continue;
        };

        if heap.len() < n {
            heap.insert(record.score, record.id);
        } else if let Some((&min, _)) = heap.peek() {
            if record.score > min {
                heap.extract_min();
                heap.insert(record.score, record.id);
            } else {
                trace!(score = record.score, min, "below current minimum, discarded");
            }
        }
    }

    let mut results: Vec<Record> = heap
        .into_vec()
        .into_iter()
        .map(|(score, id)| Record { score, id })
        .collect();
    // Stable sort on score alone keeps equal-score records in drain order.
    results.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(lines = line_number, kept = results.len(), "scan complete");
    Ok(results)
}

/// Opens the file at `path` and runs [`select_top_n`] over it.
///
/// The handle is scoped to this call and closed on every exit path, early
/// abort included.
pub fn scan_path<P: AsRef<Path>>(path: P, n: usize) -> Result<Vec<Record>, ScanError> {
    let file = File::open(path.as_ref())?;
    select_top_n(BufReader::new(file), n)
}
