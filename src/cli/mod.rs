//! CLI surface: argument parsing, file access checks, exit-code mapping and
//! output formatting. The scanner itself knows nothing about any of this.

use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use thiserror::Error;
use tracing::debug;

use crate::scanner::{self, ScanError};
use crate::types::Record;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Usage: top-records <filepath> <N>")]
    Usage,
    #[error("N must be a positive integer")]
    InvalidN,
    #[error("Error: Cannot find input file")]
    FileNotFound,
    #[error("Error: Cannot read input file")]
    FileNotReadable,
    #[error("Error: {0}")]
    Scan(#[from] ScanError),
}

impl CliError {
    /// Exit-code mapping kept compatible with the original tool: usage and
    /// argument errors exit 1, a missing file also exits 1, while an
    /// unreadable file and any scan failure exit 2.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage | CliError::InvalidN | CliError::FileNotFound => 1,
            CliError::FileNotReadable | CliError::Scan(_) => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub path: PathBuf,
    pub n: usize,
}

/// Parses the positional arguments (`<filepath> <N>`), program name excluded.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args, CliError> {
    let mut args = args.into_iter();
    let (Some(path), Some(n), None) = (args.next(), args.next(), args.next()) else {
        return Err(CliError::Usage);
    };

    let n: usize = n.parse().map_err(|_| CliError::InvalidN)?;
    if n == 0 {
        return Err(CliError::InvalidN);
    }

    Ok(Args {
        path: PathBuf::from(path),
        n,
    })
}

/// Checks access to the input file, then scans it.
///
/// The file is opened exactly once; the handle moves into the scanner and is
/// closed on every exit path.
pub fn run_with_args(args: Args) -> Result<Vec<Record>, CliError> {
    if !args.path.exists() {
        return Err(CliError::FileNotFound);
    }
    let file = std::fs::File::open(&args.path).map_err(|_| CliError::FileNotReadable)?;

    debug!(path = %args.path.display(), n = args.n, "scanning input file");
    let records = scanner::select_top_n(BufReader::new(file), args.n)?;
    Ok(records)
}

/// Full CLI run: parse, scan, print. Returns the process exit code.
pub fn run<I: IntoIterator<Item = String>>(raw_args: I) -> ExitCode {
    match parse_args(raw_args).and_then(run_with_args) {
        Ok(records) => match serde_json::to_string_pretty(&records) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::from(2)
            }
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_ok() {
        let args = parse_args(strings(&["records.txt", "5"])).unwrap();
        assert_eq!(
            args,
            Args {
                path: PathBuf::from("records.txt"),
                n: 5
            }
        );
    }

    #[test]
    fn test_wrong_arity() {
        let err = parse_args(strings(&[])).unwrap_err();
        assert!(matches!(err, CliError::Usage));
        assert_eq!(err.exit_code(), 1);

        let err = parse_args(strings(&["records.txt"])).unwrap_err();
        assert!(matches!(err, CliError::Usage));

        let err = parse_args(strings(&["records.txt", "5", "extra"])).unwrap_err();
        assert!(matches!(err, CliError::Usage));
    }

    #[test]
    fn test_invalid_n() {
        for n in ["abc", "0", "-3", "1.5", ""] {
            let err = parse_args(strings(&["records.txt", n])).unwrap_err();
            assert!(matches!(err, CliError::InvalidN), "n = {n:?}");
            assert_eq!(err.exit_code(), 1);
        }
    }

    #[test]
    fn test_missing_file_exit_code() {
        let err = run_with_args(Args {
            path: PathBuf::from("/definitely/not/here.txt"),
            n: 1,
        })
        .unwrap_err();
        assert!(matches!(err, CliError::FileNotFound));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Error: Cannot find input file");
    }

    #[test]
    fn test_scan_error_exit_code() {
        let err = CliError::from(ScanError::InvalidScore(3));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Error: Invalid score format at line 3");
    }

    #[test]
    fn test_unreadable_file_message() {
        let err = CliError::FileNotReadable;
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "Error: Cannot read input file");
    }
}
