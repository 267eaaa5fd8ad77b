use serde::{Deserialize, Serialize};

/// One scored record, parsed from a single input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub score: i64,
    pub id: String,
}
