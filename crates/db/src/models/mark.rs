//! Student mark records.

use serde::{Deserialize, Serialize};

/// Field names as stored and served. `RollNo` is a lookup key, not a unique
/// constraint; the collection accepts duplicates.
pub mod fields {
    pub const NAME: &str = "Name";
    pub const ROLL_NO: &str = "RollNo";
    pub const WAD: &str = "WAD";
    pub const CC: &str = "CC";
    pub const DSBDA: &str = "DSBDA";
    pub const CNS: &str = "CNS";
    pub const AI: &str = "AI";

    /// The five subject-mark fields, in table-column order.
    pub const SUBJECTS: [&str; 5] = [WAD, CC, DSBDA, CNS, AI];
}

/// One student's marks across the five subjects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentMark {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "RollNo")]
    pub roll_no: i64,
    #[serde(rename = "WAD")]
    pub wad: i64,
    #[serde(rename = "CC")]
    pub cc: i64,
    #[serde(rename = "DSBDA")]
    pub dsbda: i64,
    #[serde(rename = "CNS")]
    pub cns: i64,
    #[serde(rename = "AI")]
    pub ai: i64,
}

/// Name-only projection of a mark record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkName {
    #[serde(rename = "Name")]
    pub name: String,
}
