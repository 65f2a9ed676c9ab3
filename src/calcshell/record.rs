//! Immutable log entries appended by the calculator state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One arithmetic invocation: operator tag, operands, result and time.
///
/// Unary operations leave the second operand empty.
///
/// # Example
///
/// ```rust
/// use calcshell::OperationRecord;
/// use chrono::{TimeZone, Utc};
///
/// let record = OperationRecord {
///     operation: "add".to_string(),
///     operands: (10.0, Some(5.0)),
///     result: 15.0,
///     timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
/// };
/// assert!(record.is_binary());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
    pub operation: String,
    pub operands: (f64, Option<f64>),
    pub result: f64,
    pub timestamp: DateTime<Utc>,
}

impl OperationRecord {
    pub fn is_binary(&self) -> bool {
        self.operands.1.is_some()
    }
}

/// Kind of memory register access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemoryOperation {
    Store,
    Recall,
    Clear,
    Add,
    Subtract,
}

impl MemoryOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemoryOperation::Store => "STORE",
            MemoryOperation::Recall => "RECALL",
            MemoryOperation::Clear => "CLEAR",
            MemoryOperation::Add => "ADD",
            MemoryOperation::Subtract => "SUBTRACT",
        }
    }
}

impl fmt::Display for MemoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One access to the memory register.
///
/// | Operation | `value` | `old_value` | `new_value` |
/// |-----------|---------|-------------|-------------|
/// | `Store` | stored value | memory before | stored value |
/// | `Recall` | memory | `None` | memory |
/// | `Clear` | memory before | memory before | `0` |
/// | `Add` / `Subtract` | operand | memory before | memory after |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryRecord {
    pub operation: MemoryOperation,
    pub value: f64,
    pub old_value: Option<f64>,
    pub new_value: f64,
    pub timestamp: DateTime<Utc>,
}
