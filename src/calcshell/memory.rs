//! Memory register
//!
//! A single scalar register plus an append-only log of every access to it.
//! The register knows nothing about the operation history or `last_result`;
//! [`CalculatorState`](crate::CalculatorState) owns one and stamps each
//! access with its clock.
//!
//! # Examples
//!
//! ```rust
//! use calcshell::memory::MemoryRegister;
//! use chrono::Utc;
//!
//! let mut memory = MemoryRegister::new();
//! memory.store(100.0, Utc::now());
//! assert_eq!(memory.add(25.0, Utc::now()), 125.0);
//! assert_eq!(memory.recall(Utc::now()), 125.0);
//! assert_eq!(memory.history().len(), 3);
//! ```

use crate::calcshell::record::{MemoryOperation, MemoryRecord};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct MemoryRegister {
    value: f64,
    history: Vec<MemoryRecord>,
}

impl MemoryRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current register value without logging a recall.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn history(&self) -> &[MemoryRecord] {
        &self.history
    }

    /// Replace the register value. Returns the stored value.
    pub fn store(&mut self, value: f64, at: DateTime<Utc>) -> f64 {
        let old_value = self.value;
        self.value = value;
        self.record(MemoryOperation::Store, value, Some(old_value), at);
        self.value
    }

    /// Read the register. The access is still logged.
    pub fn recall(&mut self, at: DateTime<Utc>) -> f64 {
        self.record(MemoryOperation::Recall, self.value, None, at);
        self.value
    }

    /// Reset the register to zero. Returns the value it held before.
    pub fn clear(&mut self, at: DateTime<Utc>) -> f64 {
        let old_value = self.value;
        self.value = 0.0;
        self.record(MemoryOperation::Clear, old_value, Some(old_value), at);
        old_value
    }

    /// Add to the register. Returns the new value.
    pub fn add(&mut self, value: f64, at: DateTime<Utc>) -> f64 {
        let old_value = self.value;
        self.value += value;
        self.record(MemoryOperation::Add, value, Some(old_value), at);
        self.value
    }

    /// Subtract from the register. Returns the new value.
    pub fn subtract(&mut self, value: f64, at: DateTime<Utc>) -> f64 {
        let old_value = self.value;
        self.value -= value;
        self.record(MemoryOperation::Subtract, value, Some(old_value), at);
        self.value
    }

    fn record(
        &mut self,
        operation: MemoryOperation,
        value: f64,
        old_value: Option<f64>,
        at: DateTime<Utc>,
    ) {
        self.history.push(MemoryRecord {
            operation,
            value,
            old_value,
            new_value: self.value,
            timestamp: at,
        });
    }
}
