//! # Calculator State
//!
//! [`CalculatorState`] composes the pure [`arithmetic`] core, a
//! [`MemoryRegister`] and the session [`Settings`]. Every successful
//! arithmetic call:
//!
//! 1. computes through the arithmetic core,
//! 2. sets `last_result`,
//! 3. appends an [`OperationRecord`] stamped by the injected [`Clock`],
//! 4. returns the result.
//!
//! A failed call returns the error and leaves the state exactly as it was.
//!
//! Transcendental results (trig, inverse trig, logarithms) are rounded to the
//! active precision before they are recorded; everything else is exact.
//!
//! ```rust
//! use calcshell::CalculatorState;
//!
//! let mut calc = CalculatorState::new();
//! calc.add(10.0, 5.0);
//! assert_eq!(calc.last_result(), 15.0);
//!
//! assert!(calc.divide(1.0, 0.0).is_err());
//! assert_eq!(calc.last_result(), 15.0);
//! assert_eq!(calc.history().len(), 1);
//! ```

use crate::calcshell::arithmetic;
use crate::calcshell::clock::{Clock, SystemClock};
use crate::calcshell::error::{CalcError, CalcResult};
use crate::calcshell::memory::MemoryRegister;
use crate::calcshell::record::{MemoryRecord, OperationRecord};
use crate::calcshell::settings::{AngleMode, Settings};
use std::fmt;
use std::sync::Arc;

pub struct CalculatorState {
    last_result: f64,
    history: Vec<OperationRecord>,
    memory: MemoryRegister,
    settings: Settings,
    clock: Arc<dyn Clock>,
}

impl CalculatorState {
    /// Fresh state with default settings and the wall clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Fresh state stamping records with `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            last_result: 0.0,
            history: Vec::new(),
            memory: MemoryRegister::new(),
            settings: Settings::default(),
            clock,
        }
    }

    /// Start from `settings` instead of the defaults.
    pub fn with_settings(mut self, settings: Settings) -> Result<Self, CalcError> {
        settings.validate()?;
        self.settings = settings;
        Ok(self)
    }

    pub fn last_result(&self) -> f64 {
        self.last_result
    }

    /// Owned copy of the operation history, oldest first.
    pub fn history(&self) -> Vec<OperationRecord> {
        self.history.clone()
    }

    /// Owned copy of the memory history, oldest first.
    pub fn memory_history(&self) -> Vec<MemoryRecord> {
        self.memory.history().to_vec()
    }

    /// Current memory value. Unlike [`memory_recall`](Self::memory_recall)
    /// this is not logged.
    pub fn memory(&self) -> f64 {
        self.memory.value()
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    /// Empty the operation history and reset `last_result` to zero.
    /// Memory and memory history are untouched.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.last_result = 0.0;
    }

    /// Switch between `"degrees"` and `"radians"`.
    pub fn set_angle_mode(&mut self, mode: &str) -> Result<AngleMode, CalcError> {
        let mode = mode.parse::<AngleMode>()?;
        self.settings.angle_mode = mode;
        Ok(mode)
    }

    /// Set the rounding precision for transcendental results (`0..=15`).
    pub fn set_precision(&mut self, precision: i64) -> Result<u32, CalcError> {
        let precision = Settings::check_precision(precision)?;
        self.settings.precision = precision;
        Ok(precision)
    }

    // ---- basic arithmetic ----

    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        self.record("add", a, Some(b), arithmetic::add(a, b))
    }

    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        self.record("subtract", a, Some(b), arithmetic::subtract(a, b))
    }

    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        self.record("multiply", a, Some(b), arithmetic::multiply(a, b))
    }

    pub fn divide(&mut self, a: f64, b: f64) -> CalcResult {
        let result = arithmetic::divide(a, b)?;
        Ok(self.record("divide", a, Some(b), result))
    }

    pub fn modulus(&mut self, a: f64, b: f64) -> f64 {
        self.record("modulus", a, Some(b), arithmetic::modulus(a, b))
    }

    // ---- scientific ----

    pub fn power(&mut self, base: f64, exponent: f64) -> f64 {
        self.record(
            "power",
            base,
            Some(exponent),
            arithmetic::power(base, exponent),
        )
    }

    pub fn square_root(&mut self, x: f64) -> CalcResult {
        let result = arithmetic::square_root(x)?;
        Ok(self.record("sqrt", x, None, result))
    }

    pub fn cube_root(&mut self, x: f64) -> f64 {
        self.record("cbrt", x, None, arithmetic::cube_root(x))
    }

    pub fn factorial(&mut self, n: f64) -> CalcResult {
        let result = arithmetic::factorial(n)?;
        Ok(self.record("factorial", n, None, result))
    }

    pub fn sin(&mut self, angle: f64) -> f64 {
        let raw = arithmetic::sin(angle, self.settings.angle_mode);
        self.record_rounded("sin", angle, None, raw)
    }

    pub fn cos(&mut self, angle: f64) -> f64 {
        let raw = arithmetic::cos(angle, self.settings.angle_mode);
        self.record_rounded("cos", angle, None, raw)
    }

    pub fn tan(&mut self, angle: f64) -> f64 {
        let raw = arithmetic::tan(angle, self.settings.angle_mode);
        self.record_rounded("tan", angle, None, raw)
    }

    pub fn asin(&mut self, x: f64) -> CalcResult {
        let raw = arithmetic::asin(x, self.settings.angle_mode)?;
        Ok(self.record_rounded("asin", x, None, raw))
    }

    pub fn acos(&mut self, x: f64) -> CalcResult {
        let raw = arithmetic::acos(x, self.settings.angle_mode)?;
        Ok(self.record_rounded("acos", x, None, raw))
    }

    pub fn atan(&mut self, x: f64) -> f64 {
        let raw = arithmetic::atan(x, self.settings.angle_mode);
        self.record_rounded("atan", x, None, raw)
    }

    pub fn log10(&mut self, x: f64) -> CalcResult {
        let raw = arithmetic::log10(x)?;
        Ok(self.record_rounded("log10", x, None, raw))
    }

    pub fn ln(&mut self, x: f64) -> CalcResult {
        let raw = arithmetic::ln(x)?;
        Ok(self.record_rounded("ln", x, None, raw))
    }

    /// Logarithm of `x` in `base`; recorded as `log` with operands `(base, x)`.
    pub fn log_base(&mut self, base: f64, x: f64) -> CalcResult {
        let raw = arithmetic::log_base(base, x)?;
        Ok(self.record_rounded("log", base, Some(x), raw))
    }

    // ---- memory ----

    pub fn memory_store(&mut self, value: f64) -> f64 {
        let now = self.clock.now();
        self.memory.store(value, now)
    }

    pub fn memory_recall(&mut self) -> f64 {
        let now = self.clock.now();
        self.memory.recall(now)
    }

    /// Reset memory to zero, returning the value it held.
    pub fn memory_clear(&mut self) -> f64 {
        let now = self.clock.now();
        self.memory.clear(now)
    }

    pub fn memory_add(&mut self, value: f64) -> f64 {
        let now = self.clock.now();
        self.memory.add(value, now)
    }

    pub fn memory_subtract(&mut self, value: f64) -> f64 {
        let now = self.clock.now();
        self.memory.subtract(value, now)
    }

    fn record_rounded(&mut self, operation: &str, a: f64, b: Option<f64>, raw: f64) -> f64 {
        let rounded = arithmetic::round(raw, self.settings.precision);
        self.record(operation, a, b, rounded)
    }

    fn record(&mut self, operation: &str, a: f64, b: Option<f64>, result: f64) -> f64 {
        self.last_result = result;
        self.history.push(OperationRecord {
            operation: operation.to_string(),
            operands: (a, b),
            result,
            timestamp: self.clock.now(),
        });
        log::trace!("recorded {} -> {}", operation, result);
        result
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CalculatorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalculatorState")
            .field("last_result", &self.last_result)
            .field("history_len", &self.history.len())
            .field("memory", &self.memory.value())
            .field("settings", &self.settings)
            .finish()
    }
}
