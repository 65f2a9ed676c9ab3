//! Chain operations: binary operations whose left operand is the last result.
//!
//! Each chain call is exactly the corresponding binary call with
//! `a = last_result`, so it records and fails the same way.
//!
//! ```rust
//! use calcshell::CalculatorState;
//!
//! let mut calc = CalculatorState::new();
//! calc.add(10.0, 5.0);
//! calc.chain_multiply(2.0);
//! assert_eq!(calc.chain_subtract(5.0), 25.0);
//! ```

use crate::calcshell::error::CalcResult;
use crate::calcshell::state::CalculatorState;

impl CalculatorState {
    pub fn chain_add(&mut self, b: f64) -> f64 {
        let a = self.last_result();
        self.add(a, b)
    }

    pub fn chain_subtract(&mut self, b: f64) -> f64 {
        let a = self.last_result();
        self.subtract(a, b)
    }

    pub fn chain_multiply(&mut self, b: f64) -> f64 {
        let a = self.last_result();
        self.multiply(a, b)
    }

    pub fn chain_divide(&mut self, b: f64) -> CalcResult {
        let a = self.last_result();
        self.divide(a, b)
    }
}
