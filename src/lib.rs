//! # calcshell
//!
//! calcshell is a stateful calculator engine driven by a line-oriented command
//! interpreter. It keeps a running result, a memory register and an operation
//! history, and maps textual commands such as `add 10 5` or `c* 2` onto
//! validated calls against that state.
//!
//! The crate is layered from pure functions up to an interactive loop:
//!
//! * **Arithmetic Core**: [`arithmetic`] holds stateless functions with domain
//!   validation (division by zero, negative roots, factorial domain, inverse-trig
//!   and logarithm domains) plus angle conversion and rounding
//! * **Calculator State**: [`CalculatorState`] records every successful
//!   operation, tracks `last_result`, owns the [`memory::MemoryRegister`] and
//!   the session [`Settings`]
//! * **Chain Operations**: `chain_add`, `chain_subtract`, `chain_multiply` and
//!   `chain_divide` use the last result as the left operand
//! * **Command Dispatch**: [`command::CommandRegistry`] is a data-driven table of
//!   command name, arity and handler; [`Dispatcher`] tokenises a line, validates
//!   it and invokes the handler
//! * **Session**: [`Session`] feeds lines from any tokio reader into the
//!   dispatcher until `exit`
//!
//! ## Using the state directly
//!
//! ```rust
//! use calcshell::CalculatorState;
//!
//! let mut calc = CalculatorState::new();
//! calc.add(10.0, 5.0);
//! calc.chain_multiply(2.0);
//! assert_eq!(calc.last_result(), 30.0);
//!
//! calc.memory_store(100.0);
//! calc.memory_add(25.0);
//! assert_eq!(calc.memory_recall(), 125.0);
//!
//! calc.set_angle_mode("degrees").unwrap();
//! assert_eq!(calc.sin(30.0), 0.5);
//! ```
//!
//! ## Driving it with commands
//!
//! ```rust
//! use calcshell::{CalcConfig, Session};
//!
//! let mut session = Session::new(CalcConfig::default()).unwrap();
//! let transcript = session.run_script(vec!["add 10 5", "sqrt -1", "last"]);
//!
//! assert_eq!(transcript[0], "add(10, 5) = 15");
//! assert!(transcript[1].starts_with("Error: "));
//! assert_eq!(transcript[2], "Last result: 15");
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade. Call [`init_logger`] once to get
//! `RUST_LOG` driven output from [`env_logger`].

use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialise the global [`env_logger`] subscriber exactly once.
///
/// Applications embedding calcshell can opt in to `RUST_LOG` driven
/// diagnostics without choosing a logging backend upfront.
///
/// ```rust
/// calcshell::init_logger();
/// log::info!("Logger is ready");
/// ```
pub fn init_logger() {
    INIT_LOGGER.call_once(|| {
        env_logger::init();
    });
}

// Import the top-level `calcshell` module.
pub mod calcshell;

// Re-exporting key items for easier external access.
pub use calcshell::arithmetic;
pub use calcshell::clock;
pub use calcshell::clock::{Clock, FixedClock, SystemClock};
pub use calcshell::command;
pub use calcshell::command::{Category, CommandRegistry, CommandSpec, Control, Reply};
pub use calcshell::config::CalcConfig;
pub use calcshell::dispatcher::{Dispatcher, DispatcherStatus};
pub use calcshell::error::{CalcError, CalcResult};
pub use calcshell::format;
pub use calcshell::memory;
pub use calcshell::parse;
pub use calcshell::parse::NumberParsing;
pub use calcshell::record::{MemoryOperation, MemoryRecord, OperationRecord};
pub use calcshell::session::{Session, SessionSummary};
pub use calcshell::settings::{AngleMode, Settings};
pub use calcshell::state::CalculatorState;
