// src/calcshell/mod.rs

pub mod arithmetic;
pub mod chain;
pub mod clock;
pub mod command;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod format;
pub mod memory;
pub mod parse;
pub mod record;
pub mod session;
pub mod settings;
pub mod state;

// Let's export the central types so callers can write calcshell::CalculatorState
// instead of calcshell::calcshell::state::CalculatorState.
pub use state::CalculatorState;
pub use session::Session;
