//! # Command Dispatcher
//!
//! Turns one line of text into one call against the [`CalculatorState`]:
//!
//! 1. tokenise on whitespace (empty input is a no-op),
//! 2. lowercase the first token and look it up in the [`CommandRegistry`],
//! 3. check the argument count,
//! 4. parse numbers according to the [`NumberParsing`] policy,
//! 5. invoke the handler.
//!
//! Errors come back as values; nothing a single line contains can stop the
//! dispatcher except `exit`, which moves it from `Running` to `Stopped`.
//!
//! ```rust
//! use calcshell::{CalcError, CalculatorState, Dispatcher};
//!
//! let mut dispatcher = Dispatcher::new(CalculatorState::new());
//! dispatcher.start();
//!
//! let reply = dispatcher.dispatch("add 10 5").unwrap().unwrap();
//! assert_eq!(reply.text, "add(10, 5) = 15");
//!
//! let err = dispatcher.dispatch("frobnicate").unwrap_err();
//! assert_eq!(err, CalcError::UnknownCommand("frobnicate".to_string()));
//! assert!(dispatcher.is_running());
//! ```

use crate::calcshell::command::{CommandRegistry, Control, Invocation, Reply};
use crate::calcshell::error::CalcError;
use crate::calcshell::parse::NumberParsing;
use crate::calcshell::state::CalculatorState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatcherStatus {
    Running,
    Stopped,
}

#[derive(Debug)]
pub struct Dispatcher {
    calculator: CalculatorState,
    registry: CommandRegistry,
    parsing: NumberParsing,
    status: DispatcherStatus,
}

impl Dispatcher {
    /// Dispatcher over the standard command set, initially stopped.
    pub fn new(calculator: CalculatorState) -> Self {
        Self {
            calculator,
            registry: CommandRegistry::standard(),
            parsing: NumberParsing::default(),
            status: DispatcherStatus::Stopped,
        }
    }

    pub fn with_registry(mut self, registry: CommandRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_number_parsing(mut self, parsing: NumberParsing) -> Self {
        self.parsing = parsing;
        self
    }

    pub fn start(&mut self) {
        self.status = DispatcherStatus::Running;
    }

    pub fn stop(&mut self) {
        self.status = DispatcherStatus::Stopped;
    }

    pub fn status(&self) -> DispatcherStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == DispatcherStatus::Running
    }

    pub fn calculator(&self) -> &CalculatorState {
        &self.calculator
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn number_parsing(&self) -> NumberParsing {
        self.parsing
    }

    /// Execute one input line.
    ///
    /// Returns `Ok(None)` for blank input. An `exit` reply moves the
    /// dispatcher to `Stopped`; the caller decides whether to keep feeding it.
    pub fn dispatch(&mut self, line: &str) -> Result<Option<Reply>, CalcError> {
        let mut tokens = line.split_whitespace();
        let name = match tokens.next() {
            Some(token) => token.to_lowercase(),
            None => return Ok(None),
        };
        let args: Vec<&str> = tokens.collect();

        let spec = self
            .registry
            .lookup(&name)
            .ok_or_else(|| CalcError::UnknownCommand(name.clone()))?;
        log::debug!("dispatching '{}' with {:?}", spec.name, args);

        let invocation = Invocation::new(&args, self.parsing, &self.registry);
        let reply = spec.invoke(&mut self.calculator, &invocation)?;

        if reply.control == Control::Exit {
            self.status = DispatcherStatus::Stopped;
        }
        Ok(Some(reply))
    }
}
