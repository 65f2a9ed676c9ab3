//! # Session Driver
//!
//! Owns one [`Dispatcher`] and feeds it lines until `exit` or end of input.
//! Input is read asynchronously through tokio, but each command runs to
//! completion before the next line is read.
//!
//! ```rust
//! use calcshell::{CalcConfig, Session};
//!
//! let mut session = Session::new(CalcConfig::default()).unwrap();
//! let transcript = session.run_script(vec!["add 10 5", "c* 2", "exit", "add 1 1"]);
//!
//! assert_eq!(transcript, vec!["add(10, 5) = 15", "15 * 2 = 30", "Goodbye!"]);
//! assert_eq!(session.calculator().last_result(), 30.0);
//! ```
//!
//! Interactive use reads from any `AsyncBufRead` and writes to any
//! `AsyncWrite`:
//!
//! ```rust,no_run
//! use calcshell::{CalcConfig, Session};
//! use tokio::io::BufReader;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let mut session = Session::new(CalcConfig::default())?;
//!     let summary = session
//!         .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
//!         .await?;
//!     println!("{} commands", summary.commands_processed);
//!     Ok(())
//! }
//! ```

use crate::calcshell::clock::{Clock, SystemClock};
use crate::calcshell::config::CalcConfig;
use crate::calcshell::dispatcher::Dispatcher;
use crate::calcshell::error::CalcError;
use crate::calcshell::state::CalculatorState;
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const BANNER: &str = "calcshell\nType 'help' for available commands, 'exit' to quit\n";

/// Counters for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Non-blank lines handed to the dispatcher, failed ones included.
    pub commands_processed: usize,
    pub errors: usize,
}

#[derive(Debug)]
pub struct Session {
    dispatcher: Dispatcher,
    config: CalcConfig,
    summary: SessionSummary,
    /// Set once `exit` has been handled; the session cannot be restarted.
    exited: bool,
}

impl Session {
    pub fn new(config: CalcConfig) -> Result<Self, CalcError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Session whose history timestamps come from `clock`.
    pub fn with_clock(config: CalcConfig, clock: Arc<dyn Clock>) -> Result<Self, CalcError> {
        let calculator = CalculatorState::with_clock(clock).with_settings(config.settings())?;
        let dispatcher = Dispatcher::new(calculator).with_number_parsing(config.number_parsing());
        Ok(Self {
            dispatcher,
            config,
            summary: SessionSummary::default(),
            exited: false,
        })
    }

    /// Move to RUNNING. Has no effect after `exit`.
    pub fn start(&mut self) {
        if self.exited {
            log::debug!("session already exited, not restarting");
            return;
        }
        if !self.dispatcher.is_running() {
            log::info!("calculator session started");
        }
        self.dispatcher.start();
    }

    pub fn is_running(&self) -> bool {
        self.dispatcher.is_running()
    }

    /// Whether `exit` has ended this session.
    pub fn has_exited(&self) -> bool {
        self.exited
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn calculator(&self) -> &CalculatorState {
        self.dispatcher.calculator()
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    /// Handle one line and return the text to show for it.
    ///
    /// `None` for blank input, and for any input once the session has stopped.
    /// Command failures come back as `Error: <message>`.
    pub fn process_line(&mut self, line: &str) -> Option<String> {
        if !self.dispatcher.is_running() {
            return None;
        }
        match self.dispatcher.dispatch(line) {
            Ok(None) => None,
            Ok(Some(reply)) => {
                self.summary.commands_processed += 1;
                if !self.dispatcher.is_running() {
                    self.exited = true;
                    log::info!("calculator session stopped");
                }
                Some(reply.text)
            }
            Err(e) => {
                self.summary.commands_processed += 1;
                self.summary.errors += 1;
                log::warn!("command '{}' failed: {}", line.trim(), e);
                Some(format!("Error: {}", e))
            }
        }
    }

    /// Start the session and feed it `lines` until one of them is `exit`.
    /// Returns the non-empty outputs in order.
    pub fn run_script<I, S>(&mut self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.start();
        let mut transcript = Vec::new();
        for line in lines {
            if !self.is_running() {
                break;
            }
            if let Some(output) = self.process_line(line.as_ref()) {
                transcript.push(output);
            }
        }
        transcript
    }

    /// Interactive loop: banner, then prompt, read, dispatch, write, until
    /// `exit` or end of input.
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> io::Result<SessionSummary>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        self.start();
        writer.write_all(BANNER.as_bytes()).await?;

        let mut lines = reader.lines();
        while self.is_running() {
            writer.write_all(self.config.prompt.as_bytes()).await?;
            writer.flush().await?;

            let line = match lines.next_line().await? {
                Some(line) => line,
                None => {
                    log::info!("end of input, closing session");
                    break;
                }
            };
            if self.config.echo {
                writer.write_all(line.as_bytes()).await?;
                writer.write_all(b"\n").await?;
            }
            if let Some(output) = self.process_line(&line) {
                writer.write_all(output.as_bytes()).await?;
                writer.write_all(b"\n").await?;
            }
        }

        writer.flush().await?;
        Ok(self.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_session_ignores_input() {
        let mut session = Session::new(CalcConfig::default()).unwrap();
        assert_eq!(session.process_line("add 1 2"), None);
        assert!(session.calculator().history().is_empty());
    }

    #[test]
    fn test_exit_is_terminal() {
        let mut session = Session::new(CalcConfig::default()).unwrap();
        session.run_script(vec!["add 1 2", "exit"]);
        assert!(session.has_exited());

        let transcript = session.run_script(vec!["add 5 5"]);
        assert!(transcript.is_empty());
        assert!(!session.is_running());
        assert_eq!(session.calculator().last_result(), 3.0);
    }

    #[test]
    fn test_errors_are_counted_not_fatal() {
        let mut session = Session::new(CalcConfig::default()).unwrap();
        session.start();
        assert_eq!(
            session.process_line("div 1 0").unwrap(),
            "Error: Division by zero is not allowed"
        );
        assert!(session.is_running());
        session.process_line("add 1 2");
        assert_eq!(
            session.summary(),
            SessionSummary {
                commands_processed: 2,
                errors: 1
            }
        );
    }
}
