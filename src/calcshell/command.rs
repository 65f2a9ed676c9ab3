//! # Command Registry
//!
//! The data-driven table behind the dispatcher. Each [`CommandSpec`] maps a
//! command name to its arity, help category, usage string and a plain
//! function pointer `fn(&mut CalculatorState, &Invocation) -> Result<Reply, CalcError>`.
//! Handlers capture nothing, so the table can be built and exercised without
//! a running session.
//!
//! | Category | Commands |
//! |----------|----------|
//! | Basic Operations | `add sub mul div mod` |
//! | Scientific Operations | `pow sqrt cbrt fact sin cos tan asin acos atan log ln logb` |
//! | Memory Operations | `ms mr mc m+ m-` |
//! | Chain Operations | `c+ c- c* c/` |
//! | Display | `last hist mhist settings` |
//! | Settings | `mode prec` |
//! | Constants | `pi e` |
//! | Utility | `clear help exit` |
//!
//! ```rust
//! use calcshell::command::{CommandRegistry, Invocation};
//! use calcshell::CalculatorState;
//! use calcshell::parse::NumberParsing;
//!
//! let registry = CommandRegistry::standard();
//! let mut state = CalculatorState::new();
//!
//! let add = registry.lookup("add").unwrap();
//! let invocation = Invocation::new(&["10", "5"], NumberParsing::Lenient, &registry);
//! let reply = add.invoke(&mut state, &invocation).unwrap();
//! assert_eq!(reply.text, "add(10, 5) = 15");
//! ```

use crate::calcshell::arithmetic;
use crate::calcshell::error::{CalcError, CalcResult};
use crate::calcshell::format;
use crate::calcshell::parse::NumberParsing;
use crate::calcshell::state::CalculatorState;
use std::collections::HashMap;

/// Help grouping for a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Basic,
    Scientific,
    Memory,
    Chain,
    Display,
    Settings,
    Constants,
    Utility,
}

impl Category {
    /// Help order.
    pub const ALL: [Category; 8] = [
        Category::Basic,
        Category::Scientific,
        Category::Memory,
        Category::Chain,
        Category::Display,
        Category::Settings,
        Category::Constants,
        Category::Utility,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Category::Basic => "Basic Operations",
            Category::Scientific => "Scientific Operations",
            Category::Memory => "Memory Operations",
            Category::Chain => "Chain Operations",
            Category::Display => "Display",
            Category::Settings => "Settings",
            Category::Constants => "Constants",
            Category::Utility => "Utility",
        }
    }
}

/// What the session should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Text produced by a successful command.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub control: Control,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            control: Control::Continue,
        }
    }

    pub fn exit(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            control: Control::Exit,
        }
    }
}

/// Arguments of one command call plus what a handler needs to read them.
pub struct Invocation<'a> {
    args: &'a [&'a str],
    parsing: NumberParsing,
    registry: &'a CommandRegistry,
}

impl<'a> Invocation<'a> {
    pub fn new(args: &'a [&'a str], parsing: NumberParsing, registry: &'a CommandRegistry) -> Self {
        Self {
            args,
            parsing,
            registry,
        }
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn raw(&self, index: usize) -> &str {
        self.args.get(index).copied().unwrap_or("")
    }

    pub fn number(&self, index: usize) -> Result<f64, CalcError> {
        self.parsing.float(self.raw(index))
    }

    pub fn registry(&self) -> &CommandRegistry {
        self.registry
    }
}

pub type Handler = fn(&mut CalculatorState, &Invocation<'_>) -> Result<Reply, CalcError>;

/// One registry entry.
#[derive(Clone)]
pub struct CommandSpec {
    pub name: &'static str,
    pub arity: usize,
    pub category: Category,
    /// Expected form, e.g. `add <a> <b>`. Reported on arity mismatch.
    pub usage: &'static str,
    pub description: &'static str,
    handler: Handler,
}

impl CommandSpec {
    pub fn new(
        name: &'static str,
        arity: usize,
        category: Category,
        usage: &'static str,
        description: &'static str,
        handler: Handler,
    ) -> Self {
        Self {
            name,
            arity,
            category,
            usage,
            description,
            handler,
        }
    }

    /// Run the handler after checking the argument count.
    pub fn invoke(
        &self,
        state: &mut CalculatorState,
        invocation: &Invocation<'_>,
    ) -> Result<Reply, CalcError> {
        if invocation.len() != self.arity {
            return Err(CalcError::UsageError(self.usage.to_string()));
        }
        (self.handler)(state, invocation)
    }
}

impl std::fmt::Debug for CommandSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSpec")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .field("category", &self.category)
            .field("usage", &self.usage)
            .finish()
    }
}

/// Name-indexed command table that keeps registration order for help.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
    index: HashMap<&'static str, usize>,
}

impl CommandRegistry {
    pub fn empty() -> Self {
        Self {
            commands: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert or replace a command definition.
    pub fn register(&mut self, spec: CommandSpec) {
        match self.index.get(spec.name) {
            Some(&position) => self.commands[position] = spec,
            None => {
                self.index.insert(spec.name, self.commands.len());
                self.commands.push(spec);
            }
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        self.index.get(name).map(|&position| &self.commands[position])
    }

    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Every command grouped by category, with usage strings.
    pub fn help_text(&self) -> String {
        let mut out = String::from("Available commands:");
        for category in Category::ALL.iter() {
            let members: Vec<&CommandSpec> = self
                .commands
                .iter()
                .filter(|spec| spec.category == *category)
                .collect();
            if members.is_empty() {
                continue;
            }
            out.push_str("\n\n");
            out.push_str(category.title());
            out.push(':');
            for spec in members {
                out.push_str(&format!(
                    "\n  {:<8} - {}: {}",
                    spec.name, spec.description, spec.usage
                ));
            }
        }
        out.push_str(
            "\n\nTips:\
             \n  Chain operations work on the last result\
             \n  Type 'exit' to quit",
        );
        out
    }

    /// The full calculator command set.
    pub fn standard() -> Self {
        use self::Category::*;

        let mut registry = Self::empty();
        let specs = vec![
            CommandSpec::new("add", 2, Basic, "add <a> <b>", "Add two numbers", |s, i| {
                binary(s, i, "add", |s, a, b| Ok(s.add(a, b)))
            }),
            CommandSpec::new("sub", 2, Basic, "sub <a> <b>", "Subtract two numbers", |s, i| {
                binary(s, i, "subtract", |s, a, b| Ok(s.subtract(a, b)))
            }),
            CommandSpec::new("mul", 2, Basic, "mul <a> <b>", "Multiply two numbers", |s, i| {
                binary(s, i, "multiply", |s, a, b| Ok(s.multiply(a, b)))
            }),
            CommandSpec::new("div", 2, Basic, "div <a> <b>", "Divide two numbers", |s, i| {
                binary(s, i, "divide", CalculatorState::divide)
            }),
            CommandSpec::new("mod", 2, Basic, "mod <a> <b>", "Remainder of a division", |s, i| {
                binary(s, i, "modulus", |s, a, b| Ok(s.modulus(a, b)))
            }),
            CommandSpec::new("pow", 2, Scientific, "pow <base> <exponent>", "Power", |s, i| {
                binary(s, i, "power", |s, a, b| Ok(s.power(a, b)))
            }),
            CommandSpec::new("sqrt", 1, Scientific, "sqrt <number>", "Square root", |s, i| {
                unary(s, i, "sqrt", CalculatorState::square_root)
            }),
            CommandSpec::new("cbrt", 1, Scientific, "cbrt <number>", "Cube root", |s, i| {
                unary(s, i, "cbrt", |s, x| Ok(s.cube_root(x)))
            }),
            CommandSpec::new("fact", 1, Scientific, "fact <n>", "Factorial", |s, i| {
                unary(s, i, "factorial", CalculatorState::factorial)
            }),
            CommandSpec::new("sin", 1, Scientific, "sin <angle>", "Sine", |s, i| {
                unary(s, i, "sin", |s, x| Ok(s.sin(x)))
            }),
            CommandSpec::new("cos", 1, Scientific, "cos <angle>", "Cosine", |s, i| {
                unary(s, i, "cos", |s, x| Ok(s.cos(x)))
            }),
            CommandSpec::new("tan", 1, Scientific, "tan <angle>", "Tangent", |s, i| {
                unary(s, i, "tan", |s, x| Ok(s.tan(x)))
            }),
            CommandSpec::new("asin", 1, Scientific, "asin <value>", "Inverse sine", |s, i| {
                unary(s, i, "asin", CalculatorState::asin)
            }),
            CommandSpec::new("acos", 1, Scientific, "acos <value>", "Inverse cosine", |s, i| {
                unary(s, i, "acos", CalculatorState::acos)
            }),
            CommandSpec::new("atan", 1, Scientific, "atan <value>", "Inverse tangent", |s, i| {
                unary(s, i, "atan", |s, x| Ok(s.atan(x)))
            }),
            CommandSpec::new("log", 1, Scientific, "log <number>", "Base-10 logarithm", |s, i| {
                unary(s, i, "log10", CalculatorState::log10)
            }),
            CommandSpec::new("ln", 1, Scientific, "ln <number>", "Natural logarithm", |s, i| {
                unary(s, i, "ln", CalculatorState::ln)
            }),
            CommandSpec::new(
                "logb",
                2,
                Scientific,
                "logb <base> <number>",
                "Logarithm in any base",
                |s, i| binary(s, i, "log", CalculatorState::log_base),
            ),
            CommandSpec::new("ms", 1, Memory, "ms <value>", "Memory store", |s, i| {
                let value = i.number(0)?;
                Ok(Reply::text(format!(
                    "Memory store: {}",
                    format::number(s.memory_store(value))
                )))
            }),
            CommandSpec::new("mr", 0, Memory, "mr", "Memory recall", |s, _| {
                Ok(Reply::text(format!(
                    "Memory recall: {}",
                    format::number(s.memory_recall())
                )))
            }),
            CommandSpec::new("mc", 0, Memory, "mc", "Memory clear", |s, _| {
                let prior = s.memory_clear();
                Ok(Reply::text(format!(
                    "Memory clear: 0 (was {})",
                    format::number(prior)
                )))
            }),
            CommandSpec::new("m+", 1, Memory, "m+ <value>", "Memory add", |s, i| {
                let value = i.number(0)?;
                Ok(Reply::text(format!(
                    "Memory add: {}",
                    format::number(s.memory_add(value))
                )))
            }),
            CommandSpec::new("m-", 1, Memory, "m- <value>", "Memory subtract", |s, i| {
                let value = i.number(0)?;
                Ok(Reply::text(format!(
                    "Memory subtract: {}",
                    format::number(s.memory_subtract(value))
                )))
            }),
            CommandSpec::new("c+", 1, Chain, "c+ <value>", "Chain add", |s, i| {
                chain(s, i, "+", |s, b| Ok(s.chain_add(b)))
            }),
            CommandSpec::new("c-", 1, Chain, "c- <value>", "Chain subtract", |s, i| {
                chain(s, i, "-", |s, b| Ok(s.chain_subtract(b)))
            }),
            CommandSpec::new("c*", 1, Chain, "c* <value>", "Chain multiply", |s, i| {
                chain(s, i, "*", |s, b| Ok(s.chain_multiply(b)))
            }),
            CommandSpec::new("c/", 1, Chain, "c/ <value>", "Chain divide", |s, i| {
                chain(s, i, "/", CalculatorState::chain_divide)
            }),
            CommandSpec::new("last", 0, Display, "last", "Show last result", |s, _| {
                Ok(Reply::text(format!(
                    "Last result: {}",
                    format::number(s.last_result())
                )))
            }),
            CommandSpec::new("hist", 0, Display, "hist", "Show operation history", |s, _| {
                let history = s.history();
                if history.is_empty() {
                    return Ok(Reply::text("No operations in history"));
                }
                Ok(Reply::text(format!(
                    "Operation history:\n{}",
                    format::numbered(&history, format::operation_record)
                )))
            }),
            CommandSpec::new("mhist", 0, Display, "mhist", "Show memory history", |s, _| {
                let history = s.memory_history();
                if history.is_empty() {
                    return Ok(Reply::text("No memory operations"));
                }
                Ok(Reply::text(format!(
                    "Memory history:\n{}",
                    format::numbered(&history, format::memory_record)
                )))
            }),
            CommandSpec::new("settings", 0, Display, "settings", "Show settings", |s, _| {
                let settings = s.settings();
                Ok(Reply::text(format!(
                    "Angle mode: {}\nPrecision: {}",
                    settings.angle_mode, settings.precision
                )))
            }),
            CommandSpec::new(
                "mode",
                1,
                Settings,
                "mode <degrees|radians>",
                "Set angle mode",
                |s, i| {
                    let mode = s.set_angle_mode(i.raw(0))?;
                    Ok(Reply::text(format!("Angle mode set to {}", mode)))
                },
            ),
            CommandSpec::new("prec", 1, Settings, "prec <0-15>", "Set precision", |s, i| {
                let requested = i
                    .parsing
                    .integer(i.raw(0), |t| CalcError::InvalidPrecision(t.to_string()))?;
                let precision = s.set_precision(requested)?;
                Ok(Reply::text(format!("Precision set to {}", precision)))
            }),
            CommandSpec::new("pi", 0, Constants, "pi", "The constant pi", |_, _| {
                Ok(Reply::text(format!("pi = {}", arithmetic::PI)))
            }),
            CommandSpec::new("e", 0, Constants, "e", "Euler's number", |_, _| {
                Ok(Reply::text(format!("e = {}", arithmetic::E)))
            }),
            CommandSpec::new("clear", 0, Utility, "clear", "Clear history", |s, _| {
                s.clear_history();
                Ok(Reply::text("History cleared"))
            }),
            CommandSpec::new("help", 0, Utility, "help", "Show available commands", |_, i| {
                Ok(Reply::text(i.registry().help_text()))
            }),
            CommandSpec::new("exit", 0, Utility, "exit", "Exit the calculator", |_, _| {
                Ok(Reply::exit("Goodbye!"))
            }),
        ];

        for spec in specs {
            registry.register(spec);
        }
        registry
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn binary(
    state: &mut CalculatorState,
    invocation: &Invocation<'_>,
    operation: &str,
    op: fn(&mut CalculatorState, f64, f64) -> CalcResult,
) -> Result<Reply, CalcError> {
    let a = invocation.number(0)?;
    let b = invocation.number(1)?;
    let result = op(state, a, b)?;
    Ok(Reply::text(format::call(operation, (a, Some(b)), result)))
}

fn unary(
    state: &mut CalculatorState,
    invocation: &Invocation<'_>,
    operation: &str,
    op: fn(&mut CalculatorState, f64) -> CalcResult,
) -> Result<Reply, CalcError> {
    let x = invocation.number(0)?;
    let result = op(state, x)?;
    Ok(Reply::text(format::call(operation, (x, None), result)))
}

fn chain(
    state: &mut CalculatorState,
    invocation: &Invocation<'_>,
    symbol: &str,
    op: fn(&mut CalculatorState, f64) -> CalcResult,
) -> Result<Reply, CalcError> {
    let b = invocation.number(0)?;
    let a = state.last_result();
    let result = op(state, b)?;
    Ok(Reply::text(format!(
        "{} {} {} = {}",
        format::number(a),
        symbol,
        format::number(b),
        format::number(result)
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(
        registry: &CommandRegistry,
        state: &mut CalculatorState,
        name: &str,
        args: &[&str],
    ) -> Result<Reply, CalcError> {
        let invocation = Invocation::new(args, NumberParsing::Lenient, registry);
        registry.lookup(name).unwrap().invoke(state, &invocation)
    }

    #[test]
    fn test_registry_arity_surface() {
        let registry = CommandRegistry::standard();
        let expected = [
            ("add", 2),
            ("sub", 2),
            ("mul", 2),
            ("div", 2),
            ("mod", 2),
            ("pow", 2),
            ("sqrt", 1),
            ("fact", 1),
            ("sin", 1),
            ("cos", 1),
            ("tan", 1),
            ("ms", 1),
            ("mr", 0),
            ("mc", 0),
            ("m+", 1),
            ("m-", 1),
            ("c+", 1),
            ("c-", 1),
            ("c*", 1),
            ("c/", 1),
            ("last", 0),
            ("hist", 0),
            ("mhist", 0),
            ("settings", 0),
            ("mode", 1),
            ("prec", 1),
            ("clear", 0),
            ("help", 0),
            ("exit", 0),
        ];
        for (name, arity) in expected.iter() {
            let spec = registry.lookup(name).unwrap_or_else(|| panic!("missing {}", name));
            assert_eq!(spec.arity, *arity, "arity of {}", name);
        }
    }

    #[test]
    fn test_arity_mismatch_reports_usage() {
        let registry = CommandRegistry::standard();
        let mut state = CalculatorState::new();
        let err = run(&registry, &mut state, "add", &["1"]).unwrap_err();
        assert_eq!(err, CalcError::UsageError("add <a> <b>".to_string()));
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_register_replaces_existing_entry() {
        let mut registry = CommandRegistry::standard();
        let before = registry.len();
        registry.register(CommandSpec::new(
            "exit",
            0,
            Category::Utility,
            "exit",
            "Leave",
            |_, _| Ok(Reply::exit("Bye")),
        ));
        assert_eq!(registry.len(), before);
        let mut state = CalculatorState::new();
        assert_eq!(run(&registry, &mut state, "exit", &[]).unwrap().text, "Bye");
    }

    #[test]
    fn test_chain_reply_shows_previous_result() {
        let registry = CommandRegistry::standard();
        let mut state = CalculatorState::new();
        run(&registry, &mut state, "add", &["10", "5"]).unwrap();
        let reply = run(&registry, &mut state, "c*", &["2"]).unwrap();
        assert_eq!(reply.text, "15 * 2 = 30");
    }

    #[test]
    fn test_help_groups_by_category_in_order() {
        let help = CommandRegistry::standard().help_text();
        let basic = help.find("Basic Operations:").unwrap();
        let memory = help.find("Memory Operations:").unwrap();
        let utility = help.find("Utility:").unwrap();
        assert!(basic < memory && memory < utility);
        assert!(help.contains("m+ <value>"));
        assert!(help.contains("mode <degrees|radians>"));
    }

    #[test]
    fn test_exit_reply_requests_stop() {
        let registry = CommandRegistry::standard();
        let mut state = CalculatorState::new();
        let reply = run(&registry, &mut state, "exit", &[]).unwrap();
        assert_eq!(reply.control, Control::Exit);
    }
}
