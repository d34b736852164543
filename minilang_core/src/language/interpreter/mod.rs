mod context;
mod evaluator;
mod executor;

use std::io::Write;
use log::{debug, warn};
use crate::language::ast::AstNode;
use executor::Executor;

pub use context::ExecutionContext;

/// Destination of `print` statements, one call per printed value.
pub trait Output {
    fn print_line(&mut self, value: f64);
}

/// Writes each printed value as a line on standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutOutput;

impl Output for StdoutOutput {
    fn print_line(&mut self, value: f64) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", format_number(value)) {
            warn!("Failed to write program output: {}", e);
        }
    }
}

/// Keeps printed lines in memory.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CapturedOutput {
    lines: Vec<String>,
}

impl CapturedOutput {
    pub fn new() -> Self {
        CapturedOutput { lines: Vec::new() }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Output for CapturedOutput {
    fn print_line(&mut self, value: f64) {
        self.lines.push(format_number(value));
    }
}

impl<O: Output + ?Sized> Output for &mut O {
    fn print_line(&mut self, value: f64) {
        (**self).print_line(value);
    }
}

/// Renders a value the way `print` shows it: integral values without a
/// fractional part, `-0` as `0`, and `Infinity`, `-Infinity` or `NaN` for
/// the non-finite cases. Large and tiny magnitudes are written out in full,
/// never in exponent form.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Tree-walking interpreter. The variable environment lives as long as the
/// interpreter, so several programs can run against the same state.
#[derive(Debug)]
pub struct Interpreter<O: Output = StdoutOutput> {
    context: ExecutionContext,
    output: O,
}

impl Interpreter<StdoutOutput> {
    pub fn new() -> Self {
        Interpreter::with_output(StdoutOutput)
    }
}

impl Default for Interpreter<StdoutOutput> {
    fn default() -> Self {
        Interpreter::new()
    }
}

impl<O: Output> Interpreter<O> {
    pub fn with_output(output: O) -> Self {
        Interpreter {
            context: ExecutionContext::new(),
            output,
        }
    }

    pub fn set_var(&mut self, name: &str, value: impl Into<f64>) {
        let value = value.into();
        debug!("Setting variable {} = {}", name, value);
        self.context.set_variable(name, value);
    }

    /// `None` for names that were never stored, unlike expression
    /// evaluation, where they read as 0.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.context.get_variable(name)
    }

    pub fn variables(&self) -> impl Iterator<Item = (&str, f64)> {
        self.context.variables()
    }

    pub fn exec(&mut self, root: &AstNode) {
        debug!("Executing program: {}", root);
        Executor::new(&mut self.context, &mut self.output).execute(root);
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }
}
