//! The scan → parse → resolve → interpret pipeline as one reusable session.
//!
//! A [`Lox`] keeps its interpreter (and therefore its globals) between
//! [`Lox::run`] calls, which is what lets a REPL define a function on one
//! line and call it on the next.

use std::io::Write;

use log::{debug, info};

use crate::error::{Diagnostics, LoxError};
use crate::expr::ExprId;
use crate::interpreter::Interpreter;
use crate::parser::Parser;
use crate::resolver::Resolver;
use crate::scanner::scan_tokens;
use crate::stmt::Stmt;
use crate::token::Token;

/// Outcome of running one source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    /// Scan, parse or resolve errors; nothing was executed.
    CompileError,
    /// Execution started and was stopped by a runtime error.
    RuntimeError,
}

impl Status {
    /// Conventional sysexits codes: 65 (data error), 70 (internal error).
    pub fn exit_code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::CompileError => 65,
            Status::RuntimeError => 70,
        }
    }
}

pub struct Lox {
    interpreter: Interpreter,
    diagnostics: Diagnostics,
    next_id: ExprId,
}

impl Lox {
    pub fn new() -> Self {
        Self::from_interpreter(Interpreter::new())
    }

    /// A session whose `print` output goes to `output`.
    pub fn with_output(output: Box<dyn Write>) -> Self {
        Self::from_interpreter(Interpreter::with_output(output))
    }

    fn from_interpreter(interpreter: Interpreter) -> Self {
        Self {
            interpreter,
            diagnostics: Diagnostics::new(),
            next_id: ExprId(0),
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Drain everything reported so far and clear both error flags.
    pub fn take_diagnostics(&mut self) -> Vec<LoxError> {
        let errors: Vec<LoxError> = self.diagnostics.take();
        self.diagnostics.reset();
        errors
    }

    pub fn interpreter_mut(&mut self) -> &mut Interpreter {
        &mut self.interpreter
    }

    /// Scan only.
    pub fn tokenize(&mut self, source: &str) -> Vec<Token> {
        scan_tokens(source, &mut self.diagnostics)
    }

    /// Scan and parse.  Expression ids continue from earlier parses.
    pub fn parse(&mut self, source: &str) -> Vec<Stmt> {
        let tokens: Vec<Token> = self.tokenize(source);
        let mut parser = Parser::starting_at(tokens, self.next_id);
        let statements: Vec<Stmt> = parser.parse(&mut self.diagnostics);

        self.next_id = parser.next_expr_id();

        statements
    }

    /// Run `source` through the whole pipeline.
    pub fn run(&mut self, source: &str) -> Status {
        info!("Running {} bytes of source", source.len());

        let statements: Vec<Stmt> = self.parse(source);

        if self.diagnostics.had_error() {
            debug!("Stopping after parse: compile-time errors");
            return Status::CompileError;
        }

        Resolver::new(&mut self.interpreter, &mut self.diagnostics).resolve(&statements);

        if self.diagnostics.had_error() {
            debug!("Stopping after resolve: compile-time errors");
            return Status::CompileError;
        }

        match self.interpreter.interpret(&statements) {
            Ok(()) => Status::Ok,
            Err(e) => {
                debug!("Runtime error: {}", e);
                self.diagnostics.report(e);
                Status::RuntimeError
            }
        }
    }
}

impl Default for Lox {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expression_ids_continue_across_runs() {
        let mut lox = Lox::with_output(Box::new(std::io::sink()));

        lox.parse("a;");
        let first: ExprId = lox.next_id;
        lox.parse("b;");

        assert_eq!(first, ExprId(1));
        assert_eq!(lox.next_id, ExprId(2));
    }

    #[test]
    fn compile_errors_skip_execution() {
        let mut lox = Lox::with_output(Box::new(std::io::sink()));

        assert_eq!(lox.run("var x = ;"), Status::CompileError);
        assert!(lox.diagnostics().had_error());
        assert_eq!(lox.take_diagnostics().len(), 1);
        assert!(!lox.diagnostics().had_error());
    }
}
