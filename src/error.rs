//! Centralised error hierarchy for the **Lox interpreter**.
//!
//! All pipeline stages (scanner, parser, resolver, runtime) convert their
//! failure modes into one of the variants defined here.  Stages that keep
//! going after an error (scanner, parser, resolver) hand their errors to a
//! [`Diagnostics`] collector instead of returning early; the driver inspects
//! the collector between stages to decide whether to continue.
//!
//! The module **does not** print diagnostics itself.

use std::io;
use thiserror::Error;

use log::info;

use crate::token::{Token, TokenType};

/// Canonical error type used throughout the interpreter.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoxError {
    /// Lexical (scanner) error with source line information.
    #[error("[line {line}] Error: {message}")]
    Lex {
        /// Human‑readable description.
        message: String,

        /// 1‑based line where the error occurred.
        line: usize,
    },

    /// Syntactic (parser) error.  `location` is either ` at end` or
    /// ` at '<lexeme>'`.
    #[error("[line {line}] Error{location}: {message}")]
    Parse {
        message: String,
        location: String,
        line: usize,
    },

    /// Static‑analysis failure found by the resolver.  Reported exactly like a
    /// parse error.
    #[error("[line {line}] Error{location}: {message}")]
    Resolve {
        message: String,
        location: String,
        line: usize,
    },

    /// Runtime evaluation error, carrying the line of the offending token.
    #[error("{message}\n[line {line}]")]
    Runtime { message: String, line: usize },

    /// Wrapper around `std::io::Error` (transparent).  Enables `?` on I/O ops.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// UTF‑8 decoding failure when ingesting external text.
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// ` at end` for EOF, ` at '<lexeme>'` for everything else.
fn location_of(token: &Token) -> String {
    if token.token_type == TokenType::EOF {
        " at end".to_string()
    } else {
        format!(" at '{}'", token.lexeme)
    }
}

impl LoxError {
    /// Helper constructor for the **scanner**.
    pub fn lex<S: Into<String>>(line: usize, msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Lex error: line={}, msg={}", line, message);

        LoxError::Lex { message, line }
    }

    /// Helper constructor for the **parser**.
    pub fn parse<S: Into<String>>(token: &Token, msg: S) -> Self {
        let message: String = msg.into();

        info!("Creating Parse error: line={}, msg={}", token.line, message);

        LoxError::Parse {
            message,
            location: location_of(token),
            line: token.line,
        }
    }

    /// Helper constructor for the **resolver**.
    pub fn resolve<S: Into<String>>(token: &Token, msg: S) -> Self {
        let message: String = msg.into();

        info!(
            "Creating Resolve error: line={}, msg={}",
            token.line, message
        );

        LoxError::Resolve {
            message,
            location: location_of(token),
            line: token.line,
        }
    }

    /// Helper constructor for the **interpreter**.
    pub fn runtime<S: Into<String>>(token: &Token, msg: S) -> Self {
        let message: String = msg.into();

        info!(
            "Creating Runtime error: line={}, msg={}",
            token.line, message
        );

        LoxError::Runtime {
            message,
            line: token.line,
        }
    }

    /// Scan, parse and resolve errors all block execution.
    pub fn is_compile_time(&self) -> bool {
        matches!(
            self,
            LoxError::Lex { .. } | LoxError::Parse { .. } | LoxError::Resolve { .. }
        )
    }
}

/// Crate‑wide `Result` alias.
pub type Result<T> = std::result::Result<T, LoxError>;

/// Collects errors reported by every pipeline stage, in report order.
///
/// Two flags mirror the classic `hadError` / `hadRuntimeError` pair; the
/// driver polls them to pick an exit code.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<LoxError>,
    had_error: bool,
    had_runtime_error: bool,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error and raise the matching flag.
    pub fn report(&mut self, error: LoxError) {
        if error.is_compile_time() {
            self.had_error = true;
        } else {
            self.had_runtime_error = true;
        }

        self.errors.push(error);
    }

    /// A scan, parse or resolve error has been reported.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn had_runtime_error(&self) -> bool {
        self.had_runtime_error
    }

    pub fn errors(&self) -> &[LoxError] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Drain the collected errors, leaving the flags untouched.
    pub fn take(&mut self) -> Vec<LoxError> {
        std::mem::take(&mut self.errors)
    }

    /// Forget everything reported so far.
    pub fn reset(&mut self) {
        self.errors.clear();
        self.had_error = false;
        self.had_runtime_error = false;
    }
}

impl Extend<LoxError> for Diagnostics {
    fn extend<I: IntoIterator<Item = LoxError>>(&mut self, iter: I) {
        for error in iter {
            self.report(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_per_stage() {
        let semicolon = Token::new(TokenType::SEMICOLON, ";", 3);
        let eof = Token::new(TokenType::EOF, "", 4);

        assert_eq!(
            LoxError::lex(1, "Unexpected character.").to_string(),
            "[line 1] Error: Unexpected character."
        );
        assert_eq!(
            LoxError::parse(&semicolon, "Expect expression.").to_string(),
            "[line 3] Error at ';': Expect expression."
        );
        assert_eq!(
            LoxError::parse(&eof, "Expect ';' after value.").to_string(),
            "[line 4] Error at end: Expect ';' after value."
        );
        assert_eq!(
            LoxError::runtime(&semicolon, "Operands must be numbers.").to_string(),
            "Operands must be numbers.\n[line 3]"
        );
    }

    #[test]
    fn flags_follow_the_reported_stage() {
        let token = Token::new(TokenType::IDENTIFIER, "x", 1);
        let mut diagnostics = Diagnostics::new();

        diagnostics.report(LoxError::runtime(&token, "boom"));
        assert!(!diagnostics.had_error());
        assert!(diagnostics.had_runtime_error());

        diagnostics.report(LoxError::resolve(&token, "bad"));
        assert!(diagnostics.had_error());
        assert_eq!(diagnostics.take().len(), 2);

        // take leaves the flags for the driver to read
        assert!(diagnostics.had_error());
        diagnostics.reset();
        assert!(!diagnostics.had_error() && !diagnostics.had_runtime_error());
    }
}
