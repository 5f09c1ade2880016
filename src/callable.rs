//! Everything a Lox call expression can invoke.
//!
//! [`Callable`] is the single seam between the evaluator and call targets.
//! Declared functions ([`LoxFunction`]) execute their body in a fresh scope
//! parented to the environment they were declared in; built‑ins
//! ([`NativeFunction`]) are plain Rust function pointers.  New built‑ins are
//! added to [`natives`] without touching the evaluator.

use std::fmt;
use std::rc::Rc;

use chrono::Utc;
use log::{debug, info};

use crate::environment::{EnvRef, Environment};
use crate::error::{LoxError, Result};
use crate::interpreter::{Completion, Interpreter};
use crate::stmt::FunctionDecl;
use crate::token::Token;
use crate::value::Value;

/// A value that can appear in callee position.
pub trait Callable: fmt::Debug + fmt::Display {
    fn name(&self) -> &str;

    /// Exact number of arguments the callee accepts.
    fn arity(&self) -> usize;

    /// Invoke with already evaluated arguments.  The arity has been checked
    /// by the caller; `call_site` is the closing `)` of the call, used to
    /// place errors raised by the callee itself.
    fn call(
        &self,
        interpreter: &mut Interpreter,
        arguments: Vec<Value>,
        call_site: &Token,
    ) -> Result<Value>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Declared functions
// ─────────────────────────────────────────────────────────────────────────────

/// A `fun` declaration paired with the environment it was declared in.
pub struct LoxFunction {
    declaration: Rc<FunctionDecl>,
    closure: EnvRef,
}

impl LoxFunction {
    pub fn new(declaration: Rc<FunctionDecl>, closure: EnvRef) -> Self {
        Self {
            declaration,
            closure,
        }
    }
}

impl Callable for LoxFunction {
    fn name(&self) -> &str {
        &self.declaration.name.lexeme
    }

    fn arity(&self) -> usize {
        self.declaration.params.len()
    }

    fn call(
        &self,
        interpreter: &mut Interpreter,
        arguments: Vec<Value>,
        _call_site: &Token,
    ) -> Result<Value> {
        debug!("Calling user-defined function '{}'", self.name());

        let mut environment = Environment::with_enclosing(Rc::clone(&self.closure));

        for (param, argument) in self.declaration.params.iter().zip(arguments) {
            environment.define(&param.lexeme, argument);
        }

        // The parameter scope doubles as the body's block scope.
        let value: Value =
            match interpreter.execute_block(&self.declaration.body, environment.into_ref())? {
                Completion::Return(value) => value,
                Completion::Normal => Value::Nil,
            };

        info!("Function '{}' returned: {}", self.name(), value);

        Ok(value)
    }
}

// A derived Debug would walk into the closure, which may hold this function.
impl fmt::Debug for LoxFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoxFunction")
            .field("name", &self.declaration.name.lexeme)
            .field("arity", &self.arity())
            .finish()
    }
}

impl fmt::Display for LoxFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.declaration.name.lexeme)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Built‑ins
// ─────────────────────────────────────────────────────────────────────────────

/// Signature of a built‑in.  Errors are plain messages; the interpreter
/// attaches the call site.
pub type NativeFn = fn(&[Value]) -> std::result::Result<Value, String>;

#[derive(Debug, Clone)]
pub struct NativeFunction {
    name: &'static str,
    arity: usize,
    func: NativeFn,
}

impl NativeFunction {
    pub const fn new(name: &'static str, arity: usize, func: NativeFn) -> Self {
        Self { name, arity, func }
    }

    /// `clock()`: seconds since the Unix epoch.
    pub fn clock() -> Self {
        Self::new("clock", 0, |_args: &[Value]| {
            let micros: i64 = Utc::now().timestamp_micros();
            Ok(Value::Number(micros as f64 / 1_000_000.0))
        })
    }
}

impl Callable for NativeFunction {
    fn name(&self) -> &str {
        self.name
    }

    fn arity(&self) -> usize {
        self.arity
    }

    fn call(
        &self,
        _interpreter: &mut Interpreter,
        arguments: Vec<Value>,
        call_site: &Token,
    ) -> Result<Value> {
        debug!("Calling native function '{}'", self.name);

        let result: Value =
            (self.func)(&arguments).map_err(|message| LoxError::runtime(call_site, message))?;

        info!("Native function '{}' returned: {}", self.name, result);

        Ok(result)
    }
}

impl fmt::Display for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<native fn>")
    }
}

/// Built‑ins seeded into every interpreter's global scope.
pub fn natives() -> Vec<NativeFunction> {
    vec![NativeFunction::clock()]
}
