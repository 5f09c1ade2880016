use std::collections::HashMap;
use std::io::{self, Write};
use std::rc::Rc;

use log::{debug, info};

use crate::callable::{natives, Callable, LoxFunction, NativeFunction};
use crate::environment::{EnvRef, Environment};
use crate::error::{LoxError, Result};
use crate::expr::{Expr, ExprId};
use crate::stmt::Stmt;
use crate::token::{Token, TokenType};
use crate::value::Value;

/// How a statement finished.  `Return` travels up through blocks and loops
/// until the enclosing call turns it into the call's value.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    Normal,
    Return(Value),
}

/// Tree‑walking evaluator.
///
/// Variable references the resolver recorded in `locals` are read exactly
/// that many scopes out; everything else is a global.
pub struct Interpreter {
    globals: EnvRef,
    environment: EnvRef,
    locals: HashMap<ExprId, usize>,
    output: Box<dyn Write>,
}

impl Interpreter {
    /// Creates a new Interpreter printing to stdout, with the built‑ins
    /// defined.
    pub fn new() -> Self {
        Self::with_output(Box::new(io::stdout()))
    }

    /// Creates a new Interpreter whose `print` output goes to `output`.
    pub fn with_output(output: Box<dyn Write>) -> Self {
        info!("Initializing Interpreter");

        let globals: EnvRef = Environment::new().into_ref();

        let mut interpreter = Self {
            environment: Rc::clone(&globals),
            globals,
            locals: HashMap::new(),
            output,
        };

        for native in natives() {
            interpreter.define_native(native);
        }

        interpreter
    }

    /// Bind a built‑in in the global scope.
    pub fn define_native(&mut self, native: NativeFunction) {
        debug!("Defining native function '{}'", native.name());

        let name: String = native.name().to_string();
        self.globals
            .borrow_mut()
            .define(&name, Value::Callable(Rc::new(native)));
    }

    /// Record that the reference `id` lives `depth` scopes out.  Called by
    /// the resolver.
    pub fn resolve(&mut self, id: ExprId, depth: usize) {
        debug!("Resolved {:?} at depth {}", id, depth);

        self.locals.insert(id, depth);
    }

    /// Scope distance recorded for `id`, `None` for globals.
    pub fn local_depth(&self, id: ExprId) -> Option<usize> {
        self.locals.get(&id).copied()
    }

    /// Interprets a list of statements (a "program").  The first runtime
    /// error stops the whole program.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<()> {
        debug!("Interpreting {} statements", statements.len());

        let result: Result<()> = self.run_program(statements);

        // Output printed before a runtime error must still reach the writer.
        self.output.flush()?;
        result?;

        info!("Interpretation completed successfully");

        Ok(())
    }

    fn run_program(&mut self, statements: &[Stmt]) -> Result<()> {
        for stmt in statements {
            if let Completion::Return(value) = self.execute(stmt)? {
                // The resolver rejects top‑level `return`; without it, stop here.
                debug!("Top-level return of {}, stopping", value);
                break;
            }
        }

        Ok(())
    }

    /// Executes a single statement.
    pub fn execute(&mut self, stmt: &Stmt) -> Result<Completion> {
        match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
            }

            Stmt::Print(expr) => {
                let value: Value = self.evaluate(expr)?;
                writeln!(self.output, "{}", value)?;
                debug!("Printed value: {}", value);
            }

            Stmt::Var { name, initializer } => {
                let value: Value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };

                debug!("Defining variable '{}' = {}", name.lexeme, value);

                self.environment.borrow_mut().define(&name.lexeme, value);
            }

            Stmt::Block(statements) => {
                let scope: EnvRef =
                    Environment::with_enclosing(Rc::clone(&self.environment)).into_ref();

                return self.execute_block(statements, scope);
            }

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    return self.execute(then_branch);
                } else if let Some(else_stmt) = else_branch {
                    return self.execute(else_stmt);
                }
            }

            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    if let Completion::Return(value) = self.execute(body)? {
                        return Ok(Completion::Return(value));
                    }
                }
            }

            Stmt::Function(declaration) => {
                debug!("Defining function '{}'", declaration.name.lexeme);

                let function = LoxFunction::new(Rc::clone(declaration), Rc::clone(&self.environment));

                self.environment.borrow_mut().define(
                    &declaration.name.lexeme,
                    Value::Callable(Rc::new(function)),
                );
            }

            Stmt::Return { value, .. } => {
                let value: Value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };

                debug!("Returning value: {}", value);

                return Ok(Completion::Return(value));
            }
        }

        Ok(Completion::Normal)
    }

    /// Run `statements` with `environment` as the current scope.  The previous
    /// scope is restored whether the block completes, returns, or fails.
    pub fn execute_block(&mut self, statements: &[Stmt], environment: EnvRef) -> Result<Completion> {
        debug!("Entering block with {} statements", statements.len());

        let previous: EnvRef = std::mem::replace(&mut self.environment, environment);

        let result = self.run_statements(statements);

        self.environment = previous;

        debug!("Exited block");

        result
    }

    fn run_statements(&mut self, statements: &[Stmt]) -> Result<Completion> {
        for stmt in statements {
            if let Completion::Return(value) = self.execute(stmt)? {
                return Ok(Completion::Return(value));
            }
        }

        Ok(Completion::Normal)
    }

    /// Evaluates an expression and returns a Value.
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value> {
        match expr {
            Expr::Literal(literal) => Ok(Value::from(literal)),

            Expr::Grouping(inner) => self.evaluate(inner),

            Expr::Unary { operator, right } => self.evaluate_unary(operator, right),

            Expr::Binary {
                left,
                operator,
                right,
            } => self.evaluate_binary(left, operator, right),

            Expr::Logical {
                left,
                operator,
                right,
            } => {
                let left_val: Value = self.evaluate(left)?;

                let short_circuit: bool = if operator.token_type == TokenType::OR {
                    left_val.is_truthy()
                } else {
                    !left_val.is_truthy()
                };

                if short_circuit {
                    Ok(left_val)
                } else {
                    self.evaluate(right)
                }
            }

            Expr::Variable { id, name } => self.look_up_variable(*id, name),

            Expr::Assign { id, name, value } => {
                let value: Value = self.evaluate(value)?;

                match self.locals.get(id) {
                    Some(&distance) => {
                        Environment::assign_at(&self.environment, distance, name, value.clone())?
                    }
                    None => self.globals.borrow_mut().assign(name, value.clone())?,
                }

                debug!("Assigned {} to '{}'", value, name.lexeme);

                Ok(value)
            }

            Expr::Call {
                callee,
                paren,
                arguments,
            } => {
                let callee_val: Value = self.evaluate(callee)?;

                let mut arg_values: Vec<Value> = Vec::with_capacity(arguments.len());
                for arg in arguments {
                    arg_values.push(self.evaluate(arg)?);
                }

                self.invoke_callable(callee_val, paren, arg_values)
            }
        }
    }

    fn look_up_variable(&self, id: ExprId, name: &Token) -> Result<Value> {
        match self.locals.get(&id) {
            Some(&distance) => Environment::get_at(&self.environment, distance, name),
            None => self.globals.borrow().get(name),
        }
    }

    /// Evaluates a unary expression.
    fn evaluate_unary(&mut self, op: &Token, expr: &Expr) -> Result<Value> {
        let right_val: Value = self.evaluate(expr)?;

        match op.token_type {
            TokenType::MINUS => match right_val {
                Value::Number(n) => Ok(Value::Number(-n)),
                _ => Err(LoxError::runtime(op, "Operand must be a number.")),
            },

            TokenType::BANG => Ok(Value::Bool(!right_val.is_truthy())),

            _ => Err(LoxError::runtime(op, "Invalid unary operator.")),
        }
    }

    /// Evaluates a binary expression.  Both operands are always evaluated,
    /// left first.
    fn evaluate_binary(&mut self, left: &Expr, op: &Token, right: &Expr) -> Result<Value> {
        let left_val: Value = self.evaluate(left)?;
        let right_val: Value = self.evaluate(right)?;

        debug!(
            "Binary '{}' on {} and {}",
            op.lexeme,
            left_val.type_name(),
            right_val.type_name()
        );

        match op.token_type {
            TokenType::PLUS => match (left_val, right_val) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::String(a), Value::String(b)) => Ok(Value::String(a + &b)),
                _ => Err(LoxError::runtime(
                    op,
                    "Operands must be two numbers or two strings.",
                )),
            },

            TokenType::EQUAL_EQUAL => Ok(Value::Bool(left_val == right_val)),
            TokenType::BANG_EQUAL => Ok(Value::Bool(left_val != right_val)),

            _ => {
                let (a, b) = number_operands(op, &left_val, &right_val)?;

                match op.token_type {
                    TokenType::MINUS => Ok(Value::Number(a - b)),
                    TokenType::STAR => Ok(Value::Number(a * b)),
                    TokenType::SLASH => Ok(Value::Number(a / b)),
                    TokenType::GREATER => Ok(Value::Bool(a > b)),
                    TokenType::GREATER_EQUAL => Ok(Value::Bool(a >= b)),
                    TokenType::LESS => Ok(Value::Bool(a < b)),
                    TokenType::LESS_EQUAL => Ok(Value::Bool(a <= b)),
                    _ => Err(LoxError::runtime(op, "Invalid binary operator.")),
                }
            }
        }
    }

    /// Invokes a callable (native or user‑defined function).
    fn invoke_callable(
        &mut self,
        callee_val: Value,
        paren: &Token,
        arg_values: Vec<Value>,
    ) -> Result<Value> {
        let Value::Callable(callable) = callee_val else {
            return Err(LoxError::runtime(
                paren,
                "Can only call functions and classes.",
            ));
        };

        if arg_values.len() != callable.arity() {
            return Err(LoxError::runtime(
                paren,
                format!(
                    "Expected {} arguments but got {}.",
                    callable.arity(),
                    arg_values.len()
                ),
            ));
        }

        callable.call(self, arg_values, paren)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn number_operands(op: &Token, left: &Value, right: &Value) -> Result<(f64, f64)> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(LoxError::runtime(op, "Operands must be numbers.")),
    }
}
