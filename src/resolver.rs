//! Static resolver pass for the **Lox** interpreter.
//!
//! This resolver does three things in one AST walk:
//! 1. Build lexical scopes (stack of `HashMap<String, bool>` tracking declared/defined).
//! 2. Report static errors (redeclaration, read in own initializer, top‑level `return`).
//! 3. Tell the interpreter, for *each* local variable occurrence, how many
//!    scopes out its binding lives.  Occurrences not found in any scope are
//!    left unrecorded and treated as globals at runtime.
//!
//! Errors never stop the walk; they are collected in the caller's
//! [`Diagnostics`], and the driver refuses to interpret when any were found.

use crate::error::{Diagnostics, LoxError};
use crate::expr::{Expr, ExprId};
use crate::interpreter::Interpreter;
use crate::stmt::{FunctionDecl, Stmt};
use crate::token::Token;
use log::{debug, info};
use std::collections::HashMap;

/// Are we inside a user function?  Used to validate `return`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum FunctionType {
    None,
    Function,
}

/// Resolver: tracks scopes, enforces static rules, and *records* binding
/// distances by calling back into the interpreter.
pub struct Resolver<'i, 'd> {
    interpreter: &'i mut Interpreter,
    diagnostics: &'d mut Diagnostics,
    scopes: Vec<HashMap<String, bool>>, // false=declared, true=defined
    current_function: FunctionType,
}

impl<'i, 'd> Resolver<'i, 'd> {
    /// Create a new resolver bound to the given interpreter.
    pub fn new(interpreter: &'i mut Interpreter, diagnostics: &'d mut Diagnostics) -> Self {
        info!("Resolver instantiated");

        Resolver {
            interpreter,
            diagnostics,
            scopes: Vec::new(),
            current_function: FunctionType::None,
        }
    }

    /// Walk all top‑level statements.
    pub fn resolve(&mut self, statements: &[Stmt]) {
        info!(
            "Beginning resolve pass over {} statement(s)",
            statements.len()
        );

        self.resolve_stmts(statements);
    }

    fn resolve_stmts(&mut self, statements: &[Stmt]) {
        for stmt in statements {
            self.resolve_stmt(stmt);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Statement resolution
    // ─────────────────────────────────────────────────────────────────────────

    fn resolve_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Block(statements) => {
                self.begin_scope();
                self.resolve_stmts(statements);
                self.end_scope();
            }

            Stmt::Var { name, initializer } => {
                // declare → resolve initializer → define
                self.declare(name);
                if let Some(expr) = initializer {
                    self.resolve_expr(expr);
                }
                self.define(name);
            }

            Stmt::Function(declaration) => {
                // The name is bound before the body so the function can recurse.
                self.declare(&declaration.name);
                self.define(&declaration.name);
                self.resolve_function(declaration, FunctionType::Function);
            }

            Stmt::Expression(expr) | Stmt::Print(expr) => {
                self.resolve_expr(expr);
            }

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.resolve_expr(condition);
                self.resolve_stmt(then_branch);
                if let Some(eb) = else_branch.as_deref() {
                    self.resolve_stmt(eb);
                }
            }

            Stmt::While { condition, body } => {
                self.resolve_expr(condition);
                self.resolve_stmt(body);
            }

            Stmt::Return { keyword, value } => {
                if self.current_function == FunctionType::None {
                    self.error(keyword, "Can't return from top-level code.");
                }
                if let Some(expr) = value {
                    self.resolve_expr(expr);
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Expression resolution
    // ─────────────────────────────────────────────────────────────────────────

    fn resolve_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Literal(_) => {}

            Expr::Grouping(inner) => self.resolve_expr(inner),

            Expr::Unary { right, .. } => self.resolve_expr(right),

            Expr::Binary { left, right, .. } | Expr::Logical { left, right, .. } => {
                self.resolve_expr(left);
                self.resolve_expr(right);
            }

            Expr::Variable { id, name } => {
                let in_own_initializer: bool = self
                    .scopes
                    .last()
                    .is_some_and(|scope| scope.get(&name.lexeme) == Some(&false));

                if in_own_initializer {
                    self.error(name, "Can't read local variable in its own initializer.");
                }

                self.resolve_local(*id, name);
            }

            Expr::Assign { id, name, value } => {
                self.resolve_expr(value);
                self.resolve_local(*id, name);
            }

            Expr::Call {
                callee, arguments, ..
            } => {
                self.resolve_expr(callee);
                for arg in arguments {
                    self.resolve_expr(arg);
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Function helper
    // ─────────────────────────────────────────────────────────────────────────

    /// Enter a fresh scope for a function's parameters + body.
    fn resolve_function(&mut self, declaration: &FunctionDecl, kind: FunctionType) {
        let enclosing = self.current_function;
        self.current_function = kind;

        self.begin_scope();
        for param in &declaration.params {
            self.declare(param);
            self.define(param);
        }
        self.resolve_stmts(&declaration.body);
        self.end_scope();

        self.current_function = enclosing;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scope management
    // ─────────────────────────────────────────────────────────────────────────

    #[inline]
    fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    #[inline]
    fn end_scope(&mut self) {
        self.scopes.pop();
    }

    /// Globals are never tracked, so redeclaring one is allowed.  A local
    /// redeclaration is reported and still marks the name as not yet defined.
    fn declare(&mut self, name: &Token) {
        let Some(scope) = self.scopes.last_mut() else {
            return;
        };

        let redeclared: bool = scope.insert(name.lexeme.clone(), false).is_some();

        if redeclared {
            self.error(name, "Already a variable with this name in this scope.");
        }
    }

    fn define(&mut self, name: &Token) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.lexeme.clone(), true);
        }
    }

    fn error(&mut self, token: &Token, message: &str) {
        self.diagnostics.report(LoxError::resolve(token, message));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Binding‑distance helper
    // ─────────────────────────────────────────────────────────────────────────

    /// Record this variable occurrence as a local at depth `d`, or leave it
    /// unrecorded (global) if not found in *any* scope.
    fn resolve_local(&mut self, id: ExprId, name: &Token) {
        // innermost → outermost
        for (depth, scope) in self.scopes.iter().rev().enumerate() {
            if scope.contains_key(&name.lexeme) {
                debug!("Resolved '{}' at depth {}", name.lexeme, depth);
                self.interpreter.resolve(id, depth);
                return;
            }
        }

        debug!("Resolved '{}' as global", name.lexeme);
    }
}
