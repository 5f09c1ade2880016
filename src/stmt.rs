use std::rc::Rc;

use crate::expr::Expr;
use crate::token::Token;

/// A `fun` declaration.  Shared between the AST and every function value
/// created from it.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: Token,

    /// Parameter name tokens (arity ≤ 255).
    pub params: Vec<Token>,

    pub body: Vec<Stmt>,
}

/// **Abstract‑Syntax‑Tree node** for *statements*.  A program is a sequence
/// of these nodes returned by [`Parser::parse`](crate::parser::Parser::parse).
///
/// There is no `for` node: the parser lowers `for` loops into `Block`s and
/// `While`s.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Stand‑alone expression terminated by a semicolon.
    Expression(Expr),

    Print(Expr),

    /// Variable declaration: `"var" IDENT ("=" initializer)? ";"`.
    Var {
        name: Token,
        initializer: Option<Expr>,
    },

    /// Braced scope containing zero or more declarations/statements.
    Block(Vec<Stmt>),

    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },

    While {
        condition: Expr,
        body: Box<Stmt>,
    },

    Function(Rc<FunctionDecl>),

    /// `return` statement inside a function body.
    Return {
        /// The `return` keyword token (for error locations).
        keyword: Token,

        /// Absent ⇒ `nil` is returned.
        value: Option<Expr>,
    },
}
