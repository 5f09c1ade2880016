use crate::token::Token;

/// Stable identity of a resolvable expression node.
///
/// The parser stamps every `Variable` and `Assign` node with a fresh id; the
/// resolver keys its scope distances by it.  Two textually identical
/// references in different places get different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExprId(pub usize);

/// A **literal constant** that appears directly in the source code.
///
/// The parser copies the value out of the token at parse‑time.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// Numeric literal ‑ stored as IEEE‑754 `f64`.
    /// Integral lexemes such as `"3"` are still parsed as `3.0`.
    Number(f64),

    /// String literal without surrounding quotes.
    Str(String),

    True,

    False,

    Nil,
}

/// **Abstract‑Syntax‑Tree node** representing every kind of *expression*.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralValue),

    /// Prefix unary operator expression
    /// *Example:* `!isReady` or `-42`
    Unary {
        /// The operator token (`!` or `-`).
        operator: Token,
        right: Box<Expr>,
    },

    /// Infix binary operator expression
    /// *Example:* `a + b`, `x <= y`
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },

    /// Parenthesised sub‑expression: `"(" expression ")"`.
    Grouping(Box<Expr>),

    /// Variable access.
    Variable { id: ExprId, name: Token },

    /// Assignment expression: `identifier "=" expression`
    Assign {
        id: ExprId,
        name: Token,
        value: Box<Expr>,
    },

    /// Short‑circuiting logical operators `and` / `or`.
    Logical {
        left: Box<Expr>,
        operator: Token, // `AND` or `OR`
        right: Box<Expr>,
    },

    /// Function call expression
    /// *Example:* `clock()` or `add(1, 2)`
    Call {
        callee: Box<Expr>,
        /// The closing `)` token ‑ retained for error reporting.
        paren: Token,
        arguments: Vec<Expr>,
    },
}
