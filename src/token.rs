use log::trace;
use serde::Serialize;
use std::fmt;
use std::mem;

use crate::expr::LiteralValue;

/// The different kinds of tokens recognized by the Lox scanner.
///
/// Variants without data represent single‑character or keyword tokens.
/// `STRING(String)` and `NUMBER(f64)` carry their literal values.
/// `IDENTIFIER` is used for user‑defined names.
/// `EOF` marks the end of input.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Serialize)]
pub enum TokenType {
    /// '('
    LEFT_PAREN,

    /// ')'
    RIGHT_PAREN,

    /// '{'
    LEFT_BRACE,

    /// '}'
    RIGHT_BRACE,

    /// ','
    COMMA,

    /// '.'
    DOT,

    /// '-'
    MINUS,

    /// '+'
    PLUS,

    /// ';'
    SEMICOLON,

    /// '/'
    SLASH,

    /// '*'
    STAR,

    /// '!'
    BANG,

    /// '!='
    BANG_EQUAL,

    /// '='
    EQUAL,

    /// '=='
    EQUAL_EQUAL,

    /// '>'
    GREATER,

    /// '>='
    GREATER_EQUAL,

    /// '<'
    LESS,

    /// '<='
    LESS_EQUAL,

    /// A user‑defined identifier
    IDENTIFIER,

    /// A string literal (contents without quotes)
    STRING(String),

    /// A numeric literal
    NUMBER(f64),

    /// 'and'
    AND,

    /// 'class'
    CLASS,

    /// 'else'
    ELSE,

    /// 'false'
    FALSE,

    /// 'fun'
    FUN,

    /// 'for'
    FOR,

    /// 'if'
    IF,

    /// 'nil'
    NIL,

    /// 'or'
    OR,

    /// 'print'
    PRINT,

    /// 'return'
    RETURN,

    /// 'super'
    SUPER,

    /// 'this'
    THIS,

    /// 'true'
    TRUE,

    /// 'var'
    VAR,

    /// 'while'
    WHILE,

    /// End‑of‑file marker
    EOF,
}

impl PartialEq for TokenType {
    /// Two TokenTypes are equal if they share the same variant
    /// (ignoring any inner data). Uses `mem::discriminant` to compare.
    fn eq(&self, other: &Self) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}

impl TokenType {
    /// Variant name without payload, as printed by `tokenize`.
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::STRING(_) => "STRING",
            TokenType::NUMBER(_) => "NUMBER",
            TokenType::LEFT_PAREN => "LEFT_PAREN",
            TokenType::RIGHT_PAREN => "RIGHT_PAREN",
            TokenType::LEFT_BRACE => "LEFT_BRACE",
            TokenType::RIGHT_BRACE => "RIGHT_BRACE",
            TokenType::COMMA => "COMMA",
            TokenType::DOT => "DOT",
            TokenType::MINUS => "MINUS",
            TokenType::PLUS => "PLUS",
            TokenType::SEMICOLON => "SEMICOLON",
            TokenType::SLASH => "SLASH",
            TokenType::STAR => "STAR",
            TokenType::BANG => "BANG",
            TokenType::BANG_EQUAL => "BANG_EQUAL",
            TokenType::EQUAL => "EQUAL",
            TokenType::EQUAL_EQUAL => "EQUAL_EQUAL",
            TokenType::GREATER => "GREATER",
            TokenType::GREATER_EQUAL => "GREATER_EQUAL",
            TokenType::LESS => "LESS",
            TokenType::LESS_EQUAL => "LESS_EQUAL",
            TokenType::IDENTIFIER => "IDENTIFIER",
            TokenType::AND => "AND",
            TokenType::CLASS => "CLASS",
            TokenType::ELSE => "ELSE",
            TokenType::FALSE => "FALSE",
            TokenType::FUN => "FUN",
            TokenType::FOR => "FOR",
            TokenType::IF => "IF",
            TokenType::NIL => "NIL",
            TokenType::OR => "OR",
            TokenType::PRINT => "PRINT",
            TokenType::RETURN => "RETURN",
            TokenType::SUPER => "SUPER",
            TokenType::THIS => "THIS",
            TokenType::TRUE => "TRUE",
            TokenType::VAR => "VAR",
            TokenType::WHILE => "WHILE",
            TokenType::EOF => "EOF",
        }
    }
}

/// A scanned token, including its type, the original lexeme,
/// and the line number where it was found.
///
/// The lexeme is owned so that statements (and the closures built from
/// them) can outlive the source buffer they were scanned from.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Token {
    /// The category of this token.
    pub token_type: TokenType,

    /// The exact substring from the source that produced this token.
    pub lexeme: String,

    /// 1‑based line number in the source.
    pub line: usize,
}

impl Token {
    /// Create a new Token with the given type, lexeme, and line.
    pub fn new<S: Into<String>>(token_type: TokenType, lexeme: S, line: usize) -> Self {
        let lexeme: String = lexeme.into();

        trace!(
            "Creating new token: type={:?}, lexeme={}, line={}",
            token_type,
            lexeme,
            line
        );

        Self {
            token_type,
            lexeme,
            line,
        }
    }

    /// The scalar literal carried by string and number tokens.
    pub fn literal(&self) -> Option<LiteralValue> {
        match &self.token_type {
            TokenType::STRING(s) => Some(LiteralValue::Str(s.clone())),
            TokenType::NUMBER(n) => Some(LiteralValue::Number(*n)),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.token_type.name(), self.lexeme)?;

        match &self.token_type {
            TokenType::STRING(s) => write!(f, "{}", s),
            TokenType::NUMBER(n) => {
                // 3 → "3.0", 3.14 → "3.14"
                if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    let mut buf: itoa::Buffer = itoa::Buffer::new();
                    write!(f, "{}.0", buf.format(*n as i64))
                } else {
                    write!(f, "{}", n)
                }
            }
            _ => write!(f, "null"),
        }
    }
}
