//! Module `scanner` implements a one‑pass, streaming lexer for the Lox language.
//!
//! It transforms a source string into a sequence of [`Token`]s, skipping
//! whitespace and comments, and emitting exactly one `EOF` token at the end.
//! Designed as a `FusedIterator`, it can be chained safely with other
//! iterator adapters.
//!
//! # Public API
//!
//! - `Scanner::new(src: &str) -> Scanner<'_>`
//!   Create a new lexer over the input text.
//!
//! - `impl Iterator for Scanner<'a>`
//!   Yields `Result<Token, LoxError>` on each `.next()`, where `Ok(token)` is a
//!   scanned token and `Err` reports a lexing error with line information.
//!   A malformed lexeme produces an `Err` *instead of* a token; scanning then
//!   resumes with the following character.
//!
//! - `scan_tokens(src, &mut Diagnostics) -> Vec<Token>`
//!   Drain a scanner, routing every error to the collector.
//!
//! # Token Recognition
//!
//! - Single‑character tokens: `(`, `)`, `{`, `}`, `,`, `.`, `-`, `+`, `;`, `*`.
//! - Two‑character operators: `!=`, `==`, `<=`, `>=`.
//! - String literals: `"` … `"`, allowing multi‑line and reporting unterminated errors.
//! - Numeric literals: integer and optional fractional part.  A trailing `.`
//!   with no digit after it is left for the next token.
//! - Identifiers/keywords: a letter or `_` followed by letters, digits or `_`
//!   (Unicode letters included), resolved via a perfect‑hash `KEYWORDS` map.
//! - Errors: any unexpected character yields `LoxError::lex(line, "Unexpected character.")`.
//!
//! Comment skipping jumps straight to the next newline with `memchr`.
//!
//! # Example
//!
//! ```rust
//! use rox::scanner::Scanner;
//!
//! let mut scanner = Scanner::new("print 123; // example");
//! for result in &mut scanner {
//!     match result {
//!         Ok(token) => println!("{}", token),
//!         Err(err) => eprintln!("{}", err),
//!     }
//! }
//! ```

use crate::error::{Diagnostics, LoxError, Result};
use crate::token::{Token, TokenType};
use log::{debug, info, trace};
use memchr::memchr;
use phf::phf_map;
use std::iter::FusedIterator;

// ─────────────────────────────────────────────────────────────────────────────
// Static keyword map (compile‑time perfect hash)
// ─────────────────────────────────────────────────────────────────────────────

static KEYWORDS: phf::Map<&'static [u8], TokenType> = phf_map! {
    b"and"    => TokenType::AND,
    b"class"  => TokenType::CLASS,
    b"else"   => TokenType::ELSE,
    b"false"  => TokenType::FALSE,
    b"fun"    => TokenType::FUN,
    b"for"    => TokenType::FOR,
    b"if"     => TokenType::IF,
    b"nil"    => TokenType::NIL,
    b"or"     => TokenType::OR,
    b"print"  => TokenType::PRINT,
    b"return" => TokenType::RETURN,
    b"super"  => TokenType::SUPER,
    b"this"   => TokenType::THIS,
    b"true"   => TokenType::TRUE,
    b"var"    => TokenType::VAR,
    b"while"  => TokenType::WHILE,
};

/// A single pass **scanner / lexer** that converts source text into a
/// sequence of [`Token`]s.
pub struct Scanner<'a> {
    text: &'a str,              // entire source text
    src: &'a [u8],              // byte view of `text`
    start: usize,               // index of the *first* byte of the current lexeme
    curr: usize,                // index *one past* the last byte examined
    line: usize,                // 1‑based line counter (\n increments)
    pending: Option<TokenType>, // recognised token kind waiting to be emitted
}

impl<'a> Scanner<'a> {
    /// Create a new lexer over `text`.
    #[inline]
    pub fn new(text: &'a str) -> Self {
        info!("Scanner created over {} bytes", text.len());

        Self {
            text,
            src: text.as_bytes(),
            start: 0,
            curr: 0,
            line: 1,
            pending: None,
        }
    }

    // ───────────────────────────── primitive helpers ────────────────────────

    /// Return the length of the input slice.
    #[inline(always)]
    const fn len(&self) -> usize {
        self.src.len()
    }

    /// Are we at (or past) the end of input?
    #[inline(always)]
    fn is_at_end(&self) -> bool {
        self.curr >= self.len()
    }

    /// Advance one byte and return it.  Callers guard with [`is_at_end`].
    #[inline(always)]
    fn advance(&mut self) -> u8 {
        let b = self.src[self.curr];
        self.curr += 1;
        b
    }

    /// Peek at the current byte without consuming it.  Returns `0` if past EOF
    /// to avoid branching at call‑site.
    #[inline(always)]
    fn peek(&self) -> u8 {
        if self.is_at_end() {
            0
        } else {
            self.src[self.curr]
        }
    }

    /// Peek one byte beyond [`peek`].  Safe at EOF.
    #[inline(always)]
    fn peek_next(&self) -> u8 {
        if self.curr + 1 >= self.len() {
            0
        } else {
            self.src[self.curr + 1]
        }
    }

    /// Conditionally consume a byte **iff** it matches `expected`.
    #[inline(always)]
    fn match_byte(&mut self, expected: u8) -> bool {
        if !self.is_at_end() && self.peek() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Pick between a two‑character operator and its one‑character prefix.
    #[inline(always)]
    fn either(&mut self, second: u8, long: TokenType, short: TokenType) -> TokenType {
        if self.match_byte(second) {
            long
        } else {
            short
        }
    }

    /// The character starting at byte `at`, if `at` is a char boundary.
    #[inline(always)]
    fn char_at(&self, at: usize) -> Option<char> {
        self.text.get(at..).and_then(|rest| rest.chars().next())
    }

    /// The source text of the lexeme currently being scanned.
    #[inline(always)]
    fn lexeme(&self) -> &'a str {
        &self.text[self.start..self.curr]
    }

    // ───────────────────────────── core lexing ─────────────────────────────

    /// Scan a *single* token starting at `self.curr`.  If the lexeme produces an
    /// actual token the kind is stored in `self.pending`.  Whitespace and
    /// comments are skipped by returning `Ok(())` with `pending = None`.
    fn scan_token(&mut self) -> Result<()> {
        let b = self.advance();

        let tt = match b {
            // ── single‑character punctuators ──────────────────────────────
            b'(' => TokenType::LEFT_PAREN,
            b')' => TokenType::RIGHT_PAREN,
            b'{' => TokenType::LEFT_BRACE,
            b'}' => TokenType::RIGHT_BRACE,
            b',' => TokenType::COMMA,
            b'.' => TokenType::DOT,
            b'-' => TokenType::MINUS,
            b'+' => TokenType::PLUS,
            b';' => TokenType::SEMICOLON,
            b'*' => TokenType::STAR,

            // ── two‑character operators (!=, ==, <=, >=) ─────────────────
            b'!' => self.either(b'=', TokenType::BANG_EQUAL, TokenType::BANG),
            b'=' => self.either(b'=', TokenType::EQUAL_EQUAL, TokenType::EQUAL),
            b'<' => self.either(b'=', TokenType::LESS_EQUAL, TokenType::LESS),
            b'>' => self.either(b'=', TokenType::GREATER_EQUAL, TokenType::GREATER),

            // ── whitespace / newline ─────────────────────────────────────
            b' ' | b'\r' | b'\t' => return Ok(()),

            b'\n' => {
                self.line += 1;

                return Ok(());
            }

            // ── comments (// … until newline) ────────────────────────────
            b'/' => {
                if self.match_byte(b'/') {
                    // Leave the newline itself for the main loop so the line
                    // counter stays correct.
                    match memchr(b'\n', &self.src[self.curr..]) {
                        Some(pos) => self.curr += pos,
                        None => self.curr = self.len(),
                    }

                    return Ok(());
                }

                TokenType::SLASH
            }

            b'"' => return self.parse_string(),

            b'0'..=b'9' => self.parse_number(),

            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.parse_identifier(),

            // ── non‑ASCII letters, or an unexpected character ────────────
            _ => {
                // Consume the whole character so one character yields at most
                // one error.
                let ch: Option<char> = self.char_at(self.start);
                if let Some(c) = ch {
                    self.curr = self.start + c.len_utf8();
                }

                if ch.is_some_and(char::is_alphabetic) {
                    self.parse_identifier()
                } else {
                    debug!("Unexpected character {:?} on line {}", self.lexeme(), self.line);

                    return Err(LoxError::lex(self.line, "Unexpected character."));
                }
            }
        };

        self.pending = Some(tt);

        Ok(())
    }

    /// Parse a double‑quoted string literal.
    ///
    /// * `self.start` still points to the opening `"`.
    /// * When we return, `self.curr` points **past** the closing `"`.
    fn parse_string(&mut self) -> Result<()> {
        while !self.is_at_end() && self.peek() != b'"' {
            if self.advance() == b'\n' {
                self.line += 1;
            }
        }

        if self.is_at_end() {
            return Err(LoxError::lex(self.line, "Unterminated string."));
        }

        self.advance(); // closing quote

        // Contents between the quotes, no escape processing.
        let s: &str = &self.text[self.start + 1..self.curr - 1];

        self.pending = Some(TokenType::STRING(s.to_owned()));

        Ok(())
    }

    /// Parse a numeric literal (`123`, `3.14`).  Fractions are optional.
    fn parse_number(&mut self) -> TokenType {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == b'.' && self.peek_next().is_ascii_digit() {
            self.advance(); // "."

            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        // Only ASCII digits and at most one interior '.' were consumed.
        let n: f64 = self.lexeme().parse::<f64>().unwrap_or(0.0);

        TokenType::NUMBER(n)
    }

    /// Parse an identifier and decide if it is a **keyword** or a generic
    /// `IDENTIFIER` token.
    fn parse_identifier(&mut self) -> TokenType {
        while let Some(c) = self
            .char_at(self.curr)
            .filter(|&c| c.is_alphanumeric() || c == '_')
        {
            self.curr += c.len_utf8();
        }

        KEYWORDS
            .get(self.lexeme().as_bytes())
            .cloned()
            .unwrap_or(TokenType::IDENTIFIER)
    }
}

// ───────────────────────── Iterator implementation ─────────────────────────

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        // Loop until we either emit a token, hit EOF, or see an error.
        while self.curr <= self.len() {
            // 1. EOF guard – emit exactly one EOF then terminate.
            if self.curr == self.len() {
                self.curr += 1; // fused from here on
                return Some(Ok(Token::new(TokenType::EOF, "", self.line)));
            }

            // 2. Reset per‑token state.
            self.start = self.curr;
            self.pending = None;

            // 3. Attempt to scan a token.
            if let Err(e) = self.scan_token() {
                return Some(Err(e));
            }

            // 4. If a real token was recognised, build and return it.
            if let Some(tt) = self.pending.take() {
                trace!("Scanned token ({:?}) on line {}", tt, self.line);

                return Some(Ok(Token::new(tt, self.lexeme(), self.line)));
            }
            // Otherwise it was whitespace / comment → continue loop.
        }

        None // already yielded EOF
    }
}

impl<'a> FusedIterator for Scanner<'a> {}

/// Scan all of `source`, reporting every lexical error to `diagnostics`.
///
/// The returned vector always ends with the `EOF` token.
pub fn scan_tokens(source: &str, diagnostics: &mut Diagnostics) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();

    for result in Scanner::new(source) {
        match result {
            Ok(token) => tokens.push(token),
            Err(e) => diagnostics.report(e),
        }
    }

    info!("Scanned {} tokens", tokens.len());

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<&'static str> {
        Scanner::new(source)
            .filter_map(Result::ok)
            .map(|t| t.token_type.name())
            .collect()
    }

    #[test]
    fn comment_runs_to_end_of_line() {
        assert_eq!(kinds("1 // two\n3"), vec!["NUMBER", "NUMBER", "EOF"]);
    }

    #[test]
    fn comment_at_end_of_input() {
        assert_eq!(kinds("/ // trailing"), vec!["SLASH", "EOF"]);
    }

    #[test]
    fn newline_after_comment_is_counted() {
        let tokens: Vec<Token> = Scanner::new("// a\n// b\nx")
            .filter_map(Result::ok)
            .collect();

        assert_eq!(tokens[0].lexeme, "x");
        assert_eq!(tokens[0].line, 3);
    }

    #[test]
    fn multi_byte_character_reports_once() {
        let results: Vec<Result<Token>> = Scanner::new("€;").collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_err());
        assert_eq!(
            results[1].as_ref().map(|t| t.lexeme.as_str()).ok(),
            Some(";")
        );
    }

    #[test]
    fn identifiers_may_use_unicode_letters() {
        let tokens: Vec<Token> = Scanner::new("var café_2 = ñ;")
            .filter_map(Result::ok)
            .collect();

        assert_eq!(tokens[1].token_type, TokenType::IDENTIFIER);
        assert_eq!(tokens[1].lexeme, "café_2");
        assert_eq!(tokens[3].lexeme, "ñ");
        assert_eq!(tokens[4].token_type, TokenType::SEMICOLON);
    }

    #[test]
    fn string_may_hold_utf8() {
        let tokens: Vec<Token> = Scanner::new("\"héllo\"").filter_map(Result::ok).collect();

        assert_eq!(tokens[0].token_type, TokenType::STRING(String::new()));
        assert_eq!(tokens[0].literal(), Some(crate::expr::LiteralValue::Str("héllo".into())));
    }

    #[test]
    fn scanner_is_fused() {
        let mut scanner = Scanner::new("");

        assert!(matches!(scanner.next(), Some(Ok(_))));
        assert!(scanner.next().is_none());
        assert!(scanner.next().is_none());
    }

    #[test]
    fn scan_tokens_collects_every_error() {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan_tokens("@ 1 #", &mut diagnostics);

        assert_eq!(tokens.len(), 2);
        assert_eq!(diagnostics.errors().len(), 2);
        assert!(diagnostics.had_error());
        assert_eq!(
            diagnostics.errors()[0].to_string(),
            "[line 1] Error: Unexpected character."
        );
    }
}
