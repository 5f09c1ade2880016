/*!
Recursive‑descent parser for Lox.

### Cost

Each token is consumed once via `advance()`; error recovery
(`synchronize()`) only ever moves forward, so a parse is **Θ(n)** in the
number of tokens.  Call‑stack depth grows with syntactic nesting.

### Error policy

* Errors that leave the grammar in an unknown state (a missing `;`, an
  unexpected token in `primary`) are returned as `Err` and caught at the
  nearest `declaration`, which records them and calls `synchronize()`.
  That bounds the damage to one error per broken statement.
* Errors that do not confuse the parser (an invalid assignment target, too
  many arguments or parameters) are recorded and parsing carries on in place.

Nothing escapes [`Parser::parse`]: every error ends up in the caller's
[`Diagnostics`].

### Logging Policy

| Location                     | Level  | Purpose                                   |
|------------------------------|--------|-------------------------------------------|
| `Parser::new`, `parse`       | `info` | Lifecycle milestones.                     |
| `declaration`, `statement`   | `debug`| High‑level descent into grammar branches. |
| Error paths                  | `debug`| Context before recording the error.       |

--------------------------------------------------------------------------------
Grammar (EBNF)
--------------

```text
program        → declaration* EOF ;
declaration    → funDecl | varDecl | statement ;
funDecl        → "fun" IDENT "(" parameters? ")" block ;
varDecl        → "var" IDENT ( "=" expression )? ";" ;
statement      → exprStmt | forStmt | ifStmt | printStmt
               | returnStmt | whileStmt | block ;
exprStmt       → expression ";" ;
forStmt        → "for" "(" ( varDecl | exprStmt | ";" )
                 expression? ";" expression? ")" statement ;
ifStmt         → "if" "(" expression ")" statement
               ( "else" statement )? ;
printStmt      → "print" expression ";" ;
returnStmt     → "return" expression? ";" ;
whileStmt      → "while" "(" expression ")" statement ;
block          → "{" declaration* "}" ;
parameters     → IDENT ( "," IDENT )* ;
expression     → assignment ;
assignment     → IDENT "=" assignment | logic_or ;
logic_or       → logic_and ( "or" logic_and )* ;
logic_and      → equality  ( "and" equality )* ;
equality       → comparison ( ( "!=" | "==" ) comparison )* ;
comparison     → term ( ( ">" | ">=" | "<" | "<=" ) term )* ;
term           → factor ( ( "-" | "+" ) factor )* ;
factor         → unary ( ( "/" | "*" ) unary )* ;
unary          → ( "!" | "-" ) unary | call ;
call           → primary ( "(" arguments? ")" )* ;
arguments      → expression ( "," expression )* ;
primary        → NUMBER | STRING | "true" | "false" | "nil"
               | IDENT | "(" expression ")" ;
```
*/

use std::rc::Rc;

use crate::error::{Diagnostics, LoxError, Result};
use crate::expr::{Expr, ExprId, LiteralValue};
use crate::stmt::{FunctionDecl, Stmt};
use crate::token::{Token, TokenType};

use log::{debug, info};

/// Upper bound on call arguments and function parameters.
pub const MAX_ARITY: usize = 255;

/// Top‑level parser over a scanned token list.
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    next_id: usize,
    errors: Vec<LoxError>,
}

impl Parser {
    /// Construct a new parser.  A missing trailing `EOF` is supplied.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::starting_at(tokens, ExprId(0))
    }

    /// Construct a parser whose first expression id is `first`.  Used when
    /// several parses feed the same interpreter.
    pub fn starting_at(mut tokens: Vec<Token>, first: ExprId) -> Self {
        info!("Parser created with {} tokens", tokens.len());

        if tokens.last().map(|t| &t.token_type) != Some(&TokenType::EOF) {
            let line: usize = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::new(TokenType::EOF, "", line));
        }

        Self {
            tokens,
            current: 0,
            next_id: first.0,
            errors: Vec::new(),
        }
    }

    /// The id the next resolvable expression would receive.
    pub fn next_expr_id(&self) -> ExprId {
        ExprId(self.next_id)
    }

    // ───────────────────────── public API ─────────────────────────

    /// Parse an entire program and return its statement list.
    ///
    /// Statements that failed to parse are left out; the errors go to
    /// `diagnostics` in source order.
    pub fn parse(&mut self, diagnostics: &mut Diagnostics) -> Vec<Stmt> {
        info!("Beginning parse phase");

        let mut statements: Vec<Stmt> = Vec::new();

        while !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }

        info!(
            "Parsed {} statement(s) with {} error(s)",
            statements.len(),
            self.errors.len()
        );

        diagnostics.extend(self.errors.drain(..));

        statements
    }

    // ──────────────────────── declaration rules ───────────────────

    fn declaration(&mut self) -> Option<Stmt> {
        debug!("Entering declaration at line {}", self.peek().line);

        let result = if self.matches(TokenType::FUN) {
            self.function("function")
        } else if self.matches(TokenType::VAR) {
            self.var_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(stmt) => Some(stmt),
            Err(e) => {
                debug!("Parse error, synchronizing: {}", e);
                self.errors.push(e);
                self.synchronize();
                None
            }
        }
    }

    fn function(&mut self, kind: &str) -> Result<Stmt> {
        let name: Token = self
            .consume(TokenType::IDENTIFIER, &format!("Expect {} name.", kind))?
            .clone();

        self.consume(
            TokenType::LEFT_PAREN,
            &format!("Expect '(' after {} name.", kind),
        )?;

        let mut params: Vec<Token> = Vec::new();

        if !self.check(TokenType::RIGHT_PAREN) {
            loop {
                if params.len() >= MAX_ARITY {
                    self.error_at_peek("Can't have more than 255 parameters.");
                }

                params.push(
                    self.consume(TokenType::IDENTIFIER, "Expect parameter name.")?
                        .clone(),
                );

                if !self.matches(TokenType::COMMA) {
                    break;
                }
            }
        }

        self.consume(TokenType::RIGHT_PAREN, "Expect ')' after parameters.")?;

        self.consume(
            TokenType::LEFT_BRACE,
            &format!("Expect '{{' before {} body.", kind),
        )?;

        let body: Vec<Stmt> = self.block()?;

        Ok(Stmt::Function(Rc::new(FunctionDecl { name, params, body })))
    }

    fn var_declaration(&mut self) -> Result<Stmt> {
        let name: Token = self
            .consume(TokenType::IDENTIFIER, "Expect variable name.")?
            .clone();

        let initializer: Option<Expr> = if self.matches(TokenType::EQUAL) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(
            TokenType::SEMICOLON,
            "Expect ';' after variable declaration.",
        )?;

        Ok(Stmt::Var { name, initializer })
    }

    // ───────────────────────── statement rules ────────────────────

    fn statement(&mut self) -> Result<Stmt> {
        debug!("Entering statement at line {}", self.peek().line);

        if self.matches(TokenType::FOR) {
            self.for_statement()
        } else if self.matches(TokenType::IF) {
            self.if_statement()
        } else if self.matches(TokenType::PRINT) {
            self.print_statement()
        } else if self.matches(TokenType::RETURN) {
            self.return_statement()
        } else if self.matches(TokenType::WHILE) {
            self.while_statement()
        } else if self.matches(TokenType::LEFT_BRACE) {
            Ok(Stmt::Block(self.block()?))
        } else {
            self.expression_statement()
        }
    }

    /// `for` has no runtime node of its own: it is rewritten into
    ///
    /// ```text
    /// { initializer; while (condition) { body; increment; } }
    /// ```
    fn for_statement(&mut self) -> Result<Stmt> {
        self.consume(TokenType::LEFT_PAREN, "Expect '(' after 'for'.")?;

        let initializer: Option<Stmt> = if self.matches(TokenType::SEMICOLON) {
            None
        } else if self.matches(TokenType::VAR) {
            Some(self.var_declaration()?)
        } else {
            Some(self.expression_statement()?)
        };

        let condition: Option<Expr> = if !self.check(TokenType::SEMICOLON) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(TokenType::SEMICOLON, "Expect ';' after loop condition.")?;

        let increment: Option<Expr> = if !self.check(TokenType::RIGHT_PAREN) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(TokenType::RIGHT_PAREN, "Expect ')' after for clauses.")?;

        let mut body: Stmt = self.statement()?;

        if let Some(increment) = increment {
            body = Stmt::Block(vec![body, Stmt::Expression(increment)]);
        }

        body = Stmt::While {
            condition: condition.unwrap_or(Expr::Literal(LiteralValue::True)),
            body: Box::new(body),
        };

        if let Some(initializer) = initializer {
            body = Stmt::Block(vec![initializer, body]);
        }

        debug!("Desugared for loop");

        Ok(body)
    }

    fn if_statement(&mut self) -> Result<Stmt> {
        self.consume(TokenType::LEFT_PAREN, "Expect '(' after 'if'.")?;
        let condition: Expr = self.expression()?;
        self.consume(TokenType::RIGHT_PAREN, "Expect ')' after if condition.")?;

        let then_branch: Box<Stmt> = Box::new(self.statement()?);
        let else_branch: Option<Box<Stmt>> = if self.matches(TokenType::ELSE) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn print_statement(&mut self) -> Result<Stmt> {
        let value: Expr = self.expression()?;

        self.consume(TokenType::SEMICOLON, "Expect ';' after value.")?;

        Ok(Stmt::Print(value))
    }

    fn return_statement(&mut self) -> Result<Stmt> {
        let keyword: Token = self.previous().clone();
        let value: Option<Expr> = if !self.check(TokenType::SEMICOLON) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(TokenType::SEMICOLON, "Expect ';' after return value.")?;

        Ok(Stmt::Return { keyword, value })
    }

    fn while_statement(&mut self) -> Result<Stmt> {
        self.consume(TokenType::LEFT_PAREN, "Expect '(' after 'while'.")?;
        let condition: Expr = self.expression()?;
        self.consume(TokenType::RIGHT_PAREN, "Expect ')' after condition.")?;
        let body: Box<Stmt> = Box::new(self.statement()?);

        Ok(Stmt::While { condition, body })
    }

    fn expression_statement(&mut self) -> Result<Stmt> {
        let expr: Expr = self.expression()?;

        self.consume(TokenType::SEMICOLON, "Expect ';' after expression.")?;

        Ok(Stmt::Expression(expr))
    }

    fn block(&mut self) -> Result<Vec<Stmt>> {
        let mut statements: Vec<Stmt> = Vec::new();

        while !self.check(TokenType::RIGHT_BRACE) && !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }

        self.consume(TokenType::RIGHT_BRACE, "Expect '}' after block.")?;

        Ok(statements)
    }

    // ─────────────────────── expression rules ─────────────────────

    fn expression(&mut self) -> Result<Expr> {
        self.assignment()
    }

    fn assignment(&mut self) -> Result<Expr> {
        let expr: Expr = self.logical_or()?;

        if self.matches(TokenType::EQUAL) {
            let equals: Token = self.previous().clone();
            let value: Expr = self.assignment()?;

            if let Expr::Variable { name, .. } = expr {
                return Ok(Expr::Assign {
                    id: self.fresh_id(),
                    name,
                    value: Box::new(value),
                });
            }

            // The parser is not confused; report and keep the left side.
            debug!("Invalid assignment target on line {}", equals.line);
            self.errors
                .push(LoxError::parse(&equals, "Invalid assignment target."));
        }

        Ok(expr)
    }

    fn logical_or(&mut self) -> Result<Expr> {
        let mut expr: Expr = self.logical_and()?;

        while self.matches(TokenType::OR) {
            let operator: Token = self.previous().clone();
            let right: Expr = self.logical_and()?;

            expr = Expr::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn logical_and(&mut self) -> Result<Expr> {
        let mut expr: Expr = self.equality()?;

        while self.matches(TokenType::AND) {
            let operator: Token = self.previous().clone();
            let right: Expr = self.equality()?;

            expr = Expr::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Shared loop for the left‑associative binary levels.
    fn binary(
        &mut self,
        operators: &[TokenType],
        operand: fn(&mut Self) -> Result<Expr>,
    ) -> Result<Expr> {
        let mut expr: Expr = operand(self)?;

        while operators.iter().any(|tt| self.check(tt.clone())) {
            let operator: Token = self.advance().clone();
            let right: Expr = operand(self)?;

            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr> {
        self.binary(
            &[TokenType::BANG_EQUAL, TokenType::EQUAL_EQUAL],
            Self::comparison,
        )
    }

    fn comparison(&mut self) -> Result<Expr> {
        self.binary(
            &[
                TokenType::GREATER,
                TokenType::GREATER_EQUAL,
                TokenType::LESS,
                TokenType::LESS_EQUAL,
            ],
            Self::term,
        )
    }

    fn term(&mut self) -> Result<Expr> {
        self.binary(&[TokenType::MINUS, TokenType::PLUS], Self::factor)
    }

    fn factor(&mut self) -> Result<Expr> {
        self.binary(&[TokenType::SLASH, TokenType::STAR], Self::unary)
    }

    fn unary(&mut self) -> Result<Expr> {
        if self.matches(TokenType::BANG) || self.matches(TokenType::MINUS) {
            let operator: Token = self.previous().clone();
            let right: Expr = self.unary()?;

            return Ok(Expr::Unary {
                operator,
                right: Box::new(right),
            });
        }

        self.call()
    }

    fn call(&mut self) -> Result<Expr> {
        let mut expr: Expr = self.primary()?;

        while self.matches(TokenType::LEFT_PAREN) {
            expr = self.finish_call(expr)?;
        }

        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr) -> Result<Expr> {
        let mut arguments: Vec<Expr> = Vec::new();

        if !self.check(TokenType::RIGHT_PAREN) {
            loop {
                if arguments.len() >= MAX_ARITY {
                    self.error_at_peek("Can't have more than 255 arguments.");
                }

                arguments.push(self.expression()?);

                if !self.matches(TokenType::COMMA) {
                    break;
                }
            }
        }

        let paren: Token = self
            .consume(TokenType::RIGHT_PAREN, "Expect ')' after arguments.")?
            .clone();

        Ok(Expr::Call {
            callee: Box::new(callee),
            paren,
            arguments,
        })
    }

    fn primary(&mut self) -> Result<Expr> {
        if self.matches(TokenType::FALSE) {
            return Ok(Expr::Literal(LiteralValue::False));
        }
        if self.matches(TokenType::TRUE) {
            return Ok(Expr::Literal(LiteralValue::True));
        }
        if self.matches(TokenType::NIL) {
            return Ok(Expr::Literal(LiteralValue::Nil));
        }

        // NUMBER and STRING carry their value in the token.
        if let Some(literal) = self.peek().literal() {
            self.advance();
            return Ok(Expr::Literal(literal));
        }

        if self.matches(TokenType::IDENTIFIER) {
            let name: Token = self.previous().clone();

            return Ok(Expr::Variable {
                id: self.fresh_id(),
                name,
            });
        }

        if self.matches(TokenType::LEFT_PAREN) {
            let expr: Expr = self.expression()?;

            self.consume(TokenType::RIGHT_PAREN, "Expect ')' after expression.")?;

            return Ok(Expr::Grouping(Box::new(expr)));
        }

        Err(LoxError::parse(self.peek(), "Expect expression."))
    }

    // ────────────────────── utility helpers ───────────────────────

    fn fresh_id(&mut self) -> ExprId {
        let id = ExprId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Record a non‑fatal error at the current token.
    fn error_at_peek(&mut self, message: &str) {
        let error: LoxError = LoxError::parse(self.peek(), message);

        debug!("Recording non-fatal parse error: {}", error);

        self.errors.push(error);
    }

    #[inline(always)]
    fn matches(&mut self, ttype: TokenType) -> bool {
        if self.check(ttype) {
            self.advance();

            return true;
        }

        false
    }

    #[inline(always)]
    fn consume(&mut self, ttype: TokenType, message: &str) -> Result<&Token> {
        if self.check(ttype) {
            return Ok(self.advance());
        }

        debug!("consume failed at '{}': {}", self.peek().lexeme, message);

        Err(LoxError::parse(self.peek(), message))
    }

    #[inline(always)]
    fn check(&self, ttype: TokenType) -> bool {
        if self.is_at_end() {
            return false;
        }

        self.peek().token_type == ttype
    }

    #[inline(always)]
    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }

        self.previous()
    }

    #[inline(always)]
    fn is_at_end(&self) -> bool {
        matches!(self.peek().token_type, TokenType::EOF)
    }

    /// The constructor guarantees a trailing EOF, and `advance` never moves
    /// past it, so `current` is always in bounds.
    #[inline(always)]
    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    #[inline(always)]
    fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    /// Discards tokens until it thinks it is at a statement boundary.
    fn synchronize(&mut self) {
        self.advance(); // skip the token that caused the error

        while !self.is_at_end() {
            if matches!(self.previous().token_type, TokenType::SEMICOLON) {
                return;
            }

            match self.peek().token_type {
                TokenType::CLASS
                | TokenType::FUN
                | TokenType::VAR
                | TokenType::FOR
                | TokenType::IF
                | TokenType::WHILE
                | TokenType::PRINT
                | TokenType::RETURN => return,
                _ => {}
            }

            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::scan_tokens;

    fn parse(source: &str) -> (Vec<Stmt>, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan_tokens(source, &mut diagnostics);
        let statements = Parser::new(tokens).parse(&mut diagnostics);
        (statements, diagnostics)
    }

    fn messages(diagnostics: &Diagnostics) -> Vec<String> {
        diagnostics.errors().iter().map(ToString::to_string).collect()
    }

    #[test]
    fn for_loop_becomes_block_and_while() {
        let (statements, diagnostics) = parse("for (var i = 0; i < 3; i = i + 1) print i;");

        assert!(!diagnostics.had_error());
        assert_eq!(statements.len(), 1);

        let Stmt::Block(outer) = &statements[0] else {
            panic!("expected block, got {:?}", statements[0]);
        };
        assert!(matches!(outer[0], Stmt::Var { .. }));

        let Stmt::While { body, .. } = &outer[1] else {
            panic!("expected while, got {:?}", outer[1]);
        };
        let Stmt::Block(inner) = body.as_ref() else {
            panic!("expected block body, got {:?}", body);
        };
        assert!(matches!(inner[0], Stmt::Print(_)));
        assert!(matches!(inner[1], Stmt::Expression(Expr::Assign { .. })));
    }

    #[test]
    fn empty_for_clauses_loop_on_true() {
        let (statements, diagnostics) = parse("for (;;) print 1;");

        assert!(!diagnostics.had_error());
        assert!(matches!(
            &statements[0],
            Stmt::While {
                condition: Expr::Literal(LiteralValue::True),
                ..
            }
        ));
    }

    #[test]
    fn invalid_assignment_target_keeps_parsing() {
        let (statements, diagnostics) = parse("1 = 2; print 3;");

        assert_eq!(
            messages(&diagnostics),
            vec!["[line 1] Error at '=': Invalid assignment target."]
        );
        assert_eq!(statements.len(), 2);
    }

    #[test]
    fn one_error_per_broken_statement() {
        let (statements, diagnostics) = parse("print 1 +;\nvar = 2;\nprint 3;");

        assert_eq!(
            messages(&diagnostics),
            vec![
                "[line 1] Error at ';': Expect expression.",
                "[line 2] Error at '=': Expect variable name.",
            ]
        );
        assert_eq!(statements.len(), 1);
    }

    #[test]
    fn missing_close_paren_reports_at_end() {
        let (_, diagnostics) = parse("print (1 + 2");

        assert_eq!(
            messages(&diagnostics),
            vec!["[line 1] Error at end: Expect ')' after expression."]
        );
    }

    #[test]
    fn too_many_arguments_is_reported_once() {
        let args: Vec<String> = (0..256).map(|i| i.to_string()).collect();
        let source = format!("f({});", args.join(", "));
        let (statements, diagnostics) = parse(&source);

        assert_eq!(diagnostics.errors().len(), 1);
        assert!(messages(&diagnostics)[0].ends_with("Can't have more than 255 arguments."));
        assert_eq!(statements.len(), 1);
    }

    #[test]
    fn every_reference_gets_its_own_id() {
        let (statements, _) = parse("a; a;");

        let ids: Vec<ExprId> = statements
            .iter()
            .filter_map(|s| match s {
                Stmt::Expression(Expr::Variable { id, .. }) => Some(*id),
                _ => None,
            })
            .collect();

        assert_eq!(ids, vec![ExprId(0), ExprId(1)]);
    }

    #[test]
    fn starting_id_carries_over() {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan_tokens("x = y;", &mut diagnostics);
        let mut parser = Parser::starting_at(tokens, ExprId(10));
        parser.parse(&mut diagnostics);

        // `x` (discarded Variable), `y`, then the Assign itself.
        assert_eq!(parser.next_expr_id(), ExprId(13));
    }
}
