#[cfg(test)]
mod scanner_tests {
    use rox::error::Diagnostics;
    use rox::expr::LiteralValue;
    use rox::scanner::*;
    use rox::token::*;

    fn assert_token_sequence(source: &str, expected: &[(TokenType, &str)]) {
        let scanner = Scanner::new(source);
        let tokens: Vec<_> = scanner.filter_map(Result::ok).collect();

        assert_eq!(tokens.len(), expected.len());

        for (actual, (expected_type, expected_lexeme)) in tokens.iter().zip(expected.iter()) {
            assert_eq!(actual.token_type, *expected_type);
            assert_eq!(actual.lexeme, *expected_lexeme);
        }
    }

    #[test]
    fn test_scanner_01_symbols() {
        assert_token_sequence(
            "({*.,+*})",
            &[
                (TokenType::LEFT_PAREN, "("),
                (TokenType::LEFT_BRACE, "{"),
                (TokenType::STAR, "*"),
                (TokenType::DOT, "."),
                (TokenType::COMMA, ","),
                (TokenType::PLUS, "+"),
                (TokenType::STAR, "*"),
                (TokenType::RIGHT_BRACE, "}"),
                (TokenType::RIGHT_PAREN, ")"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_02_two_char_operators() {
        assert_token_sequence(
            "! != = == < <= > >= /",
            &[
                (TokenType::BANG, "!"),
                (TokenType::BANG_EQUAL, "!="),
                (TokenType::EQUAL, "="),
                (TokenType::EQUAL_EQUAL, "=="),
                (TokenType::LESS, "<"),
                (TokenType::LESS_EQUAL, "<="),
                (TokenType::GREATER, ">"),
                (TokenType::GREATER_EQUAL, ">="),
                (TokenType::SLASH, "/"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_03_keywords_and_identifiers() {
        assert_token_sequence(
            "var orchid = nil; fun _f2() { return or; }",
            &[
                (TokenType::VAR, "var"),
                (TokenType::IDENTIFIER, "orchid"),
                (TokenType::EQUAL, "="),
                (TokenType::NIL, "nil"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::FUN, "fun"),
                (TokenType::IDENTIFIER, "_f2"),
                (TokenType::LEFT_PAREN, "("),
                (TokenType::RIGHT_PAREN, ")"),
                (TokenType::LEFT_BRACE, "{"),
                (TokenType::RETURN, "return"),
                (TokenType::OR, "or"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::RIGHT_BRACE, "}"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_number_edges() {
        // Neither a trailing nor a leading dot belongs to the number
        assert_token_sequence(
            "123. .5",
            &[
                (TokenType::NUMBER(0.0), "123"),
                (TokenType::DOT, "."),
                (TokenType::DOT, "."),
                (TokenType::NUMBER(0.0), "5"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_number_literal_values() {
        let tokens: Vec<Token> = Scanner::new("42 3.25").filter_map(Result::ok).collect();

        assert_eq!(tokens[0].literal(), Some(LiteralValue::Number(42.0)));
        assert_eq!(tokens[1].literal(), Some(LiteralValue::Number(3.25)));
        assert_eq!(tokens[2].literal(), None);
    }

    #[test]
    fn test_token_display() {
        let tokens: Vec<Token> = Scanner::new("42 3.25 \"hi\" and")
            .filter_map(Result::ok)
            .collect();
        let lines: Vec<String> = tokens.iter().map(ToString::to_string).collect();

        assert_eq!(
            lines,
            vec![
                "NUMBER 42 42.0",
                "NUMBER 3.25 3.25",
                "STRING \"hi\" hi",
                "AND and null",
                "EOF  null",
            ]
        );
    }

    #[test]
    fn test_unexpected_chars_token_sequence() {
        let source = ",.$(#";
        let results: Vec<_> = Scanner::new(source).collect();

        // COMMA, DOT, error, LEFT_PAREN, error, EOF
        assert_eq!(results.len(), 6);
        assert!(results[2].is_err());
        assert!(results[4].is_err());

        let kinds: Vec<&str> = results
            .iter()
            .filter_map(|r| r.as_ref().ok())
            .map(|t| t.token_type.name())
            .collect();
        assert_eq!(kinds, vec!["COMMA", "DOT", "LEFT_PAREN", "EOF"]);

        let message = results[2].as_ref().err().map(ToString::to_string);
        assert_eq!(
            message.as_deref(),
            Some("[line 1] Error: Unexpected character.")
        );
    }

    #[test]
    fn test_unterminated_string() {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan_tokens("\"abc\nvar", &mut diagnostics);

        assert!(diagnostics.had_error());
        assert_eq!(
            diagnostics.errors()[0].to_string(),
            "[line 2] Error: Unterminated string."
        );
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token_type, TokenType::EOF);
    }

    #[test]
    fn test_multiline_string_counts_lines() {
        let tokens: Vec<Token> = Scanner::new("\"a\nb\nc\" x")
            .filter_map(Result::ok)
            .collect();

        assert_eq!(tokens[0].literal(), Some(LiteralValue::Str("a\nb\nc".into())));
        assert_eq!(tokens[0].line, 3);
        assert_eq!(tokens[1].lexeme, "x");
        assert_eq!(tokens[1].line, 3);
    }

    #[test]
    fn test_errors_do_not_stop_scanning() {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan_tokens("@\n#\nprint", &mut diagnostics);

        let lines: Vec<String> = diagnostics.errors().iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "[line 1] Error: Unexpected character.",
                "[line 2] Error: Unexpected character.",
            ]
        );
        assert_eq!(tokens[0].token_type, TokenType::PRINT);
        assert_eq!(tokens[0].line, 3);
    }

    #[test]
    fn test_empty_source_is_just_eof() {
        assert_token_sequence("", &[(TokenType::EOF, "")]);
        assert_token_sequence("  \t\r\n // nothing", &[(TokenType::EOF, "")]);
    }
}
