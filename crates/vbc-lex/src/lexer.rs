//! The tokenizer: scans source bytes into a [`Token`] stream.
//!
//! One word (`[A-Za-z_][A-Za-z0-9_]*`) is looked up against the keyword
//! table; numeric and string literals have their own dedicated scan
//! routines. Whitespace is silently discarded; newlines become explicit
//! separator tokens; `--` and `#` start a comment that runs to end of line.
//! Lexing aborts immediately, with no resync, on the first unexpected
//! character or unterminated string.

use crate::cursor::Cursor;
use crate::error::{LexError, Result};
use crate::token::{Token, TokenKind};
use crate::unicode::{is_ascii_ident_continue, is_ascii_ident_start};
use vbc_util::Symbol;

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Tokenize the entire source, returning the full stream terminated by
    /// `Eof`, or the first error encountered.
    pub fn tokenize(source: &'a str) -> Result<Vec<Token>> {
        let mut lexer = Self::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token()?;
            let is_eof = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token> {
        self.skip_insignificant();

        let line = self.cursor.line();
        let column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Ok(Token::new(TokenKind::Eof, line, column));
        }

        let c = self.cursor.current_char();

        if c == '\n' {
            self.cursor.advance();
            return Ok(Token::new(TokenKind::Newline, line, column));
        }

        if c == '"' {
            return self.lex_string(line, column);
        }

        if c.is_ascii_digit() {
            return Ok(self.lex_number(line, column));
        }

        if is_ascii_ident_start(c) {
            return Ok(self.lex_word(line, column));
        }

        Err(LexError::UnexpectedChar { ch: c, line, column })
    }

    /// Skip spaces, tabs, carriage returns, and `--`/`#` line comments.
    /// Newlines are NOT skipped here — they are emitted as tokens.
    fn skip_insignificant(&mut self) {
        loop {
            match self.cursor.current_char() {
                ' ' | '\t' | '\r' => {
                    self.cursor.advance();
                }
                '-' if self.cursor.peek_char(1) == '-' => {
                    self.skip_to_eol();
                }
                '#' => {
                    self.skip_to_eol();
                }
                _ => break,
            }
        }
    }

    fn skip_to_eol(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }

    fn lex_word(&mut self, line: u32, column: u32) -> Token {
        let start = self.cursor.position();
        self.cursor.advance();
        while is_ascii_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let word = self.cursor.slice_from(start);
        Token::new(TokenKind::keyword_or_ident(word), line, column)
    }

    fn lex_number(&mut self, line: u32, column: u32) -> Token {
        let start = self.cursor.position();
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }
        let text = self.cursor.slice_from(start);
        let value: f64 = text.parse().expect("digit-only lexeme must parse as f64");
        Token::new(TokenKind::Number(value), line, column)
    }

    /// The only recognised escape is `\"`, consumed as a two-character
    /// unit. Any other backslash is two literal characters copied verbatim.
    fn lex_string(&mut self, line: u32, column: u32) -> Result<Token> {
        self.cursor.advance(); // opening quote
        let mut content = String::new();
        loop {
            if self.cursor.is_at_end() || self.cursor.current_char() == '\n' {
                return Err(LexError::UnterminatedString { line, column });
            }
            let c = self.cursor.current_char();
            if c == '"' {
                self.cursor.advance();
                break;
            }
            if c == '\\' && self.cursor.peek_char(1) == '"' {
                content.push('"');
                self.cursor.advance();
                self.cursor.advance();
                continue;
            }
            content.push(c);
            self.cursor.advance();
        }
        Ok(Token::new(
            TokenKind::String(Symbol::intern(&content)),
            line,
            column,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        Lexer::tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn tokenizes_function_header() {
        let tokens = kinds("fn add a b\n");
        assert_eq!(tokens[0], TokenKind::Fn);
        assert!(matches!(tokens[1], TokenKind::Ident(_)));
        assert!(matches!(tokens[2], TokenKind::Ident(_)));
        assert!(matches!(tokens[3], TokenKind::Ident(_)));
        assert_eq!(tokens[4], TokenKind::Newline);
        assert_eq!(tokens[5], TokenKind::Eof);
    }

    #[test]
    fn recognizes_operator_words_and_return_variants() {
        let tokens = kinds("ret a plus b\n");
        assert_eq!(tokens[0], TokenKind::Ret);
        assert!(matches!(tokens[1], TokenKind::Ident(_)));
        assert_eq!(tokens[2], TokenKind::Plus);
    }

    #[test]
    fn numeric_literal_supports_decimal_point() {
        let tokens = kinds("3.14");
        assert_eq!(tokens[0], TokenKind::Number(3.14));
    }

    #[test]
    fn integer_literal_has_no_fraction() {
        let tokens = kinds("42");
        assert_eq!(tokens[0], TokenKind::Number(42.0));
    }

    #[test]
    fn string_literal_supports_escaped_quote() {
        let tokens = kinds(r#""say \"hi\"""#);
        match &tokens[0] {
            TokenKind::String(sym) => assert_eq!(sym.as_str(), "say \"hi\""),
            other => panic!("expected String, got {other:?}"),
        }
    }

    #[test]
    fn unterminated_string_is_an_error() {
        let err = Lexer::tokenize("\"abc").unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { .. }));
    }

    #[test]
    fn unexpected_character_aborts_immediately() {
        let err = Lexer::tokenize("let x @ y").unwrap_err();
        assert!(matches!(err, LexError::UnexpectedChar { ch: '@', .. }));
    }

    #[test]
    fn double_dash_comment_runs_to_end_of_line() {
        let tokens = kinds("let x -- this is ignored\nret x\n");
        assert_eq!(tokens[0], TokenKind::Let);
        assert!(matches!(tokens[1], TokenKind::Ident(_)));
        assert_eq!(tokens[2], TokenKind::Newline);
        assert_eq!(tokens[3], TokenKind::Ret);
    }

    #[test]
    fn hash_comment_runs_to_end_of_line() {
        let tokens = kinds("# whole line comment\nret zero\n");
        assert_eq!(tokens[0], TokenKind::Newline);
        assert_eq!(tokens[1], TokenKind::Ret);
    }

    #[test]
    fn module_call_tokenizes_module_then_function_name() {
        let tokens = kinds("math sqrt x\n");
        assert_eq!(tokens[0], TokenKind::ModMath);
        assert!(matches!(tokens[1], TokenKind::Ident(_)));
        assert!(matches!(tokens[2], TokenKind::Ident(_)));
    }

    #[test]
    fn repeat_times_as_loop_header() {
        let tokens = kinds("repeat n times as i\n");
        assert_eq!(
            tokens,
            vec![
                TokenKind::Repeat,
                TokenKind::Ident(Symbol::intern("n")),
                TokenKind::Times,
                TokenKind::As,
                TokenKind::Ident(Symbol::intern("i")),
                TokenKind::Newline,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn line_and_column_tracking() {
        let tokens = Lexer::tokenize("fn f\nret zero\n").unwrap();
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        let ret = tokens.iter().find(|t| t.kind == TokenKind::Ret).unwrap();
        assert_eq!(ret.line, 2);
    }
}
