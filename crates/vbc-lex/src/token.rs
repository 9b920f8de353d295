//! Token kinds produced by the lexer.
//!
//! The surface vocabulary is a closed set of English words plus a handful of
//! literal shapes (numbers, strings) and the newline/end-of-input markers. A
//! word that doesn't match any table entry falls through to `Ident`.

use vbc_util::Symbol;

/// A lexical unit together with its source position.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, line: u32, column: u32) -> Self {
        Self { kind, line, column }
    }
}

/// Kind of a token, independent of its source position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    // Structural keywords
    Fn,
    Ret,
    Ok,
    Err,
    Type,
    If,
    Else,
    Done,
    Let,
    Inc,
    Dec,
    Repeat,
    Times,
    As,
    While,
    Out,
    Call,
    True,
    False,

    // Operator words
    Plus,
    Minus,
    Over,
    Mod,
    Eq,
    Neq,
    Lt,
    Gt,
    Lte,
    Gte,
    And,
    Or,
    Not,
    Neg,

    // Positional parameter words
    PosFirst,
    PosSecond,
    PosThird,
    PosFourth,

    // Number words (zero..ten carry their numeric value)
    NumberWord(u8),

    // Module names (closed set)
    ModMath,
    ModList,
    ModTime,
    ModHttp,
    ModJson,

    /// Numeric literal matching `[0-9]+(\.[0-9]+)?`.
    Number(f64),
    /// String literal with escapes already resolved.
    String(Symbol),
    /// Anything not recognised by the keyword table.
    Ident(Symbol),

    /// Explicit statement separator.
    Newline,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Look up a word against the fixed keyword table, falling back to
    /// interning it as an identifier.
    pub fn keyword_or_ident(word: &str) -> Self {
        match word {
            "fn" => TokenKind::Fn,
            "ret" => TokenKind::Ret,
            "ok" => TokenKind::Ok,
            "err" => TokenKind::Err,
            "type" => TokenKind::Type,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "done" => TokenKind::Done,
            "let" => TokenKind::Let,
            "inc" => TokenKind::Inc,
            "dec" => TokenKind::Dec,
            "repeat" => TokenKind::Repeat,
            "times" => TokenKind::Times,
            "as" => TokenKind::As,
            "while" => TokenKind::While,
            "out" => TokenKind::Out,
            "call" => TokenKind::Call,
            "true" => TokenKind::True,
            "false" => TokenKind::False,

            "plus" => TokenKind::Plus,
            "minus" => TokenKind::Minus,
            "over" => TokenKind::Over,
            "mod" => TokenKind::Mod,
            "eq" => TokenKind::Eq,
            "neq" => TokenKind::Neq,
            "lt" => TokenKind::Lt,
            "gt" => TokenKind::Gt,
            "lte" => TokenKind::Lte,
            "gte" => TokenKind::Gte,
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            "not" => TokenKind::Not,
            "neg" => TokenKind::Neg,

            "first" => TokenKind::PosFirst,
            "second" => TokenKind::PosSecond,
            "third" => TokenKind::PosThird,
            "fourth" => TokenKind::PosFourth,

            "zero" => TokenKind::NumberWord(0),
            "one" => TokenKind::NumberWord(1),
            "two" => TokenKind::NumberWord(2),
            "three" => TokenKind::NumberWord(3),
            "four" => TokenKind::NumberWord(4),
            "five" => TokenKind::NumberWord(5),
            "six" => TokenKind::NumberWord(6),
            "seven" => TokenKind::NumberWord(7),
            "eight" => TokenKind::NumberWord(8),
            "nine" => TokenKind::NumberWord(9),
            "ten" => TokenKind::NumberWord(10),

            "math" => TokenKind::ModMath,
            "list" => TokenKind::ModList,
            "time" => TokenKind::ModTime,
            "http" => TokenKind::ModHttp,
            "json" => TokenKind::ModJson,

            _ => TokenKind::Ident(Symbol::intern(word)),
        }
    }

    /// True for any of the keyword-word variants that a statement can start
    /// with — used by the argument-loop boundary rule in the parser.
    pub fn is_statement_starter(&self) -> bool {
        matches!(
            self,
            TokenKind::Ret
                | TokenKind::Out
                | TokenKind::Let
                | TokenKind::Inc
                | TokenKind::Dec
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::Repeat
                | TokenKind::While
                | TokenKind::Done
                | TokenKind::Fn
                | TokenKind::Type
        )
    }

    /// True for the infix binary-operator word tokens.
    ///
    /// `times` doubles as both the multiplication operator and the
    /// `repeat N times` loop-header keyword; it counts as a binary operator
    /// here since the call-argument boundary rule only cares about whether
    /// a word can appear mid-expression.
    pub fn is_binary_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Times
                | TokenKind::Over
                | TokenKind::Mod
                | TokenKind::Eq
                | TokenKind::Neq
                | TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Lte
                | TokenKind::Gte
                | TokenKind::And
                | TokenKind::Or
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup_hits_structural_keywords() {
        assert_eq!(TokenKind::keyword_or_ident("fn"), TokenKind::Fn);
        assert_eq!(TokenKind::keyword_or_ident("ret"), TokenKind::Ret);
        assert_eq!(TokenKind::keyword_or_ident("done"), TokenKind::Done);
        assert_eq!(TokenKind::keyword_or_ident("repeat"), TokenKind::Repeat);
    }

    #[test]
    fn keyword_lookup_hits_number_words() {
        assert_eq!(TokenKind::keyword_or_ident("zero"), TokenKind::NumberWord(0));
        assert_eq!(TokenKind::keyword_or_ident("ten"), TokenKind::NumberWord(10));
    }

    #[test]
    fn keyword_lookup_falls_through_to_ident() {
        match TokenKind::keyword_or_ident("counter") {
            TokenKind::Ident(sym) => assert_eq!(sym.as_str(), "counter"),
            other => panic!("expected Ident, got {other:?}"),
        }
    }

    #[test]
    fn module_names_are_recognized() {
        assert_eq!(TokenKind::keyword_or_ident("math"), TokenKind::ModMath);
        assert_eq!(TokenKind::keyword_or_ident("json"), TokenKind::ModJson);
    }

    #[test]
    fn statement_starters_and_operators_are_disjoint() {
        assert!(TokenKind::Ret.is_statement_starter());
        assert!(!TokenKind::Plus.is_statement_starter());
        assert!(TokenKind::Plus.is_binary_operator());
        assert!(!TokenKind::Ret.is_binary_operator());
    }
}
