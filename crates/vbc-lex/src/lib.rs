//! vbc-lex - Lexical Analyzer (Lexer/Tokenizer)
//!
//! ============================================================================
//! LEXICAL ANALYSIS THEORY
//! ============================================================================
//!
//! Lexical analysis is the first phase of compilation. It transforms a stream
//! of characters into a stream of tokens. This process is also called
//! "tokenization" or "scanning".
//!
//! FORMAL DEFINITION:
//! ------------------
//! Let Σ be the alphabet (set of all valid characters).
//! Let Σ* be the set of all strings over Σ.
//!
//! The lexer is a function:
//!   L: Σ* → T*
//! where T is the set of tokens.
//!
//! PROPERTIES:
//! -----------
//! - Linear time complexity: O(n) where n = input length
//! - Single-pass processing (usually)
//! - Context-free (doesn't consider surrounding tokens)
//!
//! LEXEME vs TOKEN:
//! ----------------
//! - Lexeme: The actual string of characters (e.g., "let", "123", "+")
//! - Token: The abstract category + metadata (e.g., Token::Let, Token::Number(123))
//!
//! Example:
//! ```
//! Source: "let x = 42;"
//!
//! Lexemes:  "let", " ", "x", " ", "=", " ", "42", ";"
//! Tokens:   [Let] [Ident("x")] [Eq] [Number(42)] [Semicolon] [Eof]
//!           ↑ skipping whitespace
//! ```
//!
//! ============================================================================
//! TOKEN CATEGORIES
//! ============================================================================
//!
//! 1. KEYWORDS (Reserved Words)
//!    Words with special meaning in the language.
//!    Cannot be used as identifiers.
//!
//! 2. IDENTIFIERS
//!    Names chosen by programmers for variables, functions, types, etc.
//!    Pattern: [a-zA-Z_][a-zA-Z0-9_]*
//!
//! 3. LITERALS
//!    Represent constant values:
//!    - Integer: 42, 0xFF, 0b1010, 0o77
//!    - Float: 3.14, 1e10, 2.5e-3
//!    - String: "hello", "world\n"
//!    - Boolean: true, false
//!
//! 4. OPERATORS
//!    Symbols representing operations:
//!    - Arithmetic: +, -, *, /, %
//!    - Comparison: ==, !=, <, >, <=, >=
//!    - Logical: &&, ||, !
//!    - Assignment: =, +=, -=, etc.
//!
//! 5. ASYNC/AWAIT
//!    Keywords for asynchronous programming:
//!    - async: Marks function or block as async
//!    - await: Suspends execution until future completes
//!
//! 6. PUNCTUATORS/DELIMITERS
//!    Structural symbols:
//!    - Grouping: (), {}, []
//!    - Separation: ,, ;, :
//!    - Access: ., ::, ->
//!
//! 6. SPECIAL
//!    - Whitespace (usually skipped)
//!    - Comments (usually skipped)
//!    - EOF (End of File marker)
//!
//! ============================================================================
//! LEXER IMPLEMENTATION TECHNIQUES
//! ============================================================================
//!
//! TECHNIQUE 1: TABLE-DRIVEN (Finite State Machine)
//! ------------------------------------------------
//! Use a state transition table based on current state and input character.
//!
//! States:
//! - S0: Start state
//! - S1: Reading identifier
//! - S2: Reading number
//! - S3: Reading string
//! - S4: Reading comment
//! - S_accept: Accepting state (emit token)
//! - S_error: Error state
//!
//! Transition Table Example (simplified):
//! ```
//!         letter  digit   "     /     *     other
//! S0      S1      S2      S3    S4    -     error
//! S1      S1      S1      -     -     -     accept(ID)
//! S2      -       S2      -     -     -     accept(NUM)
//! ...
//! ```
//!
//! ADVANTAGES:
//! - Fast execution (table lookup)
//! - Easy to modify
//! - Compact representation
//!
//! DISADVANTAGES:
//! - Large table for complex languages
//! - Harder to add context-sensitive features
//!
//! TECHNIQUE 2: DIRECT-CODED (Recursive Functions)
//! -----------------------------------------------
//! Each token type has its own parsing function.
//! This is what we use in this implementation.
//!
//! Pattern:
//! ```
//! fn lex_identifier(&mut self) -> Token {
//!     while self.is_alphanumeric() {
//!         self.advance();
//!     }
//!     let text = self.current_text();
//!     self.keyword_or_ident(text)
//! }
//! ```
//!
//! ADVANTAGES:
//! - Easy to understand and debug
//! - Flexible (can add complex logic)
//! - Good error messages
//!
//! DISADVANTAGES:
//! - More code to write
//! - Slightly slower than table-driven
//!
//! TECHNIQUE 3: REGEX-BASED
//! ------------------------
//! Define tokens as regular expressions, use regex engine.
//!
//! Example:
//! ```
//! IDENTIFIER = /[a-zA-Z_][a-zA-Z0-9_]*/
//! NUMBER = /[0-9]+/
//! STRING = /"([^"]*)"/
//! ```
//!
//! ADVANTAGES:
//! - Very concise specification
//! - Well-understood theory
//! - Automatic lexer generators available
//!
//! DISADVANTAGES:
//! - Slower than hand-written
//! - Harder to customize
//! - Limited context handling
//!
//! ============================================================================
//! NUMBER LITERAL PARSING
//! ============================================================================
//!
//! INTEGER FORMATS:
//! ----------------
//! - Decimal: 123, 0, 456
//! - Hexadecimal: 0xFF, 0xAB_CD (with separators)
//! - Binary: 0b1010, 0b1111_0000
//! - Octal: 0o777
//!
//! Parsing Algorithm:
//! ```
//! parse_number():
//!   base = 10
//!   if current == '0':
//!     advance()
//!     if current == 'x': base = 16
//!     else if current == 'b': base = 2
//!     else if current == 'o': base = 8
//!     else: // just 0
//!   
//!   value = 0
//!   while is_digit(current, base):
//!     value = value * base + digit_value(current)
//!     advance()
//!   
//!   return Token::Number(value)
//! ```
//!
//! FLOATING POINT:
//! ---------------
//! Format: [digits].[digits][(e|E)[(+|-)]digits]
//!
//! Examples:
//! - 3.14
//! - 1.0e10
//! - 2.5E-3
//! - .5 (optional leading digits)
//! - 5. (optional trailing digits)
//!
//! Parsing must handle:
//! - Decimal point position
//! - Exponent
//! - Overflow/underflow
//! - Special values (NaN, Infinity - if supported)
//!
//! ============================================================================
//! STRING LITERAL PARSING
//! ============================================================================
//!
//! ESCAPE SEQUENCES:
//! -----------------
//! \\n - Newline (0x0A)
//! \\t - Tab (0x09)
//! \\r - Carriage return (0x0D)
//! \\\\ - Backslash
//! \\" - Double quote
//! \\0 - Null (0x00)
//! \\xNN - Hex byte (e.g., \\xFF)
//! \\u{NNNN} - Unicode codepoint (e.g., \\u{1F600})
//!
//! ALGORITHM:
//! ----------
//! ```
//! parse_string():
//!   expect('"')
//!   result = ""
//!   
//!   while current != '"' and not eof:
//!     if current == '\\':
//!       advance()
//!       result += parse_escape()
//!     else:
//!       result += current
//!       advance()
//!   
//!   expect('"')
//!   return Token::String(result)
//! ```
//!
//! MULTILINE STRINGS:
//! ------------------
//! Some languages support multiline strings:
//! - Heredocs: <<<END ... END
//! - Triple quotes: """ ... """
//! - Raw strings: r"..." (no escape processing)
//!
//! ============================================================================
//! COMMENT HANDLING
//! ============================================================================
//!
//! LINE COMMENTS:
//! --------------
//! Format: // comment until end of line
//!
//! Handling:
//! - Skip //
//! - Skip all characters until \\n or EOF
//! - Do not emit token (completely ignored)
//!
//! BLOCK COMMENTS:
//! ---------------
//! Format: /* comment */
//!
//! Handling:
//! - Skip /*
//! - Skip characters until */ found
//! - Handle nesting if language supports it
//!
//! NESTED BLOCK COMMENTS:
//! ----------------------
//! Some languages (Rust, D) support nesting:
//! /* outer /* inner */ still outer */
//!
//! Requires counter:
//! ```
//! depth = 1
//! while depth > 0:
//!   if next == "/*": depth++
//!   if next == "*/": depth--
//! ```
//!
//! DOC COMMENTS:
//! -------------
//! Special comments for documentation:
//! - /// Line doc comment
//! - /** Block doc comment */
//!
//! Preserved and attached to following item.
//!
//! ============================================================================
//! ERROR RECOVERY STRATEGIES
//! ============================================================================
//!
//! STRATEGY 1: PANIC MODE (Skip until sync point)
//! ----------------------------------------------
//! When encountering invalid character:
//! 1. Report error
//! 2. Skip character
//! 3. Continue lexing
//!
//! Example:
//! ```
//! Source: let @x = 5;
//!            ↑ invalid
//!
//! Error: "unexpected character '@'"
//! Recovery: Skip '@', continue with 'x'
//! Result: [Let] [Error] [Ident("x")] [Eq] [Number(5)] [Semicolon]
//! ```
//!
//! STRATEGY 2: INSERT MISSING TOKEN
//! --------------------------------
//! If missing expected character, pretend it was there.
//!
//! Example:
//! ```
//! Source: "hello
//!         ↑ unclosed string
//!
//! Error: "unterminated string literal"
//! Recovery: Insert closing quote at line end
//! ```
//!
//! STRATEGY 3: SUBSTITUTE CHARACTER
//! --------------------------------
//! Replace invalid character with valid one.
//!
//! Example:
//! ```
//! Source: 'ab'  // Multiple characters in char literal
//!
//! Error: "character literal may only contain one character"
//! Recovery: Treat as "a" (first char)
//! ```
//!
//! ============================================================================
//! PERFORMANCE OPTIMIZATIONS
//! ============================================================================
//!
//! 1. TABLE-LOOKUP FOR CHARACTER CLASSIFICATION
//! --------------------------------------------
//! Precompute table [0-255] → character class
//! ```
//! enum CharClass {
//!   Whitespace,  // ' ', \\t, \\n, etc.
//!   Letter,      // a-z, A-Z
//!   Digit,       // 0-9
//!   Underscore,  // _
//!   Quote,       // '"
//!   Slash,       // /
//!   Other,
//! }
//! ```
//!
//! 2. SIMD ACCELERATION
//! --------------------
//! Use SIMD instructions for:
//! - Finding end of whitespace
//! - Finding newline
//! - Checking ASCII validity
//!
//! 3. ZERO-COPY STRINGS
//! --------------------
//! Slice into source buffer instead of allocating.
//! Only copy when necessary (escape processing).
//!
//! 4. KEYWORD PERFECT HASH
//! -----------------------
//! Use perfect hash function for keyword lookup O(1).
//!
//! ============================================================================
//! UNICODE HANDLING
//! ============================================================================
//!
//! UTF-8 DECODING:
//! ---------------
//! Source code is typically UTF-8 encoded.
//!
//! Valid identifier characters:
//! - ASCII: [a-zA-Z0-9_]
//! - Unicode: XID_Start and XID_Continue properties
//!
//! XID_Start: Characters that can start an identifier
//! XID_Continue: Characters that can continue an identifier
//!
//! Example valid Unicode identifiers:
//! - 変数 (Japanese)
//! - переменная (Russian)
//! - αβγ (Greek)
//!
//! BOM (Byte Order Mark):
//! ----------------------
//! UTF-8 BOM: EF BB BF
//! Should be skipped at file start.
//!
//! ============================================================================
//! SOURCE LOCATION TRACKING
//! ============================================================================
//!
//! For error reporting, lexer must track:
//! - Byte offset (0-based position in file)
//! - Line number (1-based)
//! - Column number (1-based, grapheme-based)
//!
//! SPAN:
//! -----
//! Range of source code: start offset..end offset
//!
//! ```
//! Source: "let x = 5;"
//!          0123456789
//!
//! Token 'let': Span { start: 0, end: 3 }
//! Token 'x':   Span { start: 4, end: 5 }
//! Token '5':   Span { start: 8, end: 9 }
//! ```
//!
//! LINE TABLE:
//! -----------
//! Store offset of each line start for fast line/column lookup.
//! ```
//! Line 1: offset 0
//! Line 2: offset 42
//! Line 3: offset 85
//! ...
//! ```
//!
//! To find line of position p:
//! - Binary search line table for largest offset ≤ p

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod unicode;

pub use error::{LexError, Result};
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
