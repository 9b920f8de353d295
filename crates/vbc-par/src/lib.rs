//! Recursive-descent parser producing the AST in [`ast`].
//!
//! Top-level items (`fn`, `type`) are parsed by straight-line lookahead on
//! the leading keyword. Statements are parsed one per line; blocks are a
//! sequence of statements terminated by `done` rather than a bracket pair.
//! Expressions use precedence climbing: `parse_expr` calls into a table of
//! binding powers per [`ast::BinOpKind`] so that, e.g., `a plus b times c`
//! groups as `a plus (b times c)` without the grammar itself being
//! left-recursive.


pub mod ast;
pub mod error;
pub mod parser;

pub use ast::{
    BinOpKind, Expr, FunctionDefinition, Program, ReturnVariant, Stmt, TypeDefinition, TypeShape,
    UnOpKind,
};
pub use error::{ParseError, Result};
pub use parser::Parser;
