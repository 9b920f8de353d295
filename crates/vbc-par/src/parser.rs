//! Recursive-descent parser with precedence-climbing expression parsing.
//!
//! One function per grammar level: `parse_or` calls `parse_and` calls
//! `parse_comparison` calls `parse_additive` calls `parse_multiplicative`
//! calls `parse_unary` calls `parse_primary`, tightest binding last. All
//! binary operators are left-associative.

use crate::ast::*;
use crate::error::{ParseError, Result};
use vbc_lex::{Token, TokenKind};
use vbc_util::Span;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn parse(&mut self) -> Result<Program> {
        let mut types = Vec::new();
        let mut functions = Vec::new();
        self.skip_newlines();
        while !self.at_eof() {
            match self.kind() {
                TokenKind::Fn => functions.push(self.parse_function()?),
                TokenKind::Type => types.push(self.parse_type_definition()?),
                _ => return Err(self.expected_item()),
            }
            self.skip_newlines();
        }
        Ok(Program { types, functions })
    }

    // ----- items -----

    fn parse_function(&mut self) -> Result<FunctionDefinition> {
        let span = self.span();
        self.advance(); // fn
        let name = self.expect_ident("function name")?;
        let mut params = Vec::new();
        while let TokenKind::Ident(sym) = *self.kind() {
            params.push(sym);
            self.advance();
        }
        self.expect_newline()?;
        self.skip_newlines();

        let mut body = Vec::new();
        while !matches!(self.kind(), TokenKind::Fn | TokenKind::Type | TokenKind::Eof) {
            body.push(self.parse_stmt()?);
            self.skip_newlines();
        }
        Ok(FunctionDefinition { name, params, body, span })
    }

    fn parse_type_definition(&mut self) -> Result<TypeDefinition> {
        let span = self.span();
        self.advance(); // type
        let name = self.expect_ident("type name")?;

        let shape = if matches!(self.kind(), TokenKind::Ok) {
            self.advance();
            let ok_type = self.expect_ident("ok type")?;
            self.expect(TokenKind::Or, "or")?;
            self.expect(TokenKind::Err, "err")?;
            let err_type = self.expect_ident("err type")?;
            TypeShape::Union { ok_type, err_type }
        } else {
            let mut fields = Vec::new();
            while let TokenKind::Ident(sym) = *self.kind() {
                fields.push(sym);
                self.advance();
            }
            TypeShape::Struct { fields }
        };

        self.expect_newline()?;
        Ok(TypeDefinition { name, shape, span })
    }

    // ----- statements -----

    fn parse_stmt(&mut self) -> Result<Stmt> {
        match self.kind() {
            TokenKind::Ret => self.parse_return(),
            TokenKind::Out => {
                self.advance();
                Ok(Stmt::Out(self.parse_expr()?))
            }
            TokenKind::Let => {
                self.advance();
                let name = self.expect_ident("binding name")?;
                let value = self.parse_expr()?;
                Ok(Stmt::Let { name, value })
            }
            TokenKind::Inc => self.parse_inc_dec(true),
            TokenKind::Dec => self.parse_inc_dec(false),
            TokenKind::If => self.parse_if(),
            TokenKind::Repeat => self.parse_repeat(),
            TokenKind::While => self.parse_while(),
            _ => Ok(Stmt::ExprStmt(self.parse_expr()?)),
        }
    }

    fn parse_return(&mut self) -> Result<Stmt> {
        self.advance(); // ret
        let variant = match self.kind() {
            TokenKind::Ok => {
                self.advance();
                ReturnVariant::Ok
            }
            TokenKind::Err => {
                self.advance();
                ReturnVariant::Err
            }
            _ => ReturnVariant::Plain,
        };
        let value = self.parse_expr()?;
        Ok(Stmt::Return { variant, value })
    }

    fn parse_inc_dec(&mut self, is_inc: bool) -> Result<Stmt> {
        self.advance(); // inc/dec
        let name = self.expect_ident("variable name")?;
        let amount = if self.at_stmt_boundary() {
            None
        } else {
            Some(self.parse_expr()?)
        };
        Ok(if is_inc {
            Stmt::Inc { name, amount }
        } else {
            Stmt::Dec { name, amount }
        })
    }

    fn parse_if(&mut self) -> Result<Stmt> {
        self.advance(); // if
        let cond = self.parse_expr()?;

        let then_branch = if matches!(self.kind(), TokenKind::Newline) {
            self.advance();
            self.skip_newlines();
            Box::new(Stmt::Block(self.parse_stmts_until_done_or_else()?))
        } else {
            Box::new(self.parse_stmt()?)
        };

        let is_block_form = matches!(*then_branch, Stmt::Block(_));

        let else_branch = if matches!(self.kind(), TokenKind::Else) {
            self.advance();
            if matches!(self.kind(), TokenKind::If) {
                Some(Box::new(self.parse_if()?))
            } else if matches!(self.kind(), TokenKind::Newline) {
                self.advance();
                self.skip_newlines();
                Some(Box::new(Stmt::Block(self.parse_stmts_until_done_or_else()?)))
            } else {
                Some(Box::new(self.parse_stmt()?))
            }
        } else {
            None
        };

        if is_block_form {
            self.expect(TokenKind::Done, "done")?;
        }

        Ok(Stmt::If { cond, then_branch, else_branch })
    }

    fn parse_repeat(&mut self) -> Result<Stmt> {
        self.advance(); // repeat
        // The count is restricted to a single primary atom so that `times`
        // unambiguously closes the loop header rather than being read as
        // the multiplication operator.
        let count = self.parse_primary()?;
        self.expect(TokenKind::Times, "times")?;
        let var = if matches!(self.kind(), TokenKind::As) {
            self.advance();
            Some(self.expect_ident("loop variable name")?)
        } else {
            None
        };
        self.expect_newline()?;
        self.skip_newlines();
        let body = self.parse_stmts_until(&[TokenKind::Done])?;
        self.expect(TokenKind::Done, "done")?;
        Ok(Stmt::Repeat { count, var, body })
    }

    fn parse_while(&mut self) -> Result<Stmt> {
        self.advance(); // while
        let cond = self.parse_expr()?;
        self.expect_newline()?;
        self.skip_newlines();
        let body = self.parse_stmts_until(&[TokenKind::Done])?;
        self.expect(TokenKind::Done, "done")?;
        Ok(Stmt::While { cond, body })
    }

    fn parse_stmts_until_done_or_else(&mut self) -> Result<Vec<Stmt>> {
        self.parse_stmts_until(&[TokenKind::Done, TokenKind::Else])
    }

    fn parse_stmts_until(&mut self, terminators: &[TokenKind]) -> Result<Vec<Stmt>> {
        let mut stmts = Vec::new();
        while !terminators.iter().any(|t| self.kind_matches(t)) && !self.at_eof() {
            stmts.push(self.parse_stmt()?);
            self.skip_newlines();
        }
        Ok(stmts)
    }

    fn kind_matches(&self, target: &TokenKind) -> bool {
        std::mem::discriminant(self.kind()) == std::mem::discriminant(target)
    }

    // ----- expressions -----

    fn parse_expr(&mut self) -> Result<Expr> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<Expr> {
        let mut left = self.parse_and()?;
        while matches!(self.kind(), TokenKind::Or) {
            let span = self.span();
            self.advance();
            let right = self.parse_and()?;
            left = Expr::BinOp { op: BinOpKind::Or, left: Box::new(left), right: Box::new(right), span };
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr> {
        let mut left = self.parse_comparison()?;
        while matches!(self.kind(), TokenKind::And) {
            let span = self.span();
            self.advance();
            let right = self.parse_comparison()?;
            left = Expr::BinOp { op: BinOpKind::And, left: Box::new(left), right: Box::new(right), span };
        }
        Ok(left)
    }

    fn parse_comparison(&mut self) -> Result<Expr> {
        let mut left = self.parse_additive()?;
        loop {
            let op = match self.kind() {
                TokenKind::Eq => BinOpKind::Eq,
                TokenKind::Neq => BinOpKind::Neq,
                TokenKind::Lt => BinOpKind::Lt,
                TokenKind::Gt => BinOpKind::Gt,
                TokenKind::Lte => BinOpKind::Lte,
                TokenKind::Gte => BinOpKind::Gte,
                _ => break,
            };
            let span = self.span();
            self.advance();
            let right = self.parse_additive()?;
            left = Expr::BinOp { op, left: Box::new(left), right: Box::new(right), span };
        }
        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<Expr> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.kind() {
                TokenKind::Plus => BinOpKind::Plus,
                TokenKind::Minus => BinOpKind::Minus,
                _ => break,
            };
            let span = self.span();
            self.advance();
            let right = self.parse_multiplicative()?;
            left = Expr::BinOp { op, left: Box::new(left), right: Box::new(right), span };
        }
        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<Expr> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.kind() {
                TokenKind::Times => BinOpKind::Times,
                TokenKind::Over => BinOpKind::Over,
                TokenKind::Mod => BinOpKind::Mod,
                _ => break,
            };
            let span = self.span();
            self.advance();
            let right = self.parse_unary()?;
            left = Expr::BinOp { op, left: Box::new(left), right: Box::new(right), span };
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr> {
        let op = match self.kind() {
            TokenKind::Not => Some(UnOpKind::Not),
            TokenKind::Neg => Some(UnOpKind::Neg),
            _ => None,
        };
        if let Some(op) = op {
            let span = self.span();
            self.advance();
            let operand = self.parse_unary()?;
            Ok(Expr::UnaryOp { op, operand: Box::new(operand), span })
        } else {
            self.parse_primary()
        }
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        let span = self.span();
        match self.kind() {
            TokenKind::Number(n) => {
                let n = *n;
                self.advance();
                Ok(Expr::Num(n))
            }
            TokenKind::NumberWord(n) => {
                let n = *n;
                self.advance();
                Ok(Expr::Num(n as f64))
            }
            TokenKind::String(sym) => {
                let sym = *sym;
                self.advance();
                Ok(Expr::Str(sym))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expr::Bool(true))
            }
            TokenKind::False => {
                self.advance();
                Ok(Expr::Bool(false))
            }
            TokenKind::PosFirst => {
                self.advance();
                Ok(Expr::Positional(0))
            }
            TokenKind::PosSecond => {
                self.advance();
                Ok(Expr::Positional(1))
            }
            TokenKind::PosThird => {
                self.advance();
                Ok(Expr::Positional(2))
            }
            TokenKind::PosFourth => {
                self.advance();
                Ok(Expr::Positional(3))
            }
            TokenKind::Call => {
                self.advance();
                let name = self.expect_ident("function name")?;
                let args = self.parse_call_args()?;
                Ok(Expr::Call { module: None, name, args, span })
            }
            TokenKind::ModMath => self.parse_module_call(vbc_util::Symbol::intern("math"), span),
            TokenKind::ModList => self.parse_module_call(vbc_util::Symbol::intern("list"), span),
            TokenKind::ModTime => self.parse_module_call(vbc_util::Symbol::intern("time"), span),
            TokenKind::ModHttp => self.parse_module_call(vbc_util::Symbol::intern("http"), span),
            TokenKind::ModJson => self.parse_module_call(vbc_util::Symbol::intern("json"), span),
            TokenKind::Ident(sym) => {
                let sym = *sym;
                self.advance();
                Ok(Expr::Var(sym))
            }
            _ => Err(self.expected_expr()),
        }
    }

    fn parse_module_call(&mut self, module: vbc_util::Symbol, span: Span) -> Result<Expr> {
        self.advance(); // module keyword
        let name = self.expect_ident("function name")?;
        let args = self.parse_call_args()?;
        Ok(Expr::Call { module: Some(module), name, args, span })
    }

    /// Consumes zero or more unary-level atoms until a boundary token: end of
    /// input, newline, any binary operator, or any statement-starting
    /// keyword. This means `call f a plus b` parses as `(call f a) plus b`,
    /// not `call f (a plus b)` — calls greedily absorb trailing arguments up
    /// to the first operator.
    fn parse_call_args(&mut self) -> Result<Vec<Expr>> {
        let mut args = Vec::new();
        while !self.at_call_arg_boundary() {
            args.push(self.parse_unary()?);
        }
        Ok(args)
    }

    fn at_call_arg_boundary(&self) -> bool {
        matches!(self.kind(), TokenKind::Newline | TokenKind::Eof)
            || self.kind().is_binary_operator()
            || self.kind().is_statement_starter()
    }

    fn at_stmt_boundary(&self) -> bool {
        matches!(self.kind(), TokenKind::Newline | TokenKind::Eof)
    }

    // ----- token plumbing -----

    fn kind(&self) -> &TokenKind {
        &self.tokens[self.pos].kind
    }

    fn span(&self) -> Span {
        let tok = &self.tokens[self.pos];
        Span::point(tok.line, tok.column)
    }

    fn at_eof(&self) -> bool {
        matches!(self.kind(), TokenKind::Eof)
    }

    fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn skip_newlines(&mut self) {
        while matches!(self.kind(), TokenKind::Newline) {
            self.advance();
        }
    }

    fn expect(&mut self, expected: TokenKind, what: &str) -> Result<()> {
        if std::mem::discriminant(self.kind()) == std::mem::discriminant(&expected) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(what))
        }
    }

    fn expect_newline(&mut self) -> Result<()> {
        self.expect(TokenKind::Newline, "newline")
    }

    fn expect_ident(&mut self, what: &str) -> Result<vbc_util::Symbol> {
        if let TokenKind::Ident(sym) = *self.kind() {
            self.advance();
            Ok(sym)
        } else {
            Err(self.unexpected(what))
        }
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        let tok = &self.tokens[self.pos];
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: format!("{:?}", tok.kind),
            line: tok.line,
            column: tok.column,
        }
    }

    fn expected_item(&self) -> ParseError {
        let tok = &self.tokens[self.pos];
        ParseError::ExpectedItem {
            found: format!("{:?}", tok.kind),
            line: tok.line,
            column: tok.column,
        }
    }

    fn expected_expr(&self) -> ParseError {
        let tok = &self.tokens[self.pos];
        ParseError::ExpectedExpr {
            found: format!("{:?}", tok.kind),
            line: tok.line,
            column: tok.column,
        }
    }
}
