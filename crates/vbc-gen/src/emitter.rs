//! Single-pass lowering of a parsed [`Program`] to textual LLVM IR.
//!
//! One [`Emitter`] processes a whole program: a preliminary traversal
//! collects string literals in document order, then each function is
//! emitted directly into a growing text buffer — no IR builder library,
//! no intermediate instruction list.

use std::fmt::Write as _;

use vbc_par::{BinOpKind, Expr, FunctionDefinition, Program, Stmt, UnOpKind};
use vbc_util::Symbol;

use crate::error::{GenError, Result};

const MATH_MODULE: &str = "math";
const UNARY_MATH_FNS: &[&str] = &["abs", "sqrt", "floor", "ceil", "sin", "cos"];
const BINARY_MATH_FNS: &[&str] = &["min", "max", "pow"];

pub struct Emitter {
    out: String,
    temp_counter: u32,
    label_counter: u32,
    local_count: u32,
    locals: std::collections::HashMap<Symbol, u32>,
    params: std::collections::HashMap<Symbol, u32>,
    strings: Vec<Symbol>,
    string_cursor: usize,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            temp_counter: 0,
            label_counter: 0,
            local_count: 0,
            locals: std::collections::HashMap::new(),
            params: std::collections::HashMap::new(),
            strings: Vec::new(),
            string_cursor: 0,
        }
    }

    /// Lowers a whole program to a single textual IR module.
    pub fn emit_program(program: &Program) -> Result<String> {
        let mut emitter = Self::new();
        emitter.strings = collect_strings(program);
        emitter.write_preamble();
        emitter.write_string_table();
        for function in &program.functions {
            emitter.emit_function(function)?;
        }
        Ok(emitter.out)
    }

    fn write_preamble(&mut self) {
        let _ = writeln!(self.out, "declare double @llvm.fabs.f64(double)");
        let _ = writeln!(self.out, "declare double @llvm.sqrt.f64(double)");
        let _ = writeln!(self.out, "declare double @llvm.floor.f64(double)");
        let _ = writeln!(self.out, "declare double @llvm.ceil.f64(double)");
        let _ = writeln!(self.out, "declare double @llvm.sin.f64(double)");
        let _ = writeln!(self.out, "declare double @llvm.cos.f64(double)");
        let _ = writeln!(self.out, "declare double @llvm.pow.f64(double, double)");
        let _ = writeln!(self.out, "declare double @llvm.minnum.f64(double, double)");
        let _ = writeln!(self.out, "declare double @llvm.maxnum.f64(double, double)");
        let _ = writeln!(self.out);
        let _ = writeln!(self.out, "declare i32 @printf(i8*, ...)");
        let _ = writeln!(self.out);
        let _ = writeln!(self.out, "@.fmt_num = private constant [4 x i8] c\"%g\\0A\\00\"");
        let _ = writeln!(self.out, "@.fmt_str = private constant [4 x i8] c\"%s\\0A\\00\"");
        let _ = writeln!(self.out);
    }

    fn write_string_table(&mut self) {
        for (index, symbol) in self.strings.clone().iter().enumerate() {
            let text = symbol.as_str();
            let escaped = escape_ir_string(text);
            let _ = writeln!(
                self.out,
                "@.str{} = private constant [{} x i8] c\"{}\\00\"",
                index,
                text.len() + 1,
                escaped
            );
        }
        if !self.strings.is_empty() {
            let _ = writeln!(self.out);
        }
    }

    fn fresh_temp(&mut self) -> String {
        let id = self.temp_counter;
        self.temp_counter += 1;
        format!("%t{id}")
    }

    fn fresh_label(&mut self) -> u32 {
        let id = self.label_counter;
        self.label_counter += 1;
        id
    }

    fn emit_function(&mut self, func: &FunctionDefinition) -> Result<()> {
        self.locals.clear();
        self.params.clear();
        self.temp_counter = 0;
        self.label_counter = 0;
        self.local_count = 0;
        for (index, name) in func.params.iter().enumerate() {
            self.params.insert(*name, index as u32);
        }

        let name = func.name.as_str();
        let args = (0..func.params.len())
            .map(|i| format!("double %arg{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(self.out, "define double @{name}({args}) {{");
        let _ = writeln!(self.out, "entry:");

        let terminated = self.emit_block(&func.body)?;
        if !terminated {
            let _ = writeln!(self.out, "  ret double 0.0");
        }
        let _ = writeln!(self.out, "}}");
        let _ = writeln!(self.out);
        Ok(())
    }

    /// Emits a statement list, returning whether control falls off the end
    /// already terminated (so the caller must not append a fallthrough).
    fn emit_block(&mut self, stmts: &[Stmt]) -> Result<bool> {
        let mut terminated = false;
        for stmt in stmts {
            if terminated {
                break;
            }
            terminated = self.emit_stmt(stmt)?;
        }
        Ok(terminated)
    }

    /// Emits either arm of an `if`/`else`: a `Block` carries its full
    /// statement list, a bare statement is emitted on its own.
    fn emit_branch(&mut self, stmt: &Stmt) -> Result<bool> {
        match stmt {
            Stmt::Block(stmts) => self.emit_block(stmts),
            other => self.emit_stmt(other),
        }
    }

    fn emit_stmt(&mut self, stmt: &Stmt) -> Result<bool> {
        match stmt {
            Stmt::Return { value, .. } => {
                let val = self.emit_expr(value)?;
                let _ = writeln!(self.out, "  ret double {val}");
                Ok(true)
            }
            Stmt::If { cond, then_branch, else_branch } => self.emit_if(cond, then_branch, else_branch.as_deref()),
            Stmt::Let { name, value } => {
                let val = self.emit_expr(value)?;
                if let Some(&slot) = self.locals.get(name) {
                    let _ = writeln!(self.out, "  store double {val}, double* %local{slot}");
                } else {
                    let slot = self.local_count;
                    self.local_count += 1;
                    let _ = writeln!(self.out, "  %local{slot} = alloca double");
                    let _ = writeln!(self.out, "  store double {val}, double* %local{slot}");
                    self.locals.insert(*name, slot);
                }
                Ok(false)
            }
            Stmt::ExprStmt(expr) => {
                self.emit_expr(expr)?;
                Ok(false)
            }
            Stmt::Out(expr) => {
                self.emit_out(expr)?;
                Ok(false)
            }
            Stmt::Repeat { count, var, body } => self.emit_repeat(count, var.as_ref(), body),
            Stmt::While { cond, body } => self.emit_while(cond, body),
            Stmt::Inc { name, amount } => self.emit_inc_dec(*name, amount.as_ref(), true),
            Stmt::Dec { name, amount } => self.emit_inc_dec(*name, amount.as_ref(), false),
            Stmt::Block(stmts) => self.emit_block(stmts),
        }
    }

    fn emit_if(&mut self, cond: &Expr, then_branch: &Stmt, else_branch: Option<&Stmt>) -> Result<bool> {
        let cond_val = self.emit_expr(cond)?;
        let bool_reg = self.fresh_temp();
        let _ = writeln!(self.out, "  {bool_reg} = fcmp one double {cond_val}, 0.0");

        let then_label = self.fresh_label();
        let else_label = self.fresh_label();
        let end_label = self.fresh_label();

        if let Some(else_branch) = else_branch {
            let _ = writeln!(
                self.out,
                "  br i1 {bool_reg}, label %then{then_label}, label %else{else_label}"
            );
            let _ = writeln!(self.out, "then{then_label}:");
            let then_terminated = self.emit_branch(then_branch)?;
            if !then_terminated {
                let _ = writeln!(self.out, "  br label %end{end_label}");
            }
            let _ = writeln!(self.out, "else{else_label}:");
            let else_terminated = self.emit_branch(else_branch)?;
            if !else_terminated {
                let _ = writeln!(self.out, "  br label %end{end_label}");
            }
        } else {
            let _ = writeln!(
                self.out,
                "  br i1 {bool_reg}, label %then{then_label}, label %end{end_label}"
            );
            let _ = writeln!(self.out, "then{then_label}:");
            let then_terminated = self.emit_branch(then_branch)?;
            if !then_terminated {
                let _ = writeln!(self.out, "  br label %end{end_label}");
            }
        }
        let _ = writeln!(self.out, "end{end_label}:");
        Ok(false)
    }

    fn emit_repeat(&mut self, count: &Expr, var: Option<&Symbol>, body: &[Stmt]) -> Result<bool> {
        let count_val = self.emit_expr(count)?;

        let counter_slot = self.local_count;
        self.local_count += 1;
        let _ = writeln!(self.out, "  %local{counter_slot} = alloca double");
        let _ = writeln!(self.out, "  store double 1.0, double* %local{counter_slot}");
        if let Some(name) = var {
            self.locals.insert(*name, counter_slot);
        }

        let loop_start = self.fresh_label();
        let loop_body = self.fresh_label();
        let loop_end = self.fresh_label();

        let _ = writeln!(self.out, "  br label %loop_start{loop_start}");
        let _ = writeln!(self.out, "loop_start{loop_start}:");
        let counter_val = self.fresh_temp();
        let _ = writeln!(self.out, "  {counter_val} = load double, double* %local{counter_slot}");
        let cmp_reg = self.fresh_temp();
        let _ = writeln!(self.out, "  {cmp_reg} = fcmp ole double {counter_val}, {count_val}");
        let _ = writeln!(
            self.out,
            "  br i1 {cmp_reg}, label %loop_body{loop_body}, label %loop_end{loop_end}"
        );

        let _ = writeln!(self.out, "loop_body{loop_body}:");
        let body_terminated = self.emit_block(body)?;
        if !body_terminated {
            let load_reg = self.fresh_temp();
            let _ = writeln!(self.out, "  {load_reg} = load double, double* %local{counter_slot}");
            let inc_reg = self.fresh_temp();
            let _ = writeln!(self.out, "  {inc_reg} = fadd double {load_reg}, 1.0");
            let _ = writeln!(self.out, "  store double {inc_reg}, double* %local{counter_slot}");
            let _ = writeln!(self.out, "  br label %loop_start{loop_start}");
        }
        let _ = writeln!(self.out, "loop_end{loop_end}:");
        Ok(false)
    }

    fn emit_while(&mut self, cond: &Expr, body: &[Stmt]) -> Result<bool> {
        let while_start = self.fresh_label();
        let while_body = self.fresh_label();
        let while_end = self.fresh_label();

        let _ = writeln!(self.out, "  br label %while_start{while_start}");
        let _ = writeln!(self.out, "while_start{while_start}:");
        let cond_val = self.emit_expr(cond)?;
        let bool_reg = self.fresh_temp();
        let _ = writeln!(self.out, "  {bool_reg} = fcmp one double {cond_val}, 0.0");
        let _ = writeln!(
            self.out,
            "  br i1 {bool_reg}, label %while_body{while_body}, label %while_end{while_end}"
        );

        let _ = writeln!(self.out, "while_body{while_body}:");
        let body_terminated = self.emit_block(body)?;
        if !body_terminated {
            let _ = writeln!(self.out, "  br label %while_start{while_start}");
        }
        let _ = writeln!(self.out, "while_end{while_end}:");
        Ok(false)
    }

    fn emit_inc_dec(&mut self, name: Symbol, amount: Option<&Expr>, increment: bool) -> Result<bool> {
        let slot = *self
            .locals
            .get(&name)
            .ok_or_else(|| GenError::UnknownIdentifier { name: name.as_str().to_string() })?;
        let load_reg = self.fresh_temp();
        let _ = writeln!(self.out, "  {load_reg} = load double, double* %local{slot}");
        let amount_val = match amount {
            Some(expr) => self.emit_expr(expr)?,
            None => "1.0".to_string(),
        };
        let result_reg = self.fresh_temp();
        let op = if increment { "fadd" } else { "fsub" };
        let _ = writeln!(self.out, "  {result_reg} = {op} double {load_reg}, {amount_val}");
        let _ = writeln!(self.out, "  store double {result_reg}, double* %local{slot}");
        Ok(false)
    }

    fn emit_out(&mut self, expr: &Expr) -> Result<()> {
        if let Expr::Str(_) = expr {
            let index = self.string_cursor;
            self.string_cursor += 1;
            let len = self.strings[index].as_str().len() + 1;
            let ptr_reg = self.fresh_temp();
            let _ = writeln!(
                self.out,
                "  {ptr_reg} = getelementptr [{len} x i8], [{len} x i8]* @.str{index}, i32 0, i32 0"
            );
            let _ = writeln!(
                self.out,
                "  call i32 (i8*, ...) @printf(i8* getelementptr ([4 x i8], [4 x i8]* @.fmt_str, i32 0, i32 0), i8* {ptr_reg})"
            );
        } else {
            let val = self.emit_expr(expr)?;
            let _ = writeln!(
                self.out,
                "  call i32 (i8*, ...) @printf(i8* getelementptr ([4 x i8], [4 x i8]* @.fmt_num, i32 0, i32 0), double {val})"
            );
        }
        Ok(())
    }

    fn emit_expr(&mut self, expr: &Expr) -> Result<String> {
        match expr {
            Expr::Num(n) => {
                let reg = self.fresh_temp();
                let _ = writeln!(self.out, "  {reg} = fadd double 0.0, {}", format_double(*n));
                Ok(reg)
            }
            Expr::Bool(b) => {
                let reg = self.fresh_temp();
                let lit = if *b { "1.0" } else { "0.0" };
                let _ = writeln!(self.out, "  {reg} = fadd double 0.0, {lit}");
                Ok(reg)
            }
            Expr::Str(sym) => {
                let reg = self.fresh_temp();
                let _ = writeln!(self.out, "  ; string: \"{}\"", sym.as_str());
                let _ = writeln!(self.out, "  {reg} = fadd double 0.0, 0.0");
                Ok(reg)
            }
            Expr::Positional(index) => Ok(format!("%arg{index}")),
            Expr::Var(name) => {
                if let Some(&slot) = self.locals.get(name) {
                    let reg = self.fresh_temp();
                    let _ = writeln!(self.out, "  {reg} = load double, double* %local{slot}");
                    Ok(reg)
                } else if let Some(&index) = self.params.get(name) {
                    Ok(format!("%arg{index}"))
                } else {
                    Err(GenError::UnknownIdentifier { name: name.as_str().to_string() })
                }
            }
            Expr::UnaryOp { op, operand, .. } => self.emit_unary(*op, operand),
            Expr::BinOp { op, left, right, .. } => self.emit_binop(*op, left, right),
            Expr::Call { module, name, args, .. } => self.emit_call(*module, *name, args),
        }
    }

    fn emit_unary(&mut self, op: UnOpKind, operand: &Expr) -> Result<String> {
        let val = self.emit_expr(operand)?;
        let reg = self.fresh_temp();
        match op {
            UnOpKind::Neg => {
                let _ = writeln!(self.out, "  {reg} = fsub double 0.0, {val}");
            }
            UnOpKind::Not => {
                let bool_reg = self.fresh_temp();
                let _ = writeln!(self.out, "  {bool_reg} = fcmp oeq double {val}, 0.0");
                let _ = writeln!(self.out, "  {reg} = uitofp i1 {bool_reg} to double");
            }
        }
        Ok(reg)
    }

    fn emit_binop(&mut self, op: BinOpKind, left: &Expr, right: &Expr) -> Result<String> {
        let left_val = self.emit_expr(left)?;
        let right_val = self.emit_expr(right)?;
        let reg = self.fresh_temp();
        match op {
            BinOpKind::Plus => {
                let _ = writeln!(self.out, "  {reg} = fadd double {left_val}, {right_val}");
            }
            BinOpKind::Minus => {
                let _ = writeln!(self.out, "  {reg} = fsub double {left_val}, {right_val}");
            }
            BinOpKind::Times => {
                let _ = writeln!(self.out, "  {reg} = fmul double {left_val}, {right_val}");
            }
            BinOpKind::Over => {
                let _ = writeln!(self.out, "  {reg} = fdiv double {left_val}, {right_val}");
            }
            BinOpKind::Mod => {
                let _ = writeln!(self.out, "  {reg} = frem double {left_val}, {right_val}");
            }
            BinOpKind::Eq | BinOpKind::Neq | BinOpKind::Lt | BinOpKind::Gt | BinOpKind::Lte | BinOpKind::Gte => {
                let predicate = match op {
                    BinOpKind::Eq => "oeq",
                    BinOpKind::Neq => "one",
                    BinOpKind::Lt => "olt",
                    BinOpKind::Gt => "ogt",
                    BinOpKind::Lte => "ole",
                    BinOpKind::Gte => "oge",
                    _ => unreachable!(),
                };
                let cmp_reg = self.fresh_temp();
                let _ = writeln!(self.out, "  {cmp_reg} = fcmp {predicate} double {left_val}, {right_val}");
                let _ = writeln!(self.out, "  {reg} = uitofp i1 {cmp_reg} to double");
            }
            BinOpKind::And | BinOpKind::Or => {
                let left_bool = self.fresh_temp();
                let right_bool = self.fresh_temp();
                let combined = self.fresh_temp();
                let _ = writeln!(self.out, "  {left_bool} = fcmp one double {left_val}, 0.0");
                let _ = writeln!(self.out, "  {right_bool} = fcmp one double {right_val}, 0.0");
                let op_word = if op == BinOpKind::And { "and" } else { "or" };
                let _ = writeln!(self.out, "  {combined} = {op_word} i1 {left_bool}, {right_bool}");
                let _ = writeln!(self.out, "  {reg} = uitofp i1 {combined} to double");
            }
        }
        Ok(reg)
    }

    fn emit_call(&mut self, module: Option<Symbol>, name: Symbol, args: &[Expr]) -> Result<String> {
        match module {
            None => {
                let mut arg_vals = Vec::with_capacity(args.len());
                for arg in args {
                    arg_vals.push(self.emit_expr(arg)?);
                }
                let reg = self.fresh_temp();
                let joined = arg_vals
                    .iter()
                    .map(|v| format!("double {v}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                let _ = writeln!(self.out, "  {reg} = call double @{}({joined})", name.as_str());
                Ok(reg)
            }
            Some(module) if module.as_str() == MATH_MODULE => self.emit_math_call(name.as_str(), args),
            Some(_) => {
                let reg = self.fresh_temp();
                let _ = writeln!(self.out, "  {reg} = fadd double 0.0, 0.0");
                Ok(reg)
            }
        }
    }

    fn emit_math_call(&mut self, name: &str, args: &[Expr]) -> Result<String> {
        if UNARY_MATH_FNS.contains(&name) && !args.is_empty() {
            let arg_val = self.emit_expr(&args[0])?;
            let reg = self.fresh_temp();
            let intrinsic = format!("llvm.{}.f64", math_intrinsic_suffix(name));
            let _ = writeln!(self.out, "  {reg} = call double @{intrinsic}(double {arg_val})");
            return Ok(reg);
        }
        if BINARY_MATH_FNS.contains(&name) && args.len() > 1 {
            let arg_val = self.emit_expr(&args[0])?;
            let arg2_val = self.emit_expr(&args[1])?;
            let reg = self.fresh_temp();
            let intrinsic = match name {
                "min" => "llvm.minnum.f64",
                "max" => "llvm.maxnum.f64",
                "pow" => "llvm.pow.f64",
                _ => unreachable!(),
            };
            let _ = writeln!(self.out, "  {reg} = call double @{intrinsic}(double {arg_val}, double {arg2_val})");
            return Ok(reg);
        }
        let reg = self.fresh_temp();
        let _ = writeln!(self.out, "  {reg} = fadd double 0.0, 0.0");
        Ok(reg)
    }
}

fn math_intrinsic_suffix(name: &str) -> &'static str {
    match name {
        "abs" => "fabs",
        "sqrt" => "sqrt",
        "floor" => "floor",
        "ceil" => "ceil",
        "sin" => "sin",
        "cos" => "cos",
        _ => unreachable!("checked by UNARY_MATH_FNS"),
    }
}

fn format_double(n: f64) -> String {
    if n == n.trunc() && n.abs() <= 1e15 {
        format!("{n:.1}")
    } else {
        format!("{n:e}")
    }
}

fn escape_ir_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for byte in text.bytes() {
        if byte == b'\\' || byte == b'"' || !(32..127).contains(&byte) {
            escaped.push_str(&format!("\\{byte:02X}"));
        } else {
            escaped.push(byte as char);
        }
    }
    escaped
}

fn collect_strings(program: &Program) -> Vec<Symbol> {
    let mut strings = Vec::new();
    for function in &program.functions {
        collect_strings_in_stmts(&function.body, &mut strings);
    }
    strings
}

fn collect_strings_in_stmts(stmts: &[Stmt], out: &mut Vec<Symbol>) {
    for stmt in stmts {
        match stmt {
            Stmt::Out(Expr::Str(sym)) => out.push(*sym),
            Stmt::If { then_branch, else_branch, .. } => {
                collect_strings_in_branch(then_branch, out);
                if let Some(else_branch) = else_branch {
                    collect_strings_in_branch(else_branch, out);
                }
            }
            Stmt::Repeat { body, .. } | Stmt::While { body, .. } => collect_strings_in_stmts(body, out),
            Stmt::Block(stmts) => collect_strings_in_stmts(stmts, out),
            _ => {}
        }
    }
}

fn collect_strings_in_branch(stmt: &Stmt, out: &mut Vec<Symbol>) {
    match stmt {
        Stmt::Block(stmts) => collect_strings_in_stmts(stmts, out),
        other => collect_strings_in_stmts(std::slice::from_ref(other), out),
    }
}
