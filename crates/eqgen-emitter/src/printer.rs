//! Text emission for `CsNode` trees and whole `Equals` methods.
//!
//! Statements are printed at the current indent without a trailing newline;
//! block emission adds the newlines between them. A `return` of a `&&` chain
//! with more than one operand is broken after each `&&`, with continuation
//! lines aligned under the first operand:
//!
//! ```text
//! return customer != null &&
//!        Id == customer.Id;
//! ```

use crate::ast::CsNode;
use crate::keywords::escape_identifier;
use eqgen_model::{Accessibility, TypeDatabase};
use eqgen_synth::EqualsMethod;
use tracing::trace;

const RETURN_KEYWORD: &str = "return ";

/// Knobs for how synthesized members are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitOptions {
    /// Keep `this.` on every member access instead of simplifying it away.
    pub qualify_this: bool,
}

pub struct CsPrinter {
    output: String,
    indent_level: u32,
    indent_str: &'static str,
    options: EmitOptions,
    /// Locals and parameters declared so far in the current body.
    scope: Vec<String>,
}

impl CsPrinter {
    pub fn new() -> Self {
        Self::with_options(EmitOptions::default())
    }

    pub fn with_options(options: EmitOptions) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            indent_str: "    ",
            options,
            scope: Vec::new(),
        }
    }

    /// Print one node with default options.
    pub fn emit_to_string(node: &CsNode) -> String {
        let mut printer = Self::new();
        printer.emit(node);
        printer.finish()
    }

    /// Print a whole method with the given options.
    pub fn method_to_string(
        method: &EqualsMethod<CsNode>,
        db: &dyn TypeDatabase,
        options: EmitOptions,
    ) -> String {
        let mut printer = Self::with_options(options);
        printer.emit_method(method, db);
        printer.finish()
    }

    pub fn finish(self) -> String {
        self.output
    }

    pub fn emit(&mut self, node: &CsNode) {
        if node.is_statement() {
            self.emit_statement(node);
        } else {
            self.emit_expression(node);
        }
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    pub fn emit_method(&mut self, method: &EqualsMethod<CsNode>, db: &dyn TypeDatabase) {
        trace!(
            name = method.name,
            statements = method.statements.len(),
            "emitting method"
        );
        self.write_indent();
        self.write(accessibility_keyword(method.accessibility));
        self.write(" ");
        if method.is_override {
            self.write("override ");
        }
        self.write(db.type_name(method.return_type));
        self.write(" ");
        self.write(method.name);
        self.write("(");
        for (i, param) in method.parameters.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write(db.type_name(param.ty));
            self.write(" ");
            self.write(&escape_identifier(param.name));
        }
        self.write(")");
        self.write_line();

        let outer_scope = std::mem::replace(
            &mut self.scope,
            method
                .parameters
                .iter()
                .map(|param| param.name.to_string())
                .collect(),
        );
        self.emit_block(&method.statements);
        self.scope = outer_scope;
    }

    // =========================================================================
    // Statements
    // =========================================================================

    fn emit_block(&mut self, statements: &[CsNode]) {
        self.write_indent();
        self.write("{");
        self.write_line();
        self.increase_indent();
        for stmt in statements {
            self.write_indent();
            self.emit(stmt);
            self.write_line();
        }
        self.decrease_indent();
        self.write_indent();
        self.write("}");
    }

    fn emit_statement(&mut self, node: &CsNode) {
        match node {
            CsNode::LocalDeclaration { name, initializer } => {
                self.write("var ");
                self.write(&escape_identifier(name));
                self.write(" = ");
                self.emit_expression(initializer);
                self.write(";");
                self.scope.push(name.clone());
            }
            CsNode::If {
                condition,
                then_branch,
            } => {
                self.write("if (");
                self.emit_expression(condition);
                self.write(")");
                self.write_line();
                self.emit_block(then_branch);
            }
            CsNode::Return(expr) => {
                self.write(RETURN_KEYWORD);
                self.emit_wrapped_conjunction(expr);
                self.write(";");
            }
            other => self.emit_expression(other),
        }
    }

    /// One conjunct per line, `&&` trailing, aligned under the first.
    fn emit_wrapped_conjunction(&mut self, expr: &CsNode) {
        let conjuncts = expr.conjuncts();
        for (i, operand) in conjuncts.iter().enumerate() {
            if i > 0 {
                self.write(" &&");
                self.write_line();
                self.write_indent();
                self.write(&" ".repeat(RETURN_KEYWORD.len()));
            }
            self.emit_expression(operand);
        }
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    fn emit_expression(&mut self, node: &CsNode) {
        match node {
            CsNode::BooleanLiteral(value) => self.write(if *value { "true" } else { "false" }),
            CsNode::NullLiteral => self.write("null"),
            CsNode::Identifier(name) => self.write(&escape_identifier(name)),
            CsNode::This => self.write("this"),
            CsNode::Base => self.write("base"),
            CsNode::GenericName { name, arguments } => {
                self.write(name);
                self.write("<");
                self.write(&arguments.join(", "));
                self.write(">");
            }
            CsNode::MemberAccess { receiver, name } => {
                if !(matches!(**receiver, CsNode::This) && self.can_simplify_this(name)) {
                    self.emit_operand(receiver);
                    self.write(".");
                }
                self.write(&escape_identifier(name));
            }
            CsNode::Invocation { callee, arguments } => {
                self.emit_operand(callee);
                self.write("(");
                self.emit_comma_separated(arguments);
                self.write(")");
            }
            CsNode::LogicalNot(operand) => {
                self.write("!");
                self.emit_operand(operand);
            }
            CsNode::LogicalAnd { .. } => {
                for (i, operand) in node.conjuncts().into_iter().enumerate() {
                    if i > 0 {
                        self.write(" && ");
                    }
                    self.emit_expression(operand);
                }
            }
            CsNode::Binary {
                left,
                operator,
                right,
            } => {
                self.emit_equality_operand(left);
                self.write(" ");
                self.write(operator);
                self.write(" ");
                self.emit_equality_operand(right);
            }
            CsNode::IsType { expr, ty } => {
                self.emit_operand(expr);
                self.write(" is ");
                self.write(ty);
            }
            CsNode::Cast { ty, expr } => {
                self.write("(");
                self.write(ty);
                self.write(")");
                self.emit_operand(expr);
            }
            CsNode::As { expr, ty } => {
                self.emit_operand(expr);
                self.write(" as ");
                self.write(ty);
            }
            CsNode::LocalDeclaration { .. } | CsNode::If { .. } | CsNode::Return(_) => {
                self.emit_statement(node);
            }
        }
    }

    /// Operand of a unary operator, cast or member access.
    fn emit_operand(&mut self, node: &CsNode) {
        if node.is_primary() {
            self.emit_expression(node);
        } else {
            self.write("(");
            self.emit_expression(node);
            self.write(")");
        }
    }

    /// Operand of `==`/`!=`. Relational and unary forms bind tighter.
    fn emit_equality_operand(&mut self, node: &CsNode) {
        if matches!(node, CsNode::LogicalAnd { .. } | CsNode::Binary { .. }) {
            self.write("(");
            self.emit_expression(node);
            self.write(")");
        } else {
            self.emit_expression(node);
        }
    }

    fn emit_comma_separated(&mut self, nodes: &[CsNode]) {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_expression(node);
        }
    }

    /// `this.name` can drop `this.` unless a local or parameter shadows it.
    fn can_simplify_this(&self, name: &str) -> bool {
        !self.options.qualify_this && !self.scope.iter().any(|local| local == name)
    }

    // =========================================================================
    // Output
    // =========================================================================

    fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    fn write_line(&mut self) {
        self.output.push('\n');
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(self.indent_str);
        }
    }

    const fn increase_indent(&mut self) {
        self.indent_level += 1;
    }

    const fn decrease_indent(&mut self) {
        if self.indent_level > 0 {
            self.indent_level -= 1;
        }
    }
}

impl Default for CsPrinter {
    fn default() -> Self {
        Self::new()
    }
}

const fn accessibility_keyword(accessibility: Accessibility) -> &'static str {
    match accessibility {
        Accessibility::Public => "public",
        Accessibility::Protected => "protected",
        Accessibility::Internal => "internal",
        Accessibility::Private => "private",
    }
}
