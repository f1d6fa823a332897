//! `SyntaxFactory` producing `CsNode` trees.

use crate::ast::CsNode;
use eqgen_model::{TypeDatabase, TypeId};
use eqgen_synth::{DEFAULT_NAME, SyntaxFactory};

const EQUALITY_COMPARER: &str = "EqualityComparer";

/// Builds C# nodes, resolving type names through a `TypeDatabase`.
#[derive(Clone, Copy)]
pub struct CsFactory<'a> {
    db: &'a dyn TypeDatabase,
}

impl<'a> CsFactory<'a> {
    pub fn new(db: &'a dyn TypeDatabase) -> Self {
        Self { db }
    }

    fn type_display(&self, ty: TypeId) -> String {
        self.db.type_name(ty).to_string()
    }
}

impl SyntaxFactory for CsFactory<'_> {
    type Node = CsNode;

    fn identifier(&self, name: &str) -> CsNode {
        CsNode::id(name)
    }

    fn this_expression(&self) -> CsNode {
        CsNode::This
    }

    fn base_expression(&self) -> CsNode {
        CsNode::Base
    }

    fn member_access(&self, receiver: CsNode, name: &str) -> CsNode {
        CsNode::prop(receiver, name)
    }

    fn true_literal(&self) -> CsNode {
        CsNode::BooleanLiteral(true)
    }

    fn false_literal(&self) -> CsNode {
        CsNode::BooleanLiteral(false)
    }

    fn null_literal(&self) -> CsNode {
        CsNode::NullLiteral
    }

    fn is_type_expression(&self, expr: CsNode, ty: TypeId) -> CsNode {
        CsNode::is_type(expr, self.type_display(ty))
    }

    fn cast_expression(&self, ty: TypeId, expr: CsNode) -> CsNode {
        CsNode::cast(self.type_display(ty), expr)
    }

    fn try_cast_expression(&self, expr: CsNode, ty: TypeId) -> CsNode {
        CsNode::as_type(expr, self.type_display(ty))
    }

    fn logical_not(&self, expr: CsNode) -> CsNode {
        CsNode::not(expr)
    }

    fn logical_and(&self, left: CsNode, right: CsNode) -> CsNode {
        CsNode::and(left, right)
    }

    fn value_equals(&self, left: CsNode, right: CsNode) -> CsNode {
        CsNode::eq(left, right)
    }

    fn reference_not_equals(&self, left: CsNode, right: CsNode) -> CsNode {
        CsNode::ne(left, right)
    }

    fn invocation(&self, callee: CsNode, arguments: Vec<CsNode>) -> CsNode {
        CsNode::call(callee, arguments)
    }

    fn default_equality_comparer(&self, ty: TypeId) -> CsNode {
        CsNode::prop(
            CsNode::generic(EQUALITY_COMPARER, vec![self.type_display(ty)]),
            DEFAULT_NAME,
        )
    }

    fn local_declaration(&self, name: &str, initializer: CsNode) -> CsNode {
        CsNode::var_decl(name, initializer)
    }

    fn if_statement(&self, condition: CsNode, then_branch: Vec<CsNode>) -> CsNode {
        CsNode::if_stmt(condition, then_branch)
    }

    fn return_statement(&self, expr: CsNode) -> CsNode {
        CsNode::ret(expr)
    }
}
