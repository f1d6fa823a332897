//! Handoff from plans to concrete syntax.

use crate::method::{EQUALS_NAME, OBJ_NAME};
use crate::plan::{Condition, Conversion, EqualityPlan, MemberComparison, PlanStatement};
use crate::strategy::EqualityStrategy;
use eqgen_model::TypeId;

/// Constructs the language nodes an `Equals` body is made of.
///
/// The planner only decides; implementations decide what the nodes look
/// like. `default_equality_comparer` is the factory's capability because the
/// comparer singleton is a property of the target language's library.
pub trait SyntaxFactory {
    type Node;

    fn identifier(&self, name: &str) -> Self::Node;
    fn this_expression(&self) -> Self::Node;
    fn base_expression(&self) -> Self::Node;
    fn member_access(&self, receiver: Self::Node, name: &str) -> Self::Node;

    fn true_literal(&self) -> Self::Node;
    fn false_literal(&self) -> Self::Node;
    fn null_literal(&self) -> Self::Node;

    /// `expr is T`
    fn is_type_expression(&self, expr: Self::Node, ty: TypeId) -> Self::Node;
    /// `(T)expr`
    fn cast_expression(&self, ty: TypeId, expr: Self::Node) -> Self::Node;
    /// `expr as T`
    fn try_cast_expression(&self, expr: Self::Node, ty: TypeId) -> Self::Node;

    fn logical_not(&self, expr: Self::Node) -> Self::Node;
    fn logical_and(&self, left: Self::Node, right: Self::Node) -> Self::Node;
    fn value_equals(&self, left: Self::Node, right: Self::Node) -> Self::Node;
    fn reference_not_equals(&self, left: Self::Node, right: Self::Node) -> Self::Node;
    fn invocation(&self, callee: Self::Node, arguments: Vec<Self::Node>) -> Self::Node;

    /// `EqualityComparer<T>.Default`
    fn default_equality_comparer(&self, ty: TypeId) -> Self::Node;

    fn local_declaration(&self, name: &str, initializer: Self::Node) -> Self::Node;
    fn if_statement(&self, condition: Self::Node, then_branch: Vec<Self::Node>) -> Self::Node;
    fn return_statement(&self, expr: Self::Node) -> Self::Node;
}

/// Realize a plan as factory statements, in plan order.
pub fn realize<F: SyntaxFactory>(plan: &EqualityPlan, factory: &F) -> Vec<F::Node> {
    plan.statements
        .iter()
        .map(|stmt| realize_statement(stmt, &plan.local_name, factory))
        .collect()
}

fn realize_statement<F: SyntaxFactory>(
    stmt: &PlanStatement,
    local: &str,
    factory: &F,
) -> F::Node {
    match stmt {
        PlanStatement::RequireInstanceOf(ty) => {
            let test = factory.is_type_expression(factory.identifier(OBJ_NAME), *ty);
            factory.if_statement(
                factory.logical_not(test),
                vec![factory.return_statement(factory.false_literal())],
            )
        }
        PlanStatement::DeclareLocal {
            name,
            conversion,
            target,
        } => {
            let obj = factory.identifier(OBJ_NAME);
            let initializer = match conversion {
                Conversion::Cast => factory.cast_expression(*target, obj),
                Conversion::TryCast => factory.try_cast_expression(obj, *target),
            };
            factory.local_declaration(name, initializer)
        }
        PlanStatement::ReturnConjunction(conditions) => {
            let combined = conditions
                .iter()
                .map(|condition| realize_condition(condition, local, factory))
                .reduce(|left, right| factory.logical_and(left, right))
                .unwrap_or_else(|| factory.true_literal());
            factory.return_statement(combined)
        }
    }
}

fn realize_condition<F: SyntaxFactory>(
    condition: &Condition,
    local: &str,
    factory: &F,
) -> F::Node {
    match condition {
        Condition::LocalNotNull { local } => {
            factory.reference_not_equals(factory.identifier(local), factory.null_literal())
        }
        Condition::BaseEquals => {
            let callee = factory.member_access(factory.base_expression(), EQUALS_NAME);
            factory.invocation(callee, vec![factory.identifier(OBJ_NAME)])
        }
        Condition::Member(comparison) => realize_comparison(comparison, local, factory),
    }
}

fn realize_comparison<F: SyntaxFactory>(
    comparison: &MemberComparison,
    local: &str,
    factory: &F,
) -> F::Node {
    let this_member = || factory.member_access(factory.this_expression(), &comparison.name);
    let other_member = || factory.member_access(factory.identifier(local), &comparison.name);

    match comparison.strategy {
        EqualityStrategy::PrimitiveValue => factory.value_equals(this_member(), other_member()),
        EqualityStrategy::SelfEquatable => {
            let callee = factory.member_access(this_member(), EQUALS_NAME);
            factory.invocation(callee, vec![other_member()])
        }
        EqualityStrategy::DefaultComparer => {
            let comparer = factory.default_equality_comparer(comparison.member_type);
            let callee = factory.member_access(comparer, EQUALS_NAME);
            factory.invocation(callee, vec![this_member(), other_member()])
        }
    }
}
