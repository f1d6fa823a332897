//! The `public override bool Equals(object obj)` method shape.

use crate::builder::EqualityPlanBuilder;
use crate::factory::{SyntaxFactory, realize};
use crate::plan::EqualityPlan;
use eqgen_model::{Accessibility, MemberId, TypeDatabase, TypeId};

pub const EQUALS_NAME: &str = "Equals";
pub const OBJ_NAME: &str = "obj";
/// Name of the comparer singleton member (`EqualityComparer<T>.Default`).
pub const DEFAULT_NAME: &str = "Default";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: &'static str,
    pub ty: TypeId,
}

/// A synthesized `Equals` override, with its body realized by a factory.
#[derive(Debug, Clone)]
pub struct EqualsMethod<N> {
    pub accessibility: Accessibility,
    pub is_override: bool,
    pub return_type: TypeId,
    pub name: &'static str,
    pub parameters: Vec<Parameter>,
    pub statements: Vec<N>,
    /// The decisions the statements were realized from.
    pub plan: EqualityPlan,
}

/// Plan and realize `Equals` for `containing_type` comparing `members`.
pub fn create_equals_method<F: SyntaxFactory>(
    db: &dyn TypeDatabase,
    factory: &F,
    containing_type: TypeId,
    members: &[MemberId],
) -> EqualsMethod<F::Node> {
    let plan = EqualityPlanBuilder::new(db).build_plan(containing_type, members);
    let statements = realize(&plan, factory);

    EqualsMethod {
        accessibility: Accessibility::Public,
        is_override: true,
        return_type: db.boolean_type(),
        name: EQUALS_NAME,
        parameters: vec![Parameter {
            name: OBJ_NAME,
            ty: db.object_type(),
        }],
        statements,
        plan,
    }
}
