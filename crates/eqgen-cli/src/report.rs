//! JSON summary of the decisions behind a generated `Equals`.

use eqgen_model::TypeDatabase;
use eqgen_synth::{EqualityPlan, EqualityStrategy};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardKind {
    /// `if (!(obj is T)) return false;` followed by a cast.
    InstanceCheck,
    /// `obj as T` followed by `local != null`.
    NullCheck,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberReport {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub strategy: EqualityStrategy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyReport {
    #[serde(rename = "type")]
    pub ty: String,
    pub local: String,
    pub guard: GuardKind,
    pub base_equals: bool,
    pub members: Vec<MemberReport>,
}

impl StrategyReport {
    pub fn from_plan(db: &dyn TypeDatabase, plan: &EqualityPlan) -> Self {
        let guard = if plan.has_instance_guard() {
            GuardKind::InstanceCheck
        } else {
            GuardKind::NullCheck
        };
        Self {
            ty: db.type_name(plan.containing_type).to_string(),
            local: plan.local_name.clone(),
            guard,
            base_equals: plan.has_base_equals(),
            members: plan
                .member_comparisons()
                .map(|comparison| MemberReport {
                    name: comparison.name.clone(),
                    ty: db.type_name(comparison.member_type).to_string(),
                    strategy: comparison.strategy,
                })
                .collect(),
        }
    }
}
