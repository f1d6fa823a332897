//! Equality plan: the ordered decisions for one `Equals` body.
//!
//! A plan is a short statement list:
//!
//! ```text
//! value type:      RequireInstanceOf(T), DeclareLocal(cast), ReturnConjunction
//! reference type:  DeclareLocal(try-cast), ReturnConjunction
//! ```
//!
//! The conjunction lists guard-derived conditions first (`local != null`,
//! `base.Equals(obj)`), then one comparison per member in caller order.

use crate::strategy::EqualityStrategy;
use eqgen_model::{MemberId, TypeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `(T)obj`, only after an instance-of guard.
    Cast,
    /// `obj as T`, absent when the dynamic type does not match.
    TryCast,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberComparison {
    pub member: MemberId,
    pub name: String,
    /// Resolved comparison type (`object` when the member had none).
    pub member_type: TypeId,
    pub strategy: EqualityStrategy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// `local != null`
    LocalNotNull { local: String },
    /// `base.Equals(obj)`
    BaseEquals,
    Member(MemberComparison),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanStatement {
    /// `if (!(obj is T)) return false;`
    RequireInstanceOf(TypeId),
    /// `var local = (T)obj;` or `var local = obj as T;`
    DeclareLocal {
        name: String,
        conversion: Conversion,
        target: TypeId,
    },
    /// `return c1 && c2 && ...;` An empty list means `return true;`.
    ReturnConjunction(Vec<Condition>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualityPlan {
    pub containing_type: TypeId,
    pub local_name: String,
    pub statements: Vec<PlanStatement>,
}

impl EqualityPlan {
    /// Conditions of the final return, in evaluation order.
    pub fn conditions(&self) -> &[Condition] {
        self.statements
            .iter()
            .find_map(|stmt| match stmt {
                PlanStatement::ReturnConjunction(conditions) => Some(conditions.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    pub fn member_comparisons(&self) -> impl Iterator<Item = &MemberComparison> {
        self.conditions().iter().filter_map(|condition| match condition {
            Condition::Member(comparison) => Some(comparison),
            _ => None,
        })
    }

    pub fn has_instance_guard(&self) -> bool {
        self.statements
            .iter()
            .any(|stmt| matches!(stmt, PlanStatement::RequireInstanceOf(_)))
    }

    pub fn has_base_equals(&self) -> bool {
        self.conditions()
            .iter()
            .any(|condition| matches!(condition, Condition::BaseEquals))
    }
}
