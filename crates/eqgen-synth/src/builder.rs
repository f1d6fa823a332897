//! Equality plan construction.
//!
//! The builder is a pure computation over a `TypeDatabase`: it reads the
//! containing type and the chosen members and returns a fresh plan. It keeps
//! no state between calls.

use crate::method::EQUALS_NAME;
use crate::naming::{CamelCaseSegmenter, WordSegmenter, pick_local_name};
use crate::plan::{Condition, Conversion, EqualityPlan, MemberComparison, PlanStatement};
use crate::strategy::select_strategy;
use eqgen_model::{Accessibility, MemberId, MemberKind, SpecialType, TypeDatabase, TypeId};
use tracing::{debug, trace};

/// Builds `EqualityPlan`s for types of one database.
pub struct EqualityPlanBuilder<'a> {
    db: &'a dyn TypeDatabase,
    segmenter: &'a dyn WordSegmenter,
}

impl<'a> EqualityPlanBuilder<'a> {
    pub fn new(db: &'a dyn TypeDatabase) -> Self {
        Self {
            db,
            segmenter: &CamelCaseSegmenter,
        }
    }

    /// Use a host-provided word segmenter for local naming.
    pub fn with_segmenter(mut self, segmenter: &'a dyn WordSegmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// Build the plan comparing `members` of `containing_type`, in order.
    ///
    /// `members` is taken as given: no deduplication, no ownership check.
    /// It may be empty.
    #[tracing::instrument(
        level = "debug",
        skip(self, members),
        fields(ty = self.db.type_name(containing_type), members = members.len())
    )]
    pub fn build_plan(&self, containing_type: TypeId, members: &[MemberId]) -> EqualityPlan {
        let local_name = pick_local_name(self.db.type_name(containing_type), self.segmenter);
        let mut statements = Vec::with_capacity(3);
        let mut conditions = Vec::with_capacity(members.len() + 2);

        if self.db.is_value_type(containing_type) {
            statements.push(PlanStatement::RequireInstanceOf(containing_type));
            statements.push(PlanStatement::DeclareLocal {
                name: local_name.clone(),
                conversion: Conversion::Cast,
                target: containing_type,
            });
        } else {
            statements.push(PlanStatement::DeclareLocal {
                name: local_name.clone(),
                conversion: Conversion::TryCast,
                target: containing_type,
            });
            conditions.push(Condition::LocalNotNull {
                local: local_name.clone(),
            });
            if self.has_existing_base_equals(containing_type) {
                conditions.push(Condition::BaseEquals);
            }
        }

        conditions.extend(
            members
                .iter()
                .map(|&member| Condition::Member(self.member_comparison(member))),
        );

        debug!(
            local = %local_name,
            conditions = conditions.len(),
            "built equality plan"
        );
        statements.push(PlanStatement::ReturnConjunction(conditions));

        EqualityPlan {
            containing_type,
            local_name,
            statements,
        }
    }

    /// Resolve a member's comparison type and strategy.
    pub fn member_comparison(&self, member: MemberId) -> MemberComparison {
        let member_type = self.comparison_type(member);
        MemberComparison {
            member,
            name: self.db.member_name(member).to_string(),
            member_type,
            strategy: select_strategy(self.db, member_type),
        }
    }

    /// Field or property type, `object` otherwise.
    fn comparison_type(&self, member: MemberId) -> TypeId {
        self.db.member_type(member).unwrap_or_else(|| {
            trace!(
                member = self.db.member_name(member),
                "member has no declared type, comparing as object"
            );
            self.db.object_type()
        })
    }

    /// Whether a base type of `ty` already overrides `Equals(object)`.
    ///
    /// Bases are scanned nearest first and the scan stops at the first
    /// qualifying override. Only presence matters.
    pub fn has_existing_base_equals(&self, ty: TypeId) -> bool {
        let found = self.db.base_types(ty).into_iter().find(|&base| {
            self.db
                .members_named(base, EQUALS_NAME)
                .iter()
                .any(|&member| self.is_equals_override(member))
        });
        trace!(found_in = ?found, "base Equals search");
        found.is_some()
    }

    /// `public override bool Equals(object)`, non-static.
    fn is_equals_override(&self, member: MemberId) -> bool {
        let info = self.db.member(member);
        let Some(signature) = info.signature.as_ref() else {
            return false;
        };
        info.kind == MemberKind::Method
            && info.is_override()
            && info.accessibility == Accessibility::Public
            && !info.is_static()
            && signature.parameters.len() == 1
            && self.db.special_type(signature.return_type) == SpecialType::Boolean
            && self.db.special_type(signature.parameters[0]) == SpecialType::Object
    }
}

/// Build a plan with the default word segmenter.
pub fn build_plan(
    db: &dyn TypeDatabase,
    containing_type: TypeId,
    members: &[MemberId],
) -> EqualityPlan {
    EqualityPlanBuilder::new(db).build_plan(containing_type, members)
}
