//! Structural `Equals` synthesis.
//!
//! Given a containing type and an ordered list of its members, the planner
//! decides per member how to compare it and assembles the decisions into an
//! `EqualityPlan`. The plan never contains concrete syntax; a `SyntaxFactory`
//! turns it into nodes of whatever tree the host uses.
//!
//! # Pipeline
//!
//! 1. `naming` picks the local that holds the typed `obj` parameter.
//! 2. `builder` emits guards and one `MemberComparison` per member.
//! 3. `factory::realize` hands the plan to a `SyntaxFactory`.
//! 4. `method::create_equals_method` wraps the statements in the
//!    `public override bool Equals(object obj)` shape.

pub mod naming;
pub use naming::{CamelCaseSegmenter, TextSpan, WordSegmenter, pick_local_name};

pub mod strategy;
pub use strategy::{EqualityStrategy, is_primitive_special, select_strategy};

pub mod plan;
pub use plan::{Condition, Conversion, EqualityPlan, MemberComparison, PlanStatement};

pub mod builder;
pub use builder::{EqualityPlanBuilder, build_plan};

pub mod factory;
pub use factory::{SyntaxFactory, realize};

pub mod method;
pub use method::{
    DEFAULT_NAME, EQUALS_NAME, EqualsMethod, OBJ_NAME, Parameter, create_equals_method,
};

#[cfg(test)]
#[path = "../tests/naming_tests.rs"]
mod naming_tests;
#[cfg(test)]
#[path = "../tests/strategy_tests.rs"]
mod strategy_tests;
#[cfg(test)]
#[path = "../tests/builder_tests.rs"]
mod builder_tests;
#[cfg(test)]
#[path = "../tests/realize_tests.rs"]
mod realize_tests;
