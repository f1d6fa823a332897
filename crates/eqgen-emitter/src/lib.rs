//! C# rendering for synthesized `Equals` methods.
//!
//! `CsFactory` realizes an `EqualityPlan` as a `CsNode` tree and `CsPrinter`
//! turns the tree into source text.

pub mod ast;
pub use ast::CsNode;

pub mod factory;
pub use factory::CsFactory;

pub mod keywords;
pub use keywords::{escape_identifier, is_reserved_keyword};

pub mod printer;
pub use printer::{CsPrinter, EmitOptions};

use eqgen_model::{MemberId, TypeDatabase, TypeId};
use eqgen_synth::{EqualsMethod, create_equals_method};
use tracing::debug;

/// Synthesize `Equals` for `containing_type` as a C# node tree.
pub fn synthesize_equals(
    db: &dyn TypeDatabase,
    containing_type: TypeId,
    members: &[MemberId],
) -> EqualsMethod<CsNode> {
    let factory = CsFactory::new(db);
    create_equals_method(db, &factory, containing_type, members)
}

/// Synthesize `Equals` for `containing_type` and print it.
pub fn emit_equals(
    db: &dyn TypeDatabase,
    containing_type: TypeId,
    members: &[MemberId],
    options: EmitOptions,
) -> String {
    let method = synthesize_equals(db, containing_type, members);
    let text = CsPrinter::method_to_string(&method, db, options);
    debug!(
        ty = db.type_name(containing_type),
        bytes = text.len(),
        "emitted Equals"
    );
    text
}

#[cfg(test)]
#[path = "../tests/printer_tests.rs"]
mod printer_tests;
#[cfg(test)]
#[path = "../tests/emit_tests.rs"]
mod emit_tests;
