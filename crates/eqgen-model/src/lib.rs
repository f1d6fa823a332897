//! Type and symbol model for the eqgen `Equals` synthesizer.
//!
//! This crate provides the semantic side the synthesizer reads from:
//! - Handles (`TypeId`, `MemberId`) and the well-known `SpecialType` set
//! - The `TypeDatabase` query trait
//! - `TypeTable`, an in-memory database with interned generic instantiations
//! - A JSON model loader (`ModelFile`)

// Handles, kinds and member descriptors
pub mod types;
pub use types::{
    Accessibility, MemberFlags, MemberId, MemberInfo, MemberKind, MethodSignature, SpecialType,
    TypeId, TypeKind,
};

// Query trait implemented by every type model
pub mod db;
pub use db::TypeDatabase;

// In-memory type model
pub mod table;
pub use table::TypeTable;

// JSON model files
pub mod loader;
pub use loader::{MemberDecl, ModelFile, TypeDecl};

#[cfg(test)]
#[path = "../tests/table_tests.rs"]
mod table_tests;
#[cfg(test)]
#[path = "../tests/loader_tests.rs"]
mod loader_tests;
