//! Per-member comparison strategy selection.

use eqgen_model::{SpecialType, TypeDatabase, TypeId};
use serde::Serialize;
use tracing::trace;

/// How one member is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EqualityStrategy {
    /// `this.m == other.m`
    PrimitiveValue,
    /// `this.m.Equals(other.m)`: value types implementing `IEquatable<Self>`.
    SelfEquatable,
    /// `EqualityComparer<T>.Default.Equals(this.m, other.m)`
    DefaultComparer,
}

impl EqualityStrategy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PrimitiveValue => "primitive_value",
            Self::SelfEquatable => "self_equatable",
            Self::DefaultComparer => "default_comparer",
        }
    }
}

/// Special types compared with `==`.
///
/// Every `SpecialType` is listed so a new kind forces a decision here.
pub const fn is_primitive_special(special: SpecialType) -> bool {
    match special {
        SpecialType::Boolean
        | SpecialType::Char
        | SpecialType::SByte
        | SpecialType::Byte
        | SpecialType::Int16
        | SpecialType::UInt16
        | SpecialType::Int32
        | SpecialType::UInt32
        | SpecialType::Int64
        | SpecialType::UInt64
        | SpecialType::Decimal
        | SpecialType::Single
        | SpecialType::Double
        | SpecialType::String
        | SpecialType::NullableT
        | SpecialType::DateTime => true,
        SpecialType::None | SpecialType::Object | SpecialType::Void => false,
    }
}

/// Enumerations and primitive special types.
pub fn is_primitive_value_type(db: &dyn TypeDatabase, ty: TypeId) -> bool {
    db.is_enum(ty) || is_primitive_special(db.special_type(ty))
}

/// Whether `ty`'s interface set contains `IEquatable<ty>`.
pub fn implements_self_equatable(db: &dyn TypeDatabase, ty: TypeId) -> bool {
    db.equatable_of(ty)
        .is_some_and(|equatable| db.all_interfaces(ty).contains(&equatable))
}

/// Choose the comparison strategy for a member of type `ty`.
pub fn select_strategy(db: &dyn TypeDatabase, ty: TypeId) -> EqualityStrategy {
    let strategy = if is_primitive_value_type(db, ty) {
        EqualityStrategy::PrimitiveValue
    } else if db.is_value_type(ty) && implements_self_equatable(db, ty) {
        EqualityStrategy::SelfEquatable
    } else {
        EqualityStrategy::DefaultComparer
    };
    trace!(ty = db.type_name(ty), strategy = strategy.as_str(), "selected strategy");
    strategy
}
