//! The query surface the synthesizer reads type information through.

use crate::types::{MemberId, MemberInfo, SpecialType, TypeId, TypeKind};
use smallvec::SmallVec;

/// Upper bound on base-type chain walks. A coherent model is acyclic; the
/// bound keeps a malformed one from looping forever.
pub const MAX_BASE_DEPTH: usize = 64;

/// Read-only view of a bound type graph.
///
/// Implementations must be internally consistent: every `TypeId` and
/// `MemberId` handed out must be valid for the same database.
pub trait TypeDatabase {
    /// Display name of a type (`int`, `Customer`, `IEquatable<Money>`).
    fn type_name(&self, ty: TypeId) -> &str;

    fn type_kind(&self, ty: TypeId) -> TypeKind;

    fn special_type(&self, ty: TypeId) -> SpecialType;

    /// Direct base type, if any.
    fn base_type(&self, ty: TypeId) -> Option<TypeId>;

    /// Interfaces declared directly on the type.
    fn declared_interfaces(&self, ty: TypeId) -> &[TypeId];

    /// Members declared on the type, in declaration order.
    fn declared_members(&self, ty: TypeId) -> &[MemberId];

    /// Members declared on the type with the given name.
    fn members_named(&self, ty: TypeId, name: &str) -> &[MemberId];

    fn member(&self, member: MemberId) -> &MemberInfo;

    /// The `object` type.
    fn object_type(&self) -> TypeId;

    /// The `bool` type.
    fn boolean_type(&self) -> TypeId;

    /// `IEquatable<ty>` if that instantiation exists in the model.
    ///
    /// A type can only declare an instantiation that exists, so `None` means
    /// no type implements it (or the model has no `IEquatable<T>` at all).
    fn equatable_of(&self, ty: TypeId) -> Option<TypeId>;

    // =========================================================================
    // Provided queries
    // =========================================================================

    fn is_value_type(&self, ty: TypeId) -> bool {
        self.type_kind(ty).is_value_type()
    }

    fn is_enum(&self, ty: TypeId) -> bool {
        self.type_kind(ty) == TypeKind::Enum
    }

    /// Base types, nearest first.
    fn base_types(&self, ty: TypeId) -> SmallVec<[TypeId; 4]> {
        let mut bases = SmallVec::new();
        let mut current = self.base_type(ty);
        while let Some(base) = current {
            if bases.len() >= MAX_BASE_DEPTH || bases.contains(&base) || base == ty {
                break;
            }
            bases.push(base);
            current = self.base_type(base);
        }
        bases
    }

    /// Interfaces declared on the type or any of its base types.
    fn all_interfaces(&self, ty: TypeId) -> Vec<TypeId> {
        let mut result: Vec<TypeId> = Vec::new();
        let chain = std::iter::once(ty).chain(self.base_types(ty));
        for owner in chain {
            for &iface in self.declared_interfaces(owner) {
                if !result.contains(&iface) {
                    result.push(iface);
                }
            }
        }
        result
    }

    /// Declared type of a field or property; `None` for anything else.
    fn member_type(&self, member: MemberId) -> Option<TypeId> {
        let info = self.member(member);
        if info.is_data_member() { info.ty } else { None }
    }

    fn member_name(&self, member: MemberId) -> &str {
        &self.member(member).name
    }
}
