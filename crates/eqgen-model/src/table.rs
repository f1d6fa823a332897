//! In-memory type model.
//!
//! `TypeTable` owns every type and member in flat arrays indexed by
//! `TypeId`/`MemberId`. Generic instantiations (`Nullable<T>`, `IEquatable<T>`)
//! are interned, so constructing the same instantiation twice yields the same
//! id and containment checks reduce to id comparison.

use crate::db::TypeDatabase;
use crate::types::{
    Accessibility, MemberFlags, MemberId, MemberInfo, MethodSignature, SpecialType, TypeId,
    TypeKind,
};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::trace;

#[derive(Debug, Clone)]
struct TypeEntry {
    name: String,
    kind: TypeKind,
    special: SpecialType,
    base: Option<TypeId>,
    interfaces: SmallVec<[TypeId; 2]>,
    members: Vec<MemberId>,
    members_by_name: FxHashMap<String, SmallVec<[MemberId; 1]>>,
}

impl TypeEntry {
    fn new(name: String, kind: TypeKind, special: SpecialType, base: Option<TypeId>) -> Self {
        Self {
            name,
            kind,
            special,
            base,
            interfaces: SmallVec::new(),
            members: Vec::new(),
            members_by_name: FxHashMap::default(),
        }
    }
}

/// Well-known types in `TypeId` slot order.
const SPECIAL_TYPES: [(&str, SpecialType, TypeKind); 18] = [
    ("object", SpecialType::Object, TypeKind::Class),
    ("bool", SpecialType::Boolean, TypeKind::Struct),
    ("char", SpecialType::Char, TypeKind::Struct),
    ("sbyte", SpecialType::SByte, TypeKind::Struct),
    ("byte", SpecialType::Byte, TypeKind::Struct),
    ("short", SpecialType::Int16, TypeKind::Struct),
    ("ushort", SpecialType::UInt16, TypeKind::Struct),
    ("int", SpecialType::Int32, TypeKind::Struct),
    ("uint", SpecialType::UInt32, TypeKind::Struct),
    ("long", SpecialType::Int64, TypeKind::Struct),
    ("ulong", SpecialType::UInt64, TypeKind::Struct),
    ("decimal", SpecialType::Decimal, TypeKind::Struct),
    ("float", SpecialType::Single, TypeKind::Struct),
    ("double", SpecialType::Double, TypeKind::Struct),
    ("string", SpecialType::String, TypeKind::Class),
    ("DateTime", SpecialType::DateTime, TypeKind::Struct),
    ("void", SpecialType::Void, TypeKind::Struct),
    ("ValueType", SpecialType::None, TypeKind::Class),
];

/// Owned, immutable-after-construction type graph.
#[derive(Debug, Clone)]
pub struct TypeTable {
    types: Vec<TypeEntry>,
    members: Vec<MemberInfo>,
    by_name: IndexMap<String, TypeId>,
    nullable_instances: FxHashMap<TypeId, TypeId>,
    equatable_instances: FxHashMap<TypeId, TypeId>,
    equatable_available: bool,
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeTable {
    /// Create a table holding the well-known types, `object.Equals(object)`
    /// and its `ValueType` override.
    pub fn new() -> Self {
        let mut table = Self {
            types: Vec::with_capacity(SPECIAL_TYPES.len()),
            members: Vec::new(),
            by_name: IndexMap::new(),
            nullable_instances: FxHashMap::default(),
            equatable_instances: FxHashMap::default(),
            equatable_available: true,
        };

        for (name, special, kind) in SPECIAL_TYPES {
            let base = match kind {
                _ if special == SpecialType::Object => None,
                TypeKind::Struct => Some(TypeId::VALUE_TYPE),
                _ => Some(TypeId::OBJECT),
            };
            table.push_named_type(name.to_string(), kind, special, base);
        }
        debug_assert_eq!(table.types.len() as u32, TypeId::FIRST_USER);

        let equals = MethodSignature::new(vec![TypeId::OBJECT], TypeId::BOOLEAN);
        table.add_member(
            MemberInfo::method(TypeId::OBJECT, "Equals", equals.clone())
                .with_flags(MemberFlags::VIRTUAL),
        );
        table.add_member(
            MemberInfo::method(TypeId::VALUE_TYPE, "Equals", equals)
                .with_flags(MemberFlags::OVERRIDE),
        );

        table
    }

    /// Drop the `IEquatable<T>` definition from the model. Existing
    /// instantiations stay, but no new ones can be constructed.
    pub fn without_equatable(mut self) -> Self {
        self.equatable_available = false;
        self
    }

    fn push_type(
        &mut self,
        name: String,
        kind: TypeKind,
        special: SpecialType,
        base: Option<TypeId>,
    ) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(TypeEntry::new(name, kind, special, base));
        id
    }

    fn push_named_type(
        &mut self,
        name: String,
        kind: TypeKind,
        special: SpecialType,
        base: Option<TypeId>,
    ) -> TypeId {
        let id = self.push_type(name.clone(), kind, special, base);
        self.by_name.entry(name).or_insert(id);
        id
    }

    /// Declare a user type. Classes default to `object` as their base, structs
    /// and enums to `ValueType`. When the name is already taken the earlier
    /// declaration keeps the name lookup.
    pub fn add_type(&mut self, name: impl Into<String>, kind: TypeKind) -> TypeId {
        let base = match kind {
            TypeKind::Class => Some(TypeId::OBJECT),
            TypeKind::Struct | TypeKind::Enum => Some(TypeId::VALUE_TYPE),
            TypeKind::Interface | TypeKind::TypeParameter => None,
        };
        let id = self.push_named_type(name.into(), kind, SpecialType::None, base);
        trace!(?id, ?kind, "declared type");
        id
    }

    pub fn add_class(&mut self, name: impl Into<String>) -> TypeId {
        self.add_type(name, TypeKind::Class)
    }

    pub fn add_struct(&mut self, name: impl Into<String>) -> TypeId {
        self.add_type(name, TypeKind::Struct)
    }

    pub fn add_enum(&mut self, name: impl Into<String>) -> TypeId {
        self.add_type(name, TypeKind::Enum)
    }

    pub fn set_base(&mut self, ty: TypeId, base: TypeId) {
        self.types[ty.index()].base = Some(base);
    }

    pub fn add_interface_impl(&mut self, ty: TypeId, iface: TypeId) {
        let interfaces = &mut self.types[ty.index()].interfaces;
        if !interfaces.contains(&iface) {
            interfaces.push(iface);
        }
    }

    pub fn add_member(&mut self, info: MemberInfo) -> MemberId {
        let id = MemberId(self.members.len() as u32);
        let owner = &mut self.types[info.owner.index()];
        owner.members.push(id);
        owner
            .members_by_name
            .entry(info.name.clone())
            .or_default()
            .push(id);
        self.members.push(info);
        id
    }

    /// Add a public instance field.
    pub fn add_field(&mut self, owner: TypeId, name: impl Into<String>, ty: TypeId) -> MemberId {
        self.add_member(MemberInfo::field(owner, name, ty))
    }

    /// Add a public instance property.
    pub fn add_property(&mut self, owner: TypeId, name: impl Into<String>, ty: TypeId) -> MemberId {
        self.add_member(MemberInfo::property(owner, name, ty))
    }

    /// Add a method with explicit accessibility and modifiers.
    pub fn add_method(
        &mut self,
        owner: TypeId,
        name: impl Into<String>,
        signature: MethodSignature,
        accessibility: Accessibility,
        flags: MemberFlags,
    ) -> MemberId {
        self.add_member(
            MemberInfo::method(owner, name, signature)
                .with_accessibility(accessibility)
                .with_flags(flags),
        )
    }

    /// Add `public override bool Equals(object)` to `owner`.
    pub fn add_equals_override(&mut self, owner: TypeId) -> MemberId {
        self.add_method(
            owner,
            "Equals",
            MethodSignature::new(vec![TypeId::OBJECT], TypeId::BOOLEAN),
            Accessibility::Public,
            MemberFlags::OVERRIDE,
        )
    }

    /// Intern `Nullable<of>`.
    pub fn nullable(&mut self, of: TypeId) -> TypeId {
        if let Some(&existing) = self.nullable_instances.get(&of) {
            return existing;
        }
        let name = format!("{}?", self.types[of.index()].name);
        let id = self.push_type(
            name,
            TypeKind::Struct,
            SpecialType::NullableT,
            Some(TypeId::VALUE_TYPE),
        );
        self.nullable_instances.insert(of, id);
        id
    }

    /// Intern `IEquatable<of>`. `None` when the model has no `IEquatable<T>`.
    pub fn equatable(&mut self, of: TypeId) -> Option<TypeId> {
        if let Some(&existing) = self.equatable_instances.get(&of) {
            return Some(existing);
        }
        if !self.equatable_available {
            return None;
        }
        let name = format!("IEquatable<{}>", self.types[of.index()].name);
        let id = self.push_type(name, TypeKind::Interface, SpecialType::None, None);
        self.equatable_instances.insert(of, id);
        Some(id)
    }

    /// Look a type up by its display name.
    pub fn lookup(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    /// Find a member of `ty` by name, fields and properties first.
    pub fn lookup_member(&self, ty: TypeId, name: &str) -> Option<MemberId> {
        let candidates = self.members_named(ty, name);
        candidates
            .iter()
            .copied()
            .find(|&m| self.members[m.index()].is_data_member())
            .or_else(|| candidates.first().copied())
    }

    /// User-declared type names in declaration order. Generic instantiations
    /// are not named types.
    pub fn user_type_names(&self) -> impl Iterator<Item = &str> {
        self.by_name
            .iter()
            .filter(|(_, id)| id.0 >= TypeId::FIRST_USER)
            .map(|(name, _)| name.as_str())
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }
}

impl TypeDatabase for TypeTable {
    fn type_name(&self, ty: TypeId) -> &str {
        &self.types[ty.index()].name
    }

    fn type_kind(&self, ty: TypeId) -> TypeKind {
        self.types[ty.index()].kind
    }

    fn special_type(&self, ty: TypeId) -> SpecialType {
        self.types[ty.index()].special
    }

    fn base_type(&self, ty: TypeId) -> Option<TypeId> {
        self.types[ty.index()].base
    }

    fn declared_interfaces(&self, ty: TypeId) -> &[TypeId] {
        &self.types[ty.index()].interfaces
    }

    fn declared_members(&self, ty: TypeId) -> &[MemberId] {
        &self.types[ty.index()].members
    }

    fn members_named(&self, ty: TypeId, name: &str) -> &[MemberId] {
        self.types[ty.index()]
            .members_by_name
            .get(name)
            .map(|ids| ids.as_slice())
            .unwrap_or(&[])
    }

    fn member(&self, member: MemberId) -> &MemberInfo {
        &self.members[member.index()]
    }

    fn object_type(&self) -> TypeId {
        TypeId::OBJECT
    }

    fn boolean_type(&self) -> TypeId {
        TypeId::BOOLEAN
    }

    fn equatable_of(&self, ty: TypeId) -> Option<TypeId> {
        self.equatable_instances.get(&ty).copied()
    }
}
