//! Handles and descriptors for types and members.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Handle to a type in a `TypeDatabase`.
///
/// The well-known special types occupy fixed slots in every `TypeTable`, so
/// they can be named without a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const OBJECT: Self = Self(0);
    pub const BOOLEAN: Self = Self(1);
    pub const CHAR: Self = Self(2);
    pub const SBYTE: Self = Self(3);
    pub const BYTE: Self = Self(4);
    pub const INT16: Self = Self(5);
    pub const UINT16: Self = Self(6);
    pub const INT32: Self = Self(7);
    pub const UINT32: Self = Self(8);
    pub const INT64: Self = Self(9);
    pub const UINT64: Self = Self(10);
    pub const DECIMAL: Self = Self(11);
    pub const SINGLE: Self = Self(12);
    pub const DOUBLE: Self = Self(13);
    pub const STRING: Self = Self(14);
    pub const DATE_TIME: Self = Self(15);
    pub const VOID: Self = Self(16);
    /// `System.ValueType`, the implicit base of structs and enums.
    pub const VALUE_TYPE: Self = Self(17);

    /// First id handed out to user-declared types.
    pub const FIRST_USER: u32 = 18;

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Handle to a field, property or method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MemberId(pub u32);

impl MemberId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Well-known types the compiler treats specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpecialType {
    None,
    Object,
    Boolean,
    Char,
    SByte,
    Byte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Decimal,
    Single,
    Double,
    String,
    /// Any instantiation of `Nullable<T>`.
    NullableT,
    DateTime,
    Void,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Class,
    Struct,
    Enum,
    Interface,
    TypeParameter,
}

impl TypeKind {
    /// Structs and enums have value semantics. Unconstrained type parameters
    /// are treated as `object`.
    pub const fn is_value_type(self) -> bool {
        matches!(self, Self::Struct | Self::Enum)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    #[default]
    Public,
    Protected,
    Internal,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    Field,
    Property,
    Method,
}

bitflags! {
    /// Declaration modifiers relevant to override detection.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MemberFlags: u8 {
        const STATIC = 1 << 0;
        const OVERRIDE = 1 << 1;
        const VIRTUAL = 1 << 2;
    }
}

/// Parameter and return types of a method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub parameters: Vec<TypeId>,
    pub return_type: TypeId,
}

impl MethodSignature {
    pub fn new(parameters: Vec<TypeId>, return_type: TypeId) -> Self {
        Self {
            parameters,
            return_type,
        }
    }
}

/// A declared member of a type.
#[derive(Debug, Clone)]
pub struct MemberInfo {
    pub name: String,
    pub kind: MemberKind,
    pub owner: TypeId,
    /// Field or property type. Always `None` for methods.
    pub ty: Option<TypeId>,
    pub accessibility: Accessibility,
    pub flags: MemberFlags,
    /// Present for methods only.
    pub signature: Option<MethodSignature>,
}

impl MemberInfo {
    /// Public instance field.
    pub fn field(owner: TypeId, name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Field,
            owner,
            ty: Some(ty),
            accessibility: Accessibility::Public,
            flags: MemberFlags::empty(),
            signature: None,
        }
    }

    /// Public instance property.
    pub fn property(owner: TypeId, name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            kind: MemberKind::Property,
            ..Self::field(owner, name, ty)
        }
    }

    /// Public instance method.
    pub fn method(owner: TypeId, name: impl Into<String>, signature: MethodSignature) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Method,
            owner,
            ty: None,
            accessibility: Accessibility::Public,
            flags: MemberFlags::empty(),
            signature: Some(signature),
        }
    }

    pub fn with_accessibility(mut self, accessibility: Accessibility) -> Self {
        self.accessibility = accessibility;
        self
    }

    pub fn with_flags(mut self, flags: MemberFlags) -> Self {
        self.flags = flags;
        self
    }

    #[inline]
    pub const fn is_static(&self) -> bool {
        self.flags.contains(MemberFlags::STATIC)
    }

    #[inline]
    pub const fn is_override(&self) -> bool {
        self.flags.contains(MemberFlags::OVERRIDE)
    }

    /// Fields and properties are the members an `Equals` body can compare.
    #[inline]
    pub const fn is_data_member(&self) -> bool {
        matches!(self.kind, MemberKind::Field | MemberKind::Property)
    }
}
