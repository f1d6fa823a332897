//! JSON model files.
//!
//! A model file lists user types with their base type, implemented interfaces
//! and ordered members. Type references are written the way they read in
//! source: `int`, `string`, `DateTime`, `Money?`, `IEquatable<Money>`.
//!
//! ```json
//! {
//!   "types": [
//!     { "name": "Money", "kind": "struct", "interfaces": ["IEquatable<Money>"],
//!       "members": [{ "name": "Amount", "kind": "field", "type": "decimal" }] }
//!   ]
//! }
//! ```

use crate::db::TypeDatabase;
use crate::table::TypeTable;
use crate::types::{
    Accessibility, MemberFlags, MemberInfo, MemberKind, MethodSignature, TypeId, TypeKind,
};
use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelFile {
    /// Whether `IEquatable<T>` exists in the modelled framework.
    #[serde(default = "default_true")]
    pub equatable: bool,
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDecl {
    pub name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub members: Vec<MemberDecl>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberDecl {
    pub name: String,
    pub kind: MemberKind,
    /// Field or property type. May be omitted, in which case the member has
    /// no resolved type.
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
    #[serde(default)]
    pub parameters: Vec<String>,
    #[serde(default)]
    pub returns: Option<String>,
    #[serde(default)]
    pub accessibility: Accessibility,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, rename = "override")]
    pub is_override: bool,
    #[serde(default, rename = "virtual")]
    pub is_virtual: bool,
}

const fn default_true() -> bool {
    true
}

/// Framework names accepted alongside the C# keywords.
fn framework_alias(name: &str) -> Option<TypeId> {
    let id = match name.strip_prefix("System.").unwrap_or(name) {
        "Object" => TypeId::OBJECT,
        "Boolean" => TypeId::BOOLEAN,
        "Char" => TypeId::CHAR,
        "SByte" => TypeId::SBYTE,
        "Byte" => TypeId::BYTE,
        "Int16" => TypeId::INT16,
        "UInt16" => TypeId::UINT16,
        "Int32" => TypeId::INT32,
        "UInt32" => TypeId::UINT32,
        "Int64" => TypeId::INT64,
        "UInt64" => TypeId::UINT64,
        "Decimal" => TypeId::DECIMAL,
        "Single" => TypeId::SINGLE,
        "Double" => TypeId::DOUBLE,
        "String" => TypeId::STRING,
        "DateTime" => TypeId::DATE_TIME,
        "Void" => TypeId::VOID,
        _ => return None,
    };
    Some(id)
}

fn generic_argument<'a>(name: &'a str, definition: &str) -> Option<&'a str> {
    name.strip_prefix(definition)?
        .strip_prefix('<')?
        .strip_suffix('>')
        .map(str::trim)
}

/// Resolve a type reference, constructing generic instantiations on demand.
fn resolve(table: &mut TypeTable, reference: &str) -> Result<TypeId> {
    let reference = reference.trim();
    if let Some(inner) = reference.strip_suffix('?') {
        let inner = resolve(table, inner)?;
        // On a reference type `?` is only a nullability annotation.
        if !table.is_value_type(inner) {
            return Ok(inner);
        }
        return Ok(table.nullable(inner));
    }
    if let Some(inner_name) = generic_argument(reference, "Nullable") {
        let inner = resolve(table, inner_name)?;
        if !table.is_value_type(inner) {
            bail!("'{reference}' is invalid: '{inner_name}' is not a value type");
        }
        return Ok(table.nullable(inner));
    }
    if let Some(inner) = generic_argument(reference, "IEquatable") {
        let inner = resolve(table, inner)?;
        return table
            .equatable(inner)
            .ok_or_else(|| anyhow!("'{reference}' used but the model has no IEquatable<T>"));
    }
    table
        .lookup(reference)
        .or_else(|| framework_alias(reference))
        .ok_or_else(|| anyhow!("unknown type '{reference}'"))
}

impl ModelFile {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("failed to parse model file")
    }

    /// Bind the declarations into a `TypeTable`.
    ///
    /// Types are declared first so members and bases may refer to types
    /// declared later in the file.
    pub fn into_table(self) -> Result<TypeTable> {
        let mut table = TypeTable::new();
        if !self.equatable {
            table = table.without_equatable();
        }

        let mut declared = Vec::with_capacity(self.types.len());
        for decl in &self.types {
            if decl.name.trim().is_empty() {
                bail!("type declarations must have a name");
            }
            if table.lookup(&decl.name).is_some() || framework_alias(&decl.name).is_some() {
                bail!("type '{}' is declared more than once", decl.name);
            }
            declared.push(table.add_type(decl.name.clone(), decl.kind));
        }

        for (decl, &id) in self.types.iter().zip(&declared) {
            bind_type(&mut table, decl, id)
                .with_context(|| format!("in declaration of type '{}'", decl.name))?;
        }

        debug!(types = declared.len(), "loaded type model");
        Ok(table)
    }
}

fn bind_type(table: &mut TypeTable, decl: &TypeDecl, id: TypeId) -> Result<()> {
    if let Some(base) = &decl.base {
        let base_id = resolve(table, base).context("unknown base type")?;
        if base_id == id {
            bail!("type cannot be its own base");
        }
        table.set_base(id, base_id);
    }

    for iface in &decl.interfaces {
        let iface_id = resolve(table, iface)?;
        table.add_interface_impl(id, iface_id);
    }

    for member in &decl.members {
        let info = bind_member(table, member, id)
            .with_context(|| format!("in member '{}'", member.name))?;
        table.add_member(info);
    }
    Ok(())
}

fn bind_member(table: &mut TypeTable, decl: &MemberDecl, owner: TypeId) -> Result<MemberInfo> {
    let mut flags = MemberFlags::empty();
    flags.set(MemberFlags::STATIC, decl.is_static);
    flags.set(MemberFlags::OVERRIDE, decl.is_override);
    flags.set(MemberFlags::VIRTUAL, decl.is_virtual);

    let mut info = match decl.kind {
        MemberKind::Field | MemberKind::Property => {
            let ty = decl
                .ty
                .as_deref()
                .map(|reference| resolve(table, reference))
                .transpose()?;
            if ty.is_none() {
                debug!(member = %decl.name, "member declared without a type");
            }
            MemberInfo {
                ty,
                ..MemberInfo::field(owner, decl.name.clone(), TypeId::OBJECT)
            }
        }
        MemberKind::Method => {
            let parameters = decl
                .parameters
                .iter()
                .map(|p| resolve(table, p))
                .collect::<Result<Vec<_>>>()?;
            let return_type = match &decl.returns {
                Some(reference) => resolve(table, reference)?,
                None => TypeId::VOID,
            };
            MemberInfo::method(
                owner,
                decl.name.clone(),
                MethodSignature::new(parameters, return_type),
            )
        }
    };
    info.kind = decl.kind;
    info.accessibility = decl.accessibility;
    info.flags = flags;
    Ok(info)
}

impl TypeTable {
    /// Parse and bind a JSON model file.
    pub fn from_json(text: &str) -> Result<Self> {
        ModelFile::from_json(text)?.into_table()
    }
}
