use anyhow::{Context, Result, bail};
use std::path::Path;
use tracing::{debug, info};

use crate::args::{CliArgs, OutputFormat};
use crate::report::StrategyReport;
use eqgen_emitter::{CsPrinter, EmitOptions, synthesize_equals};
use eqgen_model::{MemberId, TypeDatabase, TypeId, TypeTable};

/// Read and bind a JSON model file.
pub fn load_model(path: &Path) -> Result<TypeTable> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read model file {}", path.display()))?;
    let table = TypeTable::from_json(&text)
        .with_context(|| format!("failed to load model {}", path.display()))?;
    debug!(path = %path.display(), types = table.type_count(), "loaded model");
    Ok(table)
}

/// Resolve a user-declared type by name.
pub fn resolve_type(table: &TypeTable, name: &str) -> Result<TypeId> {
    let Some(ty) = table.lookup(name) else {
        let known: Vec<&str> = table.user_type_names().collect();
        if known.is_empty() {
            bail!("type '{name}' not found; the model declares no types");
        }
        bail!(
            "type '{name}' not found; declared types: {}",
            known.join(", ")
        );
    };
    if ty.0 < TypeId::FIRST_USER {
        bail!("'{name}' is a built-in type; only declared types can be generated");
    }
    Ok(ty)
}

/// The members to compare: the requested names in order, or every instance
/// field and property in declaration order.
pub fn select_members(
    table: &TypeTable,
    ty: TypeId,
    requested: Option<&[String]>,
) -> Result<Vec<MemberId>> {
    let Some(names) = requested else {
        return Ok(table
            .declared_members(ty)
            .iter()
            .copied()
            .filter(|&member| {
                let info = table.member(member);
                info.is_data_member() && !info.is_static()
            })
            .collect());
    };

    names
        .iter()
        .map(|name| {
            let member = table.lookup_member(ty, name).with_context(|| {
                format!(
                    "type '{}' has no member named '{name}'",
                    table.type_name(ty)
                )
            })?;
            let info = table.member(member);
            if !info.is_data_member() || info.is_static() {
                bail!(
                    "'{name}' on type '{}' is not an instance field or property",
                    table.type_name(ty)
                );
            }
            Ok(member)
        })
        .collect()
}

/// Run one generation and return what should be printed to stdout.
pub fn run(args: &CliArgs) -> Result<String> {
    let table = load_model(&args.model)?;
    let ty = resolve_type(&table, &args.type_name)?;
    let members = select_members(&table, ty, args.members.as_deref())?;
    info!(
        ty = %args.type_name,
        members = members.len(),
        format = ?args.format,
        "generating Equals"
    );

    let method = synthesize_equals(&table, ty, &members);
    match args.format {
        OutputFormat::Text => {
            let options = EmitOptions {
                qualify_this: args.qualify_this,
            };
            Ok(CsPrinter::method_to_string(&method, &table, options))
        }
        OutputFormat::Json => {
            let report = StrategyReport::from_plan(&table, &method.plan);
            serde_json::to_string_pretty(&report).context("failed to serialize strategy report")
        }
    }
}
