//! Renders the per-profile TypeScript typing module.
//!
//! The renderer is a pure function of the compiled document: the same AST
//! always yields byte-identical text. Output shape matches what the aggregate
//! SDK module consumes: one interface (or type alias) per use-case slot, a
//! `typeHelper` map keyed by the profile id, and the `<Prefix>Profile` alias.

use crate::profile::{
    ProfileDocument, ProfileId, Structure, UseCaseDefinition, camel_ident, type_prefix,
};
use std::fmt::Write;

/// Render the typing module for one profile.
pub fn render_typings(id: &ProfileId, document: &ProfileDocument) -> String {
    let prefix = type_prefix(id);
    let ident = camel_ident(id);

    let mut declarations = String::new();
    let mut entries = String::new();

    for use_case in document.use_cases() {
        let input_ty = slot_type(
            &mut declarations,
            &prefix,
            use_case,
            SlotKind::Input,
        );
        let result_ty = slot_type(
            &mut declarations,
            &prefix,
            use_case,
            SlotKind::Result,
        );
        writeln!(
            entries,
            "    {}: typeHelper<{input_ty}, {result_ty}>(),",
            use_case.use_case_name
        )
        .expect("write to string");
    }

    let mut out = String::new();
    out.push_str("import { typeHelper } from '../../sdk';\n\n");
    out.push_str(&declarations);
    writeln!(out, "export const {ident} = {{").expect("write to string");
    writeln!(out, "  \"{id}\": {{").expect("write to string");
    out.push_str(&entries);
    out.push_str("  },\n};\n\n");
    writeln!(out, "export type {prefix}Profile = typeof {ident};").expect("write to string");
    out
}

#[derive(Clone, Copy)]
enum SlotKind {
    Input,
    Result,
}

impl SlotKind {
    fn suffix(self) -> &'static str {
        match self {
            SlotKind::Input => "Input",
            SlotKind::Result => "Result",
        }
    }
}

/// Emit a declaration for a slot when it has a structure, returning the type
/// expression to reference in the `typeHelper` entry. Slot-less use cases
/// stay `any`, matching the original generated modules.
fn slot_type(
    declarations: &mut String,
    prefix: &str,
    use_case: &UseCaseDefinition,
    kind: SlotKind,
) -> String {
    let slot = match kind {
        SlotKind::Input => use_case.input.as_ref(),
        SlotKind::Result => use_case.result.as_ref(),
    };
    let Some(structure) = slot.and_then(|slot| slot.value.as_ref()) else {
        return "any".to_string();
    };

    let type_name = format!("{prefix}{}{}", use_case.use_case_name, kind.suffix());
    match structure {
        Structure::Object { .. } => {
            let body = render_structure(structure, 0);
            declarations.push_str(&format!("export interface {type_name} {body}\n\n"));
        }
        _ => {
            let body = render_structure(structure, 0);
            declarations.push_str(&format!("export type {type_name} = {body};\n\n"));
        }
    }
    type_name
}

/// Render a structure node as a TypeScript type expression.
///
/// `indent` is the nesting depth of the surrounding object literal.
fn render_structure(structure: &Structure, indent: usize) -> String {
    match structure {
        Structure::Primitive { name } => primitive_name(name).to_string(),
        Structure::Object { fields } => {
            if fields.is_empty() {
                return "{}".to_string();
            }
            let pad = "  ".repeat(indent + 1);
            let mut out = String::from("{\n");
            for field in fields {
                let ty = field
                    .ty
                    .as_deref()
                    .map(|ty| render_structure(ty, indent + 1))
                    .unwrap_or_else(|| "any".to_string());
                let optional = if field_is_required(field) { "" } else { "?" };
                out.push_str(&format!("{pad}{}{optional}: {ty};\n", field.field_name));
            }
            out.push_str(&"  ".repeat(indent));
            out.push('}');
            out
        }
        Structure::List { element } => {
            let Some(element) = element.as_deref() else {
                return "any[]".to_string();
            };
            let inner = render_structure(element, indent);
            match element {
                Structure::Union { .. } | Structure::Enum { .. } => format!("({inner})[]"),
                _ => format!("{inner}[]"),
            }
        }
        Structure::Enum { values } => {
            if values.is_empty() {
                return "any".to_string();
            }
            values
                .iter()
                .map(|entry| match &entry.value {
                    serde_json::Value::String(text) => format!("'{text}'"),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(" | ")
        }
        Structure::NonNull { inner } => inner
            .as_deref()
            .map(|inner| render_structure(inner, indent))
            .unwrap_or_else(|| "any".to_string()),
        Structure::Union { types } => {
            if types.is_empty() {
                return "any".to_string();
            }
            types
                .iter()
                .map(|ty| render_structure(ty, indent))
                .collect::<Vec<_>>()
                .join(" | ")
        }
        Structure::Other => "any".to_string(),
    }
}

fn field_is_required(field: &crate::profile::FieldDefinition) -> bool {
    field.required || matches!(field.ty.as_deref(), Some(Structure::NonNull { .. }))
}

fn primitive_name(name: &str) -> &str {
    match name {
        "string" | "number" | "boolean" => name,
        _ => "any",
    }
}
