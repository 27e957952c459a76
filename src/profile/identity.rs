use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a profile: a `scope/name` pair (e.g. `communication/send-sms`).
///
/// Both segments are lowercase kebab-case. The same pair identifies the
/// compiled AST, the generated typing module, and the capability entry in
/// `grid/`, so validation is strict: a malformed id would scatter artifacts
/// across mismatched paths.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct ProfileId {
    pub scope: String,
    pub name: String,
}

impl ProfileId {
    pub fn new(scope: &str, name: &str) -> Result<Self> {
        validate_segment(scope, "scope")?;
        validate_segment(name, "profile name")?;
        Ok(Self {
            scope: scope.to_string(),
            name: name.to_string(),
        })
    }

    /// Parse a `scope/name` identifier.
    pub fn parse(value: &str) -> Result<Self> {
        let mut parts = value.splitn(2, '/');
        let scope = parts.next().unwrap_or_default();
        let Some(name) = parts.next() else {
            bail!("profile id '{value}' must have the form scope/name");
        };
        Self::new(scope, name)
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.scope, self.name)
    }
}

fn validate_segment(value: &str, label: &str) -> Result<()> {
    let mut chars = value.chars();
    let valid = matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid {
        bail!("{label} '{value}' must match ^[a-z][a-z0-9-]*$");
    }
    Ok(())
}

/// `send-sms` → `SendSms`. Used for exported TypeScript type names.
pub fn pascal_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut upper_next = true;
    for ch in value.chars() {
        if ch == '-' {
            upper_next = true;
            continue;
        }
        if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Pascal prefix shared by a profile's generated type names,
/// e.g. `CommunicationSendSms`.
pub fn type_prefix(id: &ProfileId) -> String {
    format!("{}{}", pascal_case(&id.scope), pascal_case(&id.name))
}

/// Camel-case module constant for a profile, e.g. `communicationSendSms`.
pub fn camel_ident(id: &ProfileId) -> String {
    let pascal = type_prefix(id);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => pascal,
    }
}
