//! Per-scope export index (`index.d.ts`) for generated typings.
//!
//! The index is parsed into a set of profile names rather than scanned as
//! text, so a profile whose name is a substring of another export line is
//! still appended. Lines the parser does not recognize are preserved verbatim
//! when the file is rewritten.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// One export line per generated profile, in generation order.
#[derive(Debug, Default)]
pub struct TypeIndex {
    lines: Vec<String>,
    names: BTreeSet<String>,
}

/// The export line appended to a scope index for one profile.
pub fn export_line(profile: &str) -> String {
    format!("export * from \"./{profile}\";")
}

impl TypeIndex {
    /// Parse existing index text.
    pub fn parse(text: &str) -> Self {
        let mut index = Self::default();
        for line in text.lines() {
            if let Some(name) = parse_export_line(line) {
                index.names.insert(name);
            }
            index.lines.push(line.to_string());
        }
        index
    }

    /// Read the index from disk, or start empty when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading type index {}", path.display()))?;
        Ok(Self::parse(&text))
    }

    /// Append an export for `profile` unless one is already present.
    ///
    /// Returns true when the index changed and needs rewriting.
    pub fn insert(&mut self, profile: &str) -> bool {
        if self.names.contains(profile) {
            return false;
        }
        self.lines.push(export_line(profile));
        self.names.insert(profile.to_string());
        true
    }

    pub fn contains(&self, profile: &str) -> bool {
        self.names.contains(profile)
    }

    /// Exported profile names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Render the full index text for rewriting the file.
    pub fn render(&self) -> String {
        if self.lines.is_empty() {
            return String::new();
        }
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }
}

fn parse_export_line(line: &str) -> Option<String> {
    let rest = line.trim().strip_prefix("export * from \"./")?;
    let name = rest.strip_suffix("\";")?;
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_in_generation_order_without_duplicates() {
        let mut index = TypeIndex::default();
        assert!(index.insert("send-sms"));
        assert!(index.insert("send-email"));
        assert!(!index.insert("send-sms"));
        assert_eq!(
            index.render(),
            "export * from \"./send-sms\";\nexport * from \"./send-email\";\n"
        );
    }

    #[test]
    fn substring_names_are_distinct_entries() {
        // "sms" occurs inside the send-sms export line; membership is over
        // parsed names, so it must still be appended.
        let mut index = TypeIndex::parse("export * from \"./send-sms\";\n");
        assert!(!index.contains("sms"));
        assert!(index.insert("sms"));
        assert_eq!(
            index.render(),
            "export * from \"./send-sms\";\nexport * from \"./sms\";\n"
        );
    }

    #[test]
    fn unrecognized_lines_survive_a_rewrite() {
        let original = "// hand-written note\nexport * from \"./send-sms\";\n";
        let mut index = TypeIndex::parse(original);
        assert!(index.insert("send-email"));
        assert_eq!(
            index.render(),
            "// hand-written note\nexport * from \"./send-sms\";\nexport * from \"./send-email\";\n"
        );
    }

    #[test]
    fn parse_round_trips_render() {
        let text = "export * from \"./a\";\nexport * from \"./b\";\n";
        let index = TypeIndex::parse(text);
        assert_eq!(index.render(), text);
        assert_eq!(index.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
