//! Skill Format Parser
//!
//! Parses `.md` skill files that use YAML frontmatter for metadata and a
//! Markdown body for the reference content itself.
//!
//! Expected format:
//! ```text
//! ---
//! name: docker
//! domain: devops
//! description: Containerization best practices
//! tags: [containers, devops]
//! references:
//!   - name: multi-stage-builds
//!     locator: references/multi-stage-builds.md
//!     kind: local
//! ---
//!
//! Reference content goes here in Markdown...
//! ```

use std::path::Path;

use chrono::Utc;
use yaml_rust2::{Yaml, YamlLoader};

use crate::config::FRONTMATTER_DELIMITER;
use crate::error::ParseError;
use crate::types::{SkillDocument, SkillFrontmatter};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parse a complete skill markdown file into a [`SkillDocument`].
///
/// Pure function over text; the only I/O-adjacent input is `file_path`,
/// used to derive a fallback name and recorded on the document.
pub fn parse_skill_md(content: &str, file_path: &str) -> Result<SkillDocument, ParseError> {
    let (header, body) = split_frontmatter(content)?;
    let frontmatter = parse_header(header)?;

    for reference in &frontmatter.references {
        if reference.locator.trim().is_empty() {
            return Err(ParseError::EmptyLocator(reference.name.clone()));
        }
    }

    let name = frontmatter
        .name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| extract_name_from_path(file_path));

    Ok(SkillDocument {
        name,
        domain: frontmatter.domain.unwrap_or_else(|| "general".to_string()),
        description: frontmatter.description.unwrap_or_default(),
        tags: frontmatter.tags,
        references: frontmatter.references,
        body: body.to_string(),
        path: file_path.to_string(),
        loaded_at: Utc::now().to_rfc3339(),
    })
}

/// Derive a skill name from the file path by taking the file stem.
///
/// `/path/to/my-skill.md` => `"my-skill"`
pub fn extract_name_from_path(file_path: &str) -> String {
    Path::new(file_path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string()
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Split raw content into the YAML header block and the Markdown body.
///
/// The frontmatter must open on the first non-blank line and be closed by
/// a second delimiter line.
fn split_frontmatter(content: &str) -> Result<(&str, &str), ParseError> {
    let trimmed = content.trim_start();

    let after_open = trimmed
        .strip_prefix(FRONTMATTER_DELIMITER)
        .ok_or(ParseError::MissingFrontmatter)?;

    // The opening delimiter must be a line of its own, not e.g. "----".
    if !(after_open.is_empty() || after_open.starts_with('\n') || after_open.starts_with("\r\n")) {
        return Err(ParseError::MissingFrontmatter);
    }

    let close_idx = after_open
        .find("\n---")
        .ok_or(ParseError::UnterminatedFrontmatter)?;

    let header = &after_open[..close_idx];
    let after_close = &after_open[close_idx + 4..];

    // Skip the remainder of the closing line plus leading blank lines.
    let body = match after_close.find('\n') {
        Some(nl) => after_close[nl + 1..].trim_start_matches('\n'),
        None => "",
    };

    Ok((header, body))
}

/// Parse the YAML header block into a [`SkillFrontmatter`].
///
/// Parses with yaml-rust2, converts the document into a `serde_json::Value`
/// intermediate, then deserializes with serde. This avoids needing a full
/// serde_yaml crate while still handling nested sequences and mappings
/// (the `references` list).
fn parse_header(header: &str) -> Result<SkillFrontmatter, ParseError> {
    let docs = YamlLoader::load_from_str(header)
        .map_err(|e| ParseError::InvalidHeader(e.to_string()))?;

    let doc = match docs.first() {
        Some(d) => d,
        // An empty block between delimiters: all fields take defaults.
        None => return Ok(SkillFrontmatter::default()),
    };

    if !matches!(doc, Yaml::Hash(_)) {
        return Err(ParseError::NotAMapping);
    }

    let json = yaml_to_json(doc);
    serde_json::from_value(json).map_err(|e| ParseError::InvalidHeader(e.to_string()))
}

/// Convert a parsed YAML node into a JSON value, recursively.
fn yaml_to_json(yaml: &Yaml) -> serde_json::Value {
    use serde_json::Value;

    match yaml {
        Yaml::Null | Yaml::BadValue | Yaml::Alias(_) => Value::Null,
        Yaml::Boolean(b) => Value::Bool(*b),
        Yaml::Integer(i) => Value::Number((*i).into()),
        Yaml::Real(r) => r
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(r.clone())),
        Yaml::String(s) => Value::String(s.clone()),
        Yaml::Array(items) => Value::Array(items.iter().map(yaml_to_json).collect()),
        Yaml::Hash(hash) => {
            let mut map = serde_json::Map::with_capacity(hash.len());
            for (key, value) in hash.iter() {
                if let Some(key) = key.as_str() {
                    map.insert(key.to_string(), yaml_to_json(value));
                }
            }
            Value::Object(map)
        }
    }
}
