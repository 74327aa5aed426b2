//! Skillbase - Type Definitions
//!
//! Shared types for the skill document registry.

use serde::{Deserialize, Serialize};

// ─── Documents ──────────────────────────────────────────────────

/// A single Markdown reference unit with structured metadata and a
/// free-text body. Immutable once loaded.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDocument {
    /// Unique name across the registry.
    pub name: String,
    /// Category tag, e.g. "devops" or "accessibility".
    pub domain: String,
    /// Free-text trigger/intent summary.
    pub description: String,
    /// Searchable keyword strings.
    pub tags: Vec<String>,
    /// Ordered pointers to sub-documents and external material.
    pub references: Vec<SkillReference>,
    /// Markdown payload after the frontmatter. Not parsed further.
    pub body: String,
    /// Source file this document was loaded from.
    pub path: String,
    /// RFC 3339 timestamp set once at load time.
    pub loaded_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillReference {
    pub name: String,
    /// A local relative path or an external URL. Never empty.
    pub locator: String,
    #[serde(default)]
    pub kind: ReferenceKind,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
    #[default]
    Local,
    Documentation,
    Repository,
}

/// Deserialized YAML frontmatter from a skill file.
///
/// Every field is optional at the wire level; the parser fills in the
/// documented defaults when building a [`SkillDocument`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillFrontmatter {
    pub name: Option<String>,
    pub domain: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub references: Vec<SkillReference>,
}

// ─── Query Results ──────────────────────────────────────────────

/// A scored query result from the relevance matcher.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkillMatch {
    pub name: String,
    pub score: u32,
}
