//! Skill Registry
//!
//! Composition root for the crate: builds the document store from a root
//! directory, then exposes name lookup, relevance search, and prompt-ready
//! rendering over the immutable catalog.

use std::path::Path;

use tracing::info;

use crate::config::resolve_path;
use crate::error::RegistryError;
use crate::matcher;
use crate::store::DocumentStore;
use crate::types::{SkillDocument, SkillMatch};

/// The read-only catalog of loaded skill documents.
///
/// A value of this type is always ready to query: construction via
/// [`initialize`] either succeeds with a populated store or fails, so no
/// pre-initialization state is representable. There is no
/// re-initialization; build a new instance instead. Since nothing mutates
/// after construction, a registry may be shared across threads freely.
///
/// [`initialize`]: SkillRegistry::initialize
#[derive(Debug)]
pub struct SkillRegistry {
    store: DocumentStore,
}

impl SkillRegistry {
    /// Build a registry from the skill documents under `root`.
    ///
    /// `root` may start with `~`. Fails if the root is missing or yields
    /// zero valid documents; individual malformed documents are skipped
    /// by the store and do not fail initialization.
    pub fn initialize(root: &str) -> Result<Self, RegistryError> {
        let resolved = resolve_path(root);
        let root_path = Path::new(&resolved);

        let store = DocumentStore::load(root_path)?;
        if store.is_empty() {
            return Err(RegistryError::NoValidDocuments(root_path.to_path_buf()));
        }

        info!("Skill registry ready with {} documents", store.len());
        Ok(Self { store })
    }

    /// Rank all documents against a free-text query.
    ///
    /// An empty result means nothing matched; it is not an error.
    pub fn find(&self, query: &str) -> Vec<SkillMatch> {
        matcher::rank(query, self.store.iter())
    }

    /// Direct lookup by unique name.
    pub fn get_by_name(&self, name: &str) -> Option<&SkillDocument> {
        self.store.get(name)
    }

    /// All documents in traversal order. Callers needing an order that is
    /// stable across filesystems must sort explicitly.
    pub fn list(&self) -> impl Iterator<Item = &SkillDocument> {
        self.store.iter()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Render the top `limit` matches for `query` as combined instructions.
    ///
    /// Empty when nothing matches.
    pub fn instructions_for(&self, query: &str, limit: usize) -> String {
        let matches = self.find(query);
        let docs = matches
            .iter()
            .take(limit)
            .filter_map(|m| self.get_by_name(&m.name));
        compose_instructions(docs)
    }
}

/// Build a combined instruction string from skill documents, suitable for
/// injection into an agent's system prompt.
pub fn compose_instructions<'a>(docs: impl IntoIterator<Item = &'a SkillDocument>) -> String {
    let mut sections: Vec<String> = Vec::new();

    for doc in docs {
        let body = doc.body.trim();
        if body.is_empty() {
            continue;
        }
        sections.push(format!("## Skill: {}\n\n{}", doc.name, body));
    }

    sections.join("\n\n---\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn seed_registry() -> (TempDir, SkillRegistry) {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("docker.md"),
            "---\nname: docker\ndomain: devops\ndescription: Containerization best practices\ntags: [containers, devops]\n---\n\nPrefer multi-stage builds.\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("ci-cd.md"),
            "---\nname: ci-cd\ndomain: devops\ndescription: Continuous integration and delivery\ntags: [pipelines, devops]\n---\n\nKeep pipelines fast.\n",
        )
        .unwrap();

        let registry = SkillRegistry::initialize(&temp.path().to_string_lossy()).unwrap();
        (temp, registry)
    }

    #[test]
    fn test_initialize_missing_root() {
        let err = SkillRegistry::initialize("/definitely/not/a/real/dir").unwrap_err();
        assert!(matches!(err, RegistryError::RootNotFound(_)));
    }

    #[test]
    fn test_initialize_requires_valid_documents() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("broken.md"), "no frontmatter").unwrap();

        let err = SkillRegistry::initialize(&temp.path().to_string_lossy()).unwrap_err();
        assert!(matches!(err, RegistryError::NoValidDocuments(_)));
    }

    #[test]
    fn test_find_ranks_by_overlap() {
        let (_temp, registry) = seed_registry();

        let matches = registry.find("devops pipeline");
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].name, "ci-cd");
        assert_eq!(matches[1].name, "docker");

        assert!(registry.find("graphics").is_empty());
    }

    #[test]
    fn test_get_by_name() {
        let (_temp, registry) = seed_registry();

        let doc = registry.get_by_name("docker").unwrap();
        assert_eq!(doc.domain, "devops");
        assert!(registry.get_by_name("graphics").is_none());

        // Repeated lookups return the same loaded value.
        let again = registry.get_by_name("docker").unwrap();
        assert_eq!(doc.loaded_at, again.loaded_at);
        assert_eq!(doc.body, again.body);
    }

    #[test]
    fn test_list_returns_all_loaded_documents() {
        let (_temp, registry) = seed_registry();

        let mut names: Vec<&str> = registry.list().map(|d| d.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["ci-cd", "docker"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_instructions_for_renders_sections() {
        let (_temp, registry) = seed_registry();

        let rendered = registry.instructions_for("devops pipeline", 1);
        assert!(rendered.starts_with("## Skill: ci-cd"));
        assert!(rendered.contains("Keep pipelines fast."));
        assert!(!rendered.contains("## Skill: docker"));

        assert!(registry.instructions_for("graphics", 3).is_empty());
    }

    #[test]
    fn test_compose_instructions_skips_empty_bodies() {
        let (_temp, registry) = seed_registry();

        let mut empty_body = registry.get_by_name("docker").unwrap().clone();
        empty_body.body = "   \n".to_string();
        assert!(compose_instructions([&empty_body]).is_empty());

        let full = registry.get_by_name("ci-cd").unwrap();
        let rendered = compose_instructions([full, &empty_body]);
        assert_eq!(rendered, "## Skill: ci-cd\n\nKeep pipelines fast.");
    }
}
