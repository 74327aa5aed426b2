//! Document Store
//!
//! Discovers `.md` skill documents under a root directory and holds the
//! immutable in-memory catalog, keyed by name in traversal order.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::SKILL_FILE_EXTENSION;
use crate::error::RegistryError;
use crate::format::parse_skill_md;
use crate::types::SkillDocument;

/// In-memory mapping from name to document, populated once via [`load`].
///
/// Iteration order is directory traversal order, which is not guaranteed
/// stable across filesystems; callers needing determinism must sort.
///
/// [`load`]: DocumentStore::load
#[derive(Debug)]
pub struct DocumentStore {
    docs: Vec<SkillDocument>,
    index: HashMap<String, usize>,
}

impl DocumentStore {
    /// Walk the directory tree under `root` and parse every eligible file.
    ///
    /// A document that fails to parse (or read) is logged and skipped; it
    /// never aborts the load. Only a missing or unreadable root is fatal.
    pub fn load(root: &Path) -> Result<Self, RegistryError> {
        if !root.is_dir() {
            return Err(RegistryError::RootNotFound(root.to_path_buf()));
        }

        let mut store = Self {
            docs: Vec::new(),
            index: HashMap::new(),
        };
        let mut skipped = 0usize;
        let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let entries = match fs::read_dir(&dir) {
                Ok(e) => e,
                Err(e) => {
                    if dir == root {
                        return Err(RegistryError::Io { path: dir, source: e });
                    }
                    warn!("Skipping unreadable directory {}: {}", dir.display(), e);
                    continue;
                }
            };

            for entry in entries.flatten() {
                let path = entry.path();

                let hidden = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| n.starts_with('.'))
                    .unwrap_or(false);
                if hidden {
                    continue;
                }

                if path.is_dir() {
                    pending.push(path);
                    continue;
                }

                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
                if ext != SKILL_FILE_EXTENSION {
                    continue;
                }

                let content = match fs::read_to_string(&path) {
                    Ok(c) => c,
                    Err(e) => {
                        warn!("Skipping unreadable file {}: {}", path.display(), e);
                        skipped += 1;
                        continue;
                    }
                };

                match parse_skill_md(&content, &path.to_string_lossy()) {
                    Ok(doc) => store.insert(doc),
                    Err(e) => {
                        warn!("Skipping {}: {}", path.display(), e);
                        skipped += 1;
                    }
                }
            }
        }

        info!(
            "Loaded {} skill documents from {} ({} skipped)",
            store.docs.len(),
            root.display(),
            skipped
        );
        Ok(store)
    }

    /// Insert a document, replacing any existing entry with the same name.
    ///
    /// Later documents win; the replaced entry keeps its position in
    /// insertion order.
    fn insert(&mut self, doc: SkillDocument) {
        if doc.tags.is_empty() {
            warn!(
                "Skill '{}' declares no tags; it will only match on its description",
                doc.name
            );
        }

        match self.index.get(&doc.name) {
            Some(&i) => {
                warn!(
                    "Duplicate skill name '{}': {} replaces {}",
                    doc.name, doc.path, self.docs[i].path
                );
                self.docs[i] = doc;
            }
            None => {
                debug!("Registered skill '{}' from {}", doc.name, doc.path);
                self.index.insert(doc.name.clone(), self.docs.len());
                self.docs.push(doc);
            }
        }
    }

    /// Look up a document by name. A miss is a normal negative result.
    pub fn get(&self, name: &str) -> Option<&SkillDocument> {
        self.index.get(name).map(|&i| &self.docs[i])
    }

    /// All documents in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SkillDocument> {
        self.docs.iter()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
