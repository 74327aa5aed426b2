//! Error Taxonomy
//!
//! Per-document parse failures are recovered locally by the store (the
//! document is skipped, the load continues). Registry initialization
//! failure is the only fatal condition. Lookup misses are a normal
//! negative result (`Option::None`), not an error variant.

use std::path::PathBuf;

use thiserror::Error;

/// A malformed document header. Never aborts a full registry load.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("document has no frontmatter block")]
    MissingFrontmatter,

    #[error("frontmatter block is not terminated")]
    UnterminatedFrontmatter,

    #[error("frontmatter is not a YAML mapping")]
    NotAMapping,

    #[error("invalid frontmatter: {0}")]
    InvalidHeader(String),

    #[error("reference '{0}' has an empty locator")]
    EmptyLocator(String),
}

/// Fatal registry initialization failures, surfaced synchronously to the
/// caller before any query is accepted.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("skills root {} does not exist or is not a directory", .0.display())]
    RootNotFound(PathBuf),

    #[error("no valid skill documents found under {}", .0.display())]
    NoValidDocuments(PathBuf),

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
