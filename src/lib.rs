//! Skillbase -- Skill Document Registry
//!
//! A read-only catalog of Markdown reference documents ("skills") with
//! YAML frontmatter metadata. Documents are discovered once from a
//! directory tree; after that the registry is immutable and may be shared
//! across threads without locking.
//!
//! ```no_run
//! use skillbase::SkillRegistry;
//!
//! let registry = SkillRegistry::initialize("~/.skillbase/skills")?;
//! for hit in registry.find("devops pipeline") {
//!     println!("{} ({})", hit.name, hit.score);
//! }
//! # Ok::<(), skillbase::RegistryError>(())
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod matcher;
pub mod registry;
pub mod store;
pub mod types;

pub use error::{ParseError, RegistryError};
pub use registry::{compose_instructions, SkillRegistry};
pub use store::DocumentStore;
pub use types::{ReferenceKind, SkillDocument, SkillMatch, SkillReference};
