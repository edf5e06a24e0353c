//! Error types for gibridge.
//!
//! ## Error Hierarchy
//!
//! ```text
//! TypelibError     - building a typelib from definitions
//! RepositoryError  - resolving and loading namespaces (carries a numeric code)
//! ```
//!
//! Lookups that simply find nothing are not errors; they return `None`.

use thiserror::Error;

// ============================================================================
// Typelib Errors
// ============================================================================

/// Errors that occur while building a typelib.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypelibError {
    /// The namespace name is empty or contains a separator.
    #[error("invalid namespace name '{0}'")]
    InvalidNamespace(String),

    /// The version string is empty or contains a separator.
    #[error("invalid version '{version}' for namespace '{namespace}'")]
    InvalidVersion {
        /// Namespace being built.
        namespace: String,
        /// The offending version string.
        version: String,
    },

    /// Two top-level entries share a name.
    #[error("duplicate entry '{name}' in namespace '{namespace}'")]
    DuplicateEntry {
        /// Namespace being built.
        namespace: String,
        /// The duplicated name.
        name: String,
    },

    /// A same-namespace reference names an entry that does not exist.
    #[error("unknown entry '{name}' referenced in namespace '{namespace}'")]
    UnknownEntry {
        /// Namespace being built.
        namespace: String,
        /// The referenced name.
        name: String,
    },

    /// A type definition carries the wrong number of element parameters.
    #[error("type tag '{tag}' expects {expected} parameter(s), got {found}")]
    ParamCount {
        /// The tag name.
        tag: &'static str,
        /// Parameters the tag requires.
        expected: usize,
        /// Parameters supplied.
        found: usize,
    },

    /// An interface-tagged type without a referenced entry.
    #[error("interface type without a target entry")]
    MissingInterface,

    /// A callable of the wrong kind was placed in a slot, e.g. a signal as a
    /// top-level entry or a callback as a method.
    #[error("callable '{name}' of kind '{kind}' is not allowed here")]
    MisplacedCallable {
        /// Callable name.
        name: String,
        /// The callable's kind.
        kind: &'static str,
    },

    /// Enum storage must be an integral tag.
    #[error("enum '{name}' uses non-integral storage '{tag}'")]
    InvalidStorage {
        /// Enum name.
        name: String,
        /// The storage tag name.
        tag: &'static str,
    },
}

// ============================================================================
// Repository Errors
// ============================================================================

/// Errors that occur while loading a namespace.
///
/// Each variant maps to a stable non-zero numeric code via [`RepositoryError::code`],
/// which the host receives alongside the message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No typelib for the namespace (and version, if given) is installed.
    #[error("Typelib file for namespace '{namespace}', version '{}' not found", .version.as_deref().unwrap_or("any"))]
    TypelibNotFound {
        /// Requested namespace.
        namespace: String,
        /// Requested version, if any.
        version: Option<String>,
    },

    /// The typelib found for a namespace declares another namespace.
    #[error("Typelib file for '{requested}' contains namespace '{found}'")]
    NamespaceMismatch {
        /// Requested namespace.
        requested: String,
        /// Namespace the typelib declares.
        found: String,
    },

    /// A different version of the namespace is already loaded.
    #[error("Requiring namespace '{namespace}' version '{requested}', but '{loaded}' is already loaded")]
    NamespaceVersionConflict {
        /// Requested namespace.
        namespace: String,
        /// Requested version.
        requested: String,
        /// Version already loaded.
        loaded: String,
    },

    /// A dependency of the namespace could not be loaded.
    #[error("Failed to load dependency '{dependency}' of namespace '{namespace}': {reason}")]
    LibraryNotFound {
        /// Namespace being loaded.
        namespace: String,
        /// Dependency string (`Name-Version`).
        dependency: String,
        /// Why the dependency failed.
        reason: String,
    },
}

impl RepositoryError {
    /// The numeric error code reported to the host. Never zero.
    pub fn code(&self) -> i64 {
        match self {
            RepositoryError::TypelibNotFound { .. } => 1,
            RepositoryError::NamespaceMismatch { .. } => 2,
            RepositoryError::NamespaceVersionConflict { .. } => 3,
            RepositoryError::LibraryNotFound { .. } => 4,
        }
    }
}
