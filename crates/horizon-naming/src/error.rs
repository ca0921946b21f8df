//! Error types for object naming and path resolution.

/// Result type alias for naming operations.
pub type Result<T> = std::result::Result<T, NamingError>;

/// Errors produced while naming an object or resolving a path.
///
/// None of these are fatal: naming failures are logged and resolution
/// failures carry a diagnostic report for the caller to print.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamingError {
    /// The object itself has no derivable label.
    #[error("Cannot record event for unnamed object {object}")]
    EmptyLabel { object: String },

    /// An ancestor of the object has no derivable label.
    #[error(
        "Cannot record event for incompletely-named object `{name}` {object} with parent {ancestor}"
    )]
    EmptyAncestorLabel {
        object: String,
        name: String,
        ancestor: String,
    },

    /// The object's ancestor chain ends at an object that is not a root.
    #[error(
        "Unable to determine name for object {object} because a parent {ancestor} is not a top-level widget. Name so far = `{partial}`"
    )]
    DetachedRoot {
        object: String,
        ancestor: String,
        partial: String,
    },

    /// An empty path was given to the resolver.
    #[error("Cannot resolve an empty object path")]
    EmptyPath,

    /// No object matches the path.
    #[error("Couldn't find object `{path}`")]
    NotFound { path: String, report: String },
}

impl NamingError {
    /// The diagnostic report of a failed resolution, if this is one.
    pub fn report(&self) -> Option<&str> {
        match self {
            Self::NotFound { report, .. } => Some(report),
            _ => None,
        }
    }
}
