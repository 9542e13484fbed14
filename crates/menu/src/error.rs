//! Menu error types.

use thiserror::Error;

/// Errors surfaced while building or rendering a menu.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Item rejected because its title or url is blank.
    #[error("invalid menu item: {0}")]
    InvalidItem(String),

    /// The site URL resolver could not produce a canonical path.
    #[error("unresolvable path `{path}`: {reason}")]
    Unresolvable { path: String, reason: String },

    /// Bulk menu definitions failed to parse.
    #[error("failed to parse menu definitions")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias using MenuError.
pub type MenuResult<T> = Result<T, MenuError>;
