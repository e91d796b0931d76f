//! Path computation errors

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

/// Errors that abort the path computation.
///
/// A missing landmark, marker file or failed `stat` is never one of these;
/// those steer the search to its next fallback instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PathError {
    #[error("path too long: {path}")]
    TooLong { path: String },

    #[error("cannot decode {what}")]
    Decode { what: String },

    #[error("out of memory")]
    OutOfMemory,

    #[error("maximum number of symbolic links reached ({hops}) while resolving {path}")]
    SymlinkLoop { path: String, hops: u32 },
}

impl PathError {
    /// Build a length error, keeping only a readable head of the offending text.
    pub fn too_long(path: impl AsRef<str>) -> Self {
        let path = path.as_ref();
        let path = match path.char_indices().nth(64) {
            Some((idx, _)) => format!("{}...", &path[..idx]),
            None => path.to_string(),
        };
        Self::TooLong { path }
    }

    pub fn decode(what: impl Into<String>) -> Self {
        Self::Decode { what: what.into() }
    }
}

impl UserFacingError for PathError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::TooLong { .. } => {
                Some("Install the runtime under a shorter directory or set PYTHONHOME.")
            }
            Self::Decode { .. } => {
                Some("Check the locale settings and that PATH, PYTHONHOME and PYTHONPATH are valid text.")
            }
            Self::SymlinkLoop { .. } => {
                Some("The executable is reached through a symbolic link cycle; invoke it by its real path.")
            }
            Self::OutOfMemory => None,
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        Some(match self {
            Self::TooLong { .. } => "path.too_long",
            Self::Decode { .. } => "path.decode",
            Self::OutOfMemory => "path.out_of_memory",
            Self::SymlinkLoop { .. } => "path.symlink_loop",
        })
    }
}
