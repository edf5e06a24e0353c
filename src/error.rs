//! Errors raised towards the host.
//!
//! Load failures are not raised: `require` reports them as values. What is
//! left are argument errors, which the host surfaces the way it surfaces
//! its own `bad argument` errors.

use thiserror::Error;

pub type HostResult<T> = std::result::Result<T, HostError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// An argument failed a check. `position` is 1-based.
    #[error("bad argument #{position} to '{function}' ({message})")]
    BadArgument {
        position: usize,
        function: &'static str,
        message: String,
    },

    /// Indexing a host value that does not support it.
    #[error("attempt to index a {0} value")]
    NotIndexable(&'static str),

    /// Calling a bridge entry point that does not exist.
    #[error("attempt to call '{0}' (not a function)")]
    NotCallable(String),
}

impl HostError {
    pub fn bad_argument(position: usize, function: &'static str, message: impl Into<String>) -> Self {
        HostError::BadArgument {
            position,
            function,
            message: message.into(),
        }
    }

    /// An argument of the wrong type.
    pub fn type_mismatch(position: usize, function: &'static str, expected: &str, got: &str) -> Self {
        Self::bad_argument(position, function, format!("{expected} expected, got {got}"))
    }
}
