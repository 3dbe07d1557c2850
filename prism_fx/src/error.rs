//! Error types for the Prism shader chain renderer
//!
//! This module defines the error types used throughout the crate,
//! including graphics-device failures, buffer exhaustion and
//! shader chain resolution errors.

use std::fmt;

/// Result type for Prism operations
pub type Result<T> = std::result::Result<T, Error>;

/// Prism errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (graphics device, command recording, etc.)
    BackendError(String),

    /// Out of GPU memory (an offscreen buffer could not be allocated)
    OutOfMemory,

    /// Invalid resource (malformed shader, zero-sized buffer, etc.)
    InvalidResource(String),

    /// A MultiStep shader's predecessor has no buffer stored for this pass
    UnresolvedPredecessor {
        /// Name of the shader being rendered
        shader: String,
        /// Name of the predecessor it reads from
        predecessor: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::UnresolvedPredecessor { shader, predecessor } => write!(
                f,
                "Unresolved predecessor: shader '{}' reads '{}' which has not rendered in this pass",
                shader, predecessor
            ),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR message and build an `Error::BackendError` from it
///
/// # Example
///
/// ```no_run
/// # use prism_fx::engine_err;
/// let err = engine_err!("prism::BufferStore", "Buffer {} missing", 3);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::prism::Error::BackendError(message)
    }};
}

/// Log an ERROR message and return early with `Error::BackendError`
///
/// # Example
///
/// ```no_run
/// # use prism_fx::engine_bail;
/// fn check(width: u32) -> prism_fx::prism::Result<()> {
///     if width == 0 {
///         engine_bail!("prism::BufferStore", "Width must be non-zero");
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
