//! Error types for hook registry operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for hook registry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while maintaining the hook registry or emitting
/// generated component files.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// Bad alias file or output directory at construction time.
    #[error("Configuration error: {message}")]
    #[diagnostic(code(hookgen::registry::config))]
    Configuration {
        /// Description of the configuration problem.
        message: String,
    },

    /// An alias token appears in a logical path but is not defined in the
    /// alias table.
    #[error("Unresolved alias '{alias}' (no entry in alias file {})", alias_file.display())]
    #[diagnostic(
        code(hookgen::registry::unresolved_alias),
        help("Define the alias in the alias file or fix the logical path")
    )]
    UnresolvedAlias {
        /// The alias token, including the leading `@`.
        alias: String,
        /// The alias file the token was looked up in.
        alias_file: PathBuf,
    },

    /// A hook point or component file referenced by `add` does not exist.
    #[error("{message}")]
    #[diagnostic(code(hookgen::registry::invalid_argument))]
    InvalidArgument {
        /// Description naming the offending host, hook point, or path.
        message: String,
    },

    /// `remove` was called for a triple that is not registered.
    #[error("Component '{component}' is not registered at hook point '{hook_point}' of '{host}'")]
    #[diagnostic(code(hookgen::registry::not_found))]
    NotFound {
        /// Host component path of the missing triple.
        host: String,
        /// Hook point name of the missing triple.
        hook_point: String,
        /// Inserted component path of the missing triple.
        component: String,
    },

    /// I/O failure while reading component sources or writing generated
    /// output.
    #[error("I/O error during {operation}{}: {source}", path.as_ref().map(|p| format!(" at {}", p.display())).unwrap_or_default())]
    #[diagnostic(code(hookgen::registry::io_error))]
    Io {
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
        /// The path involved, if known.
        path: Option<PathBuf>,
        /// Description of the operation that failed.
        operation: String,
    },
}

impl Error {
    /// Create a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid-argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an I/O error with path context.
    #[must_use]
    pub fn io(
        source: std::io::Error,
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
    ) -> Self {
        Self::Io {
            source,
            path: Some(path.into()),
            operation: operation.into(),
        }
    }
}
