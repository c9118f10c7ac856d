use thiserror::Error;

use crate::parser::ErrorEvent;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// This enum covers all possible failure conditions that can occur while reading a resource and
/// building an [`EditorConfig`](crate::model::EditorConfig) model out of it. Each variant
/// provides specific context about the failure mode to enable appropriate error handling.
///
/// # Error Categories
///
/// ## Resource Errors
/// - [`Error::Io`] - Raw I/O failure raised while reading a resource
/// - [`Error::Resource`] - I/O failure translated by the loader, carrying the resource path
///
/// ## Parse Errors
/// - [`Error::Parse`] - A malformed construct escalated to fatal by the error handler
///
/// ## Other Errors
/// - [`Error::InvalidVersion`] - A version string that does not follow the `major.minor[.patch]` form
/// - [`Error::Other`] - Miscellaneous failures, typically raised by custom error handlers
///
/// # Examples
///
/// ```rust
/// use edconf::{EditorConfigLoader, Error, StringResource};
///
/// let mut loader = EditorConfigLoader::default();
/// let resource = StringResource::new(".editorconfig", "[*.rs\nindent_style = space\n");
///
/// match loader.load(&resource) {
///     Ok(config) => println!("{} sections", config.sections().len()),
///     Err(Error::Parse(event)) => eprintln!("parse failure: {}", event),
///     Err(Error::Resource { path, source }) => eprintln!("cannot read {}: {}", path, source),
///     Err(e) => eprintln!("other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// Raw I/O failure while reading from a resource.
    ///
    /// Wraps standard I/O errors that can occur while the parser reads the
    /// underlying [`Resource`](crate::resource::Resource), such as a missing
    /// file, permission problems, or invalid UTF-8 content. The loader
    /// translates this variant into [`Error::Resource`] before handing it to
    /// callers, so it is only observed directly when driving the parser
    /// without the loader facade.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// The resource could not be loaded.
    ///
    /// This is the loader's resource-qualified form of an I/O failure: the
    /// message names the failing resource, and the original I/O error is
    /// preserved as the cause and reachable through
    /// [`std::error::Error::source`].
    #[error("Could not load {path}")]
    Resource {
        /// Diagnostic path descriptor of the resource that failed to load
        path: String,
        /// The underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A malformed construct was escalated to fatal by the error handler in use.
    ///
    /// The attached [`ErrorEvent`] carries the classification, the location
    /// within the resource, and a human-readable description of the
    /// offending construct. Whether a given construct aborts the parse or is
    /// tolerated is decided by the [`ErrorHandler`](crate::parser::ErrorHandler)
    /// policy, never by the parser itself.
    #[error("{0}")]
    Parse(ErrorEvent),

    /// A version string that does not follow the `major.minor[.patch]` form.
    #[error("Invalid version string: {0}")]
    InvalidVersion(String),

    /// Generic error for miscellaneous failures.
    ///
    /// Used for failures that don't fit into other categories, and the
    /// conventional variant for custom
    /// [`ErrorHandler`](crate::parser::ErrorHandler) implementations that
    /// need to abort a parse with their own diagnostics.
    #[error("{0}")]
    Other(String),
}
