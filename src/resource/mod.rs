//! Read-once character sources for the parser and loader.
//!
//! This module abstracts over the places an EditorConfig document can come from. The
//! [`Resource`] trait is the seam: the parser asks a resource for its full contents exactly once
//! per parse, and uses its path descriptor for diagnostics only. Two implementations are
//! provided:
//!
//! - [`StringResource`] - in-memory content with a synthetic name, the natural choice for tests
//!   and for callers that already hold the document text
//! - [`FileResource`] - content read from a file on disk
//!
//! Callers with more exotic sources (archives, editors' unsaved buffers, virtual file systems)
//! implement [`Resource`] themselves; the loader places no other requirement on them.
//!
//! # Examples
//!
//! ```rust
//! use edconf::resource::{Resource, StringResource};
//!
//! let resource = StringResource::new(".editorconfig", "[*]\nindent_style = tab\n");
//! assert_eq!(resource.path(), ".editorconfig");
//! assert!(resource.read()?.contains("indent_style"));
//! # Ok::<(), std::io::Error>(())
//! ```

mod file;
mod string;

pub use file::FileResource;
pub use string::StringResource;

/// An opaque, read-once source of EditorConfig text.
///
/// A resource is identified by a path-like descriptor that appears in diagnostics and error
/// messages; the descriptor is never interpreted. Reading may fail with a raw
/// [`std::io::Error`], which the loader translates into a resource-qualified
/// [`Error::Resource`](crate::Error::Resource).
///
/// The parser invokes [`Resource::read`] exactly once per parse and does not retain the resource
/// afterwards.
pub trait Resource {
    /// Diagnostic path descriptor of this resource.
    fn path(&self) -> &str;

    /// The full contents of this resource.
    ///
    /// Invoked exactly once per parse. Implementations are free to be single-use beyond that;
    /// the loader never reads a resource twice within one `load` call.
    fn read(&self) -> std::io::Result<String>;
}

impl<T: Resource + ?Sized> Resource for &T {
    fn path(&self) -> &str {
        (**self).path()
    }

    fn read(&self) -> std::io::Result<String> {
        (**self).read()
    }
}
