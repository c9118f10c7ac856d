//! Classification of malformed constructs and the abort-vs-continue policy seam.
//!
//! The parser never decides on its own whether a malformed construct is fatal. Every problem it
//! encounters is packaged as an [`ErrorEvent`] and routed to the [`ErrorHandler`] in use; the
//! handler either escalates the event into an [`Error`](crate::Error) (aborting the parse) or
//! returns `Ok(())` (the construct is skipped and parsing continues). The standard policies are
//! available as [`ErrorPolicy`] values.

use std::fmt;

use crate::{Error, Result};

use super::Location;

/// Classification of a malformed construct.
///
/// Kinds split into two fault classes: *syntax* errors, where a line cannot be recognized as any
/// construct of the grammar, and the *other* class, currently
/// [`ErrorKind::InvalidPropertyValue`], where the document shape is fine but a value does not
/// fit its property's registered type. The default policy aborts on the former and tolerates
/// the latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A section header without its closing `]`
    SectionNotClosed,
    /// A non-blank, non-comment line with no `=` or `:` separator
    PropertyAssignmentMissing,
    /// A property line whose name part is blank
    PropertyNameMissing,
    /// A property line whose value part is blank
    PropertyValueMissing,
    /// A property value that does not fit the type registered for its name
    InvalidPropertyValue,
}

impl ErrorKind {
    /// Whether this kind belongs to the syntax fault class.
    pub fn is_syntax_error(self) -> bool {
        !matches!(self, ErrorKind::InvalidPropertyValue)
    }
}

/// One malformed construct flagged during a parse.
///
/// Carries the [`ErrorKind`] classification, the [`Location`] of the offending construct, and a
/// human-readable description. Events are handed to the [`ErrorHandler`] by reference; a policy
/// that escalates clones the event into [`Error::Parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEvent {
    kind: ErrorKind,
    location: Location,
    message: String,
}

impl ErrorEvent {
    /// Create a new event
    ///
    /// ## Arguments
    /// * 'kind' - Classification of the construct
    /// * 'location' - Where the construct was found
    /// * 'message' - Human-readable description
    pub fn new(kind: ErrorKind, location: Location, message: impl Into<String>) -> ErrorEvent {
        ErrorEvent {
            kind,
            location,
            message: message.into(),
        }
    }

    /// Classification of this event
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Where the offending construct was found
    pub fn location(&self) -> Location {
        self.location
    }

    /// Human-readable description of the construct
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Escalate this event into a fatal [`Error::Parse`].
    pub fn into_error(self) -> Error {
        Error::Parse(self)
    }
}

impl fmt::Display for ErrorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.message, self.location)
    }
}

/// Policy deciding the fatality of malformed constructs.
///
/// Invoked by the parser for every flagged construct. Returning `Ok(())` skips the construct
/// and continues the parse; returning an error aborts it, and the loader propagates that error
/// to the caller unchanged (unless it is an I/O failure, which gets resource context attached).
///
/// The handler classifies and decides - it never mutates the model being built.
///
/// Implementations must be stateless with respect to a single parse; the same handler value is
/// reused across every load that goes through a loader.
pub trait ErrorHandler {
    /// Decide whether parsing continues past the given construct
    fn handle(&self, event: &ErrorEvent) -> Result<()>;
}

/// The standard error-handling policies.
///
/// (See [`ErrorHandler`] for the contract; custom policies implement the trait directly.)
///
/// # Examples
///
/// ```rust
/// use edconf::{EditorConfigLoader, ErrorPolicy, StringResource};
///
/// // A broken section header aborts under the default policy...
/// let text = "[*.rs\nindent_size = 4\n";
/// let mut strict = EditorConfigLoader::default();
/// assert!(strict.load(&StringResource::new("bad", text)).is_err());
///
/// // ...but `IgnoreAll` parses past it.
/// let mut lenient = EditorConfigLoader::builder()
///     .error_handler(ErrorPolicy::IgnoreAll)
///     .build();
/// assert!(lenient.load(&StringResource::new("bad", text)).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Abort on syntax errors, tolerate the other fault classes. The standard default.
    #[default]
    ThrowSyntaxIgnoreOthers,
    /// Abort on every flagged construct.
    ThrowAll,
    /// Tolerate every flagged construct; the model is built from the well-formed remainder.
    IgnoreAll,
}

impl ErrorHandler for ErrorPolicy {
    fn handle(&self, event: &ErrorEvent) -> Result<()> {
        let fatal = match self {
            ErrorPolicy::ThrowSyntaxIgnoreOthers => event.kind().is_syntax_error(),
            ErrorPolicy::ThrowAll => true,
            ErrorPolicy::IgnoreAll => false,
        };

        if fatal {
            Err(event.clone().into_error())
        } else {
            tracing::debug!(%event, "tolerating malformed construct");
            Ok(())
        }
    }
}
