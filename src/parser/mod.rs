//! The EditorConfig line grammar and its surrounding seams.
//!
//! This module houses the machinery between a raw [`Resource`](crate::resource::Resource) and a
//! finished [`EditorConfig`](crate::model::EditorConfig) model:
//!
//! - [`EditorConfigParser`] - recognizes the line grammar and drives everything else
//! - [`ParseHandler`] / [`ModelHandler`] - consume structural events, build the model
//! - [`ErrorHandler`] / [`ErrorPolicy`] - decide the fatality of malformed constructs
//! - [`ErrorEvent`], [`ErrorKind`], [`Location`] - the diagnostics vocabulary
//!
//! Most callers never touch this module directly; the
//! [`EditorConfigLoader`](crate::EditorConfigLoader) facade composes these pieces with sensible
//! defaults. Driving the parser by hand is for custom handlers (linters, formatters,
//! documentation extractors) that want the event stream rather than the model.
//!
//! # Grammar
//!
//! The recognized shape is the INI dialect EditorConfig uses:
//!
//! - blank lines are skipped
//! - lines whose first non-blank character is `#` or `;` are comments
//! - a line starting with `[` opens a section; the glob pattern is the text between the first
//!   `[` and the final `]` of the trimmed line, carried verbatim
//! - every other line is a property assignment, split at its first `=` or `:`
//! - properties before the first section form the preamble
//!
//! Anything else is a malformed construct, reported to the [`ErrorHandler`] which decides
//! whether the parse aborts or the line is skipped.
//!
//! # Examples
//!
//! ```rust
//! use edconf::parser::{EditorConfigParser, ErrorPolicy, ModelHandler};
//! use edconf::{PropertyTypeRegistry, StringResource, Version};
//!
//! let parser = EditorConfigParser::new();
//! let mut handler = ModelHandler::new(PropertyTypeRegistry::defaults(), Version::CURRENT);
//! let resource = StringResource::new(".editorconfig", "[*]\nend_of_line = lf\n");
//!
//! parser.parse(&resource, &mut handler, &ErrorPolicy::default())?;
//!
//! let config = handler.editor_config();
//! assert_eq!(config.sections()[0].pattern(), "*");
//! # Ok::<(), edconf::Error>(())
//! ```

mod error_handler;
mod handler;
mod location;

pub use error_handler::{ErrorEvent, ErrorHandler, ErrorKind, ErrorPolicy};
pub use handler::{HandlerResult, ModelHandler, ParseHandler};
pub use location::Location;

use crate::resource::Resource;
use crate::Result;

/// Recognizer for the EditorConfig line grammar.
///
/// The parser is stateless across calls: it reads the given resource exactly once, walks its
/// lines, emits structural events into the given [`ParseHandler`], and routes every
/// malformed-construct report to the given [`ErrorHandler`]. Default construction yields the
/// standard grammar behavior; there are no tunables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditorConfigParser {
    _priv: (),
}

impl EditorConfigParser {
    /// Create a parser with standard grammar behavior
    pub fn new() -> EditorConfigParser {
        EditorConfigParser::default()
    }

    /// Drive one parse over `resource`, feeding `handler` and consulting `error_handler`.
    ///
    /// Structural events are properly bracketed (see [`ParseHandler`]). The parse aborts when
    /// the resource fails to read (raw [`Error::Io`](crate::Error::Io)), or when the error
    /// handler escalates a flagged construct; a tolerated construct skips its line and parsing
    /// continues.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) for read failures, or whatever error the
    /// `error_handler` escalates with.
    pub fn parse<R, H>(
        &self,
        resource: &R,
        handler: &mut H,
        error_handler: &dyn ErrorHandler,
    ) -> Result<()>
    where
        R: Resource + ?Sized,
        H: ParseHandler + ?Sized,
    {
        let content = resource.read()?;
        tracing::trace!(path = resource.path(), bytes = content.len(), "parsing resource");

        // A leading UTF-8 BOM is not part of the first line.
        let text = content.strip_prefix('\u{feff}').unwrap_or(&content);

        route(handler.start_document(), error_handler)?;

        let mut in_section = false;
        for (index, raw_line) in text.lines().enumerate() {
            let line_number = index + 1;
            let trimmed = raw_line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let location = Location::new(line_number, indent_width(raw_line) + 1);

            if trimmed.starts_with('#') || trimmed.starts_with(';') {
                continue;
            }

            if let Some(rest) = trimmed.strip_prefix('[') {
                match rest.strip_suffix(']') {
                    Some(pattern) => {
                        if in_section {
                            route(handler.end_section(), error_handler)?;
                        }
                        route(handler.start_section(location), error_handler)?;
                        route(handler.pattern(pattern, location), error_handler)?;
                        in_section = true;
                    }
                    None => {
                        let at = Location::new(line_number, raw_line.trim_end().len() + 1);
                        error_handler.handle(&ErrorEvent::new(
                            ErrorKind::SectionNotClosed,
                            at,
                            "section header is missing ']'",
                        ))?;
                    }
                }
                continue;
            }

            match trimmed.find(['=', ':']) {
                None => {
                    error_handler.handle(&ErrorEvent::new(
                        ErrorKind::PropertyAssignmentMissing,
                        location,
                        "expected '=' or ':' in property line",
                    ))?;
                }
                Some(separator) => {
                    let name = trimmed[..separator].trim();
                    let value = trimmed[separator + 1..].trim();
                    if name.is_empty() {
                        error_handler.handle(&ErrorEvent::new(
                            ErrorKind::PropertyNameMissing,
                            location,
                            "property name is missing",
                        ))?;
                    } else if value.is_empty() {
                        error_handler.handle(&ErrorEvent::new(
                            ErrorKind::PropertyValueMissing,
                            location,
                            format!("property '{name}' has no value"),
                        ))?;
                    } else {
                        route(handler.property(name, value, location), error_handler)?;
                    }
                }
            }
        }

        if in_section {
            route(handler.end_section(), error_handler)?;
        }
        route(handler.end_document(), error_handler)?;

        Ok(())
    }
}

fn route(result: HandlerResult, error_handler: &dyn ErrorHandler) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(event) => error_handler.handle(&event),
    }
}

fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start().len()
}
