//! Structural event consumption and the model-building handler.
//!
//! The parser communicates with the model layer exclusively through the [`ParseHandler`] trait:
//! one callback per structural construct, fired in document order. [`ModelHandler`] is the
//! standard implementation, accumulating events into an [`EditorConfig`].
//!
//! Handler callbacks return a soft [`ErrorEvent`] rather than a hard error: the parser routes
//! it to the [`ErrorHandler`](super::ErrorHandler) in use, which decides whether the parse
//! aborts. Handlers themselves never make that call.

use crate::model::{
    EditorConfig, Property, PropertyType, PropertyTypeRegistry, PropertyValue, Section, Version,
};

use super::{ErrorEvent, ErrorKind, Location};

/// Outcome of one handler callback: `Ok` to proceed, or a soft fault for the error-handler
/// policy to judge.
pub type HandlerResult = std::result::Result<(), ErrorEvent>;

/// Consumer of the parser's structural events.
///
/// Events arrive in document order and are properly bracketed: every `start_section` is
/// followed by exactly one `pattern`, then the section's `property` events, then `end_section`;
/// `property` events before the first section belong to the preamble. `start_document` and
/// `end_document` frame the whole sequence.
///
/// All methods default to accepting the event and doing nothing, so recording or filtering
/// implementations only override what they observe.
pub trait ParseHandler {
    /// A new parse cycle begins
    fn start_document(&mut self) -> HandlerResult {
        Ok(())
    }

    /// A section header was recognized; its `pattern` event follows immediately
    fn start_section(&mut self, location: Location) -> HandlerResult {
        let _ = location;
        Ok(())
    }

    /// The glob pattern of the section opened by the preceding `start_section`
    fn pattern(&mut self, pattern: &str, location: Location) -> HandlerResult {
        let _ = (pattern, location);
        Ok(())
    }

    /// A `name = value` assignment, inside the current section or in the preamble
    fn property(&mut self, name: &str, value: &str, location: Location) -> HandlerResult {
        let _ = (name, value, location);
        Ok(())
    }

    /// The current section ends (next section header, or end of input)
    fn end_section(&mut self) -> HandlerResult {
        Ok(())
    }

    /// The parse cycle ends
    fn end_document(&mut self) -> HandlerResult {
        Ok(())
    }
}

/// Event-consuming builder that accumulates a parse into an [`EditorConfig`].
///
/// A `ModelHandler` is bound at construction to one [`Version`] and one
/// [`PropertyTypeRegistry`]; both apply to every document it builds. It is stateful and
/// single-use *per cycle*: [`ParseHandler::start_document`] drops all state accumulated by a
/// previous cycle, so one handler instance (and therefore one loader) can be driven through any
/// number of sequential parses. The finished model is handed out by [`Self::editor_config`],
/// which is only meaningful after a parse that returned successfully.
///
/// Preamble handling: before the first section header, only the `root` property is meaningful;
/// it is parsed as a boolean and surfaced through
/// [`EditorConfig::is_root`]. Other preamble properties are ignored.
///
/// Value handling inside sections: values are interpreted through the registry. A value that
/// does not fit its property's type raises an
/// [`ErrorKind::InvalidPropertyValue`] soft fault; when the active policy continues, the
/// property is retained with its verbatim value as [`PropertyValue::Str`].
#[derive(Debug, Clone)]
pub struct ModelHandler {
    registry: PropertyTypeRegistry,
    version: Version,
    root: bool,
    sections: Vec<Section>,
    current: Option<Section>,
}

impl ModelHandler {
    /// Create a handler bound to the given registry and format revision
    ///
    /// ## Arguments
    /// * 'registry' - Typed-property mapping applied to every value
    /// * 'version' - Format revision stamped on every produced model
    pub fn new(registry: PropertyTypeRegistry, version: Version) -> ModelHandler {
        ModelHandler {
            registry,
            version,
            root: false,
            sections: Vec::new(),
            current: None,
        }
    }

    /// The format revision this handler is bound to
    pub fn version(&self) -> Version {
        self.version
    }

    /// The typed-property registry this handler is bound to
    pub fn registry(&self) -> &PropertyTypeRegistry {
        &self.registry
    }

    /// Hand out the model accumulated by the last parse cycle, draining the handler.
    ///
    /// Valid only after a parse that returned successfully; the next
    /// [`ParseHandler::start_document`] would discard the state anyway.
    pub fn editor_config(&mut self) -> EditorConfig {
        let root = std::mem::take(&mut self.root);
        let sections = std::mem::take(&mut self.sections);
        self.current = None;
        EditorConfig::new(self.version, root, sections)
    }
}

impl ParseHandler for ModelHandler {
    fn start_document(&mut self) -> HandlerResult {
        self.root = false;
        self.sections.clear();
        self.current = None;
        Ok(())
    }

    fn start_section(&mut self, _location: Location) -> HandlerResult {
        if let Some(section) = self.current.take() {
            self.sections.push(section);
        }
        self.current = Some(Section::new(""));
        Ok(())
    }

    fn pattern(&mut self, pattern: &str, _location: Location) -> HandlerResult {
        if let Some(section) = &mut self.current {
            section.set_pattern(pattern);
        }
        Ok(())
    }

    fn property(&mut self, name: &str, value: &str, location: Location) -> HandlerResult {
        let name = name.to_ascii_lowercase();

        let Some(section) = &mut self.current else {
            // Preamble: only `root` is meaningful, everything else is ignored.
            if name != "root" {
                return Ok(());
            }
            return match PropertyType::Root.parse_value(value) {
                Some(PropertyValue::Bool(root)) => {
                    self.root = root;
                    Ok(())
                }
                Some(PropertyValue::Unset) => {
                    self.root = false;
                    Ok(())
                }
                _ => Err(invalid_value(&name, value, location)),
            };
        };

        let (parsed, fault) = match self.registry.lookup(&name) {
            Some(ty) => match ty.parse_value(value) {
                Some(parsed) => (parsed, None),
                None => (
                    PropertyValue::Str(value.to_string()),
                    Some(invalid_value(&name, value, location)),
                ),
            },
            None => (PropertyValue::Str(value.to_string()), None),
        };

        section.insert_property(Property::new(name, value.to_string(), parsed));

        match fault {
            Some(event) => Err(event),
            None => Ok(()),
        }
    }

    fn end_section(&mut self) -> HandlerResult {
        if let Some(section) = self.current.take() {
            self.sections.push(section);
        }
        Ok(())
    }

    fn end_document(&mut self) -> HandlerResult {
        if let Some(section) = self.current.take() {
            self.sections.push(section);
        }
        Ok(())
    }
}

fn invalid_value(name: &str, value: &str, location: Location) -> ErrorEvent {
    ErrorEvent::new(
        ErrorKind::InvalidPropertyValue,
        location,
        format!("invalid value '{value}' for property '{name}'"),
    )
}
