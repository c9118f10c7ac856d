//! # edconf Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the edconf library. Import this module to get quick access to the essential
//! types for loading and inspecting EditorConfig files.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all edconf operations
pub use crate::Error;

/// The result type used throughout edconf
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Main entry point for loading EditorConfig models
pub use crate::loader::{EditorConfigLoader, LoaderBuilder};

/// Resource abstraction and the bundled implementations
pub use crate::resource::{FileResource, Resource, StringResource};

// ================================================================================================
// Model
// ================================================================================================

/// The immutable model produced by a load
pub use crate::model::{EditorConfig, Property, Section};

/// Typed property values and the registry mapping names to types
pub use crate::model::{
    Charset, EndOfLine, IndentStyle, PropertyType, PropertyTypeRegistry, PropertyValue,
};

/// Format revision tags
pub use crate::model::Version;

// ================================================================================================
// Parsing Seams
// ================================================================================================

/// The grammar recognizer and the event-consumer seam
pub use crate::parser::{EditorConfigParser, HandlerResult, ModelHandler, ParseHandler};

/// Malformed-construct classification and the abort-vs-continue policy seam
pub use crate::parser::{ErrorEvent, ErrorHandler, ErrorKind, ErrorPolicy, Location};
