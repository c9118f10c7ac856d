// Copyright 2025 The edconf authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # edconf
//!
//! A fast, extensible loader and parser for [EditorConfig](https://editorconfig.org) files.
//! `edconf` turns the textual `.editorconfig` format - a hierarchical, glob-pattern-keyed
//! key/value configuration language - into an immutable, typed model, with full control over
//! how malformed input is treated.
//!
//! ## Features
//!
//! - **Complete line grammar** - sections, properties, comments, preamble `root` flag
//! - **Typed property layer** - `indent_style`, `charset` and friends parse into real enums,
//!   extensible through a property type registry
//! - **Policy-driven error handling** - abort on syntax errors and tolerate sloppy values, or
//!   pick any other combination, per loader
//! - **Pluggable resources** - load from disk, memory, or any custom source
//! - **No partial results** - a load either yields a fully built model or a failure that names
//!   the failing resource
//!
//! ## Quick Start
//!
//! Add `edconf` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! edconf = "0.2"
//! ```
//!
//! ### Using the Prelude
//!
//! For convenient access to the most commonly used types, import the prelude:
//!
//! ```rust
//! use edconf::prelude::*;
//!
//! let mut loader = EditorConfigLoader::default();
//! let resource = StringResource::new(
//!     ".editorconfig",
//!     "root = true\n\n[*]\nend_of_line = lf\ninsert_final_newline = true\n",
//! );
//!
//! let config = loader.load(&resource)?;
//! assert!(config.is_root());
//! assert_eq!(config.sections()[0].pattern(), "*");
//! # Ok::<(), edconf::Error>(())
//! ```
//!
//! ### Loading from Disk
//!
//! ```rust,no_run
//! use edconf::{EditorConfigLoader, FileResource};
//!
//! let mut loader = EditorConfigLoader::default();
//! let config = loader.load(&FileResource::new("path/to/.editorconfig"))?;
//!
//! for section in config.sections() {
//!     println!("[{}] with {} properties", section.pattern(), section.properties().len());
//! }
//! # Ok::<(), edconf::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `edconf` is organized into a small set of modules around one facade:
//!
//! - [`EditorConfigLoader`] - the facade: composes the pieces below and drives one parse per
//!   [`load`](EditorConfigLoader::load) call
//! - [`resource`] - read-once sources of EditorConfig text ([`Resource`], [`StringResource`],
//!   [`FileResource`])
//! - [`parser`] - the line grammar ([`EditorConfigParser`]), the structural-event seam
//!   ([`ParseHandler`], [`ModelHandler`]) and the malformed-construct policy seam
//!   ([`ErrorHandler`], [`ErrorPolicy`])
//! - [`model`] - the immutable result ([`EditorConfig`], [`Section`], [`Property`]) and the
//!   typed property layer ([`PropertyTypeRegistry`], [`PropertyValue`], [`Version`])
//! - [`Error`] and [`Result`] - comprehensive error handling
//!
//! The loader owns one parser and one model handler for its whole lifetime; the handler resets
//! itself at the start of every cycle, so a loader can be reused for any number of sequential
//! loads. Concurrent loads through a single loader are prevented by the `&mut self` receiver;
//! build one loader per in-flight load where parallelism is needed.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, Error>`](Result) with comprehensive error information:
//!
//! ```rust
//! use edconf::{EditorConfigLoader, Error, StringResource};
//!
//! let mut loader = EditorConfigLoader::default();
//! match loader.load(&StringResource::new("demo", "[unclosed\n")) {
//!     Ok(config) => println!("loaded {} sections", config.sections().len()),
//!     Err(Error::Parse(event)) => println!("malformed input: {}", event),
//!     Err(Error::Resource { path, source }) => println!("cannot read {}: {}", path, source),
//!     Err(e) => println!("other error: {}", e),
//! }
//! ```
//!
//! Whether a malformed construct is fatal is a policy decision, not the parser's: the default
//! policy aborts on syntax errors and tolerates invalid property values, and the
//! [`ErrorPolicy`] alternatives (or a custom [`ErrorHandler`]) change that per loader.

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use edconf::prelude::*;
///
/// let mut loader = EditorConfigLoader::default();
/// let config = loader.load(&StringResource::new("mem", "[*]\ncharset = utf-8\n"))?;
/// assert_eq!(config.sections().len(), 1);
/// # Ok::<(), edconf::Error>(())
/// ```
pub mod prelude;

/// The loading facade that composes a parser, a model handler and an error policy.
pub mod loader;

/// The immutable EditorConfig model and the typed property layer.
pub mod model;

/// The EditorConfig line grammar, structural events and error-handling seams.
pub mod parser;

/// Read-once character sources for the parser and loader.
pub mod resource;

/// `edconf` Result type
///
/// A type alias for [`std::result::Result<T, E>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// `edconf` Error type
///
/// The main error type for all operations in this crate, covering the full taxonomy:
/// resource-qualified I/O failures, escalated parse faults, and the rest.
pub use error::Error;

/// Main entry point for loading EditorConfig models.
pub use loader::{EditorConfigLoader, LoaderBuilder};

/// The immutable model produced by a successful load, with its typed property layer.
pub use model::{
    Charset, EditorConfig, EndOfLine, IndentStyle, Property, PropertyType, PropertyTypeRegistry,
    PropertyValue, Section, Version,
};

/// The grammar recognizer and the seams around it.
pub use parser::{
    EditorConfigParser, ErrorEvent, ErrorHandler, ErrorKind, ErrorPolicy, HandlerResult, Location,
    ModelHandler, ParseHandler,
};

/// Resource abstraction and the bundled implementations.
pub use resource::{FileResource, Resource, StringResource};
