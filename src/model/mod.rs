//! The immutable EditorConfig model.
//!
//! An [`EditorConfig`] is the result of one successful load: the format revision it was parsed
//! under, the preamble `root` flag, and an ordered sequence of [`Section`]s, each pairing a glob
//! pattern with the [`Property`] assignments declared under it.
//!
//! Patterns are carried verbatim as text. This crate never matches them against file names;
//! glob matching is a concern of the consumer.
//!
//! # Examples
//!
//! ```rust
//! use edconf::{EditorConfigLoader, PropertyValue, StringResource};
//!
//! let text = "root = true\n\n[*.rs]\nindent_style = space\nindent_size = 4\n";
//! let config = EditorConfigLoader::default().load(&StringResource::new(".editorconfig", text))?;
//!
//! assert!(config.is_root());
//! let section = &config.sections()[0];
//! assert_eq!(section.pattern(), "*.rs");
//! assert_eq!(
//!     section.property("indent_size").map(|p| p.value()),
//!     Some(&PropertyValue::Number(4)),
//! );
//! # Ok::<(), edconf::Error>(())
//! ```

mod proptype;
mod version;

pub use proptype::{
    Charset, EndOfLine, IndentStyle, PropertyType, PropertyTypeRegistry, PropertyValue,
};
pub use version::Version;

/// One `name = value` assignment within a section.
///
/// The name is stored lowercased (EditorConfig property names are case-insensitive). Both the
/// verbatim source value and its typed interpretation are kept, so consumers can fall back to
/// the raw text where the lenient typed layer was not enough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    name: String,
    raw: String,
    value: PropertyValue,
}

impl Property {
    pub(crate) fn new(name: String, raw: String, value: PropertyValue) -> Property {
        Property { name, raw, value }
    }

    /// Lowercased property name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value exactly as written in the source
    pub fn raw_value(&self) -> &str {
        &self.raw
    }

    /// The typed interpretation of the value
    pub fn value(&self) -> &PropertyValue {
        &self.value
    }
}

/// A glob pattern and the properties declared under it.
///
/// Properties keep their declaration order; re-declaring a name inside the same section
/// overrides the earlier assignment in place, which matches how EditorConfig files layer
/// repeated keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pattern: String,
    properties: Vec<Property>,
}

impl Section {
    pub(crate) fn new(pattern: impl Into<String>) -> Section {
        Section {
            pattern: pattern.into(),
            properties: Vec::new(),
        }
    }

    pub(crate) fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
    }

    pub(crate) fn insert_property(&mut self, property: Property) {
        match self
            .properties
            .iter_mut()
            .find(|existing| existing.name == property.name)
        {
            Some(existing) => *existing = property,
            None => self.properties.push(property),
        }
    }

    /// The glob pattern of this section, verbatim
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The properties of this section, in declaration order
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Case-insensitive lookup of a property by name
    pub fn property(&self, name: &str) -> Option<&Property> {
        let lower = name.to_ascii_lowercase();
        self.properties.iter().find(|p| p.name == lower)
    }
}

/// A fully built EditorConfig model.
///
/// Produced once per successful [`EditorConfigLoader::load`](crate::EditorConfigLoader::load)
/// call and immutable afterwards. A load either yields a complete model or fails; partial
/// models are never observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    version: Version,
    root: bool,
    sections: Vec<Section>,
}

impl EditorConfig {
    pub(crate) fn new(version: Version, root: bool, sections: Vec<Section>) -> EditorConfig {
        EditorConfig {
            version,
            root,
            sections,
        }
    }

    /// The format revision this model was parsed under
    pub fn version(&self) -> Version {
        self.version
    }

    /// Whether the preamble declared `root = true`
    pub fn is_root(&self) -> bool {
        self.root
    }

    /// The sections of this model, in declaration order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_property_lookup_is_case_insensitive() {
        let mut section = Section::new("*.md");
        section.insert_property(Property::new(
            "max_line_length".into(),
            "80".into(),
            PropertyValue::Number(80),
        ));

        assert_eq!(section.pattern(), "*.md");
        assert!(section.property("MAX_LINE_LENGTH").is_some());
        assert!(section.property("tab_width").is_none());
    }

    #[test]
    fn test_duplicate_property_overrides_in_place() {
        let mut section = Section::new("*");
        section.insert_property(Property::new(
            "indent_size".into(),
            "2".into(),
            PropertyValue::Number(2),
        ));
        section.insert_property(Property::new(
            "end_of_line".into(),
            "lf".into(),
            PropertyValue::EndOfLine(EndOfLine::Lf),
        ));
        section.insert_property(Property::new(
            "indent_size".into(),
            "8".into(),
            PropertyValue::Number(8),
        ));

        assert_eq!(section.properties().len(), 2);
        assert_eq!(section.properties()[0].name(), "indent_size");
        assert_eq!(section.properties()[0].raw_value(), "8");
        assert_eq!(section.properties()[1].name(), "end_of_line");
    }

    #[test]
    fn test_model_accessors() {
        let section = Section::new("*.py");
        let config = EditorConfig::new(Version::CURRENT, true, vec![section]);

        assert_eq!(config.version(), Version::CURRENT);
        assert!(config.is_root());
        assert_eq!(config.sections().len(), 1);
    }
}
