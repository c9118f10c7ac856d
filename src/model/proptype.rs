//! Typed interpretation of well-known property values.
//!
//! EditorConfig properties are plain `name = value` pairs on the wire. This module supplies the
//! typed layer on top: the closed token sets ([`IndentStyle`], [`EndOfLine`], [`Charset`]), the
//! [`PropertyValue`] sum over everything a value can parse into, the [`PropertyType`] attached
//! to each well-known property name, and the [`PropertyTypeRegistry`] mapping names to types.
//!
//! Value interpretation is deliberately lenient. A value that does not fit its property's type
//! is flagged to the error-handler policy as a non-syntax fault and, when the policy continues,
//! carried through verbatim as [`PropertyValue::Str`] - deep validation is a concern of the
//! consumer, not of loading.

use std::collections::HashMap;

use strum::{Display, EnumString};

/// `indent_style` token set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum IndentStyle {
    /// Indent with hard tab characters
    Tab,
    /// Indent with spaces
    Space,
}

/// `end_of_line` token set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum EndOfLine {
    /// Unix line endings (`\n`)
    Lf,
    /// Windows line endings (`\r\n`)
    CrLf,
    /// Classic Mac line endings (`\r`)
    Cr,
}

/// `charset` token set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum Charset {
    /// ISO-8859-1
    #[strum(serialize = "latin1")]
    Latin1,
    /// UTF-8 without a byte order mark
    #[strum(serialize = "utf-8")]
    Utf8,
    /// UTF-8 with a byte order mark
    #[strum(serialize = "utf-8-bom")]
    Utf8Bom,
    /// UTF-16, big endian
    #[strum(serialize = "utf-16be")]
    Utf16Be,
    /// UTF-16, little endian
    #[strum(serialize = "utf-16le")]
    Utf16Le,
}

/// A parsed property value.
///
/// Values of well-known properties parse into the typed variants; values of unknown properties,
/// and values that a lenient policy carried through despite not fitting their type, stay as
/// [`PropertyValue::Str`]. The literal `unset` is accepted for every property and maps to
/// [`PropertyValue::Unset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// A boolean token, `true` or `false`
    Bool(bool),
    /// A positive integer
    Number(u32),
    /// An `indent_style` token
    IndentStyle(IndentStyle),
    /// An `end_of_line` token
    EndOfLine(EndOfLine),
    /// A `charset` token
    Charset(Charset),
    /// A verbatim string: unknown property, or a typed property whose value did not fit
    Str(String),
    /// The literal `unset`, clearing the property for the matched files
    Unset,
}

/// The typed interpretation applied to a well-known property name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    /// `indent_style`: `tab` or `space`
    IndentStyle,
    /// `indent_size`: a positive integer, or `tab` to defer to `tab_width`
    IndentSize,
    /// `tab_width`: a positive integer
    TabWidth,
    /// `end_of_line`: `lf`, `crlf` or `cr`
    EndOfLine,
    /// `charset`: one of the [`Charset`] tokens
    Charset,
    /// `trim_trailing_whitespace`: `true` or `false`
    TrimTrailingWhitespace,
    /// `insert_final_newline`: `true` or `false`
    InsertFinalNewline,
    /// `max_line_length`: a positive integer, or `off`
    MaxLineLength,
    /// `root`: `true` or `false`, only meaningful in the preamble
    Root,
}

impl PropertyType {
    /// Lenient typed parse of a raw value.
    ///
    /// The value is lowercased first (EditorConfig values of well-known properties are
    /// case-insensitive), and the literal `unset` is accepted for every type. Returns `None`
    /// when the value does not fit this type; the caller decides whether that is fatal.
    pub fn parse_value(self, raw: &str) -> Option<PropertyValue> {
        let lower = raw.to_ascii_lowercase();
        if lower == "unset" {
            return Some(PropertyValue::Unset);
        }

        match self {
            PropertyType::IndentStyle => {
                lower.parse::<IndentStyle>().ok().map(PropertyValue::IndentStyle)
            }
            PropertyType::IndentSize => {
                if lower == "tab" {
                    Some(PropertyValue::Str(lower))
                } else {
                    positive_number(&lower)
                }
            }
            PropertyType::TabWidth => positive_number(&lower),
            PropertyType::EndOfLine => lower.parse::<EndOfLine>().ok().map(PropertyValue::EndOfLine),
            PropertyType::Charset => lower.parse::<Charset>().ok().map(PropertyValue::Charset),
            PropertyType::TrimTrailingWhitespace
            | PropertyType::InsertFinalNewline
            | PropertyType::Root => match lower.as_str() {
                "true" => Some(PropertyValue::Bool(true)),
                "false" => Some(PropertyValue::Bool(false)),
                _ => None,
            },
            PropertyType::MaxLineLength => {
                if lower == "off" {
                    Some(PropertyValue::Str(lower))
                } else {
                    positive_number(&lower)
                }
            }
        }
    }
}

fn positive_number(s: &str) -> Option<PropertyValue> {
    s.parse::<u32>().ok().filter(|n| *n > 0).map(PropertyValue::Number)
}

/// Immutable mapping from property name to its typed interpretation.
///
/// A registry is supplied once when a loader (or a
/// [`ModelHandler`](crate::parser::ModelHandler)) is constructed and applies to every load
/// through it. Lookup is case-insensitive. Customization is copy-on-write: [`Self::with_type`]
/// consumes and returns the registry, so the standard set can be extended without mutating any
/// shared state.
///
/// # Examples
///
/// ```rust
/// use edconf::{PropertyType, PropertyTypeRegistry};
///
/// let registry = PropertyTypeRegistry::defaults()
///     .with_type("curly_bracket_next_line", PropertyType::TrimTrailingWhitespace);
///
/// assert_eq!(registry.lookup("Indent_Style"), Some(PropertyType::IndentStyle));
/// assert_eq!(
///     registry.lookup("curly_bracket_next_line"),
///     Some(PropertyType::TrimTrailingWhitespace),
/// );
/// assert_eq!(registry.lookup("unknown"), None);
/// ```
#[derive(Debug, Clone)]
pub struct PropertyTypeRegistry {
    types: HashMap<String, PropertyType>,
}

impl PropertyTypeRegistry {
    /// Registry with no typed properties; every value stays a verbatim string.
    pub fn empty() -> PropertyTypeRegistry {
        PropertyTypeRegistry {
            types: HashMap::new(),
        }
    }

    /// Registry carrying the standard EditorConfig property set.
    pub fn defaults() -> PropertyTypeRegistry {
        PropertyTypeRegistry::empty()
            .with_type("indent_style", PropertyType::IndentStyle)
            .with_type("indent_size", PropertyType::IndentSize)
            .with_type("tab_width", PropertyType::TabWidth)
            .with_type("end_of_line", PropertyType::EndOfLine)
            .with_type("charset", PropertyType::Charset)
            .with_type("trim_trailing_whitespace", PropertyType::TrimTrailingWhitespace)
            .with_type("insert_final_newline", PropertyType::InsertFinalNewline)
            .with_type("max_line_length", PropertyType::MaxLineLength)
            .with_type("root", PropertyType::Root)
    }

    /// Return a copy of this registry with one additional (or replaced) typed property
    ///
    /// ## Arguments
    /// * 'name' - Property name, stored lowercased
    /// * 'ty' - Typed interpretation for values of that property
    #[must_use]
    pub fn with_type(mut self, name: impl Into<String>, ty: PropertyType) -> PropertyTypeRegistry {
        self.types.insert(name.into().to_ascii_lowercase(), ty);
        self
    }

    /// Case-insensitive lookup of the typed interpretation for a property name
    pub fn lookup(&self, name: &str) -> Option<PropertyType> {
        self.types.get(&name.to_ascii_lowercase()).copied()
    }

    /// Number of typed properties in this registry
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether this registry has no typed properties
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for PropertyTypeRegistry {
    fn default() -> PropertyTypeRegistry {
        PropertyTypeRegistry::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_enums_round_trip() {
        assert_eq!("tab".parse::<IndentStyle>().unwrap(), IndentStyle::Tab);
        assert_eq!(IndentStyle::Space.to_string(), "space");
        assert_eq!("crlf".parse::<EndOfLine>().unwrap(), EndOfLine::CrLf);
        assert_eq!(EndOfLine::Lf.to_string(), "lf");
        assert_eq!("utf-8-bom".parse::<Charset>().unwrap(), Charset::Utf8Bom);
        assert_eq!(Charset::Utf16Le.to_string(), "utf-16le");
        assert!("utf8".parse::<Charset>().is_err());
    }

    #[test]
    fn test_parse_value_typed() {
        assert_eq!(
            PropertyType::IndentStyle.parse_value("Space"),
            Some(PropertyValue::IndentStyle(IndentStyle::Space))
        );
        assert_eq!(
            PropertyType::IndentSize.parse_value("4"),
            Some(PropertyValue::Number(4))
        );
        assert_eq!(
            PropertyType::IndentSize.parse_value("tab"),
            Some(PropertyValue::Str("tab".into()))
        );
        assert_eq!(
            PropertyType::EndOfLine.parse_value("CRLF"),
            Some(PropertyValue::EndOfLine(EndOfLine::CrLf))
        );
        assert_eq!(
            PropertyType::InsertFinalNewline.parse_value("TRUE"),
            Some(PropertyValue::Bool(true))
        );
        assert_eq!(
            PropertyType::MaxLineLength.parse_value("off"),
            Some(PropertyValue::Str("off".into()))
        );
    }

    #[test]
    fn test_parse_value_unset_everywhere() {
        for ty in [
            PropertyType::IndentStyle,
            PropertyType::IndentSize,
            PropertyType::Charset,
            PropertyType::Root,
        ] {
            assert_eq!(ty.parse_value("unset"), Some(PropertyValue::Unset));
            assert_eq!(ty.parse_value("UNSET"), Some(PropertyValue::Unset));
        }
    }

    #[test]
    fn test_parse_value_rejects_misfits() {
        assert_eq!(PropertyType::IndentStyle.parse_value("spaces"), None);
        assert_eq!(PropertyType::IndentSize.parse_value("0"), None);
        assert_eq!(PropertyType::IndentSize.parse_value("-2"), None);
        assert_eq!(PropertyType::TabWidth.parse_value("wide"), None);
        assert_eq!(PropertyType::Root.parse_value("yes"), None);
        assert_eq!(PropertyType::MaxLineLength.parse_value("none"), None);
    }

    #[test]
    fn test_registry_defaults_and_customization() {
        let registry = PropertyTypeRegistry::defaults();
        assert_eq!(registry.len(), 9);
        assert_eq!(registry.lookup("tab_width"), Some(PropertyType::TabWidth));
        assert_eq!(registry.lookup("TAB_WIDTH"), Some(PropertyType::TabWidth));
        assert_eq!(registry.lookup("no_such"), None);

        let extended = registry.clone().with_type("block_comment", PropertyType::Charset);
        assert_eq!(extended.len(), 10);
        assert_eq!(registry.lookup("block_comment"), None);

        assert!(PropertyTypeRegistry::empty().is_empty());
    }
}
