//! Integration tests for the line grammar: pattern handling, separators, preamble semantics,
//! and the event stream as seen by a custom handler.

use edconf::{
    EditorConfigLoader, EditorConfigParser, ErrorPolicy, HandlerResult, Location, ModelHandler,
    ParseHandler, PropertyTypeRegistry, PropertyValue, StringResource, Version,
};

fn load(text: &str) -> edconf::EditorConfig {
    EditorConfigLoader::default()
        .load(&StringResource::new("test", text))
        .unwrap()
}

#[test]
fn glob_patterns_are_carried_verbatim() {
    let config = load(
        "[*]\ntab_width = 4\n\
         [!(generated)/**.{js,ts}]\ntab_width = 2\n\
         [lib/**.rb]\ntab_width = 8\n",
    );

    let patterns: Vec<&str> = config.sections().iter().map(|s| s.pattern()).collect();
    assert_eq!(patterns, vec!["*", "!(generated)/**.{js,ts}", "lib/**.rb"]);
}

#[test]
fn property_names_are_case_insensitive_and_lowercased() {
    let config = load("[*]\nIndent_Style = tab\nCHARSET = latin1\n");

    let section = &config.sections()[0];
    assert_eq!(section.properties()[0].name(), "indent_style");
    assert!(section.property("indent_style").is_some());
    assert_eq!(section.property("Charset").unwrap().raw_value(), "latin1");
}

#[test]
fn duplicate_properties_override_in_declaration_order() {
    let config = load("[*]\nindent_size = 2\ncharset = utf-8\nindent_size = 8\n");

    let section = &config.sections()[0];
    assert_eq!(section.properties().len(), 2);
    assert_eq!(
        section.property("indent_size").unwrap().value(),
        &PropertyValue::Number(8)
    );
}

#[test]
fn unset_clears_are_preserved_as_unset() {
    let config = load("[*]\nindent_size = unset\nmax_line_length = UNSET\n");

    let section = &config.sections()[0];
    assert_eq!(
        section.property("indent_size").unwrap().value(),
        &PropertyValue::Unset
    );
    assert_eq!(
        section.property("max_line_length").unwrap().value(),
        &PropertyValue::Unset
    );
}

#[test]
fn crlf_documents_parse_like_lf_documents() {
    let lf = load("root = true\n[*]\nend_of_line = crlf\n");
    let crlf = load("root = true\r\n[*]\r\nend_of_line = crlf\r\n");
    assert_eq!(lf, crlf);
}

#[test]
fn leading_utf8_bom_is_ignored() {
    let config = load("\u{feff}root = true\n[*]\ncharset = utf-8\n");
    assert!(config.is_root());
    assert_eq!(config.sections().len(), 1);
}

#[test]
fn preamble_properties_other_than_root_are_ignored() {
    let config = load("indent_style = tab\nroot = true\n[*]\ntab_width = 4\n");

    assert!(config.is_root());
    assert_eq!(config.sections().len(), 1);
    assert_eq!(config.sections()[0].properties().len(), 1);
}

#[test]
fn empty_and_comment_only_documents_yield_empty_models() {
    for text in ["", "\n\n\n", "# just a comment\n; and another\n"] {
        let config = load(text);
        assert!(!config.is_root());
        assert!(config.sections().is_empty());
    }
}

#[test]
fn empty_section_pattern_is_allowed_and_verbatim() {
    let config = load("[]\nindent_style = tab\n");
    assert_eq!(config.sections()[0].pattern(), "");
}

#[test]
fn custom_handler_sees_locations() {
    #[derive(Default)]
    struct Positions {
        properties: Vec<(String, Location)>,
    }

    impl ParseHandler for Positions {
        fn property(&mut self, name: &str, _value: &str, location: Location) -> HandlerResult {
            self.properties.push((name.to_string(), location));
            Ok(())
        }
    }

    let parser = EditorConfigParser::new();
    let mut positions = Positions::default();
    parser
        .parse(
            &StringResource::new("test", "[*]\nindent_size = 4\n    tab_width = 8\n"),
            &mut positions,
            &ErrorPolicy::default(),
        )
        .unwrap();

    assert_eq!(
        positions.properties,
        vec![
            ("indent_size".to_string(), Location::new(2, 1)),
            ("tab_width".to_string(), Location::new(3, 5)),
        ]
    );
}

#[test]
fn model_handler_can_be_driven_without_the_loader() {
    let parser = EditorConfigParser::new();
    let mut handler = ModelHandler::new(
        PropertyTypeRegistry::defaults(),
        Version::new(0, 12, 0),
    );

    parser
        .parse(
            &StringResource::new("manual", "[src/**]\ninsert_final_newline = true\n"),
            &mut handler,
            &ErrorPolicy::default(),
        )
        .unwrap();

    let config = handler.editor_config();
    assert_eq!(config.version(), Version::new(0, 12, 0));
    assert_eq!(config.sections()[0].pattern(), "src/**");
    assert_eq!(
        config.sections()[0]
            .property("insert_final_newline")
            .unwrap()
            .value(),
        &PropertyValue::Bool(true)
    );
}
