//! End-to-end conversion scenarios: raw scheme text in, complete
//! theme document out.

use chroma_scheme::{ParseLimits, ReferencePalette, SchemeParseError, parse_scheme, resolve_roles};
use chroma_theme::{
    ConvertError, ConvertOptions, DEFAULT_RAINBOW_DEPTH, Scope, ThemeKind, WORKBENCH_COLORS,
    convert,
};

#[test]
fn explicit_colors_flow_through_to_the_document() {
    let source = "background=#1a1a1a\nforeground=#e0e0e0\ncolor1=#ff0000\n";
    let scheme = parse_scheme(source, &ParseLimits::default()).unwrap();
    let table = resolve_roles(&scheme, &ReferencePalette::DEFAULT);
    assert_eq!(table.background.color.to_hex(), "#1a1a1a");
    assert_eq!(table.foreground.color.to_hex(), "#e0e0e0");
    assert_eq!(table.red().to_hex(), "#ff0000");

    let doc = convert(source, &ConvertOptions::default()).unwrap();
    assert_eq!(doc.colors["editor.background"], "#1a1a1a");
    assert_eq!(doc.colors["editor.foreground"], "#e0e0e0");
    assert_eq!(doc.colors["terminal.ansiRed"], "#ff0000");
}

#[test]
fn later_invalid_line_does_not_erase_an_earlier_color() {
    let source = "background=#111111\nbackground=notacolor\n";
    let doc = convert(source, &ConvertOptions::default()).unwrap();
    assert_eq!(doc.colors["editor.background"], "#111111");
}

#[test]
fn hashless_hex_is_normalized() {
    let doc = convert("color0=1a1a1a\n", &ConvertOptions::default()).unwrap();
    assert_eq!(doc.colors["terminal.ansiBlack"], "#1a1a1a");
}

#[test]
fn empty_input_still_yields_a_complete_theme() {
    let doc = convert("", &ConvertOptions::default()).unwrap();
    assert_eq!(doc.colors.len(), WORKBENCH_COLORS.len());
    assert!(!doc.token_colors.is_empty());
    // The default reference palette is dark.
    assert_eq!(doc.kind, ThemeKind::Dark);
}

#[test]
fn oversized_input_fails_without_partial_output() {
    let options = ConvertOptions {
        limits: ParseLimits {
            max_bytes: 1024,
            max_lines: 3,
        },
        ..ConvertOptions::default()
    };
    let err = convert("a=1\nb=2\nc=3\nd=4\n", &options).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Parse(SchemeParseError::TooManyLines { .. })
    ));
}

#[test]
fn light_background_classifies_as_light() {
    let doc = convert("background=#fafafa\nforeground=#202020\n", &ConvertOptions::default())
        .unwrap();
    assert_eq!(doc.kind, ThemeKind::Light);
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["type"], "light");
}

#[test]
fn name_resolution_prefers_explicit_then_parsed_then_identifier() {
    let options = ConvertOptions {
        name: Some("Handpicked".into()),
        source_id: Some("my_scheme".into()),
        ..ConvertOptions::default()
    };
    let doc = convert("name=Parsed Name\n", &options).unwrap();
    assert_eq!(doc.name, "Handpicked");

    let options = ConvertOptions {
        source_id: Some("my_scheme".into()),
        ..ConvertOptions::default()
    };
    let doc = convert("name=Parsed Name\n", &options).unwrap();
    assert_eq!(doc.name, "Parsed Name");

    let doc = convert("", &options).unwrap();
    assert_eq!(doc.name, "My Scheme");
}

#[test]
fn token_rules_include_rainbow_levels_beyond_the_cycle() {
    let doc = convert("", &ConvertOptions::default()).unwrap();
    let rainbow: Vec<_> = doc
        .token_colors
        .iter()
        .filter(|rule| match &rule.scope {
            Scope::Single(scope) => scope.ends_with("support.type.property-name.json"),
            Scope::Many(_) => false,
        })
        .collect();
    assert_eq!(rainbow.len(), DEFAULT_RAINBOW_DEPTH);
    // Depth 9 wraps back to the first cycle color.
    assert_eq!(
        rainbow[9].settings.foreground,
        rainbow[0].settings.foreground
    );
}

#[test]
fn alpha_values_only_appear_as_eight_digit_hex() {
    let doc = convert("background=#101018\n", &ConvertOptions::default()).unwrap();
    for (key, value) in &doc.colors {
        assert!(
            value.len() == 7 || value.len() == 9,
            "{key} has unexpected value shape: {value}"
        );
    }
    // Selection carries alpha by design.
    assert_eq!(doc.colors["selection.background"].len(), 9);
}

#[test]
fn document_json_shape_matches_the_editor_contract() {
    let doc = convert(
        "name=Midnight\nbackground=#101018\ncolor4=#61afef\n",
        &ConvertOptions::default(),
    )
    .unwrap();
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["name"], "Midnight");
    assert_eq!(json["type"], "dark");
    assert_eq!(json["semanticHighlighting"], true);
    assert!(json["colors"].as_object().unwrap().len() >= 200);

    let token_colors = json["tokenColors"].as_array().unwrap();
    assert!(!token_colors.is_empty());
    for rule in token_colors {
        assert!(rule["scope"].is_string() || rule["scope"].is_array());
        assert!(rule["settings"].is_object());
        // Absent settings fields are omitted, not null.
        assert!(!rule["settings"].as_object().unwrap().contains_key("background"));
    }
}

#[test]
fn conversion_has_no_cross_invocation_state() {
    let dark = convert("background=#101010\n", &ConvertOptions::default()).unwrap();
    let light = convert("background=#f0f0f0\n", &ConvertOptions::default()).unwrap();
    let dark_again = convert("background=#101010\n", &ConvertOptions::default()).unwrap();
    assert_eq!(dark, dark_again);
    assert_ne!(dark.kind, light.kind);
}
