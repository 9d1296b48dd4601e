//! Property tests: parsing never panics and role resolution is total.

use chroma_scheme::{ParseLimits, ReferencePalette, parse_scheme, resolve_roles};
use proptest::prelude::*;

proptest! {
    #[test]
    fn arbitrary_text_never_panics(text in "(?s).{0,1024}") {
        let limits = ParseLimits::default();
        if let Ok(scheme) = parse_scheme(&text, &limits) {
            // Whatever was recognized, resolution must stay total.
            let table = resolve_roles(&scheme, &ReferencePalette::DEFAULT);
            prop_assert_eq!(table.ansi.len(), 16);
        }
    }

    #[test]
    fn resolved_roles_are_valid_six_digit_hex(
        entries in proptest::collection::vec(("[a-z_ ]{0,12}", "[#a-zA-Z0-9]{0,10}"), 0..24),
    ) {
        let text: String = entries
            .iter()
            .map(|(k, v)| format!("{k}={v}\n"))
            .collect();
        let scheme = parse_scheme(&text, &ParseLimits::default()).unwrap();
        let table = resolve_roles(&scheme, &ReferencePalette::DEFAULT);
        for role in table.ansi.iter().chain([
            &table.background,
            &table.foreground,
            &table.cursor,
            &table.selection,
        ]) {
            let hex = role.color.to_hex();
            prop_assert_eq!(hex.len(), 7);
            prop_assert!(hex.starts_with('#'));
            prop_assert!(hex[1..].bytes().all(|b| b.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn diagnostics_never_abort_remaining_lines(good in "[0-9a-fA-F]{6}") {
        let text = format!("color0=zzz\nbackground=#{good}\ncolor99=#ff0000\n");
        let scheme = parse_scheme(&text, &ParseLimits::default()).unwrap();
        prop_assert!(scheme.background.is_some());
        prop_assert!(!scheme.diagnostics.is_empty());
    }
}
