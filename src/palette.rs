//! The fixed table of recognized color names.
//!
//! Names are lowercase and hex values are lowercase `#rrggbb`. The table is
//! a `const`, so it is shared read-only by every caller for the life of the
//! process.

/// Recognized color names and their hex values, in lookup order.
pub const PALETTE: [(&str, &str); 18] = [
    ("black", "#000000"),
    ("white", "#ffffff"),
    ("red", "#ff0000"),
    ("green", "#008000"),
    ("blue", "#0000ff"),
    ("yellow", "#ffff00"),
    ("orange", "#ffa500"),
    ("purple", "#800080"),
    ("pink", "#ffc0cb"),
    ("brown", "#a52a2a"),
    ("gray", "#808080"),
    ("lime", "#00ff00"),
    ("cyan", "#00ffff"),
    ("magenta", "#ff00ff"),
    ("navy", "#000080"),
    ("teal", "#008080"),
    ("maroon", "#800000"),
    ("olive", "#808000"),
];

/// Look up the `(name, hex)` entry for an exact palette name.
///
/// The name must already be trimmed and lowercased.
pub fn entry(name: &str) -> Option<(&'static str, &'static str)> {
    PALETTE.iter().find(|(key, _)| *key == name).copied()
}

/// Look up the hex value for an exact palette name.
pub fn hex_for(name: &str) -> Option<&'static str> {
    entry(name).map(|(_, hex)| hex)
}

/// Find the palette name whose hex value equals `hex`, ignoring ASCII case.
pub fn name_for(hex: &str) -> Option<&'static str> {
    PALETTE
        .iter()
        .find(|(_, value)| value.eq_ignore_ascii_case(hex))
        .map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for (name, _) in PALETTE {
            assert_eq!(name, name.to_lowercase(), "{name} is not lowercase");
            assert!(seen.insert(name), "duplicate palette name {name}");
        }
    }

    #[test]
    fn hex_values_are_unique_and_well_formed() {
        let mut seen = HashSet::new();
        for (name, hex) in PALETTE {
            assert_eq!(hex.len(), 7, "{name}: {hex}");
            assert!(hex.starts_with('#'), "{name}: {hex}");
            assert!(
                hex[1..].chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')),
                "{name}: {hex} is not lowercase hex"
            );
            assert!(seen.insert(hex), "duplicate palette hex {hex}");
        }
    }

    #[test]
    fn entry_is_exact() {
        assert_eq!(entry("orange"), Some(("orange", "#ffa500")));
        assert_eq!(entry("Orange"), None);
        assert_eq!(entry(" orange"), None);
        assert_eq!(entry("grey"), None);
    }

    #[test]
    fn hex_for_is_exact() {
        assert_eq!(hex_for("maroon"), Some("#800000"));
        assert_eq!(hex_for("MAROON"), None);
        assert_eq!(hex_for("maroon "), None);
        for (name, hex) in PALETTE {
            assert_eq!(hex_for(name), Some(hex));
        }
    }

    #[test]
    fn name_for_ignores_case() {
        assert_eq!(name_for("#ffa500"), Some("orange"));
        assert_eq!(name_for("#FFA500"), Some("orange"));
        assert_eq!(name_for("#ffa501"), None);
        assert_eq!(name_for("ffa500"), None);
    }
}
