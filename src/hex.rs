//! Canonical `#rrggbb` form for color tokens.

/// Strip surrounding whitespace, including the ASCII separators U+001C..=U+001F.
pub fn trim(token: &str) -> &str {
    token.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

/// Canonicalize a color token into `#rrggbb` form.
///
/// Trims and lowercases the token, prepends `#` when missing and expands
/// three-digit shorthand by doubling each digit. Digits are not validated:
/// anything that is not shorthand passes through unchanged, so the function
/// never fails.
pub fn normalize(token: &str) -> String {
    let token = trim(token).to_lowercase();
    let mut hex = if token.starts_with('#') {
        token
    } else {
        format!("#{token}")
    };

    // Lengths are in characters: "#" plus three digits.
    if hex.chars().count() == 4 {
        let expanded: String = hex.chars().skip(1).flat_map(|c| [c, c]).collect();
        hex = format!("#{expanded}");
    }

    hex
}
