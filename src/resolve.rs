//! Color resolution: palette name, hex code, or unknown.

use crate::hex::normalize;
use crate::log::debug;
use crate::palette;
use crate::types::{ColorQuery, Resolution};

/// Resolve raw user input to a hex value and palette name.
///
/// The first matching rule wins:
/// 1. the trimmed, lowercased input is a palette name;
/// 2. the input is hex-like, so it is normalized and looked up by value,
///    falling back to the normalized hex with [`UNKNOWN`](crate::UNKNOWN);
/// 3. otherwise the input comes back unmodified with `UNKNOWN`.
pub fn resolve(input: &str) -> Resolution {
    resolve_query(&ColorQuery::new(input))
}

/// Resolve an already constructed query.
pub fn resolve_query(query: &ColorQuery<'_>) -> Resolution {
    let resolution = if let Some((name, hex)) = palette::entry(query.token()) {
        Resolution::known(hex, name)
    } else if query.is_hex_like() {
        let hex = normalize(query.token());
        match palette::name_for(&hex) {
            Some(name) => Resolution::known(hex, name),
            None => Resolution::unknown(hex),
        }
    } else {
        Resolution::unknown(query.raw())
    };

    debug!(
        input = query.raw(),
        resolution = %resolution,
        "resolved color"
    );
    resolution
}
