//! Data-driven resolution cases.
//!
//! Each `tests/cases/*.json` file holds one input and the hex/name pair it
//! must resolve to. JSON keeps surrounding whitespace and casing exact.

use datatest_stable::Utf8Path;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Case {
    input: String,
    hex: String,
    name: String,
}

fn check_case(path: &Utf8Path) -> datatest_stable::Result<()> {
    let source = std::fs::read_to_string(path)?;
    let case: Case = serde_json::from_str(&source)?;

    let resolution = colorname::resolve(&case.input);
    if resolution.hex != case.hex || resolution.name != case.name {
        return Err(format!(
            "{path}: {:?} resolved to ({}, {}), expected ({}, {})",
            case.input, resolution.hex, resolution.name, case.hex, case.name
        )
        .into());
    }
    Ok(())
}

datatest_stable::harness! {
    { test = check_case, root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/cases"), pattern = r"\.json$" },
}
