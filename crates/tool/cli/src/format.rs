use clap::ValueEnum;
use lazy_static::lazy_static;
use num_bigint::BigUint;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    static ref QUANTITY_REGEX: Regex =
        Regex::new("^0x[0-9a-fA-F]+$").expect("the pattern is valid");
}

/// Output rendering mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// canonical JSON with 2-space indentation
    Json,
    /// decimal-annotated rendering for bare hex quantities
    Pretty,
}

/// Renders a decoded JSON-RPC value for display.
///
/// Pretty mode annotates a top-level bare quantity string with its decimal
/// value and leaves any other string unchanged; non-string values fall back
/// to JSON. Hex fields nested inside objects are never annotated.
pub fn render(value: &Value, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_pretty_json(value),
        OutputFormat::Pretty => match value {
            Value::String(s) => match quantity_to_decimal(s) {
                Some(decimal) => format!("{s} ({decimal})"),
                None => s.clone(),
            },
            other => to_pretty_json(other),
        },
    }
}

fn to_pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).expect("JSON values always reserialize")
}

/// Decimal rendering of a `0x`-prefixed hex quantity of arbitrary width.
/// Returns `None` for anything that does not match the quantity pattern.
pub fn quantity_to_decimal(value: &str) -> Option<String> {
    if !QUANTITY_REGEX.is_match(value) {
        return None;
    }

    BigUint::parse_bytes(value[2..].as_bytes(), 16).map(|decimal| decimal.to_string())
}
