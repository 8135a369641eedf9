//! JSON rendering for CLI output

/// Serialize a JSON value, compact or with 2-space indentation
pub fn render_json(value: &serde_json::Value, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
