//! Config resolution: converts free-text input into a structured
//! configuration value for a new experiment.

use serde_json::{json, Value};

/// Resolve raw config text into a JSON value.
///
/// Dual-mode input: power users paste (or upload) a full JSON
/// configuration, casual users type a single identifier that becomes a
/// named-run shorthand.
///
/// Valid JSON is forwarded verbatim whatever its shape, including arrays
/// and bare primitives. Anything that does not parse is treated as a run name
/// and wrapped as `{"run_name": <trimmed text>}`. Empty text is not valid
/// JSON, so it resolves to `{"run_name": ""}`.
pub fn resolve_config(raw: &str) -> Value {
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(_) => json!({ "run_name": raw.trim() }),
    }
}
