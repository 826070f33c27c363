use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;

/// A well-plate layout. The body is kept as returned by the server.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq)]
pub struct WellPlateElement {
    pub id: Option<String>,
    pub body: Value,
}

impl WellPlateElement {
    #[must_use]
    pub fn from_wire(body: Value) -> Self {
        let id = match body.get("id") {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        Self { id, body }
    }
}
