//! Normalization of the API's list-response variants.
//!
//! List endpoints return, depending on endpoint: a bare array, an
//! `{items, total_items}` / `{items, total}` envelope, or a nested
//! `{value: {items}}` envelope. Everything is folded into [`ListPage`]
//! here so callers only ever see one shape.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::ApiError;

/// Canonical list payload: one page of items plus the total row count.
#[derive(Debug, Clone)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T: DeserializeOwned> ListPage<T> {
    /// Normalizes any of the known wire variants.
    ///
    /// When no total is present (bare arrays, `{value:{items}}`), the item
    /// count stands in for it.
    pub fn from_value(value: Value) -> Result<Self, ApiError> {
        let (items_value, total) = match value {
            Value::Array(_) => (value, None),
            Value::Object(mut map) => {
                let total = ["total_items", "total", "totalCount"]
                    .iter()
                    .find_map(|k| map.get(*k).and_then(Value::as_u64))
                    .map(|t| t as usize);
                let items = if let Some(items) = map.remove("items") {
                    items
                } else if let Some(Value::Object(mut inner)) = map.remove("value") {
                    inner.remove("items").unwrap_or(Value::Null)
                } else {
                    Value::Null
                };
                match items {
                    Value::Array(_) => (items, total),
                    Value::Null => {
                        return Err(ApiError::Decode(
                            "list response carries no item array".to_string(),
                        ));
                    }
                    other => {
                        return Err(ApiError::Decode(format!(
                            "expected item array, got {}",
                            type_name(&other)
                        )));
                    }
                }
            }
            other => {
                return Err(ApiError::Decode(format!(
                    "expected array or envelope, got {}",
                    type_name(&other)
                )));
            }
        };

        let items: Vec<T> = serde_json::from_value(items_value)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let total = total.unwrap_or(items.len());
        Ok(Self { items, total })
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
