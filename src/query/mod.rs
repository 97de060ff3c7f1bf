mod finite;

use crate::error::SerializationError;
use finite::ensure_finite;
use log::warn;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use url::Url;

/// Records holding the optional query parameters of one API call.
///
/// Field policy lives in the serde attributes of the implementing type:
/// `rename` gives the wire name, `skip_serializing_if` drops a field holding
/// its default value and `skip` keeps a field (path segment, request body)
/// out of the query string entirely.
pub trait QueryParams: Serialize {
    /// Wire name to string value, holding only the fields that were set.
    fn query_params(&self) -> Result<BTreeMap<String, String>, SerializationError> {
        to_query_map(self)
    }

    /// Same as [`QueryParams::query_params`], ordered by wire name.
    fn query_pairs(&self) -> Result<Vec<(String, String)>, SerializationError> {
        Ok(self.query_params()?.into_iter().collect())
    }
}

/// Encodes any serializable record into a query-parameter map.
///
/// Strings are kept as is, booleans become `"true"`/`"false"` and numbers
/// their decimal form. Unset optionals (`null`) are left out. Sequences,
/// nested objects and non-finite floats (NaN, infinities) have no query
/// encoding and are rejected.
pub fn to_query_map<T>(record: &T) -> Result<BTreeMap<String, String>, SerializationError>
where
    T: Serialize + ?Sized,
{
    let fields = match serde_json::to_value(record)? {
        Value::Object(fields) => fields,
        other => {
            return Err(SerializationError::NotARecord {
                kind: value_kind(&other),
            })
        }
    };
    if let Err(err) = ensure_finite(record) {
        warn!("query parameters rejected: {err}");
        return Err(err);
    }

    let mut params = BTreeMap::new();
    for (name, value) in fields {
        let encoded = match value {
            Value::Null => continue,
            Value::String(value) => value,
            Value::Bool(value) => value.to_string(),
            Value::Number(value) => value.to_string(),
            other @ (Value::Array(_) | Value::Object(_)) => {
                let kind = value_kind(&other);
                warn!("query parameter {name} rejected: {kind} values have no string encoding");
                return Err(SerializationError::UnsupportedValue { field: name, kind });
            }
        };
        params.insert(name, encoded);
    }
    Ok(params)
}

/// Omit-if-default predicate for `#[serde(skip_serializing_if = ...)]`.
pub fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Appends the parameters to the query string of `url`.
///
/// An empty map leaves the url untouched.
pub fn append_query(url: &mut Url, params: &BTreeMap<String, String>) {
    if params.is_empty() {
        return;
    }
    let mut pairs = url.query_pairs_mut();
    for (name, value) in params {
        pairs.append_pair(name, value);
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
