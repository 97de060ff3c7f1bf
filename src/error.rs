use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Error reported by the server for a failed admin or OIDC call.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ApiError {
    pub code: i32,
    pub message: String,
}

impl ApiError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Builds the error for a failed response from its status code and body.
    ///
    /// The message is taken from the first non-empty `errorMessage`,
    /// `error_description` or `error` member of a JSON body, then from the raw
    /// body text, and finally falls back to `HTTP <code>`.
    pub fn from_response(code: i32, body: &[u8]) -> Self {
        let message = message_from_json(body)
            .or_else(|| message_from_text(body))
            .unwrap_or_else(|| fallback_message(code));
        Self { code, message }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "code={}", self.code)
        } else {
            f.write_str(&self.message)
        }
    }
}

impl std::error::Error for ApiError {}

const MESSAGE_KEYS: [&str; 3] = ["errorMessage", "error_description", "error"];

fn message_from_json(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    let object = value.as_object()?;
    MESSAGE_KEYS.iter().find_map(|key| {
        object
            .get(*key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|message| !message.is_empty())
            .map(str::to_string)
    })
}

fn message_from_text(body: &[u8]) -> Option<String> {
    match std::str::from_utf8(body) {
        Ok(text) => {
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
        Err(err) => {
            warn!("error response body is not valid utf-8: {err}");
            None
        }
    }
}

fn fallback_message(code: i32) -> String {
    format!("HTTP {code}")
}

/// Failure to turn a query-parameter record into its string map.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    #[error("json encoding error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("query parameters must encode to an object, got {kind}")]
    NotARecord { kind: &'static str },
    #[error("query parameter {field} has no string encoding for {kind} values")]
    UnsupportedValue { field: String, kind: &'static str },
}

impl serde::ser::Error for SerializationError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        SerializationError::Json(<serde_json::Error as serde::ser::Error>::custom(msg))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("jwt error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlg(String),
    #[error("unsupported key type: {0}")]
    UnsupportedKeyType(String),
    #[error("empty path segment in {path}")]
    EmptyPathSegment { path: String },
    #[error("missing realm")]
    MissingRealm,
    #[error("serialization error: {0}")]
    Serialization(#[from] SerializationError),
    #[error("keycloak api error: {0}")]
    Api(ApiError),
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}
