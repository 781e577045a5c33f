//! Wire contract between a transport and the roll operations.
//!
//! Request bodies are parsed leniently: a body not declared as JSON, or one
//! that is not a JSON object, is treated as an empty object, and a field only
//! counts as present when it is a non-empty string. Validation itself is left to [`crate::roll`].

use crate::error::RollError;
use crate::roll;
use crate::seed::SeedSource;
use crate::types::{Roll, Verification};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a commit request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RollDiceRequest {
    pub public_seed: Option<String>,
}

/// Body of a verification request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyRollRequest {
    pub public_seed: Option<String>,
    pub secret_seed: Option<String>,
}

/// Client-error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<RollError> for ErrorBody {
    fn from(err: RollError) -> Self {
        ErrorBody {
            error: err.to_string(),
        }
    }
}

/// Whether a `Content-Type` value names a JSON body
/// (`application/json` or any `+json` suffix, parameters ignored).
pub fn is_json_content_type(content_type: Option<&str>) -> bool {
    let Some(value) = content_type else {
        return false;
    };
    let essence = value.split(';').next().unwrap_or_default().trim();
    let essence = essence.to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

impl RollDiceRequest {
    /// Parse a body sent with the given `Content-Type`.
    pub fn from_body(content_type: Option<&str>, body: &[u8]) -> Self {
        if is_json_content_type(content_type) {
            Self::from_slice(body)
        } else {
            Self::default()
        }
    }

    pub fn from_slice(body: &[u8]) -> Self {
        let fields = object_fields(body);
        Self {
            public_seed: string_field(&fields, "publicSeed"),
        }
    }

    pub fn execute(&self, source: &dyn SeedSource) -> Result<Roll, RollError> {
        roll::commit(source, self.public_seed.as_deref())
    }
}

impl VerifyRollRequest {
    /// Parse a body sent with the given `Content-Type`.
    pub fn from_body(content_type: Option<&str>, body: &[u8]) -> Self {
        if is_json_content_type(content_type) {
            Self::from_slice(body)
        } else {
            Self::default()
        }
    }

    pub fn from_slice(body: &[u8]) -> Self {
        let fields = object_fields(body);
        Self {
            public_seed: string_field(&fields, "publicSeed"),
            secret_seed: string_field(&fields, "secretSeed"),
        }
    }

    pub fn execute(&self) -> Result<Verification, RollError> {
        roll::verify(self.public_seed.as_deref(), self.secret_seed.as_deref())
    }
}

fn object_fields(body: &[u8]) -> Map<String, Value> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

fn string_field(fields: &Map<String, Value>, name: &str) -> Option<String> {
    fields.get(name).and_then(Value::as_str).map(str::to_owned)
}
