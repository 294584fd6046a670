use serde_json::Value;
use crate::ads::PlatformAds;
use crate::error::{CoreError, Result};

/// One platform entry of a successful response, still unparsed.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformPayload {
    pub platform: String,
    pub raw: String,
}

impl PlatformPayload {
    pub fn parse(&self) -> PlatformAds {
        PlatformAds::parse(&self.raw)
    }
}

/// Body of a `/generate-ads` response
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateAdsResponse {
    /// Platforms in the order the backend listed them
    Success(Vec<PlatformPayload>),
    Failure(String),
}

impl GenerateAdsResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_value(value)
    }

    /// A truthy top-level `error` wins over everything else in the body.
    pub fn from_value(value: Value) -> Result<Self> {
        let map = match value {
            Value::Object(map) => map,
            other => return Err(CoreError::UnexpectedShape(kind_of(&other))),
        };

        if let Some(error) = map.get("error").filter(|e| is_truthy(e)) {
            return Ok(Self::Failure(message_of(error)));
        }

        let platforms = map
            .into_iter()
            .map(|(platform, content)| PlatformPayload {
                platform,
                raw: match content {
                    Value::String(s) => s,
                    other => other.to_string(),
                },
            })
            .collect();

        Ok(Self::Success(platforms))
    }
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub(crate) fn message_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
