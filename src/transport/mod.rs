//! Transport layer: request construction and wire-format decoding.

mod conversion;
mod sms;
mod status;
mod voice;

use serde_json::{Map, Value};
use url::Url;

use crate::domain::Credentials;

pub use conversion::{decode_feedback_response, encode_feedback_request};
pub use sms::{decode_sms_json_response, encode_sms_request};
pub use voice::{decode_call_json_response, encode_call_request};

#[derive(Debug, thiserror::Error)]
/// Response body did not have the shape expected for the operation.
///
/// This is never a gateway rejection; those decode into the operation's error response.
pub enum ParseError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("successful response is missing `{field}`")]
    MissingField { field: &'static str },

    #[error("response contains no message parts")]
    EmptyMessages,
}

#[derive(Debug, Clone, PartialEq)]
/// Fully formed HTTP request for one gateway call.
pub struct GatewayRequest {
    pub method: reqwest::Method,
    pub host: &'static str,
    pub path: &'static str,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: String,
}

impl GatewayRequest {
    fn post_json(host: &'static str, path: &'static str, body: Map<String, Value>) -> Self {
        Self {
            method: reqwest::Method::POST,
            host,
            path,
            headers: vec![("Content-Type", "application/json")],
            body: Value::Object(body).to_string(),
        }
    }

    /// `https://{host}{path}`, or `path` appended to `base` when one is configured.
    ///
    /// `path` is joined relative to `base`, so a base ending in `/` keeps its own path prefix.
    pub fn url(&self, base: Option<&Url>) -> Result<Url, url::ParseError> {
        match base {
            Some(base) => base.join(self.path.trim_start_matches('/')),
            None => Url::parse(&format!("https://{}{}", self.host, self.path)),
        }
    }
}

/// Request body seeded with `api_key`/`api_secret`.
///
/// Credential bytes are mapped one byte per character (ISO-8859-1), not decoded as UTF-8.
fn credential_body(credentials: &Credentials) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert(
        Credentials::KEY_FIELD.to_owned(),
        Value::String(latin1(credentials.key())),
    );
    body.insert(
        Credentials::SECRET_FIELD.to_owned(),
        Value::String(latin1(credentials.secret())),
    );
    body
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
