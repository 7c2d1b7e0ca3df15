use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq)]
/// Nexmo API key/secret pair.
///
/// Both values are opaque bytes. They are sent on every request and never validated.
/// The `Debug` output is redacted so credentials do not leak into logs.
pub struct Credentials {
    key: Vec<u8>,
    secret: Vec<u8>,
}

impl Credentials {
    /// JSON field name for the key (`api_key`).
    pub const KEY_FIELD: &'static str = "api_key";
    /// JSON field name for the secret (`api_secret`).
    pub const SECRET_FIELD: &'static str = "api_secret";

    /// Create credentials from raw key and secret bytes.
    pub fn new(key: impl Into<Vec<u8>>, secret: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }

    /// Raw key bytes.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Raw secret bytes.
    pub fn secret(&self) -> &[u8] {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &"<redacted>")
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Message id (`message-id`) assigned by Nexmo to one accepted SMS part.
pub struct MessageId(String);

impl MessageId {
    /// JSON field name used by Nexmo (`message-id`).
    pub const FIELD: &'static str = "message-id";

    /// Wrap an id returned by Nexmo.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the id text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Call id (`call_id`) assigned by Nexmo to an accepted text-to-speech call.
pub struct CallId(String);

impl CallId {
    /// JSON field name used by Nexmo (`call_id`).
    pub const FIELD: &'static str = "call_id";

    /// Wrap an id returned by Nexmo.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the id text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
/// SMS payload encoding (`type`).
pub enum Charset {
    /// GSM 7-bit alphabet, wire token `text`.
    #[default]
    #[serde(rename = "text")]
    Gsm7,
    /// 8-bit binary payload, wire token `binary`.
    #[serde(rename = "binary")]
    Gsm8,
    /// UCS-2 payload, wire token `unicode`.
    #[serde(rename = "unicode")]
    Ucs2,
}

impl Charset {
    /// JSON field name used by Nexmo (`type`).
    pub const FIELD: &'static str = "type";

    /// Wire token for this charset.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gsm7 => "text",
            Self::Gsm8 => "binary",
            Self::Ucs2 => "unicode",
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown charset token: {token}")]
/// Returned when parsing a [`Charset`] from a token other than `text`, `binary` or `unicode`.
pub struct UnknownCharset {
    pub token: String,
}

impl FromStr for Charset {
    type Err = UnknownCharset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Gsm7),
            "binary" => Ok(Self::Gsm8),
            "unicode" => Ok(Self::Ucs2),
            other => Err(UnknownCharset {
                token: other.to_owned(),
            }),
        }
    }
}
