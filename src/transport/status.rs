use serde::Deserialize;
use serde::de::Error as DeError;

/// Gateway `status` field.
///
/// Nexmo sends it as a JSON string holding a decimal number (`"0"`, `"15"`). A bare JSON
/// number, or a string that is not a number, is a structural error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportStatusCode(u32);

impl TransportStatusCode {
    /// `"0"` is the only success token.
    pub fn is_success(self) -> bool {
        self.0 == 0
    }

    /// Raw numeric code.
    pub fn code(self) -> u32 {
        self.0
    }
}

impl<'de> Deserialize<'de> for TransportStatusCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        token
            .parse::<u32>()
            .map(Self)
            .map_err(|_| D::Error::custom(format!("expected numeric status token, got {token:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_string_typed_numbers() {
        let status: TransportStatusCode = serde_json::from_str("\"0\"").unwrap();
        assert!(status.is_success());

        let status: TransportStatusCode = serde_json::from_str("\"15\"").unwrap();
        assert!(!status.is_success());
        assert_eq!(status.code(), 15);
    }

    #[test]
    fn rejects_numbers_and_non_numeric_strings() {
        assert!(serde_json::from_str::<TransportStatusCode>("0").is_err());
        assert!(serde_json::from_str::<TransportStatusCode>("\"OK\"").is_err());
        assert!(serde_json::from_str::<TransportStatusCode>("\"-1\"").is_err());
        assert!(serde_json::from_str::<TransportStatusCode>("null").is_err());
    }
}
