use serde::Deserialize;
use serde_json::Value;

use crate::domain::{Call, CallErrorResponse, CallErrorStatus, CallId, CallOutcome, Credentials};
use crate::transport::status::TransportStatusCode;
use crate::transport::{GatewayRequest, ParseError, credential_body};

const HOST: &str = "api.nexmo.com";
const PATH: &str = "/tts/json";

#[derive(Debug, Clone, Deserialize)]
struct CallJsonResponse {
    status: TransportStatusCode,
    #[serde(default)]
    call_id: Option<String>,
    #[serde(rename = "error-text", alias = "error_text", default)]
    error_text: Option<String>,
}

/// Build the `/tts/json` request; absent options are sent as `null`.
pub fn encode_call_request(credentials: &Credentials, call: &Call) -> GatewayRequest {
    let mut body = credential_body(credentials);
    body.insert("from".to_owned(), Value::from(call.from.clone()));
    body.insert("to".to_owned(), Value::from(call.to.as_str()));
    body.insert("text".to_owned(), Value::from(call.body.as_str()));
    body.insert("repeat".to_owned(), Value::from(call.repeat_count));
    body.insert("lg".to_owned(), Value::from(call.language.clone()));

    GatewayRequest::post_json(HOST, PATH, body)
}

/// Decode a `/tts/json` response into a call id or the gateway's rejection.
pub fn decode_call_json_response(json: &str) -> Result<CallOutcome, ParseError> {
    let parsed: CallJsonResponse = serde_json::from_str(json)?;

    if parsed.status.is_success() {
        let call_id = parsed.call_id.ok_or(ParseError::MissingField {
            field: CallId::FIELD,
        })?;
        return Ok(Ok(CallId::new(call_id)));
    }

    Ok(Err(CallErrorResponse {
        status: CallErrorStatus::from_code(parsed.status.code()),
        error_text: parsed.error_text,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_call_with_all_fields() {
        let call = Call {
            from: Some("447700900001".to_owned()),
            to: "447700900000".to_owned(),
            body: "your code is 1234".to_owned(),
            language: Some("en-gb".to_owned()),
            repeat_count: Some(2),
        };
        let request = encode_call_request(&Credentials::new("key", "secret"), &call);

        assert_eq!(request.host, "api.nexmo.com");
        assert_eq!(request.path, "/tts/json");
        let body: Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "api_key": "key",
                "api_secret": "secret",
                "from": "447700900001",
                "to": "447700900000",
                "text": "your code is 1234",
                "repeat": 2,
                "lg": "en-gb"
            })
        );
    }

    #[test]
    fn encode_call_sends_null_for_absent_options() {
        let call = Call::new("447700900000", "hello");
        let request = encode_call_request(&Credentials::new("key", "secret"), &call);

        let body: Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body["from"], Value::Null);
        assert_eq!(body["repeat"], Value::Null);
        assert_eq!(body["lg"], Value::Null);
        assert!(body.as_object().unwrap().contains_key("lg"));
    }

    #[test]
    fn decode_success_returns_call_id() {
        let json = r#"{"call_id":"c0ffee","to":"447700900000","status":"0","error_text":"Success"}"#;
        let call_id = decode_call_json_response(json).unwrap().unwrap();
        assert_eq!(call_id, CallId::new("c0ffee"));
    }

    #[test]
    fn decode_rejection_uses_voice_table() {
        let json = r#"{"status":"7","error-text":"Destination barred"}"#;
        let err = decode_call_json_response(json).unwrap().unwrap_err();
        assert_eq!(err.status, CallErrorStatus::DestinationBarred);
        assert_eq!(err.error_text.as_deref(), Some("Destination barred"));

        let json = r#"{"status":"999"}"#;
        let err = decode_call_json_response(json).unwrap().unwrap_err();
        assert_eq!(err.status, CallErrorStatus::Other(999));
        assert_eq!(err.error_text, None);
    }

    #[test]
    fn decode_maps_every_known_status_token() {
        let cases = [
            ("1", CallErrorStatus::Throttled),
            ("5", CallErrorStatus::Internal),
            ("6", CallErrorStatus::DestinationNotPermitted),
            ("7", CallErrorStatus::DestinationBarred),
            ("9", CallErrorStatus::PartnerQuotaExceeded),
            ("15", CallErrorStatus::InvalidDestinationAddress),
            ("17", CallErrorStatus::Unroutable),
            ("42", CallErrorStatus::Other(42)),
        ];
        for (token, expected) in cases {
            let json = format!(r#"{{"status":"{token}"}}"#);
            let err = decode_call_json_response(&json).unwrap().unwrap_err();
            assert_eq!(err.status, expected, "status token {token}");
        }
    }

    #[test]
    fn decode_success_without_call_id_is_parse_error() {
        let err = decode_call_json_response(r#"{"status":"0"}"#).unwrap_err();
        assert!(matches!(err, ParseError::MissingField { field: "call_id" }));
    }

    #[test]
    fn decode_missing_status_is_parse_error() {
        let err = decode_call_json_response(r#"{"call_id":"c0ffee"}"#).unwrap_err();
        assert!(matches!(err, ParseError::Json(_)));
    }
}
