use serde::Deserialize;
use serde_json::Value;

use crate::domain::{
    Charset, Credentials, Environment, Message, MessageErrorResponse, MessageErrorStatus,
    MessageId, MessageOutcome, MessageResponse,
};
use crate::transport::status::TransportStatusCode;
use crate::transport::{GatewayRequest, ParseError, credential_body};

const PRODUCTION_HOST: &str = "rest.nexmo.com";
const SANDBOX_HOST: &str = "rest-sandbox.nexmo.com";
const PATH: &str = "/sms/json";

#[derive(Debug, Clone, Deserialize)]
struct SmsJsonResponse {
    messages: Vec<SmsJsonPart>,
}

#[derive(Debug, Clone, Deserialize)]
struct SmsJsonPart {
    status: TransportStatusCode,
    #[serde(rename = "message-id", default)]
    message_id: Option<String>,
    #[serde(rename = "error-text", default)]
    error_text: Option<String>,
}

/// Build the `/sms/json` request on the host selected by `environment`.
pub fn encode_sms_request(
    credentials: &Credentials,
    environment: Environment,
    message: &Message,
) -> GatewayRequest {
    let host = match environment {
        Environment::Production => PRODUCTION_HOST,
        Environment::Sandbox => SANDBOX_HOST,
    };

    let mut body = credential_body(credentials);
    body.insert("from".to_owned(), Value::from(message.from.as_str()));
    body.insert("to".to_owned(), Value::from(message.to.as_str()));
    body.insert("text".to_owned(), Value::from(message.body.as_str()));
    body.insert(
        Charset::FIELD.to_owned(),
        Value::from(message.charset.as_str()),
    );

    GatewayRequest::post_json(host, PATH, body)
}

/// Decode an `/sms/json` response.
///
/// Every part must be well formed before any status is looked at. The first rejected part
/// decides the outcome; otherwise all part ids are returned in order.
pub fn decode_sms_json_response(json: &str) -> Result<MessageOutcome, ParseError> {
    let parsed: SmsJsonResponse = serde_json::from_str(json)?;

    let parts = parsed
        .messages
        .into_iter()
        .map(decode_part)
        .collect::<Result<Vec<_>, ParseError>>()?;

    match parts.into_iter().collect::<Result<Vec<MessageId>, _>>() {
        Ok(ids) => MessageResponse::new(ids)
            .map(Ok)
            .ok_or(ParseError::EmptyMessages),
        Err(rejected) => Ok(Err(rejected)),
    }
}

fn decode_part(part: SmsJsonPart) -> Result<Result<MessageId, MessageErrorResponse>, ParseError> {
    if part.status.is_success() {
        let id = part.message_id.ok_or(ParseError::MissingField {
            field: MessageId::FIELD,
        })?;
        return Ok(Ok(MessageId::new(id)));
    }

    Ok(Err(MessageErrorResponse {
        status: MessageErrorStatus::from_code(part.status.code()),
        error_text: part.error_text,
    }))
}
