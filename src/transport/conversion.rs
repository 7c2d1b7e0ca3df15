use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};
use serde_json::Value;

use crate::domain::{Credentials, Feedback, FeedbackError, FeedbackOutcome, FeedbackTarget};
use crate::transport::{GatewayRequest, credential_body};

const HOST: &str = "api.nexmo.com";
const VOICE_PATH: &str = "/conversions/voice";
const SMS_PATH: &str = "/conversions/sms";

/// The conversion API only accepts this exact layout, without an offset.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Encode a conversion request.
///
/// `timestamp` is always sent: the conversion API does not fall back to "now" when the
/// field is missing.
pub fn encode_feedback_request(credentials: &Credentials, feedback: &Feedback) -> GatewayRequest {
    let path = match feedback.target() {
        FeedbackTarget::Call(_) => VOICE_PATH,
        FeedbackTarget::Message(_) => SMS_PATH,
    };

    let mut body = credential_body(credentials);
    body.insert(
        "message-id".to_owned(),
        Value::from(feedback.target().as_str()),
    );
    body.insert("delivered".to_owned(), Value::from(feedback.delivered()));
    body.insert(
        "timestamp".to_owned(),
        Value::from(format_timestamp(&feedback.time().with_timezone(&Local))),
    );

    GatewayRequest::post_json(HOST, path, body)
}

/// Format `time` in its own zone as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Any 2xx status is success; otherwise the raw body is the failure text.
pub fn decode_feedback_response(status: u16, body: String) -> FeedbackOutcome {
    if (200..=299).contains(&status) {
        return Ok(());
    }
    Err(FeedbackError { status, text: body })
}
