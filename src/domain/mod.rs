//! Domain layer: strong types and gateway status tables (no I/O).

mod request;
mod response;
mod value;

pub use request::{Call, Environment, Feedback, FeedbackTarget, Message};
pub use response::{
    CallErrorResponse, CallErrorStatus, CallOutcome, FeedbackError, FeedbackOutcome,
    MessageErrorResponse, MessageErrorStatus, MessageOutcome, MessageResponse,
};
pub use value::{CallId, Charset, Credentials, MessageId, UnknownCharset};

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn message_status_known_mapping() {
        let cases = [
            (1, MessageErrorStatus::Throttled),
            (5, MessageErrorStatus::Internal),
            (6, MessageErrorStatus::Unroutable),
            (7, MessageErrorStatus::NumberBarred),
            (8, MessageErrorStatus::PartnerAccountBarred),
            (9, MessageErrorStatus::PartnerQuotaExceeded),
            (12, MessageErrorStatus::TooLong),
            (13, MessageErrorStatus::CommunicationFailed),
            (15, MessageErrorStatus::InvalidSenderAddress),
            (19, MessageErrorStatus::FacilityNotAllowed),
            (20, MessageErrorStatus::InvalidMessageClass),
        ];
        for (code, expected) in cases {
            let status = MessageErrorStatus::from_code(code);
            assert_eq!(status, expected);
            assert_eq!(status.code(), code);
        }

        assert_eq!(
            MessageErrorStatus::from_code(999),
            MessageErrorStatus::Other(999)
        );
        assert_eq!(MessageErrorStatus::from_code(2).code(), 2);
    }

    #[test]
    fn call_status_known_mapping() {
        let cases = [
            (1, CallErrorStatus::Throttled),
            (5, CallErrorStatus::Internal),
            (6, CallErrorStatus::DestinationNotPermitted),
            (7, CallErrorStatus::DestinationBarred),
            (9, CallErrorStatus::PartnerQuotaExceeded),
            (15, CallErrorStatus::InvalidDestinationAddress),
            (17, CallErrorStatus::Unroutable),
        ];
        for (code, expected) in cases {
            let status = CallErrorStatus::from_code(code);
            assert_eq!(status, expected);
            assert_eq!(status.code(), code);
        }

        assert_eq!(CallErrorStatus::from_code(999), CallErrorStatus::Other(999));
    }

    #[test]
    fn code_seven_differs_between_sms_and_voice() {
        assert_eq!(
            MessageErrorStatus::from_code(7),
            MessageErrorStatus::NumberBarred
        );
        assert_eq!(CallErrorStatus::from_code(7), CallErrorStatus::DestinationBarred);
    }

    #[test]
    fn retryable_statuses() {
        assert!(MessageErrorStatus::Throttled.is_retryable());
        assert!(!MessageErrorStatus::NumberBarred.is_retryable());
        assert!(!MessageErrorStatus::Other(42).is_retryable());
        assert!(CallErrorStatus::Throttled.is_retryable());
        assert!(!CallErrorStatus::DestinationBarred.is_retryable());
    }

    #[test]
    fn message_response_requires_an_id() {
        assert!(MessageResponse::new(Vec::new()).is_none());

        let response =
            MessageResponse::new(vec![MessageId::new("a"), MessageId::new("b")]).unwrap();
        assert_eq!(response.first().as_str(), "a");
        assert_eq!(response.ids().len(), 2);
    }

    #[test]
    fn error_responses_display_code_and_text() {
        let err = MessageErrorResponse {
            status: MessageErrorStatus::Throttled,
            error_text: Some("Throughput Rate Exceeded".to_owned()),
        };
        assert_eq!(
            err.to_string(),
            "message rejected with status 1: Throughput Rate Exceeded"
        );

        let err = CallErrorResponse {
            status: CallErrorStatus::Other(42),
            error_text: None,
        };
        assert_eq!(err.to_string(), "call rejected with status 42: no error text");
    }

    #[test]
    fn feedback_target_dispatch() {
        let time = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let feedback = Feedback::at(CallId::new("call-1"), time, true);
        assert!(matches!(feedback.target(), FeedbackTarget::Call(_)));
        assert_eq!(feedback.target().as_str(), "call-1");
        assert_eq!(feedback.time(), time);
        assert!(feedback.delivered());

        let feedback = Feedback::new(MessageId::new("msg-1"), false);
        assert!(matches!(feedback.target(), FeedbackTarget::Message(_)));
        assert!(!feedback.delivered());
    }

    #[test]
    fn call_and_message_constructors() {
        let call = Call::new("447700900000", "hello");
        assert!(call.from.is_none());
        assert!(call.language.is_none());
        assert!(call.repeat_count.is_none());

        let message = Message::unicode("Acme", "447700900000", "привет");
        assert_eq!(message.charset, Charset::Ucs2);
        assert_eq!(Message::text("a", "b", "c").charset, Charset::Gsm7);
        assert_eq!(Environment::default(), Environment::Production);
    }
}
