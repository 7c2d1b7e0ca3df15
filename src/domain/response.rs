use crate::domain::value::{CallId, MessageId};

/// Result of a single SMS send as reported by Nexmo.
pub type MessageOutcome = Result<MessageResponse, MessageErrorResponse>;

/// Result of a text-to-speech call as reported by Nexmo.
pub type CallOutcome = Result<CallId, CallErrorResponse>;

/// Result of a conversion feedback submission.
pub type FeedbackOutcome = Result<(), FeedbackError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Ids of every part an accepted SMS was split into, in gateway order.
///
/// Invariant: holds at least one id.
pub struct MessageResponse {
    ids: Vec<MessageId>,
}

impl MessageResponse {
    /// Returns `None` for an empty id list.
    pub fn new(ids: Vec<MessageId>) -> Option<Self> {
        if ids.is_empty() {
            return None;
        }
        Some(Self { ids })
    }

    /// Part ids in gateway order.
    pub fn ids(&self) -> &[MessageId] {
        &self.ids
    }

    /// Id of the first part.
    pub fn first(&self) -> &MessageId {
        &self.ids[0]
    }

    /// Consume the response, returning the part ids.
    pub fn into_ids(self) -> Vec<MessageId> {
        self.ids
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Nexmo SMS rejection codes.
///
/// Codes this crate does not know are kept in [`MessageErrorStatus::Other`].
pub enum MessageErrorStatus {
    Throttled,
    Internal,
    Unroutable,
    NumberBarred,
    PartnerAccountBarred,
    PartnerQuotaExceeded,
    TooLong,
    CommunicationFailed,
    InvalidSenderAddress,
    FacilityNotAllowed,
    InvalidMessageClass,
    Other(u32),
}

impl MessageErrorStatus {
    /// Map a raw SMS status code. `0` is success and never reaches this table.
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => Self::Throttled,
            5 => Self::Internal,
            6 => Self::Unroutable,
            7 => Self::NumberBarred,
            8 => Self::PartnerAccountBarred,
            9 => Self::PartnerQuotaExceeded,
            12 => Self::TooLong,
            13 => Self::CommunicationFailed,
            15 => Self::InvalidSenderAddress,
            19 => Self::FacilityNotAllowed,
            20 => Self::InvalidMessageClass,
            other => Self::Other(other),
        }
    }

    /// Raw numeric code.
    pub fn code(self) -> u32 {
        match self {
            Self::Throttled => 1,
            Self::Internal => 5,
            Self::Unroutable => 6,
            Self::NumberBarred => 7,
            Self::PartnerAccountBarred => 8,
            Self::PartnerQuotaExceeded => 9,
            Self::TooLong => 12,
            Self::CommunicationFailed => 13,
            Self::InvalidSenderAddress => 15,
            Self::FacilityNotAllowed => 19,
            Self::InvalidMessageClass => 20,
            Self::Other(code) => code,
        }
    }

    /// Whether the same request may succeed when sent again later.
    pub fn is_retryable(self) -> bool {
        matches!(
            self,
            Self::Throttled | Self::Internal | Self::CommunicationFailed
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("message rejected with status {}: {}", .status.code(), .error_text.as_deref().unwrap_or("no error text"))]
/// Nexmo rejected an SMS part.
pub struct MessageErrorResponse {
    pub status: MessageErrorStatus,
    pub error_text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Nexmo text-to-speech rejection codes.
///
/// The numbering differs from [`MessageErrorStatus`]; the two tables are unrelated.
pub enum CallErrorStatus {
    Throttled,
    Internal,
    DestinationNotPermitted,
    DestinationBarred,
    PartnerQuotaExceeded,
    InvalidDestinationAddress,
    Unroutable,
    Other(u32),
}

impl CallErrorStatus {
    /// Map a raw call status code. `0` is success and never reaches this table.
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => Self::Throttled,
            5 => Self::Internal,
            6 => Self::DestinationNotPermitted,
            7 => Self::DestinationBarred,
            9 => Self::PartnerQuotaExceeded,
            15 => Self::InvalidDestinationAddress,
            17 => Self::Unroutable,
            other => Self::Other(other),
        }
    }

    /// Raw numeric code.
    pub fn code(self) -> u32 {
        match self {
            Self::Throttled => 1,
            Self::Internal => 5,
            Self::DestinationNotPermitted => 6,
            Self::DestinationBarred => 7,
            Self::PartnerQuotaExceeded => 9,
            Self::InvalidDestinationAddress => 15,
            Self::Unroutable => 17,
            Self::Other(code) => code,
        }
    }

    /// Whether the same request may succeed when sent again later.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::Throttled | Self::Internal)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("call rejected with status {}: {}", .status.code(), .error_text.as_deref().unwrap_or("no error text"))]
/// Nexmo rejected a text-to-speech call.
pub struct CallErrorResponse {
    pub status: CallErrorStatus,
    pub error_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("feedback rejected with HTTP {status}: {text}")]
/// The conversion endpoint answered with a non-success HTTP status.
///
/// There is no structured error body; `text` is the raw response body.
pub struct FeedbackError {
    pub status: u16,
    pub text: String,
}
