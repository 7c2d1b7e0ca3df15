use chrono::{DateTime, Utc};

use crate::domain::value::{CallId, Charset, MessageId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Which SMS gateway host requests are sent to.
pub enum Environment {
    #[default]
    Production,
    Sandbox,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One SMS to send.
///
/// Sender, recipient and body are passed through unvalidated; Nexmo rejects what it
/// cannot route.
pub struct Message {
    pub from: String,
    pub to: String,
    pub body: String,
    pub charset: Charset,
}

impl Message {
    /// Create a GSM 7-bit text message.
    pub fn text(from: impl Into<String>, to: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            body: body.into(),
            charset: Charset::Gsm7,
        }
    }

    /// Create a UCS-2 message.
    pub fn unicode(
        from: impl Into<String>,
        to: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            charset: Charset::Ucs2,
            ..Self::text(from, to, body)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Text-to-speech call.
pub struct Call {
    /// Caller id; Nexmo picks one when absent.
    pub from: Option<String>,
    pub to: String,
    /// Text read out to the callee.
    pub body: String,
    /// Language code (`lg`), e.g. `en-us`.
    pub language: Option<String>,
    /// How many times the text is repeated (`repeat`).
    pub repeat_count: Option<u32>,
}

impl Call {
    /// Create a call with default caller id, language and repeat count.
    pub fn new(to: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            body: body.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// The message or call a [`Feedback`] event refers to.
pub enum FeedbackTarget {
    Call(CallId),
    Message(MessageId),
}

impl FeedbackTarget {
    /// Underlying identifier text, sent as `message-id` for both variants.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Call(id) => id.as_str(),
            Self::Message(id) => id.as_str(),
        }
    }
}

impl From<CallId> for FeedbackTarget {
    fn from(value: CallId) -> Self {
        Self::Call(value)
    }
}

impl From<MessageId> for FeedbackTarget {
    fn from(value: MessageId) -> Self {
        Self::Message(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Conversion feedback: whether a message or call reached its recipient.
pub struct Feedback {
    target: FeedbackTarget,
    time: DateTime<Utc>,
    delivered: bool,
}

impl Feedback {
    /// Feedback stamped with the current time.
    pub fn new(target: impl Into<FeedbackTarget>, delivered: bool) -> Self {
        Self::at(target, Utc::now(), delivered)
    }

    /// Feedback for an explicit point in time.
    pub fn at(target: impl Into<FeedbackTarget>, time: DateTime<Utc>, delivered: bool) -> Self {
        Self {
            target: target.into(),
            time,
            delivered,
        }
    }

    /// Message or call this feedback refers to.
    pub fn target(&self) -> &FeedbackTarget {
        &self.target
    }

    /// When the delivery happened.
    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Whether the recipient received the message or call.
    pub fn delivered(&self) -> bool {
        self.delivered
    }
}
