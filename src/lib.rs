//! Typed Rust client for the Nexmo SMS, text-to-speech and conversion APIs.
//!
//! The crate is split into a domain layer of strong types, a transport layer for the
//! wire format, and a small client layer orchestrating requests.
//!
//! Every operation distinguishes three kinds of failure:
//! - the request could not be completed ([`NexmoError::Transport`], [`NexmoError::HttpStatus`]),
//! - the response body had an unexpected shape ([`NexmoError::Parse`]),
//! - Nexmo rejected the request (the `Err` arm of the returned outcome).
//!
//! ```rust,no_run
//! use nexmo::{Credentials, Message, NexmoClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NexmoClient::new(Credentials::new("key", "secret"));
//!     let message = Message::text("Acme", "447700900000", "hello");
//!     match client.send_message(&message).await? {
//!         Ok(response) => println!("sent as {}", response.first()),
//!         Err(rejected) if rejected.status.is_retryable() => println!("try later"),
//!         Err(rejected) => return Err(rejected.into()),
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{NexmoClient, NexmoClientBuilder, NexmoError};
pub use domain::{
    Call, CallErrorResponse, CallErrorStatus, CallId, CallOutcome, Charset, Credentials,
    Environment, Feedback, FeedbackError, FeedbackOutcome, FeedbackTarget, Message,
    MessageErrorResponse, MessageErrorStatus, MessageId, MessageOutcome, MessageResponse,
    UnknownCharset,
};
pub use transport::ParseError;
