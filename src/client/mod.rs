//! Client layer: orchestrates transport calls and maps wire responses to outcomes.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    Call, CallOutcome, Credentials, Environment, Feedback, FeedbackOutcome, Message,
    MessageErrorResponse, MessageOutcome, MessageResponse,
};
use crate::transport::{GatewayRequest, ParseError};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        url: Url,
        request: &'a GatewayRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        url: Url,
        request: &'a GatewayRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let mut builder = self.client.request(request.method.clone(), url);
            for (name, value) in &request.headers {
                builder = builder.header(*name, *value);
            }
            let response = builder.body(request.body.clone()).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`NexmoClient`].
///
/// Gateway rejections are not errors at this level; they come back as the `Err` arm of the
/// operation's outcome. This type covers:
/// - transport failures, passed through unchanged,
/// - non-2xx HTTP statuses on the SMS and voice endpoints without a decodable body,
/// - response bodies that do not have the expected shape.
pub enum NexmoError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code with a body that is not a gateway payload.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be decoded as the expected format.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The configured base URL, or a URL derived from it, is invalid.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// [`NexmoClient::send_messages`] was called with no messages.
    #[error("no messages to send")]
    EmptyBatch,
}

#[derive(Debug, Clone)]
/// Builder for [`NexmoClient`].
///
/// Use this when you need the sandbox SMS host, a proxy/mock origin, a timeout, or a
/// custom user-agent.
pub struct NexmoClientBuilder {
    credentials: Credentials,
    environment: Environment,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl NexmoClientBuilder {
    /// Create a builder for production hosts with no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            environment: Environment::default(),
            base_url: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Select the SMS host. Voice and conversion calls always use production.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Send every request to this origin instead of the Nexmo hosts.
    ///
    /// Endpoint paths (`sms/json`, `tts/json`, ...) are appended to it. End the URL with `/`
    /// to keep a path prefix: `http://proxy/nexmo/` sends SMS to `http://proxy/nexmo/sms/json`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`NexmoClient`].
    pub fn build(self) -> Result<NexmoClient, NexmoError> {
        let base_url = self.base_url.as_deref().map(Url::parse).transpose()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| NexmoError::Transport(Box::new(err)))?;

        Ok(NexmoClient {
            credentials: self.credentials,
            environment: self.environment,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Nexmo client.
///
/// Every operation performs exactly one HTTP attempt per message, call or feedback event.
/// Retrying is left to the caller; [`crate::MessageErrorStatus::is_retryable`] and
/// [`crate::CallErrorStatus::is_retryable`] help decide.
pub struct NexmoClient {
    credentials: Credentials,
    environment: Environment,
    base_url: Option<Url>,
    http: Arc<dyn HttpTransport>,
}

impl NexmoClient {
    /// Create a client for the production hosts.
    ///
    /// For more customization, use [`NexmoClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            environment: Environment::Production,
            base_url: None,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> NexmoClientBuilder {
        NexmoClientBuilder::new(credentials)
    }

    /// SMS environment this client sends to.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Send one SMS.
    ///
    /// A long body may be split by the gateway; the response lists every part id. If any
    /// part is rejected the first rejection is returned instead.
    ///
    /// The body is decoded whatever the HTTP status, so a rejection sent with a 4xx/5xx
    /// status still carries its [`crate::MessageErrorStatus`].
    ///
    /// Errors:
    /// - [`NexmoError::Transport`] when the request itself fails,
    /// - [`NexmoError::HttpStatus`] for a non-2xx response whose body is not a `/sms/json` payload,
    /// - [`NexmoError::Parse`] when a 2xx body is not a well-formed `/sms/json` response.
    pub async fn send_message(&self, message: &Message) -> Result<MessageOutcome, NexmoError> {
        let request =
            crate::transport::encode_sms_request(&self.credentials, self.environment, message);
        let response = self.execute("sms", &request).await?;

        decode_body("sms", response, crate::transport::decode_sms_json_response)
    }

    /// Send several SMS, one request each, strictly in order.
    ///
    /// Stops at the first failure: a rejection is returned as the outcome and an error is
    /// returned as-is. Messages after the failing one are not sent.
    pub async fn send_messages(
        &self,
        messages: &[Message],
    ) -> Result<Result<Vec<MessageResponse>, MessageErrorResponse>, NexmoError> {
        if messages.is_empty() {
            return Err(NexmoError::EmptyBatch);
        }

        let mut responses = Vec::with_capacity(messages.len());
        for (index, message) in messages.iter().enumerate() {
            match self.send_message(message).await? {
                Ok(response) => responses.push(response),
                Err(rejected) => {
                    tracing::debug!(
                        index,
                        status = rejected.status.code(),
                        remaining = messages.len() - index - 1,
                        "message rejected, skipping the rest of the batch"
                    );
                    return Ok(Err(rejected));
                }
            }
        }

        Ok(Ok(responses))
    }

    /// Place a text-to-speech call.
    ///
    /// As with [`NexmoClient::send_message`], the body is decoded whatever the HTTP status.
    ///
    /// Errors:
    /// - [`NexmoError::Transport`] when the request itself fails,
    /// - [`NexmoError::HttpStatus`] for a non-2xx response whose body is not a `/tts/json` payload,
    /// - [`NexmoError::Parse`] when a 2xx body is not a well-formed `/tts/json` response.
    pub async fn send_call(&self, call: &Call) -> Result<CallOutcome, NexmoError> {
        let request = crate::transport::encode_call_request(&self.credentials, call);
        let response = self.execute("tts", &request).await?;

        decode_body("tts", response, crate::transport::decode_call_json_response)
    }

    /// Report whether a message or call was delivered.
    ///
    /// A non-2xx answer is not an error here: it is returned as
    /// [`crate::FeedbackError`] carrying the raw body.
    pub async fn send_feedback(&self, feedback: &Feedback) -> Result<FeedbackOutcome, NexmoError> {
        let request = crate::transport::encode_feedback_request(&self.credentials, feedback);
        let response = self.execute("conversion", &request).await?;

        Ok(crate::transport::decode_feedback_response(
            response.status,
            response.body,
        ))
    }

    async fn execute(
        &self,
        operation: &'static str,
        request: &GatewayRequest,
    ) -> Result<HttpResponse, NexmoError> {
        let url = request.url(self.base_url.as_ref())?;
        tracing::debug!(operation, method = %request.method, %url, "sending request");

        let response = self
            .http
            .execute(url, request)
            .await
            .map_err(NexmoError::Transport)?;

        tracing::debug!(operation, status = response.status, "received response");
        Ok(response)
    }
}

/// Decode a gateway body; a non-2xx body that does not decode becomes `HttpStatus`.
fn decode_body<T>(
    operation: &'static str,
    response: HttpResponse,
    decode: impl FnOnce(&str) -> Result<T, ParseError>,
) -> Result<T, NexmoError> {
    match decode(&response.body) {
        Ok(outcome) => Ok(outcome),
        Err(_) if !(200..=299).contains(&response.status) => {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            Err(NexmoError::HttpStatus {
                status: response.status,
                body,
            })
        }
        Err(err) => Err(malformed(operation, err)),
    }
}

fn malformed(operation: &'static str, err: ParseError) -> NexmoError {
    tracing::warn!(operation, error = %err, "malformed response body");
    NexmoError::Parse(err)
}
