//! Error types for the Skylift SDK.

use std::fmt;

/// Errors that can occur when using the Skylift SDK.
///
/// Exactly one of [`Error::Http`] or [`Error::Api`] is produced for a call
/// that reached the server but failed; [`Error::Request`] means no response
/// was received at all.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Sending the HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server replied with a failure that did not carry a usable
    /// structured error body.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The server rejected the request with a structured error body.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// A single problem encountered while processing a response.
///
/// The Content-Type messages are part of the compatibility surface and must
/// not be reworded.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    /// The response carried no Content-Type header.
    #[error("processing response failed: Content-Type header is missing or empty")]
    ContentTypeMissing,

    /// The response carried a Content-Type other than `application/json`.
    #[error("processing response failed: expected Content-Type to be \"application/json\", got: \"{0}\"")]
    UnexpectedContentType(String),

    /// The response body could not be decoded as JSON.
    #[error("processing response failed: decoding JSON body failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A non-success response without a well-formed structured error body.
///
/// Carries the raw body bytes and zero or more [`ResponseError`] values
/// describing what went wrong while processing the response. An empty
/// `errors` list means the server sent a failure status with nothing usable
/// attached (empty body, or a structured error object with every field
/// empty).
#[derive(Debug)]
pub struct HttpError {
    /// URL of the request that produced this response.
    pub request_url: String,
    /// HTTP status code of the response.
    pub status_code: u16,
    /// Raw response body, possibly empty.
    pub resp_body: Vec<u8>,
    /// Problems encountered while processing the response, in order.
    pub errors: Vec<ResponseError>,
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "request to {} failed with status {}",
            self.request_url, self.status_code
        )?;
        for err in &self.errors {
            write!(f, ": {err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for HttpError {}

/// A structured error reported by the API for a rejected request.
///
/// Only produced when the error body decoded successfully and at least one
/// of `error_key`, `field`, or `message` is non-empty.
#[derive(Debug)]
pub struct ApiError {
    /// Short machine-readable error code.
    pub error_key: String,
    /// Input field the server rejected, if any.
    pub field: String,
    /// Human-readable description.
    pub message: String,
    /// URL of the request that produced this response.
    pub request_url: String,
    /// HTTP status code of the response.
    pub status_code: u16,
    /// Raw response body the error was decoded from.
    pub resp_body: Vec<u8>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "request to {} failed with status {}: {}",
            self.request_url, self.status_code, self.message
        )?;
        if !self.error_key.is_empty() {
            write!(f, " (key: {}", self.error_key)?;
            if !self.field.is_empty() {
                write!(f, ", field: {}", self.field)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}
