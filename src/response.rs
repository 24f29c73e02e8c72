//! # Response Envelope
//!
//! Every endpoint answers with the same JSON shape:
//!
//! ```json
//! { "code": 200, "msg": "Success", "data": { ... } }
//! ```
//!
//! `code` is an application-level result code, independent from the HTTP
//! status of the response. `data` is omitted entirely when the envelope
//! carries no payload, or a payload that encodes to `null` (`()`, `None`).
//!
//! Envelopes are written through a [`ResponseSink`], a write-once target
//! that receives the content type, the status and the body in that order.
//! [`JsonEnvelope`] wires this into axum handlers.

use axum::{
    body::Body,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{instrument, trace};

use crate::error::{AppError, AppResult};
use crate::utils::constant::{SUCCESS_CODE, SUCCESS_MSG};
use crate::utils::validator::ensure_status_code;

/// Errors raised while writing an envelope to a [`ResponseSink`]
#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("failed to serialize response envelope: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("response body has already been written")]
    AlreadyWritten,
}

/// Uniform `{code, msg, data}` wrapper around a handler's payload.
///
/// Fields are private: an envelope is built by [`HttpResponse::success`],
/// [`HttpResponse::empty_success`] or [`HttpResponse::error`] and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpResponse<T = ()> {
    code: i64,
    msg: String,
    #[serde(skip_serializing_if = "is_absent")]
    data: Option<T>,
}

/// `data` is absent when missing or when it encodes to `null`.
/// Payloads that fail to encode are kept so the writer reports the failure.
fn is_absent<T: Serialize>(data: &Option<T>) -> bool {
    match data {
        None => true,
        Some(value) => matches!(serde_json::to_value(value), Ok(Value::Null)),
    }
}

impl<T> HttpResponse<T> {
    /// Success envelope carrying `data`, with code `200` and message `"Success"`.
    ///
    /// A payload encoding to `null`, e.g. `success(())`, leaves `data` out.
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            msg: SUCCESS_MSG.to_string(),
            data: Some(data),
        }
    }

    /// Error envelope with the given fields set verbatim.
    ///
    /// No validation happens here; use
    /// [`validate_status_code`](crate::utils::validator::validate_status_code)
    /// beforehand if the code comes from an untrusted source.
    pub fn error(code: i64, msg: impl Into<String>, data: Option<T>) -> Self {
        Self {
            code,
            msg: msg.into(),
            data,
        }
    }

    /// Like [`HttpResponse::error`], but refuses codes that are not well-formed
    /// result codes.
    ///
    /// # Errors
    ///
    /// [`AppError::InvalidStatusCode`] when `code` fails
    /// [`validate_status_code`](crate::utils::validator::validate_status_code).
    pub fn checked_error(code: i64, msg: impl Into<String>, data: Option<T>) -> AppResult<Self> {
        ensure_status_code(code)?;
        Ok(Self::error(code, msg, data))
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn msg(&self) -> &str {
        &self.msg
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }
}

impl HttpResponse {
    /// Success envelope without payload; serializes with no `data` key.
    pub fn empty_success() -> Self {
        Self {
            code: SUCCESS_CODE,
            msg: SUCCESS_MSG.to_string(),
            data: None,
        }
    }
}

/// Write-once destination for a single HTTP response.
///
/// Once the body has been written, every further call must fail with
/// [`ResponseError::AlreadyWritten`].
pub trait ResponseSink {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) -> Result<(), ResponseError>;

    fn set_status(&mut self, status: StatusCode) -> Result<(), ResponseError>;

    fn write_body(&mut self, body: Vec<u8>) -> Result<(), ResponseError>;
}

/// [`ResponseSink`] that buffers everything and converts into an axum [`Response`].
///
/// Starts out with status `200 OK`, no headers and no body.
#[derive(Debug)]
pub struct BufferedSink {
    status: StatusCode,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl Default for BufferedSink {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

impl BufferedSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    fn ensure_open(&self) -> Result<(), ResponseError> {
        if self.body.is_some() {
            return Err(ResponseError::AlreadyWritten);
        }
        Ok(())
    }
}

impl ResponseSink for BufferedSink {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) -> Result<(), ResponseError> {
        self.ensure_open()?;
        self.headers.insert(name, value);
        Ok(())
    }

    fn set_status(&mut self, status: StatusCode) -> Result<(), ResponseError> {
        self.ensure_open()?;
        self.status = status;
        Ok(())
    }

    fn write_body(&mut self, body: Vec<u8>) -> Result<(), ResponseError> {
        self.ensure_open()?;
        self.body = Some(body);
        Ok(())
    }
}

impl IntoResponse for BufferedSink {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body.unwrap_or_default()));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

/// Serializes `response` and writes it to `sink` with the given transport status.
///
/// The envelope is encoded before the sink is touched, so a serialization
/// failure leaves the sink untouched and is returned to the caller.
///
/// # Errors
///
/// - [`ResponseError::Serialization`] if the payload cannot be encoded as JSON
/// - [`ResponseError::AlreadyWritten`] if the sink already holds a body
#[instrument(skip_all, fields(status = status.as_u16(), code = response.code()))]
pub fn write_response<S, T>(
    sink: &mut S,
    status: StatusCode,
    response: &HttpResponse<T>,
) -> Result<(), ResponseError>
where
    S: ResponseSink + ?Sized,
    T: Serialize,
{
    let body = serde_json::to_vec(response)?;

    sink.set_header(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    )?;
    sink.set_status(status)?;
    sink.write_body(body)?;

    trace!("Response envelope written");
    Ok(())
}

/// Handler return type pairing a transport status with an envelope.
///
/// The two are not coupled: `JsonEnvelope(StatusCode::OK, HttpResponse::error(..))`
/// is a valid response.
#[derive(Debug)]
pub struct JsonEnvelope<T>(pub StatusCode, pub HttpResponse<T>);

impl<T: Serialize> IntoResponse for JsonEnvelope<T> {
    fn into_response(self) -> Response {
        let JsonEnvelope(status, envelope) = self;
        let mut sink = BufferedSink::new();

        match write_response(&mut sink, status, &envelope) {
            Ok(()) => sink.into_response(),
            // AppError logs server-side failures
            Err(e) => AppError::from(e).into_response(),
        }
    }
}
