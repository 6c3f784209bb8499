//! The response object handed to the HTTP client under test.

use crate::body::MockBody;
use crate::error::MockError;
use bytes::Bytes;
use http::{HeaderMap, Response, StatusCode};
use std::io::Read;

/// A canned HTTP response.
///
/// Produced by a [`ResponseProducer`](crate::ResponseProducer), usually a
/// [`ResponseSpecBuilder`](crate::ResponseSpecBuilder). A stream-backed body owns the
/// stream it was opened with and releases it once read to the end or dropped.
#[derive(Debug)]
pub struct MockResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: MockBody,
}

impl MockResponse {
    pub fn new(body: MockBody, headers: HeaderMap, status: StatusCode) -> Self {
        Self { status, headers, body }
    }

    /// Creates a byte-backed response; `None` means an empty body.
    pub fn from_bytes(body: Option<Bytes>, headers: HeaderMap, status: StatusCode) -> Self {
        Self::new(MockBody::from(body), headers, status)
    }

    /// Creates a stream-backed response that reads its body from `reader`.
    pub fn from_reader<R>(reader: R, headers: HeaderMap, status: StatusCode) -> Self
    where
        R: Read + Send + 'static,
    {
        Self::new(MockBody::reader(reader), headers, status)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the canonical reason phrase of the status, or an empty string for
    /// status codes without one.
    pub fn status_text(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("")
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &MockBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut MockBody {
        &mut self.body
    }

    pub fn into_body(self) -> MockBody {
        self.body
    }

    /// Reads the remaining body synchronously.
    pub fn read_body(&mut self) -> Result<Bytes, MockError> {
        self.body.read_to_bytes()
    }

    /// Converts into an `http::Response` carrying the same status, headers and body.
    pub fn into_http(self) -> Response<MockBody> {
        let mut response = Response::new(self.body);
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

impl From<MockResponse> for Response<MockBody> {
    fn from(response: MockResponse) -> Self {
        response.into_http()
    }
}
