//! Fluent configuration of a mock response.
//!
//! [`ResponseSpecBuilder`] accumulates a status code, a body and headers through chained
//! calls and materializes a [`MockResponse`] for each request it is asked to answer.
//!
//! # Body sources
//!
//! A body can come from text, raw bytes or a [`Resource`]. Text and bytes share one slot,
//! so the last call wins. A resource lives in its own slot and, when present, is always
//! preferred at build time, no matter in which order the setters were called.
//!
//! # Headers
//!
//! [`content_type`](ResponseSpecBuilder::content_type) and
//! [`location`](ResponseSpecBuilder::location) replace existing values, while
//! [`headers`](ResponseSpecBuilder::headers) and [`header`](ResponseSpecBuilder::header)
//! append. Conversion failures are remembered and reported by
//! [`build`](ResponseSpecBuilder::build), the same way `http::response::Builder` does it.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use http::{Request, StatusCode};
//! use micro_http_mock::ResponseSpecBuilder;
//!
//! let spec = ResponseSpecBuilder::new(StatusCode::OK)
//!     .body_text(r#"{"id":1}"#)
//!     .content_type(mime::APPLICATION_JSON);
//!
//! let request = Request::get("/users/1").body(Bytes::new()).unwrap();
//! let mut response = spec.build(&request).unwrap();
//!
//! assert_eq!(response.status(), StatusCode::OK);
//! assert_eq!(response.headers()[http::header::CONTENT_TYPE], "application/json");
//! assert_eq!(response.read_body().unwrap(), r#"{"id":1}"#);
//! ```

use crate::body::MockBody;
use crate::error::MockError;
use crate::producer::{MockRequest, ResponseProducer};
use crate::resource::Resource;
use crate::response::MockResponse;
use bytes::Bytes;
use http::header::{CONTENT_TYPE, LOCATION};
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode, Uri};
use mime::Mime;
use std::fmt;
use tracing::{debug, trace, warn};

pub struct ResponseSpecBuilder {
    status: StatusCode,
    body: Option<Bytes>,
    body_resource: Option<Box<dyn Resource>>,
    headers: HeaderMap,
    header_error: Option<String>,
}

impl ResponseSpecBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self { status, body: None, body_resource: None, headers: HeaderMap::new(), header_error: None }
    }

    /// Creates a builder from anything convertible into a [`StatusCode`], such as a `u16`
    /// or a `&str`.
    ///
    /// Fails with [`MockError::InvalidArgument`] if the value is not a valid status code.
    pub fn try_new<T>(status: T) -> Result<Self, MockError>
    where
        T: TryInto<StatusCode>,
        <T as TryInto<StatusCode>>::Error: fmt::Display,
    {
        let status = status.try_into().map_err(|e| MockError::invalid_argument(format!("status code: {e}")))?;
        Ok(Self::new(status))
    }

    /// Sets the body to the UTF-8 bytes of `text`.
    pub fn body_text(mut self, text: impl Into<String>) -> Self {
        self.body = Some(Bytes::from(text.into()));
        self
    }

    pub fn body_bytes(mut self, bytes: impl Into<Bytes>) -> Self {
        self.body = Some(bytes.into());
        self
    }

    /// Sets a resource to stream the body from. It is opened on every build, never here.
    pub fn body_resource<R>(mut self, resource: R) -> Self
    where
        R: Resource + 'static,
    {
        self.body_resource = Some(Box::new(resource));
        self
    }

    /// Sets the `Content-Type` header, replacing any previous value. `None` leaves the
    /// headers untouched.
    pub fn content_type(mut self, media_type: impl Into<Option<Mime>>) -> Self {
        if let Some(media_type) = media_type.into() {
            self.replace_header(CONTENT_TYPE, media_type.as_ref());
        }
        self
    }

    /// Sets the `Location` header, replacing any previous value.
    pub fn location(mut self, location: &Uri) -> Self {
        self.replace_header(LOCATION, &location.to_string());
        self
    }

    /// Appends every value of every header in `headers`, keeping their order.
    pub fn headers(mut self, headers: &HeaderMap) -> Self {
        for name in headers.keys() {
            for value in headers.get_all(name) {
                self.headers.append(name.clone(), value.clone());
            }
        }
        self
    }

    /// Appends a single header value.
    pub fn header<K, V>(mut self, name: K, value: V) -> Self
    where
        HeaderName: TryFrom<K>,
        <HeaderName as TryFrom<K>>::Error: Into<http::Error>,
        HeaderValue: TryFrom<V>,
        <HeaderValue as TryFrom<V>>::Error: Into<http::Error>,
    {
        let name = match HeaderName::try_from(name) {
            Ok(name) => name,
            Err(e) => {
                let e: http::Error = e.into();
                self.record_header_error(e);
                return self;
            }
        };

        match HeaderValue::try_from(value) {
            Ok(value) => {
                self.headers.append(name, value);
            }
            Err(e) => {
                let e: http::Error = e.into();
                self.record_header_error(format!("{name}: {e}"));
            }
        }
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers_ref(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body_ref(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    pub fn has_body_resource(&self) -> bool {
        self.body_resource.is_some()
    }

    /// Produces a response for `request`; the request itself is not inspected.
    ///
    /// A configured resource takes precedence over text or bytes. Fails with
    /// [`MockError::Io`] when the resource cannot be opened and with
    /// [`MockError::InvalidHeader`] when a header setter received an invalid value.
    pub fn build(&self, _request: &MockRequest) -> Result<MockResponse, MockError> {
        if let Some(reason) = &self.header_error {
            return Err(MockError::invalid_header(reason));
        }

        if let Some(resource) = &self.body_resource {
            trace!(resource = %resource.description(), "opening body resource");
            let stream = resource.open()?;
            debug!(status = %self.status, "created stream backed mock response");
            return Ok(MockResponse::new(MockBody::boxed_reader(stream), self.headers.clone(), self.status));
        }

        debug!(status = %self.status, body_len = self.body.as_ref().map_or(0, Bytes::len), "created mock response");
        Ok(MockResponse::from_bytes(self.body.clone(), self.headers.clone(), self.status))
    }

    fn replace_header(&mut self, name: HeaderName, value: &str) {
        match HeaderValue::from_str(value) {
            Ok(value) => {
                self.headers.insert(name, value);
            }
            Err(e) => self.record_header_error(format!("{name}: {e}")),
        }
    }

    fn record_header_error(&mut self, reason: impl fmt::Display) {
        let reason = reason.to_string();
        warn!(%reason, "ignoring invalid header, build will fail");
        if self.header_error.is_none() {
            self.header_error = Some(reason);
        }
    }
}

impl TryFrom<Option<StatusCode>> for ResponseSpecBuilder {
    type Error = MockError;

    fn try_from(status: Option<StatusCode>) -> Result<Self, Self::Error> {
        status.map(Self::new).ok_or_else(|| MockError::invalid_argument("status code is required"))
    }
}

impl ResponseProducer for ResponseSpecBuilder {
    fn create_response(&self, request: &MockRequest) -> Result<MockResponse, MockError> {
        self.build(request)
    }
}

impl fmt::Debug for ResponseSpecBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseSpecBuilder")
            .field("status", &self.status)
            .field("body_len", &self.body.as_ref().map(Bytes::len))
            .field("body_resource", &self.body_resource.as_ref().map(|r| r.description()))
            .field("headers", &self.headers)
            .field("header_error", &self.header_error)
            .finish()
    }
}
