//! Mock HTTP responses for testing HTTP client code
//!
//! This crate lets a test describe the response a fake server should return, declaratively:
//! a status code, a body and a set of headers. The description is turned into a
//! [`MockResponse`] every time the client under test sends a request.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use http::{HeaderMap, HeaderValue, Request, StatusCode, Uri};
//! use micro_http_mock::{BytesResource, ResponseProducer, creators};
//!
//! let mut extra = HeaderMap::new();
//! extra.insert("x-request-id", HeaderValue::from_static("42"));
//!
//! let spec = creators::with_created_entity(&Uri::from_static("/orders/42"))
//!     .body_resource(BytesResource::new(r#"{"id":42}"#))
//!     .content_type(mime::APPLICATION_JSON)
//!     .headers(&extra);
//!
//! let request = Request::post("/orders").body(Bytes::from_static(b"{}")).unwrap();
//! let mut response = spec.create_response(&request).unwrap();
//!
//! assert_eq!(response.status(), StatusCode::CREATED);
//! assert_eq!(response.headers()["location"], "/orders/42");
//! assert_eq!(response.headers()["x-request-id"], "42");
//! assert_eq!(response.read_body().unwrap(), r#"{"id":42}"#);
//! ```
//!
//! # Architecture
//!
//! - [`ResponseSpecBuilder`]: accumulates the status, body source and headers
//! - [`ResponseProducer`]: turns a request into a response; implemented by the builder and
//!   by closures wrapped with [`producer_fn`]
//! - [`MockResponse`] and [`MockBody`]: the produced response, readable through
//!   [`std::io::Read`] or [`http_body::Body`]
//! - [`Resource`]: a lazily opened body source, see [`BytesResource`] and [`FileResource`]
//! - [`creators`]: shortcuts such as [`creators::with_success`]
//!
//! # Error Handling
//!
//! Every failure is a [`MockError`]:
//!
//! - [`MockError::InvalidArgument`]: a missing or invalid status code
//! - [`MockError::InvalidHeader`]: a header setter received an invalid name or value
//! - [`MockError::Io`]: a body resource could not be opened or read

mod body;
mod builder;
mod error;
mod producer;
mod resource;
mod response;

pub mod creators;

pub use body::MockBody;
pub use builder::ResponseSpecBuilder;
pub use error::MockError;
pub use producer::MockRequest;
pub use producer::ProducerFn;
pub use producer::ResponseProducer;
pub use producer::producer_fn;
pub use resource::BytesResource;
pub use resource::FileResource;
pub use resource::Resource;
pub use response::MockResponse;
