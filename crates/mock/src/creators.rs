//! Shortcuts for the response specs tests ask for most often.
//!
//! Each function returns a [`ResponseSpecBuilder`] that can be configured further.

use crate::builder::ResponseSpecBuilder;
use bytes::Bytes;
use http::{StatusCode, Uri};
use mime::Mime;

pub fn with_status(status: StatusCode) -> ResponseSpecBuilder {
    ResponseSpecBuilder::new(status)
}

/// `200 OK` without a body.
pub fn with_success() -> ResponseSpecBuilder {
    with_status(StatusCode::OK)
}

/// `200 OK` with the given body and, if present, content type.
pub fn with_success_body(body: impl Into<Bytes>, content_type: impl Into<Option<Mime>>) -> ResponseSpecBuilder {
    with_success().body_bytes(body).content_type(content_type)
}

/// `201 Created` with a `Location` header.
pub fn with_created_entity(location: &Uri) -> ResponseSpecBuilder {
    with_status(StatusCode::CREATED).location(location)
}

pub fn with_no_content() -> ResponseSpecBuilder {
    with_status(StatusCode::NO_CONTENT)
}

pub fn with_bad_request() -> ResponseSpecBuilder {
    with_status(StatusCode::BAD_REQUEST)
}

pub fn with_unauthorized_request() -> ResponseSpecBuilder {
    with_status(StatusCode::UNAUTHORIZED)
}

pub fn with_server_error() -> ResponseSpecBuilder {
    with_status(StatusCode::INTERNAL_SERVER_ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::producer::MockRequest;
    use http::Request;
    use http::header::{CONTENT_TYPE, LOCATION};

    fn request() -> MockRequest {
        Request::post("/orders").body(Bytes::from_static(b"{}")).unwrap()
    }

    #[test]
    fn status_shortcuts() {
        let cases = [
            (with_success(), StatusCode::OK),
            (with_no_content(), StatusCode::NO_CONTENT),
            (with_bad_request(), StatusCode::BAD_REQUEST),
            (with_unauthorized_request(), StatusCode::UNAUTHORIZED),
            (with_server_error(), StatusCode::INTERNAL_SERVER_ERROR),
            (with_status(StatusCode::SERVICE_UNAVAILABLE), StatusCode::SERVICE_UNAVAILABLE),
        ];

        for (spec, status) in cases {
            let mut response = spec.build(&request()).unwrap();
            assert_eq!(response.status(), status);
            assert!(response.headers().is_empty());
            assert!(response.read_body().unwrap().is_empty());
        }
    }

    #[test]
    fn success_with_body() {
        let mut response = with_success_body(r#"{"id":42}"#, mime::APPLICATION_JSON).build(&request()).unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(response.read_body().unwrap(), r#"{"id":42}"#);
    }

    #[test]
    fn success_with_body_without_content_type() {
        let response = with_success_body("plain", None::<Mime>).build(&request()).unwrap();

        assert!(response.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn created_entity_has_location() {
        let response = with_created_entity(&Uri::from_static("/orders/42")).build(&request()).unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[LOCATION], "/orders/42");
    }
}
