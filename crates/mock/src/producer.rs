use crate::error::MockError;
use crate::response::MockResponse;
use bytes::Bytes;
use http::Request;

/// The request handed to a [`ResponseProducer`].
pub type MockRequest = Request<Bytes>;

/// Turns an inbound request into a mock response.
pub trait ResponseProducer {
    fn create_response(&self, request: &MockRequest) -> Result<MockResponse, MockError>;
}

impl<P: ResponseProducer + ?Sized> ResponseProducer for &P {
    fn create_response(&self, request: &MockRequest) -> Result<MockResponse, MockError> {
        (**self).create_response(request)
    }
}

impl<P: ResponseProducer + ?Sized> ResponseProducer for Box<P> {
    fn create_response(&self, request: &MockRequest) -> Result<MockResponse, MockError> {
        (**self).create_response(request)
    }
}

#[derive(Debug)]
pub struct ProducerFn<F> {
    f: F,
}

impl<F> ResponseProducer for ProducerFn<F>
where
    F: Fn(&MockRequest) -> Result<MockResponse, MockError>,
{
    fn create_response(&self, request: &MockRequest) -> Result<MockResponse, MockError> {
        (self.f)(request)
    }
}

/// Wraps a closure as a [`ResponseProducer`], for responses that depend on the request.
pub fn producer_fn<F>(f: F) -> ProducerFn<F>
where
    F: Fn(&MockRequest) -> Result<MockResponse, MockError>,
{
    ProducerFn { f }
}
