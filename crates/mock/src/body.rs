use crate::error::MockError;
use bytes::{Buf, Bytes, BytesMut};
use http_body::Body as HttpBody;
use http_body::{Frame, SizeHint};
use std::fmt;
use std::io::{self, Read};
use std::pin::Pin;
use std::task::{Context, Poll};
use tracing::trace;

/// Max bytes pulled from a stream-backed body per frame.
const CHUNK_SIZE: usize = 8 * 1024;

/// Body of a [`MockResponse`](crate::MockResponse).
///
/// Either a fixed byte sequence or a readable stream opened from a
/// [`Resource`](crate::Resource). The body can be consumed synchronously through
/// [`std::io::Read`] or asynchronously through [`http_body::Body`].
pub struct MockBody {
    inner: Kind,
}

enum Kind {
    Once(Option<Bytes>),
    Reader(Box<dyn Read + Send>),
}

impl MockBody {
    pub fn empty() -> Self {
        Self { inner: Kind::Once(None) }
    }

    pub fn once(bytes: Bytes) -> Self {
        if bytes.is_empty() { Self::empty() } else { Self { inner: Kind::Once(Some(bytes)) } }
    }

    pub fn reader<R>(reader: R) -> Self
    where
        R: Read + Send + 'static,
    {
        Self::boxed_reader(Box::new(reader))
    }

    pub(crate) fn boxed_reader(reader: Box<dyn Read + Send>) -> Self {
        Self { inner: Kind::Reader(reader) }
    }

    /// Returns true if the body is backed by a stream rather than a byte sequence
    #[inline]
    pub fn is_stream(&self) -> bool {
        matches!(self.inner, Kind::Reader(_))
    }

    /// Drains whatever is left of the body into a single `Bytes`.
    ///
    /// A stream-backed body is read to its end and released.
    pub fn read_to_bytes(&mut self) -> Result<Bytes, MockError> {
        match &mut self.inner {
            Kind::Once(option_bytes) => Ok(option_bytes.take().unwrap_or_default()),
            Kind::Reader(reader) => {
                let mut buf = Vec::new();
                reader.read_to_end(&mut buf)?;
                self.finish();
                Ok(Bytes::from(buf))
            }
        }
    }

    fn finish(&mut self) {
        trace!("finished reading mock body stream");
        self.inner = Kind::Once(None);
    }
}

fn read_chunk(reader: &mut dyn Read) -> io::Result<Option<Bytes>> {
    let mut buf = BytesMut::zeroed(CHUNK_SIZE);
    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(n) => {
                buf.truncate(n);
                return Ok(Some(buf.freeze()));
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
}

impl Default for MockBody {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for MockBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Kind::Once(None) => f.write_str("MockBody::Empty"),
            Kind::Once(Some(bytes)) => f.debug_tuple("MockBody::Once").field(&bytes.len()).finish(),
            Kind::Reader(_) => f.write_str("MockBody::Stream"),
        }
    }
}

impl From<Bytes> for MockBody {
    fn from(bytes: Bytes) -> Self {
        Self::once(bytes)
    }
}

impl From<Vec<u8>> for MockBody {
    fn from(value: Vec<u8>) -> Self {
        Self::once(Bytes::from(value))
    }
}

impl From<String> for MockBody {
    fn from(value: String) -> Self {
        Self::once(Bytes::from(value))
    }
}

impl From<&'static str> for MockBody {
    fn from(value: &'static str) -> Self {
        Self::once(Bytes::from_static(value.as_bytes()))
    }
}

impl From<()> for MockBody {
    fn from(_: ()) -> Self {
        Self::empty()
    }
}

impl From<Option<Bytes>> for MockBody {
    fn from(option: Option<Bytes>) -> Self {
        match option {
            Some(bytes) => Self::once(bytes),
            None => Self::empty(),
        }
    }
}

impl Read for MockBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        match &mut self.inner {
            Kind::Once(None) => Ok(0),
            Kind::Once(Some(bytes)) => {
                let n = buf.len().min(bytes.len());
                bytes.copy_to_slice(&mut buf[..n]);
                if !bytes.has_remaining() {
                    self.inner = Kind::Once(None);
                }
                Ok(n)
            }
            Kind::Reader(reader) => {
                let n = reader.read(buf)?;
                if n == 0 {
                    self.finish();
                }
                Ok(n)
            }
        }
    }
}

impl HttpBody for MockBody {
    type Data = Bytes;
    type Error = MockError;

    fn poll_frame(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        let this = self.get_mut();
        match &mut this.inner {
            Kind::Once(option_bytes) => Poll::Ready(option_bytes.take().map(|bytes| Ok(Frame::data(bytes)))),
            Kind::Reader(reader) => match read_chunk(reader.as_mut()) {
                Ok(Some(chunk)) => Poll::Ready(Some(Ok(Frame::data(chunk)))),
                Ok(None) => {
                    this.finish();
                    Poll::Ready(None)
                }
                Err(e) => Poll::Ready(Some(Err(MockError::io(e)))),
            },
        }
    }

    fn is_end_stream(&self) -> bool {
        match &self.inner {
            Kind::Once(option_bytes) => option_bytes.is_none(),
            Kind::Reader(_) => false,
        }
    }

    fn size_hint(&self) -> SizeHint {
        match &self.inner {
            Kind::Once(None) => SizeHint::with_exact(0),
            Kind::Once(Some(bytes)) => SizeHint::with_exact(bytes.len() as u64),
            Kind::Reader(_) => SizeHint::default(),
        }
    }
}
