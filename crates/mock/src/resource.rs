//! Lazily opened byte sources that can back a mock response body.
//!
//! A [`Resource`] is only opened when a response is produced, so a builder can hold
//! a file path that does not exist yet, or share one resource between several builders.

use bytes::Bytes;
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A source of bytes that can be opened as a readable stream.
///
/// Every call to [`Resource::open`] returns a fresh stream positioned at the start
/// of the content. Ownership of the stream passes to the caller.
#[cfg_attr(test, mockall::automock)]
pub trait Resource {
    /// Opens a new stream over the resource content.
    fn open(&self) -> io::Result<Box<dyn Read + Send>>;

    /// A human readable description, used in logs and `Debug` output.
    fn description(&self) -> String;
}

impl<R: Resource + ?Sized> Resource for Box<R> {
    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        (**self).open()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

impl<R: Resource + ?Sized> Resource for Arc<R> {
    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        (**self).open()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

/// An in-memory resource.
#[derive(Debug, Clone)]
pub struct BytesResource {
    bytes: Bytes,
}

impl BytesResource {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self { bytes: bytes.into() }
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }
}

impl Resource for BytesResource {
    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(self.bytes.clone())))
    }

    fn description(&self) -> String {
        format!("byte array resource [{} bytes]", self.bytes.len())
    }
}

/// A resource backed by a file on the local file system.
///
/// The file is opened on every [`Resource::open`] call; a missing file surfaces as
/// [`io::ErrorKind::NotFound`] at that point, not at construction.
#[derive(Debug, Clone)]
pub struct FileResource {
    path: PathBuf,
}

impl FileResource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Resource for FileResource {
    fn open(&self) -> io::Result<Box<dyn Read + Send>> {
        let file = File::open(&self.path)?;
        Ok(Box::new(file))
    }

    fn description(&self) -> String {
        format!("file [{}]", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::{BytesResource, FileResource, Resource};
    use std::io::{ErrorKind, Read};
    use std::sync::Arc;
    use std::{env, fs, process};

    fn read_all(resource: &dyn Resource) -> Vec<u8> {
        let mut buf = Vec::new();
        resource.open().unwrap().read_to_end(&mut buf).unwrap();
        buf
    }

    #[test]
    fn bytes_resource_opens_from_start_every_time() {
        let resource = BytesResource::new("hello");

        assert_eq!(read_all(&resource), b"hello");
        assert_eq!(read_all(&resource), b"hello");
        assert_eq!(resource.description(), "byte array resource [5 bytes]");
    }

    #[test]
    fn file_resource_reads_file_content() {
        let path = env::temp_dir().join(format!("micro-http-mock-resource-{}.json", process::id()));
        fs::write(&path, r#"{"name":"micro"}"#).unwrap();

        let resource = FileResource::new(&path);
        let content = read_all(&resource);
        fs::remove_file(&path).unwrap();

        assert_eq!(content, br#"{"name":"micro"}"#);
        assert!(resource.description().starts_with("file ["));
    }

    #[test]
    fn missing_file_fails_on_open() {
        let resource = FileResource::new("/definitely/not/here/body.json");

        let error = resource.open().err().unwrap();
        assert_eq!(error.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn shared_resource_delegates() {
        let resource = Arc::new(BytesResource::new(vec![1, 2, 3]));
        let shared: Box<dyn Resource> = Box::new(Arc::clone(&resource));

        assert_eq!(read_all(shared.as_ref()), [1, 2, 3]);
        assert_eq!(shared.description(), resource.description());
    }
}
