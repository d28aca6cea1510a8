use std::io::{prelude::*, SeekFrom};
use std::sync::Mutex;

use crate::de::read_bytes;

/// A seekable source shared between extraction workers.
///
/// The only capability handed out is [`read_at`](SharedSource::read_at): the
/// seek and the read happen under one lock, so no worker ever observes a
/// position moved by another.
#[derive(Debug)]
pub struct SharedSource<R> {
    inner: Mutex<R>,
}

impl<R: Read + Seek> SharedSource<R> {
    pub fn new(inner: R) -> SharedSource<R> {
        SharedSource {
            inner: Mutex::new(inner),
        }
    }

    pub fn read_at(&self, offset: u64, len: u64) -> std::io::Result<Vec<u8>> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::Other, "source lock poisoned"))?;
        inner.seek(SeekFrom::Start(offset))?;
        read_bytes(&mut *inner, len)
    }

    pub fn into_inner(self) -> std::io::Result<R> {
        self.inner
            .into_inner()
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::Other, "source lock poisoned"))
    }
}
