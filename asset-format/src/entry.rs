use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::HashHex;
use crate::header::ENTRY_HEADER_LEN;

/// Where an entry's replacement bytes come from during repackaging.
#[derive(Clone, Eq, PartialEq)]
pub enum PayloadSource {
    /// Stored as-is from this file.
    File(PathBuf),

    /// Compressed bytes, either read from a `.zst` sidecar or compressed from
    /// `origin` while repackaging.
    Compressed { origin: PathBuf, data: Vec<u8> },
}

impl PayloadSource {
    pub fn origin(&self) -> &Path {
        match self {
            PayloadSource::File(path) => path,
            PayloadSource::Compressed { origin, .. } => origin,
        }
    }
}

impl fmt::Debug for PayloadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadSource::File(path) => f.debug_tuple("File").field(path).finish(),
            PayloadSource::Compressed { origin, data } => f
                .debug_struct("Compressed")
                .field("origin", origin)
                .field("len", &data.len())
                .finish(),
        }
    }
}

/// One slot of the container.
///
/// Entry order is its only identity until a filename has been matched, so
/// entries are never reordered.
#[derive(Clone)]
pub struct Entry {
    /// The filename hash as persisted. May be shorter than a full hash, or
    /// padded with zeros for alignment.
    pub(crate) hash: Vec<u8>,

    /// Flag byte plus payload bytes.
    pub(crate) payload_len: u32,

    pub(crate) encrypted: bool,

    /// Absolute offset of the entry header in the host file.
    pub(crate) offset: u64,

    /// Logical name, set only by name resolution.
    pub(crate) filename: Option<Vec<u8>>,

    /// Set only by source resolution during repackaging.
    pub(crate) source: Option<PayloadSource>,
}

impl Entry {
    #[inline(always)]
    pub fn stored_hash(&self) -> &[u8] {
        &self.hash
    }

    #[inline(always)]
    pub fn stored_hash_len(&self) -> u32 {
        self.hash.len() as u32
    }

    #[inline(always)]
    pub fn payload_len(&self) -> u32 {
        self.payload_len
    }

    #[inline(always)]
    pub fn encrypted(&self) -> bool {
        self.encrypted
    }

    #[inline(always)]
    pub fn container_offset(&self) -> u64 {
        self.offset
    }

    #[inline(always)]
    pub fn data_offset(&self) -> u64 {
        self.offset + ENTRY_HEADER_LEN + self.hash.len() as u64 + 1
    }

    #[inline(always)]
    pub fn data_size(&self) -> u64 {
        u64::from(self.payload_len) - 1
    }

    /// Bytes this entry occupies in the container, header included.
    #[inline(always)]
    pub fn total_size(&self) -> u64 {
        ENTRY_HEADER_LEN + self.hash.len() as u64 + u64::from(self.payload_len)
    }

    /// Offset of the header that follows this entry.
    #[inline(always)]
    pub fn end_offset(&self) -> u64 {
        self.offset + self.total_size()
    }

    #[inline(always)]
    pub fn filename(&self) -> Option<&[u8]> {
        self.filename.as_deref()
    }

    /// The filename for diagnostics, or `[unknown]`.
    pub fn display_name(&self) -> String {
        match &self.filename {
            Some(name) => String::from_utf8_lossy(name).into_owned(),
            None => "[unknown]".to_string(),
        }
    }

    #[inline(always)]
    pub fn source(&self) -> Option<&PayloadSource> {
        self.source.as_ref()
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("hash", &HashHex(self.hash.clone()))
            .field("filename", &self.display_name())
            .field("payload_len", &self.payload_len)
            .field("encrypted", &self.encrypted)
            .field("offset", &format_args!("{:#x}", self.offset))
            .field("data_offset", &format_args!("{:#x}", self.data_offset()))
            .field("data_size", &self.data_size())
            .finish()
    }
}
