use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error while accessing the host file")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Capacity(#[from] CapacityError),

    #[error("Decoding failed. Asset: '{name}'")]
    Decode {
        name: String,
        #[source]
        source: DecodeError,
    },

    #[error("Destination already exists. Path: '{}'", .path.display())]
    DestinationExists { path: PathBuf },

    #[error("Patching the rewritten host file failed")]
    Patch {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// The container invariants do not hold. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum StructuralError {
    #[error("Container ended before its terminator. Offset: {offset:#x}")]
    Truncated {
        offset: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("Entry {index} at {offset:#x} has a zero payload length (name length {name_len})")]
    ZeroPayload { index: usize, offset: u64, name_len: u32 },

    #[error("Entry {index}: {field} expected at {expected:#x}, writer is at {actual:#x}")]
    OffsetMismatch {
        index: usize,
        field: &'static str,
        expected: u64,
        actual: u64,
    },

    #[error("Entry {index}: payload of {size} bytes does not fit a 32-bit length field")]
    PayloadTooLarge { index: usize, size: u64 },

    #[error("Entry {index}: payload is {actual} bytes, layout reserved {expected}")]
    PayloadLengthMismatch {
        index: usize,
        expected: u64,
        actual: u64,
    },
}

/// The repackaged container would outgrow the reserved region.
#[derive(Debug, thiserror::Error)]
#[error(
    "Repacked container needs {required} bytes but only {available} are reserved (+{} bytes)",
    .required.saturating_sub(*.available)
)]
pub struct CapacityError {
    pub required: u64,
    pub available: u64,
}

/// A single payload could not be turned into its extracted form, or back.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Decryption failed: {0}")]
    Cipher(String),

    #[error("Decompression failed")]
    Compression(#[source] std::io::Error),

    #[error("Image payload is {len} bytes, too short for its dimensions header")]
    ImageHeader { len: usize },

    #[error("Image payload of {len} bytes does not hold {width}x{height} RGBA pixels")]
    ImageSize { width: u32, height: u32, len: usize },

    #[error("Image conversion failed")]
    Image(#[from] image::ImageError),

    #[error("Asset name is not a representable relative path")]
    UnrepresentableName,

    #[error("Entry has no known name to decrypt it with")]
    Unresolved,

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

/// A name or a source could not be attached to an entry. Reported, not raised.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolutionError {
    #[error("No known name matches entry {index} with hash {hash}")]
    NoMatch { index: usize, hash: HashHex },

    #[error("Entry {index} matches several known names: {}", .names.join(", "))]
    Ambiguous { index: usize, names: Vec<String> },

    #[error("No source root provides data for '{name}'")]
    NoSource { name: String },

    #[error("Entry {index} is named '{name}', which is not a representable relative path")]
    UnrepresentableName { index: usize, name: String },
}

/// Hex rendering of a stored name hash for diagnostics.
#[derive(Clone, Eq, PartialEq)]
pub struct HashHex(pub Vec<u8>);

impl fmt::Display for HashHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HashHex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
