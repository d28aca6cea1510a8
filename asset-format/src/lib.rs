//! Reading, extracting and repackaging the asset container embedded in a
//! host executable.
//!
//! The container is a run of `(payload_len, name_len)` headers, each followed
//! by a stored filename hash, an encryption flag and the payload. Its key is
//! folded from the payload lengths, so any resize rekeys every entry.

mod cipher;
mod compression;
mod de;
mod entry;
mod error;
mod file;
pub mod hashing;
mod header;
mod key;
pub mod names;
pub mod path;
pub mod patcher;
pub mod pixels;
mod ser;
mod source;

pub use cipher::Cipher;
#[cfg(feature = "zstd")]
pub use compression::Zstd;
pub use compression::{Codec, DEFAULT_LEVEL, MAX_LEVEL, MIN_LEVEL};
pub use entry::{Entry, PayloadSource};
pub use error::{
    CapacityError, DecodeError, Error, HashHex, ResolutionError, Result, StructuralError,
};
pub use file::reader::{Decoded, ExtractFailure, ExtractOptions, ExtractStats};
pub use file::writer::{RepackOptions, RepackStats};
pub use file::{AssetStore, ResolveReport};
pub use hashing::{matches, HashStrategy, NameMatcher};
pub use header::{ENTRY_HEADER_LEN, FILLER_BYTE, START_OFFSET, TERMINATOR};
pub use key::{derive_key, Key, KeyAccumulator};
pub use names::KNOWN_ASSETS;
pub use patcher::{pack, NoPatch, PackOptions, Patcher};
pub use source::SharedSource;
