//! Payload compression used for encrypted entries.

use crate::error::DecodeError;

/// Default level used when repackaging. Higher levels trade time for room in
/// the reserved region.
pub const DEFAULT_LEVEL: i32 = 16;

pub const MIN_LEVEL: i32 = 1;
pub const MAX_LEVEL: i32 = 22;

/// A compression codec. `decompress(compress(data, level))` must return `data`
/// for every valid level, and `compress` must be deterministic for a given
/// input and level.
pub trait Codec: Send + Sync {
    fn compress(&self, data: &[u8], level: i32) -> std::io::Result<Vec<u8>>;

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, DecodeError>;
}

impl<C: Codec + ?Sized> Codec for &C {
    fn compress(&self, data: &[u8], level: i32) -> std::io::Result<Vec<u8>> {
        (**self).compress(data, level)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, DecodeError> {
        (**self).decompress(data)
    }
}

/// Zstandard, the codec the host executable decodes with.
#[cfg(feature = "zstd")]
#[derive(Debug, Default, Clone, Copy)]
pub struct Zstd;

#[cfg(feature = "zstd")]
impl Codec for Zstd {
    fn compress(&self, data: &[u8], level: i32) -> std::io::Result<Vec<u8>> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!(
                    "Compression level {} outside {}..={}",
                    level, MIN_LEVEL, MAX_LEVEL
                ),
            ));
        }
        zstd::bulk::compress(data, level)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, DecodeError> {
        zstd::stream::decode_all(data).map_err(DecodeError::Compression)
    }
}
