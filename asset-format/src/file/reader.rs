use std::io::prelude::*;
use std::path::Path;

use rayon::prelude::*;

use crate::cipher::Cipher;
use crate::compression::Codec;
use crate::entry::Entry;
use crate::error::{DecodeError, Error, Result};
use crate::path::{name_to_path, sidecar_path};
use crate::pixels;
use crate::source::SharedSource;

use super::AssetStore;

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Size of the decode pool. `None` leaves the choice to rayon.
    pub workers: Option<usize>,

    /// Also write the decrypted, still compressed payload of encrypted
    /// entries as a `.zst` sidecar.
    pub write_compressed: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            workers: None,
            write_compressed: true,
        }
    }
}

/// An entry that still failed after its serial retry.
#[derive(Debug)]
pub struct ExtractFailure {
    pub index: usize,
    pub name: String,
    pub error: Error,
}

#[derive(Debug, Default)]
pub struct ExtractStats {
    pub files_extracted: usize,
    pub bytes_written: u64,

    /// Entries that failed on the parallel pass and were tried again.
    pub retried: usize,

    pub failures: Vec<ExtractFailure>,

    /// Entries skipped because they have no filename.
    pub unresolved: usize,
}

/// A payload in its extracted form.
#[derive(Debug)]
pub struct Decoded {
    pub data: Vec<u8>,

    /// Decrypted bytes before decompression, for encrypted entries only.
    pub compressed: Option<Vec<u8>>,
}

impl<C: Cipher> AssetStore<C> {
    /// Copy the stored payload of `entry` out of `source`.
    pub fn read_entry<R: Read + Seek>(
        &self,
        source: &SharedSource<R>,
        entry: &Entry,
    ) -> Result<Vec<u8>> {
        Ok(source.read_at(entry.data_offset(), entry.data_size())?)
    }

    /// Turn a stored payload into its extracted form.
    ///
    /// Encrypted payloads are decrypted under the current key and
    /// decompressed; image payloads are then converted back to PNG.
    /// Plain payloads are returned as stored.
    pub fn decode<K: Codec + ?Sized>(
        &self,
        entry: &Entry,
        payload: Vec<u8>,
        codec: &K,
    ) -> Result<Decoded> {
        if !entry.encrypted {
            return Ok(Decoded {
                data: payload,
                compressed: None,
            });
        }

        let name = entry.filename.as_deref().ok_or_else(|| Error::Decode {
            name: entry.display_name(),
            source: DecodeError::Unresolved,
        })?;

        self.decode_encrypted(name, &payload, codec)
            .map_err(|source| Error::Decode {
                name: entry.display_name(),
                source,
            })
    }

    fn decode_encrypted<K: Codec + ?Sized>(
        &self,
        name: &[u8],
        payload: &[u8],
        codec: &K,
    ) -> std::result::Result<Decoded, DecodeError> {
        let compressed = self.cipher.decrypt(name, payload, self.key)?;
        let raw = codec.decompress(&compressed)?;
        let data = if pixels::is_image(name) {
            pixels::raw_to_png(&raw)?
        } else {
            raw
        };

        Ok(Decoded {
            data,
            compressed: Some(compressed),
        })
    }

    /// Extract a single resolved entry below `dest`, returning the number of
    /// bytes written for the extracted file.
    pub fn extract_entry<R, K, P>(
        &self,
        source: &SharedSource<R>,
        codec: &K,
        entry: &Entry,
        dest: P,
        write_compressed: bool,
    ) -> Result<u64>
    where
        R: Read + Seek,
        K: Codec + ?Sized,
        P: AsRef<Path>,
    {
        let to_decode_error = |source: DecodeError| Error::Decode {
            name: entry.display_name(),
            source,
        };

        let name = entry
            .filename
            .as_deref()
            .ok_or(DecodeError::Unresolved)
            .map_err(to_decode_error)?;
        let path = name_to_path(name, dest.as_ref()).map_err(to_decode_error)?;

        let payload = self.read_entry(source, entry)?;
        let decoded = self.decode(entry, payload, codec)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, &decoded.data)?;

        if write_compressed {
            if let Some(compressed) = &decoded.compressed {
                std::fs::write(sidecar_path(&path), compressed)?;
            }
        }

        tracing::debug!(
            name = %entry.display_name(),
            data_offset = format_args!("{:#x}", entry.data_offset()),
            bytes = decoded.data.len(),
            "extracted entry"
        );

        Ok(decoded.data.len() as u64)
    }

    /// Extract every resolved entry below `dest`.
    ///
    /// Entries are decoded in parallel; reads from `source` are serialized by
    /// its lock. Entries that fail are retried once, one at a time, after the
    /// parallel pass. A failing entry never stops the others.
    pub fn extract_all<R, K, P>(
        &self,
        source: &SharedSource<R>,
        codec: &K,
        dest: P,
        options: &ExtractOptions,
    ) -> Result<ExtractStats>
    where
        R: Read + Seek + Send,
        K: Codec + ?Sized,
        P: AsRef<Path>,
    {
        let dest = dest.as_ref();
        std::fs::create_dir_all(dest)?;

        let mut stats = ExtractStats::default();
        let mut resolved = Vec::new();
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.filename.is_some() {
                resolved.push((index, entry));
            } else {
                tracing::warn!(
                    index,
                    offset = format_args!("{:#x}", entry.offset),
                    "entry has no known name, not extracting"
                );
                stats.unresolved += 1;
            }
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.workers.unwrap_or(0))
            .build()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

        let results: Vec<(usize, &Entry, Result<u64>)> = pool.install(|| {
            resolved
                .par_iter()
                .map(|&(index, entry)| {
                    let result =
                        self.extract_entry(source, codec, entry, dest, options.write_compressed);
                    (index, entry, result)
                })
                .collect()
        });

        let mut failed = Vec::new();
        for (index, entry, result) in results {
            match result {
                Ok(bytes) => {
                    stats.files_extracted += 1;
                    stats.bytes_written += bytes;
                }
                Err(err) => {
                    tracing::warn!(index, name = %entry.display_name(), "{}", err);
                    failed.push((index, entry));
                }
            }
        }

        if !failed.is_empty() {
            tracing::info!(count = failed.len(), "retrying failed entries serially");
        }

        for (index, entry) in failed {
            stats.retried += 1;
            match self.extract_entry(source, codec, entry, dest, options.write_compressed) {
                Ok(bytes) => {
                    stats.files_extracted += 1;
                    stats.bytes_written += bytes;
                }
                Err(error) => {
                    tracing::error!(index, name = %entry.display_name(), "{}", error);
                    stats.failures.push(ExtractFailure {
                        index,
                        name: entry.display_name(),
                        error,
                    });
                }
            }
        }

        tracing::info!(
            extracted = stats.files_extracted,
            failed = stats.failures.len(),
            unresolved = stats.unresolved,
            "extraction finished"
        );

        Ok(stats)
    }
}
