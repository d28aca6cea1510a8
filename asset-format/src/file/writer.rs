use std::borrow::Cow;
use std::io::{prelude::*, SeekFrom};
use std::path::Path;

use crate::cipher::Cipher;
use crate::compression::{Codec, DEFAULT_LEVEL};
use crate::entry::{Entry, PayloadSource};
use crate::error::{CapacityError, Error, HashHex, ResolutionError, Result, StructuralError};
use crate::hashing::{HashStrategy, NameMatcher};
use crate::header::{FILLER_BYTE, TERMINATOR};
use crate::key::Key;
use crate::path::{name_to_path, sidecar_path};
use crate::pixels;
use crate::ser::{position, write_fill, Serialize};

use super::{payload_lens, AssetStore};

#[derive(Debug, Clone)]
pub struct RepackOptions {
    /// Level handed to the codec for payloads compressed while repacking.
    pub compression_level: i32,

    pub hash_strategy: HashStrategy,

    /// Cache freshly compressed payloads as `.zst` sidecars next to their
    /// source file.
    pub write_sidecars: bool,
}

impl Default for RepackOptions {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_LEVEL,
            hash_strategy: HashStrategy::default(),
            write_sidecars: false,
        }
    }
}

/// Summary of a successful repackaging.
#[derive(Debug, Clone)]
pub struct RepackStats {
    pub key: Key,
    pub total_size: u64,
    pub capacity: u64,

    /// Names sourced from any root other than the last one.
    pub overridden: Vec<String>,

    /// Entries written with their parsed size and a zeroed payload. Any source
    /// attached by an earlier repackaging is dropped.
    pub passthrough: Vec<ResolutionError>,
}

impl<C: Cipher> AssetStore<C> {
    /// Rebuild the container from `roots` and write it through `writer`.
    ///
    /// `roots` are searched in order: overrides first, the base
    /// extraction last. Sources are resolved, the key is rederived from the
    /// new payload lengths, every known hash and offset is recomputed, and the
    /// result is checked against [`capacity`](AssetStore::capacity) before a
    /// single byte is written.
    ///
    /// `writer` must be positioned over a copy of the host file this store was
    /// parsed from. A structural failure while writing leaves it partially
    /// written.
    pub fn repackage<W, P, K>(
        &mut self,
        writer: &mut W,
        roots: &[P],
        codec: &K,
        options: &RepackOptions,
    ) -> Result<RepackStats>
    where
        W: Write + Seek,
        P: AsRef<Path>,
        K: Codec + ?Sized,
    {
        let mut entries = self.entries.clone();
        let mut overridden = Vec::new();
        let mut passthrough = Vec::new();

        tracing::info!(roots = roots.len(), "gathering assets for repackaging");
        for (index, entry) in entries.iter_mut().enumerate() {
            match resolve_source(index, entry, roots, codec, options)? {
                SourceOutcome::Resolved { root_index } => {
                    if root_index + 1 != roots.len() {
                        tracing::info!(
                            "Using '{}' from {}",
                            entry.display_name(),
                            entry
                                .source
                                .as_ref()
                                .map(|s| s.origin().display().to_string())
                                .unwrap_or_default()
                        );
                        overridden.push(entry.display_name());
                    }
                }
                SourceOutcome::Unresolved(err) => {
                    tracing::warn!("{}; keeping its parsed size", err);
                    passthrough.push(err);
                }
            }
        }

        let key = self.cipher.derive_key(&payload_lens(&entries));
        tracing::info!(key = %key, "calculated new key");

        let total_size = layout(
            &mut entries,
            &self.cipher,
            key,
            self.start_offset,
            options.hash_strategy,
        );

        if total_size > self.capacity {
            let err = CapacityError {
                required: total_size,
                available: self.capacity,
            };
            tracing::error!("{}", err);
            return Err(err.into());
        }

        tracing::info!(
            total_size,
            spare = self.capacity - total_size,
            "new container fits the reserved region"
        );

        write_entries(
            writer,
            &entries,
            &self.cipher,
            key,
            self.start_offset,
            self.capacity - total_size,
        )?;

        self.entries = entries;
        self.key = key;
        self.total_size = total_size;

        Ok(RepackStats {
            key,
            total_size,
            capacity: self.capacity,
            overridden,
            passthrough,
        })
    }
}

enum SourceOutcome {
    Resolved { root_index: usize },
    Unresolved(ResolutionError),
}

/// Find replacement bytes for `entry` and update its payload length.
fn resolve_source<P, K>(
    index: usize,
    entry: &mut Entry,
    roots: &[P],
    codec: &K,
    options: &RepackOptions,
) -> Result<SourceOutcome>
where
    P: AsRef<Path>,
    K: Codec + ?Sized,
{
    entry.source = None;

    let name = match &entry.filename {
        Some(name) => name.clone(),
        None => {
            return Ok(SourceOutcome::Unresolved(ResolutionError::NoMatch {
                index,
                hash: HashHex(entry.hash.clone()),
            }))
        }
    };
    let display_name = entry.display_name();

    for (root_index, root) in roots.iter().enumerate() {
        let path = match name_to_path(&name, root.as_ref()) {
            Ok(path) => path,
            Err(_) => {
                return Ok(SourceOutcome::Unresolved(
                    ResolutionError::UnrepresentableName {
                        index,
                        name: display_name,
                    },
                ))
            }
        };
        let sidecar = sidecar_path(&path);

        let source = if entry.encrypted && sidecar.is_file() {
            let data = std::fs::read(&sidecar)?;
            PayloadSource::Compressed {
                origin: sidecar,
                data,
            }
        } else if path.is_file() {
            if entry.encrypted {
                let raw = if pixels::is_image(&name) {
                    pixels::canonicalize_file(&path).map_err(|source| Error::Decode {
                        name: display_name.clone(),
                        source,
                    })?
                } else {
                    std::fs::read(&path)?
                };
                let data = codec.compress(&raw, options.compression_level)?;
                if options.write_sidecars {
                    std::fs::write(&sidecar, &data)?;
                }
                PayloadSource::Compressed { origin: path, data }
            } else {
                PayloadSource::File(path)
            }
        } else {
            continue;
        };

        let size = match &source {
            PayloadSource::File(path) => std::fs::metadata(path)?.len(),
            PayloadSource::Compressed { data, .. } => data.len() as u64,
        };

        entry.payload_len = size
            .checked_add(1)
            .and_then(|len| u32::try_from(len).ok())
            .ok_or(StructuralError::PayloadTooLarge { index, size })?;
        entry.source = Some(source);

        tracing::debug!(
            index,
            name = %display_name,
            size,
            root = %root.as_ref().display(),
            "resolved source"
        );

        return Ok(SourceOutcome::Resolved { root_index });
    }

    Ok(SourceOutcome::Unresolved(ResolutionError::NoSource {
        name: display_name,
    }))
}

/// Recompute hashes and offsets under `key`, returning the new total size.
///
/// Entries without a filename keep their parsed hash.
fn layout<C: Cipher + ?Sized>(
    entries: &mut [Entry],
    cipher: &C,
    key: Key,
    start_offset: u64,
    strategy: HashStrategy,
) -> u64 {
    let matcher = NameMatcher::new(cipher, key);
    let mut offset = start_offset;

    for entry in entries.iter_mut() {
        if let Some(name) = &entry.filename {
            entry.hash = matcher.stored_hash(name, offset, strategy);
        }
        entry.offset = offset;
        offset += entry.total_size();
    }

    offset - start_offset
}

#[inline(always)]
fn expect_position<W: Seek>(
    writer: &mut W,
    index: usize,
    field: &'static str,
    expected: u64,
) -> Result<()> {
    let actual = position(writer)?;
    if actual != expected {
        return Err(StructuralError::OffsetMismatch {
            index,
            field,
            expected,
            actual,
        }
        .into());
    }
    Ok(())
}

fn write_entries<W, C>(
    writer: &mut W,
    entries: &[Entry],
    cipher: &C,
    key: Key,
    start_offset: u64,
    spare: u64,
) -> Result<()>
where
    W: Write + Seek,
    C: Cipher + ?Sized,
{
    writer.seek(SeekFrom::Start(start_offset))?;

    for (index, entry) in entries.iter().enumerate() {
        expect_position(writer, index, "header", entry.container_offset())?;
        entry.write(writer)?;
        expect_position(writer, index, "data", entry.data_offset())?;

        match (&entry.source, &entry.filename) {
            (Some(source), Some(name)) => {
                let data: Cow<'_, [u8]> = match source {
                    PayloadSource::File(path) => Cow::Owned(std::fs::read(path)?),
                    PayloadSource::Compressed { data, .. } => Cow::Borrowed(data),
                };
                let data = if entry.encrypted {
                    Cow::Owned(cipher.encrypt(name, &data, key))
                } else {
                    data
                };

                if data.len() as u64 != entry.data_size() {
                    return Err(StructuralError::PayloadLengthMismatch {
                        index,
                        expected: entry.data_size(),
                        actual: data.len() as u64,
                    }
                    .into());
                }
                writer.write_all(&data)?;
            }
            _ => write_fill(writer, 0, entry.data_size())?,
        }

        tracing::debug!(
            index,
            offset = format_args!("{:#x}", entry.container_offset()),
            data_offset = format_args!("{:#x}", entry.data_offset()),
            encrypted = entry.encrypted,
            name = %entry.display_name(),
            "serialized Entry"
        );
    }

    writer.write_all(&TERMINATOR)?;
    write_fill(writer, FILLER_BYTE, spare)?;
    writer.flush()?;
    Ok(())
}
