use std::fs::File;
use std::io::{prelude::*, BufReader, SeekFrom};
use std::path::Path;

use crate::cipher::Cipher;
use crate::de::{read_entry_body, DeserializeOwned};
use crate::entry::Entry;
use crate::error::{HashHex, ResolutionError, Result, StructuralError};
use crate::hashing::{matches, NameMatcher};
use crate::header::{EntryHeader, START_OFFSET};
use crate::key::Key;

pub mod reader;
pub mod writer;

/// Outcome of matching known names against stored hashes.
#[derive(Debug, Default)]
pub struct ResolveReport {
    /// Entries carrying a filename after this pass, including earlier matches.
    pub resolved: usize,
    pub unresolved: Vec<ResolutionError>,
}

/// The container embedded in a host file.
///
/// Entries keep on-disk order. The key is always derived from the current
/// payload lengths as a whole and replaced, never adjusted.
#[derive(Debug)]
pub struct AssetStore<C> {
    pub(crate) entries: Vec<Entry>,
    pub(crate) key: Key,
    pub(crate) total_size: u64,

    /// Size of the region reserved by the host file, fixed at parse time.
    pub(crate) capacity: u64,

    pub(crate) start_offset: u64,
    pub(crate) cipher: C,
}

impl<C: Cipher> AssetStore<C> {
    /// Parse the container of the host file at `path`.
    pub fn open<P: AsRef<Path>>(path: P, cipher: C) -> Result<AssetStore<C>> {
        let mut reader = BufReader::new(File::open(path.as_ref())?);
        AssetStore::load(&mut reader, cipher)
    }

    /// Parse a container starting at [`START_OFFSET`].
    pub fn load<R: Read + Seek>(reader: &mut R, cipher: C) -> Result<AssetStore<C>> {
        AssetStore::load_at(reader, START_OFFSET, cipher)
    }

    pub fn load_at<R: Read + Seek>(
        reader: &mut R,
        start_offset: u64,
        cipher: C,
    ) -> Result<AssetStore<C>> {
        reader.seek(SeekFrom::Start(start_offset))?;

        let mut entries = Vec::new();
        let mut total_size = 0u64;
        let mut offset = start_offset;

        loop {
            let header = EntryHeader::deserialize_owned(reader)
                .map_err(|source| StructuralError::Truncated { offset, source })?;

            if header.is_terminator() {
                break;
            }

            if header.payload_len == 0 {
                return Err(StructuralError::ZeroPayload {
                    index: entries.len(),
                    offset,
                    name_len: header.name_len,
                }
                .into());
            }

            let entry = read_entry_body(reader, header, offset)
                .map_err(|source| StructuralError::Truncated { offset, source })?;

            offset = entry.end_offset();
            total_size += entry.total_size();
            entries.push(entry);
        }

        let key = cipher.derive_key(&payload_lens(&entries));

        tracing::debug!(
            start = format_args!("{:#x}", start_offset),
            end = format_args!("{:#x}", offset),
            bytes = total_size,
            count = entries.len(),
            key = %key,
            "deserialized AssetStore"
        );

        Ok(AssetStore {
            entries,
            key,
            total_size,
            capacity: total_size,
            start_offset,
            cipher,
        })
    }

    #[inline(always)]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline(always)]
    pub fn key(&self) -> Key {
        self.key
    }

    /// Sum of every entry's header, hash and payload, terminator excluded.
    #[inline(always)]
    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// The size budget any repackaged container must fit into.
    #[inline(always)]
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    #[inline(always)]
    pub fn start_offset(&self) -> u64 {
        self.start_offset
    }

    #[inline(always)]
    pub fn cipher(&self) -> &C {
        &self.cipher
    }

    pub fn matcher(&self) -> NameMatcher<'_, C> {
        NameMatcher::new(&self.cipher, self.key)
    }

    /// The hash of `name` under the current key.
    pub fn filename_hash(&self, name: &[u8]) -> Vec<u8> {
        self.matcher().hash_of(name)
    }

    /// First entry whose stored hash matches `name` under the current key.
    pub fn find(&self, name: &[u8]) -> Option<&Entry> {
        let hash = self.filename_hash(name);
        self.entries.iter().find(|e| matches(&e.hash, &hash))
    }

    /// Entries that have no filename yet, with their index.
    pub fn unresolved(&self) -> impl Iterator<Item = (usize, &Entry)> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.filename.is_none())
    }

    /// Match `known` names against every entry that has no filename yet.
    ///
    /// An entry matched by exactly one distinct name takes that name. Entries
    /// matching no name, or several, are left unresolved and reported.
    pub fn resolve_names<N: AsRef<[u8]>>(&mut self, known: &[N]) -> ResolveReport {
        let candidates = {
            let matcher = self.matcher();
            known
                .iter()
                .map(|name| (name.as_ref(), matcher.hash_of(name.as_ref())))
                .collect::<Vec<_>>()
        };

        let mut report = ResolveReport::default();

        for (index, entry) in self.entries.iter_mut().enumerate() {
            if entry.filename.is_some() {
                report.resolved += 1;
                continue;
            }

            let mut found: Vec<&[u8]> = Vec::new();
            for (name, hash) in candidates.iter() {
                if matches(&entry.hash, hash) && !found.contains(name) {
                    found.push(*name);
                }
            }

            match found.as_slice() {
                [name] => {
                    entry.filename = Some(name.to_vec());
                    report.resolved += 1;
                }
                [] => {
                    let err = ResolutionError::NoMatch {
                        index,
                        hash: HashHex(entry.hash.clone()),
                    };
                    tracing::warn!(
                        offset = format_args!("{:#x}", entry.offset),
                        "{}",
                        err
                    );
                    report.unresolved.push(err);
                }
                names => {
                    let err = ResolutionError::Ambiguous {
                        index,
                        names: names
                            .iter()
                            .map(|n| String::from_utf8_lossy(n).into_owned())
                            .collect(),
                    };
                    tracing::warn!(
                        offset = format_args!("{:#x}", entry.offset),
                        "{}",
                        err
                    );
                    report.unresolved.push(err);
                }
            }
        }

        report
    }
}

#[inline]
pub(crate) fn payload_lens(entries: &[Entry]) -> Vec<u32> {
    entries.iter().map(|e| e.payload_len).collect()
}
