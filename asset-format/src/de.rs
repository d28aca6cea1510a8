use std::io::{prelude::*, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

use crate::entry::Entry;
use crate::header::{EntryHeader, FLAG_ENCRYPTED};

pub(crate) trait DeserializeOwned {
    fn deserialize_owned<R: Read + Seek>(reader: &mut R) -> std::io::Result<Self>
    where
        Self: Sized;
}

impl DeserializeOwned for EntryHeader {
    fn deserialize_owned<R: Read + Seek>(reader: &mut R) -> std::io::Result<Self> {
        let payload_len = reader.read_u32::<LittleEndian>()?;
        let name_len = reader.read_u32::<LittleEndian>()?;
        Ok(EntryHeader::new(payload_len, name_len))
    }
}

/// Read exactly `len` bytes without trusting `len` for the allocation size.
pub(crate) fn read_bytes<R: Read>(reader: &mut R, len: u64) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(len.min(4096) as usize);
    reader.take(len).read_to_end(&mut buf)?;
    if (buf.len() as u64) < len {
        return Err(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!("expected {} bytes, found {}", len, buf.len()),
        ));
    }
    Ok(buf)
}

/// Reads the body of an entry whose header has already been consumed, leaving
/// the reader positioned at the next header.
pub(crate) fn read_entry_body<R: Read + Seek>(
    reader: &mut R,
    header: EntryHeader,
    offset: u64,
) -> std::io::Result<Entry> {
    let hash = read_bytes(reader, u64::from(header.name_len))?;
    let flag = reader.read_u8()?;
    let encrypted = flag == FLAG_ENCRYPTED;

    let entry = Entry {
        hash,
        payload_len: header.payload_len,
        encrypted,
        offset,
        filename: None,
        source: None,
    };

    reader.seek(SeekFrom::Start(entry.end_offset()))?;

    tracing::debug!(
        offset = format_args!("{:#x}", offset),
        data_offset = format_args!("{:#x}", entry.data_offset()),
        payload_len = header.payload_len,
        name_len = header.name_len,
        flag,
        "deserialized Entry"
    );

    Ok(entry)
}
