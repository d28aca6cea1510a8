use std::io::{prelude::*, SeekFrom};

use byteorder::{LittleEndian, WriteBytesExt};

use crate::entry::Entry;
use crate::header::{EntryHeader, FLAG_ENCRYPTED, FLAG_PLAIN};

pub(crate) trait Serialize {
    fn write<W: Write + Seek>(&self, writer: &mut W) -> std::io::Result<()>;
}

impl Serialize for EntryHeader {
    fn write<W: Write + Seek>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_u32::<LittleEndian>(self.payload_len)?;
        writer.write_u32::<LittleEndian>(self.name_len)
    }
}

/// Header, stored hash and flag byte. The payload is written separately.
impl Serialize for Entry {
    fn write<W: Write + Seek>(&self, writer: &mut W) -> std::io::Result<()> {
        EntryHeader::new(self.payload_len, self.stored_hash_len()).write(writer)?;
        writer.write_all(&self.hash)?;
        writer.write_u8(if self.encrypted {
            FLAG_ENCRYPTED
        } else {
            FLAG_PLAIN
        })
    }
}

/// Write `count` copies of `byte` in bounded chunks.
pub(crate) fn write_fill<W: Write>(writer: &mut W, byte: u8, count: u64) -> std::io::Result<()> {
    let chunk = [byte; 4096];
    let mut remaining = count;
    while remaining > 0 {
        let n = remaining.min(chunk.len() as u64) as usize;
        writer.write_all(&chunk[..n])?;
        remaining -= n as u64;
    }
    Ok(())
}

#[inline(always)]
pub(crate) fn position<W: Seek>(writer: &mut W) -> std::io::Result<u64> {
    writer.seek(SeekFrom::Current(0))
}
