/// Offset of the first entry header inside the host file.
pub const START_OFFSET: u64 = 0x400;

/// Size of the `(payload_len, name_len)` pair preceding every entry.
pub const ENTRY_HEADER_LEN: u64 = 8;

/// The all-zero header that ends the entry list.
pub const TERMINATOR: [u8; 8] = [0; 8];

// Recognisable and never a plausible header: 0xAAAAAAAA as a payload length
// points far past the end of any host file.
pub const FILLER_BYTE: u8 = 0xAA;

pub const FLAG_ENCRYPTED: u8 = 0x01;
pub const FLAG_PLAIN: u8 = 0x00;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) struct EntryHeader {
    /// Flag byte plus payload bytes.
    pub(crate) payload_len: u32,
    pub(crate) name_len: u32,
}

impl EntryHeader {
    pub(crate) const fn new(payload_len: u32, name_len: u32) -> EntryHeader {
        EntryHeader {
            payload_len,
            name_len,
        }
    }

    #[inline(always)]
    pub(crate) fn is_terminator(&self) -> bool {
        self.payload_len == 0 && self.name_len == 0
    }
}
