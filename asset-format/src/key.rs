//! The container key, folded from every entry's payload length in order.
//!
//! The key is never patched in place. Whenever any payload length changes, the
//! whole sequence is replayed through a fresh [`KeyAccumulator`].

use std::fmt;

const KEY_SEED: u64 = 0xBABE;
const KEY_MULTIPLIER: u64 = 0x0000_0100_0000_01b3;

/// A key derived from an ordered sequence of payload lengths.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Key(u64);

impl Key {
    pub const fn new(value: u64) -> Key {
        Key(value)
    }

    #[inline(always)]
    pub const fn get(self) -> u64 {
        self.0
    }

    #[inline(always)]
    pub const fn to_le_bytes(self) -> [u8; 8] {
        self.0.to_le_bytes()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

impl fmt::LowerHex for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Order-sensitive fold over payload lengths.
///
/// `update` must be applied once per entry, in container order. Each step
/// mixes the running state before the next length is absorbed, so moving or
/// resizing any single entry changes the final key.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct KeyAccumulator {
    state: u64,
}

impl Default for KeyAccumulator {
    fn default() -> Self {
        KeyAccumulator::new()
    }
}

impl KeyAccumulator {
    pub const fn new() -> KeyAccumulator {
        KeyAccumulator { state: KEY_SEED }
    }

    #[must_use]
    pub fn update(self, payload_len: u32) -> KeyAccumulator {
        let state = (self.state ^ u64::from(payload_len))
            .wrapping_mul(KEY_MULTIPLIER)
            .rotate_left(17);
        KeyAccumulator { state }
    }

    pub fn finalize(self) -> Key {
        Key(self.state)
    }
}

/// Replay `payload_lens` through a fresh accumulator.
pub fn derive_key<I>(payload_lens: I) -> Key
where
    I: IntoIterator<Item = u32>,
{
    payload_lens
        .into_iter()
        .fold(KeyAccumulator::new(), KeyAccumulator::update)
        .finalize()
}
