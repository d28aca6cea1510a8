//! The keyed primitive used to hash filenames and encrypt payloads.
//!
//! The concrete stream cipher lives outside this crate. Everything here only
//! relies on the contract spelled out on [`Cipher`].

use crate::error::DecodeError;
use crate::key::{derive_key, Key};

/// A keyed hash and length-preserving stream cipher.
///
/// Implementors must be deterministic: the same `(name, key)` pair always
/// yields the same hash, and `decrypt(name, encrypt(name, data, key), key)`
/// returns `data`. `encrypt` must not change the payload length, because the
/// container layout is computed before any payload is encrypted.
pub trait Cipher: Send + Sync {
    /// Fold an ordered sequence of payload lengths into a container key.
    fn derive_key(&self, payload_lens: &[u32]) -> Key {
        derive_key(payload_lens.iter().copied())
    }

    /// Hash a raw filename. Case and separators are significant.
    fn hash(&self, name: &[u8], key: Key) -> Vec<u8>;

    fn encrypt(&self, name: &[u8], data: &[u8], key: Key) -> Vec<u8>;

    fn decrypt(&self, name: &[u8], data: &[u8], key: Key) -> Result<Vec<u8>, DecodeError>;
}

impl<C: Cipher + ?Sized> Cipher for &C {
    fn derive_key(&self, payload_lens: &[u32]) -> Key {
        (**self).derive_key(payload_lens)
    }

    fn hash(&self, name: &[u8], key: Key) -> Vec<u8> {
        (**self).hash(name, key)
    }

    fn encrypt(&self, name: &[u8], data: &[u8], key: Key) -> Vec<u8> {
        (**self).encrypt(name, data, key)
    }

    fn decrypt(&self, name: &[u8], data: &[u8], key: Key) -> Result<Vec<u8>, DecodeError> {
        (**self).decrypt(name, data, key)
    }
}
