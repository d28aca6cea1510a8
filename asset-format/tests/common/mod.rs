#![allow(dead_code)]

use std::path::Path;

use asset_format::hashing::{is_aligned_class, pad_for_alignment};
use asset_format::{derive_key, Cipher, Codec, DecodeError, Key, START_OFFSET, TERMINATOR};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv(seed: u64, key: Key, name: &[u8]) -> u64 {
    let mut state = FNV_OFFSET ^ seed;
    for b in key.to_le_bytes().iter().chain(name) {
        state ^= u64::from(*b);
        state = state.wrapping_mul(FNV_PRIME);
    }
    state
}

/// Deterministic stand-in for the host's cipher: a 16 byte FNV hash of key and
/// name, and a length-preserving XOR keystream.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeCipher;

impl FakeCipher {
    fn keystream(&self, name: &[u8], key: Key, len: usize) -> Vec<u8> {
        let mut state = fnv(0x5eed, key, name) | 1;
        (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                (state >> 24) as u8
            })
            .collect()
    }
}

impl Cipher for FakeCipher {
    fn hash(&self, name: &[u8], key: Key) -> Vec<u8> {
        let mut out = fnv(1, key, name).to_le_bytes().to_vec();
        out.extend_from_slice(&fnv(2, key, name).to_le_bytes());
        out
    }

    fn encrypt(&self, name: &[u8], data: &[u8], key: Key) -> Vec<u8> {
        data.iter()
            .zip(self.keystream(name, key, data.len()))
            .map(|(d, k)| d ^ k)
            .collect()
    }

    fn decrypt(&self, name: &[u8], data: &[u8], key: Key) -> Result<Vec<u8>, DecodeError> {
        Ok(self.encrypt(name, data, key))
    }
}

/// Prepends a `Z` marker on compression and insists on it when decompressing.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeCodec;

impl Codec for FakeCodec {
    fn compress(&self, data: &[u8], _level: i32) -> std::io::Result<Vec<u8>> {
        let mut out = Vec::with_capacity(data.len() + 1);
        out.push(b'Z');
        out.extend_from_slice(data);
        Ok(out)
    }

    fn decompress(&self, data: &[u8]) -> Result<Vec<u8>, DecodeError> {
        match data.split_first() {
            Some((b'Z', rest)) => Ok(rest.to_vec()),
            _ => Err(DecodeError::Compression(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "missing Z marker",
            ))),
        }
    }
}

/// Bytes before the container and after its terminator.
pub const PREFIX_BYTE: u8 = 0x90;
pub const TAIL: &[u8] = b"-- remainder of the host image --";

#[derive(Debug, Clone)]
pub struct Asset {
    pub name: Vec<u8>,
    pub encrypted: bool,

    /// Extracted form for plain entries, uncompressed form for encrypted ones.
    pub content: Vec<u8>,
}

impl Asset {
    pub fn encrypted(name: &str, content: &[u8]) -> Asset {
        Asset {
            name: name.as_bytes().to_vec(),
            encrypted: true,
            content: content.to_vec(),
        }
    }

    pub fn plain(name: &str, content: &[u8]) -> Asset {
        Asset {
            name: name.as_bytes().to_vec(),
            encrypted: false,
            content: content.to_vec(),
        }
    }

    fn stored_payload(&self, key: Key) -> Vec<u8> {
        if self.encrypted {
            let compressed = FakeCodec.compress(&self.content, 0).unwrap();
            FakeCipher.encrypt(&self.name, &compressed, key)
        } else {
            self.content.clone()
        }
    }

    fn stored_len(&self) -> u32 {
        let data_len = if self.encrypted {
            self.content.len() + 1
        } else {
            self.content.len()
        };
        data_len as u32 + 1
    }
}

/// Lay out a host image holding `assets` the way the host itself would.
pub fn build_host(assets: &[Asset]) -> Vec<u8> {
    let key = derive_key(assets.iter().map(Asset::stored_len));

    let mut out = vec![PREFIX_BYTE; START_OFFSET as usize];
    for asset in assets {
        let offset = out.len() as u64;
        let mut hash = FakeCipher.hash(&asset.name, key);
        if is_aligned_class(&asset.name) {
            hash = pad_for_alignment(hash, offset);
        }

        out.extend_from_slice(&asset.stored_len().to_le_bytes());
        out.extend_from_slice(&(hash.len() as u32).to_le_bytes());
        out.extend_from_slice(&hash);
        out.push(asset.encrypted as u8);
        out.extend_from_slice(&asset.stored_payload(key));
    }
    out.extend_from_slice(&TERMINATOR);
    out.extend_from_slice(TAIL);
    out
}

pub fn write_host(path: &Path, assets: &[Asset]) {
    std::fs::write(path, build_host(assets)).unwrap();
}

pub fn names(assets: &[Asset]) -> Vec<Vec<u8>> {
    assets.iter().map(|a| a.name.clone()).collect()
}

/// A small mixed set: plain and encrypted, nested paths, one aligned entry.
pub fn sample_assets() -> Vec<Asset> {
    vec![
        Asset::encrypted("Data/Levels/Arena/dm1-1.lvl", b"level one geometry"),
        Asset::plain("Data/Config/readme.txt", b"plain text payload\n"),
        Asset::encrypted("Data/Audio/Master Bank.bank", &[7u8; 45]),
        Asset::encrypted("Data/Strings/strings00.str", b"hello\0world\0"),
        Asset::plain("Data/Audio/Master Bank.strings.bank", b"strings bank"),
    ]
}
