//! Filename hashing and the truncated-prefix matching rule.

use crate::cipher::Cipher;
use crate::header::ENTRY_HEADER_LEN;
use crate::key::Key;

/// Payloads of aligned entries start on a multiple of this many bytes.
pub const DATA_ALIGNMENT: u64 = 32;

/// Filename suffix of the entry class whose hash carries alignment padding.
pub const ALIGNED_SUFFIX: &[u8] = b".bank";

/// How a freshly computed hash is shaped before it is stored.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum HashStrategy {
    /// Store the full hash as produced by the cipher.
    Full,

    /// Older host builds stored the hash as a NUL-terminated string, cutting it
    /// short at the first zero byte. The hash keeps bytes up to and including
    /// that zero, or gains a single trailing zero when none is present.
    TruncateAtNul,
}

impl Default for HashStrategy {
    fn default() -> Self {
        HashStrategy::Full
    }
}

impl HashStrategy {
    pub fn apply(self, mut hash: Vec<u8>) -> Vec<u8> {
        match self {
            HashStrategy::Full => hash,
            HashStrategy::TruncateAtNul => {
                match hash.iter().position(|b| *b == 0) {
                    Some(i) => hash.truncate(i + 1),
                    None => hash.push(0),
                }
                hash
            }
        }
    }
}

/// True iff the two hashes agree over the length of the shorter one.
///
/// Either side may be the short one: stored hashes can be cut short by
/// [`HashStrategy::TruncateAtNul`] or lengthened by alignment padding.
#[inline]
pub fn matches(stored: &[u8], candidate: &[u8]) -> bool {
    let len = stored.len().min(candidate.len());
    stored[..len] == candidate[..len]
}

#[inline]
pub fn is_aligned_class(name: &[u8]) -> bool {
    name.ends_with(ALIGNED_SUFFIX)
}

/// Number of zero bytes appended to a hash so the payload is aligned.
///
/// Always in `1..=DATA_ALIGNMENT`: an already aligned offset still receives a
/// full block of padding.
#[inline]
pub fn alignment_padding(provisional_data_offset: u64) -> usize {
    (DATA_ALIGNMENT - provisional_data_offset % DATA_ALIGNMENT) as usize
}

/// Extend `hash` so that the payload of an entry at `container_offset` lands on
/// a [`DATA_ALIGNMENT`] boundary.
pub fn pad_for_alignment(mut hash: Vec<u8>, container_offset: u64) -> Vec<u8> {
    let provisional = container_offset + ENTRY_HEADER_LEN + hash.len() as u64 + 1;
    let padding = alignment_padding(provisional);
    hash.resize(hash.len() + padding, 0);
    hash
}

/// Hashes candidate names under one container key.
pub struct NameMatcher<'a, C: ?Sized> {
    cipher: &'a C,
    key: Key,
}

impl<'a, C: Cipher + ?Sized> NameMatcher<'a, C> {
    pub fn new(cipher: &'a C, key: Key) -> Self {
        NameMatcher { cipher, key }
    }

    #[inline]
    pub fn key(&self) -> Key {
        self.key
    }

    #[inline]
    pub fn hash_of(&self, name: &[u8]) -> Vec<u8> {
        self.cipher.hash(name, self.key)
    }

    /// The hash as it would be stored for an entry at `container_offset`.
    pub fn stored_hash(&self, name: &[u8], container_offset: u64, strategy: HashStrategy) -> Vec<u8> {
        let hash = strategy.apply(self.hash_of(name));
        if is_aligned_class(name) {
            pad_for_alignment(hash, container_offset)
        } else {
            hash
        }
    }

    pub fn matches_name(&self, stored: &[u8], name: &[u8]) -> bool {
        matches(stored, &self.hash_of(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_is_reflexive() {
        let h = [0x12, 0x34, 0x00, 0xff];
        assert!(matches(&h, &h));
        assert!(matches(&[], &[]));
    }

    #[test]
    fn matches_tolerates_either_side_being_short() {
        let full = [1u8, 2, 3, 4, 5, 6];
        assert!(matches(&full[..3], &full));
        assert!(matches(&full, &full[..3]));

        let mut padded = full.to_vec();
        padded.extend_from_slice(&[0; 17]);
        assert!(matches(&padded, &full));
        assert!(matches(&full, &padded));
    }

    #[test]
    fn matches_rejects_differing_prefix() {
        assert!(!matches(&[1, 2, 3], &[1, 2, 4, 5]));
        assert!(!matches(&[9], &[1, 2]));
    }

    #[test]
    fn matches_is_symmetric() {
        let cases: [(&[u8], &[u8]); 4] = [
            (&[1, 2], &[1, 2, 3]),
            (&[1, 2], &[1, 3]),
            (&[], &[7]),
            (&[5, 5, 5], &[5, 5, 5]),
        ];
        for (a, b) in cases.iter() {
            assert_eq!(matches(a, b), matches(b, a));
        }
    }

    #[test]
    fn padding_is_always_between_one_and_alignment() {
        for offset in 0..(DATA_ALIGNMENT * 3) {
            let padding = alignment_padding(offset);
            assert!((1..=DATA_ALIGNMENT as usize).contains(&padding), "{}", offset);
            assert_eq!((offset + padding as u64) % DATA_ALIGNMENT, 0);
        }
    }

    #[test]
    fn already_aligned_offset_gets_full_block() {
        assert_eq!(alignment_padding(0x400), 32);
        assert_eq!(alignment_padding(0x401), 31);
        assert_eq!(alignment_padding(0x41f), 1);
    }

    #[test]
    fn padded_hash_aligns_data_offset() {
        for hash_len in 0..70usize {
            for container_offset in 0x400..0x440u64 {
                let hash = pad_for_alignment(vec![0xaa; hash_len], container_offset);
                let padding = hash.len() - hash_len;
                assert!((1..=32).contains(&padding));
                assert!(hash[hash_len..].iter().all(|b| *b == 0));
                let data_offset = container_offset + ENTRY_HEADER_LEN + hash.len() as u64 + 1;
                assert_eq!(data_offset % DATA_ALIGNMENT, 0);
            }
        }
    }

    #[test]
    fn truncate_at_nul_keeps_terminator() {
        let strategy = HashStrategy::TruncateAtNul;
        assert_eq!(strategy.apply(vec![3, 0, 9, 9]), vec![3, 0]);
        assert_eq!(strategy.apply(vec![0, 1]), vec![0]);
        assert_eq!(strategy.apply(vec![3, 4]), vec![3, 4, 0]);
        assert_eq!(HashStrategy::Full.apply(vec![3, 0, 9]), vec![3, 0, 9]);
    }

    #[test]
    fn aligned_class_is_case_sensitive() {
        assert!(is_aligned_class(b"soundbank.bank"));
        assert!(is_aligned_class(b"soundbank.strings.bank"));
        assert!(!is_aligned_class(b"soundbank.BANK"));
        assert!(!is_aligned_class(b"strings00.str"));
    }
}
