//! Byte-level helpers shared by the protocol routines.

use digest::Digest;

/// Left-pad `bytes` with zeros to exactly `length` bytes.
///
/// Values already at least `length` bytes long are returned unchanged; the
/// canonical fixed width only applies to values reduced mod N.
pub fn left_pad(bytes: &[u8], length: usize) -> Vec<u8> {
    if bytes.len() >= length {
        return bytes.to_vec();
    }
    let mut padded = vec![0u8; length - bytes.len()];
    padded.extend_from_slice(bytes);
    padded
}

/// Digest the concatenation of `parts`.
pub fn hash<D: Digest>(parts: &[&[u8]]) -> Vec<u8> {
    let mut d = D::new();
    for part in parts {
        d.update(part);
    }
    d.finalize().to_vec()
}

/// Digest the concatenation of `parts`, each left-padded to `length` bytes.
pub fn hash_padded<D: Digest>(length: usize, parts: &[&[u8]]) -> Vec<u8> {
    let mut d = D::new();
    for part in parts {
        d.update(left_pad(part, length));
    }
    d.finalize().to_vec()
}
