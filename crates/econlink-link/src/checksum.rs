use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

/// Version marker prepended to every encoded block.
pub const VERSION: u8 = 0x00;

/// Checksum tag size in bytes.
pub const TAG_SIZE: usize = 4;

/// Bytes a frame adds around the encoded block: version (1) + tag (4).
pub const FRAME_OVERHEAD: usize = 1 + TAG_SIZE;

/// Compute the checksum tag for a framed payload.
///
/// `payload` is the version byte followed by the encoded block, and
/// `encoded_len` is the length of the encoded block alone. The tag is the low
/// 16 bits of the payload's CRC-32 XORed with `encoded_len * crc`, with 32-bit
/// wrapping arithmetic.
pub fn checksum_tag(payload: &[u8], encoded_len: usize) -> u32 {
    let crc = crc32fast::hash(payload);
    let tag = (crc & 0xFFFF) ^ (encoded_len as u32).wrapping_mul(crc);
    trace!(crc, tag, encoded_len, "computed checksum tag");
    tag
}

/// Frame an encoded block for an inspect link.
///
/// Wire format:
/// ```text
/// ┌──────────┬──────────────────┬─────────────┐
/// │ Version  │ Encoded block    │ Tag         │
/// │ 0x00     │ (N bytes)        │ (4B BE)     │
/// └──────────┴──────────────────┴─────────────┘
/// ```
/// Only version + block are hashed.
pub fn frame_payload(encoded: &[u8]) -> Bytes {
    let mut buf = BytesMut::with_capacity(FRAME_OVERHEAD + encoded.len());
    buf.put_u8(VERSION);
    buf.put_slice(encoded);
    let tag = checksum_tag(&buf, encoded.len());
    buf.put_u32(tag);
    buf.freeze()
}
