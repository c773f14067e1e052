//! Wire schema and encoder for econ item preview data blocks.
//!
//! A preview data block is a proto2 message, serialized with `prost`. This
//! crate owns only the serialization side:
//! - [`PreviewBlock`] / [`StickerBlock`] describe exactly which fields are
//!   present on the wire
//! - [`MessageEncoder`] is the seam the link layer calls through
//! - [`ProtoEncoder`] is the built-in, deterministic implementation

pub mod block;
pub mod encoder;
pub mod error;

pub use block::{PreviewBlock, StickerBlock};
pub use encoder::{EncoderConfig, MessageEncoder, ProtoEncoder, DEFAULT_MAX_PAYLOAD};
pub use error::{EncodeError, Result};
