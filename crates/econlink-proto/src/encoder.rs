use bytes::Bytes;
use prost::Message;
use tracing::trace;

use crate::block::PreviewBlock;
use crate::error::{EncodeError, Result};

/// Default maximum encoded block size: 4 KiB.
pub const DEFAULT_MAX_PAYLOAD: usize = 4 * 1024;

/// Serializes a preview block into canonical bytes.
///
/// Implementations must be deterministic, write fields in ascending
/// field-number order, length-delimit sticker sub-messages, and omit every
/// field that is `None`.
pub trait MessageEncoder {
    /// Encode `block`, or reject it when the schema cannot represent it.
    fn encode(&self, block: &PreviewBlock) -> Result<Bytes>;
}

/// Configuration for [`ProtoEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Maximum encoded size in bytes. Default: 4 KiB.
    pub max_payload_size: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            max_payload_size: DEFAULT_MAX_PAYLOAD,
        }
    }
}

/// Built-in protobuf encoder for preview blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtoEncoder {
    config: EncoderConfig,
}

impl ProtoEncoder {
    /// Create an encoder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with explicit configuration.
    pub fn with_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Current encoder configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }
}

impl MessageEncoder for ProtoEncoder {
    fn encode(&self, block: &PreviewBlock) -> Result<Bytes> {
        let size = block.encoded_len();
        if size > self.config.max_payload_size {
            return Err(EncodeError::PayloadTooLarge {
                size,
                max: self.config.max_payload_size,
            });
        }

        let encoded = block.encode_to_vec();
        trace!(size, stickers = block.stickers.len(), "encoded preview block");
        Ok(Bytes::from(encoded))
    }
}

impl<E: MessageEncoder + ?Sized> MessageEncoder for &E {
    fn encode(&self, block: &PreviewBlock) -> Result<Bytes> {
        (**self).encode(block)
    }
}
