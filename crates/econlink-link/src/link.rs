use bytes::Bytes;
use econlink_proto::{MessageEncoder, ProtoEncoder};
use tracing::debug;

use crate::checksum::frame_payload;
use crate::descriptor::ItemPreviewDescriptor;
use crate::error::Result;
use crate::normalize::normalize;

/// URI prefix the game client registers for item previews.
pub const PREVIEW_LINK_PREFIX: &str =
    "steam://rungame/730/76561202255233023/+csgo_econ_action_preview%20";

/// Configuration for [`LinkBuilder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    /// Text placed verbatim in front of the hex frame.
    pub uri_prefix: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            uri_prefix: PREVIEW_LINK_PREFIX.to_string(),
        }
    }
}

/// Builds checksummed inspect links from descriptors.
#[derive(Debug, Clone, Default)]
pub struct LinkBuilder<E = ProtoEncoder> {
    encoder: E,
    config: LinkConfig,
}

impl LinkBuilder {
    /// Create a builder with the built-in encoder and default configuration.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: MessageEncoder> LinkBuilder<E> {
    /// Create a builder around an explicit encoder.
    pub fn with_encoder(encoder: E) -> Self {
        Self::with_config(encoder, LinkConfig::default())
    }

    /// Create a builder with explicit encoder and configuration.
    pub fn with_config(encoder: E, config: LinkConfig) -> Self {
        Self { encoder, config }
    }

    /// Normalize and encode the descriptor, without framing.
    pub fn encode(&self, descriptor: &ItemPreviewDescriptor) -> Result<Bytes> {
        let block = normalize(descriptor);
        Ok(self.encoder.encode(&block)?)
    }

    /// Version byte + encoded block + checksum tag.
    pub fn frame(&self, descriptor: &ItemPreviewDescriptor) -> Result<Bytes> {
        let encoded = self.encode(descriptor)?;
        let framed = frame_payload(&encoded);
        debug!(
            encoded_len = encoded.len(),
            decorations = descriptor.decorations.len(),
            "framed preview block"
        );
        Ok(framed)
    }

    /// Uppercase hex of the frame, no separators or prefix.
    pub fn hex(&self, descriptor: &ItemPreviewDescriptor) -> Result<String> {
        Ok(hex::encode_upper(self.frame(descriptor)?))
    }

    /// Full inspect link: configured prefix followed by the hex frame.
    pub fn link(&self, descriptor: &ItemPreviewDescriptor) -> Result<String> {
        let hex = self.hex(descriptor)?;
        Ok(format!("{}{hex}", self.config.uri_prefix))
    }

    /// Current link configuration.
    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Borrow the underlying encoder.
    pub fn encoder(&self) -> &E {
        &self.encoder
    }
}

/// Hex frame for `descriptor` using the built-in encoder.
pub fn generate_hex(descriptor: &ItemPreviewDescriptor) -> Result<String> {
    LinkBuilder::new().hex(descriptor)
}

/// Inspect link for `descriptor` using the built-in encoder and default prefix.
pub fn generate_link(descriptor: &ItemPreviewDescriptor) -> Result<String> {
    LinkBuilder::new().link(descriptor)
}
