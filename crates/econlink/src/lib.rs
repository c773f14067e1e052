//! Inspect links and `!gen` commands for econ item previews.
//!
//! econlink turns a description of an item's finish (paint, seed, wear,
//! stickers) into the checksummed hex frame the game client accepts in an
//! inspect link, plus the matching `!gen` console command.
//!
//! # Crate Structure
//!
//! - [`proto`] — Wire schema and protobuf encoder for preview data blocks
//! - [`link`] — Descriptor model, checksum framing, link and `!gen` rendering
//!
//! ```
//! use econlink::{generate_link, gen_command, Decoration, ItemPreviewDescriptor};
//!
//! let item = ItemPreviewDescriptor::new(7, 474, 306)
//!     .with_wear(0.6336590647697449)
//!     .with_decoration(Decoration::new(3, 2));
//!
//! let link = generate_link(&item).unwrap();
//! assert!(link.starts_with(econlink::PREVIEW_LINK_PREFIX));
//! assert_eq!(
//!     gen_command(&item),
//!     "!gen 7 474 306 0.6336590647697449 0 0 0 0 0 0 2 0 0 0"
//! );
//! ```

/// Re-export wire schema types.
pub mod proto {
    pub use econlink_proto::*;
}

/// Re-export link types.
pub mod link {
    pub use econlink_link::*;
}

pub use econlink_link::{
    gen_command, generate_hex, generate_link, Decoration, ItemPreviewDescriptor, LinkBuilder,
    LinkConfig, LinkError, Rarity, PREVIEW_LINK_PREFIX,
};
