//! Checksummed inspect links and `!gen` commands for econ item previews.
//!
//! An inspect link carries a hex-encoded checksum frame:
//! - a 1-byte version marker (`0x00`)
//! - the protobuf-encoded preview block
//! - a 4-byte big-endian checksum tag
//!
//! The `!gen` debug command is built straight from the descriptor and does not
//! touch the encoding path.

pub mod checksum;
pub mod command;
pub mod descriptor;
pub mod error;
pub mod link;
pub mod normalize;

pub use checksum::{checksum_tag, frame_payload, FRAME_OVERHEAD, TAG_SIZE, VERSION};
pub use command::{decoration_slots, gen_command, DecorationSlot, MAX_DECORATION_SLOTS};
pub use descriptor::{Decoration, ItemPreviewDescriptor, Rarity, WEAR_UNSET_SENTINEL};
pub use error::{LinkError, Result};
pub use link::{generate_hex, generate_link, LinkBuilder, LinkConfig, PREVIEW_LINK_PREFIX};
pub use normalize::{normalize, normalize_decoration, wear_bits};
