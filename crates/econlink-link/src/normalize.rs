//! Descriptor to wire-block conversion.
//!
//! Default-valued optional decoration fields never reach the encoder, so the
//! decoder on the other side reconstructs them from absence.

use econlink_proto::{PreviewBlock, StickerBlock};

use crate::descriptor::{Decoration, ItemPreviewDescriptor};

/// Raw IEEE-754 binary32 bits of `value`.
pub fn wear_bits(value: f32) -> u32 {
    value.to_bits()
}

/// Drop every default-valued optional field of a decoration.
///
/// Slot and id are always kept. The slot is not range-checked here.
pub fn normalize_decoration(decoration: &Decoration) -> StickerBlock {
    StickerBlock {
        slot: decoration.slot,
        sticker_id: decoration.decoration_id,
        wear: decoration
            .wear
            .filter(|wear| *wear > 0.0)
            .map(|wear| wear as f32),
        rotation: non_zero(decoration.rotation),
        tint_id: decoration.tint_id,
        offset_x: non_zero(decoration.offset_x),
        offset_y: non_zero(decoration.offset_y),
    }
}

/// Build the field-presence-minimal block for `descriptor`.
pub fn normalize(descriptor: &ItemPreviewDescriptor) -> PreviewBlock {
    PreviewBlock {
        account_id: descriptor.account_id,
        item_id: descriptor.item_id,
        def_index: descriptor.def_index,
        paint_index: descriptor.paint_index,
        rarity: descriptor.rarity.into(),
        quality: descriptor.quality,
        paint_wear: descriptor.paint_wear.map(|wear| wear_bits(wear as f32)),
        paint_seed: descriptor.paint_seed,
        kill_eater_score_type: descriptor.kill_eater_score_type,
        kill_eater_value: descriptor.kill_eater_value,
        custom_name: descriptor.custom_name.clone(),
        stickers: descriptor
            .decorations
            .iter()
            .map(normalize_decoration)
            .collect(),
        origin: descriptor.origin,
    }
}

fn non_zero(value: f32) -> Option<f32> {
    (value != 0.0).then_some(value)
}
