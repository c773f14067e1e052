//! Field-presence model of the preview data block.
//!
//! The message is proto2: required fields are always written, optional
//! fields are written whenever they are `Some`, even when they hold the
//! protobuf default.

use prost::Message;

/// A `CEconItemPreviewDataBlock` message, ready for the wire.
#[derive(Clone, PartialEq, Message)]
pub struct PreviewBlock {
    #[prost(uint32, optional, tag = "1")]
    pub account_id: Option<u32>,
    #[prost(uint64, optional, tag = "2")]
    pub item_id: Option<u64>,
    #[prost(uint32, required, tag = "3")]
    pub def_index: u32,
    #[prost(uint32, required, tag = "4")]
    pub paint_index: u32,
    #[prost(uint32, required, tag = "5")]
    pub rarity: u32,
    #[prost(uint32, optional, tag = "6")]
    pub quality: Option<u32>,
    /// Raw IEEE-754 binary32 bits of the wear value.
    #[prost(uint32, optional, tag = "7")]
    pub paint_wear: Option<u32>,
    #[prost(uint32, required, tag = "8")]
    pub paint_seed: u32,
    #[prost(uint32, optional, tag = "9")]
    pub kill_eater_score_type: Option<u32>,
    #[prost(uint32, optional, tag = "10")]
    pub kill_eater_value: Option<u32>,
    #[prost(string, optional, tag = "11")]
    pub custom_name: Option<String>,
    #[prost(message, repeated, tag = "12")]
    pub stickers: Vec<StickerBlock>,
    #[prost(uint32, optional, tag = "14")]
    pub origin: Option<u32>,
}

/// A `CEconItemPreviewDataBlock.Sticker` sub-message.
#[derive(Clone, Copy, PartialEq, Message)]
pub struct StickerBlock {
    #[prost(uint32, required, tag = "1")]
    pub slot: u32,
    #[prost(uint32, required, tag = "2")]
    pub sticker_id: u32,
    #[prost(float, optional, tag = "3")]
    pub wear: Option<f32>,
    #[prost(float, optional, tag = "5")]
    pub rotation: Option<f32>,
    #[prost(uint32, optional, tag = "6")]
    pub tint_id: Option<u32>,
    #[prost(float, optional, tag = "7")]
    pub offset_x: Option<f32>,
    #[prost(float, optional, tag = "8")]
    pub offset_y: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(block: &PreviewBlock) -> Vec<u8> {
        block.encode_to_vec()
    }

    fn sample() -> PreviewBlock {
        PreviewBlock {
            def_index: 7,
            paint_index: 474,
            rarity: 6,
            paint_seed: 306,
            ..PreviewBlock::default()
        }
    }

    #[test]
    fn required_fields_only() {
        let bytes = encode(&sample());
        assert_eq!(
            bytes,
            [0x18, 0x07, 0x20, 0xDA, 0x03, 0x28, 0x06, 0x40, 0xB2, 0x02]
        );
    }

    #[test]
    fn zero_required_fields_are_still_written() {
        let bytes = encode(&PreviewBlock::default());
        assert_eq!(bytes, [0x18, 0x00, 0x20, 0x00, 0x28, 0x00, 0x40, 0x00]);
    }

    #[test]
    fn wear_bits_sit_between_rarity_and_seed() {
        let block = PreviewBlock {
            paint_wear: Some(0x3F22_377B),
            ..sample()
        };
        let bytes = encode(&block);
        assert_eq!(hex(&bytes), "180720DA03280638FBEE88F90340B202");
    }

    #[test]
    fn sticker_with_only_slot_and_id() {
        let block = PreviewBlock {
            stickers: vec![StickerBlock {
                slot: 3,
                sticker_id: 2,
                ..StickerBlock::default()
            }],
            ..sample()
        };
        assert_eq!(hex(&encode(&block)), "180720DA03280640B202620408031002");
    }

    #[test]
    fn sticker_optional_fields_in_field_order() {
        let block = PreviewBlock {
            stickers: vec![StickerBlock {
                slot: 0,
                sticker_id: 4213,
                wear: Some(0.25),
                rotation: Some(45.0),
                tint_id: Some(3),
                offset_x: Some(-0.1),
                offset_y: None,
            }],
            ..sample()
        };
        assert_eq!(
            hex(&encode(&block)),
            "180720DA03280640B2026216080010F5201D0000803E2D0000344230033DCDCCCCBD",
        );
    }

    #[test]
    fn explicit_zero_tint_is_written() {
        let sticker = StickerBlock {
            tint_id: Some(0),
            ..StickerBlock::default()
        };
        assert_eq!(sticker.encode_to_vec(), [0x08, 0x00, 0x10, 0x00, 0x30, 0x00]);
    }

    #[test]
    fn supplementary_fields() {
        let block = PreviewBlock {
            quality: Some(9),
            kill_eater_score_type: Some(0),
            kill_eater_value: Some(1337),
            custom_name: Some("hello".to_string()),
            origin: Some(8),
            ..sample()
        };
        assert_eq!(
            hex(&encode(&block)),
            "180720DA032806300940B202480050B90A5A0568656C6C6F7008",
        );
    }

    #[test]
    fn encoded_len_matches_encoded_bytes() {
        let block = PreviewBlock {
            account_id: Some(u32::MAX),
            item_id: Some(u64::MAX),
            paint_wear: Some(0x3A83_126F),
            custom_name: Some("name tag".to_string()),
            stickers: vec![
                StickerBlock {
                    slot: 1,
                    sticker_id: 76,
                    wear: Some(0.5),
                    offset_y: Some(0.02),
                    ..StickerBlock::default()
                },
                StickerBlock {
                    slot: 4,
                    sticker_id: 5000,
                    rotation: Some(-30.0),
                    ..StickerBlock::default()
                },
            ],
            ..sample()
        };
        assert_eq!(block.encoded_len(), encode(&block).len());
    }

    fn hex(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02X}")).collect()
    }
}
