use serde::{Deserialize, Serialize};

/// Legacy wear value that callers used to mean "no wear override".
pub const WEAR_UNSET_SENTINEL: f64 = 0.001;

/// Item rarity tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum Rarity {
    #[default]
    Stock = 0,
    ConsumerGrade = 1,
    IndustrialGrade = 2,
    MilSpecGrade = 3,
    Restricted = 4,
    Classified = 5,
    Covert = 6,
    Contraband = 7,
    Gold = 99,
}

impl From<Rarity> for u32 {
    fn from(rarity: Rarity) -> Self {
        rarity as u32
    }
}

impl TryFrom<u32> for Rarity {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Stock),
            1 => Ok(Self::ConsumerGrade),
            2 => Ok(Self::IndustrialGrade),
            3 => Ok(Self::MilSpecGrade),
            4 => Ok(Self::Restricted),
            5 => Ok(Self::Classified),
            6 => Ok(Self::Covert),
            7 => Ok(Self::Contraband),
            99 => Ok(Self::Gold),
            other => Err(other),
        }
    }
}

/// A sticker or patch attached to one of the item's fixed slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    /// Attachment point. Only 0-4 exist on a real item.
    pub slot: u32,
    #[serde(alias = "sticker_id", alias = "stickerId")]
    pub decoration_id: u32,
    /// Scrape amount. Written only when strictly positive, narrowed to
    /// binary32 on the wire and printed as given in `!gen`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wear: Option<f64>,
    #[serde(default, alias = "offsetX")]
    pub offset_x: f32,
    #[serde(default, alias = "offsetY")]
    pub offset_y: f32,
    #[serde(default)]
    pub rotation: f32,
    /// Passed through to the encoder as given.
    #[serde(default, alias = "tintId", skip_serializing_if = "Option::is_none")]
    pub tint_id: Option<u32>,
}

impl Decoration {
    /// A decoration with only slot and id set.
    pub fn new(slot: u32, decoration_id: u32) -> Self {
        Self {
            slot,
            decoration_id,
            ..Self::default()
        }
    }

    /// Set the scrape amount.
    pub fn with_wear(mut self, wear: f64) -> Self {
        self.wear = Some(wear);
        self
    }
}

/// Cosmetic description of an item to preview.
///
/// Built by the caller for one conversion and never mutated by this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemPreviewDescriptor {
    #[serde(alias = "defindex")]
    pub def_index: u32,
    #[serde(alias = "paintindex")]
    pub paint_index: u32,
    #[serde(alias = "paintseed")]
    pub paint_seed: u32,
    /// Float value of the finish. `None` leaves the wear field off the wire.
    #[serde(default, alias = "paintwear", skip_serializing_if = "Option::is_none")]
    pub paint_wear: Option<f64>,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default, alias = "stickers", skip_serializing_if = "Vec::is_empty")]
    pub decorations: Vec<Decoration>,

    #[serde(default, alias = "accountid", skip_serializing_if = "Option::is_none")]
    pub account_id: Option<u32>,
    #[serde(default, alias = "itemid", skip_serializing_if = "Option::is_none")]
    pub item_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<u32>,
    #[serde(default, alias = "killeaterscoretype", skip_serializing_if = "Option::is_none")]
    pub kill_eater_score_type: Option<u32>,
    /// StatTrak counter.
    #[serde(default, alias = "killeatervalue", skip_serializing_if = "Option::is_none")]
    pub kill_eater_value: Option<u32>,
    /// Name tag text.
    #[serde(default, alias = "customname", skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<u32>,
}

impl ItemPreviewDescriptor {
    /// Create a descriptor with no wear override and no decorations.
    pub fn new(def_index: u32, paint_index: u32, paint_seed: u32) -> Self {
        Self {
            def_index,
            paint_index,
            paint_seed,
            ..Self::default()
        }
    }

    /// Set the wear value.
    pub fn with_wear(mut self, wear: f64) -> Self {
        self.paint_wear = Some(wear);
        self
    }

    /// Set the wear value, treating [`WEAR_UNSET_SENTINEL`] as "unset".
    pub fn with_raw_wear(mut self, wear: f64) -> Self {
        self.paint_wear = (wear != WEAR_UNSET_SENTINEL).then_some(wear);
        self
    }

    /// Set the rarity tier.
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Append a decoration.
    pub fn with_decoration(mut self, decoration: Decoration) -> Self {
        self.decorations.push(decoration);
        self
    }
}
