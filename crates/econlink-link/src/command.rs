//! `!gen` debug command rendering.

use tracing::debug;

use crate::descriptor::{ItemPreviewDescriptor, WEAR_UNSET_SENTINEL};

/// Number of fixed decoration slots on an item.
pub const MAX_DECORATION_SLOTS: usize = 5;

/// One `(id, wear)` pair of the `!gen` command.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DecorationSlot {
    pub id: u32,
    pub wear: f64,
}

/// Lay decorations out by slot. Slots outside `0..MAX_DECORATION_SLOTS` are dropped.
pub fn decoration_slots(
    descriptor: &ItemPreviewDescriptor,
) -> [DecorationSlot; MAX_DECORATION_SLOTS] {
    let mut slots = [DecorationSlot::default(); MAX_DECORATION_SLOTS];
    for decoration in &descriptor.decorations {
        let Some(slot) = slots.get_mut(decoration.slot as usize) else {
            debug!(slot = decoration.slot, "dropping decoration outside slot range");
            continue;
        };
        slot.id = decoration.decoration_id;
        if let Some(wear) = decoration.wear {
            slot.wear = wear;
        }
    }
    slots
}

/// Render the `!gen` command for `descriptor`.
///
/// Format: `!gen <def> <paint> <seed> <wear>` followed by five ` <id> <wear>`
/// pairs, one per slot. A descriptor without decorations renders the prefix
/// only. Unset wear renders as the legacy `0.001`.
pub fn gen_command(descriptor: &ItemPreviewDescriptor) -> String {
    let wear = descriptor.paint_wear.unwrap_or(WEAR_UNSET_SENTINEL);
    let mut out = format!(
        "!gen {} {} {} {}",
        descriptor.def_index, descriptor.paint_index, descriptor.paint_seed, wear
    );
    if descriptor.decorations.is_empty() {
        return out;
    }

    for slot in decoration_slots(descriptor) {
        out.push_str(&format!(" {} {}", slot.id, slot.wear));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Decoration;

    fn sample() -> ItemPreviewDescriptor {
        ItemPreviewDescriptor::new(7, 474, 306).with_wear(0.6336590647697449)
    }

    #[test]
    fn recorded_command() {
        let desc = sample().with_decoration(Decoration::new(3, 2));
        assert_eq!(
            gen_command(&desc),
            "!gen 7 474 306 0.6336590647697449 0 0 0 0 0 0 2 0 0 0"
        );
    }

    #[test]
    fn no_decorations_renders_prefix_only() {
        assert_eq!(gen_command(&sample()), "!gen 7 474 306 0.6336590647697449");
    }

    #[test]
    fn unset_wear_renders_sentinel() {
        let desc = ItemPreviewDescriptor::new(1, 2, 3);
        assert_eq!(gen_command(&desc), "!gen 1 2 3 0.001");
    }

    #[test]
    fn always_five_pairs() {
        let desc = sample().with_decoration(Decoration::new(0, 1));
        let command = gen_command(&desc);
        let fields: Vec<&str> = command.split(' ').collect();
        assert_eq!(fields.len(), 5 + 2 * MAX_DECORATION_SLOTS);
        assert_eq!(&fields[5..], ["1", "0", "0", "0", "0", "0", "0", "0", "0", "0"]);
    }

    #[test]
    fn decoration_wear_rendered_verbatim() {
        let desc = sample()
            .with_decoration(Decoration::new(0, 5).with_wear(0.1))
            .with_decoration(Decoration::new(4, 9).with_wear(1.0));
        assert_eq!(
            gen_command(&desc),
            "!gen 7 474 306 0.6336590647697449 5 0.1 0 0 0 0 0 0 9 1"
        );
    }

    #[test]
    fn full_precision_decoration_wear() {
        let desc = sample().with_decoration(Decoration::new(1, 76).with_wear(0.6336590647697449));
        assert_eq!(
            gen_command(&desc),
            "!gen 7 474 306 0.6336590647697449 0 0 76 0.6336590647697449 0 0 0 0 0 0"
        );
    }

    #[test]
    fn zero_wear_is_still_rendered() {
        // The encoder drops it, the command keeps whatever was given.
        let desc = sample().with_decoration(Decoration::new(2, 8).with_wear(0.0));
        let slots = decoration_slots(&desc);
        assert_eq!(slots[2], DecorationSlot { id: 8, wear: 0.0 });
    }

    #[test]
    fn out_of_range_slot_is_dropped() {
        let with_stray = sample()
            .with_decoration(Decoration::new(3, 2))
            .with_decoration(Decoration::new(7, 99).with_wear(0.5));
        let without = sample().with_decoration(Decoration::new(3, 2));
        assert_eq!(gen_command(&with_stray), gen_command(&without));
    }

    #[test]
    fn later_decoration_overwrites_slot_id() {
        let desc = sample()
            .with_decoration(Decoration::new(1, 10).with_wear(0.3))
            .with_decoration(Decoration::new(1, 11));
        let slots = decoration_slots(&desc);
        assert_eq!(slots[1], DecorationSlot { id: 11, wear: 0.3 });
    }

    #[test]
    fn offsets_do_not_appear() {
        let decoration = Decoration {
            offset_x: 0.5,
            rotation: 90.0,
            ..Decoration::new(0, 3)
        };
        let command = gen_command(&sample().with_decoration(decoration));
        assert!(command.ends_with(" 3 0 0 0 0 0 0 0 0 0"));
    }
}
