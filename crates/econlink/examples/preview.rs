use econlink::{Decoration, ItemPreviewDescriptor, LinkBuilder, Rarity};

fn main() -> Result<(), econlink::LinkError> {
    let item = ItemPreviewDescriptor::new(7, 474, 306)
        .with_rarity(Rarity::Covert)
        .with_wear(0.6336590647697449)
        .with_decoration(Decoration::new(0, 4213).with_wear(0.25))
        .with_decoration(Decoration {
            rotation: 45.0,
            ..Decoration::new(3, 2)
        });

    let builder = LinkBuilder::new();
    println!("hex:  {}", builder.hex(&item)?);
    println!("link: {}", builder.link(&item)?);
    println!("gen:  {}", econlink::gen_command(&item));
    Ok(())
}
