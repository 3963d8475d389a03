use shelfpack::{InputImage, ShelfPacker};

fn main() {
    env_logger::init();

    let inputs: Vec<_> = (0..5)
        .map(|index| InputImage::new(format!("tile-{}.png", index), 128, 128))
        .collect();

    let packer = ShelfPacker::new().transpose(false);
    let result = packer.pack(&inputs);

    println!("Pack result: {:#?}", result);
}
