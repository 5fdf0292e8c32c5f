use core::{DiamondSquare2D, flatten2, utils::to_terrain_image};
use std::path::Path;

fn main() {
    // Generate a large height-map and classify it into the
    // water / plains / mountains bands
    let size = 513; // 2^9 + 1
    let generator = DiamondSquare2D::new(size, 2025, 1.0).expect("valid parameters");

    let flat = flatten2(generator.grid());
    let buf = to_terrain_image(&flat, size);

    let path = Path::new("terrain_bands.png");
    image::save_buffer(
        path,
        &buf,
        size as u32,
        size as u32,
        image::ColorType::Rgb8,
    )
    .expect("png write failed");
    println!("Saved classified terrain image to {:?}", path);
}
