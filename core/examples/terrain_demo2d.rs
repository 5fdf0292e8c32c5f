use core::DiamondSquare2D;

fn main() {
    // Generate a 129×129 map with seed 2025, roughness 1.0
    let generator = DiamondSquare2D::new(129, 2025, 1.0).expect("valid parameters");

    // Print the top-left 16×16 corner of the map
    let map = generator.grid();
    for x in 0..16 {
        for y in 0..16 {
            print!("{:>6.3} ", map[x][y]);
        }
        println!();
    }
}
