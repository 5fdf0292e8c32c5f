use crate::classify::color_for;

// 2D height map: row-major Vec<Vec<f64>> of size N×N
// access as `map[x][y]`.
pub type HeightMap2D = Vec<Vec<f64>>;

// flatten a 2D height map (row-major) into a single Vec<f64>
// for converting to an image buffer in the UI
pub fn flatten2(map: &HeightMap2D) -> Vec<f64> {
    map.iter().flat_map(|row| row.iter().cloned()).collect()
}

// Convert a flat &[f64] into an RGB byte buffer, one classified
// color per height
pub fn to_terrain_image(flat: &[f64], _size: usize) -> Vec<u8> {
    let mut buf = Vec::with_capacity(flat.len() * 3);
    for &h in flat {
        let c = color_for(h);
        buf.extend_from_slice(&[c.red, c.green, c.blue]);
    }
    buf
}
