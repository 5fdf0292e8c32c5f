use crate::NoiseSource;
use crate::error::TerrainError;
use crate::utils::HeightMap2D;
use crate::xorshift::XorShiftSource;

pub const ROUGHNESS_MIN: f64 = 0.1;
pub const ROUGHNESS_MAX: f64 = 10.0;

// 2D fractal terrain generator using the Diamond–Square algorithm
pub struct DiamondSquare2D {
    size: usize, // must be 2^k + 1, e.g. 129, 257
    roughness: f64,
    source: Box<dyn NoiseSource>,
    map: HeightMap2D,
}

impl DiamondSquare2D {
    // Seeded convenience constructor; generation runs immediately
    pub fn new(size: usize, seed: u64, roughness: f64) -> Result<Self, TerrainError> {
        Self::with_source(size, roughness, Box::new(XorShiftSource::seeded(seed)))
    }

    // Build a generator around any draw source and run one full generation.
    // Rejects before allocating, so a failed call produces no generator state.
    pub fn with_source(
        size: usize,
        roughness: f64,
        source: Box<dyn NoiseSource>,
    ) -> Result<Self, TerrainError> {
        if size < 3 || !(size - 1).is_power_of_two() {
            return Err(TerrainError::InvalidSize(size));
        }
        validate_roughness(roughness)?;

        let mut generator = Self {
            size,
            roughness,
            source,
            map: vec![vec![0.0f64; size]; size],
        };
        generator.generate(roughness)?;
        Ok(generator)
    }

    // Overwrite the whole map in place with a fresh diamond-square run.
    // The four corners get new draws in [0, 1); everything else is derived
    // by averaging plus displacement. On a rejected roughness the previous
    // map contents are left untouched.
    pub fn generate(&mut self, roughness: f64) -> Result<(), TerrainError> {
        validate_roughness(roughness)?;
        self.roughness = roughness;

        self.map[0][0] = self.source.next_unit();
        self.map[0][self.size - 1] = self.source.next_unit();
        self.map[self.size - 1][0] = self.source.next_unit();
        self.map[self.size - 1][self.size - 1] = self.source.next_unit();

        // Step is the current distance between two known points.
        // Amp is the displacement amplitude: it starts at the caller's
        // roughness and halves after every full pass.
        let mut step = self.size - 1;
        let mut amp = roughness;

        while step > 1 {
            let half = step / 2;

            // Diamond step: each sub-square center gets the mean of its
            // four corners plus a displacement in [-amp, +amp]
            for x in (0..self.size - 1).step_by(step) {
                for y in (0..self.size - 1).step_by(step) {
                    let avg = (self.map[x][y]
                        + self.map[x + step][y]
                        + self.map[x][y + step]
                        + self.map[x + step][y + step])
                        / 4.0;
                    self.map[x + half][y + half] =
                        avg + (self.source.next_unit() * 2.0 - 1.0) * amp;
                }
            }

            // Square step: each diamond-lattice midpoint averages its
            // axis neighbors at distance half. Edge midpoints see fewer
            // than four; the divisor is the count actually summed.
            for x in (0..self.size).step_by(half) {
                for y in ((x + half) % step..self.size).step_by(step) {
                    let mut sum = 0.0;
                    let mut cnt = 0;
                    if x >= half {
                        sum += self.map[x - half][y];
                        cnt += 1;
                    }
                    if x + half < self.size {
                        sum += self.map[x + half][y];
                        cnt += 1;
                    }
                    if y >= half {
                        sum += self.map[x][y - half];
                        cnt += 1;
                    }
                    if y + half < self.size {
                        sum += self.map[x][y + half];
                        cnt += 1;
                    }
                    self.map[x][y] =
                        sum / cnt as f64 + (self.source.next_unit() * 2.0 - 1.0) * amp;
                }
            }

            amp /= 2.0;
            step = half;
        }

        Ok(())
    }

    // Read-only view of the current map. Stale as soon as the next
    // generate call begins; use snapshot() to keep a copy across runs.
    pub fn grid(&self) -> &HeightMap2D {
        &self.map
    }

    // Owned copy of the current map
    pub fn snapshot(&self) -> HeightMap2D {
        self.map.clone()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn roughness(&self) -> f64 {
        self.roughness
    }
}

fn validate_roughness(roughness: f64) -> Result<(), TerrainError> {
    if !roughness.is_finite() || !(ROUGHNESS_MIN..=ROUGHNESS_MAX).contains(&roughness) {
        return Err(TerrainError::InvalidRoughness(roughness));
    }
    Ok(())
}
