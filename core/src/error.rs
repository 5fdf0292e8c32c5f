use thiserror::Error;

// Validation failures are reported before any grid mutation,
// so a rejected call leaves the previous map intact.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrainError {
    #[error("map size must be 2^k + 1 for some k >= 1, got {0}")]
    InvalidSize(usize),
    #[error("roughness must be a finite value in [0.1, 10.0], got {0}")]
    InvalidRoughness(f64),
}
