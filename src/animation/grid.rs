use glam::{Vec2, Vec3};
use rand::Rng;

use crate::config::WaveConfig;

/// Rest layout of the wave grid.
///
/// Cells are stored row-major with index `x * size + z`. Both arrays are
/// filled once and never resized.
pub struct Grid {
    pub size: u32,
    /// Base (ox, oz) offsets at the rest spacing
    pub offsets: Vec<Vec2>,
    /// Per-cell jitter in [-1, 1]^3, scaled by chaos during an explosion
    pub jitter: Vec<Vec3>,
}

impl Grid {
    /// Lay out `size * size` cells at `spacing`, drawing jitter from `rng`
    pub fn new<R: Rng>(size: u32, spacing: f32, rng: &mut R) -> Self {
        let cell_count = (size * size) as usize;
        let mut offsets = Vec::with_capacity(cell_count);
        let mut jitter = Vec::with_capacity(cell_count);

        for x in 0..size {
            for z in 0..size {
                offsets.push(Vec2::new(
                    grid_coordinate(x, size, spacing),
                    grid_coordinate(z, size, spacing),
                ));
                jitter.push(Vec3::new(
                    rng.gen_range(-1.0..=1.0),
                    rng.gen_range(-1.0..=1.0),
                    rng.gen_range(-1.0..=1.0),
                ));
            }
        }

        Self {
            size,
            offsets,
            jitter,
        }
    }

    /// Create a grid for `config`
    pub fn from_config<R: Rng>(config: &WaveConfig, rng: &mut R) -> Self {
        Self::new(config.grid_size, config.spacing, rng)
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn index(&self, x: u32, z: u32) -> usize {
        (x * self.size + z) as usize
    }
}

/// World coordinate of grid line `i`, centered on the origin
pub fn grid_coordinate(i: u32, size: u32, spacing: f32) -> f32 {
    (i as f32 - size as f32 / 2.0) * spacing
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(40, 0.9, &mut StdRng::seed_from_u64(7));
        assert_eq!(grid.len(), 1600);
        assert_eq!(grid.jitter.len(), 1600);
    }

    #[test]
    fn test_offsets_row_major_and_centered() {
        let grid = Grid::new(40, 0.9, &mut StdRng::seed_from_u64(7));
        assert!(grid.offsets[0].abs_diff_eq(Vec2::new(-18.0, -18.0), 1e-5));
        // Second entry advances z, not x
        assert!((grid.offsets[1].x - -18.0).abs() < 1e-5);
        assert!((grid.offsets[1].y - -17.1).abs() < 1e-5);
        assert_eq!(grid.offsets[grid.index(20, 20)], Vec2::ZERO);
    }

    #[test]
    fn test_jitter_in_range() {
        let grid = Grid::from_config(&WaveConfig::default(), &mut StdRng::seed_from_u64(3));
        for j in &grid.jitter {
            for v in j.to_array() {
                assert!((-1.0..=1.0).contains(&v), "jitter {} out of range", v);
            }
        }
    }

    #[test]
    fn test_seeded_grids_match() {
        let a = Grid::new(8, 1.0, &mut StdRng::seed_from_u64(42));
        let b = Grid::new(8, 1.0, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.jitter, b.jitter);
    }

    #[test]
    fn test_odd_grid_centering() {
        let grid = Grid::new(3, 2.0, &mut StdRng::seed_from_u64(1));
        assert_eq!(grid.offsets[0], Vec2::new(-3.0, -3.0));
        assert_eq!(grid.offsets[8], Vec2::new(1.0, 1.0));
    }
}
