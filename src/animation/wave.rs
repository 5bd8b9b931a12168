//! Per-frame wave field evaluation.
//!
//! Every cell's height comes from a radial traveling wave centered on the
//! tracked pointer plus a stronger ripple inside `mouse_radius`. Height then
//! drives tilt and scale, and pointer proximity drives color.

use std::f64::consts::TAU;

use glam::{Vec2, Vec3};

use super::cell::{CellInstance, CellTransform};
use super::grid::{grid_coordinate, Grid};
use crate::config::{
    WaveConfig, BASE_WAVE_AMPLITUDE, BASE_WAVE_FREQUENCY, CHAOS_ROTATION, HEIGHT_SCALE,
    HEIGHT_TILT, RIPPLE_FREQUENCY, RIPPLE_SPEED,
};

/// `time * speed` wrapped to one turn, so the phase stays precise however
/// long the clock has been running
pub fn phase(time: f64, speed: f32) -> f32 {
    (time * speed as f64).rem_euclid(TAU) as f32
}

/// Height of the background traveling wave
pub fn base_height(dist: f32, time: f64, wave_speed: f32) -> f32 {
    (dist * BASE_WAVE_FREQUENCY - phase(time, wave_speed)).sin() * BASE_WAVE_AMPLITUDE
}

/// Ripple force: `mouse_strength` at the pointer, falling linearly to zero at
/// `mouse_radius` and staying zero beyond it
pub fn ripple_force(dist: f32, mouse_radius: f32, mouse_strength: f32) -> f32 {
    if dist >= mouse_radius {
        return 0.0;
    }
    (1.0 - dist / mouse_radius) * mouse_strength
}

/// Extra height from the pointer ripple
pub fn ripple_height(dist: f32, time: f64, config: &WaveConfig) -> f32 {
    if dist >= config.mouse_radius {
        return 0.0;
    }
    let force = ripple_force(dist, config.mouse_radius, config.mouse_strength);
    (dist * RIPPLE_FREQUENCY - phase(time, RIPPLE_SPEED)).sin() * force
}

pub fn cell_height(dist: f32, time: f64, config: &WaveConfig) -> f32 {
    base_height(dist, time, config.wave_speed) + ripple_height(dist, time, config)
}

/// Rotation contributed by the explosion; exactly zero when `chaos` is zero
pub fn chaos_rotation(jitter: Vec3, chaos: f32) -> Vec3 {
    if chaos == 0.0 {
        return Vec3::ZERO;
    }
    jitter * (chaos * CHAOS_ROTATION)
}

/// Height tilt on x/z plus explosion jitter
pub fn cell_rotation(height: f32, jitter: Vec3, chaos: f32) -> Vec3 {
    let tilt = height * HEIGHT_TILT;
    Vec3::new(tilt, 0.0, tilt) + chaos_rotation(jitter, chaos)
}

pub fn cell_scale(height: f32) -> f32 {
    1.0 + height * HEIGHT_SCALE
}

/// Proximity glow in [0, 1]: 1 at the pointer, 0 at and beyond `glow_radius`
pub fn glow_intensity(dist: f32, glow_radius: f32) -> f32 {
    if dist >= glow_radius {
        return 0.0;
    }
    1.0 - dist / glow_radius
}

pub fn cell_color(dist: f32, glow_radius: f32, base: Vec3, glow: Vec3) -> Vec3 {
    if dist >= glow_radius {
        return base;
    }
    let t = glow_intensity(dist, glow_radius);
    base * (1.0 - t) + glow * t
}

/// Grid plus the transform and instance buffers rewritten each frame
pub struct WaveField {
    pub grid: Grid,
    pub transforms: Vec<CellTransform>,
    pub instances: Vec<CellInstance>,
    pub base_color: Vec3,
    pub glow_color: Vec3,
}

impl WaveField {
    pub fn new(grid: Grid, base_color: Vec3, glow_color: Vec3) -> Self {
        let transforms = grid
            .offsets
            .iter()
            .map(|offset| CellTransform {
                position: Vec3::new(offset.x, 0.0, offset.y),
                color: base_color,
                ..Default::default()
            })
            .collect::<Vec<_>>();
        let instances = transforms.iter().map(CellTransform::to_instance).collect();

        Self {
            grid,
            transforms,
            instances,
            base_color,
            glow_color,
        }
    }

    pub fn len(&self) -> usize {
        self.grid.len()
    }

    /// Recompute every cell for `time` seconds with the pointer at `pointer`
    /// (world x, z). Cells are visited in row-major order.
    pub fn update(&mut self, time: f64, pointer: Vec2, config: &WaveConfig) {
        let size = self.grid.size;
        let glow_radius = config.glow_radius();

        for x in 0..size {
            for z in 0..size {
                let i = self.grid.index(x, z);
                let dist = self.grid.offsets[i].distance(pointer);
                let y = cell_height(dist, time, config);

                let transform = CellTransform {
                    position: Vec3::new(
                        grid_coordinate(x, size, config.spacing),
                        y,
                        grid_coordinate(z, size, config.spacing),
                    ),
                    rotation: cell_rotation(y, self.grid.jitter[i], config.chaos),
                    scale: cell_scale(y),
                    color: cell_color(dist, glow_radius, self.base_color, self.glow_color),
                };

                self.transforms[i] = transform;
                self.instances[i] = transform.to_instance();
            }
        }
    }
}
