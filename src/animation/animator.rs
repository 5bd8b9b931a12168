use glam::{Mat4, Vec2, Vec3};
use rand::Rng;

use super::camera::OrbitCamera;
use super::cell::CellInstance;
use super::explosion::Explosion;
use super::grid::Grid;
use super::lights::Lights;
use super::pointer::PointerTracker;
use super::typewriter::Typewriter;
use super::wave::WaveField;
use crate::config::{rgb, WaveConfig, BASE_COLOR, GLOW_COLOR, POINT_LIGHT_INTENSITY};

/// Everything the renderer needs for one frame
pub struct FrameScene<'a> {
    pub instances: &'a [CellInstance],
    pub view_proj: Mat4,
    pub camera_position: Vec3,
    pub lights: &'a Lights,
}

/// Owns the whole wave animation.
///
/// Input handlers may be called any number of times between frames; they
/// act at the clock value of the most recent `update`.
pub struct AnimatorState {
    pub config: WaveConfig,
    pub field: WaveField,
    pub pointer: PointerTracker,
    pub camera: OrbitCamera,
    pub lights: Lights,
    pub explosion: Explosion,
    pub headline: Typewriter,
    time: f64,
}

impl AnimatorState {
    pub fn new(config: WaveConfig, width: u32, height: u32) -> Self {
        Self::with_rng(config, width, height, &mut rand::thread_rng())
    }

    /// Build with an explicit random source for the per-cell jitter
    pub fn with_rng<R: Rng>(config: WaveConfig, width: u32, height: u32, rng: &mut R) -> Self {
        let grid = Grid::from_config(&config, rng);
        let field = WaveField::new(
            grid,
            Vec3::from_array(rgb(BASE_COLOR)),
            Vec3::from_array(rgb(GLOW_COLOR)),
        );
        let mut camera = OrbitCamera::new(1.0);
        camera.resize(width, height);

        log::info!(
            "Wave field: {}x{} cells ({} instances)",
            config.grid_size,
            config.grid_size,
            config.cell_count()
        );

        Self {
            explosion: Explosion::new(config.spacing),
            config,
            field,
            pointer: PointerTracker::new(width, height),
            camera,
            lights: Lights::default(),
            headline: Typewriter::headline(),
            time: 0.0,
        }
    }

    /// Advance to `elapsed` seconds since start and recompute the frame
    pub fn update(&mut self, elapsed: f64) {
        let dt = (elapsed - self.time).max(0.0) as f32;
        self.time = elapsed;

        self.explosion.apply(elapsed, &mut self.config);
        self.lights
            .set_colored_intensity(self.explosion.light_intensity(elapsed, POINT_LIGHT_INTENSITY));

        let pointer = self.pointer.world_position(elapsed);
        self.field.update(elapsed, pointer, &self.config);

        self.camera.follow(&self.pointer.orbit, dt);
        self.headline.update(elapsed);
    }

    /// Pointer moved to `screen` pixels (origin top-left)
    pub fn on_pointer_move(&mut self, screen: Vec2) {
        if let Some(hit) = self.pointer.on_move(screen, self.time, &self.camera) {
            self.lights.follow_pointer(hit);
        }
    }

    pub fn on_pointer_down(&mut self, screen: Vec2) {
        self.pointer.on_down(screen);
    }

    /// Pointer released; a click (not a drag) triggers the explosion.
    /// Returns true if an explosion started.
    pub fn on_pointer_up(&mut self, screen: Vec2) -> bool {
        if self.pointer.on_up(screen) {
            self.trigger_explosion()
        } else {
            false
        }
    }

    /// Start an explosion unless one is already running
    pub fn trigger_explosion(&mut self) -> bool {
        let intensity = self.lights.colored[0].intensity;
        self.explosion.trigger(self.time, &self.config, intensity)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
        self.pointer.resize(width, height);
    }

    pub fn scene(&self) -> FrameScene<'_> {
        FrameScene {
            instances: &self.field.instances,
            view_proj: self.camera.view_proj(),
            camera_position: self.camera.position,
            lights: &self.lights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_POLAR, MIN_POLAR};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn animator() -> AnimatorState {
        AnimatorState::with_rng(WaveConfig::default(), 800, 600, &mut StdRng::seed_from_u64(11))
    }

    #[test]
    fn test_grid_fixed_size() {
        let mut state = animator();
        assert_eq!(state.field.len(), 1600);
        for frame in 0..10 {
            state.update(frame as f64 / 60.0);
        }
        state.trigger_explosion();
        state.update(0.5);
        assert_eq!(state.field.len(), 1600);
        assert_eq!(state.scene().instances.len(), 1600);
    }

    #[test]
    fn test_center_cell_at_start() {
        let mut state = animator();
        state.update(0.0);
        let center = state.field.grid.index(20, 20);
        let cell = state.field.transforms[center];
        assert_eq!(cell.position.y, 0.0);
        assert_eq!(cell.scale, 1.0);
        assert_eq!(cell.color, Vec3::from_array(rgb(GLOW_COLOR)));
    }

    #[test]
    fn test_explosion_sequence_end_to_end() {
        let mut state = animator();
        state.update(1.0);
        assert!(!state.explosion.is_exploding());
        assert!((state.config.spacing - 0.9).abs() < 1e-6);

        // Click: press and release in place
        state.on_pointer_down(Vec2::new(400.0, 300.0));
        assert!(state.on_pointer_up(Vec2::new(401.0, 300.0)));
        assert!(state.explosion.is_exploding());

        let mut peak = 0.0f32;
        let mut frame = 1;
        loop {
            let t = 1.0 + frame as f64 / 60.0;
            state.update(t);
            if t < 2.6 {
                assert!(state.explosion.is_exploding(), "should still explode at {}", t);
                assert!((0.0..=1.0).contains(&state.config.chaos));
            }
            peak = peak.max(state.config.spacing);
            if !state.explosion.is_exploding() {
                break;
            }
            frame += 1;
        }
        assert!((peak - 4.0).abs() < 0.05, "peak {}", peak);
        assert!((state.config.spacing - 0.9).abs() < 0.01);
        assert_eq!(state.config.chaos, 0.0);
    }

    #[test]
    fn test_retrigger_while_exploding_is_noop() {
        let mut state = animator();
        state.update(0.0);
        assert!(state.trigger_explosion());
        state.update(0.3);
        let ends_at = state.explosion.ends_at();
        assert!(!state.trigger_explosion());
        assert_eq!(state.explosion.ends_at(), ends_at);
    }

    #[test]
    fn test_drag_does_not_explode() {
        let mut state = animator();
        state.on_pointer_down(Vec2::new(100.0, 100.0));
        state.on_pointer_move(Vec2::new(160.0, 100.0));
        assert!(!state.on_pointer_up(Vec2::new(160.0, 100.0)));
        assert!(!state.explosion.is_exploding());
    }

    #[test]
    fn test_drag_keeps_polar_in_range() {
        let mut state = animator();
        state.on_pointer_down(Vec2::new(400.0, 300.0));
        for (i, y) in [5000.0, -5000.0, 1e7, -1e7].into_iter().enumerate() {
            state.on_pointer_move(Vec2::new(400.0, y));
            state.update(i as f64 / 60.0);
            let polar = state.pointer.orbit.polar;
            assert!((MIN_POLAR..=MAX_POLAR).contains(&polar));
        }
    }

    #[test]
    fn test_pointer_move_moves_light_and_ripple() {
        let mut state = animator();
        state.update(0.0);
        state.on_pointer_move(Vec2::new(600.0, 450.0));
        let target = state.pointer.world_target();
        assert_ne!(target, Vec2::ZERO);
        assert_eq!(state.lights.mouse.position, Vec3::new(target.x, 5.0, target.y));

        state.update(0.5);
        assert_eq!(state.pointer.world_position(state.time), target);
    }

    #[test]
    fn test_lights_flash_during_explosion() {
        let mut state = animator();
        state.update(0.0);
        state.trigger_explosion();
        state.update(0.1);
        assert!(state.lights.colored.iter().all(|l| l.intensity > 9.9));
        state.update(0.3);
        assert!(state.lights.colored.iter().all(|l| l.intensity == 5.0));
    }

    #[test]
    fn test_camera_follows_orbit() {
        let mut state = animator();
        let start = state.camera.position;
        for frame in 1..=300 {
            state.update(frame as f64 / 60.0);
        }
        let target = state.pointer.orbit.eye(state.camera.radius);
        assert!(state.camera.position.distance(target) < start.distance(target));
        assert!(state.camera.position.distance(target) < 0.01);
    }

    #[test]
    fn test_cells_move_every_frame_after_long_uptime() {
        let mut state = animator();
        let cell = state.field.grid.index(25, 20);
        let mut last = None;
        for frame in 0..8 {
            state.update(1_048_576.0 + frame as f64 / 60.0);
            let y = state.field.transforms[cell].position.y;
            if let Some(prev) = last {
                assert_ne!(y, prev, "cell stalled at frame {}", frame);
            }
            last = Some(y);
        }
    }

    #[test]
    fn test_resize_updates_projection() {
        let mut state = animator();
        state.resize(1000, 500);
        assert!((state.camera.aspect - 2.0).abs() < 1e-6);
    }
}
