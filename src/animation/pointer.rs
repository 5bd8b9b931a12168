use glam::{Vec2, Vec3};

use super::camera::{Orbit, OrbitCamera};
use super::easing::Ease;
use super::tween::Tween;
use crate::config::{CLICK_THRESHOLD_PX, POINTER_EASE_DURATION};

/// Press captured at pointer-down
#[derive(Clone, Copy, Debug, PartialEq)]
struct Drag {
    start: Vec2,
    last: Vec2,
}

/// Tracks the pointer on the ground plane and the drag-driven orbit.
pub struct PointerTracker {
    /// Smoothed world (x, z) of the pointer
    world: Tween<Vec2>,
    pub orbit: Orbit,
    drag: Option<Drag>,
    viewport: Vec2,
}

impl PointerTracker {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            world: Tween::new(Vec2::ZERO, Vec2::ZERO, 0.0, 0.0, Ease::Linear),
            orbit: Orbit::default(),
            drag: None,
            viewport: Vec2::new(width as f32, height as f32),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Vec2::new(width as f32, height as f32);
    }

    /// Smoothed pointer (x, z) on the ground plane at `time`
    pub fn world_position(&self, time: f64) -> Vec2 {
        self.world.value_at(time)
    }

    /// Where the smoothed pointer is heading
    #[cfg(test)]
    pub fn world_target(&self) -> Vec2 {
        self.world.to
    }

    /// Handle a pointer move to `screen` (pixels from the top-left corner).
    ///
    /// Returns the ground hit when the ray cast succeeded; on a miss, or when
    /// the pointer is outside the viewport, the tracked position is left as is.
    pub fn on_move(&mut self, screen: Vec2, time: f64, camera: &OrbitCamera) -> Option<Vec3> {
        if let Some(drag) = self.drag.as_mut() {
            let delta = screen - drag.last;
            self.orbit.drag(delta.x, delta.y);
            drag.last = screen;
        }

        let ndc = to_ndc(screen, self.viewport)?;

        let Some(hit) = camera.ray_through(ndc).intersect_ground() else {
            log::trace!("Pointer ray missed the ground plane at {:?}", ndc);
            return None;
        };

        let from = self.world.value_at(time);
        self.world = Tween::new(
            from,
            Vec2::new(hit.x, hit.z),
            time,
            POINTER_EASE_DURATION,
            Ease::Power2Out,
        );
        Some(hit)
    }

    pub fn on_down(&mut self, screen: Vec2) {
        self.drag = Some(Drag {
            start: screen,
            last: screen,
        });
    }

    /// End the gesture; returns true when it was a click rather than a drag
    pub fn on_up(&mut self, screen: Vec2) -> bool {
        match self.drag.take() {
            Some(drag) => drag.start.distance(screen) < CLICK_THRESHOLD_PX,
            None => false,
        }
    }
}

/// Screen pixels to normalized device coordinates (y up).
///
/// Returns `None` for an empty viewport or a point outside it.
pub fn to_ndc(screen: Vec2, viewport: Vec2) -> Option<Vec2> {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return None;
    }
    let ndc = Vec2::new(
        screen.x / viewport.x * 2.0 - 1.0,
        -(screen.y / viewport.y) * 2.0 + 1.0,
    );
    if ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 {
        return None;
    }
    Some(ndc)
}
