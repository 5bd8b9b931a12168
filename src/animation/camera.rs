use glam::{Mat4, Vec2, Vec3};

use crate::config::{
    CAMERA_FAR, CAMERA_FOLLOW, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_RADIUS, CAMERA_START,
    DRAG_SENSITIVITY, INITIAL_AZIMUTH, INITIAL_POLAR, MAX_POLAR, MIN_POLAR, REFERENCE_FPS,
};

/// Accumulated orbit angles driven by drag gestures
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    /// Horizontal angle around the y axis
    pub azimuth: f32,
    /// Angle down from the +y axis, kept within [MIN_POLAR, MAX_POLAR]
    pub polar: f32,
}

impl Default for Orbit {
    fn default() -> Self {
        Self {
            azimuth: INITIAL_AZIMUTH,
            polar: INITIAL_POLAR,
        }
    }
}

impl Orbit {
    /// Apply a screen-space drag of (dx, dy) pixels
    pub fn drag(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx * DRAG_SENSITIVITY;
        self.polar = (self.polar - dy * DRAG_SENSITIVITY).clamp(MIN_POLAR, MAX_POLAR);
    }

    /// Point on the sphere of `radius` around the origin for these angles
    pub fn eye(&self, radius: f32) -> Vec3 {
        let (sp, cp) = self.polar.sin_cos();
        let (sa, ca) = self.azimuth.sin_cos();
        Vec3::new(radius * sp * sa, radius * cp, radius * sp * ca)
    }
}

/// Ray in world space
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Hit point on the ground plane y = 0, if the ray reaches it
    pub fn intersect_ground(&self) -> Option<Vec3> {
        if self.direction.y.abs() < f32::EPSILON {
            return None;
        }
        let t = -self.origin.y / self.direction.y;
        if t < 0.0 {
            return None;
        }
        Some(self.origin + self.direction * t)
    }
}

/// Perspective camera that eases toward its orbit point and looks at the origin
pub struct OrbitCamera {
    pub position: Vec3,
    pub aspect: f32,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub radius: f32,
}

impl OrbitCamera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::from_array(CAMERA_START),
            aspect,
            fov_y: CAMERA_FOV_DEG.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            radius: CAMERA_RADIUS,
        }
    }

    /// Update projection aspect for a new viewport; zero-height viewports are ignored
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Move toward the orbit point. `dt` is seconds since the last frame; the
    /// per-frame factor is normalized so motion matches a 60 Hz display.
    pub fn follow(&mut self, orbit: &Orbit, dt: f32) {
        let target = orbit.eye(self.radius);
        self.position += (target - self.position) * follow_factor(dt);
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y)
    }

    pub fn proj(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect.max(0.01), self.near, self.far)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.proj() * self.view()
    }

    /// Ray from the camera through a point in normalized device coordinates
    pub fn ray_through(&self, ndc: Vec2) -> Ray {
        let far = self.view_proj().inverse().project_point3(ndc.extend(1.0));
        Ray {
            origin: self.position,
            direction: (far - self.position).normalize_or_zero(),
        }
    }
}

/// Fraction of the remaining distance to cover after `dt` seconds
pub fn follow_factor(dt: f32) -> f32 {
    if dt <= 0.0 {
        return 0.0;
    }
    1.0 - (1.0 - CAMERA_FOLLOW).powf(dt * REFERENCE_FPS)
}
