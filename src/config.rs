use std::f32::consts::PI;

// ============================================
// Wave Grid
// ============================================

/// Cells per side (40x40 = 1600 instanced boxes)
pub const GRID_SIZE: u32 = 40;

/// Rest spacing between neighbouring cells in world units
pub const SPACING: f32 = 0.9;

/// Edge length of each box
pub const BOX_SIZE: f32 = 0.6;

/// Angular speed of the radial traveling wave
pub const WAVE_SPEED: f32 = 1.5;

/// Nominal wave height
pub const WAVE_HEIGHT: f32 = 2.5;

/// Amplitude of the base traveling wave
pub const BASE_WAVE_AMPLITUDE: f32 = 0.8;

/// Spatial frequency of the base traveling wave
pub const BASE_WAVE_FREQUENCY: f32 = 0.4;

/// Spatial frequency of the pointer ripple
pub const RIPPLE_FREQUENCY: f32 = 1.5;

/// Angular speed of the pointer ripple
pub const RIPPLE_SPEED: f32 = 4.0;

/// Tilt applied per unit of cell height (x and z axes)
pub const HEIGHT_TILT: f32 = 0.1;

/// Scale growth per unit of cell height
pub const HEIGHT_SCALE: f32 = 0.2;

/// Multiplier on the per-cell jitter vector at full chaos
pub const CHAOS_ROTATION: f32 = 2.0;

// ============================================
// Pointer Interaction
// ============================================

/// Radius of the pointer ripple in world units
pub const MOUSE_RADIUS: f32 = 10.0;

/// Ripple force at the pointer itself
pub const MOUSE_STRENGTH: f32 = 4.0;

/// Fraction of MOUSE_RADIUS inside which cells glow
pub const GLOW_RADIUS_FACTOR: f32 = 0.8;

/// Seconds for the tracked pointer to reach a new ray hit
pub const POINTER_EASE_DURATION: f64 = 0.1;

/// Height the mouse light hovers above the pointer hit
pub const MOUSE_LIGHT_HEIGHT: f32 = 5.0;

/// Orbit radians per pixel of drag
pub const DRAG_SENSITIVITY: f32 = 0.005;

/// Press-to-release distance (pixels) below which a release counts as a click
pub const CLICK_THRESHOLD_PX: f32 = 5.0;

// ============================================
// Explosion
// ============================================

/// Spacing at the peak of the explosion
pub const EXPLOSION_SPACING: f32 = 4.0;

/// Chaos at the peak of the explosion
pub const EXPLOSION_CHAOS: f32 = 1.0;

/// Burst phase duration (power4 out)
pub const EXPLOSION_BURST_DURATION: f64 = 0.4;

/// Settle phase duration (elastic out)
pub const EXPLOSION_SETTLE_DURATION: f64 = 1.2;

/// Elastic settle parameters
pub const ELASTIC_AMPLITUDE: f32 = 1.0;
pub const ELASTIC_PERIOD: f32 = 0.3;

/// Colored light intensity at the top of the flash
pub const FLASH_INTENSITY: f32 = 10.0;

/// Duration of each half of the flash (up, then back down)
pub const FLASH_HALF_DURATION: f64 = 0.1;

// ============================================
// Camera
// ============================================

/// Orbit radius of the camera around the origin
pub const CAMERA_RADIUS: f32 = 45.0;

/// Vertical field of view in degrees
pub const CAMERA_FOV_DEG: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

/// Camera start position before the first follow step
pub const CAMERA_START: [f32; 3] = [0.0, 30.0, 30.0];

/// Initial orbit angles
pub const INITIAL_AZIMUTH: f32 = 0.0;
pub const INITIAL_POLAR: f32 = PI / 4.0;

/// Polar clamp: near top-down to low over the horizon
pub const MIN_POLAR: f32 = 0.1;
pub const MAX_POLAR: f32 = PI / 1.8;

/// Fraction of the remaining distance covered per 60 Hz frame
pub const CAMERA_FOLLOW: f32 = 0.1;

/// Reference frame rate for per-frame smoothing factors
pub const REFERENCE_FPS: f32 = 60.0;

// ============================================
// Lighting
// ============================================

pub const AMBIENT_COLOR: u32 = 0x404040;
pub const AMBIENT_INTENSITY: f32 = 4.0;

pub const DIRECTIONAL_COLOR: u32 = 0xffffff;
pub const DIRECTIONAL_INTENSITY: f32 = 1.0;
pub const DIRECTIONAL_POSITION: [f32; 3] = [20.0, 40.0, 20.0];

pub const MOUSE_LIGHT_COLOR: u32 = 0xffffff;
pub const MOUSE_LIGHT_INTENSITY: f32 = 2.0;
pub const MOUSE_LIGHT_RANGE: f32 = 15.0;

/// Colored point lights: (color, position)
pub const POINT_LIGHTS: [(u32, [f32; 3]); 3] = [
    (0x667eea, [0.0, 10.0, 0.0]),
    (0x764ba2, [20.0, 10.0, 20.0]),
    (0x00f2fe, [-20.0, 10.0, -20.0]),
];
pub const POINT_LIGHT_INTENSITY: f32 = 5.0;
pub const POINT_LIGHT_RANGE: f32 = 100.0;

// ============================================
// Palette & Material
// ============================================

pub const BACKGROUND_COLOR: u32 = 0x0a0a1a;
pub const FOG_DENSITY: f32 = 0.02;

/// Resting cell color
pub const BASE_COLOR: u32 = 0x444444;

/// Color cells take on right under the pointer
pub const GLOW_COLOR: u32 = 0x00f2fe;

pub const EMISSIVE_COLOR: u32 = 0x111111;
pub const EMISSIVE_INTENSITY: f32 = 0.2;
pub const ROUGHNESS: f32 = 0.2;
pub const METALNESS: f32 = 0.6;

// ============================================
// Headline Typing Effect
// ============================================

pub const HEADLINE_PHRASES: [&str; 5] = [
    "Web Developer",
    "Project Manager",
    "UI/UX Enthusiast",
    "E-Commerce Specialist",
    "Team Leader",
];
pub const TYPE_DELAY: f64 = 0.1;
pub const DELETE_DELAY: f64 = 0.05;
pub const HOLD_DELAY: f64 = 2.0;
pub const NEXT_PHRASE_DELAY: f64 = 0.5;
pub const TYPING_START_DELAY: f64 = 1.0;

// ============================================
// Window
// ============================================

pub const WINDOW_TITLE: &str = "Kinetic Waves";
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 800;

/// Convert a 0xRRGGBB literal to normalized RGB
pub const fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// Mutable wave parameters.
///
/// Only `spacing` and `chaos` change after startup (driven by the explosion);
/// everything else is fixed for the run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveConfig {
    pub grid_size: u32,
    pub spacing: f32,
    pub box_size: f32,
    pub wave_speed: f32,
    pub wave_height: f32,
    pub mouse_radius: f32,
    pub mouse_strength: f32,
    pub chaos: f32,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            spacing: SPACING,
            box_size: BOX_SIZE,
            wave_speed: WAVE_SPEED,
            wave_height: WAVE_HEIGHT,
            mouse_radius: MOUSE_RADIUS,
            mouse_strength: MOUSE_STRENGTH,
            chaos: 0.0,
        }
    }
}

impl WaveConfig {
    /// Number of cells in the grid
    pub fn cell_count(&self) -> usize {
        (self.grid_size * self.grid_size) as usize
    }

    /// Radius inside which cells blend toward the glow color
    pub fn glow_radius(&self) -> f32 {
        self.mouse_radius * GLOW_RADIUS_FACTOR
    }
}
