use glam::Vec3;

use crate::config::{
    rgb, AMBIENT_COLOR, AMBIENT_INTENSITY, DIRECTIONAL_COLOR, DIRECTIONAL_INTENSITY,
    DIRECTIONAL_POSITION, MOUSE_LIGHT_COLOR, MOUSE_LIGHT_HEIGHT, MOUSE_LIGHT_INTENSITY,
    MOUSE_LIGHT_RANGE, POINT_LIGHTS, POINT_LIGHT_INTENSITY, POINT_LIGHT_RANGE,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub color: Vec3,
    pub position: Vec3,
    pub intensity: f32,
    /// Distance at which the light's contribution reaches zero
    pub range: f32,
}

/// Scene lighting
#[derive(Clone, Debug, PartialEq)]
pub struct Lights {
    pub ambient: Vec3,
    pub directional_color: Vec3,
    /// Direction the directional light shines from (toward the origin)
    pub directional_position: Vec3,
    /// Follows the pointer hit on the ground plane
    pub mouse: PointLight,
    /// Colored accents that flash during an explosion
    pub colored: [PointLight; 3],
}

impl Default for Lights {
    fn default() -> Self {
        let colored = POINT_LIGHTS.map(|(color, position)| PointLight {
            color: Vec3::from_array(rgb(color)),
            position: Vec3::from_array(position),
            intensity: POINT_LIGHT_INTENSITY,
            range: POINT_LIGHT_RANGE,
        });

        Self {
            ambient: Vec3::from_array(rgb(AMBIENT_COLOR)) * AMBIENT_INTENSITY,
            directional_color: Vec3::from_array(rgb(DIRECTIONAL_COLOR)) * DIRECTIONAL_INTENSITY,
            directional_position: Vec3::from_array(DIRECTIONAL_POSITION),
            mouse: PointLight {
                color: Vec3::from_array(rgb(MOUSE_LIGHT_COLOR)),
                position: Vec3::new(0.0, MOUSE_LIGHT_HEIGHT, 0.0),
                intensity: MOUSE_LIGHT_INTENSITY,
                range: MOUSE_LIGHT_RANGE,
            },
            colored,
        }
    }
}

impl Lights {
    /// Hover the mouse light over a ground hit
    pub fn follow_pointer(&mut self, hit: Vec3) {
        self.mouse.position = Vec3::new(hit.x, MOUSE_LIGHT_HEIGHT, hit.z);
    }

    pub fn set_colored_intensity(&mut self, intensity: f32) {
        for light in &mut self.colored {
            light.intensity = intensity;
        }
    }

    /// All point lights, mouse light first
    pub fn point_lights(&self) -> [PointLight; 4] {
        [self.mouse, self.colored[0], self.colored[1], self.colored[2]]
    }
}
