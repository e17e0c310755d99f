use glam::Vec3;

/// Per-object surface parameters. Every object owns its own copy, clones
/// duplicate it while sharing the mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub emissive: Vec3,
}

impl Material {
    pub fn from_hex(hex: u32) -> Self {
        Self {
            color: rgb_from_hex(hex),
            emissive: Vec3::ZERO,
        }
    }

    pub fn set_color_hex(&mut self, hex: u32) {
        self.color = rgb_from_hex(hex);
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::from_hex(0xffffff)
    }
}

fn rgb_from_hex(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let material = Material::from_hex(0xff0080);
        assert!(material
            .color
            .abs_diff_eq(Vec3::new(1.0, 0.0, 128.0 / 255.0), 1e-6));
        assert_eq!(material.emissive, Vec3::ZERO);
    }
}
