//! Rust structs with memory layouts that match their same named counterparts
//! in the lighting shaders.
//!
//! The structs are "packed": spare `w` lanes of the `Vec4` fields carry extra
//! scalar values rather than padding. For example a spot light stores the
//! cosine of its inner cutoff angle in `position.w`.
//!
//! These structs must exactly match the memory layout in shader code. All
//! fields are aligned to 16 bytes (eg `Vec4`) as WebGPU requires.
use glam::{Vec3, Vec4};

use super::{DirectionalLight, LightAttenuation, PointLight, SpotLight};

/// Rust struct with the same memory layout as the `PackedDirectionalLight`
/// used by the lighting shaders.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PackedDirectionalLight {
    pub direction: Vec4, // .xyz is normalized, .w is unused.
    pub color: Vec4,     // .w is unused.
}

impl From<&DirectionalLight> for PackedDirectionalLight {
    fn from(val: &DirectionalLight) -> Self {
        Self {
            direction: vec3_w(val.direction.normalize_or_zero(), 0.0),
            color: vec3_w(val.color, 0.0),
        }
    }
}

/// Rust struct with the same memory layout as the `PackedPointLight` used by
/// the lighting shaders.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PackedPointLight {
    pub position: Vec4,    // .w is unused.
    pub color: Vec4,       // .w is unused.
    pub attenuation: Vec4, // xyzw: (constant, linear, quadratic, unused).
    pub padding: Vec4,
}

impl From<&PointLight> for PackedPointLight {
    fn from(val: &PointLight) -> Self {
        Self {
            position: vec3_w(val.position, 1.0),
            color: vec3_w(val.color, 0.0),
            attenuation: attenuation_w(val.attenuation(), 0.0),
            padding: Vec4::ZERO,
        }
    }
}

/// Rust struct with the same memory layout as the `PackedSpotLight` used by
/// the lighting shaders.
#[repr(C)]
#[derive(Clone, Copy, Default, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PackedSpotLight {
    pub position: Vec4,    // .w is the cosine of the inner cutoff angle.
    pub direction: Vec4,   // .xyz is normalized, .w is unused.
    pub color: Vec4,       // .w is unused.
    pub attenuation: Vec4, // .w is the cosine of the outer cutoff angle.
}

impl From<&SpotLight> for PackedSpotLight {
    fn from(val: &SpotLight) -> Self {
        Self {
            position: vec3_w(val.position, val.cutoff().to_radians().cos()),
            direction: vec3_w(val.direction.normalize_or_zero(), 0.0),
            color: vec3_w(val.color, 0.0),
            attenuation: attenuation_w(val.attenuation(), val.outer_cutoff().to_radians().cos()),
        }
    }
}

/// Packed copies of every light in a scene, ready to be written to GPU
/// storage buffers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PackedLights {
    pub directional: Vec<PackedDirectionalLight>,
    pub point: Vec<PackedPointLight>,
    pub spot: Vec<PackedSpotLight>,
}

impl PackedLights {
    pub fn new(directional: &[DirectionalLight], point: &[PointLight], spot: &[SpotLight]) -> Self {
        Self {
            directional: directional.iter().map(Into::into).collect(),
            point: point.iter().map(Into::into).collect(),
            spot: spot.iter().map(Into::into).collect(),
        }
    }

    /// Raw bytes of the point light array.
    pub fn point_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.point)
    }

    /// Raw bytes of the spot light array.
    pub fn spot_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.spot)
    }

    /// Raw bytes of the directional light array.
    pub fn directional_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.directional)
    }
}

/// Returns a new `Vec4` value that is the combination of a `Vec3` x, y and z
/// and an additional `w` value.
pub fn vec3_w(xyz: Vec3, w: f32) -> Vec4 {
    Vec4::new(xyz.x, xyz.y, xyz.z, w)
}

fn attenuation_w(attenuation: LightAttenuation, w: f32) -> Vec4 {
    Vec4::new(
        attenuation.constant(),
        attenuation.linear(),
        attenuation.quadratic(),
        w,
    )
}
