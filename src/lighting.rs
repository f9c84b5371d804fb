//! Light entities consumed by the render loop.
//!
//! Every light has a color. Directional lights add a direction, point lights
//! add a position and an attenuation triple, and spot lights add a direction
//! and a pair of cone angles on top of a point light.
pub mod packed;

use std::fmt;

use glam::Vec3;

/// Largest angle a spot light cone setter will accept, in degrees.
pub const MAX_SPOT_ANGLE_DEGREES: f32 = 90.0;

/// Coefficients controlling how quickly a point or spot light fades with
/// distance.
///
/// The constant term is always positive and the linear and quadratic terms are
/// never negative. Values that would break this are replaced with `1.0`, both
/// at construction and in every setter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightAttenuation {
    constant: f32,
    linear: f32,
    quadratic: f32,
}

impl LightAttenuation {
    pub fn new(constant: f32, linear: f32, quadratic: f32) -> Self {
        let mut attenuation = Self {
            constant: 1.0,
            linear: 1.0,
            quadratic: 1.0,
        };

        attenuation.set_constant(constant);
        attenuation.set_linear(linear);
        attenuation.set_quadratic(quadratic);
        attenuation
    }

    pub fn constant(&self) -> f32 {
        self.constant
    }

    pub fn linear(&self) -> f32 {
        self.linear
    }

    pub fn quadratic(&self) -> f32 {
        self.quadratic
    }

    pub fn set_constant(&mut self, constant: f32) {
        self.constant = if constant > 0.0 { constant } else { 1.0 };
    }

    pub fn set_linear(&mut self, linear: f32) {
        self.linear = if linear >= 0.0 { linear } else { 1.0 };
    }

    pub fn set_quadratic(&mut self, quadratic: f32) {
        self.quadratic = if quadratic >= 0.0 { quadratic } else { 1.0 };
    }
}

impl Default for LightAttenuation {
    fn default() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }
}

/// A light infinitely far away that shines along `direction`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectionalLight {
    /// The color of the light.
    pub color: Vec3,
    /// The direction the light travels. This is not required to be normalized.
    pub direction: Vec3,
}

impl DirectionalLight {
    pub fn new(color: Vec3, direction: Vec3) -> Self {
        Self { color, direction }
    }
}

/// An omni-directional light located at a point in world space.
#[derive(Clone, Debug, PartialEq)]
pub struct PointLight {
    /// The world position of the light.
    pub position: Vec3,
    /// The color of the light.
    pub color: Vec3,
    attenuation: LightAttenuation,
}

impl PointLight {
    pub fn new(position: Vec3, color: Vec3, attenuation: LightAttenuation) -> Self {
        Self {
            position,
            color,
            attenuation,
        }
    }

    pub fn attenuation(&self) -> LightAttenuation {
        self.attenuation
    }

    pub fn constant(&self) -> f32 {
        self.attenuation.constant()
    }

    pub fn linear(&self) -> f32 {
        self.attenuation.linear()
    }

    pub fn quadratic(&self) -> f32 {
        self.attenuation.quadratic()
    }

    pub fn set_constant(&mut self, constant: f32) {
        self.attenuation.set_constant(constant)
    }

    pub fn set_linear(&mut self, linear: f32) {
        self.attenuation.set_linear(linear)
    }

    pub fn set_quadratic(&mut self, quadratic: f32) {
        self.attenuation.set_quadratic(quadratic)
    }
}

/// A cone of light located at `position` and aimed along `direction`.
///
/// Fragments inside the `cutoff` half-angle receive full intensity, and the
/// intensity falls off to zero at the `outer_cutoff` half-angle. The angle
/// setters clamp to `[0, 90]` degrees but do not enforce the ordering between
/// the two angles. That ordering is checked when a scene is loaded.
#[derive(Clone, Debug, PartialEq)]
pub struct SpotLight {
    /// The world position of the light.
    pub position: Vec3,
    /// The color of the light.
    pub color: Vec3,
    /// The direction the cone is pointed at. Not required to be normalized.
    pub direction: Vec3,
    attenuation: LightAttenuation,
    cutoff_degrees: f32,
    outer_cutoff_degrees: f32,
}

impl SpotLight {
    pub fn new(
        position: Vec3,
        color: Vec3,
        direction: Vec3,
        attenuation: LightAttenuation,
        cutoff_degrees: f32,
        outer_cutoff_degrees: f32,
    ) -> Self {
        Self {
            position,
            color,
            direction,
            attenuation,
            cutoff_degrees,
            outer_cutoff_degrees,
        }
    }

    pub fn attenuation(&self) -> LightAttenuation {
        self.attenuation
    }

    pub fn constant(&self) -> f32 {
        self.attenuation.constant()
    }

    pub fn linear(&self) -> f32 {
        self.attenuation.linear()
    }

    pub fn quadratic(&self) -> f32 {
        self.attenuation.quadratic()
    }

    pub fn set_constant(&mut self, constant: f32) {
        self.attenuation.set_constant(constant)
    }

    pub fn set_linear(&mut self, linear: f32) {
        self.attenuation.set_linear(linear)
    }

    pub fn set_quadratic(&mut self, quadratic: f32) {
        self.attenuation.set_quadratic(quadratic)
    }

    /// Inner cone half-angle in degrees.
    pub fn cutoff(&self) -> f32 {
        self.cutoff_degrees
    }

    /// Outer cone half-angle in degrees.
    pub fn outer_cutoff(&self) -> f32 {
        self.outer_cutoff_degrees
    }

    /// Set the inner cone angle, clamped to `[0, 90]` degrees. NaN is ignored.
    pub fn set_cutoff(&mut self, degrees: f32) {
        if let Some(degrees) = clamp_spot_angle(degrees) {
            self.cutoff_degrees = degrees;
        }
    }

    /// Set the outer cone angle, clamped to `[0, 90]` degrees. NaN is ignored.
    pub fn set_outer_cutoff(&mut self, degrees: f32) {
        if let Some(degrees) = clamp_spot_angle(degrees) {
            self.outer_cutoff_degrees = degrees;
        }
    }
}

fn clamp_spot_angle(degrees: f32) -> Option<f32> {
    (!degrees.is_nan()).then(|| degrees.clamp(0.0, MAX_SPOT_ANGLE_DEGREES))
}

/// Identifies which kind of light a value is. Used when reporting errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightKind {
    Directional,
    Point,
    Spot,
}

impl LightKind {
    /// The keyword that starts a block of this kind in a lights file.
    pub fn keyword(&self) -> &'static str {
        match self {
            LightKind::Directional => "directional",
            LightKind::Point => "point",
            LightKind::Spot => "spot",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "directional" => Some(LightKind::Directional),
            "point" => Some(LightKind::Point),
            "spot" => Some(LightKind::Spot),
            _ => None,
        }
    }
}

impl fmt::Display for LightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Any light that can appear in a scene.
#[derive(Clone, Debug, PartialEq)]
pub enum Light {
    Directional(DirectionalLight),
    Point(PointLight),
    Spot(SpotLight),
}

impl Light {
    pub fn kind(&self) -> LightKind {
        match self {
            Light::Directional(_) => LightKind::Directional,
            Light::Point(_) => LightKind::Point,
            Light::Spot(_) => LightKind::Spot,
        }
    }

    pub fn color(&self) -> Vec3 {
        match self {
            Light::Directional(light) => light.color,
            Light::Point(light) => light.color,
            Light::Spot(light) => light.color,
        }
    }

    /// World position of the light, or `None` for directional lights.
    pub fn position(&self) -> Option<Vec3> {
        match self {
            Light::Directional(_) => None,
            Light::Point(light) => Some(light.position),
            Light::Spot(light) => Some(light.position),
        }
    }
}
