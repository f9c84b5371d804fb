use glam::Vec3;
use thiserror::Error;

pub const MIN_ALLOWED_POSITION: f32 = -1000.0;
pub const MAX_ALLOWED_POSITION: f32 = 1000.0;
pub const MIN_ALLOWED_COLOR: f32 = 0.0;
pub const MAX_ALLOWED_COLOR: f32 = 1000.0;
pub const MIN_ALLOWED_DEGREES_ANGLE: f32 = 0.0;
pub const MAX_ALLOWED_DEGREES_ANGLE: f32 = 90.0;

/// A value read from a scene file that is outside of what the renderer
/// accepts.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("position {position} is outside of [{min}, {max}]")]
    PositionOutOfRange { position: Vec3, min: f32, max: f32 },
    #[error("color {color} is outside of [{min}, {max}]")]
    ColorOutOfRange { color: Vec3, min: f32, max: f32 },
    #[error("attenuation coefficients ({constant}, {linear}, {quadratic}) must be non-negative and not all zero")]
    InvalidAttenuation {
        constant: f32,
        linear: f32,
        quadratic: f32,
    },
    #[error("spot light angles {cutoff} and {outer_cutoff} must be strictly between {min} and {max} degrees with the outer angle larger")]
    InvalidAngles {
        cutoff: f32,
        outer_cutoff: f32,
        min: f32,
        max: f32,
    },
    #[error("scale {scale} must be larger than zero on every axis")]
    InvalidScale { scale: Vec3 },
}

/// Returns true if every component of `v` lies within `[lo, hi]`.
pub fn check_range_vec3(v: Vec3, lo: f32, hi: f32) -> bool {
    v.cmpge(Vec3::splat(lo)).all() && v.cmple(Vec3::splat(hi)).all()
}

/// Returns true if no coefficient is negative and at least one is non-zero.
pub fn check_attenuation(constant: f32, linear: f32, quadratic: f32) -> bool {
    constant >= 0.0
        && linear >= 0.0
        && quadratic >= 0.0
        && constant * constant + linear * linear + quadratic * quadratic > 0.0
}

/// Returns true if both spot light angles are strictly inside `(0, 90)` degrees
/// and the outer angle is larger than the inner one.
pub fn check_angles(cutoff: f32, outer_cutoff: f32) -> bool {
    check_angles_within(
        cutoff,
        outer_cutoff,
        MIN_ALLOWED_DEGREES_ANGLE,
        MAX_ALLOWED_DEGREES_ANGLE,
    )
}

/// Like `check_angles` with caller supplied exclusive bounds.
pub fn check_angles_within(cutoff: f32, outer_cutoff: f32, min: f32, max: f32) -> bool {
    let inside = |angle: f32| angle > min && angle < max;
    inside(cutoff) && inside(outer_cutoff) && outer_cutoff > cutoff
}

/// Returns true if every component of `scale` is larger than zero.
pub fn check_scale(scale: Vec3) -> bool {
    scale.cmpgt(Vec3::ZERO).all()
}

/// The ranges values in a scene file must fall within.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneLimits {
    pub min_position: f32,
    pub max_position: f32,
    pub min_color: f32,
    pub max_color: f32,
    /// Exclusive lower bound for spot light angles, in degrees.
    pub min_angle_degrees: f32,
    /// Exclusive upper bound for spot light angles, in degrees.
    pub max_angle_degrees: f32,
}

impl Default for SceneLimits {
    fn default() -> Self {
        Self {
            min_position: MIN_ALLOWED_POSITION,
            max_position: MAX_ALLOWED_POSITION,
            min_color: MIN_ALLOWED_COLOR,
            max_color: MAX_ALLOWED_COLOR,
            min_angle_degrees: MIN_ALLOWED_DEGREES_ANGLE,
            max_angle_degrees: MAX_ALLOWED_DEGREES_ANGLE,
        }
    }
}

impl SceneLimits {
    pub fn validate_position(&self, position: Vec3) -> Result<(), ValidationError> {
        if check_range_vec3(position, self.min_position, self.max_position) {
            Ok(())
        } else {
            Err(ValidationError::PositionOutOfRange {
                position,
                min: self.min_position,
                max: self.max_position,
            })
        }
    }

    pub fn validate_color(&self, color: Vec3) -> Result<(), ValidationError> {
        if check_range_vec3(color, self.min_color, self.max_color) {
            Ok(())
        } else {
            Err(ValidationError::ColorOutOfRange {
                color,
                min: self.min_color,
                max: self.max_color,
            })
        }
    }

    pub fn validate_attenuation(
        &self,
        constant: f32,
        linear: f32,
        quadratic: f32,
    ) -> Result<(), ValidationError> {
        if check_attenuation(constant, linear, quadratic) {
            Ok(())
        } else {
            Err(ValidationError::InvalidAttenuation {
                constant,
                linear,
                quadratic,
            })
        }
    }

    pub fn validate_angles(&self, cutoff: f32, outer_cutoff: f32) -> Result<(), ValidationError> {
        if check_angles_within(
            cutoff,
            outer_cutoff,
            self.min_angle_degrees,
            self.max_angle_degrees,
        ) {
            Ok(())
        } else {
            Err(ValidationError::InvalidAngles {
                cutoff,
                outer_cutoff,
                min: self.min_angle_degrees,
                max: self.max_angle_degrees,
            })
        }
    }

    pub fn validate_scale(&self, scale: Vec3) -> Result<(), ValidationError> {
        if check_scale(scale) {
            Ok(())
        } else {
            Err(ValidationError::InvalidScale { scale })
        }
    }
}
