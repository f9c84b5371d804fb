use std::rc::Rc;

use glam::{EulerRot, Mat4, Quat, Vec3};

use super::Model;

/// A model placed in the world with its own translation, rotation and scale.
#[derive(Clone, Debug)]
pub struct PlacedObject {
    /// The world position of this object.
    position: Vec3,
    /// The rotation of this object as Euler angles in degrees.
    rotation_degrees: Vec3,
    /// `rotation_degrees` converted to a quaternion.
    rotation: Quat,
    /// The scale of this object. Every component is positive for objects
    /// created by the scene loader.
    scale: Vec3,
    /// Reference to the shared model that this object will draw.
    model: Rc<Model>,
}

impl PlacedObject {
    pub fn new(position: Vec3, rotation_degrees: Vec3, scale: Vec3, model: Rc<Model>) -> Self {
        Self {
            position,
            rotation_degrees,
            rotation: euler_degrees_to_quat(rotation_degrees),
            scale,
            model,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation_degrees(&self) -> Vec3 {
        self.rotation_degrees
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn model(&self) -> &Rc<Model> {
        &self.model
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set the rotation of the object from Euler angles in degrees.
    pub fn set_rotation_degrees(&mut self, rotation_degrees: Vec3) {
        self.rotation_degrees = rotation_degrees;
        self.rotation = euler_degrees_to_quat(rotation_degrees);
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    pub fn set_model(&mut self, model: Rc<Model>) {
        self.model = model;
    }

    /// Get the transform from the model's local space to world space. Scale
    /// is applied first, then rotation, then translation.
    pub fn local_to_world(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

/// Converts Euler angles in degrees to a quaternion. The X rotation is applied
/// first, then Y, then Z.
pub fn euler_degrees_to_quat(degrees: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::ZYX,
        degrees.z.to_radians(),
        degrees.y.to_radians(),
        degrees.x.to_radians(),
    )
}
