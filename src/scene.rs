mod models;
mod objects;

use std::rc::Rc;

pub use models::{
    model_directory, MaterialInfo, MeshBatch, Model, ModelIdentity, ModelRegistry, Vertex,
};
pub use objects::{euler_degrees_to_quat, PlacedObject};

use crate::lighting::{packed::PackedLights, DirectionalLight, Light, PointLight, SpotLight};

/// The lights in a scene, grouped by kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneLights {
    pub directional: Vec<DirectionalLight>,
    pub point: Vec<PointLight>,
    pub spot: Vec<SpotLight>,
}

impl SceneLights {
    /// Append `light` to the list matching its kind.
    pub fn push(&mut self, light: Light) {
        match light {
            Light::Directional(light) => self.directional.push(light),
            Light::Point(light) => self.point.push(light),
            Light::Spot(light) => self.spot.push(light),
        }
    }

    /// Total number of lights of every kind.
    pub fn len(&self) -> usize {
        self.directional.len() + self.point.len() + self.spot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build the GPU layout copies of every light.
    pub fn packed(&self) -> PackedLights {
        PackedLights::new(&self.directional, &self.point, &self.spot)
    }
}

/// Everything produced by a successful scene load: lights, the de-duplicated
/// list of models and the objects placing those models in the world.
///
/// A `Scene` is not a scene graph!
#[derive(Debug, Default)]
pub struct Scene {
    pub lights: SceneLights,
    pub models: Vec<Rc<Model>>,
    pub objects: Vec<PlacedObject>,
}
