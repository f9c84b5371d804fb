use std::{collections::HashMap, path::PathBuf, rc::Rc};

use glam::Vec3;
use tracing::debug;

/// A single vertex of a mesh batch, laid out for direct upload to a vertex
/// buffer.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
    pub normal: [f32; 3],
}

/// Surface properties read from a model's material library.
///
/// Texture paths are already resolved against the model directory.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaterialInfo {
    pub name: String,
    pub ambient_color: Option<Vec3>,
    pub diffuse_color: Option<Vec3>,
    pub specular_color: Option<Vec3>,
    pub shininess: Option<f32>,
    /// Material opacity, where 1.0 is fully opaque.
    pub opacity: Option<f32>,
    /// Index of refraction.
    pub refraction: Option<f32>,
    pub diffuse_texture: Option<PathBuf>,
    pub specular_texture: Option<PathBuf>,
    pub normal_texture: Option<PathBuf>,
}

/// A drawable run of triangles sharing one material.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshBatch {
    pub name: String,
    pub vertices: Vec<Vertex>,
    /// Triangle list indices into `vertices`.
    pub indices: Vec<u32>,
    pub material: Option<MaterialInfo>,
}

impl MeshBatch {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Loaded geometry that one or more placed objects draw.
#[derive(Debug, PartialEq)]
pub struct Model {
    /// The path the model was loaded from.
    source_path: String,
    /// Directory part of `source_path`, used to resolve texture files.
    directory: String,
    meshes: Vec<MeshBatch>,
}

impl Model {
    pub fn new(source_path: impl Into<String>, meshes: Vec<MeshBatch>) -> Self {
        let source_path = source_path.into();
        let directory = model_directory(&source_path).to_string();

        Self {
            source_path,
            directory,
            meshes,
        }
    }

    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn meshes(&self) -> &[MeshBatch] {
        &self.meshes
    }

    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(MeshBatch::triangle_count).sum()
    }
}

/// Returns the text before the last `/` in `path`, or all of `path` when it
/// has no `/`.
///
/// This is the model identity key, not a filesystem directory: a bare file
/// name is its own key. Texture lookup uses the file's real parent instead.
pub fn model_directory(path: &str) -> &str {
    match path.rfind('/') {
        Some(i) => &path[..i],
        None => path,
    }
}

/// Decides when two object records refer to the same model.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModelIdentity {
    /// Records whose paths share a parent directory share one model, even
    /// when they name different files. Scene files written for this renderer
    /// rely on it, so it is the default.
    #[default]
    Directory,
    /// Records share a model only when their paths are identical.
    FullPath,
}

impl ModelIdentity {
    /// The registry key for `path` under this policy.
    pub fn key<'a>(&self, path: &'a str) -> &'a str {
        match self {
            ModelIdentity::Directory => model_directory(path),
            ModelIdentity::FullPath => path,
        }
    }
}

/// Owns every model loaded for a scene and hands out shared references to
/// them, loading each distinct model only once.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    identity: ModelIdentity,
    by_key: HashMap<String, Rc<Model>>,
    /// Models in the order they were first loaded.
    models: Vec<Rc<Model>>,
}

impl ModelRegistry {
    pub fn new(identity: ModelIdentity) -> Self {
        Self {
            identity,
            ..Default::default()
        }
    }

    pub fn identity(&self) -> ModelIdentity {
        self.identity
    }

    /// Get the already loaded model matching `path`, if any.
    pub fn get(&self, path: &str) -> Option<Rc<Model>> {
        self.by_key.get(self.identity.key(path)).cloned()
    }

    /// Get the model matching `path`, calling `load` to create it when no model
    /// with the same key has been registered. `load` is not called when the
    /// model already exists, and nothing is registered when it fails.
    pub fn get_or_try_load<E, F>(&mut self, path: &str, load: F) -> Result<Rc<Model>, E>
    where
        F: FnOnce() -> Result<Model, E>,
    {
        let key = self.identity.key(path);

        if let Some(model) = self.by_key.get(key) {
            debug!("reusing model {key:?} for {path:?}");
            return Ok(model.clone());
        }

        let model = Rc::new(load()?);
        self.by_key.insert(key.to_string(), model.clone());
        self.models.push(model.clone());

        Ok(model)
    }

    pub fn models(&self) -> &[Rc<Model>] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Consume the registry, returning the models in load order.
    pub fn into_models(self) -> Vec<Rc<Model>> {
        self.models
    }
}
