use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::scene::Model;

mod obj_model;

pub use obj_model::ObjGeometryProvider;

/// Loads model geometry on behalf of the scene loader.
///
/// The scene loader calls `load` at most once for each distinct model it
/// encounters and shares the result between every object that uses it.
pub trait GeometryProvider {
    /// Load the model stored at `path`.
    fn load(&mut self, path: &Path) -> Result<Model, GeometryError>;
}

impl<G: GeometryProvider + ?Sized> GeometryProvider for &mut G {
    fn load(&mut self, path: &Path) -> Result<Model, GeometryError> {
        (**self).load(path)
    }
}

/// Errors raised while loading model geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("failed to parse model file {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },
    #[error("model file {path:?} does not contain any triangles")]
    NoGeometry { path: PathBuf },
}
