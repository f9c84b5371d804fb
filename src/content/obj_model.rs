use std::path::{Path, PathBuf};

use glam::Vec3;
use tracing::{debug, warn};

use crate::scene::{MaterialInfo, MeshBatch, Model, Vertex};

use super::{GeometryError, GeometryProvider};

/// Loads Wavefront .obj models (and their .mtl material libraries) from disk.
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjGeometryProvider;

impl ObjGeometryProvider {
    pub fn new() -> Self {
        Self
    }
}

impl GeometryProvider for ObjGeometryProvider {
    fn load(&mut self, path: &Path) -> Result<Model, GeometryError> {
        load_obj_model(path)
    }
}

/// Creates a new `Model` from an obj file.
#[tracing::instrument(level = "info")]
pub fn load_obj_model(obj_file_path: &Path) -> Result<Model, GeometryError> {
    // Parse the .obj file to get a list of models (actually meshes) and material
    // definitions.
    let (obj_models, obj_materials) = tobj::load_obj(
        obj_file_path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )
    .map_err(|source| GeometryError::Parse {
        path: obj_file_path.to_path_buf(),
        source,
    })?;

    let source_path = obj_file_path.to_string_lossy();
    let directory = texture_directory(obj_file_path);

    // A broken or missing material library should not prevent the geometry from
    // being shown.
    let materials = match obj_materials {
        Ok(obj_materials) => obj_materials
            .into_iter()
            .map(|mtl| create_material(mtl, directory))
            .collect::<Vec<_>>(),
        Err(e) => {
            warn!("failed to load materials for {obj_file_path:?}, continuing without: {e}");
            Vec::new()
        }
    };

    let meshes = obj_models
        .iter()
        .map(|obj_model| process_obj_mesh(obj_model, &materials))
        .filter(|batch| !batch.indices.is_empty())
        .collect::<Vec<_>>();

    if meshes.is_empty() {
        return Err(GeometryError::NoGeometry {
            path: obj_file_path.to_path_buf(),
        });
    }

    let model = Model::new(source_path.into_owned(), meshes);
    debug!(
        "loaded {} mesh batches with {} triangles from {obj_file_path:?}",
        model.meshes().len(),
        model.triangle_count()
    );

    Ok(model)
}

/// Creates a `MaterialInfo` from an obj model's .mtl material. Texture file
/// names are resolved relative to `directory`.
fn create_material(mat: tobj::Material, directory: &Path) -> MaterialInfo {
    MaterialInfo {
        name: mat.name,
        ambient_color: mat.ambient.map(Vec3::from),
        diffuse_color: mat.diffuse.map(Vec3::from),
        specular_color: mat.specular.map(Vec3::from),
        shininess: mat.shininess,
        opacity: mat.dissolve,
        refraction: mat.optical_density,
        diffuse_texture: mat.diffuse_texture.map(|f| texture_path(directory, &f)),
        specular_texture: mat.specular_texture.map(|f| texture_path(directory, &f)),
        normal_texture: mat.normal_texture.map(|f| texture_path(directory, &f)),
    }
}

/// The directory texture file names are resolved against. A bare file name
/// has an empty parent, which resolves against the working directory.
pub fn texture_directory(obj_file_path: &Path) -> &Path {
    obj_file_path.parent().unwrap_or(Path::new(""))
}

/// Joins a texture file name from a material library onto the directory of the
/// model that references it.
pub fn texture_path(directory: &Path, file_name: &str) -> PathBuf {
    directory.join(file_name)
}

/// Convert one obj model into a `MeshBatch`.
///
/// This assumes the obj file was loaded with `triangulate = true` and
/// `single_index = true`, so every position has a matching texture coordinate
/// and normal at the same index when those are present at all.
fn process_obj_mesh(model: &tobj::Model, materials: &[MaterialInfo]) -> MeshBatch {
    let mesh = &model.mesh;

    let has_normals = !mesh.normals.is_empty();
    let has_tex_coords = !mesh.texcoords.is_empty();

    let vertices = (0..mesh.positions.len() / 3)
        .map(|i| Vertex {
            position: [
                mesh.positions[i * 3],
                mesh.positions[i * 3 + 1],
                mesh.positions[i * 3 + 2],
            ],
            tex_coords: if has_tex_coords {
                [mesh.texcoords[i * 2], mesh.texcoords[i * 2 + 1]]
            } else {
                [0.0, 0.0]
            },
            normal: if has_normals {
                [
                    mesh.normals[i * 3],
                    mesh.normals[i * 3 + 1],
                    mesh.normals[i * 3 + 2],
                ]
            } else {
                [0.0, 0.0, 0.0]
            },
        })
        .collect::<Vec<_>>();

    MeshBatch {
        name: model.name.clone(),
        vertices,
        indices: mesh.indices.clone(),
        material: mesh
            .material_id
            .and_then(|id| materials.get(id))
            .cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_path(relative: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("content")
            .join(relative)
    }

    #[test]
    fn loads_cube_with_materials() {
        let model = ObjGeometryProvider::new()
            .load(&content_path("models/cube/cube.obj"))
            .unwrap();

        assert_eq!(1, model.meshes().len());
        assert_eq!(12, model.triangle_count());
        assert!(model.directory().ends_with("models/cube"));

        let mesh = &model.meshes()[0];
        assert!(mesh.vertices.iter().all(|v| v.normal != [0.0, 0.0, 0.0]));

        let material = mesh.material.as_ref().unwrap();
        assert_eq!("crate", material.name);
        assert_eq!(Some(Vec3::new(0.8, 0.6, 0.4)), material.diffuse_color);
        assert!(material
            .diffuse_texture
            .as_ref()
            .unwrap()
            .ends_with("models/cube/crate_diffuse.png"));
    }

    #[test]
    fn loads_mesh_without_normals_or_tex_coords() {
        let model = ObjGeometryProvider::new()
            .load(&content_path("models/pyramid/pyramid.obj"))
            .unwrap();

        assert_eq!(6, model.triangle_count());

        let mesh = &model.meshes()[0];
        assert!(mesh.material.is_none());
        assert!(mesh
            .vertices
            .iter()
            .all(|v| v.normal == [0.0, 0.0, 0.0] && v.tex_coords == [0.0, 0.0]));
    }

    #[test]
    fn missing_file_is_a_parse_error() {
        let err = ObjGeometryProvider::new()
            .load(&content_path("models/missing/missing.obj"))
            .unwrap_err();

        assert!(matches!(err, GeometryError::Parse { .. }));
    }

    #[test]
    fn file_without_faces_has_no_geometry() {
        let err = ObjGeometryProvider::new()
            .load(&content_path("models/points/points.obj"))
            .unwrap_err();

        assert!(matches!(err, GeometryError::NoGeometry { .. }));
    }

    #[test]
    fn texture_paths_join_model_directory() {
        assert_eq!(
            PathBuf::from("models/crate/diffuse.png"),
            texture_path(
                texture_directory(Path::new("models/crate/crate.obj")),
                "diffuse.png"
            )
        );
    }

    #[test]
    fn bare_model_file_name_resolves_textures_in_working_directory() {
        let directory = texture_directory(Path::new("crate.obj"));

        assert_eq!(Path::new(""), directory);
        assert_eq!(
            PathBuf::from("diffuse.png"),
            texture_path(directory, "diffuse.png")
        );
    }
}
