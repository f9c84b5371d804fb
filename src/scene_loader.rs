//! Builds a `Scene` from a lights file and an objects file.
//!
//! Loading is all or nothing. The first syntax error, invalid value, unreadable
//! file or failed model load aborts the whole load and is returned to the
//! caller. No partially populated scene is ever produced.
mod records;
mod validation;

use std::{
    fmt,
    path::{Path, PathBuf},
    rc::Rc,
};

use thiserror::Error;
use tracing::{debug, info};

pub use records::{RecordReader, SyntaxError};
pub use validation::{
    check_angles, check_angles_within, check_attenuation, check_range_vec3, check_scale,
    SceneLimits, ValidationError, MAX_ALLOWED_COLOR, MAX_ALLOWED_DEGREES_ANGLE,
    MAX_ALLOWED_POSITION, MIN_ALLOWED_COLOR, MIN_ALLOWED_DEGREES_ANGLE, MIN_ALLOWED_POSITION,
};

use crate::{
    content::{GeometryError, GeometryProvider, ObjGeometryProvider},
    lighting::{DirectionalLight, Light, LightAttenuation, LightKind, PointLight, SpotLight},
    platform::load_as_string,
    scene::{Model, ModelIdentity, ModelRegistry, PlacedObject, Scene, SceneLights},
};

/// Which of the two scene files an error came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneFile {
    Lights,
    Objects,
}

impl fmt::Display for SceneFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SceneFile::Lights => "lights",
            SceneFile::Objects => "objects",
        })
    }
}

/// Reasons a scene failed to load. Light and object ordinals start at 1.
#[derive(Debug, Error)]
pub enum SceneLoadError {
    #[error("failed to read {file} file {path:?}")]
    Io {
        file: SceneFile,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed {file} file")]
    Syntax {
        file: SceneFile,
        #[source]
        source: SyntaxError,
    },
    #[error("failed to load light, type: {kind}, number: {ordinal}")]
    InvalidLight {
        kind: LightKind,
        ordinal: usize,
        #[source]
        source: ValidationError,
    },
    #[error("failed to load object number {ordinal}")]
    InvalidObject {
        ordinal: usize,
        #[source]
        source: ValidationError,
    },
    #[error("failed to load model {path:?} for object number {ordinal}")]
    Geometry {
        ordinal: usize,
        path: String,
        #[source]
        source: GeometryError,
    },
}

impl SceneLoadError {
    fn lights_syntax(source: SyntaxError) -> Self {
        SceneLoadError::Syntax {
            file: SceneFile::Lights,
            source,
        }
    }

    fn objects_syntax(source: SyntaxError) -> Self {
        SceneLoadError::Syntax {
            file: SceneFile::Objects,
            source,
        }
    }
}

/// Loads a scene using the default limits, directory based model sharing and
/// the obj model loader.
pub fn load_scene<P, Q>(lights_path: P, objects_path: Q) -> Result<Scene, SceneLoadError>
where
    P: AsRef<Path> + fmt::Debug,
    Q: AsRef<Path> + fmt::Debug,
{
    SceneLoader::new(ObjGeometryProvider::new()).load_scene(lights_path, objects_path)
}

/// Parses and validates scene files, fetching model geometry from `G`.
pub struct SceneLoader<G> {
    geometry: G,
    limits: SceneLimits,
    model_identity: ModelIdentity,
}

impl<G: GeometryProvider> SceneLoader<G> {
    pub fn new(geometry: G) -> Self {
        Self {
            geometry,
            limits: Default::default(),
            model_identity: Default::default(),
        }
    }

    /// Replace the value ranges used to validate scene files.
    pub fn with_limits(mut self, limits: SceneLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Choose how object records are matched to already loaded models.
    pub fn with_model_identity(mut self, model_identity: ModelIdentity) -> Self {
        self.model_identity = model_identity;
        self
    }

    pub fn limits(&self) -> &SceneLimits {
        &self.limits
    }

    /// Read both scene files and build the scene they describe.
    #[tracing::instrument(level = "info", skip(self))]
    pub fn load_scene<P, Q>(&mut self, lights_path: P, objects_path: Q) -> Result<Scene, SceneLoadError>
    where
        P: AsRef<Path> + fmt::Debug,
        Q: AsRef<Path> + fmt::Debug,
    {
        let lights_text = read_scene_file(SceneFile::Lights, lights_path.as_ref())?;
        let objects_text = read_scene_file(SceneFile::Objects, objects_path.as_ref())?;

        let lights = self.parse_lights(&lights_text)?;
        let (models, objects) = self.parse_objects(&objects_text)?;

        info!(
            "loaded scene with {} directional, {} point and {} spot lights, {} models and {} objects",
            lights.directional.len(),
            lights.point.len(),
            lights.spot.len(),
            models.len(),
            objects.len()
        );

        Ok(Scene {
            lights,
            models,
            objects,
        })
    }

    /// Parse the contents of a lights file.
    pub fn parse_lights(&self, text: &str) -> Result<SceneLights, SceneLoadError> {
        let mut reader = RecordReader::new(text);
        let mut lights = SceneLights::default();
        let mut ordinal = 0;

        while let Some(keyword) = reader.next_line() {
            let kind = LightKind::from_keyword(keyword).ok_or_else(|| {
                SceneLoadError::lights_syntax(SyntaxError::UnknownLightType {
                    line: reader.line_number(),
                    keyword: keyword.to_string(),
                })
            })?;

            ordinal += 1;

            let light = match kind {
                LightKind::Directional => self.read_directional_light(&mut reader, ordinal)?,
                LightKind::Point => self.read_point_light(&mut reader, ordinal)?,
                LightKind::Spot => self.read_spot_light(&mut reader, ordinal)?,
            };

            debug!("loaded {kind} light number {ordinal}: {light:?}");
            lights.push(light);
        }

        Ok(lights)
    }

    /// Parse the contents of an objects file, loading each distinct model once.
    pub fn parse_objects(
        &mut self,
        text: &str,
    ) -> Result<(Vec<Rc<Model>>, Vec<PlacedObject>), SceneLoadError> {
        let mut reader = RecordReader::new(text);
        let mut registry = ModelRegistry::new(self.model_identity);
        let mut objects = Vec::new();

        while !reader.is_at_end() {
            let ordinal = objects.len() + 1;

            let position = reader
                .read_vec3("object position")
                .map_err(SceneLoadError::objects_syntax)?;
            let rotation = reader
                .read_vec3("object rotation")
                .map_err(SceneLoadError::objects_syntax)?;
            let scale = reader
                .read_vec3("object scale")
                .map_err(SceneLoadError::objects_syntax)?;
            let path = reader
                .read_text("model path")
                .map_err(SceneLoadError::objects_syntax)?;

            // Validate before any geometry is fetched.
            self.limits
                .validate_position(position)
                .and_then(|_| self.limits.validate_scale(scale))
                .map_err(|source| SceneLoadError::InvalidObject { ordinal, source })?;

            let geometry = &mut self.geometry;
            let model = registry
                .get_or_try_load(path, || geometry.load(Path::new(path)))
                .map_err(|source| SceneLoadError::Geometry {
                    ordinal,
                    path: path.to_string(),
                    source,
                })?;

            debug!("placed object number {ordinal} using {path:?} at {position}");
            objects.push(PlacedObject::new(position, rotation, scale, model));
        }

        Ok((registry.into_models(), objects))
    }

    fn read_directional_light(
        &self,
        reader: &mut RecordReader,
        ordinal: usize,
    ) -> Result<Light, SceneLoadError> {
        let color = reader
            .read_vec3("directional light color")
            .map_err(SceneLoadError::lights_syntax)?;
        let direction = reader
            .read_vec3("directional light direction")
            .map_err(SceneLoadError::lights_syntax)?;

        self.limits
            .validate_color(color)
            .map_err(|source| invalid_light(LightKind::Directional, ordinal, source))?;

        Ok(Light::Directional(DirectionalLight::new(color, direction)))
    }

    fn read_point_light(
        &self,
        reader: &mut RecordReader,
        ordinal: usize,
    ) -> Result<Light, SceneLoadError> {
        let position = reader
            .read_vec3("point light position")
            .map_err(SceneLoadError::lights_syntax)?;
        let color = reader
            .read_vec3("point light color")
            .map_err(SceneLoadError::lights_syntax)?;
        let [constant, linear, quadratic] = reader
            .read_floats::<3>("point light attenuation")
            .map_err(SceneLoadError::lights_syntax)?;

        self.limits
            .validate_position(position)
            .and_then(|_| self.limits.validate_color(color))
            .and_then(|_| self.limits.validate_attenuation(constant, linear, quadratic))
            .map_err(|source| invalid_light(LightKind::Point, ordinal, source))?;

        Ok(Light::Point(PointLight::new(
            position,
            color,
            LightAttenuation::new(constant, linear, quadratic),
        )))
    }

    fn read_spot_light(
        &self,
        reader: &mut RecordReader,
        ordinal: usize,
    ) -> Result<Light, SceneLoadError> {
        let position = reader
            .read_vec3("spot light position")
            .map_err(SceneLoadError::lights_syntax)?;
        let color = reader
            .read_vec3("spot light color")
            .map_err(SceneLoadError::lights_syntax)?;
        let direction = reader
            .read_vec3("spot light direction")
            .map_err(SceneLoadError::lights_syntax)?;
        let [constant, linear, quadratic] = reader
            .read_floats::<3>("spot light attenuation")
            .map_err(SceneLoadError::lights_syntax)?;
        let [cutoff, outer_cutoff] = reader
            .read_floats::<2>("spot light angles")
            .map_err(SceneLoadError::lights_syntax)?;

        self.limits
            .validate_position(position)
            .and_then(|_| self.limits.validate_color(color))
            .and_then(|_| self.limits.validate_attenuation(constant, linear, quadratic))
            .and_then(|_| self.limits.validate_angles(cutoff, outer_cutoff))
            .map_err(|source| invalid_light(LightKind::Spot, ordinal, source))?;

        Ok(Light::Spot(SpotLight::new(
            position,
            color,
            direction,
            LightAttenuation::new(constant, linear, quadratic),
            cutoff,
            outer_cutoff,
        )))
    }
}

fn invalid_light(kind: LightKind, ordinal: usize, source: ValidationError) -> SceneLoadError {
    SceneLoadError::InvalidLight {
        kind,
        ordinal,
        source,
    }
}

fn read_scene_file(file: SceneFile, path: &Path) -> Result<String, SceneLoadError> {
    load_as_string(path).map_err(|source| SceneLoadError::Io {
        file,
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::scene::{MeshBatch, Vertex};

    /// Hands out a one triangle model for every path and records each request.
    #[derive(Default)]
    struct CountingGeometry {
        loads: Vec<PathBuf>,
    }

    impl GeometryProvider for CountingGeometry {
        fn load(&mut self, path: &Path) -> Result<Model, GeometryError> {
            self.loads.push(path.to_path_buf());

            if path.to_string_lossy().contains("broken") {
                return Err(GeometryError::NoGeometry {
                    path: path.to_path_buf(),
                });
            }

            Ok(Model::new(
                path.to_string_lossy(),
                vec![MeshBatch {
                    name: "triangle".to_string(),
                    vertices: vec![Vertex::default(); 3],
                    indices: vec![0, 1, 2],
                    material: None,
                }],
            ))
        }
    }

    const ALL_KINDS: &str = "\
directional
0.3 0.3 0.3
-0.2 -1.0 -0.3
point
1.2 1.0 2.0
0.8 0.8 0.8
1.0 0.09 0.032
spot
0.0 3.0 0.0
1.0 1.0 1.0
0.0 -1.0 0.0
1.0 0.09 0.032
12.5 17.5
";

    /// A file in the system temp directory that is deleted when dropped.
    #[derive(Debug)]
    struct TempFile(PathBuf);

    impl AsRef<Path> for TempFile {
        fn as_ref(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    fn temp_file(name: &str, contents: &str) -> TempFile {
        let path = std::env::temp_dir().join(format!("lightbox-{}-{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        TempFile(path)
    }

    #[test]
    fn temp_files_are_removed_when_dropped() {
        let file = temp_file("cleanup.txt", "point\n");
        let path = file.0.clone();
        assert!(path.exists());

        drop(file);
        assert!(!path.exists());
    }

    #[test]
    fn parses_every_light_kind() {
        let loader = SceneLoader::new(CountingGeometry::default());
        let lights = loader.parse_lights(ALL_KINDS).unwrap();

        assert_eq!(1, lights.directional.len());
        assert_eq!(1, lights.point.len());
        assert_eq!(1, lights.spot.len());

        let directional = &lights.directional[0];
        assert_eq!(Vec3::new(0.3, 0.3, 0.3), directional.color);
        assert_eq!(Vec3::new(-0.2, -1.0, -0.3), directional.direction);

        let point = &lights.point[0];
        assert_eq!(Vec3::new(1.2, 1.0, 2.0), point.position);
        assert_eq!(Vec3::new(0.8, 0.8, 0.8), point.color);
        assert_eq!(0.09, point.linear());

        let spot = &lights.spot[0];
        assert_eq!(Vec3::new(0.0, 3.0, 0.0), spot.position);
        assert_eq!(Vec3::new(0.0, -1.0, 0.0), spot.direction);
        assert_eq!(12.5, spot.cutoff());
        assert_eq!(17.5, spot.outer_cutoff());
    }

    #[test]
    fn light_values_may_wrap_across_lines() {
        let loader = SceneLoader::new(CountingGeometry::default());
        let lights = loader
            .parse_lights("point\n0 0\n0\n1 1 1\n1 0 0\nspot\n0 0 0\n1 1 1\n0 -1 0\n1\n0 0\n12.5\n17.5\n")
            .unwrap();

        assert_eq!(Vec3::ZERO, lights.point[0].position);
        assert_eq!(Vec3::ONE, lights.point[0].color);
        assert_eq!(12.5, lights.spot[0].cutoff());
        assert_eq!(17.5, lights.spot[0].outer_cutoff());
    }

    #[test]
    fn empty_lights_file_has_no_lights() {
        let loader = SceneLoader::new(CountingGeometry::default());
        assert!(loader.parse_lights("\n\n").unwrap().is_empty());
    }

    #[test]
    fn zero_constant_term_is_replaced_after_validation() {
        let loader = SceneLoader::new(CountingGeometry::default());
        let lights = loader
            .parse_lights("point\n0 0 0\n1 1 1\n0 1 0\n")
            .unwrap();

        let light = &lights.point[0];
        assert_eq!(1.0, light.constant());
        assert_eq!(1.0, light.linear());
        assert_eq!(0.0, light.quadratic());
    }

    #[test]
    fn unknown_light_type_is_a_syntax_error() {
        let loader = SceneLoader::new(CountingGeometry::default());
        let err = loader
            .parse_lights("point\n0 0 0\n1 1 1\n1 0 0\narea\n")
            .unwrap_err();

        match err {
            SceneLoadError::Syntax {
                file: SceneFile::Lights,
                source: SyntaxError::UnknownLightType { line, keyword },
            } => {
                assert_eq!(5, line);
                assert_eq!("area", keyword);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn invalid_light_reports_kind_and_ordinal() {
        let loader = SceneLoader::new(CountingGeometry::default());
        let err = loader
            .parse_lights("directional\n1 1 1\n0 -1 0\npoint\n0 0 0\n1 1 1001\n1 0 0\n")
            .unwrap_err();

        match err {
            SceneLoadError::InvalidLight {
                kind,
                ordinal,
                source,
            } => {
                assert_eq!(LightKind::Point, kind);
                assert_eq!(2, ordinal);
                assert!(matches!(source, ValidationError::ColorOutOfRange { .. }));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn spot_light_angles_must_be_ordered() {
        let loader = SceneLoader::new(CountingGeometry::default());
        let err = loader
            .parse_lights("spot\n0 0 0\n1 1 1\n0 -1 0\n1 0 0\n45 45\n")
            .unwrap_err();

        assert!(matches!(
            err,
            SceneLoadError::InvalidLight {
                kind: LightKind::Spot,
                ordinal: 1,
                source: ValidationError::InvalidAngles { .. },
            }
        ));
    }

    #[test]
    fn all_zero_attenuation_is_rejected() {
        let loader = SceneLoader::new(CountingGeometry::default());
        let err = loader
            .parse_lights("point\n0 0 0\n1 1 1\n0 0 0\n")
            .unwrap_err();

        assert!(matches!(
            err,
            SceneLoadError::InvalidLight {
                source: ValidationError::InvalidAttenuation { .. },
                ..
            }
        ));
    }

    #[test]
    fn spot_light_missing_angles_fails_whole_load() {
        let loader = SceneLoader::new(CountingGeometry::default());
        let err = loader
            .parse_lights("point\n0 0 0\n1 1 1\n1 0 0\nspot\n0 0 0\n1 1 1\n0 -1 0\n1 0 0\n")
            .unwrap_err();

        assert!(matches!(
            err,
            SceneLoadError::Syntax {
                file: SceneFile::Lights,
                source: SyntaxError::UnexpectedEnd {
                    line: 9,
                    field: "spot light angles",
                },
            }
        ));
    }

    #[test]
    fn custom_limits_apply_to_lights() {
        let loader = SceneLoader::new(CountingGeometry::default()).with_limits(SceneLimits {
            max_color: 1.0,
            ..Default::default()
        });

        assert!(loader.parse_lights("directional\n1 1 1\n0 -1 0\n").is_ok());
        assert!(loader.parse_lights("directional\n2 1 1\n0 -1 0\n").is_err());
        assert_eq!(1.0, loader.limits().max_color);
    }

    #[test]
    fn objects_in_one_directory_share_a_model() {
        let mut geometry = CountingGeometry::default();
        let mut loader = SceneLoader::new(&mut geometry);

        let (models, objects) = loader
            .parse_objects(
                "0 0 0\n0 0 0\n1 1 1\nmodels/crate/crate.obj\n\
                 1 0 0\n0 90 0\n2 2 2\nmodels/crate/crate_lod1.obj\n",
            )
            .unwrap();

        assert_eq!(1, models.len());
        assert_eq!(2, objects.len());
        assert!(Rc::ptr_eq(objects[0].model(), objects[1].model()));
        assert!(Rc::ptr_eq(&models[0], objects[0].model()));
        assert_eq!(Vec3::new(1.0, 0.0, 0.0), objects[1].position());
        assert_eq!(Vec3::new(0.0, 90.0, 0.0), objects[1].rotation_degrees());
        assert_eq!(Vec3::splat(2.0), objects[1].scale());

        drop(loader);
        assert_eq!(vec![PathBuf::from("models/crate/crate.obj")], geometry.loads);
    }

    #[test]
    fn full_path_identity_loads_each_file() {
        let mut geometry = CountingGeometry::default();
        let mut loader =
            SceneLoader::new(&mut geometry).with_model_identity(ModelIdentity::FullPath);

        let (models, objects) = loader
            .parse_objects(
                "0 0 0\n0 0 0\n1 1 1\nmodels/crate/crate.obj\n\
                 1 0 0\n0 0 0\n1 1 1\nmodels/crate/crate_lod1.obj\n\
                 2 0 0\n0 0 0\n1 1 1\nmodels/crate/crate.obj\n",
            )
            .unwrap();

        assert_eq!(2, models.len());
        assert_eq!(3, objects.len());
        assert!(Rc::ptr_eq(objects[0].model(), objects[2].model()));

        drop(loader);
        assert_eq!(2, geometry.loads.len());
    }

    #[test]
    fn model_paths_may_contain_spaces() {
        let mut geometry = CountingGeometry::default();
        let mut loader = SceneLoader::new(&mut geometry);

        let (models, _) = loader
            .parse_objects("0 0 0\n0 0 0\n1 1 1\nmy models/old crate/crate v2.obj\n")
            .unwrap();

        assert_eq!("my models/old crate", models[0].directory());
    }

    #[test]
    fn invalid_scale_aborts_before_loading_geometry() {
        let mut geometry = CountingGeometry::default();
        let mut loader = SceneLoader::new(&mut geometry);

        let err = loader
            .parse_objects(
                "0 0 0\n0 0 0\n1 1 1\nmodels/a/a.obj\n\
                 0 0 0\n0 0 0\n1 0 1\nmodels/b/b.obj\n",
            )
            .unwrap_err();

        assert!(matches!(
            err,
            SceneLoadError::InvalidObject {
                ordinal: 2,
                source: ValidationError::InvalidScale { .. },
            }
        ));

        drop(loader);
        assert_eq!(vec![PathBuf::from("models/a/a.obj")], geometry.loads);
    }

    #[test]
    fn object_position_out_of_range_is_rejected() {
        let mut loader = SceneLoader::new(CountingGeometry::default());
        let err = loader
            .parse_objects("0 -1000.5 0\n0 0 0\n1 1 1\nmodels/a/a.obj\n")
            .unwrap_err();

        assert!(matches!(
            err,
            SceneLoadError::InvalidObject {
                ordinal: 1,
                source: ValidationError::PositionOutOfRange { .. },
            }
        ));
    }

    #[test]
    fn geometry_failure_reports_object() {
        let mut loader = SceneLoader::new(CountingGeometry::default());
        let err = loader
            .parse_objects("0 0 0\n0 0 0\n1 1 1\nmodels/broken/broken.obj\n")
            .unwrap_err();

        match err {
            SceneLoadError::Geometry { ordinal, path, .. } => {
                assert_eq!(1, ordinal);
                assert_eq!("models/broken/broken.obj", path);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn truncated_object_record_is_a_syntax_error() {
        let mut loader = SceneLoader::new(CountingGeometry::default());
        let err = loader.parse_objects("0 0 0\n0 0 0\n1 1 1\n").unwrap_err();

        assert!(matches!(
            err,
            SceneLoadError::Syntax {
                file: SceneFile::Objects,
                source: SyntaxError::UnexpectedEnd {
                    field: "model path",
                    ..
                },
            }
        ));
    }

    #[test]
    fn missing_lights_file_is_an_io_error() {
        let objects = temp_file("missing-lights-objects.txt", "");
        let mut loader = SceneLoader::new(CountingGeometry::default());

        let err = loader
            .load_scene("this/file/does/not/exist.txt", &objects)
            .unwrap_err();

        assert!(matches!(
            err,
            SceneLoadError::Io {
                file: SceneFile::Lights,
                ..
            }
        ));
    }

    #[test]
    fn malformed_lights_file_returns_no_scene() {
        let lights = temp_file(
            "malformed-lights.txt",
            "point\n0 0 0\n1 1 1\n1 0 0\nspot\n0 0 0\n1 1 1\n0 -1 0\n1 0 0\n",
        );
        let objects = temp_file(
            "malformed-objects.txt",
            "0 0 0\n0 0 0\n1 1 1\nmodels/a/a.obj\n",
        );
        let mut geometry = CountingGeometry::default();
        let mut loader = SceneLoader::new(&mut geometry);

        let result = loader.load_scene(&lights, &objects);

        assert!(matches!(result, Err(SceneLoadError::Syntax { .. })));
        drop(loader);
        assert!(geometry.loads.is_empty());
    }

    #[test]
    fn loads_files_from_disk() {
        let lights = temp_file("disk-lights.txt", ALL_KINDS);
        let objects = temp_file(
            "disk-objects.txt",
            "0 0 0\n0 0 0\n1 1 1\nmodels/a/a.obj\n\n5 0 0\n0 0 0\n1 1 1\nmodels/b/b.obj\n",
        );
        let mut loader = SceneLoader::new(CountingGeometry::default());

        let scene = loader.load_scene(&lights, &objects).unwrap();

        assert_eq!(3, scene.lights.len());
        assert_eq!(2, scene.models.len());
        assert_eq!(2, scene.objects.len());
    }

    #[test]
    fn loads_bundled_content() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        let scene = load_scene(
            root.join("content/lights.txt"),
            root.join("content/objects.txt"),
        )
        .unwrap();

        assert_eq!(1, scene.lights.directional.len());
        assert_eq!(2, scene.lights.point.len());
        assert_eq!(1, scene.lights.spot.len());
        assert_eq!(2, scene.models.len());
        assert_eq!(3, scene.objects.len());
        assert!(Rc::ptr_eq(scene.objects[0].model(), scene.objects[1].model()));
    }
}
