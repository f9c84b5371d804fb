use std::path::Path;

use tracing::info;

/// Loads a file and returns it as a string. Relative paths are resolved
/// against the current working directory.
pub fn load_as_string<P>(file_path: P) -> std::io::Result<String>
where
    P: AsRef<Path> + std::fmt::Debug,
{
    info!("load file as string: {file_path:?}");
    std::fs::read_to_string(file_path)
}

