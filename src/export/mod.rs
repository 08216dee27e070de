pub mod pdf;
pub mod excel;

use std::path::{Path, PathBuf};

/// Resolves `--output`: a directory (or a path without extension) gets
/// `default_name` appended, anything else is used as given.
pub fn output_path_for(output: Option<&Path>, default_name: &str) -> PathBuf {
    match output {
        Some(path) if path.is_dir() || path.extension().is_none() => path.join(default_name),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_name),
    }
}
