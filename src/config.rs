use std::path::{Path, PathBuf};

/// Directory that shader file paths are resolved against.
///
/// Passed to [`ShaderProgram::from_files`](crate::ShaderProgram::from_files)
/// explicitly, so several programs can load from different roots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShaderDir {
    base: PathBuf,
}

impl ShaderDir {
    pub fn new<P: Into<PathBuf>>(base: P) -> Self {
        ShaderDir { base: base.into() }
    }

    /// Uses the first command line argument, or `fallback` when none is given.
    pub fn from_args_or<P: Into<PathBuf>>(fallback: P) -> Self {
        std::env::args_os()
            .nth(1)
            .map(ShaderDir::new)
            .unwrap_or_else(|| ShaderDir::new(fallback))
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Joins `path` onto the base directory. Absolute paths are returned as is.
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base.join(path)
        }
    }
}

impl Default for ShaderDir {
    fn default() -> Self {
        ShaderDir::new(".")
    }
}
