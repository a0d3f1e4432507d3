use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Pipeline stage a shader source belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn gl_type(self) -> gl::types::GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "VERTEX",
            ShaderStage::Fragment => "FRAGMENT",
        })
    }
}

/// Why a [`ShaderProgram`](crate::ShaderProgram) could not be built.
///
/// None of these are fatal; the caller decides whether to carry on
/// without the program or bail out.
#[derive(Error, Debug)]
pub enum ShaderError {
    #[error("ERROR::SHADER::{stage}::FILE_NOT_SUCCESSFULLY_READ ({}): {source}", .path.display())]
    Read {
        stage: ShaderStage,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("ERROR::SHADER::{stage}::COMPILATION_FAILED\n{log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("ERROR::SHADER::PROGRAM::LINKING_FAILED\n{log}")]
    Link { log: String },
}

impl ShaderError {
    /// The stage that failed, or `None` for link errors.
    pub fn stage(&self) -> Option<ShaderStage> {
        match self {
            ShaderError::Read { stage, .. } | ShaderError::Compile { stage, .. } => Some(*stage),
            ShaderError::Link { .. } => None,
        }
    }

    /// Full diagnostic text, including the driver log where there is one.
    pub fn diagnostic(&self) -> String {
        self.to_string()
    }
}
