#![allow(unsafe_code)]

use gl::types::{GLint, GLuint};
use std::{fs, marker::PhantomData, path::Path};

use crate::{
    check_for_gl_error,
    config::ShaderDir,
    error::{ShaderError, ShaderStage},
    gl_utils::{current_program, delete_program, delete_shader, get_uniform_location, use_program},
    misc_util::{compile_shader, link_program},
};

/// A linked vertex + fragment program.
///
/// Every method issues GL calls, so a context must be current on the
/// calling thread. The program is deleted on drop.
pub struct ShaderProgram {
    id: GLuint,
    // GL objects belong to the context's thread.
    _not_send: PhantomData<*const ()>,
}

impl ShaderProgram {
    /// Reads `vertex_path` and `fragment_path` (resolved against `dir`),
    /// then compiles and links them.
    ///
    /// Both files are read before touching GL, so a missing file fails
    /// without needing a context.
    pub fn from_files<V, F>(dir: &ShaderDir, vertex_path: V, fragment_path: F) -> Result<Self, ShaderError>
    where
        V: AsRef<Path>,
        F: AsRef<Path>,
    {
        let vertex_src = read_source(dir, ShaderStage::Vertex, vertex_path.as_ref())?;
        let fragment_src = read_source(dir, ShaderStage::Fragment, fragment_path.as_ref())?;
        Self::from_sources(&vertex_src, &fragment_src)
    }

    /// Compiles and links in-memory GLSL sources.
    pub fn from_sources(vertex_src: &str, fragment_src: &str) -> Result<Self, ShaderError> {
        let program = unsafe { build_program(vertex_src, fragment_src) };
        match program {
            Ok(id) => {
                log::debug!("linked shader program {}", id);
                Ok(ShaderProgram { id, _not_send: PhantomData })
            }
            Err(err) => {
                log::error!("{}", err);
                Err(err)
            }
        }
    }

    /// Raw GL handle.
    pub fn id(&self) -> GLuint {
        self.id
    }

    /// Makes this the program used by subsequent draw calls.
    pub fn use_program(&self) {
        unsafe { use_program(self.id) };
        check_for_gl_error!("use_program");
    }

    /// Whether `GL_CURRENT_PROGRAM` is this program.
    pub fn is_active(&self) -> bool {
        unsafe { current_program() == self.id }
    }

    pub fn uniform_location(&self, name: &str) -> Option<GLint> {
        unsafe { get_uniform_location(self.id, name) }
    }

    // The setters below write to the currently active program, like
    // `glUniform*` itself: call `use_program` first. Unknown names are ignored.

    pub fn set_bool(&self, name: &str, value: bool) {
        self.set_int(name, value as GLint);
    }

    pub fn set_int(&self, name: &str, value: i32) {
        self.with_location(name, |location| unsafe { gl::Uniform1i(location, value) });
    }

    pub fn set_float(&self, name: &str, value: f32) {
        self.with_location(name, |location| unsafe { gl::Uniform1f(location, value) });
    }

    pub fn set_vec2(&self, name: &str, value: [f32; 2]) {
        self.with_location(name, |location| unsafe { gl::Uniform2f(location, value[0], value[1]) });
    }

    pub fn set_vec3(&self, name: &str, value: [f32; 3]) {
        self.with_location(name, |location| unsafe {
            gl::Uniform3f(location, value[0], value[1], value[2])
        });
    }

    pub fn set_vec4(&self, name: &str, value: [f32; 4]) {
        self.with_location(name, |location| unsafe {
            gl::Uniform4f(location, value[0], value[1], value[2], value[3])
        });
    }

    /// Column-major 4x4 matrix.
    pub fn set_mat4(&self, name: &str, value: &[f32; 16]) {
        self.with_location(name, |location| unsafe {
            gl::UniformMatrix4fv(location, 1, gl::FALSE, value.as_ptr())
        });
    }

    fn with_location<F: FnOnce(GLint)>(&self, name: &str, upload: F) {
        match self.uniform_location(name) {
            Some(location) => {
                upload(location);
                check_for_gl_error!("set_uniform");
            }
            None => log::trace!("uniform {:?} not found in program {}", name, self.id),
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe { delete_program(self.id) };
    }
}

fn read_source(dir: &ShaderDir, stage: ShaderStage, path: &Path) -> Result<String, ShaderError> {
    let path = dir.resolve(path);
    fs::read_to_string(&path).map_err(|source| {
        let err = ShaderError::Read { stage, path, source };
        log::error!("{}", err);
        err
    })
}

/// Stage objects never outlive this call, whichever way it goes.
unsafe fn build_program(vertex_src: &str, fragment_src: &str) -> Result<GLuint, ShaderError> {
    let vertex = compile_shader(ShaderStage::Vertex.gl_type(), vertex_src)
        .map_err(|log| ShaderError::Compile { stage: ShaderStage::Vertex, log })?;
    let fragment = match compile_shader(ShaderStage::Fragment.gl_type(), fragment_src) {
        Ok(fragment) => fragment,
        Err(log) => {
            delete_shader(vertex);
            return Err(ShaderError::Compile { stage: ShaderStage::Fragment, log });
        }
    };

    let program = link_program(vec![vertex, fragment]).map_err(|log| ShaderError::Link { log });

    delete_shader(vertex);
    delete_shader(fragment);
    program
}
