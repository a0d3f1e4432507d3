#![allow(unsafe_code)]

use gl::types::{GLenum, GLuint};

use crate::gl_utils::{
    attach_shader, create_program, create_shader, delete_program, delete_shader,
    get_program_info_log, get_program_link_status, get_shader_compile_status,
    get_shader_info_log, shader_source,
};

/// Compiles one stage. On failure the shader object is deleted and the
/// driver's info log is returned.
pub(crate) unsafe fn compile_shader(shader_type: GLenum, source: &str) -> Result<GLuint, String> {
    let shader = create_shader(shader_type)?;

    shader_source(shader, source);

    gl::CompileShader(shader);

    if get_shader_compile_status(shader) {
        Ok(shader)
    } else {
        let log = get_shader_info_log(shader);
        delete_shader(shader);
        Err(log)
    }
}

/// Attaches and links `shaders` into a new program. The shaders stay owned
/// by the caller; on failure the program object is deleted.
pub(crate) unsafe fn link_program<T: IntoIterator<Item = GLuint>>(
    shaders: T,
) -> Result<GLuint, String> {
    let program = create_program()?;

    for shader in shaders {
        attach_shader(program, shader);
    }

    gl::LinkProgram(program);

    if get_program_link_status(program) {
        Ok(program)
    } else {
        let log = get_program_info_log(program);
        delete_program(program);
        Err(log)
    }
}
