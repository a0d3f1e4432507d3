#![allow(unsafe_code)]

use gl::{
    types::{GLchar, GLenum, GLint, GLuint},
    INFO_LOG_LENGTH, LINK_STATUS,
};
use std::ffi::CString;

/// Check for OpenGL error and report it using `log::error`.
///
/// Only active in debug builds!
#[macro_export]
macro_rules! check_for_gl_error {
    () => {{
        if cfg!(debug_assertions) {
            $crate::gl_utils::check_for_gl_error_impl(file!(), line!(), "")
        }
    }};
    ($context: literal) => {{
        if cfg!(debug_assertions) {
            $crate::gl_utils::check_for_gl_error_impl(file!(), line!(), $context)
        }
    }};
}

#[doc(hidden)]
pub fn check_for_gl_error_impl(file: &str, line: u32, context: &str) {
    let error_code = unsafe { gl::GetError() };
    if error_code != gl::NO_ERROR {
        let error_str = match error_code {
            gl::INVALID_ENUM => "GL_INVALID_ENUM",
            gl::INVALID_VALUE => "GL_INVALID_VALUE",
            gl::INVALID_OPERATION => "GL_INVALID_OPERATION",
            gl::STACK_OVERFLOW => "GL_STACK_OVERFLOW",
            gl::STACK_UNDERFLOW => "GL_STACK_UNDERFLOW",
            gl::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
            gl::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
            gl::CONTEXT_LOST => "GL_CONTEXT_LOST",
            _ => "<unknown>",
        };

        if context.is_empty() {
            log::error!("GL error, at {}:{}: {} (0x{:X})", file, line, error_str, error_code);
        } else {
            log::error!(
                "GL error, at {}:{} ({}): {} (0x{:X})",
                file,
                line,
                context,
                error_str,
                error_code,
            );
        }
    }
}

pub unsafe fn create_shader(shader_type: GLenum) -> Result<GLuint, String> {
    let shader = gl::CreateShader(shader_type);
    if shader == 0 {
        Err(format!("glCreateShader(0x{:X}) returned 0", shader_type))
    } else {
        Ok(shader)
    }
}

pub unsafe fn shader_source(shader: GLuint, source: &str) {
    gl::ShaderSource(
        shader,
        1,
        &(source.as_ptr() as *const GLchar),
        &(source.len() as GLint),
    );
}

pub unsafe fn get_shader_compile_status(shader: GLuint) -> bool {
    let mut status = gl::FALSE as GLint;
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status);
    status == gl::TRUE as GLint
}

pub unsafe fn get_shader_info_log(shader: GLuint) -> String {
    let mut length = 0;
    gl::GetShaderiv(shader, INFO_LOG_LENGTH, &mut length);
    if length > 0 {
        let mut buf = vec![0u8; length as usize];
        gl::GetShaderInfoLog(shader, length, &mut length, buf.as_mut_ptr() as *mut GLchar);
        buf.truncate(length.max(0) as usize);
        info_log_to_string(buf)
    } else {
        String::new()
    }
}

pub unsafe fn delete_shader(shader: GLuint) {
    gl::DeleteShader(shader);
}

pub unsafe fn create_program() -> Result<GLuint, String> {
    let program = gl::CreateProgram();
    if program == 0 {
        Err("glCreateProgram returned 0".to_owned())
    } else {
        Ok(program)
    }
}

pub unsafe fn attach_shader(program: GLuint, shader: GLuint) {
    gl::AttachShader(program, shader);
}

pub unsafe fn get_program_link_status(program: GLuint) -> bool {
    let mut status = gl::FALSE as GLint;
    gl::GetProgramiv(program, LINK_STATUS, &mut status);
    status == gl::TRUE as GLint
}

pub unsafe fn get_program_info_log(program: GLuint) -> String {
    let mut length = 0;
    gl::GetProgramiv(program, INFO_LOG_LENGTH, &mut length);
    if length > 0 {
        let mut buf = vec![0u8; length as usize];
        gl::GetProgramInfoLog(program, length, &mut length, buf.as_mut_ptr() as *mut GLchar);
        buf.truncate(length.max(0) as usize);
        info_log_to_string(buf)
    } else {
        String::new()
    }
}

pub unsafe fn delete_program(program: GLuint) {
    gl::DeleteProgram(program);
}

pub unsafe fn use_program(program: GLuint) {
    gl::UseProgram(program);
}

/// The program bound by the last `glUseProgram`, or 0 when none is.
pub unsafe fn current_program() -> GLuint {
    let mut value = 0;
    gl::GetIntegerv(gl::CURRENT_PROGRAM, &mut value);
    value as GLuint
}

pub unsafe fn get_uniform_location(program: GLuint, name: &str) -> Option<GLint> {
    let name = uniform_name(name)?;
    let uniform_location = gl::GetUniformLocation(program, name.as_ptr());
    if uniform_location < 0 {
        None
    } else {
        Some(uniform_location)
    }
}

/// Uniform names with an interior NUL can never match a GLSL identifier.
fn uniform_name(name: &str) -> Option<CString> {
    CString::new(name).ok()
}

/// Some drivers count the terminating NUL in the reported length, some don't.
fn info_log_to_string(mut buf: Vec<u8>) -> String {
    while buf.last() == Some(&0) {
        buf.pop();
    }
    String::from_utf8_lossy(&buf).trim_end().to_owned()
}
