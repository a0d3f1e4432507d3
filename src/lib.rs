#![warn(clippy::all)]
#![allow(clippy::missing_safety_doc)]

// Re-export dependencies.
pub use gl;
pub use sdl2;

mod config;
mod error;
pub mod gl_utils;
mod misc_util;
mod shader;

pub use config::ShaderDir;
pub use error::{ShaderError, ShaderStage};
pub use shader::ShaderProgram;

/// Loads GL function pointers through SDL2.
///
/// Call once after `window.gl_create_context()` and before creating any
/// [`ShaderProgram`].
pub fn load_gl(video_subsystem: &sdl2::VideoSubsystem) {
    gl::load_with(|name| video_subsystem.gl_get_proc_address(name) as *const _);
    let (major, minor) = video_subsystem.gl_attr().context_version();
    log::debug!("loaded GL {}.{} function pointers", major, minor);
}
