//! These need a display and an OpenGL 3.3 core driver:
//! `cargo test -- --ignored`.
//!
//! SDL may only be initialised from one thread, so everything runs inside a
//! single test against a single context.

use learngl_sdl2::sdl2::video::{GLContext, GLProfile, Window};
use learngl_sdl2::{gl, sdl2, ShaderDir, ShaderError, ShaderProgram, ShaderStage};

const VS_SRC: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
uniform float xOffset;
void main()
{
    gl_Position = vec4(aPos.x + xOffset, aPos.y, aPos.z, 1.0);
}";

const FS_SRC: &str = "#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}";

const BROKEN_VS_SRC: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
    gl_Position = vec4(aPos, 1.0)
}";

const BROKEN_FS_SRC: &str = "#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0, 0.5, 0.2);
}";

// Compiles on its own, but there is nothing to link as the entry point.
const NO_MAIN_VS_SRC: &str = "#version 330 core
void not_main()
{
    gl_Position = vec4(0.0);
}";

struct Headless {
    _sdl: sdl2::Sdl,
    _window: Window,
    _ctx: GLContext,
}

fn headless_context() -> Headless {
    let sdl = sdl2::init().unwrap();
    let video = sdl.video().unwrap();
    let gl_attr = video.gl_attr();
    gl_attr.set_context_profile(GLProfile::Core);
    gl_attr.set_context_version(3, 3);

    let window = video.window("shader tests", 64, 64).opengl().hidden().build().unwrap();
    let ctx = window.gl_create_context().unwrap();
    learngl_sdl2::load_gl(&video);

    Headless { _sdl: sdl, _window: window, _ctx: ctx }
}

fn gl_error() -> gl::types::GLenum {
    unsafe { gl::GetError() }
}

#[test]
#[ignore = "requires an OpenGL 3.3 context"]
fn shader_program_against_a_real_context() {
    let _headless = headless_context();

    valid_sources_link();
    vertex_syntax_error_is_reported();
    fragment_syntax_error_is_reported();
    link_failure_is_reported();
    use_program_makes_it_current();
    missing_uniform_is_a_no_op();
    set_float_uploads_value();
    from_files_resolves_against_dir();
    drop_deletes_program();
}

fn valid_sources_link() {
    let program = ShaderProgram::from_sources(VS_SRC, FS_SRC).unwrap();
    assert_ne!(program.id(), 0);
    assert_eq!(gl_error(), gl::NO_ERROR);
}

fn vertex_syntax_error_is_reported() {
    let err = ShaderProgram::from_sources(BROKEN_VS_SRC, FS_SRC).err().unwrap();
    assert_eq!(err.stage(), Some(ShaderStage::Vertex));
    match &err {
        ShaderError::Compile { log, .. } => assert!(!log.is_empty()),
        other => panic!("expected a compile error, got {}", other),
    }
    assert!(err.diagnostic().contains("VERTEX"));
}

fn fragment_syntax_error_is_reported() {
    let err = ShaderProgram::from_sources(VS_SRC, BROKEN_FS_SRC).err().unwrap();
    assert_eq!(err.stage(), Some(ShaderStage::Fragment));
    assert!(err.diagnostic().contains("FRAGMENT::COMPILATION_FAILED"));
}

fn link_failure_is_reported() {
    let err = ShaderProgram::from_sources(NO_MAIN_VS_SRC, FS_SRC).err().unwrap();
    match err {
        ShaderError::Link { .. } => {}
        other => panic!("expected a link error, got {}", other),
    }
}

fn use_program_makes_it_current() {
    let first = ShaderProgram::from_sources(VS_SRC, FS_SRC).unwrap();
    let second = ShaderProgram::from_sources(VS_SRC, FS_SRC).unwrap();

    first.use_program();
    assert!(first.is_active());
    assert!(!second.is_active());

    second.use_program();
    assert!(second.is_active());
    assert!(!first.is_active());

    unsafe { gl::UseProgram(0) };
}

fn missing_uniform_is_a_no_op() {
    let program = ShaderProgram::from_sources(VS_SRC, FS_SRC).unwrap();
    program.use_program();

    assert_eq!(program.uniform_location("doesNotExist"), None);
    program.set_float("doesNotExist", 1.0);
    program.set_float("bad\0name", 1.0);
    program.set_vec4("doesNotExist", [0.0; 4]);
    assert_eq!(gl_error(), gl::NO_ERROR);

    unsafe { gl::UseProgram(0) };
}

fn set_float_uploads_value() {
    let program = ShaderProgram::from_sources(VS_SRC, FS_SRC).unwrap();
    program.use_program();
    program.set_float("xOffset", 0.25);

    let location = program.uniform_location("xOffset").unwrap();
    let mut value = 0.0f32;
    unsafe { gl::GetUniformfv(program.id(), location, &mut value) };
    assert_eq!(value, 0.25);
    assert_eq!(gl_error(), gl::NO_ERROR);

    unsafe { gl::UseProgram(0) };
}

fn from_files_resolves_against_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("shader")).unwrap();
    std::fs::write(dir.path().join("shader/vertex.glsl"), VS_SRC).unwrap();
    std::fs::write(dir.path().join("shader/fragment.glsl"), FS_SRC).unwrap();

    let program = ShaderProgram::from_files(
        &ShaderDir::new(dir.path()),
        "./shader/vertex.glsl",
        "./shader/fragment.glsl",
    )
    .unwrap();
    assert!(program.uniform_location("xOffset").is_some());
}

fn drop_deletes_program() {
    let program = ShaderProgram::from_sources(VS_SRC, FS_SRC).unwrap();
    let id = program.id();
    assert_eq!(unsafe { gl::IsProgram(id) }, gl::TRUE);
    drop(program);
    assert_eq!(unsafe { gl::IsProgram(id) }, gl::FALSE);
}

#[test]
fn demo_shaders_declare_the_offset_uniform() {
    let dir = ShaderDir::new(concat!(env!("CARGO_MANIFEST_DIR"), "/demos"));
    let vertex = std::fs::read_to_string(dir.resolve("./shader/vertex.glsl")).unwrap();
    let fragment = std::fs::read_to_string(dir.resolve("./shader/fragment.glsl")).unwrap();
    assert!(vertex.contains("uniform float xOffset;"));
    assert!(vertex.starts_with("#version 330 core"));
    assert!(fragment.starts_with("#version 330 core"));
}
