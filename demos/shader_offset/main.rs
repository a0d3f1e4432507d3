//! Loads its shaders from `<dir>/shader/{vertex,fragment}.glsl` and slides
//! the triangle sideways through the `xOffset` uniform.
//!
//! `cargo run --example shader_offset -- <dir>` (defaults to `demos/`).

use learngl_sdl2::sdl2::event::Event;
use learngl_sdl2::sdl2::keyboard::Keycode;
use learngl_sdl2::sdl2::video::GLProfile;
use learngl_sdl2::{gl, sdl2, ShaderDir, ShaderProgram};
use std::time::Instant;

const SCREEN_WIDTH: u32 = 800;
const SCREEN_HEIGHT: u32 = 600;
mod triangle;

fn main() {
    env_logger::init();

    let shader_dir = ShaderDir::from_args_or(concat!(env!("CARGO_MANIFEST_DIR"), "/demos"));

    let sdl_context = sdl2::init().unwrap();
    let video_subsystem = sdl_context.video().unwrap();

    let gl_attr = video_subsystem.gl_attr();
    gl_attr.set_context_profile(GLProfile::Core);
    gl_attr.set_context_version(3, 3);

    let window = video_subsystem
        .window("LearnOpenGL: shader offset", SCREEN_WIDTH, SCREEN_HEIGHT)
        .opengl()
        .resizable()
        .build()
        .unwrap();

    let _ctx = window.gl_create_context().unwrap();
    learngl_sdl2::load_gl(&video_subsystem);

    debug_assert_eq!(gl_attr.context_profile(), GLProfile::Core);

    unsafe {
        gl::Viewport(0, 0, SCREEN_WIDTH as i32, SCREEN_HEIGHT as i32);
        gl::Enable(gl::PROGRAM_POINT_SIZE);
    }

    // The diagnostic has already been logged.
    let shader = match ShaderProgram::from_files(
        &shader_dir,
        "./shader/vertex.glsl",
        "./shader/fragment.glsl",
    ) {
        Ok(shader) => shader,
        Err(_) => std::process::exit(1),
    };

    let triangle = triangle::Triangle::new();
    let start_time = Instant::now();
    let mut event_pump = sdl_context.event_pump().unwrap();

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::Window {
                    win_event: sdl2::event::WindowEvent::SizeChanged(width, height),
                    ..
                } => unsafe { gl::Viewport(0, 0, width, height) },
                _ => {}
            }
        }

        unsafe {
            gl::ClearColor(0.2, 0.3, 0.2, 0.8);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        let x_offset = 0.5 * start_time.elapsed().as_secs_f32().sin();
        shader.use_program();
        shader.set_float("xOffset", x_offset);
        triangle.draw();

        window.gl_swap_window();
        std::thread::sleep(::std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }
}
