//! Two triangles drawn with two programs that share a vertex shader.

use learngl_sdl2::sdl2::event::Event;
use learngl_sdl2::sdl2::keyboard::Keycode;
use learngl_sdl2::sdl2::video::GLProfile;
use learngl_sdl2::{gl, sdl2, ShaderProgram};

const SCREEN_WIDTH: u32 = 800;
const SCREEN_HEIGHT: u32 = 600;
mod triangles;

const VS_SRC: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
    gl_PointSize = 50.0;
}";

const ORANGE_FS_SRC: &str = "#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}";

const YELLOW_FS_SRC: &str = "#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0, 1.0, 0.7, 1.0);
}";

fn main() {
    env_logger::init();

    let sdl_context = sdl2::init().unwrap();
    let video_subsystem = sdl_context.video().unwrap();

    let gl_attr = video_subsystem.gl_attr();
    gl_attr.set_context_profile(GLProfile::Core);
    gl_attr.set_context_version(3, 3);

    let window = video_subsystem
        .window("LearnOpenGL: hello triangle", SCREEN_WIDTH, SCREEN_HEIGHT)
        .opengl()
        .build()
        .unwrap();

    let _ctx = window.gl_create_context().unwrap();
    learngl_sdl2::load_gl(&video_subsystem);

    unsafe {
        gl::Viewport(0, 0, SCREEN_WIDTH as i32, SCREEN_HEIGHT as i32);
        gl::Enable(gl::PROGRAM_POINT_SIZE);
    }

    // A broken program is logged and skipped; the other one still draws.
    let programs = [
        ShaderProgram::from_sources(VS_SRC, ORANGE_FS_SRC).ok(),
        ShaderProgram::from_sources(VS_SRC, YELLOW_FS_SRC).ok(),
    ];

    let triangles = triangles::Triangles::new();
    let mut event_pump = sdl_context.event_pump().unwrap();

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                _ => {}
            }
        }

        unsafe {
            gl::ClearColor(0.2, 0.3, 0.2, 0.8);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }

        for (index, program) in programs.iter().enumerate() {
            if let Some(program) = program {
                program.use_program();
                triangles.draw(index);
            }
        }

        window.gl_swap_window();
        std::thread::sleep(::std::time::Duration::new(0, 1_000_000_000u32 / 60));
    }
}
