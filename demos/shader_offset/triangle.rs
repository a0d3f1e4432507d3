// A single triangle with per-vertex colours, drawn with whatever program
// is active.

use learngl_sdl2::gl;
use learngl_sdl2::gl::types::*;
use std::mem;
use std::ptr;

#[rustfmt::skip]
static VERTEX_DATA: [GLfloat; 18] = [
    // position         // colour
     0.5, -0.5, 0.0,    1.0, 0.0, 0.0, // bottom right
    -0.5, -0.5, 0.0,    0.0, 1.0, 0.0, // bottom left
     0.0,  0.5, 0.0,    0.0, 0.0, 1.0, // top
];

const STRIDE: GLsizei = 6 * mem::size_of::<GLfloat>() as GLsizei;

pub struct Triangle {
    pub vao: GLuint,
    pub vbo: GLuint,
}

impl Triangle {
    pub fn new() -> Self {
        let mut vao = 0;
        let mut vbo = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                mem::size_of_val(&VERTEX_DATA) as GLsizeiptr,
                VERTEX_DATA.as_ptr() as *const _,
                gl::STATIC_DRAW,
            );

            // location 0: position
            gl::VertexAttribPointer(0, 3, gl::FLOAT, gl::FALSE, STRIDE, ptr::null());
            gl::EnableVertexAttribArray(0);
            // location 1: colour
            gl::VertexAttribPointer(
                1,
                3,
                gl::FLOAT,
                gl::FALSE,
                STRIDE,
                (3 * mem::size_of::<GLfloat>()) as *const _,
            );
            gl::EnableVertexAttribArray(1);

            gl::BindVertexArray(0);
        }
        Triangle { vao, vbo }
    }

    pub fn draw(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(gl::TRIANGLES, 0, 3);
            gl::BindVertexArray(0);
        }
    }
}

impl Drop for Triangle {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}
