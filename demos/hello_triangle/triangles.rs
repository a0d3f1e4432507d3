// Two triangles side by side, each with its own VAO/VBO pair.

use learngl_sdl2::gl;
use learngl_sdl2::gl::types::*;
use std::mem;

#[rustfmt::skip]
static VERTEX_DATA: [GLfloat; 18] = [
    // first triangle
    -1.0, 0.0, 0.0,
     0.0, 0.0, 0.0,
    -0.5, 0.5, 0.0,
    // second triangle
     0.0, 0.0, 0.0,
     1.0, 0.0, 0.0,
     0.5, 0.5, 0.0,
];

const FLOATS_PER_TRIANGLE: usize = 9;

pub struct Triangles {
    pub vaos: [GLuint; 2],
    pub vbos: [GLuint; 2],
}

impl Triangles {
    pub fn new() -> Self {
        let mut vaos = [0; 2];
        let mut vbos = [0; 2];
        unsafe {
            gl::GenVertexArrays(2, vaos.as_mut_ptr());
            gl::GenBuffers(2, vbos.as_mut_ptr());

            for (i, (&vao, &vbo)) in vaos.iter().zip(vbos.iter()).enumerate() {
                gl::BindVertexArray(vao);
                gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
                gl::BufferData(
                    gl::ARRAY_BUFFER,
                    mem::size_of_val(&VERTEX_DATA) as GLsizeiptr,
                    VERTEX_DATA.as_ptr() as *const _,
                    gl::STATIC_DRAW,
                );
                // Both buffers hold all six vertices; the attribute offset picks the half.
                let offset = i * FLOATS_PER_TRIANGLE * mem::size_of::<GLfloat>();
                gl::VertexAttribPointer(
                    0,
                    3,
                    gl::FLOAT,
                    gl::FALSE,
                    3 * mem::size_of::<GLfloat>() as GLsizei,
                    offset as *const _,
                );
                gl::EnableVertexAttribArray(0);
            }

            gl::BindVertexArray(0);
        }
        Triangles { vaos, vbos }
    }

    pub fn draw(&self, index: usize) {
        unsafe {
            gl::BindVertexArray(self.vaos[index]);
            gl::DrawArrays(gl::TRIANGLES, 0, 3);
            gl::BindVertexArray(0);
        }
    }
}

impl Drop for Triangles {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(2, self.vbos.as_ptr());
            gl::DeleteVertexArrays(2, self.vaos.as_ptr());
        }
    }
}
