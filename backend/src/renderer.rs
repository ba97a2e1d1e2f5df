//! Immediate-mode quad drawing: filled rectangles and texture blits in
//! window pixel coordinates.

use super::glutils::*;
use super::math::*;
use super::shaders::Shaders;
use gl::*;

const QUAD_VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec2 a_pos;

uniform mat4 projection;
uniform vec4 rect;

out vec2 tex_coord;

void main() {
    vec2 pos = rect.xy + a_pos * rect.zw;
    gl_Position = projection * vec4(pos, 0.0, 1.0);
    tex_coord = a_pos;
}
"#;

const QUAD_FRAGMENT_SHADER: &str = r#"#version 330 core
in vec2 tex_coord;

uniform vec4 color;
uniform bool use_texture;
uniform sampler2D tex;

out vec4 frag_color;

void main() {
    if (use_texture) {
        frag_color = texture(tex, tex_coord);
    } else {
        frag_color = color;
    }
}
"#;

// unit square as a triangle strip
const UNIT_QUAD: [f32; 8] = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgba(0x00, 0x00, 0x00, 0xFF);
    pub const GREEN: Color = Color::rgba(0x00, 0xFF, 0x00, 0xFF);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        )
    }
}

pub struct QuadRenderer {
    shaders: Shaders,
    vao: u32,
    vbo: u32,
}

impl QuadRenderer {
    /// Builds the quad program and geometry for a `width` x `height` pixel
    /// viewport. Requires a current GL context.
    pub fn new(width: u32, height: u32) -> Result<QuadRenderer, String> {
        let shaders = Shaders::from_str(QUAD_VERTEX_SHADER, QUAD_FRAGMENT_SHADER)?;

        let mut vao = 0;
        let mut vbo = 0;
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);
            gl::BindVertexArray(vao);
            gl::BindBuffer(ARRAY_BUFFER, vbo);
        }
        gl_buffer_data_arr_stat(&UNIT_QUAD);
        gl_vertex_attrib_ptr_enab(0, 2, 2, 0);
        unsafe { gl::BindVertexArray(0) };
        check_gl_err();

        let renderer = QuadRenderer { shaders, vao, vbo };
        renderer.set_viewport(width, height);
        renderer.shaders.set_i32("tex", 0);

        unsafe {
            gl::Enable(BLEND);
            gl::BlendFunc(SRC_ALPHA, ONE_MINUS_SRC_ALPHA);
        }
        check_gl_err();

        Ok(renderer)
    }

    pub fn set_viewport(&self, width: u32, height: u32) {
        unsafe { gl::Viewport(0, 0, width as i32, height as i32) };
        let projection = Mat4x4::ortho(0.0, width as f32, height as f32, 0.0, -1.0, 1.0);
        self.shaders.use_program();
        self.shaders.set_mat4fv("projection", &projection);
    }

    pub fn fill_rects(&self, rects: impl IntoIterator<Item = Rect>, color: Color) {
        self.shaders.use_program();
        self.shaders.set_bool("use_texture", false);
        self.shaders.set_vec4("color", color.to_vec4());
        for rect in rects {
            self.draw(rect);
        }
    }

    /// Stretches the whole texture over `dst`.
    pub fn copy(&self, texture: &Texture, dst: Rect) {
        self.shaders.use_program();
        self.shaders.set_bool("use_texture", true);
        texture.bind(0);
        self.draw(dst);
    }

    fn draw(&self, rect: Rect) {
        self.shaders.set_vec4("rect", rect.to_vec4());
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(TRIANGLE_STRIP, 0, 4);
            gl::BindVertexArray(0);
        }
    }
}

impl Drop for QuadRenderer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
        self.shaders.delete();
    }
}
