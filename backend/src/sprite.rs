use crate::color::Color;
use crate::error::Result;
use crate::geometry::Rect;
use crate::glutils::*;
use crate::math::Mat4x4;
use crate::shaders::{Shaders, Uniform};
use gl::*;

const SPRITE_VS: &str = r#"#version 330 core
layout (location = 0) in vec2 a_pos;

uniform mat4 u_projection;
uniform vec4 u_rect;

out vec2 v_uv;

void main() {
    v_uv = a_pos;
    gl_Position = u_projection * vec4(u_rect.xy + a_pos * u_rect.zw, 0.0, 1.0);
}
"#;

const SPRITE_FS: &str = r#"#version 330 core
in vec2 v_uv;

uniform bool u_textured;
uniform vec4 u_color;
uniform sampler2D u_texture;

out vec4 frag_color;

void main() {
    if (u_textured) {
        frag_color = texture(u_texture, v_uv);
    } else {
        frag_color = u_color;
    }
}
"#;

// Unit square walked in outline order so the same buffer serves both
// TRIANGLE_FAN fills and LINE_LOOP outlines.
const UNIT_QUAD: [f32; 8] = [0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0];

/// Draws axis-aligned textured quads and rectangle outlines in pixel coordinates.
pub struct SpriteRenderer {
    shaders: Shaders,
    vao: u32,
    vbo: u32,
    u_projection: Uniform,
    u_rect: Uniform,
    u_textured: Uniform,
    u_color: Uniform,
}

impl SpriteRenderer {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let shaders = Shaders::from_source(SPRITE_VS, SPRITE_FS)?;
        let u_projection = shaders.uniform("u_projection")?;
        let u_rect = shaders.uniform("u_rect")?;
        let u_textured = shaders.uniform("u_textured")?;
        let u_color = shaders.uniform("u_color")?;
        let u_texture = shaders.uniform("u_texture")?;

        let (mut vao, mut vbo) = (0, 0);
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);
            gl::BindVertexArray(vao);
            gl::BindBuffer(ARRAY_BUFFER, vbo);
        }
        gl_buffer_data_arr_stat(&UNIT_QUAD);
        gl_vertex_attrib_ptr_enab(0, 2, 2, 0);
        unsafe { gl::BindVertexArray(0) };

        shaders.use_program();
        shaders.set_i32(u_texture, 0);

        let renderer = Self {
            shaders,
            vao,
            vbo,
            u_projection,
            u_rect,
            u_textured,
            u_color,
        };
        renderer.set_viewport(width, height);

        unsafe {
            gl::Enable(BLEND);
            gl::BlendFunc(SRC_ALPHA, ONE_MINUS_SRC_ALPHA);
        }
        Ok(renderer)
    }

    pub fn set_viewport(&self, width: u32, height: u32) {
        unsafe { gl::Viewport(0, 0, width as i32, height as i32) };
        self.shaders.use_program();
        self.shaders
            .set_mat4fv(self.u_projection, &Mat4x4::screen(width as f32, height as f32));
    }

    fn prepare(&self, rect: [f32; 4]) {
        self.shaders.use_program();
        self.shaders.set_vec4(self.u_rect, rect);
        unsafe { gl::BindVertexArray(self.vao) };
    }

    pub fn clear(&self, color: Color) {
        let [r, g, b, a] = color.to_f32();
        unsafe {
            gl::ClearColor(r, g, b, a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    pub fn draw_texture(&self, texture: &Texture, dst: &Rect) {
        self.prepare([dst.x as f32, dst.y as f32, dst.w as f32, dst.h as f32]);
        self.shaders.set_bool(self.u_textured, true);
        unsafe { gl::ActiveTexture(TEXTURE0) };
        texture.bind();
        unsafe { gl::DrawArrays(TRIANGLE_FAN, 0, 4) };
    }

    pub fn draw_rect(&self, rect: &Rect, color: Color) {
        // Outline runs through pixel centres: half a pixel in, one pixel short.
        self.prepare([
            rect.x as f32 + 0.5,
            rect.y as f32 + 0.5,
            rect.w.saturating_sub(1) as f32,
            rect.h.saturating_sub(1) as f32,
        ]);
        self.shaders.set_bool(self.u_textured, false);
        self.shaders.set_vec4(self.u_color, color.to_f32());
        unsafe { gl::DrawArrays(LINE_LOOP, 0, 4) };
    }
}

impl Drop for SpriteRenderer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}
