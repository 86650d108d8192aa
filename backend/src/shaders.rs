use super::glutils::*;
use super::math::*;
use crate::error::{BackendError, Result};
use gl::{types::*, *};
use std::ffi::CString;

/// Resolved location of an active uniform.
#[derive(Debug, Clone, Copy)]
pub struct Uniform(i32);

pub struct Shaders {
    program_id: u32,
}

impl Shaders {
    pub fn from_source(vertex_code: &str, fragment_code: &str) -> Result<Shaders> {
        let vertex_shader = Self::create(VERTEX_SHADER, "vertex", vertex_code)?;
        let fragment_shader = match Self::create(FRAGMENT_SHADER, "fragment", fragment_code) {
            Ok(s) => s,
            Err(e) => {
                unsafe { gl::DeleteShader(vertex_shader) };
                return Err(e);
            }
        };

        // create program and link shaders
        let shader_program = unsafe { gl::CreateProgram() };
        unsafe { gl::AttachShader(shader_program, vertex_shader) };
        unsafe { gl::AttachShader(shader_program, fragment_shader) };
        unsafe { gl::LinkProgram(shader_program) };

        // not needed anymore
        unsafe { gl::DeleteShader(vertex_shader) };
        unsafe { gl::DeleteShader(fragment_shader) };

        let mut success = 0;
        unsafe {
            gl::GetProgramiv(shader_program, LINK_STATUS, &mut success);
        }
        if success == 0 {
            let mut v: Vec<u8> = Vec::with_capacity(1024);
            let mut log_len = 0_i32;
            unsafe {
                gl::GetProgramInfoLog(shader_program, 1024, &mut log_len, v.as_mut_ptr().cast());
                v.set_len(log_len.max(0) as usize);
                gl::DeleteProgram(shader_program);
            }
            return Err(BackendError::Shader(format!(
                "program link error: {}",
                String::from_utf8_lossy(&v)
            )));
        }

        Ok(Shaders {
            program_id: shader_program,
        })
    }

    fn create(kind: GLenum, label: &str, shader_code: &str) -> Result<u32> {
        let shader_id = unsafe { gl::CreateShader(kind) };
        if shader_id == 0 {
            return Err(BackendError::Shader(format!(
                "gl::CreateShader({label}) failed"
            )));
        }

        unsafe {
            gl::ShaderSource(
                shader_id,
                1,
                &(shader_code.as_bytes().as_ptr().cast()),
                &(shader_code.len() as i32),
            );
            gl::CompileShader(shader_id);
        }

        // check if there are compilation errors
        let mut success = 0;
        unsafe {
            gl::GetShaderiv(shader_id, COMPILE_STATUS, &mut success);
        }

        if success == 0 {
            let mut v: Vec<u8> = Vec::with_capacity(1024);
            let mut log_len = 0_i32;
            unsafe {
                gl::GetShaderInfoLog(shader_id, 1024, &mut log_len, v.as_mut_ptr().cast());
                v.set_len(log_len.max(0) as usize);
                gl::DeleteShader(shader_id);
            }

            return Err(BackendError::Shader(format!(
                "{label} shader compilation error: {}",
                String::from_utf8_lossy(&v)
            )));
        }
        Ok(shader_id)
    }

    pub fn uniform(&self, name: &str) -> Result<Uniform> {
        let c_name = CString::new(name)
            .map_err(|_| BackendError::Shader(format!("invalid uniform name '{name}'")))?;
        let location = unsafe { gl::GetUniformLocation(self.program_id, c_name.as_ptr().cast()) };
        if location == -1 {
            return Err(BackendError::Shader(format!(
                "program({}): '{}' is not an active uniform",
                self.program_id, name
            )));
        }
        Ok(Uniform(location))
    }

    pub fn use_program(&self) {
        unsafe { gl::UseProgram(self.program_id) };
        if let Some(err) = gl_error() {
            log::warn!("glUseProgram({}) raised {err:#x}", self.program_id);
        }
    }

    pub fn set_bool(&self, uniform: Uniform, value: bool) {
        unsafe { gl::Uniform1i(uniform.0, i32::from(value)) };
    }

    pub fn set_i32(&self, uniform: Uniform, value: i32) {
        unsafe { gl::Uniform1i(uniform.0, value) };
    }

    pub fn set_vec4(&self, uniform: Uniform, v: [f32; 4]) {
        unsafe { gl::Uniform4f(uniform.0, v[0], v[1], v[2], v[3]) };
    }

    pub fn set_mat4fv(&self, uniform: Uniform, mat: &Mat4x4) {
        let arr = mat.to_cols_array();
        unsafe { gl::UniformMatrix4fv(uniform.0, 1, FALSE, arr.as_ptr()) };
    }
}

impl Drop for Shaders {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.program_id) };
    }
}
