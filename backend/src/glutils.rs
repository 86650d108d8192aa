use crate::error::{BackendError, Result};
use gl::{types::*, *};

pub fn gl_error() -> Option<GLenum> {
    let err = unsafe { gl::GetError() };
    if err == gl::NO_ERROR {
        return None;
    }
    Some(err)
}

// GL keeps a bounded set of error flags; a context that keeps raising is lost anyway.
const MAX_PENDING_ERRORS: usize = 32;

/// Pulls error flags from `poll` until it reports none. Returns how many were discarded.
pub fn drain_errors(mut poll: impl FnMut() -> Option<GLenum>) -> usize {
    let mut drained = 0;
    while drained < MAX_PENDING_ERRORS {
        match poll() {
            Some(err) => {
                log::debug!("discarding stale GL error {err:#x}");
                drained += 1;
            }
            None => break,
        }
    }
    drained
}

pub fn clear_gl_errors() -> usize {
    drain_errors(gl_error)
}

pub fn log_opengl_info() {
    let mut mtu: i32 = 0;
    unsafe { gl::GetIntegerv(MAX_TEXTURE_IMAGE_UNITS, &mut mtu) };
    log::debug!("MAX_TEXTURE_IMAGE_UNITS = {}", mtu);

    let mut max_size: i32 = 0;
    unsafe { gl::GetIntegerv(MAX_TEXTURE_SIZE, &mut max_size) };
    log::debug!("MAX_TEXTURE_SIZE = {}", max_size);
}

pub fn gl_buffer_data_arr_stat<T: Sized>(buffer: &[T]) {
    unsafe {
        gl::BufferData(
            ARRAY_BUFFER,
            std::mem::size_of_val(buffer) as isize,
            buffer.as_ptr().cast(),
            STATIC_DRAW,
        )
    };
}

pub fn gl_vertex_attrib_ptr_enab(index: u32, size: u32, stride: u32, pointer: usize) {
    unsafe {
        gl::VertexAttribPointer(
            index,
            size as i32,
            FLOAT,
            FALSE,
            (stride as usize * std::mem::size_of::<f32>()) as i32,
            (pointer * std::mem::size_of::<f32>()) as *const _,
        )
    };
    unsafe { gl::EnableVertexAttribArray(index) };
}

/// A GL texture owned for as long as this value lives.
#[derive(Debug)]
pub struct Texture {
    id: u32,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    pub fn bind(&self) {
        unsafe { gl::BindTexture(TEXTURE_2D, self.id) };
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        log::debug!("releasing texture {}", self.id);
        unsafe { gl::DeleteTextures(1, &self.id) };
    }
}

/// Loads a sprite texture. Rows stay top-down, which matches the
/// y-down screen projection used by the sprite renderer.
pub fn load_texture(filename: &str) -> Result<Texture> {
    let params = [
        (TEXTURE_2D, TEXTURE_WRAP_S, CLAMP_TO_EDGE),
        (TEXTURE_2D, TEXTURE_WRAP_T, CLAMP_TO_EDGE),
        (TEXTURE_2D, TEXTURE_MIN_FILTER, NEAREST),
        (TEXTURE_2D, TEXTURE_MAG_FILTER, NEAREST),
    ];
    load_texture_params(filename, &params, false)
}

pub fn load_texture_params(
    filename: &str,
    params: &[(GLenum, GLenum, GLenum)],
    flip_vertically: bool,
) -> Result<Texture> {
    let texture_err = |reason: String| BackendError::Texture {
        path: filename.to_string(),
        reason,
    };

    unsafe {
        stb_image::stb_image::stbi_set_flip_vertically_on_load(i32::from(flip_vertically));
    }
    let img = match stb_image::image::load(filename) {
        stb_image::image::LoadResult::ImageF32(_) => {
            return Err(texture_err("32-bit images not supported here".to_string()));
        }
        stb_image::image::LoadResult::ImageU8(img) => img,
        stb_image::image::LoadResult::Error(e) => return Err(texture_err(e)),
    };

    let format = match img.depth {
        1 => RED,
        3 => RGB,
        4 => RGBA,
        d => return Err(texture_err(format!("unsupported channel count {d}"))),
    };

    let mut texture = Texture {
        id: 0,
        width: img.width as u32,
        height: img.height as u32,
    };
    clear_gl_errors();
    unsafe { gl::GenTextures(1, &mut texture.id) };
    texture.bind();

    for (t, n, p) in params {
        unsafe { gl::TexParameteri(*t, *n, *p as i32) };
    }

    unsafe {
        gl::PixelStorei(UNPACK_ALIGNMENT, 1);
        gl::TexImage2D(
            TEXTURE_2D,
            0,
            RGBA as i32,
            img.width as i32,
            img.height as i32,
            0,
            format,
            UNSIGNED_BYTE,
            img.data.as_ptr().cast(),
        )
    };
    if let Some(err) = gl_error() {
        return Err(texture_err(format!("glTexImage2D failed: {err:#x}")));
    }

    log::info!(
        "loaded texture {} ({}x{}, {} channel(s))",
        filename,
        texture.width,
        texture.height,
        img.depth
    );
    Ok(texture)
}
