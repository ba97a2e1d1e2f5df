use gl::{types::*, *};
use std::ffi::CStr;

pub fn check_gl_err() {
    let err = unsafe { gl::GetError() };
    if err == gl::NO_ERROR {
        return;
    }
    panic!("error: {:?}", err);
}

fn gl_string(name: GLenum) -> String {
    let ptr = unsafe { gl::GetString(name) };
    if ptr.is_null() {
        return "<unknown>".to_string();
    }
    unsafe { CStr::from_ptr(ptr.cast()) }
        .to_string_lossy()
        .into_owned()
}

pub fn print_opengl_info() {
    log::info!("GL_VENDOR = {}", gl_string(VENDOR));
    log::info!("GL_RENDERER = {}", gl_string(RENDERER));
    log::info!("GL_VERSION = {}", gl_string(VERSION));

    let mut mtu: i32 = 0;
    unsafe { gl::GetIntegerv(MAX_TEXTURE_IMAGE_UNITS, &mut mtu) };
    log::debug!("MAX_TEXTURE_IMAGE_UNITS = {}", mtu);

    let mut mts: i32 = 0;
    unsafe { gl::GetIntegerv(MAX_TEXTURE_SIZE, &mut mts) };
    log::debug!("MAX_TEXTURE_SIZE = {}", mts);
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

/// A 2D RGBA texture living on the GPU. The GL object is deleted on drop, so
/// a `Texture` must not outlive the context it was created in.
#[derive(Debug)]
pub struct Texture {
    id: u32,
    width: u32,
    height: u32,
}

impl Texture {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bind(&self, unit: u32) {
        unsafe {
            gl::ActiveTexture(TEXTURE0 + unit);
            gl::BindTexture(TEXTURE_2D, self.id);
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe { gl::DeleteTextures(1, &self.id) };
    }
}

/// Loads a sprite texture: clamped at the edges and sampled with nearest
/// filtering so small cursor images stay crisp.
pub fn load_texture(filename: &str) -> Result<Texture, String> {
    let params = [
        (TEXTURE_2D, TEXTURE_WRAP_S, CLAMP_TO_EDGE),
        (TEXTURE_2D, TEXTURE_WRAP_T, CLAMP_TO_EDGE),
        (TEXTURE_2D, TEXTURE_MIN_FILTER, NEAREST),
        (TEXTURE_2D, TEXTURE_MAG_FILTER, NEAREST),
    ];
    load_texture_params(filename, &params)
}

pub fn load_texture_params(
    filename: &str,
    params: &[(GLenum, GLenum, GLenum)],
) -> Result<Texture, String> {
    // rows stay top to bottom, matching the y-down projection
    unsafe {
        stb_image::stb_image::stbi_set_flip_vertically_on_load(0);
    }
    let img = match stb_image::image::load_with_depth(filename, 4, false) {
        stb_image::image::LoadResult::ImageF32(_) => {
            return Err(format!(
                "Unable to load image {}: 32-bit images not supported here",
                filename
            ));
        }
        stb_image::image::LoadResult::ImageU8(img) => img,
        stb_image::image::LoadResult::Error(e) => {
            return Err(format!("Unable to load image {}: {}", filename, e))
        }
    };
    log::debug!(
        "loaded {} ({}x{}, {} channels)",
        filename,
        img.width,
        img.height,
        img.depth
    );

    let mut texture = 0;
    unsafe { gl::GenTextures(1, &mut texture) };
    unsafe { gl::BindTexture(TEXTURE_2D, texture) };

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
            RGBA,
            UNSIGNED_BYTE,
            img.data.as_ptr().cast(),
        )
    };
    check_gl_err();

    Ok(Texture {
        id: texture,
        width: img.width as u32,
        height: img.height as u32,
    })
}
