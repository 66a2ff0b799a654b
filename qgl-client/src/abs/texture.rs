//! Structs and functions for handling textures.
//!
//! The module provides the [`Texture`] struct which owns a GPU texture created
//! from [`TextureData`], and [`TextureOptions`] describing how it is sampled.

use std::sync::Arc;

use glow::HasContext;
use qgl_core::images::TextureData;

use crate::error::GlError;

/// How texture coordinates outside `[0, 1]` are resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wrap {
    Repeat,
    ClampToEdge,
}

impl Wrap {
    fn gl(self) -> i32 {
        match self {
            Wrap::Repeat => glow::REPEAT as i32,
            Wrap::ClampToEdge => glow::CLAMP_TO_EDGE as i32,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Filter {
    Linear,
    Nearest,
}

impl Filter {
    fn gl(self) -> i32 {
        match self {
            Filter::Linear => glow::LINEAR as i32,
            Filter::Nearest => glow::NEAREST as i32,
        }
    }
}

/// Sampling parameters applied when a [`Texture`] is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextureOptions {
    pub wrap: Wrap,
    pub min_filter: Filter,
    pub mag_filter: Filter,
    pub mipmaps: bool,
}

/// Represents a texture stored on the GPU side.
pub struct Texture {
    gl: Arc<glow::Context>,
    id: glow::Texture,
    width: u32,
    height: u32,
}

impl Texture {
    /// Uploads `data` as an RGBA8 2D texture.
    pub fn new(
        gl: &Arc<glow::Context>,
        data: &TextureData,
        options: TextureOptions,
    ) -> Result<Self, GlError> {
        unsafe {
            let texture = gl
                .create_texture()
                .map_err(|e| GlError::new("texture", e))?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));

            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, options.wrap.gl());
            gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_T, options.wrap.gl());
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                options.min_filter.gl(),
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                options.mag_filter.gl(),
            );

            // Rows are tightly packed, which matters for widths not divisible by 4.
            gl.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                data.width as i32,
                data.height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(data.pixels.as_slice())),
            );
            if options.mipmaps {
                gl.generate_mipmap(glow::TEXTURE_2D);
            }
            gl.bind_texture(glow::TEXTURE_2D, None);

            Ok(Self {
                gl: Arc::clone(gl),
                id: texture,
                width: data.width,
                height: data.height,
            })
        }
    }

    /// Returns the width of the texture.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the texture.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Binds the texture to the specified texture unit.
    pub fn bind(&self, unit: u32) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(glow::TEXTURE_2D, Some(self.id));
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.id);
        }
    }
}
