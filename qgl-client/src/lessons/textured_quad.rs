//! Two textures sampled on one quad and blended by a user-controlled factor.

use std::{path::Path, sync::Arc};

use glow::HasContext;
use image::RgbaImage;
use qgl_core::{
    AppConfig, LessonKind,
    controls::{Direction, MixControl},
    geometry::{QUAD_INDICES, TEXTURED_QUAD},
    images::{self, TextureData},
};
use sdl2::keyboard::Keycode;

use crate::{
    abs::{Filter, Mesh, ShaderProgram, Texture, TextureOptions, Wrap},
    error::AppError,
    input::UpdateContext,
    render::glsl,
};

const CONTAINER_FILE: &str = "container.jpg";
const FACE_FILE: &str = "awesomeface.png";
const FALLBACK_SIZE: u32 = 256;

const CONTAINER_UNIT: u32 = 0;
const FACE_UNIT: u32 = 1;

/// Decodes `path`, or draws `fallback` when the file is missing or unreadable.
fn load_or_fallback(path: &Path, fallback: impl FnOnce() -> RgbaImage) -> TextureData {
    match TextureData::load(path, true) {
        Ok(data) => {
            log::debug!("Loaded {} ({}x{})", path.display(), data.width, data.height);
            data
        }
        Err(e) => {
            log::warn!(
                "Failed to load texture {}: {}. Using a generated one",
                path.display(),
                e
            );
            TextureData::from_image(&image::DynamicImage::ImageRgba8(fallback()), true)
        }
    }
}

/// Draws a crate with a face blended on top. `Up`/`Down` change the blend.
pub struct TexturedQuad {
    gl: Arc<glow::Context>,
    program: ShaderProgram,
    quad: Mesh,
    container: Texture,
    face: Texture,
    mix: MixControl,
}

impl TexturedQuad {
    pub fn new(gl: &Arc<glow::Context>, config: &AppConfig) -> Result<Self, AppError> {
        let container = Texture::new(
            gl,
            &load_or_fallback(&config.texture_path(CONTAINER_FILE), || {
                images::crate_pattern(FALLBACK_SIZE)
            }),
            TextureOptions {
                wrap: Wrap::ClampToEdge,
                min_filter: Filter::Linear,
                mag_filter: Filter::Linear,
                mipmaps: true,
            },
        )?;
        let face = Texture::new(
            gl,
            &load_or_fallback(&config.texture_path(FACE_FILE), || {
                images::smiley(FALLBACK_SIZE)
            }),
            TextureOptions {
                wrap: Wrap::Repeat,
                min_filter: Filter::Linear,
                mag_filter: Filter::Nearest,
                mipmaps: true,
            },
        )?;

        log::debug!(
            "Uploaded container {}x{} and face {}x{}",
            container.width(),
            container.height(),
            face.width(),
            face.height()
        );

        let program = glsl::program(gl, "textured", "textured")?;
        program.use_program();
        program.set_uniform("u_container", CONTAINER_UNIT as i32);
        program.set_uniform("u_face", FACE_UNIT as i32);

        let quad = Mesh::indexed(gl, &TEXTURED_QUAD, &QUAD_INDICES)?;

        // Enabled last: nothing fallible may follow, or Drop would never undo it.
        unsafe {
            gl.enable(glow::BLEND);
            gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);
        }

        Ok(Self {
            gl: Arc::clone(gl),
            program,
            quad,
            container,
            face,
            mix: MixControl::default(),
        })
    }
}

impl super::Lesson for TexturedQuad {
    fn kind(&self) -> LessonKind {
        LessonKind::TexturedQuad
    }

    fn update(&mut self, ctx: &UpdateContext) {
        let direction = Direction::from_keys(
            ctx.keyboard.is_down(Keycode::Up),
            ctx.keyboard.is_down(Keycode::Down),
        );
        self.mix.step(direction, ctx.delta_time);
    }

    fn render(&mut self, gl: &glow::Context) {
        super::clear(gl, super::BACKGROUND);

        self.container.bind(CONTAINER_UNIT);
        self.face.bind(FACE_UNIT);

        self.program.use_program();
        self.program.set_uniform("u_mix", self.mix.value());
        self.quad.draw();
    }
}

impl Drop for TexturedQuad {
    fn drop(&mut self) {
        unsafe {
            self.gl.disable(glow::BLEND);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let data = load_or_fallback(&dir.path().join(FACE_FILE), || images::smiley(32));
        assert_eq!((data.width, data.height), (32, 32));
        assert_eq!(data.pixels.len(), 32 * 32 * 4);
    }

    #[test]
    fn test_undecodable_file_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONTAINER_FILE);
        std::fs::write(&path, b"not a jpeg").unwrap();
        let data = load_or_fallback(&path, || images::crate_pattern(16));
        assert_eq!((data.width, data.height), (16, 16));
    }

    #[test]
    fn test_existing_file_is_loaded_flipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FACE_FILE);
        let mut image = RgbaImage::new(1, 2);
        image.put_pixel(0, 0, image::Rgba([255, 255, 255, 255]));
        image.save(&path).unwrap();

        let data = load_or_fallback(&path, || unreachable!());
        assert_eq!((data.width, data.height), (1, 2));
        // top row of the file becomes the last row
        assert_eq!(&data.pixels[4..8], &[255, 255, 255, 255]);
        assert_eq!(&data.pixels[0..4], &[0, 0, 0, 0]);
    }
}
