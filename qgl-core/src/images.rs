//! CPU-side texture preparation.
//!
//! Images are decoded with the `image` crate and converted into tightly packed
//! RGBA8 rows ready for `glTexImage2D`. OpenGL puts texture coordinate (0, 0)
//! at the bottom-left while image files start at the top-left, so loaders can
//! ask for the rows to be flipped.

use std::path::Path;

use image::{DynamicImage, Rgba, RgbaImage};

/// Pixel data ready for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    /// `width * height * 4` bytes, row by row.
    pub pixels: Vec<u8>,
}

impl TextureData {
    /// Converts an already decoded image.
    pub fn from_image(image: &DynamicImage, flip_vertically: bool) -> Self {
        let rgba = if flip_vertically {
            image.flipv().to_rgba8()
        } else {
            image.to_rgba8()
        };
        Self::from(rgba)
    }

    /// Decodes the image file at `path`.
    pub fn load(path: &Path, flip_vertically: bool) -> Result<Self, image::ImageError> {
        let image = image::open(path)?;
        Ok(Self::from_image(&image, flip_vertically))
    }
}

impl From<RgbaImage> for TextureData {
    fn from(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            pixels: image.into_raw(),
        }
    }
}

/// Draws a wooden crate: vertical planks inside a darker frame.
pub fn crate_pattern(size: u32) -> RgbaImage {
    let size = size.max(8);
    let border = (size / 10).max(1);
    let plank = (size / 4).max(1);

    RgbaImage::from_fn(size, size, |x, y| {
        let on_border = x < border || y < border || x >= size - border || y >= size - border;
        if on_border {
            return Rgba([92, 64, 38, 255]);
        }
        // thin seam between planks
        if x % plank == 0 {
            return Rgba([120, 84, 50, 255]);
        }
        let shade = if (x / plank) % 2 == 0 { 0 } else { 14 };
        Rgba([182 - shade, 134 - shade, 82 - shade, 255])
    })
}

/// Draws a yellow smiling face on a transparent background.
pub fn smiley(size: u32) -> RgbaImage {
    let size = size.max(16);
    let s = size as f32;
    let center = s / 2.0;
    let radius = s * 0.45;

    let eye_radius = s * 0.06;
    let eyes = [(s * 0.35, s * 0.38), (s * 0.65, s * 0.38)];

    RgbaImage::from_fn(size, size, |x, y| {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        let dist = ((px - center).powi(2) + (py - center).powi(2)).sqrt();

        if dist > radius {
            return Rgba([0, 0, 0, 0]);
        }

        let in_eye = eyes
            .iter()
            .any(|&(ex, ey)| ((px - ex).powi(2) + (py - ey).powi(2)).sqrt() < eye_radius);

        // lower half of a ring around the center
        let in_mouth = py > center + s * 0.05
            && (dist - radius * 0.6).abs() < s * 0.035;

        if in_eye || in_mouth || dist > radius - s * 0.02 {
            Rgba([40, 30, 10, 255])
        } else {
            Rgba([250, 210, 40, 255])
        }
    })
}
