//! A rectangle built from four vertices and six indices.

use std::sync::Arc;

use glow::HasContext;
use qgl_core::{
    LessonKind,
    controls::Toggle,
    geometry::{QUAD, QUAD_INDICES},
};
use sdl2::keyboard::Keycode;

use crate::{
    abs::{Mesh, ShaderProgram},
    error::AppError,
    input::UpdateContext,
    render::glsl,
};

const WIREFRAME_KEY: Keycode = Keycode::Tab;

fn polygon_mode(wireframe: Toggle) -> u32 {
    if wireframe.is_on() { glow::LINE } else { glow::FILL }
}

/// Draws [`QUAD`] through an element buffer. `Tab` toggles wireframe mode.
pub struct IndexedQuad {
    gl: Arc<glow::Context>,
    program: ShaderProgram,
    quad: Mesh,
    wireframe: Toggle,
}

impl IndexedQuad {
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self, AppError> {
        Ok(Self {
            gl: Arc::clone(gl),
            program: glsl::program(gl, "position", "crimson")?,
            quad: Mesh::indexed(gl, &QUAD, &QUAD_INDICES)?,
            wireframe: Toggle::default(),
        })
    }
}

impl super::Lesson for IndexedQuad {
    fn kind(&self) -> LessonKind {
        LessonKind::IndexedQuad
    }

    fn update(&mut self, ctx: &UpdateContext) {
        if self.wireframe.update(ctx.keyboard.was_pressed(WIREFRAME_KEY)) {
            log::debug!("Wireframe {}", if self.wireframe.is_on() { "on" } else { "off" });
        }
    }

    fn render(&mut self, gl: &glow::Context) {
        super::clear(gl, super::BACKGROUND);

        unsafe {
            gl.polygon_mode(glow::FRONT_AND_BACK, polygon_mode(self.wireframe));
        }

        self.program.use_program();
        self.quad.draw();
    }
}

impl Drop for IndexedQuad {
    fn drop(&mut self) {
        unsafe {
            self.gl.polygon_mode(glow::FRONT_AND_BACK, glow::FILL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyboardState;

    #[test]
    fn test_starts_filled() {
        assert_eq!(polygon_mode(Toggle::default()), glow::FILL);
    }

    #[test]
    fn test_tab_press_toggles_once_while_held() {
        let mut keyboard = KeyboardState::default();
        let mut wireframe = Toggle::default();

        keyboard.key_down(WIREFRAME_KEY, false);
        wireframe.update(keyboard.was_pressed(WIREFRAME_KEY));
        assert_eq!(polygon_mode(wireframe), glow::LINE);

        // still held next frame, with auto-repeat events arriving
        keyboard.begin_frame();
        keyboard.key_down(WIREFRAME_KEY, true);
        assert!(!wireframe.update(keyboard.was_pressed(WIREFRAME_KEY)));
        assert_eq!(polygon_mode(wireframe), glow::LINE);

        keyboard.begin_frame();
        keyboard.key_up(WIREFRAME_KEY);
        keyboard.key_down(WIREFRAME_KEY, false);
        wireframe.update(keyboard.was_pressed(WIREFRAME_KEY));
        assert_eq!(polygon_mode(wireframe), glow::FILL);
    }
}
