//! Interleaved position and color attributes, plus a uniform driven by time.

use std::sync::Arc;

use glam::Vec4;
use qgl_core::{
    LessonKind,
    controls::{Toggle, pulse_green},
    geometry::COLOR_TRIANGLE,
};
use sdl2::keyboard::Keycode;

use crate::{
    abs::{Mesh, ShaderProgram},
    error::AppError,
    input::UpdateContext,
    render::glsl,
};

const PULSE_KEY: Keycode = Keycode::Space;

/// Draws a triangle whose corner colors are interpolated across its face.
///
/// `Space` switches to a flat color whose green channel pulses over time.
pub struct VertexColors {
    program: ShaderProgram,
    triangle: Mesh,
    pulse: Vec4,
    use_pulse: Toggle,
}

impl VertexColors {
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self, AppError> {
        Ok(Self {
            program: glsl::program(gl, "vertex_color", "vertex_color")?,
            triangle: Mesh::arrays(gl, &COLOR_TRIANGLE)?,
            pulse: pulse_color(0.0),
            use_pulse: Toggle::default(),
        })
    }
}

fn pulse_color(seconds: f32) -> Vec4 {
    Vec4::new(0.0, pulse_green(seconds), 0.0, 1.0)
}

impl super::Lesson for VertexColors {
    fn kind(&self) -> LessonKind {
        LessonKind::VertexColors
    }

    fn update(&mut self, ctx: &UpdateContext) {
        self.use_pulse.update(ctx.keyboard.was_pressed(PULSE_KEY));
        self.pulse = pulse_color(ctx.elapsed);
    }

    fn render(&mut self, gl: &glow::Context) {
        super::clear(gl, super::BACKGROUND);

        self.program.use_program();
        self.program.set_uniform("u_pulse", self.pulse);
        self.program.set_uniform("u_use_pulse", self.use_pulse.is_on());
        self.triangle.draw();
    }
}
