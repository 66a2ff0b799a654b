//! Two triangles, each with its own vertex array, vertex buffer and shader program.

use std::sync::Arc;

use qgl_core::{
    LessonKind,
    geometry::{LEFT_TRIANGLE, RIGHT_TRIANGLE},
};

use crate::{
    abs::{Mesh, ShaderProgram},
    error::AppError,
    render::glsl,
};

/// Draws the left triangle orange and the right one green.
pub struct TwoTriangles {
    orange: ShaderProgram,
    green: ShaderProgram,
    left: Mesh,
    right: Mesh,
}

impl TwoTriangles {
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self, AppError> {
        Ok(Self {
            orange: glsl::program(gl, "position", "orange")?,
            green: glsl::program(gl, "position", "green")?,
            left: Mesh::arrays(gl, &LEFT_TRIANGLE)?,
            right: Mesh::arrays(gl, &RIGHT_TRIANGLE)?,
        })
    }
}

impl super::Lesson for TwoTriangles {
    fn kind(&self) -> LessonKind {
        LessonKind::TwoTriangles
    }

    fn render(&mut self, gl: &glow::Context) {
        super::clear(gl, super::BACKGROUND);

        self.orange.use_program();
        self.left.draw();

        self.green.use_program();
        self.right.draw();
    }
}
