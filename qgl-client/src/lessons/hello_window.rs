//! Opens a window and clears it to green every frame.

use glam::Vec4;
use qgl_core::LessonKind;

/// The simplest lesson: a context and a clear call.
pub struct HelloWindow;

impl super::Lesson for HelloWindow {
    fn kind(&self) -> LessonKind {
        LessonKind::HelloWindow
    }

    fn render(&mut self, gl: &glow::Context) {
        super::clear(gl, Vec4::new(0.0, 1.0, 0.0, 1.0));
    }
}
