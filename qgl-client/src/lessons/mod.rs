//! Module providing the [`Lesson`] trait and all lesson implementations.
//!
//! Every lesson creates its GL objects in its constructor and releases them
//! when dropped. [`LessonManager`] owns the running lesson and swaps it out
//! when the launcher asks for another one.

use std::{sync::Arc, time::Instant};

use glam::Vec4;
use glow::HasContext;
use qgl_core::{AppConfig, LessonKind};
use sdl2::keyboard::Keycode;

use crate::{
    error::AppError,
    input::{KeyboardState, UpdateContext},
};

pub mod hello_window;
pub mod indexed_quad;
pub mod textured_quad;
pub mod two_triangles;
pub mod vertex_colors;

/// Clear color used by every lesson that draws geometry.
pub const BACKGROUND: Vec4 = Vec4::new(0.2, 0.3, 0.3, 1.0);

/// Clears the color buffer of the default framebuffer.
pub fn clear(gl: &glow::Context, color: Vec4) {
    unsafe {
        gl.clear_color(color.x, color.y, color.z, color.w);
        gl.clear(glow::COLOR_BUFFER_BIT);
    }
}

/// The Lesson trait defines the common interface for all tutorial programs.
pub trait Lesson {
    fn kind(&self) -> LessonKind;

    /// Handles an event.
    fn handle_event(&mut self, _event: &sdl2::event::Event) {}

    /// Updates the lesson state once per frame.
    fn update(&mut self, _ctx: &UpdateContext) {}

    /// Renders one frame.
    fn render(&mut self, gl: &glow::Context);
}

/// Creates the GL resources for `kind` and returns the ready lesson.
pub fn build(
    kind: LessonKind,
    gl: &Arc<glow::Context>,
    config: &AppConfig,
) -> Result<Box<dyn Lesson>, AppError> {
    let lesson: Box<dyn Lesson> = match kind {
        LessonKind::HelloWindow => Box::new(hello_window::HelloWindow),
        LessonKind::TwoTriangles => Box::new(two_triangles::TwoTriangles::new(gl)?),
        LessonKind::IndexedQuad => Box::new(indexed_quad::IndexedQuad::new(gl)?),
        LessonKind::VertexColors => Box::new(vertex_colors::VertexColors::new(gl)?),
        LessonKind::TexturedQuad => Box::new(textured_quad::TexturedQuad::new(gl, config)?),
    };
    log::info!("Started lesson {} ({})", kind.title(), kind);
    Ok(lesson)
}

/// What the frame loop should do after an update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonSwitch {
    None,
    Replace(LessonKind),
    Quit,
}

/// Decides from this frame's key presses whether to keep, replace or quit.
pub fn decide_switch(keyboard: &KeyboardState, current: LessonKind, allow_switching: bool) -> LessonSwitch {
    if keyboard.was_pressed(Keycode::Escape) {
        return LessonSwitch::Quit;
    }
    if !allow_switching {
        return LessonSwitch::None;
    }
    match keyboard.pressed_lesson() {
        Some(kind) if kind != current => LessonSwitch::Replace(kind),
        _ => LessonSwitch::None,
    }
}

/// Owns the running lesson.
pub struct LessonManager {
    lesson: Box<dyn Lesson>,
    started: Instant,
    allow_switching: bool,
}

impl LessonManager {
    pub fn new(lesson: Box<dyn Lesson>, allow_switching: bool) -> Self {
        Self {
            lesson,
            started: Instant::now(),
            allow_switching,
        }
    }

    pub fn current(&self) -> LessonKind {
        self.lesson.kind()
    }

    /// Seconds since the current lesson started.
    pub fn elapsed(&self) -> f32 {
        self.started.elapsed().as_secs_f32()
    }

    /// Handles an event by passing it to the current lesson.
    pub fn handle_event(&mut self, event: &sdl2::event::Event) {
        self.lesson.handle_event(event);
    }

    /// Updates the current lesson and reports whether it should be switched.
    pub fn update(&mut self, ctx: &UpdateContext) -> LessonSwitch {
        let switch = decide_switch(ctx.keyboard, self.current(), self.allow_switching);
        if switch == LessonSwitch::None {
            self.lesson.update(ctx);
        }
        switch
    }

    /// Replaces the current lesson. On failure the current one keeps running.
    pub fn switch_to(
        &mut self,
        kind: LessonKind,
        gl: &Arc<glow::Context>,
        config: &AppConfig,
    ) -> Result<(), AppError> {
        let lesson = build(kind, gl, config)?;
        self.lesson = lesson;
        self.started = Instant::now();
        Ok(())
    }

    /// Renders the current lesson.
    pub fn render(&mut self, gl: &glow::Context) {
        self.lesson.render(gl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed(keys: &[Keycode]) -> KeyboardState {
        let mut keyboard = KeyboardState::default();
        for &k in keys {
            keyboard.key_down(k, false);
        }
        keyboard
    }

    #[test]
    fn test_escape_quits() {
        let keyboard = pressed(&[Keycode::Escape, Keycode::Num2]);
        assert_eq!(
            decide_switch(&keyboard, LessonKind::HelloWindow, true),
            LessonSwitch::Quit
        );
        assert_eq!(
            decide_switch(&keyboard, LessonKind::HelloWindow, false),
            LessonSwitch::Quit
        );
    }

    #[test]
    fn test_digits_switch_only_in_launcher() {
        let keyboard = pressed(&[Keycode::Num5]);
        assert_eq!(
            decide_switch(&keyboard, LessonKind::HelloWindow, true),
            LessonSwitch::Replace(LessonKind::TexturedQuad)
        );
        assert_eq!(
            decide_switch(&keyboard, LessonKind::HelloWindow, false),
            LessonSwitch::None
        );
    }

    #[test]
    fn test_current_or_unknown_digit_keeps_lesson() {
        let keyboard = pressed(&[Keycode::Num1]);
        assert_eq!(
            decide_switch(&keyboard, LessonKind::HelloWindow, true),
            LessonSwitch::None
        );

        let keyboard = pressed(&[Keycode::Num9]);
        assert_eq!(
            decide_switch(&keyboard, LessonKind::TwoTriangles, true),
            LessonSwitch::None
        );
    }

    #[test]
    fn test_held_digit_switches_once() {
        let mut keyboard = pressed(&[Keycode::Num3]);
        assert_eq!(
            decide_switch(&keyboard, LessonKind::HelloWindow, true),
            LessonSwitch::Replace(LessonKind::IndexedQuad)
        );
        keyboard.begin_frame();
        assert_eq!(
            decide_switch(&keyboard, LessonKind::HelloWindow, true),
            LessonSwitch::None
        );
    }
}
