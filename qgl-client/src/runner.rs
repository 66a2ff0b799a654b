//! The frame loop shared by every lesson binary.

use std::time::Instant;

use glow::HasContext;
use qgl_core::{AppConfig, LessonKind};
use sdl2::event::{Event, WindowEvent};

use crate::{
    abs::App,
    error::AppError,
    input::{KeyboardState, UpdateContext},
    lessons::{self, LessonManager, LessonSwitch},
};

/// Whether number keys may switch to another lesson.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    /// Runs one lesson until the window closes.
    Single,
    /// Starts on one lesson and lets keys `1`..`5` pick another.
    Launcher,
}

/// Runs `first` until the window is closed or `Escape` is pressed.
pub fn run(app: &mut App, config: &AppConfig, first: LessonKind, mode: RunMode) -> Result<(), AppError> {
    let lesson = lessons::build(first, &app.gl, config)?;
    let mut manager = LessonManager::new(lesson, mode == RunMode::Launcher);
    app.set_title(&first.window_title(&config.window.title));

    let mut keyboard = KeyboardState::default();
    let mut last_frame_time = Instant::now();

    'running: loop {
        let now = Instant::now();
        let delta_time = now.duration_since(last_frame_time).as_secs_f32();
        last_frame_time = now;

        keyboard.begin_frame();

        for event in app.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                Event::Window {
                    win_event: WindowEvent::SizeChanged(..),
                    ..
                } => {
                    let (width, height) = app.window.drawable_size();
                    log::debug!("Resized to {}x{}", width, height);
                    unsafe {
                        app.gl.viewport(0, 0, width as i32, height as i32);
                    }
                }
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat,
                    ..
                } => keyboard.key_down(keycode, repeat),
                Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => keyboard.key_up(keycode),
                _ => {}
            }
            manager.handle_event(&event);
        }

        let ctx = UpdateContext::new(&keyboard, delta_time, manager.elapsed());
        match manager.update(&ctx) {
            LessonSwitch::None => {}
            LessonSwitch::Quit => break 'running,
            LessonSwitch::Replace(kind) => match manager.switch_to(kind, &app.gl, config) {
                Ok(()) => app.set_title(&kind.window_title(&config.window.title)),
                Err(e) => log::error!("Could not start lesson {}: {}", kind, e),
            },
        }

        manager.render(&app.gl);
        app.window.gl_swap_window();
    }

    log::info!("Closing lesson {}", manager.current());
    Ok(())
}
