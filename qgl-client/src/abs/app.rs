//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which owns the SDL2 window, the
//! OpenGL context and the event pump for one run of a lesson.

use std::sync::Arc;

use glow::HasContext;
use qgl_core::WindowConfig;

use crate::error::AppError;

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
///
/// Field order matters: `gl` is dropped before the context it was loaded
/// from, and the context before the window.
pub struct App {
    pub gl: Arc<glow::Context>,
    pub event_pump: sdl2::EventPump,
    pub gl_context: sdl2::video::GLContext,
    pub window: sdl2::video::Window,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub sdl: sdl2::Sdl,
}

impl App {
    /// Creates the window and a current OpenGL core profile context.
    pub fn new(config: &WindowConfig) -> Result<Self, AppError> {
        let sdl = sdl2::init().map_err(AppError::Sdl)?;
        let video_subsystem = sdl.video().map_err(AppError::Sdl)?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        let (major, minor) = config.gl_version;
        gl_attr.set_context_version(major, minor);
        if cfg!(target_os = "macos") {
            gl_attr.set_context_flags().forward_compatible().set();
        }

        let mut builder = video_subsystem.window(&config.title, config.width, config.height);
        builder.opengl().position_centered();
        if config.resizable {
            builder.resizable();
        }
        let window = builder.build()?;

        let gl_context = window.gl_create_context().map_err(AppError::Context)?;
        window
            .gl_make_current(&gl_context)
            .map_err(AppError::Context)?;

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };

        let interval = if config.vsync {
            sdl2::video::SwapInterval::VSync
        } else {
            sdl2::video::SwapInterval::Immediate
        };
        if let Err(e) = video_subsystem.gl_set_swap_interval(interval) {
            log::warn!("Could not set swap interval: {}", e);
        }

        let (width, height) = window.drawable_size();
        unsafe {
            gl.viewport(0, 0, width as i32, height as i32);
        }

        log::info!(
            "Created {}x{} window with {}",
            width,
            height,
            unsafe { gl.get_parameter_string(glow::VERSION) }
        );

        let event_pump = sdl.event_pump().map_err(AppError::Sdl)?;

        Ok(Self {
            gl: Arc::new(gl),
            event_pump,
            gl_context,
            window,
            video_subsystem,
            sdl,
        })
    }

    /// Changes the window title, ignoring titles SDL cannot represent.
    pub fn set_title(&mut self, title: &str) {
        if let Err(e) = self.window.set_title(title) {
            log::warn!("Could not set window title: {}", e);
        }
    }
}
