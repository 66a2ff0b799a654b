//! Error types for starting and running the lessons.

use crate::abs::ShaderError;

/// A GL object could not be created.
#[derive(Debug, thiserror::Error)]
#[error("failed to create {what}: {reason}")]
pub struct GlError {
    pub what: &'static str,
    pub reason: String,
}

impl GlError {
    pub fn new(what: &'static str, reason: impl Into<String>) -> Self {
        Self {
            what,
            reason: reason.into(),
        }
    }
}

/// Everything that can stop a lesson from starting.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to set up logging: {0}")]
    Logging(#[from] std::io::Error),
    #[error("failed to initialize SDL: {0}")]
    Sdl(String),
    #[error("failed to create window: {0}")]
    Window(#[from] sdl2::video::WindowBuildError),
    #[error("failed to create OpenGL context: {0}")]
    Context(String),
    #[error(transparent)]
    Shader(#[from] ShaderError),
    #[error(transparent)]
    Gl(#[from] GlError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_errors_keep_the_info_log() {
        let err: AppError = ShaderError::Compile {
            stage: "fragment",
            log: "0:3: 'frag_colour' : undeclared identifier".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "fragment shader failed to compile: 0:3: 'frag_colour' : undeclared identifier"
        );
    }

    #[test]
    fn test_gl_error_message() {
        let err: AppError = GlError::new("vertex array", "out of memory").into();
        assert_eq!(err.to_string(), "failed to create vertex array: out of memory");
    }
}
