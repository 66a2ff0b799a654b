//! Thin owners of the SDL2 window and the OpenGL objects the lessons create.
//!
//! Every wrapper keeps an `Arc<glow::Context>` and deletes its GL object when
//! dropped, so a lesson's teardown is simply dropping the lesson.

pub mod app;
pub mod mesh;
pub mod shader;
pub mod texture;

pub use app::*;
pub use mesh::*;
pub use shader::*;
pub use texture::*;
