//! The GPU-free half of the QiangGL lessons. This crate holds everything the
//! lessons need that does not touch an OpenGL context: vertex layouts and the
//! fixed geometry, the lesson catalogue, per-frame control math, configuration
//! and CPU-side texture preparation.

pub mod catalog;
pub mod config;
pub mod controls;
pub mod geometry;
pub mod images;

pub use catalog::LessonKind;
pub use config::{AppConfig, ConfigError, LogConfig, WindowConfig};
