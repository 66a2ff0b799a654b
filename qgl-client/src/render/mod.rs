//! Module for anything related to rendering.
//!
//! This module holds the embedded GLSL sources and the helpers that turn them
//! into linked shader programs.

pub mod glsl;
