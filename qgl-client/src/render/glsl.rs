//! GLSL sources embedded into the binary.
//!
//! Vertex stages live in `shaders/<name>.vert` and fragment stages in
//! `shaders/<name>.frag`; a program is picked by naming one of each.

use std::sync::Arc;

use include_dir::{Dir, include_dir};

use crate::abs::{Shader, ShaderError, ShaderProgram};

static SHADERS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/render/shaders");

/// Returns the embedded source file `file_name`, e.g. `"position.vert"`.
pub fn source(file_name: &str) -> Option<&'static str> {
    SHADERS.get_file(file_name).and_then(|f| f.contents_utf8())
}

fn require(file_name: String) -> Result<&'static str, ShaderError> {
    source(&file_name).ok_or(ShaderError::MissingSource(file_name))
}

/// Compiles `<vert>.vert` and `<frag>.frag` and links them into a program.
pub fn program(gl: &Arc<glow::Context>, vert: &str, frag: &str) -> Result<ShaderProgram, ShaderError> {
    let vert_src = require(format!("{}.vert", vert))?;
    let frag_src = require(format!("{}.frag", frag))?;

    let vert_shader = Shader::new(gl, glow::VERTEX_SHADER, vert_src)?;
    let frag_shader = Shader::new(gl, glow::FRAGMENT_SHADER, frag_src)?;
    let program = ShaderProgram::new(gl, &[&vert_shader, &frag_shader])?;

    log::debug!("Linked shader program {}.vert + {}.frag", vert, frag);
    Ok(program)
}
