//! Mesh management module.
//!
//! This module defines the [`Mesh`] struct for managing vertex data on the GPU side.
//! Vertices describe their attributes through [`qgl_core::geometry::VertexLayout`].

use std::sync::Arc;

use glow::HasContext;
use qgl_core::geometry::VertexLayout;

use crate::error::GlError;

/// Sets up the vertex attribute pointers for `V` on the bound VAO and VBO.
fn vertex_attribs<V: VertexLayout>(gl: &glow::Context) {
    let stride = V::stride() as i32;
    for attr in V::ATTRIBUTES {
        unsafe {
            gl.vertex_attrib_pointer_f32(
                attr.location,
                attr.components,
                glow::FLOAT,
                false,
                stride,
                attr.offset as i32,
            );
            gl.enable_vertex_attrib_array(attr.location);
        }
    }
}

/// Represents a mesh stored on the GPU side.
///
/// A mesh owns one vertex array object and one vertex buffer, plus an element
/// buffer when it was built with indices.
pub struct Mesh {
    gl: Arc<glow::Context>,
    draw_mode: u32,
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: Option<glow::Buffer>,
    vertex_count: usize,
    index_count: usize,
}

impl Mesh {
    /// Creates a mesh drawn with `glDrawArrays`.
    pub fn arrays<V: VertexLayout>(gl: &Arc<glow::Context>, vertices: &[V]) -> Result<Self, GlError> {
        Self::new(gl, vertices, None)
    }

    /// Creates a mesh drawn with `glDrawElements` using 32-bit indices.
    pub fn indexed<V: VertexLayout>(
        gl: &Arc<glow::Context>,
        vertices: &[V],
        indices: &[u32],
    ) -> Result<Self, GlError> {
        Self::new(gl, vertices, Some(indices))
    }

    fn new<V: VertexLayout>(
        gl: &Arc<glow::Context>,
        vertices: &[V],
        indices: Option<&[u32]>,
    ) -> Result<Self, GlError> {
        unsafe {
            let vao = gl
                .create_vertex_array()
                .map_err(|e| GlError::new("vertex array", e))?;
            let vbo = match gl.create_buffer() {
                Ok(vbo) => vbo,
                Err(e) => {
                    gl.delete_vertex_array(vao);
                    return Err(GlError::new("vertex buffer", e));
                }
            };

            gl.bind_vertex_array(Some(vao));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(vertices),
                glow::STATIC_DRAW,
            );

            let ebo = match indices {
                Some(indices) => {
                    let ebo = match gl.create_buffer() {
                        Ok(ebo) => ebo,
                        Err(e) => {
                            gl.bind_vertex_array(None);
                            gl.delete_buffer(vbo);
                            gl.delete_vertex_array(vao);
                            return Err(GlError::new("element buffer", e));
                        }
                    };
                    // The element buffer binding is recorded in the VAO.
                    gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
                    gl.buffer_data_u8_slice(
                        glow::ELEMENT_ARRAY_BUFFER,
                        bytemuck::cast_slice(indices),
                        glow::STATIC_DRAW,
                    );
                    Some(ebo)
                }
                None => None,
            };

            vertex_attribs::<V>(gl);

            // Unbind the VAO first so it keeps its element buffer.
            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);

            Ok(Self {
                gl: Arc::clone(gl),
                draw_mode: glow::TRIANGLES,
                vao,
                vbo,
                ebo,
                vertex_count: vertices.len(),
                index_count: indices.map_or(0, |i| i.len()),
            })
        }
    }

    /// Draws the mesh with the currently bound program.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vao));
            if self.ebo.is_some() {
                self.gl.draw_elements(
                    self.draw_mode,
                    self.index_count as i32,
                    glow::UNSIGNED_INT,
                    0,
                );
            } else {
                self.gl
                    .draw_arrays(self.draw_mode, 0, self.vertex_count as i32);
            }
            self.gl.bind_vertex_array(None);
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    // Zero for meshes without an element buffer
    pub fn index_count(&self) -> usize {
        self.index_count
    }
}

impl Drop for Mesh {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_vertex_array(self.vao);
            self.gl.delete_buffer(self.vbo);
            if let Some(ebo) = self.ebo {
                self.gl.delete_buffer(ebo);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qgl_core::geometry::{QUAD_INDICES, TEXTURED_QUAD, TexturedVertex};

    #[test]
    fn test_upload_bytes_cover_whole_slice() {
        let vertices: &[u8] = bytemuck::cast_slice(&TEXTURED_QUAD);
        assert_eq!(vertices.len(), TEXTURED_QUAD.len() * TexturedVertex::stride());
        let indices: &[u8] = bytemuck::cast_slice(&QUAD_INDICES);
        assert_eq!(indices.len(), 6 * 4);
        assert_eq!(&indices[4..8], &1u32.to_ne_bytes());
    }
}
