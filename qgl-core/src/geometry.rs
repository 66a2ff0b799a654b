//! Vertex layouts and the fixed geometry drawn by the lessons.
//!
//! Every vertex type is `#[repr(C)]` and [`bytemuck::Pod`] so its bytes can be
//! uploaded as-is. The
//! [`VertexLayout`] trait describes how those bytes map onto shader attribute
//! locations; the client turns that description into `glVertexAttribPointer`
//! calls.

use glam::{Vec2, Vec3};

/// A single float vertex attribute inside an interleaved vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexAttribute {
    /// The `layout (location = N)` slot in the vertex shader.
    pub location: u32,
    /// Number of `f32` components (1 to 4).
    pub components: i32,
    /// Byte offset from the start of the vertex.
    pub offset: usize,
}

/// Describes the attribute layout of an interleaved vertex type.
pub trait VertexLayout: bytemuck::Pod {
    /// The attributes in location order.
    const ATTRIBUTES: &'static [VertexAttribute];

    /// Distance in bytes between two consecutive vertices.
    fn stride() -> usize {
        std::mem::size_of::<Self>()
    }
}

/// A vertex with only a position.
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct PositionVertex {
    pub position: Vec3,
}

impl VertexLayout for PositionVertex {
    const ATTRIBUTES: &'static [VertexAttribute] = &[VertexAttribute {
        location: 0,
        components: 3,
        offset: 0,
    }];
}

/// A vertex with a position and an RGB color.
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct ColorVertex {
    pub position: Vec3,
    pub color: Vec3,
}

impl VertexLayout for ColorVertex {
    const ATTRIBUTES: &'static [VertexAttribute] = &[
        VertexAttribute {
            location: 0,
            components: 3,
            offset: 0,
        },
        VertexAttribute {
            location: 1,
            components: 3,
            offset: size_of::<Vec3>(),
        },
    ];
}

/// A vertex with a position, an RGB color and a texture coordinate.
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct TexturedVertex {
    pub position: Vec3,
    pub color: Vec3,
    pub uv: Vec2,
}

impl VertexLayout for TexturedVertex {
    const ATTRIBUTES: &'static [VertexAttribute] = &[
        VertexAttribute {
            location: 0,
            components: 3,
            offset: 0,
        },
        VertexAttribute {
            location: 1,
            components: 3,
            offset: size_of::<Vec3>(),
        },
        VertexAttribute {
            location: 2,
            components: 2,
            offset: size_of::<Vec3>() * 2,
        },
    ];
}

const fn pos(x: f32, y: f32, z: f32) -> PositionVertex {
    PositionVertex {
        position: Vec3::new(x, y, z),
    }
}

/// Left triangle of the two-triangle lesson.
pub const LEFT_TRIANGLE: [PositionVertex; 3] = [
    pos(-0.9, -0.5, 0.0),
    pos(0.0, -0.5, 0.0),
    pos(-0.45, 0.5, 0.0),
];

/// Right triangle of the two-triangle lesson.
pub const RIGHT_TRIANGLE: [PositionVertex; 3] = [
    pos(0.0, -0.5, 0.0),
    pos(0.9, -0.5, 0.0),
    pos(0.45, 0.5, 0.0),
];

/// Corners of a centered quad: top right, bottom right, bottom left, top left.
pub const QUAD: [PositionVertex; 4] = [
    pos(0.5, 0.5, 0.0),
    pos(0.5, -0.5, 0.0),
    pos(-0.5, -0.5, 0.0),
    pos(-0.5, 0.5, 0.0),
];

/// Two triangles covering [`QUAD`], sharing the bottom-right/top-left diagonal.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

/// A triangle with red, green and blue corners.
pub const COLOR_TRIANGLE: [ColorVertex; 3] = [
    ColorVertex {
        position: Vec3::new(0.5, -0.5, 0.0),
        color: Vec3::new(1.0, 0.0, 0.0),
    },
    ColorVertex {
        position: Vec3::new(-0.5, -0.5, 0.0),
        color: Vec3::new(0.0, 1.0, 0.0),
    },
    ColorVertex {
        position: Vec3::new(0.0, 0.5, 0.0),
        color: Vec3::new(0.0, 0.0, 1.0),
    },
];

/// [`QUAD`] with per-corner tint and texture coordinates. Indexed by [`QUAD_INDICES`].
pub const TEXTURED_QUAD: [TexturedVertex; 4] = [
    TexturedVertex {
        position: Vec3::new(0.5, 0.5, 0.0),
        color: Vec3::new(1.0, 0.0, 0.0),
        uv: Vec2::new(1.0, 1.0),
    },
    TexturedVertex {
        position: Vec3::new(0.5, -0.5, 0.0),
        color: Vec3::new(0.0, 1.0, 0.0),
        uv: Vec2::new(1.0, 0.0),
    },
    TexturedVertex {
        position: Vec3::new(-0.5, -0.5, 0.0),
        color: Vec3::new(0.0, 0.0, 1.0),
        uv: Vec2::new(0.0, 0.0),
    },
    TexturedVertex {
        position: Vec3::new(-0.5, 0.5, 0.0),
        color: Vec3::new(1.0, 1.0, 0.0),
        uv: Vec2::new(0.0, 1.0),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_layout_fits<V: VertexLayout>() {
        let stride = V::stride();
        let mut last_offset = None;
        for (i, attr) in V::ATTRIBUTES.iter().enumerate() {
            assert_eq!(attr.location, i as u32);
            assert!((1..=4).contains(&attr.components));
            let end = attr.offset + attr.components as usize * size_of::<f32>();
            assert!(end <= stride, "attribute {i} overruns the stride");
            if let Some(last) = last_offset {
                assert!(attr.offset > last);
            }
            last_offset = Some(attr.offset);
        }
    }

    #[test]
    fn test_strides_match_tutorial_layouts() {
        assert_eq!(PositionVertex::stride(), 3 * size_of::<f32>());
        assert_eq!(ColorVertex::stride(), 6 * size_of::<f32>());
        assert_eq!(TexturedVertex::stride(), 8 * size_of::<f32>());
    }

    #[test]
    fn test_attribute_offsets() {
        assert_layout_fits::<PositionVertex>();
        assert_layout_fits::<ColorVertex>();
        assert_layout_fits::<TexturedVertex>();

        let offsets: Vec<usize> = TexturedVertex::ATTRIBUTES.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 12, 24]);
    }

    #[test]
    fn test_quad_indices_are_in_range() {
        assert_eq!(QUAD_INDICES.len() % 3, 0);
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < QUAD.len()));
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < TEXTURED_QUAD.len()));
    }

    #[test]
    fn test_two_triangles_meet_at_origin() {
        assert_eq!(LEFT_TRIANGLE[1].position, RIGHT_TRIANGLE[0].position);
        assert!(LEFT_TRIANGLE.iter().all(|v| v.position.x <= 0.0));
        assert!(RIGHT_TRIANGLE.iter().all(|v| v.position.x >= 0.0));
    }

    #[test]
    fn test_textured_quad_matches_plain_quad() {
        for (plain, textured) in QUAD.iter().zip(TEXTURED_QUAD.iter()) {
            assert_eq!(plain.position, textured.position);
            assert!(textured.uv.cmpge(Vec2::ZERO).all() && textured.uv.cmple(Vec2::ONE).all());
        }
    }
}
