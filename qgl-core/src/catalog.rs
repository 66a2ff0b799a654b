//! The catalogue of lessons.

use std::fmt;

/// Identifies one of the tutorial programs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LessonKind {
    HelloWindow,
    TwoTriangles,
    IndexedQuad,
    VertexColors,
    TexturedQuad,
}

impl LessonKind {
    /// All lessons in the order they are taught.
    pub const ALL: [LessonKind; 5] = [
        LessonKind::HelloWindow,
        LessonKind::TwoTriangles,
        LessonKind::IndexedQuad,
        LessonKind::VertexColors,
        LessonKind::TexturedQuad,
    ];

    /// The snake_case name, which is also the name of the lesson's binary.
    pub fn name(self) -> &'static str {
        match self {
            LessonKind::HelloWindow => "hello_window",
            LessonKind::TwoTriangles => "two_triangles",
            LessonKind::IndexedQuad => "indexed_quad",
            LessonKind::VertexColors => "vertex_colors",
            LessonKind::TexturedQuad => "textured_quad",
        }
    }

    /// A short human readable title.
    pub fn title(self) -> &'static str {
        match self {
            LessonKind::HelloWindow => "Hello Window",
            LessonKind::TwoTriangles => "Two Triangles",
            LessonKind::IndexedQuad => "Indexed Quad",
            LessonKind::VertexColors => "Vertex Colors",
            LessonKind::TexturedQuad => "Textured Quad",
        }
    }

    /// The number key that selects this lesson in the launcher, starting at 1.
    pub fn digit(self) -> u8 {
        Self::ALL
            .iter()
            .position(|&k| k == self)
            .map_or(0, |i| i as u8 + 1)
    }

    pub fn from_digit(digit: u8) -> Option<Self> {
        digit
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i as usize).copied())
    }

    /// Builds the window title shown while this lesson runs.
    pub fn window_title(self, base: &str) -> String {
        format!("{} - {}", base, self.title())
    }
}

impl fmt::Display for LessonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for LessonKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(digit) = s.parse::<u8>() {
            return Self::from_digit(digit)
                .ok_or_else(|| format!("No lesson with number {}", digit));
        }

        let normalized = s.to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|k| k.name() == normalized)
            .ok_or_else(|| format!("Unknown lesson '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_cover_every_lesson() {
        for (i, kind) in LessonKind::ALL.iter().enumerate() {
            assert_eq!(kind.digit() as usize, i + 1);
            assert_eq!(LessonKind::from_digit(kind.digit()), Some(*kind));
        }
        assert_eq!(LessonKind::from_digit(0), None);
        assert_eq!(LessonKind::from_digit(6), None);
    }

    #[test]
    fn test_lesson_parsing() {
        assert_eq!("textured_quad".parse::<LessonKind>(), Ok(LessonKind::TexturedQuad));
        assert_eq!("Two-Triangles".parse::<LessonKind>(), Ok(LessonKind::TwoTriangles));
        assert_eq!(" 3 ".parse::<LessonKind>(), Ok(LessonKind::IndexedQuad));
        assert!("9".parse::<LessonKind>().is_err());
        assert!("cube".parse::<LessonKind>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for kind in LessonKind::ALL {
            assert_eq!(kind.to_string().parse::<LessonKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_window_title() {
        assert_eq!(
            LessonKind::VertexColors.window_title("QiangGL"),
            "QiangGL - Vertex Colors"
        );
    }
}
