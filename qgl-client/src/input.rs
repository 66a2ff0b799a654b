use fxhash::FxHashSet;
use qgl_core::LessonKind;
use sdl2::keyboard::Keycode;

/// The current state of the keyboard.
#[derive(Default)]
pub struct KeyboardState {
    pub down: FxHashSet<Keycode>,
    pub pressed: FxHashSet<Keycode>,
    pub released: FxHashSet<Keycode>,
}

impl KeyboardState {
    /// Forgets the keys pressed and released during the previous frame.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }

    /// Records a key going down. Auto-repeat events are ignored.
    pub fn key_down(&mut self, keycode: Keycode, repeat: bool) {
        if repeat {
            return;
        }
        self.down.insert(keycode);
        self.pressed.insert(keycode);
    }

    pub fn key_up(&mut self, keycode: Keycode) {
        self.down.remove(&keycode);
        self.released.insert(keycode);
    }

    /// Whether `keycode` is held this frame.
    pub fn is_down(&self, keycode: Keycode) -> bool {
        self.down.contains(&keycode)
    }

    /// Whether `keycode` went down during this frame.
    pub fn was_pressed(&self, keycode: Keycode) -> bool {
        self.pressed.contains(&keycode)
    }

    /// The lesson picked by a digit key pressed this frame. Digits without a
    /// lesson are skipped; if several lessons were picked the lowest wins.
    pub fn pressed_lesson(&self) -> Option<LessonKind> {
        self.pressed
            .iter()
            .filter_map(|&k| digit_for(k))
            .filter_map(LessonKind::from_digit)
            .min_by_key(|kind| kind.digit())
    }
}

/// Maps the number row and keypad keys `1`..`9` to their digit.
pub fn digit_for(keycode: Keycode) -> Option<u8> {
    match keycode {
        Keycode::Num1 | Keycode::Kp1 => Some(1),
        Keycode::Num2 | Keycode::Kp2 => Some(2),
        Keycode::Num3 | Keycode::Kp3 => Some(3),
        Keycode::Num4 | Keycode::Kp4 => Some(4),
        Keycode::Num5 | Keycode::Kp5 => Some(5),
        Keycode::Num6 | Keycode::Kp6 => Some(6),
        Keycode::Num7 | Keycode::Kp7 => Some(7),
        Keycode::Num8 | Keycode::Kp8 => Some(8),
        Keycode::Num9 | Keycode::Kp9 => Some(9),
        _ => None,
    }
}

/// Context provided to lessons during the update phase.
pub struct UpdateContext<'a> {
    pub keyboard: &'a KeyboardState,
    /// Seconds since the previous frame.
    pub delta_time: f32,
    /// Seconds since the lesson started.
    pub elapsed: f32,
}

impl<'a> UpdateContext<'a> {
    pub fn new(keyboard: &'a KeyboardState, delta_time: f32, elapsed: f32) -> Self {
        Self {
            keyboard,
            delta_time,
            elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressed_is_cleared_each_frame() {
        let mut keyboard = KeyboardState::default();
        keyboard.key_down(Keycode::Up, false);
        assert!(keyboard.is_down(Keycode::Up));
        assert!(keyboard.was_pressed(Keycode::Up));

        keyboard.begin_frame();
        assert!(keyboard.is_down(Keycode::Up));
        assert!(!keyboard.was_pressed(Keycode::Up));

        keyboard.key_up(Keycode::Up);
        assert!(!keyboard.is_down(Keycode::Up));
        assert!(keyboard.released.contains(&Keycode::Up));
    }

    #[test]
    fn test_repeats_do_not_count_as_presses() {
        let mut keyboard = KeyboardState::default();
        keyboard.key_down(Keycode::Space, true);
        assert!(!keyboard.is_down(Keycode::Space));
        assert!(!keyboard.was_pressed(Keycode::Space));
    }

    #[test]
    fn test_digit_keys() {
        assert_eq!(digit_for(Keycode::Num1), Some(1));
        assert_eq!(digit_for(Keycode::Kp5), Some(5));
        assert_eq!(digit_for(Keycode::Num0), None);
        assert_eq!(digit_for(Keycode::A), None);

        let mut keyboard = KeyboardState::default();
        assert_eq!(keyboard.pressed_lesson(), None);
        keyboard.key_down(Keycode::Num3, false);
        assert_eq!(keyboard.pressed_lesson(), Some(LessonKind::IndexedQuad));
    }

    #[test]
    fn test_digit_without_lesson_does_not_hide_one() {
        let mut keyboard = KeyboardState::default();
        keyboard.key_down(Keycode::Num6, false);
        keyboard.key_down(Keycode::Num9, false);
        assert_eq!(keyboard.pressed_lesson(), None);

        keyboard.key_down(Keycode::Kp2, false);
        assert_eq!(keyboard.pressed_lesson(), Some(LessonKind::TwoTriangles));

        keyboard.key_down(Keycode::Num4, false);
        assert_eq!(keyboard.pressed_lesson(), Some(LessonKind::TwoTriangles));
    }
}
