//! Small pieces of per-frame math driven by time and held keys.

/// Units per second the texture blend factor moves while a key is held.
pub const MIX_SPEED: f32 = 0.6;

/// Green intensity of the pulsing color at `seconds`, oscillating in `[0, 1]`.
#[inline]
pub fn pulse_green(seconds: f32) -> f32 {
    seconds.sin() / 2.0 + 0.5
}

/// Which way a held pair of keys pushes a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
    Hold,
}

impl Direction {
    /// Resolves an up/down key pair. Holding both cancels out.
    pub fn from_keys(up: bool, down: bool) -> Self {
        match (up, down) {
            (true, false) => Direction::Increase,
            (false, true) => Direction::Decrease,
            _ => Direction::Hold,
        }
    }

    fn sign(self) -> f32 {
        match self {
            Direction::Increase => 1.0,
            Direction::Decrease => -1.0,
            Direction::Hold => 0.0,
        }
    }
}

/// Blend factor between two textures, kept in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MixControl {
    value: f32,
}

impl MixControl {
    pub fn new(value: f32) -> Self {
        Self {
            value: value.clamp(0.0, 1.0),
        }
    }

    /// Moves the factor for one frame lasting `delta_time` seconds.
    pub fn step(&mut self, direction: Direction, delta_time: f32) {
        let delta = direction.sign() * MIX_SPEED * delta_time.max(0.0);
        self.value = (self.value + delta).clamp(0.0, 1.0);
    }

    pub fn value(&self) -> f32 {
        self.value
    }
}

/// An on/off switch flipped by key presses. Starts off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Toggle {
    on: bool,
}

impl Toggle {
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Flips the switch if `pressed`. Returns whether it flipped.
    pub fn update(&mut self, pressed: bool) -> bool {
        if pressed {
            self.on = !self.on;
        }
        pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_stays_in_unit_range() {
        let mut t = 0.0;
        while t < 20.0 {
            let g = pulse_green(t);
            assert!((0.0..=1.0).contains(&g));
            t += 0.05;
        }
        assert!((pulse_green(0.0) - 0.5).abs() < 1e-6);
        assert!((pulse_green(std::f32::consts::FRAC_PI_2) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_direction_from_keys() {
        assert_eq!(Direction::from_keys(true, false), Direction::Increase);
        assert_eq!(Direction::from_keys(false, true), Direction::Decrease);
        assert_eq!(Direction::from_keys(true, true), Direction::Hold);
        assert_eq!(Direction::from_keys(false, false), Direction::Hold);
    }

    #[test]
    fn test_mix_control_clamps() {
        let mut mix = MixControl::default();
        assert_eq!(mix.value(), 0.0);

        mix.step(Direction::Decrease, 1.0);
        assert_eq!(mix.value(), 0.0);

        mix.step(Direction::Increase, 0.5);
        assert!((mix.value() - MIX_SPEED * 0.5).abs() < 1e-6);

        for _ in 0..100 {
            mix.step(Direction::Increase, 0.1);
        }
        assert_eq!(mix.value(), 1.0);

        mix.step(Direction::Hold, 10.0);
        assert_eq!(mix.value(), 1.0);
    }

    #[test]
    fn test_negative_delta_time_is_ignored() {
        let mut mix = MixControl::new(0.5);
        mix.step(Direction::Increase, -1.0);
        assert_eq!(mix.value(), 0.5);
        assert_eq!(MixControl::new(3.0).value(), 1.0);
    }

    #[test]
    fn test_toggle_flips_on_press_only() {
        let mut toggle = Toggle::default();
        assert!(!toggle.is_on());

        assert!(!toggle.update(false));
        assert!(!toggle.is_on());

        assert!(toggle.update(true));
        assert!(toggle.is_on());

        assert!(toggle.update(true));
        assert!(!toggle.is_on());
    }
}
