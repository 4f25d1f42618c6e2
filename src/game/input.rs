use glam::Vec3;

/// Keys steering the computer paddle (air hockey, AI off).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleKey {
    /// W
    Forward,
    /// S
    Backward,
    /// A
    Left,
    /// D
    Right,
    /// Space: hop the paddle regardless of AI/pause state.
    Lift,
}

impl PaddleKey {
    /// Fixed-magnitude impulse per key, straight from the demo's key table.
    pub fn impulse(self) -> Vec3 {
        match self {
            PaddleKey::Forward => Vec3::new(0.0, 0.0, 3.0),
            PaddleKey::Backward => Vec3::new(0.0, 0.0, -3.0),
            PaddleKey::Left => Vec3::new(3.0, 0.0, 0.0),
            PaddleKey::Right => Vec3::new(-3.0, 0.0, 0.0),
            PaddleKey::Lift => Vec3::new(0.0, 3.0, 0.0),
        }
    }
}

/// Arrow keys steering the player paddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Up,
    Down,
    Left,
    Right,
}

impl ArrowKey {
    pub fn impulse(self) -> Vec3 {
        match self {
            ArrowKey::Up => Vec3::new(0.0, 0.0, 1.0),
            ArrowKey::Down => Vec3::new(0.0, 0.0, -1.0),
            ArrowKey::Left => Vec3::new(1.0, 0.0, 0.0),
            ArrowKey::Right => Vec3::new(-1.0, 0.0, 0.0),
        }
    }
}

/// Keys tilting the maze board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiltKey {
    /// W
    PitchUp,
    /// S
    PitchDown,
    /// A
    RollLeft,
    /// D
    RollRight,
}

/// Last known cursor position, for delta-based mouse impulses. Cursor
/// coordinates are pre-normalized to [-1, 1].
#[derive(Debug, Default)]
pub struct InputState {
    last_cursor: Option<(f32, f32)>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cursor sample and return the delta from the previous one.
    /// The first sample establishes the baseline and yields no delta.
    pub fn cursor_delta(&mut self, x: f32, y: f32) -> (f32, f32) {
        let delta = match self.last_cursor {
            Some((px, py)) => (x - px, y - py),
            None => (0.0, 0.0),
        };
        self.last_cursor = Some((x, y));
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_cursor_sample_yields_no_delta() {
        let mut input = InputState::new();
        assert_eq!(input.cursor_delta(0.3, -0.2), (0.0, 0.0));
    }

    #[test]
    fn deltas_use_the_previous_sample_as_baseline() {
        let mut input = InputState::new();
        input.cursor_delta(0.0, 0.0);
        assert_eq!(input.cursor_delta(0.1, -0.1), (0.1, -0.1));
        let (dx, dy) = input.cursor_delta(0.1, 0.1);
        assert!(dx.abs() < 1e-6);
        assert!((dy - 0.2).abs() < 1e-6);
    }

    #[test]
    fn key_impulses_match_the_table() {
        assert_eq!(PaddleKey::Forward.impulse(), Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(PaddleKey::Right.impulse(), Vec3::new(-3.0, 0.0, 0.0));
        assert_eq!(ArrowKey::Up.impulse(), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(ArrowKey::Left.impulse(), Vec3::new(1.0, 0.0, 0.0));
    }
}
