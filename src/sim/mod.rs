use std::time::Instant;

/// Solver substeps used by every demo's step call.
pub const SOLVER_SUBSTEPS: u32 = 10;

/// Per-frame time source. Holds the previous monotonic sample so consecutive
/// calls measure frame-to-frame deltas; this is the one piece of persistent
/// cross-frame state the simulation step owns.
#[derive(Debug)]
pub struct FrameClock {
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Seconds since the previous call; 0.0 on the first call so the first
    /// frame is a no-op step rather than a huge catch-up.
    pub fn dt(&mut self) -> f32 {
        let now = Instant::now();
        let dt = match self.last {
            Some(prev) => now.duration_since(prev).as_secs_f32(),
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.dt(), 0.0);
    }

    #[test]
    fn subsequent_samples_are_non_negative() {
        let mut clock = FrameClock::new();
        let _ = clock.dt();
        for _ in 0..5 {
            assert!(clock.dt() >= 0.0);
        }
    }
}
