/// Cross-fade between two weather presets.
///
/// `progress` doubles as the global compositing alpha while the new scene
/// fades in. Invariant: `active == (progress < 1.0)`, and progress only
/// ever increases while active.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    progress: f32,
    speed: f32,
    active: bool,
}

impl Transition {
    /// Fade-in increment per tick; a full fade takes 20 ticks.
    pub const SPEED: f32 = 0.05;

    /// Starts settled (no fade pending).
    #[must_use]
    pub fn settled() -> Self {
        Self {
            progress: 1.0,
            speed: Self::SPEED,
            active: false,
        }
    }

    /// Restart the fade from fully transparent.
    pub fn begin(&mut self) {
        self.progress = 0.0;
        self.active = true;
    }

    /// Advance one tick; clamps at 1 and settles.
    pub fn advance(&mut self) {
        if !self.active {
            return;
        }
        self.progress += self.speed;
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.active = false;
        }
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_state_is_opaque_and_inactive() {
        let t = Transition::settled();
        assert!(!t.is_active());
        assert!((t.progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn begin_resets_progress_to_zero() {
        let mut t = Transition::settled();
        t.begin();
        assert!(t.is_active());
        assert!(t.progress().abs() < f32::EPSILON);
    }

    #[test]
    fn progress_is_monotonic_and_settles_in_twenty_ticks() {
        let mut t = Transition::settled();
        t.begin();
        let mut last = t.progress();
        let mut ticks = 0;
        while t.is_active() {
            t.advance();
            assert!(t.progress() >= last);
            last = t.progress();
            ticks += 1;
            assert!(ticks <= 1 + (1.0 / Transition::SPEED).ceil() as u32);
        }
        assert_eq!(ticks, (1.0 / Transition::SPEED).ceil() as u32);
        assert!((t.progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn advance_after_settling_is_a_no_op() {
        let mut t = Transition::settled();
        t.advance();
        assert!(!t.is_active());
        assert!((t.progress() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn invariant_active_iff_progress_below_one() {
        let mut t = Transition::settled();
        t.begin();
        for _ in 0..40 {
            assert_eq!(t.is_active(), t.progress() < 1.0);
            t.advance();
        }
        assert_eq!(t.is_active(), t.progress() < 1.0);
    }
}
