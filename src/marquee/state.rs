//! Scroll position and pause bookkeeping for the marquee, free of any browser types.
//!
//! The strip is laid out twice. The lead copy sits at `-offset`, the trail copy at
//! `width - offset`, so when the lead has fully left on the left the trail occupies
//! exactly the spot the lead started from and the wrap is invisible.

/// Independent reasons to hold the strip still.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    ReducedMotion,
    TabHidden,
    OutOfView,
    Hovered,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Paused,
    Animating,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarqueeState {
    width: f64,
    offset: f64,
    reduced_motion: bool,
    tab_hidden: bool,
    out_of_view: bool,
    hovered: bool,
    detached: bool,
}

impl MarqueeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Takes a fresh measurement of one strip. Anything unusable counts as zero.
    pub fn set_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.width = width;
            self.offset = self.offset.rem_euclid(width);
        } else {
            self.width = 0.0;
            self.offset = 0.0;
        }
    }

    /// Returns true when the gate actually flipped.
    pub fn set_gate(&mut self, gate: Gate, active: bool) -> bool {
        let slot = match gate {
            Gate::ReducedMotion => &mut self.reduced_motion,
            Gate::TabHidden => &mut self.tab_hidden,
            Gate::OutOfView => &mut self.out_of_view,
            Gate::Hovered => &mut self.hovered,
        };
        let changed = *slot != active;
        *slot = active;
        changed
    }

    pub fn phase(&self) -> Phase {
        let blocked = self.detached
            || self.width <= 0.0
            || self.reduced_motion
            || self.tab_hidden
            || self.out_of_view
            || self.hovered;
        if blocked {
            Phase::Paused
        } else {
            Phase::Animating
        }
    }

    pub fn is_animating(&self) -> bool {
        self.phase() == Phase::Animating
    }

    /// Moves the strip by `speed * dt`. Returns whether the offset changed.
    pub fn advance(&mut self, speed: f64, dt: f64) -> bool {
        if !self.is_animating() {
            return false;
        }
        let delta = speed * dt;
        if !delta.is_finite() || delta <= 0.0 {
            return false;
        }
        self.offset = (self.offset + delta).rem_euclid(self.width);
        true
    }

    /// Horizontal translation of the lead and trail copies.
    pub fn strip_positions(&self) -> (f64, f64) {
        (-self.offset, self.width - self.offset)
    }

    /// Owner went away; nothing may move this state again until reattached.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    pub fn attach(&mut self) {
        self.detached = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GATES: [Gate; 4] = [Gate::ReducedMotion, Gate::TabHidden, Gate::OutOfView, Gate::Hovered];

    fn measured(width: f64) -> MarqueeState {
        let mut state = MarqueeState::new();
        state.set_width(width);
        state
    }

    #[test]
    fn test_starts_paused_until_measured() {
        let mut state = MarqueeState::new();
        assert_eq!(state.phase(), Phase::Paused);
        assert!(!state.advance(60.0, 0.016));
        assert_eq!(state.offset(), 0.0);

        state.set_width(800.0);
        assert_eq!(state.phase(), Phase::Animating);
    }

    #[test]
    fn test_advance_is_speed_times_elapsed() {
        let mut state = measured(1000.0);
        assert!(state.advance(50.0, 0.5));
        assert_eq!(state.offset(), 25.0);
        assert!(state.advance(50.0, 1.0));
        assert_eq!(state.offset(), 75.0);
    }

    #[test]
    fn test_offset_wraps_within_width() {
        let mut state = measured(100.0);
        state.advance(90.0, 1.0);
        state.advance(30.0, 1.0);
        assert!((state.offset() - 20.0).abs() < 1e-9);
        assert!(state.offset() >= 0.0 && state.offset() < state.width());
    }

    #[test]
    fn test_advancing_whole_widths_keeps_position() {
        let mut state = measured(240.0);
        state.advance(30.0, 1.0);
        let before = state.offset();
        for multiple in 1..5 {
            state.advance(240.0 * multiple as f64, 1.0);
            assert!((state.offset() - before).abs() < 1e-9);
        }
    }

    #[test]
    fn test_strips_are_one_width_apart() {
        let mut state = measured(512.0);
        for _ in 0..40 {
            state.advance(97.0, 0.37);
            let (lead, trail) = state.strip_positions();
            assert!((trail - lead - state.width()).abs() < 1e-9);
            assert!(lead <= 0.0 && lead > -state.width());
        }
    }

    #[test]
    fn test_any_gate_freezes_offset() {
        for gate in GATES {
            let mut state = measured(300.0);
            state.advance(10.0, 1.0);
            assert!(state.set_gate(gate, true));
            assert_eq!(state.phase(), Phase::Paused);

            let frozen = state.offset();
            assert!(!state.advance(10.0, 1.0));
            assert!(!state.advance(10.0, 1.0));
            assert_eq!(state.offset(), frozen);
        }
    }

    #[test]
    fn test_all_gates_must_clear_to_resume() {
        let mut state = measured(300.0);
        state.set_gate(Gate::TabHidden, true);
        state.set_gate(Gate::Hovered, true);

        state.set_gate(Gate::Hovered, false);
        assert_eq!(state.phase(), Phase::Paused);

        state.set_gate(Gate::TabHidden, false);
        assert_eq!(state.phase(), Phase::Animating);
    }

    #[test]
    fn test_resume_continues_from_last_offset() {
        let mut state = measured(300.0);
        state.advance(40.0, 1.0);
        state.set_gate(Gate::OutOfView, true);
        state.set_gate(Gate::OutOfView, false);
        state.advance(10.0, 1.0);
        assert_eq!(state.offset(), 50.0);
    }

    #[test]
    fn test_offset_strictly_increases_between_frames_when_free() {
        let mut state = measured(10_000.0);
        let mut last = state.offset();
        for _ in 0..100 {
            assert!(state.advance(120.0, 1.0 / 60.0));
            assert!(state.offset() > last);
            last = state.offset();
        }
    }

    #[test]
    fn test_set_gate_reports_changes_only() {
        let mut state = MarqueeState::new();
        assert!(state.set_gate(Gate::ReducedMotion, true));
        assert!(!state.set_gate(Gate::ReducedMotion, true));
        assert!(state.set_gate(Gate::ReducedMotion, false));
    }

    #[test]
    fn test_bad_measurements_degrade_to_static() {
        let mut state = measured(200.0);
        state.advance(50.0, 1.0);

        state.set_width(0.0);
        assert_eq!(state.offset(), 0.0);
        assert!(!state.advance(50.0, 1.0));

        state.set_width(f64::NAN);
        assert_eq!(state.width(), 0.0);
        assert_eq!(state.phase(), Phase::Paused);
    }

    #[test]
    fn test_resize_rewraps_offset() {
        let mut state = measured(500.0);
        state.advance(430.0, 1.0);
        state.set_width(400.0);
        assert_eq!(state.offset(), 30.0);
    }

    #[test]
    fn test_negative_or_nonfinite_steps_are_ignored() {
        let mut state = measured(500.0);
        assert!(!state.advance(-20.0, 1.0));
        assert!(!state.advance(20.0, f64::INFINITY));
        assert!(!state.advance(20.0, 0.0));
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn test_detached_state_never_moves() {
        let mut state = measured(500.0);
        state.advance(20.0, 1.0);
        state.detach();
        assert!(!state.advance(20.0, 1.0));
        assert_eq!(state.offset(), 20.0);

        state.attach();
        assert!(state.advance(20.0, 1.0));
    }
}
