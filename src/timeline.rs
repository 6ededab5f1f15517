//! Timed reveal bookkeeping driven by caller-supplied instants.
//!
//! Nothing in here reads a clock. Components pass `now_ms()` in, tests pass
//! literal instants, and `use_wake` turns the next pending instant into a
//! single `Timeout` that is cancelled whenever it goes stale.

use std::ops::Range;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::js_sys::Date;
use yew::prelude::*;

/// Wall clock in milliseconds.
pub fn now_ms() -> f64 {
    Date::now()
}

/// Fires exactly once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    /// Returns true the first time only.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// A hidden-to-shown flag that flips at most once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reveal {
    guard: OneShot,
}

impl Reveal {
    /// Returns true only for the call that actually flipped it.
    pub fn show(&mut self) -> bool {
        self.guard.fire()
    }

    pub fn is_visible(&self) -> bool {
        self.guard.has_fired()
    }
}

pub struct Show;

impl Reducible for Reveal {
    type Action = Show;

    fn reduce(self: Rc<Self>, _: Show) -> Rc<Self> {
        let mut next = *self;
        if next.show() {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// A fixed list of steps, each due at an offset from a single start instant.
#[derive(Clone, Debug, PartialEq)]
pub struct Cascade {
    offsets: Vec<f64>,
    trigger: OneShot,
    started_at: Option<f64>,
    reached: usize,
}

impl Cascade {
    /// `offsets` must be non-decreasing.
    pub fn new(offsets: Vec<f64>) -> Self {
        debug_assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
        Self {
            offsets,
            trigger: OneShot::default(),
            started_at: None,
            reached: 0,
        }
    }

    /// `steps` entries spaced `stagger` apart, the first one due immediately.
    pub fn staggered(steps: usize, stagger: f64) -> Self {
        Self::new((0..steps).map(|i| i as f64 * stagger).collect())
    }

    /// Starts the cascade. Later calls are ignored and return false.
    pub fn start(&mut self, now: f64) -> bool {
        if !self.trigger.fire() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    /// Marks every step due by `now` as reached and returns the indices that
    /// were newly reached by this call, in order.
    pub fn advance(&mut self, now: f64) -> Range<usize> {
        let from = self.reached;
        if let Some(start) = self.started_at {
            while self.reached < self.offsets.len() && start + self.offsets[self.reached] <= now {
                self.reached += 1;
            }
        }
        from..self.reached
    }

    /// Absolute instant of the next pending step.
    pub fn next_wake(&self) -> Option<f64> {
        let start = self.started_at?;
        self.offsets.get(self.reached).map(|offset| start + offset)
    }
}

/// Earliest of two optional instants.
pub fn earliest(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Keeps one timer armed for `next_wake` and emits the current time when it
/// fires. A changed or cleared instant drops the previous timer.
#[hook]
pub fn use_wake(next_wake: Option<f64>, on_wake: Callback<f64>) {
    use_effect_with_deps(
        move |wake: &Option<f64>| {
            let timeout = wake.map(|at| {
                let delay = (at - now_ms()).max(0.0).ceil() as u32;
                // Never report a time before the deadline, or the caller
                // would see no progress and the timer would not re-arm.
                Timeout::new(delay, move || on_wake.emit(now_ms().max(at)))
            });
            move || drop(timeout)
        },
        next_wake,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_shot_fires_once() {
        let mut guard = OneShot::default();
        assert!(!guard.has_fired());
        assert!(guard.fire());
        assert!(!guard.fire());
        assert!(!guard.fire());
        assert!(guard.has_fired());
    }

    #[test]
    fn reveal_flips_once() {
        let mut reveal = Reveal::default();
        assert!(!reveal.is_visible());
        let flips = (0..5).filter(|_| reveal.show()).count();
        assert_eq!(flips, 1);
        assert!(reveal.is_visible());
    }

    #[test]
    fn reveal_reducer_keeps_state_after_first_show() {
        let hidden = Rc::new(Reveal::default());
        let shown = hidden.clone().reduce(Show);
        assert!(shown.is_visible());
        let again = shown.clone().reduce(Show);
        assert!(Rc::ptr_eq(&shown, &again));
    }

    #[test]
    fn cascade_waits_for_start() {
        let mut cascade = Cascade::staggered(3, 100.0);
        assert_eq!(cascade.advance(10_000.0), 0..0);
        assert_eq!(cascade.next_wake(), None);
    }

    #[test]
    fn cascade_steps_in_order() {
        let mut cascade = Cascade::staggered(4, 300.0);
        assert!(cascade.start(1000.0));
        assert_eq!(cascade.advance(1000.0), 0..1);
        assert_eq!(cascade.next_wake(), Some(1300.0));
        assert_eq!(cascade.advance(1299.0), 1..1);
        assert_eq!(cascade.advance(1650.0), 1..3);
        assert_eq!(cascade.next_wake(), Some(1900.0));
        assert_eq!(cascade.advance(1900.0), 3..4);
        assert_eq!(cascade.next_wake(), None);
    }

    #[test]
    fn cascade_restart_is_ignored() {
        let mut cascade = Cascade::new(vec![1000.0, 2000.0]);
        assert!(cascade.start(0.0));
        assert!(!cascade.start(500.0));
        assert_eq!(cascade.next_wake(), Some(1000.0));
        assert_eq!(cascade.advance(2000.0), 0..2);
    }

    #[test]
    fn earliest_picks_minimum() {
        assert_eq!(earliest(Some(3.0), Some(2.0)), Some(2.0));
        assert_eq!(earliest(None, Some(2.0)), Some(2.0));
        assert_eq!(earliest(Some(3.0), None), Some(3.0));
        assert_eq!(earliest(None, None), None);
    }
}
