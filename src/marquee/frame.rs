use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Longest step a single frame may report. Throttled tabs can hand us whole seconds at once.
const MAX_FRAME_SECONDS: f64 = 0.25;

/// Seconds between two `requestAnimationFrame` timestamps (milliseconds).
pub fn elapsed_seconds(previous_ms: f64, now_ms: f64) -> f64 {
    let dt = (now_ms - previous_ms) / 1000.0;
    if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_SECONDS)
    } else {
        0.0
    }
}

/// Turns successive frame timestamps into elapsed seconds.
///
/// After a [`FrameClock::reset`] the next timestamp only re-anchors the clock and
/// reports zero, so whatever happened while nothing was ticking is not replayed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let dt = self
            .last
            .map_or(0.0, |previous| elapsed_seconds(previous, now_ms));
        self.last = Some(now_ms);
        dt
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

struct Inner {
    handle: Cell<Option<i32>>,
    clock: Cell<FrameClock>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl Inner {
    fn schedule(&self) {
        if self.handle.get().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            match window.request_animation_frame(tick.as_ref().unchecked_ref()) {
                Ok(id) => self.handle.set(Some(id)),
                Err(err) => debug!("requestAnimationFrame refused: {:?}", err),
            }
        }
    }

    fn cancel(&self) {
        if let Some(id) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.reset_clock();
    }

    fn reset_clock(&self) {
        let mut clock = self.clock.get();
        clock.reset();
        self.clock.set(clock);
    }
}

/// One callback per display refresh, fed the seconds elapsed since the previous one.
///
/// The callback returns whether it wants another frame. Returning false, or calling
/// [`FrameLoop::pause`], parks the loop until [`FrameLoop::resume`]. The first frame
/// after parking reports zero elapsed time so the pause is not replayed as a jump.
/// Dropping the loop cancels any pending frame.
pub struct FrameLoop {
    inner: Rc<Inner>,
}

impl FrameLoop {
    pub fn new(mut on_frame: impl FnMut(f64) -> bool + 'static) -> Self {
        let inner = Rc::new(Inner {
            handle: Cell::new(None),
            clock: Cell::new(FrameClock::default()),
            tick: RefCell::new(None),
        });

        let weak: Weak<Inner> = Rc::downgrade(&inner);
        let tick = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.handle.set(None);
            let mut clock = inner.clock.get();
            let dt = clock.tick(timestamp);
            inner.clock.set(clock);

            if on_frame(dt) {
                inner.schedule();
            } else {
                inner.reset_clock();
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.tick.borrow_mut() = Some(tick);

        Self { inner }
    }

    /// Requests a frame unless one is already pending.
    pub fn resume(&self) {
        self.inner.schedule();
    }

    /// Drops any pending frame right away. A background tab may not deliver that
    /// frame until it is visible again, by which point the elapsed time is stale.
    pub fn pause(&self) {
        self.inner.cancel();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.inner.cancel();
        self.inner.tick.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_seconds_from_millis() {
        assert!((elapsed_seconds(1000.0, 1016.0) - 0.016).abs() < 1e-12);
        assert_eq!(elapsed_seconds(500.0, 500.0), 0.0);
    }

    #[test]
    fn test_elapsed_seconds_clamps() {
        assert_eq!(elapsed_seconds(2000.0, 1000.0), 0.0);
        assert_eq!(elapsed_seconds(0.0, 60_000.0), MAX_FRAME_SECONDS);
        assert_eq!(elapsed_seconds(0.0, f64::NAN), 0.0);
    }

    #[test]
    fn test_clock_first_tick_is_zero() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(5_000.0), 0.0);
        assert!((clock.tick(5_016.0) - 0.016).abs() < 1e-12);
    }

    #[test]
    fn test_clock_reset_forgets_paused_time() {
        let mut clock = FrameClock::default();
        clock.tick(1_000.0);
        clock.tick(1_016.0);

        // Tab hidden for a minute, then back.
        clock.reset();
        assert_eq!(clock.tick(61_016.0), 0.0);
        assert!((clock.tick(61_032.0) - 0.016).abs() < 1e-12);
    }

    #[test]
    fn test_clock_without_reset_is_clamped() {
        let mut clock = FrameClock::default();
        clock.tick(1_000.0);
        assert_eq!(clock.tick(61_000.0), MAX_FRAME_SECONDS);
    }
}
