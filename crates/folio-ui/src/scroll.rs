//! # Scroll model
//!
//! The page scrolls on one axis. `ScrollState` keeps the viewport height,
//! the content height, and the current offset, always clamped to
//! `[0, content - viewport]`.
//!
//! Two ways to move it:
//!
//! - `scroll_by` / `set_offset`: immediate, e.g. a wheel event.
//! - `scroll_to`: eased, e.g. a nav link jumping to `#contact`. The host
//!   calls `tick(now)` each frame until it returns `false`.
//!
//! The offset lives in a `Signal<f32>`; anything that reacts to scrolling
//! (the active-section tracker, the nav bar's "scrolled" style) subscribes
//! through `on_scroll`, which hands back a `Dispose` for its scope.

use std::cell::RefCell;

use folio_core::*;
use web_time::{Duration, Instant};

pub struct ScrollState {
    scroll_offset: Signal<f32>,
    viewport_height: Signal<f32>,
    content_height: Signal<f32>,
    smooth: RefCell<Option<AnimatedValue<f32>>>,
    smooth_spec: AnimationSpec,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollState {
    pub fn new() -> Self {
        Self::with_smooth_duration(Duration::from_millis(600))
    }

    pub fn with_smooth_duration(duration: Duration) -> Self {
        Self {
            scroll_offset: signal(0.0),
            viewport_height: signal(0.0),
            content_height: signal(0.0),
            smooth: RefCell::new(None),
            smooth_spec: AnimationSpec::tween(duration, Easing::EaseInOut),
        }
    }

    pub fn set_viewport_height(&self, h: f32) {
        self.viewport_height.set(h.max(0.0));
        self.clamp_offset();
    }
    pub fn set_content_height(&self, h: f32) {
        self.content_height.set(h.max(0.0));
        self.clamp_offset();
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height.get()
    }

    pub fn content_height(&self) -> f32 {
        self.content_height.get()
    }

    pub fn max_offset(&self) -> f32 {
        (self.content_height.get() - self.viewport_height.get()).max(0.0)
    }

    /// Jumps without animation; cancels any smooth scroll in flight.
    pub fn set_offset(&self, off: f32) {
        self.smooth.borrow_mut().take();
        let clamped = off.clamp(0.0, self.max_offset());
        self.scroll_offset.set_if_changed(clamped);
    }

    fn clamp_offset(&self) {
        let max_off = self.max_offset();
        let cur = self.scroll_offset.get();
        let clamped = cur.clamp(0.0, max_off);
        if clamped != cur {
            self.scroll_offset.set(clamped);
        }
    }

    pub fn get(&self) -> f32 {
        self.scroll_offset.get()
    }

    /// Consume dy (pixels), clamp to bounds, return leftover.
    pub fn scroll_by(&self, dy: f32) -> f32 {
        self.smooth.borrow_mut().take();
        let before = self.scroll_offset.get();
        let new_off = (before + dy).clamp(0.0, self.max_offset());
        self.scroll_offset.set_if_changed(new_off);
        dy - (new_off - before)
    }

    /// Starts an eased scroll towards `target` (clamped).
    pub fn scroll_to(&self, target: f32, now: Instant) {
        let target = target.clamp(0.0, self.max_offset());
        let mut anim = AnimatedValue::new(self.get(), self.smooth_spec);
        anim.set_target(target, now);
        log::debug!("smooth scroll {:.0} -> {:.0}", self.get(), target);
        *self.smooth.borrow_mut() = Some(anim);
    }

    pub fn is_animating(&self) -> bool {
        self.smooth.borrow().is_some()
    }

    /// Advance the smooth scroll; returns true while it is still running.
    pub fn tick(&self, now: Instant) -> bool {
        let (value, running) = {
            let mut slot = self.smooth.borrow_mut();
            let Some(anim) = slot.as_mut() else {
                return false;
            };
            let running = anim.update(now);
            let value = *anim.get();
            if !running {
                *slot = None;
            }
            (value, running)
        };
        // Subscribers run after the slot borrow is released.
        let clamped = value.clamp(0.0, self.max_offset());
        self.scroll_offset.set_if_changed(clamped);
        running
    }

    /// Subscribe to offset changes. The returned guard unsubscribes.
    pub fn on_scroll(&self, f: impl Fn(f32) + 'static) -> Dispose {
        let id = self.scroll_offset.subscribe(move |y| f(*y));
        let sig = self.scroll_offset.clone();
        Dispose::new(move || {
            sig.unsubscribe(id);
        })
    }

    pub fn offset_signal(&self) -> Signal<f32> {
        self.scroll_offset.clone()
    }

    /// Visible region in page coordinates.
    pub fn viewport(&self, width: f32) -> Rect {
        Rect::new(0.0, self.get(), width, self.viewport_height.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn state() -> ScrollState {
        let s = ScrollState::with_smooth_duration(Duration::from_millis(100));
        s.set_viewport_height(800.0);
        s.set_content_height(3000.0);
        s
    }

    #[test]
    fn clamps_and_returns_leftover() {
        let s = state();
        assert_eq!(s.scroll_by(-50.0), -50.0);
        assert_eq!(s.get(), 0.0);
        assert_eq!(s.scroll_by(5000.0), 5000.0 - 2200.0);
        assert_eq!(s.get(), 2200.0);
        s.set_content_height(1000.0);
        assert_eq!(s.get(), 200.0);
    }

    #[test]
    fn smooth_scroll_reaches_target() {
        let s = state();
        let t0 = Instant::now();
        s.scroll_to(1400.0, t0);
        assert!(s.tick(t0 + Duration::from_millis(50)));
        let mid = s.get();
        assert!(mid > 0.0 && mid < 1400.0);
        assert!(!s.tick(t0 + Duration::from_millis(100)));
        assert_eq!(s.get(), 1400.0);
        assert!(!s.is_animating());
    }

    #[test]
    fn manual_scroll_cancels_smooth() {
        let s = state();
        let t0 = Instant::now();
        s.scroll_to(2000.0, t0);
        s.set_offset(10.0);
        assert!(!s.tick(t0 + Duration::from_millis(50)));
        assert_eq!(s.get(), 10.0);
    }

    #[test]
    fn listener_detaches_on_dispose() {
        let s = state();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let d = {
            let seen = seen.clone();
            s.on_scroll(move |y| seen.borrow_mut().push(y))
        };
        s.set_offset(100.0);
        d.run();
        s.set_offset(200.0);
        assert_eq!(*seen.borrow(), vec![100.0]);
    }
}
