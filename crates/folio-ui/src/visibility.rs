//! Viewport intersection for page regions.
//!
//! A `VisibilityObserver` is fed the region's current rect and the viewport
//! every time either changes. Ratio is the visible fraction of the region's
//! height. With `trigger_once` the first positive answer sticks.

use std::cell::{Cell, RefCell};

use folio_core::{Rect, Signal, signal};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityOptions {
    /// Minimum visible fraction in `[0, 1]`. Zero means any overlap.
    pub threshold: f32,
    pub trigger_once: bool,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            trigger_once: true,
        }
    }
}

pub struct VisibilityObserver {
    opts: VisibilityOptions,
    visible: Signal<bool>,
    latched: Cell<bool>,
    first: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl std::fmt::Debug for VisibilityObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisibilityObserver")
            .field("opts", &self.opts)
            .field("visible", &self.visible.get())
            .field("latched", &self.latched.get())
            .finish()
    }
}

impl VisibilityObserver {
    pub fn new(opts: VisibilityOptions) -> Self {
        Self {
            opts: VisibilityOptions {
                threshold: opts.threshold.clamp(0.0, 1.0),
                ..opts
            },
            visible: signal(false),
            latched: Cell::new(false),
            first: RefCell::new(None),
        }
    }

    /// Fraction of `region`'s height inside `viewport`.
    pub fn ratio(region: Rect, viewport: Rect) -> f32 {
        if region.h <= 0.0 {
            return 0.0;
        }
        let top = region.y.max(viewport.y);
        let bottom = region.bottom().min(viewport.bottom());
        ((bottom - top).max(0.0) / region.h).min(1.0)
    }

    /// Re-evaluates visibility. `None` means the region is not attached.
    pub fn observe(&self, region: Option<Rect>, viewport: Rect) -> bool {
        if self.latched.get() {
            return true;
        }
        let now_visible = match region {
            Some(r) if r.h > 0.0 => {
                let ratio = Self::ratio(r, viewport);
                if self.opts.threshold == 0.0 {
                    // Touching edges do not count as overlap.
                    r.y < viewport.bottom() && viewport.y < r.bottom()
                } else {
                    ratio >= self.opts.threshold
                }
            }
            _ => false,
        };

        if now_visible && self.opts.trigger_once {
            self.latched.set(true);
        }
        if self.visible.set_if_changed(now_visible) && now_visible {
            log::debug!("region became visible");
            let hook = self.first.borrow_mut().take();
            if let Some(f) = hook {
                f();
            }
        }
        now_visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn visible_signal(&self) -> Signal<bool> {
        self.visible.clone()
    }

    /// Runs `f` on the first false-to-true edge. Replaces any earlier hook
    /// that has not fired yet; ignored once the region has been seen.
    pub fn on_first_visible(&self, f: impl FnOnce() + 'static) {
        if self.visible.get() || self.latched.get() {
            return;
        }
        *self.first.borrow_mut() = Some(Box::new(f));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn viewport(y: f32) -> Rect {
        Rect::new(0.0, y, 1280.0, 800.0)
    }

    #[test]
    fn ratio_is_visible_fraction_of_height() {
        let region = Rect::new(0.0, 700.0, 1280.0, 400.0);
        assert_eq!(VisibilityObserver::ratio(region, viewport(0.0)), 0.25);
        assert_eq!(VisibilityObserver::ratio(region, viewport(700.0)), 1.0);
        assert_eq!(VisibilityObserver::ratio(region, viewport(2000.0)), 0.0);
    }

    #[test]
    fn threshold_gates_visibility() {
        let obs = VisibilityObserver::new(VisibilityOptions {
            threshold: 0.5,
            trigger_once: false,
        });
        let region = Some(Rect::new(0.0, 700.0, 1280.0, 400.0));
        assert!(!obs.observe(region, viewport(0.0)));
        assert!(obs.observe(region, viewport(200.0)));
        assert!(!obs.observe(region, viewport(3000.0)));
        assert!(!obs.is_visible());
    }

    #[test]
    fn trigger_once_latches() {
        let obs = VisibilityObserver::new(VisibilityOptions::default());
        let region = Some(Rect::new(0.0, 700.0, 1280.0, 400.0));
        assert!(obs.observe(region, viewport(0.0)));
        assert!(obs.observe(region, viewport(5000.0)));
        assert!(obs.observe(None, viewport(5000.0)));
        assert!(obs.is_visible());
    }

    #[test]
    fn signal_reports_each_edge() {
        let obs = VisibilityObserver::new(VisibilityOptions {
            threshold: 0.5,
            trigger_once: false,
        });
        let edges = Rc::new(RefCell::new(Vec::new()));
        obs.visible_signal().subscribe({
            let edges = edges.clone();
            move |v| edges.borrow_mut().push(*v)
        });
        let region = Some(Rect::new(0.0, 700.0, 1280.0, 400.0));
        for y in [0.0, 200.0, 300.0, 3000.0] {
            obs.observe(region, viewport(y));
        }
        assert_eq!(*edges.borrow(), vec![true, false]);
    }

    #[test]
    fn zero_threshold_needs_real_overlap() {
        let obs = VisibilityObserver::new(VisibilityOptions {
            threshold: 0.0,
            trigger_once: false,
        });
        let touching = Some(Rect::new(0.0, 800.0, 1280.0, 100.0));
        assert!(!obs.observe(touching, viewport(0.0)));
        assert!(obs.observe(touching, viewport(1.0)));
    }

    #[test]
    fn detached_or_empty_region_is_not_visible() {
        let obs = VisibilityObserver::new(VisibilityOptions::default());
        assert!(!obs.observe(None, viewport(0.0)));
        assert!(!obs.observe(Some(Rect::new(0.0, 10.0, 100.0, 0.0)), viewport(0.0)));
        // Neither latched.
        assert!(obs.observe(Some(Rect::new(0.0, 10.0, 100.0, 50.0)), viewport(0.0)));
    }

    #[test]
    fn first_visible_hook_fires_once() {
        let obs = VisibilityObserver::new(VisibilityOptions {
            threshold: 0.1,
            trigger_once: false,
        });
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        obs.on_first_visible(move || h.set(h.get() + 1));

        let region = Some(Rect::new(0.0, 0.0, 100.0, 100.0));
        obs.observe(region, viewport(0.0));
        obs.observe(region, viewport(5000.0));
        obs.observe(region, viewport(0.0));
        assert_eq!(hits.get(), 1);
    }
}
