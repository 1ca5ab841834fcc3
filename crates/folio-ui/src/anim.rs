//! Staggered entrance animations.
//!
//! A `Stagger` describes how a group of children enters: the group waits
//! `delay_children`, then child `i` begins `i * stagger` later and runs
//! `item` from its `from` state (faded, shifted down) to rest. The
//! description is plain data; `EntranceSequence` pins it to a start instant
//! and samples per-child styles for any `now`.

use std::cell::Cell;

use folio_core::{AnimationSpec, Easing, Interpolate, Modifier};
use web_time::{Duration, Instant};

/// Ease used by the about section's reveal.
pub const EASE_EXPO_OUT: Easing = Easing::CubicBezier(0.6, -0.05, 0.01, 0.99);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemTransition {
    pub duration: Duration,
    pub easing: Easing,
    pub from_alpha: f32,
    pub from_offset_x: f32,
    pub from_offset_y: f32,
}

impl ItemTransition {
    pub fn fade_up(duration: Duration, from_offset_y: f32) -> Self {
        Self {
            duration,
            easing: Easing::EaseOut,
            from_alpha: 0.0,
            from_offset_x: 0.0,
            from_offset_y,
        }
    }

    pub fn slide_in(duration: Duration, from_offset_x: f32) -> Self {
        Self {
            from_offset_x,
            ..Self::fade_up(duration, 0.0)
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub delay_children: Duration,
    pub stagger: Duration,
    pub item: ItemTransition,
}

impl Stagger {
    pub fn hero() -> Self {
        Self {
            delay_children: Duration::from_millis(300),
            stagger: Duration::from_millis(200),
            item: ItemTransition::fade_up(Duration::from_millis(800), 50.0),
        }
    }

    /// Contact and skills.
    pub fn section() -> Self {
        Self {
            delay_children: Duration::ZERO,
            stagger: Duration::from_millis(200),
            item: ItemTransition::fade_up(Duration::from_millis(600), 20.0),
        }
    }

    /// Timeline entries slide in from the left.
    pub fn timeline() -> Self {
        Self {
            delay_children: Duration::ZERO,
            stagger: Duration::from_millis(300),
            item: ItemTransition::slide_in(Duration::from_millis(800), -100.0),
        }
    }

    pub fn about() -> Self {
        Self {
            delay_children: Duration::from_millis(200),
            stagger: Duration::from_millis(100),
            item: ItemTransition::fade_up(Duration::from_millis(800), 50.0).easing(EASE_EXPO_OUT),
        }
    }

    /// Project and skill cards.
    pub fn cards() -> Self {
        Self {
            delay_children: Duration::ZERO,
            stagger: Duration::from_millis(100),
            item: ItemTransition::fade_up(Duration::from_millis(600), 30.0),
        }
    }

    /// One element fading in place.
    pub fn fade_in(duration: Duration) -> Self {
        Self {
            delay_children: Duration::ZERO,
            stagger: Duration::ZERO,
            item: ItemTransition::fade_up(duration, 0.0),
        }
    }

    /// Nav links drop in from above.
    pub fn nav() -> Self {
        Self {
            delay_children: Duration::ZERO,
            stagger: Duration::from_millis(100),
            item: ItemTransition::fade_up(Duration::from_millis(500), -20.0),
        }
    }

    pub fn child_delay(&self, index: usize) -> Duration {
        self.delay_children + self.stagger * index as u32
    }

    pub fn spec_for(&self, index: usize) -> AnimationSpec {
        AnimationSpec::tween(self.item.duration, self.item.easing).with_delay(self.child_delay(index))
    }

    /// Time from start until `count` children have settled.
    pub fn total(&self, count: usize) -> Duration {
        match count {
            0 => Duration::ZERO,
            n => self.spec_for(n - 1).total(),
        }
    }
}

/// Interpolated style of one child.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChildStyle {
    pub alpha: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl ChildStyle {
    pub const REST: ChildStyle = ChildStyle {
        alpha: 1.0,
        offset_x: 0.0,
        offset_y: 0.0,
    };

    pub fn is_rest(&self) -> bool {
        *self == Self::REST
    }

    pub fn apply(&self, m: Modifier) -> Modifier {
        if self.is_rest() {
            return m;
        }
        m.alpha(self.alpha).translate(self.offset_x, self.offset_y)
    }
}

#[derive(Debug)]
pub struct EntranceSequence {
    stagger: Stagger,
    started: Cell<Option<Instant>>,
}

impl EntranceSequence {
    pub fn new(stagger: Stagger) -> Self {
        Self {
            stagger,
            started: Cell::new(None),
        }
    }

    pub fn stagger(&self) -> &Stagger {
        &self.stagger
    }

    /// Pins the start time. Later calls keep the first instant.
    pub fn start(&self, now: Instant) -> bool {
        if self.started.get().is_some() {
            return false;
        }
        self.started.set(Some(now));
        true
    }

    pub fn is_started(&self) -> bool {
        self.started.get().is_some()
    }

    pub fn sample(&self, index: usize, now: Instant) -> ChildStyle {
        let item = &self.stagger.item;
        let from = ChildStyle {
            alpha: item.from_alpha,
            offset_x: item.from_offset_x,
            offset_y: item.from_offset_y,
        };
        let Some(t0) = self.started.get() else {
            return from;
        };
        let elapsed = now.saturating_duration_since(t0);
        let p = self.stagger.spec_for(index).progress(elapsed);
        if p >= 1.0 {
            return ChildStyle::REST;
        }
        ChildStyle {
            alpha: from.alpha.interpolate(&1.0, p).clamp(0.0, 1.0),
            offset_x: from.offset_x.interpolate(&0.0, p),
            offset_y: from.offset_y.interpolate(&0.0, p),
        }
    }

    pub fn is_finished(&self, count: usize, now: Instant) -> bool {
        match self.started.get() {
            Some(t0) => now.saturating_duration_since(t0) >= self.stagger.total(count),
            None => count == 0,
        }
    }
}
