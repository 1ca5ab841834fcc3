use std::cell::Cell;

use folio_core::{Scope, Signal, Timers, signal};
use web_time::{Duration, Instant};

/// Splash gate. Starts loading and flips to ready once, `delay` after
/// `start`. A gate never goes back to loading; remounting builds a new one.
pub struct LoadingGate {
    loading: Signal<bool>,
    delay: Duration,
    started: Cell<bool>,
}

impl LoadingGate {
    pub fn new(delay: Duration) -> Self {
        Self {
            loading: signal(true),
            delay,
            started: Cell::new(false),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn loading_signal(&self) -> Signal<bool> {
        self.loading.clone()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules the flip. Disposing `scope` first cancels it; later calls
    /// are ignored.
    pub fn start(&self, timers: &Timers, scope: &Scope, now: Instant) {
        if self.started.replace(true) {
            return;
        }
        let loading = self.loading.clone();
        let handle = timers.timeout(now, self.delay, move || {
            if loading.set_if_changed(false) {
                log::info!("splash finished");
            }
        });
        handle.into_dispose(timers).bind(scope);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{Clock, ManualClock};
    use std::rc::Rc;

    #[test]
    fn flips_once_after_delay() {
        let clock = ManualClock::new();
        let timers = Timers::new();
        let scope = Scope::new();
        let gate = LoadingGate::new(Duration::from_millis(2000));

        let seen = Rc::new(Cell::new(0));
        gate.loading_signal().subscribe({
            let seen = seen.clone();
            move |_| seen.set(seen.get() + 1)
        });

        gate.start(&timers, &scope, clock.now());
        timers.run_due(clock.advance(Duration::from_millis(1999)));
        assert!(gate.is_loading());
        timers.run_due(clock.advance(Duration::from_millis(1)));
        assert!(!gate.is_loading());

        gate.start(&timers, &scope, clock.now());
        timers.run_due(clock.advance(Duration::from_secs(10)));
        assert!(!gate.is_loading());
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn dispose_before_fire_cancels() {
        let clock = ManualClock::new();
        let timers = Timers::new();
        let scope = Scope::new();
        let gate = LoadingGate::new(Duration::from_millis(2000));
        gate.start(&timers, &scope, clock.now());
        scope.dispose();
        assert_eq!(timers.pending(), 0);
        timers.run_due(clock.advance(Duration::from_secs(5)));
        assert!(gate.is_loading());
    }

    #[test]
    fn remount_runs_its_own_cycle() {
        let clock = ManualClock::new();
        let timers = Timers::new();
        let first_scope = Scope::new();
        let first = LoadingGate::new(Duration::from_millis(500));
        first.start(&timers, &first_scope, clock.now());
        timers.run_due(clock.advance(Duration::from_millis(500)));
        assert!(!first.is_loading());
        first_scope.dispose();

        let second_scope = Scope::new();
        let second = LoadingGate::new(Duration::from_millis(500));
        assert!(second.is_loading());
        second.start(&timers, &second_scope, clock.now());
        timers.run_due(clock.advance(Duration::from_millis(500)));
        assert!(!second.is_loading());
    }
}
