//! Single-threaded timer queue.
//!
//! `Timers` is the only way components schedule delayed work. It does not own
//! a thread or an OS timer: the host calls [`Timers::run_due`] with the
//! current time and every timer whose deadline has passed fires, in deadline
//! order. Handles convert into [`Dispose`] guards so a timer can be tied to
//! the [`Scope`](crate::Scope) of the component that created it.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;
use web_time::{Duration, Instant};

use crate::{Dispose, FolioError, Result};

new_key_type! {
    pub struct TimerId;
}

type Callback = Rc<RefCell<Box<dyn FnMut()>>>;

struct Entry {
    deadline: Instant,
    period: Option<Duration>,
    seq: u64,
    callback: Callback,
}

#[derive(Default)]
struct Queue {
    entries: SlotMap<TimerId, Entry>,
    next_seq: u64,
}

#[derive(Clone, Default)]
pub struct Timers {
    inner: Rc<RefCell<Queue>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerHandle {
    id: TimerId,
}

impl TimerHandle {
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Cleanup guard that cancels this timer. Outliving the queue is fine.
    pub fn into_dispose(self, timers: &Timers) -> Dispose {
        let weak: Weak<RefCell<Queue>> = Rc::downgrade(&timers.inner);
        Dispose::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().entries.remove(self.id);
            }
        })
    }
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires once, `delay` after `now`.
    pub fn timeout(
        &self,
        now: Instant,
        delay: Duration,
        f: impl FnMut() + 'static,
    ) -> TimerHandle {
        self.insert(now + delay, None, Box::new(f))
    }

    /// Fires every `period`, first at `now + period`.
    pub fn interval(
        &self,
        now: Instant,
        period: Duration,
        f: impl FnMut() + 'static,
    ) -> Result<TimerHandle> {
        if period.is_zero() {
            return Err(FolioError::InvalidTimer(
                "interval period must be non-zero".into(),
            ));
        }
        Ok(self.insert(now + period, Some(period), Box::new(f)))
    }

    fn insert(
        &self,
        deadline: Instant,
        period: Option<Duration>,
        callback: Box<dyn FnMut()>,
    ) -> TimerHandle {
        let mut q = self.inner.borrow_mut();
        let seq = q.next_seq;
        q.next_seq += 1;
        let id = q.entries.insert(Entry {
            deadline,
            period,
            seq,
            callback: Rc::new(RefCell::new(callback)),
        });
        TimerHandle { id }
    }

    pub fn cancel(&self, handle: TimerHandle) -> bool {
        self.inner.borrow_mut().entries.remove(handle.id).is_some()
    }

    pub fn is_active(&self, handle: TimerHandle) -> bool {
        self.inner.borrow().entries.contains_key(handle.id)
    }

    pub fn pending(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Fires everything due at `now`. Interval timers that fell behind fire
    /// once per elapsed period. Returns the number of callbacks run.
    pub fn run_due(&self, now: Instant) -> usize {
        let mut fired = 0;
        loop {
            let mut due: SmallVec<[(Instant, u64, TimerId); 4]> = {
                let q = self.inner.borrow();
                q.entries
                    .iter()
                    .filter(|(_, e)| e.deadline <= now)
                    .map(|(id, e)| (e.deadline, e.seq, id))
                    .collect()
            };
            if due.is_empty() {
                break;
            }
            due.sort_unstable_by_key(|(deadline, seq, _)| (*deadline, *seq));

            for (_, _, id) in due {
                // A callback earlier in this batch may have cancelled it.
                let callback = {
                    let mut q = self.inner.borrow_mut();
                    let Some(entry) = q.entries.get_mut(id) else {
                        continue;
                    };
                    if let Some(period) = entry.period {
                        entry.deadline += period;
                        entry.callback.clone()
                    } else {
                        match q.entries.remove(id) {
                            Some(e) => e.callback,
                            None => continue,
                        }
                    }
                };
                (callback.borrow_mut())();
                fired += 1;
            }
        }
        fired
    }
}

impl std::fmt::Debug for Timers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Timers")
            .field("pending", &self.pending())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn timeout_fires_once() {
        let t0 = Instant::now();
        let timers = Timers::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let handle = timers.timeout(t0, Duration::from_millis(2000), move || h.set(h.get() + 1));

        assert_eq!(timers.run_due(t0 + Duration::from_millis(1999)), 0);
        assert_eq!(timers.run_due(t0 + Duration::from_millis(2000)), 1);
        assert_eq!(timers.run_due(t0 + Duration::from_millis(9000)), 0);
        assert_eq!(hits.get(), 1);
        assert!(!timers.is_active(handle));
    }

    #[test]
    fn interval_catches_up() {
        let t0 = Instant::now();
        let timers = Timers::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        timers
            .interval(t0, Duration::from_millis(100), move || h.set(h.get() + 1))
            .unwrap();
        assert_eq!(timers.run_due(t0 + Duration::from_millis(350)), 3);
        assert_eq!(timers.run_due(t0 + Duration::from_millis(400)), 1);
        assert_eq!(hits.get(), 4);
    }

    #[test]
    fn zero_period_rejected() {
        let timers = Timers::new();
        assert!(timers.interval(Instant::now(), Duration::ZERO, || {}).is_err());
    }

    #[test]
    fn deadline_order_then_schedule_order() {
        let t0 = Instant::now();
        let timers = Timers::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (name, ms) in [("b", 20u64), ("a", 10), ("c", 20)] {
            let log = log.clone();
            timers.timeout(t0, Duration::from_millis(ms), move || log.borrow_mut().push(name));
        }
        timers.run_due(t0 + Duration::from_millis(50));
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn dispose_cancels() {
        let t0 = Instant::now();
        let timers = Timers::new();
        let hits = Rc::new(Cell::new(0));
        let h = hits.clone();
        let handle = timers.timeout(t0, Duration::from_millis(5), move || h.set(1));
        let d = handle.into_dispose(&timers);
        d.run();
        assert_eq!(timers.run_due(t0 + Duration::from_secs(1)), 0);
        assert_eq!(hits.get(), 0);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn cancel_from_inside_batch() {
        let t0 = Instant::now();
        let timers = Timers::new();
        let second_ran = Rc::new(Cell::new(false));

        let victim: Rc<Cell<Option<TimerHandle>>> = Rc::new(Cell::new(None));
        {
            let timers2 = timers.clone();
            let victim = victim.clone();
            timers.timeout(t0, Duration::from_millis(1), move || {
                if let Some(h) = victim.get() {
                    timers2.cancel(h);
                }
            });
        }
        let s = second_ran.clone();
        let h = timers.timeout(t0, Duration::from_millis(2), move || s.set(true));
        victim.set(Some(h));

        timers.run_due(t0 + Duration::from_millis(10));
        assert!(!second_ran.get());
    }
}
