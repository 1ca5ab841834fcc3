use folio_core::{FolioError, Result, Scope, Signal, Timers, signal};
use web_time::{Duration, Instant};

/// Cycles through a fixed word list on an interval.
pub struct Rotator {
    words: Vec<String>,
    index: Signal<usize>,
    period: Duration,
}

impl Rotator {
    pub fn new<S: Into<String>>(words: impl IntoIterator<Item = S>, period: Duration) -> Result<Self> {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(FolioError::Empty("rotator word list"));
        }
        if period.is_zero() {
            return Err(FolioError::InvalidTimer("rotator period must be positive".into()));
        }
        Ok(Self {
            words,
            index: signal(0),
            period,
        })
    }

    pub fn index(&self) -> usize {
        self.index.get()
    }

    pub fn current(&self) -> &str {
        &self.words[self.index.get()]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn index_signal(&self) -> Signal<usize> {
        self.index.clone()
    }

    pub fn advance(&self) -> usize {
        let len = self.words.len();
        self.index.update(|i| *i = (*i + 1) % len);
        self.index.get()
    }

    /// Advances once per period until `scope` is disposed.
    pub fn start(&self, timers: &Timers, scope: &Scope, now: Instant) -> Result<()> {
        let index = self.index.clone();
        let len = self.words.len();
        let handle = timers.interval(now, self.period, move || {
            index.update(|i| *i = (*i + 1) % len);
        })?;
        handle.into_dispose(timers).bind(scope);
        log::debug!("rotator started, {} words every {:?}", len, self.period);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{Clock, ManualClock};

    #[test]
    fn advances_modulo_len() {
        let r = Rotator::new(["a", "b", "c"], Duration::from_secs(3)).unwrap();
        assert_eq!(r.current(), "a");
        assert_eq!(r.advance(), 1);
        assert_eq!(r.advance(), 2);
        assert_eq!(r.advance(), 0);
        assert_eq!(r.current(), "a");
    }

    #[test]
    fn rejects_empty_or_zero_period() {
        assert!(matches!(
            Rotator::new(Vec::<String>::new(), Duration::from_secs(1)),
            Err(FolioError::Empty(_))
        ));
        assert!(Rotator::new(["x"], Duration::ZERO).is_err());
    }

    #[test]
    fn interval_advances_until_scope_disposed() {
        let clock = ManualClock::new();
        let timers = Timers::new();
        let scope = Scope::new();
        let r = Rotator::new(
            crate::content::ROTATOR_WORDS,
            Duration::from_millis(3000),
        )
        .unwrap();
        r.start(&timers, &scope, clock.now()).unwrap();

        timers.run_due(clock.advance(Duration::from_millis(2999)));
        assert_eq!(r.current(), "Mobile Developer");
        timers.run_due(clock.advance(Duration::from_millis(1)));
        assert_eq!(r.current(), "Full-Stack Developer");
        // Seven periods wrap around the six words.
        timers.run_due(clock.advance(Duration::from_millis(6 * 3000)));
        assert_eq!(r.index(), 1);

        scope.dispose();
        timers.run_due(clock.advance(Duration::from_secs(60)));
        assert_eq!(r.index(), 1);
        assert_eq!(timers.pending(), 0);
    }
}
