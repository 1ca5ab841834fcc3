//! # State, Scopes, and Timers
//!
//! Folio keeps UI state in explicit containers instead of ambient globals.
//! There are three main pieces:
//!
//! - `Signal<T>`: observable, cloneable value.
//! - `Scope` / `Dispose`: ownership of cleanups (listeners, timers).
//! - `Timers`: a single-threaded timer queue driven by a `Clock`.
//!
//! ## Signals
//!
//! ```rust
//! use folio_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! Subscribers run after every write; `set_if_changed` skips them when the
//! new value equals the old one.
//!
//! ## Scoped timers
//!
//! Everything a component registers with the outside world is released by
//! its scope:
//!
//! ```rust
//! use folio_core::*;
//! use web_time::Duration;
//!
//! let clock = ManualClock::new();
//! let timers = Timers::new();
//! let scope = Scope::new();
//!
//! let ticks = signal(0u32);
//! let handle = timers
//!     .interval(clock.now(), Duration::from_millis(100), {
//!         let ticks = ticks.clone();
//!         move || ticks.update(|t| *t += 1)
//!     })
//!     .unwrap();
//! handle.into_dispose(&timers).bind(&scope);
//!
//! timers.run_due(clock.advance(Duration::from_millis(100)));
//! scope.dispose();
//! timers.run_due(clock.advance(Duration::from_millis(100)));
//! assert_eq!(ticks.get(), 1);
//! ```
//!
//! Time never comes from a global: callers hand a `Clock` to whatever
//! needs one, and tests use `ManualClock` to step it.

pub mod animation;
pub mod color;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod locals;
pub mod modifier;
pub mod prelude;
pub mod scope;
pub mod semantics;
pub mod signal;
pub mod timer;
pub mod view;

pub use animation::*;
pub use color::*;
pub use effects::*;
pub use error::*;
pub use geometry::*;
pub use locals::*;
pub use modifier::*;
pub use scope::*;
pub use semantics::*;
pub use signal::*;
pub use timer::*;
pub use view::*;
