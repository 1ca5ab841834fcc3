//! # Folio portfolio site
//!
//! A single-page developer portfolio: a splash screen, then six stacked
//! sections (home, about, experiences, projects, skills, contact) under a
//! fixed navigation bar that highlights whichever section is under the
//! reading line.
//!
//! ```rust
//! use folio_site::{Host, HostEvent, SectionKey, SiteConfig};
//! use web_time::Duration;
//!
//! let mut host = Host::new(SiteConfig::default()).unwrap();
//! host.handle(HostEvent::Advance(Duration::from_secs(2))).unwrap();
//! assert!(!host.site().is_loading());
//! assert_eq!(host.active_section(), SectionKey::Home);
//! ```

pub mod app;
pub mod config;
pub mod content;
pub mod filter;
pub mod gate;
pub mod host;
pub mod language;
pub mod nav;
pub mod pages;
pub mod rotator;
pub mod sections;
pub mod tests;
pub mod tracker;
pub mod ui;

pub use app::{Frame, SectionReveal, Site, SiteState};
pub use config::SiteConfig;
pub use filter::{CategoryFilterState, ProjectCategory, filter};
pub use gate::LoadingGate;
pub use host::{Host, HostEvent};
pub use language::LanguageSwitcher;
pub use nav::{NavItem, NavRequest, Navbar, nav_items};
pub use rotator::Rotator;
pub use sections::{Section, SectionKey, SectionRegistry};
pub use tracker::ActiveSectionTracker;
