use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{Scope, Signal, signal};
use folio_ui::{LayoutTree, ScrollState};

use crate::sections::{SectionKey, SectionRegistry};

/// Derives the highlighted nav entry from the scroll offset.
///
/// The probe sits `probe_offset` pixels below the top of the viewport. The
/// first registered section whose half-open extent contains it becomes
/// active; when none does (above the first section, below the last, or in a
/// gap) the previous answer stands.
pub struct ActiveSectionTracker {
    registry: RefCell<SectionRegistry>,
    probe_offset: f32,
    active: Signal<SectionKey>,
}

impl ActiveSectionTracker {
    pub fn new(registry: SectionRegistry, probe_offset: f32) -> Self {
        Self {
            registry: RefCell::new(registry),
            probe_offset,
            active: signal(SectionKey::Home),
        }
    }

    pub fn track(&self, scroll_y: f32) -> SectionKey {
        let probe = scroll_y + self.probe_offset;
        let hit = self.registry.borrow().section_at(probe);
        if let Some(key) = hit
            && self.active.set_if_changed(key)
        {
            log::debug!("active section -> {key} (probe {probe:.0})");
        }
        self.active.get()
    }

    pub fn active(&self) -> SectionKey {
        self.active.get()
    }

    /// Swaps in freshly measured extents, e.g. after a resize.
    pub fn replace_registry(&self, registry: SectionRegistry) {
        *self.registry.borrow_mut() = registry;
    }

    /// Re-reads section extents from a fresh layout. A layout that does not
    /// yield a valid registry leaves the previous extents in place.
    pub fn remeasure(&self, tree: &LayoutTree) -> bool {
        match SectionRegistry::measure(tree) {
            Ok(registry) => {
                self.replace_registry(registry);
                true
            }
            Err(e) => {
                log::warn!("keeping previous section extents: {e}");
                false
            }
        }
    }

    pub fn registry(&self) -> SectionRegistry {
        self.registry.borrow().clone()
    }

    /// Tracks `scroll` until `scope` is disposed. Evaluates the current
    /// offset once right away.
    pub fn attach(self: &Rc<Self>, scroll: &ScrollState, scope: &Scope) {
        self.track(scroll.get());
        let this = Rc::clone(self);
        scroll.on_scroll(move |y| {
            this.track(y);
        })
        .bind(scope);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::Section;
    use SectionKey::*;

    fn tracker() -> ActiveSectionTracker {
        let reg = SectionRegistry::new(vec![
            Section::new(Home, 0.0, 800.0),
            Section::new(About, 800.0, 600.0),
            Section::new(Projects, 1400.0, 700.0),
        ])
        .unwrap();
        ActiveSectionTracker::new(reg, 100.0)
    }

    #[test]
    fn probe_is_offset_below_viewport_top() {
        let t = tracker();
        assert_eq!(t.track(750.0), About);
        assert_eq!(t.track(0.0), Home);
        assert_eq!(t.track(699.0), Home);
        assert_eq!(t.track(700.0), About);
        assert_eq!(t.track(1300.0), Projects);
    }

    #[test]
    fn misses_keep_previous_key() {
        let t = tracker();
        t.track(750.0);
        assert_eq!(t.track(-200.0), About);
        assert_eq!(t.track(5000.0), About);
    }

    #[test]
    fn empty_registry_keeps_home() {
        let t = ActiveSectionTracker::new(SectionRegistry::default(), 100.0);
        assert_eq!(t.track(1234.0), Home);
    }

    #[test]
    fn failed_remeasure_keeps_previous_extents() {
        use folio_core::{Modifier, Size};
        use folio_ui::{Column, Section as SectionView, ViewExt, layout, stamp_ids};

        let t = tracker();
        let mut swapped = Column(Modifier::new()).child((
            SectionView("about", Modifier::new().height(500.0)),
            SectionView("home", Modifier::new().height(500.0)),
        ));
        stamp_ids(&mut swapped);
        let tree = layout(&swapped, Size::new(1280.0, 800.0)).unwrap();

        assert!(!t.remeasure(&tree));
        assert_eq!(t.registry().len(), 3);
        assert_eq!(t.track(1300.0), Projects);

        let mut page = Column(Modifier::new()).child((
            SectionView("home", Modifier::new().height(500.0)),
            SectionView("about", Modifier::new().height(500.0)),
        ));
        stamp_ids(&mut page);
        assert!(t.remeasure(&layout(&page, Size::new(1280.0, 800.0)).unwrap()));
        assert_eq!(t.registry().len(), 2);
        assert_eq!(t.track(450.0), About);
    }

    #[test]
    fn attached_tracker_follows_scroll_until_disposed() {
        let t = Rc::new(tracker());
        let scroll = ScrollState::new();
        scroll.set_viewport_height(800.0);
        scroll.set_content_height(2100.0);
        let scope = Scope::new();
        t.attach(&scroll, &scope);

        scroll.set_offset(750.0);
        assert_eq!(t.active(), About);
        scope.dispose();
        scroll.set_offset(1300.0);
        assert_eq!(t.active(), About);
        assert_eq!(scroll.offset_signal().subscriber_count(), 0);
    }
}
