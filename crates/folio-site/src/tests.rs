#[cfg(test)]
mod tests {
    use crate::content::{Project, project_groups};
    use crate::*;
    use folio_core::{Clock, ManualClock, Rect, Scope, Timers, ViewKind, View};
    use folio_ui::{VisibilityObserver, VisibilityOptions};
    use std::cell::RefCell;
    use std::rc::Rc;
    use web_time::Duration;

    fn scenario_registry() -> SectionRegistry {
        SectionRegistry::new(vec![
            Section::new(SectionKey::Home, 0.0, 800.0),
            Section::new(SectionKey::About, 800.0, 600.0),
            Section::new(SectionKey::Projects, 1400.0, 700.0),
        ])
        .unwrap()
    }

    fn texts(view: &View) -> Vec<String> {
        let mut out = Vec::new();
        view.walk(&mut |v| {
            if let Some(t) = v.kind.text() {
                out.push(t.to_string());
            }
        });
        out
    }

    fn button<'a>(view: &'a View, label: &str) -> Option<&'a View> {
        view.find(|v| matches!(&v.kind, ViewKind::Button { text, .. } if text == label))
    }

    fn count_class(view: &View, class: &str) -> usize {
        let mut n = 0;
        view.walk(&mut |v| {
            if v
                .modifier
                .class
                .as_deref()
                .is_some_and(|c| c.split(' ').any(|c| c == class))
            {
                n += 1;
            }
        });
        n
    }

    fn ready_host() -> Host {
        let mut host = Host::new(SiteConfig::default()).unwrap();
        host.handle(HostEvent::Advance(Duration::from_millis(2000)))
            .unwrap();
        host
    }

    #[test]
    fn scenario_probe_lookup() {
        let t = ActiveSectionTracker::new(scenario_registry(), 100.0);
        assert_eq!(t.track(750.0), SectionKey::About);
        assert_eq!(t.track(0.0), SectionKey::Home);
        assert_eq!(t.track(-200.0), SectionKey::Home);

        t.track(750.0);
        assert_eq!(t.track(-200.0), SectionKey::About);
    }

    #[test]
    fn tracker_is_deterministic_within_a_section() {
        let t = ActiveSectionTracker::new(scenario_registry(), 100.0);
        for y in [700.0, 850.0, 1000.0, 1299.0] {
            assert_eq!(t.track(y), SectionKey::About);
            assert_eq!(t.track(y), SectionKey::About);
        }
        for y in [1300.0, 1500.0, 1999.0] {
            assert_eq!(t.track(y), SectionKey::Projects);
        }
    }

    #[test]
    fn tracker_fallback_keeps_previous_key() {
        let t = ActiveSectionTracker::new(scenario_registry(), 100.0);
        t.track(1500.0);
        for y in [-500.0, -101.0, 2000.0, 99_999.0] {
            assert_eq!(t.track(y), SectionKey::Projects);
        }
    }

    #[test]
    fn rotator_returns_to_zero_after_n_firings() {
        let clock = ManualClock::new();
        let timers = Timers::new();
        let scope = Scope::new();
        let words = ["a", "b", "c", "d"];
        let r = Rotator::new(words, Duration::from_millis(3000)).unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        r.index_signal().subscribe({
            let seen = seen.clone();
            move |i| seen.borrow_mut().push(*i)
        });
        r.start(&timers, &scope, clock.now()).unwrap();
        for _ in 0..words.len() {
            timers.run_due(clock.advance(Duration::from_millis(3000)));
        }
        assert_eq!(*seen.borrow(), vec![1, 2, 3, 0]);
        assert_eq!(r.index(), 0);
    }

    #[test]
    fn filter_all_is_union_and_groups_are_subsets() {
        let groups = project_groups();
        let all = filter(&groups, ProjectCategory::All);
        let union: Vec<&Project> = groups.iter().flat_map(|(_, p)| p.iter()).collect();
        assert_eq!(all, union);

        for (category, group) in [
            (ProjectCategory::Internship, groups[0]),
            (ProjectCategory::Academic, groups[1]),
        ] {
            let subset = filter(&groups, category);
            assert_eq!(subset, group.1.iter().collect::<Vec<_>>());
            assert!(subset.iter().all(|p| p.group == group.0));
            assert!(subset.iter().all(|p| all.contains(p)));
        }
    }

    #[test]
    fn visibility_latch_never_reverts() {
        let obs = VisibilityObserver::new(VisibilityOptions::default());
        let region = Rect::new(0.0, 1000.0, 1280.0, 600.0);
        let at = |y: f32| Rect::new(0.0, y, 1280.0, 800.0);

        assert!(!obs.observe(Some(region), at(0.0)));
        assert!(obs.observe(Some(region), at(500.0)));
        for y in [0.0, 3000.0, -800.0] {
            assert!(obs.observe(Some(region), at(y)));
        }
        assert!(obs.observe(None, at(0.0)));
        assert!(obs.is_visible());
    }

    #[test]
    fn gate_transitions_exactly_once() {
        let clock = ManualClock::new();
        let timers = Timers::new();
        let scope = Scope::new();
        let gate = LoadingGate::new(Duration::from_millis(2000));

        let history = Rc::new(RefCell::new(Vec::new()));
        gate.loading_signal().subscribe({
            let history = history.clone();
            move |v| history.borrow_mut().push(*v)
        });
        gate.start(&timers, &scope, clock.now());
        for _ in 0..5 {
            gate.start(&timers, &scope, clock.now());
            timers.run_due(clock.advance(Duration::from_millis(1500)));
        }
        assert_eq!(*history.borrow(), vec![false]);
    }

    #[test]
    fn splash_then_page() {
        let mut host = Host::new(SiteConfig::default()).unwrap();
        assert!(host.site().is_loading());
        assert!(texts(host.view()).contains(&"Loading...".to_string()));
        assert!(host.view().section_keys().is_empty());

        host.handle(HostEvent::Advance(Duration::from_millis(1999)))
            .unwrap();
        assert!(host.site().is_loading());
        host.handle(HostEvent::Advance(Duration::from_millis(1)))
            .unwrap();
        assert!(!host.site().is_loading());

        let keys: Vec<String> = SectionKey::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(host.view().section_keys(), keys);
        assert_eq!(host.site().state().tracker.registry().len(), 6);
        assert_eq!(host.active_section(), SectionKey::Home);
    }

    #[test]
    fn scrolling_moves_the_highlight() {
        let mut host = ready_host();
        let about = host.layout().anchor("about").unwrap();
        host.handle(HostEvent::ScrollTo(about.y)).unwrap();
        assert_eq!(host.active_section(), SectionKey::About);

        let active = button(host.view(), "About").unwrap();
        assert!(matches!(active.kind, ViewKind::Button { active: true, .. }));
        assert!(matches!(
            button(host.view(), "Home").unwrap().kind,
            ViewKind::Button { active: false, .. }
        ));

        host.handle(HostEvent::ScrollTo(-500.0)).unwrap();
        assert_eq!(host.active_section(), SectionKey::Home);
    }

    #[test]
    fn nav_click_smooth_scrolls_to_anchor() {
        let mut host = ready_host();
        let target = host.layout().anchor("projects").unwrap();
        let id = button(host.view(), "Projects").unwrap().id;

        host.handle(HostEvent::Click(id)).unwrap();
        assert!(host.site().state().scroll.is_animating());
        assert_eq!(host.active_section(), SectionKey::Home);

        host.handle(HostEvent::Advance(Duration::from_millis(600)))
            .unwrap();
        assert_eq!(host.site().state().scroll.get(), target.y);
        assert_eq!(host.active_section(), SectionKey::Projects);
        assert!(host.site().state().navbar.is_scrolled());
    }

    #[test]
    fn mobile_menu_closes_on_navigate() {
        let mut host = ready_host();
        assert_eq!(count_class(host.view(), "mobile-menu"), 0);
        host.handle(HostEvent::ToggleMenu).unwrap();
        assert_eq!(count_class(host.view(), "mobile-menu"), 1);
        host.handle(HostEvent::Navigate(SectionKey::Skills)).unwrap();
        assert_eq!(count_class(host.view(), "mobile-menu"), 0);
    }

    #[test]
    fn category_tabs_filter_cards() {
        let mut host = ready_host();
        assert_eq!(count_class(host.view(), "project-card"), 8);
        host.handle(HostEvent::SelectCategory(ProjectCategory::Internship))
            .unwrap();
        assert_eq!(count_class(host.view(), "project-card"), 3);

        let academic = host
            .view()
            .find(|v| {
                matches!(&v.kind, ViewKind::Button { text, .. } if text.ends_with("Academic"))
            })
            .unwrap()
            .id;
        host.handle(HostEvent::Click(academic)).unwrap();
        assert_eq!(count_class(host.view(), "project-card"), 5);
    }

    #[test]
    fn language_toggle_relabels_everything() {
        let mut host = ready_host();
        let switch = button(host.view(), "FR").unwrap().id;
        host.handle(HostEvent::Click(switch)).unwrap();
        assert!(button(host.view(), "Accueil").is_some());
        assert!(button(host.view(), "EN").is_some());

        host.handle(HostEvent::ToggleLanguage).unwrap();
        assert!(button(host.view(), "Home").is_some());
    }

    #[test]
    fn rotator_word_changes_on_the_page() {
        let mut host = ready_host();
        assert!(texts(host.view()).contains(&"Mobile Developer".to_string()));
        host.handle(HostEvent::Advance(Duration::from_millis(3000)))
            .unwrap();
        assert!(texts(host.view()).contains(&"Full-Stack Developer".to_string()));
    }

    #[test]
    fn sections_reveal_once_when_scrolled_into_view() {
        let mut host = ready_host();
        let st = host.site().state();
        assert!(st.reveal(SectionKey::Home).unwrap().sequence.is_started());
        assert!(!st.reveal(SectionKey::Contact).unwrap().sequence.is_started());

        let max = host.site().state().scroll.max_offset();
        host.handle(HostEvent::ScrollTo(max)).unwrap();
        host.handle(HostEvent::ScrollTo(0.0)).unwrap();
        let contact = host.site().state().reveal(SectionKey::Contact).unwrap();
        assert!(contact.sequence.is_started());
        assert!(contact.observer.is_visible());
    }

    #[test]
    fn narrow_viewport_remeasures_sections() {
        let mut host = ready_host();
        let wide_about = host.layout().anchor("about").unwrap();
        host.handle(HostEvent::Resize(folio_core::Size::new(390.0, 844.0)))
            .unwrap();

        let about = host.layout().anchor("about").unwrap();
        assert!(about.y > wide_about.y);
        let registry = host.site().state().tracker.registry();
        assert_eq!(registry.len(), 6);
        assert_eq!(
            registry.get(SectionKey::About).map(|s| s.offset_top),
            Some(about.y)
        );

        host.handle(HostEvent::ScrollTo(about.y)).unwrap();
        assert_eq!(host.active_section(), SectionKey::About);

        let projects = host.layout().anchor("projects").unwrap();
        host.handle(HostEvent::ScrollTo(projects.y)).unwrap();
        assert_eq!(host.active_section(), SectionKey::Projects);
        let st = host.site().state();
        assert!(st.reveal(SectionKey::Projects).unwrap().sequence.is_started());
        assert!(!st.reveal(SectionKey::Contact).unwrap().sequence.is_started());
    }

    #[test]
    fn unmount_releases_listeners() {
        let clock = ManualClock::new();
        let mut site = Site::mount(SiteConfig::default(), Rc::new(clock.clone())).unwrap();
        site.render().unwrap();
        clock.advance(Duration::from_millis(2000));
        site.tick();
        site.render().unwrap();

        let offset = site.state().scroll.offset_signal();
        let index = site.state().rotator.index_signal();
        assert_eq!(offset.subscriber_count(), 2);
        site.unmount();
        assert_eq!(offset.subscriber_count(), 0);
        assert_eq!(index.get(), 0);
    }

    #[test]
    fn nav_listing() {
        let t = folio_i18n::Translator::new(folio_i18n::Language::Fr).unwrap();
        let listing = nav_items(&t)
            .iter()
            .map(|i| format!("{} {}", i.anchor, i.label))
            .collect::<Vec<_>>()
            .join("\n");
        insta::assert_snapshot!(listing, @r"
        #home Accueil
        #about À propos
        #experiences Expérience
        #projects Projets
        #skills Compétences
        #contact Contact
        ");
    }

    #[test]
    fn export_is_a_complete_document() {
        let mut config = SiteConfig::default();
        config.language = folio_i18n::Language::Fr;
        let html = Host::new(config).unwrap().export_html().unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html lang=\"fr\">"));
        for key in SectionKey::ALL {
            assert!(html.contains(&format!("<section id=\"{key}\"")));
        }
        assert!(html.contains("data-target=\"#contact\""));
        assert!(html.contains("aria-label=\"Switch to English\""));
        assert!(!html.contains("opacity:0;"));
    }
}
