//! The composer.
//!
//! `Site` owns every piece of page state in one place and hands pages
//! read-only snapshots while composing. Nothing here is global: time comes
//! from the injected clock, timers and listeners live in `Timers` and are
//! released through the root `Scope`.
//!
//! A render is compose, stamp ids, lay out, then feed the measured layout
//! back into state (scroll extents, section registry, reveal triggers).
//! The first render after the splash mounts the content scope, which owns
//! the tracker and navbar scroll listeners and the rotator's interval.

use std::rc::Rc;

use folio_core::prelude::*;
use folio_i18n::Translator;
use folio_ui::*;
use web_time::{Duration, Instant};

use crate::config::SiteConfig;
use crate::filter::CategoryFilterState;
use crate::gate::LoadingGate;
use crate::nav::Navbar;
use crate::pages::{self, PageCtx};
use crate::rotator::Rotator;
use crate::sections::{SectionKey, SectionRegistry};
use crate::tracker::ActiveSectionTracker;
use crate::{content, ui};

/// Visibility latch and the entrance it triggers, one per section.
pub struct SectionReveal {
    pub observer: VisibilityObserver,
    pub sequence: Rc<EntranceSequence>,
}

impl SectionReveal {
    /// The entrance starts from the observer's first-visible hook, at the
    /// clock's time when the section comes into view.
    fn new(key: SectionKey, opts: VisibilityOptions, clock: &Rc<dyn Clock>) -> Self {
        let stagger = match key {
            SectionKey::Home => Stagger::hero(),
            SectionKey::About => Stagger::about(),
            SectionKey::Experiences => Stagger::timeline(),
            SectionKey::Projects => Stagger::cards(),
            SectionKey::Skills => Stagger {
                item: ItemTransition::fade_up(Duration::from_millis(600), 50.0),
                ..Stagger::section()
            },
            SectionKey::Contact => Stagger::section(),
        };
        let observer = VisibilityObserver::new(opts);
        let sequence = Rc::new(EntranceSequence::new(stagger));
        observer.on_first_visible({
            let sequence = Rc::clone(&sequence);
            let clock = Rc::clone(clock);
            move || {
                if sequence.start(clock.now()) {
                    log::debug!("revealing {key}");
                }
            }
        });
        Self { observer, sequence }
    }
}

pub struct SiteState {
    pub gate: LoadingGate,
    pub tracker: Rc<ActiveSectionTracker>,
    pub rotator: Rotator,
    pub filter: CategoryFilterState,
    pub navbar: Rc<Navbar>,
    pub translator: Translator,
    pub reveals: Vec<(SectionKey, SectionReveal)>,
    pub scroll: ScrollState,
    pub timers: Timers,
    nav_entrance: EntranceSequence,
    main_fade: EntranceSequence,
}

impl SiteState {
    pub fn reveal(&self, key: SectionKey) -> Option<&SectionReveal> {
        self.reveals.iter().find(|(k, _)| *k == key).map(|(_, r)| r)
    }

    pub fn active_section(&self) -> SectionKey {
        self.tracker.active()
    }
}

/// Output of one render.
pub struct Frame {
    pub view: View,
    pub layout: LayoutTree,
}

pub struct Site {
    config: SiteConfig,
    clock: Rc<dyn Clock>,
    state: SiteState,
    viewport: Size,
    scope: Scope,
    content_scope: Option<Scope>,
}

impl Site {
    pub fn mount(config: SiteConfig, clock: Rc<dyn Clock>) -> Result<Self> {
        config.validate()?;
        let now = clock.now();
        let opts = VisibilityOptions {
            threshold: config.visibility_threshold,
            trigger_once: true,
        };
        let state = SiteState {
            gate: LoadingGate::new(config.splash_delay()),
            tracker: Rc::new(ActiveSectionTracker::new(
                SectionRegistry::default(),
                config.probe_offset,
            )),
            rotator: Rotator::new(content::ROTATOR_WORDS, config.rotator_period())?,
            filter: CategoryFilterState::new(),
            navbar: Rc::new(Navbar::new(config.scrolled_threshold)),
            translator: Translator::new(config.language)?,
            reveals: SectionKey::ALL
                .into_iter()
                .map(|k| (k, SectionReveal::new(k, opts, &clock)))
                .collect(),
            scroll: ScrollState::with_smooth_duration(config.smooth_scroll()),
            timers: Timers::new(),
            nav_entrance: EntranceSequence::new(Stagger::nav()),
            main_fade: EntranceSequence::new(Stagger::fade_in(Duration::from_secs(1))),
        };

        let scope = Scope::new();
        state.gate.start(&state.timers, &scope, now);
        state.scroll.set_viewport_height(config.viewport.height);
        log::info!(
            "site mounted ({}, splash {:?})",
            state.translator.language(),
            config.splash_delay()
        );

        Ok(Self {
            viewport: config.viewport,
            config,
            clock,
            state,
            scope,
            content_scope: None,
        })
    }

    pub fn state(&self) -> &SiteState {
        &self.state
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    pub fn is_loading(&self) -> bool {
        self.state.gate.is_loading()
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn resize(&mut self, size: Size) {
        self.viewport = size;
        self.state.scroll.set_viewport_height(size.height);
    }

    /// Fires due timers and advances any smooth scroll.
    pub fn tick(&self) -> usize {
        let now = self.now();
        let fired = self.state.timers.run_due(now);
        self.state.scroll.tick(now);
        fired
    }

    /// The tree for `now`: the splash while the gate is closed, the page
    /// after.
    pub fn compose(&self, now: Instant) -> View {
        let st = &self.state;
        let t = &st.translator;
        with_theme(Theme::default(), || {
            if st.gate.is_loading() {
                return ui::Splash(t.t("common.loading"));
            }

            let page = |key: SectionKey, f: &dyn Fn(&PageCtx) -> View| match st.reveal(key) {
                Some(r) => f(&PageCtx {
                    t,
                    entrance: &r.sequence,
                    now,
                }),
                None => Box(Modifier::new()),
            };

            let main = Column(
                st.main_fade
                    .sample(0, now)
                    .apply(Modifier::new().class("main").fill_max_width()),
            )
            .child((
                page(SectionKey::Home, &|ctx| {
                    pages::hero::screen(ctx, st.rotator.current(), &st.navbar)
                }),
                page(SectionKey::About, &pages::about::screen),
                page(SectionKey::Experiences, &pages::experiences::screen),
                page(SectionKey::Projects, &|ctx| pages::projects::screen(ctx, &st.filter)),
                page(SectionKey::Skills, &pages::skills::screen),
                page(SectionKey::Contact, &pages::contact::screen),
            ));

            Surface(
                Modifier::new()
                    .fill_max_width()
                    .background(theme().background),
                Column(Modifier::new().fill_max_width()).child((
                    st.navbar
                        .view(t, st.tracker.active(), &st.nav_entrance, now),
                    main,
                )),
            )
        })
    }

    /// Composes, lays out, and feeds the layout back into page state.
    pub fn render(&mut self) -> Result<Frame> {
        let now = self.now();
        let mut view = self.compose(now);
        stamp_ids(&mut view);
        let layout = layout(&view, self.viewport)?;

        let st = &self.state;
        st.scroll.set_content_height(layout.content_height());

        if !st.gate.is_loading() {
            st.tracker.remeasure(&layout);
            if self.content_scope.is_none() {
                self.mount_content(now)?;
            }
            let st = &self.state;
            st.tracker.track(st.scroll.get());

            let viewport = st.scroll.viewport(self.viewport.width);
            for (key, r) in &st.reveals {
                r.observer.observe(layout.anchor(key.as_str()), viewport);
            }
        }

        Ok(Frame { view, layout })
    }

    fn mount_content(&mut self, now: Instant) -> Result<()> {
        let scope = self.scope.child();
        let st = &self.state;
        st.tracker.attach(&st.scroll, &scope);
        st.navbar.attach(&st.scroll, &scope);
        st.rotator.start(&st.timers, &scope, now)?;
        st.nav_entrance.start(now);
        st.main_fade.start(now);
        log::info!("content mounted, {} sections", st.tracker.registry().len());
        self.content_scope = Some(scope);
        Ok(())
    }

    /// Starts every section's entrance, e.g. before a static export.
    pub fn reveal_all(&self) {
        let now = self.now();
        for (_, r) in &self.state.reveals {
            r.sequence.start(now);
        }
    }

    /// Longest entrance of any section, assuming `children` per section.
    pub fn settle_time(&self, children: usize) -> Duration {
        self.state
            .reveals
            .iter()
            .map(|(_, r)| r.sequence.stagger().total(children))
            .chain([
                self.state.nav_entrance.stagger().total(SectionKey::ALL.len()),
                self.state.main_fade.stagger().total(1),
            ])
            .max()
            .unwrap_or_default()
    }

    /// Disposes the root scope: every timer and scroll listener goes.
    pub fn unmount(self) {
        self.scope.dispose();
        log::info!(
            "site unmounted, {} timers left",
            self.state.timers.pending()
        );
    }
}
