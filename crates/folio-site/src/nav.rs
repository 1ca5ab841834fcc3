//! Fixed navigation bar.
//!
//! The bar shows one link per section, highlights the active one, and
//! turns opaque once the page has scrolled past a small threshold. A click
//! does not scroll by itself: it leaves a `NavRequest` for the host, which
//! owns the scroll position and performs the smooth scroll.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::prelude::*;
use folio_i18n::Translator;
use folio_ui::*;
use web_time::Instant;

use crate::language::LanguageSwitcher;
use crate::sections::SectionKey;

pub const LOGO: &str = "Portfolio";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub key: SectionKey,
    pub label: String,
    pub anchor: String,
}

/// One entry per section, in page order, labelled in the current language.
pub fn nav_items(t: &Translator) -> Vec<NavItem> {
    SectionKey::ALL
        .into_iter()
        .map(|key| NavItem {
            key,
            label: t.t(&key.nav_label_key()),
            anchor: key.anchor(),
        })
        .collect()
}

/// "Scroll to this anchor", raised by a nav click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavRequest {
    pub key: SectionKey,
    pub anchor: String,
}

pub struct Navbar {
    scrolled: Signal<bool>,
    menu_open: Signal<bool>,
    threshold: f32,
    pending: RefCell<Option<NavRequest>>,
}

impl Navbar {
    pub fn new(threshold: f32) -> Self {
        Self {
            scrolled: signal(false),
            menu_open: signal(false),
            threshold,
            pending: RefCell::new(None),
        }
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled.get()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open.get()
    }

    /// Follows the scroll offset until `scope` is disposed.
    pub fn attach(&self, scroll: &ScrollState, scope: &Scope) {
        let threshold = self.threshold;
        self.scrolled.set_if_changed(scroll.get() > threshold);
        let scrolled = self.scrolled.clone();
        scroll
            .on_scroll(move |y| {
                scrolled.set_if_changed(y > threshold);
            })
            .bind(scope);
    }

    pub fn toggle_menu(&self) -> bool {
        self.menu_open.update(|open| *open = !*open);
        self.menu_open.get()
    }

    pub fn close_menu(&self) {
        self.menu_open.set_if_changed(false);
    }

    /// Closes the mobile menu and queues the scroll for the host.
    pub fn navigate(&self, key: SectionKey) -> NavRequest {
        let request = NavRequest {
            key,
            anchor: key.anchor(),
        };
        self.close_menu();
        log::debug!("navigate -> {}", request.anchor);
        *self.pending.borrow_mut() = Some(request.clone());
        request
    }

    pub fn take_request(&self) -> Option<NavRequest> {
        self.pending.borrow_mut().take()
    }

    pub fn view(
        self: &Rc<Self>,
        t: &Translator,
        active: SectionKey,
        entrance: &EntranceSequence,
        now: Instant,
    ) -> View {
        let th = theme();
        let items = nav_items(t);

        let links: Vec<View> = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = entrance.sample(i, now);
                self.link(item, active)
                    .modifier(style.apply(Modifier::new().anchor(&item.anchor).padding(8.0)))
            })
            .collect();

        let logo = Button(LOGO, {
            let this = Rc::clone(self);
            move || {
                this.navigate(SectionKey::Home);
            }
        })
        .modifier(
            Modifier::new()
                .class("logo")
                .anchor(SectionKey::Home.anchor())
                .foreground(th.primary),
        );

        let menu_open = self.is_menu_open();
        let toggle = Button(if menu_open { "✕" } else { "☰" }, {
            let this = Rc::clone(self);
            move || {
                this.toggle_menu();
            }
        })
        .semantics(Semantics::new(Role::Button).label(t.t("common.menu")))
        .modifier(Modifier::new().class("menu-toggle"));

        let mobile_menu = menu_open.then(|| {
            Column(Modifier::new().class("mobile-menu").padding(16.0).gap(8.0)).child(
                items
                    .iter()
                    .map(|item| {
                        self.link(item, active)
                            .modifier(Modifier::new().anchor(&item.anchor))
                    })
                    .collect::<Vec<_>>(),
            )
        });

        let (class, background) = if self.is_scrolled() {
            ("navbar scrolled", th.surface)
        } else {
            ("navbar", th.background.with_alpha(0))
        };

        Column(Modifier::new().class(class).fill_max_width().background(background))
            .semantics(Semantics::new(Role::Navigation).label("Main"))
            .child((
                Row(Modifier::new()
                    .padding_values(PaddingValues::symmetric(24.0, 12.0))
                    .align_items(AlignItems::Center)
                    .gap(8.0))
                .child((
                    logo,
                    Spacer(),
                    Row(Modifier::new().class("nav-links").gap(4.0)).child(links),
                    LanguageSwitcher::new(t.clone()).view(),
                    toggle,
                )),
                mobile_menu,
                Box(Modifier::new().height(1.0).fill_max_width().background(th.outline)),
            ))
    }

    fn link(self: &Rc<Self>, item: &NavItem, active: SectionKey) -> View {
        let key = item.key;
        let this = Rc::clone(self);
        Button(item.label.clone(), move || {
            this.navigate(key);
        })
        .active(key == active)
    }
}
