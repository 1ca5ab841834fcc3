//! Headless platform runner.
//!
//! Plays the part a browser or windowing loop would: owns a manual clock,
//! turns input events into state changes, and re-renders after each one.
//! Tests and the CLI drive the site through it.

use std::rc::Rc;

use folio_core::prelude::*;
use folio_ui::{HtmlOptions, LayoutTree, dispatch_click, render_html};
use web_time::Duration;

use crate::app::{Frame, Site};
use crate::config::SiteConfig;
use crate::filter::ProjectCategory;
use crate::sections::SectionKey;

/// Upper bound on revealed children per section when waiting for
/// entrances to settle.
const SETTLE_CHILDREN: usize = 16;

#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    Advance(Duration),
    ScrollTo(f32),
    ScrollBy(f32),
    Resize(Size),
    Navigate(SectionKey),
    Click(ViewId),
    SelectCategory(ProjectCategory),
    ToggleLanguage,
    ToggleMenu,
}

pub struct Host {
    clock: ManualClock,
    site: Site,
    frame: Frame,
}

impl Host {
    pub fn new(config: SiteConfig) -> Result<Self> {
        let clock = ManualClock::new();
        let mut site = Site::mount(config, Rc::new(clock.clone()))?;
        let frame = site.render()?;
        Ok(Self { clock, site, frame })
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn view(&self) -> &View {
        &self.frame.view
    }

    pub fn layout(&self) -> &LayoutTree {
        &self.frame.layout
    }

    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    pub fn active_section(&self) -> SectionKey {
        self.site.state().tracker.active()
    }

    pub fn handle(&mut self, event: HostEvent) -> Result<()> {
        let st = self.site.state();
        match event {
            HostEvent::Advance(d) => {
                self.clock.advance(d);
                self.site.tick();
            }
            HostEvent::ScrollTo(y) => st.scroll.set_offset(y),
            HostEvent::ScrollBy(dy) => {
                st.scroll.scroll_by(dy);
            }
            HostEvent::Resize(size) => self.site.resize(size),
            HostEvent::Navigate(key) => {
                st.navbar.navigate(key);
            }
            HostEvent::Click(id) => {
                if !dispatch_click(&self.frame.view, id) {
                    log::debug!("click on {id} hit nothing");
                }
            }
            HostEvent::SelectCategory(c) => st.filter.select(c),
            HostEvent::ToggleLanguage => {
                st.translator.toggle();
            }
            HostEvent::ToggleMenu => {
                st.navbar.toggle_menu();
            }
        }
        self.follow_nav_request();
        self.frame = self.site.render()?;
        Ok(())
    }

    /// Starts a smooth scroll for a pending nav click, if there is one.
    fn follow_nav_request(&self) {
        let st = self.site.state();
        let Some(req) = st.navbar.take_request() else {
            return;
        };
        match self.frame.layout.anchor(req.key.as_str()) {
            Some(rect) => st.scroll.scroll_to(rect.y, self.clock.now()),
            None => log::warn!("no layout for anchor {}", req.anchor),
        }
    }

    pub fn run(&mut self, events: impl IntoIterator<Item = HostEvent>) -> Result<()> {
        for e in events {
            self.handle(e)?;
        }
        Ok(())
    }

    /// Lets the splash finish and every entrance settle, then renders a
    /// standalone HTML document.
    pub fn export_html(&mut self) -> Result<String> {
        let splash = self.site.config().splash_delay();
        self.handle(HostEvent::Advance(splash))?;
        self.site.reveal_all();
        let settle = self.site.settle_time(SETTLE_CHILDREN);
        self.handle(HostEvent::Advance(settle))?;

        let lang = self.site.state().translator.language();
        let opts = HtmlOptions {
            lang: lang.code().to_string(),
            title: format!("{} | {}", crate::content::PROFILE.name, crate::nav::LOGO),
            stylesheet: Some(STYLESHEET.to_string()),
        };
        log::info!("exporting page in {}", lang.name());
        Ok(render_html(&self.frame.view, &opts))
    }
}

const STYLESHEET: &str = "body{background:#0A0A0F;color:#E6E6E6}\
.navbar{position:sticky;top:0;z-index:10}\
.navbar.scrolled{backdrop-filter:blur(12px)}\
button{background:none;border:0;color:inherit;cursor:pointer}\
button.active{color:#00FFFF}\
.mobile-menu{display:none}\
@media (max-width:768px){.nav-links{display:none}.mobile-menu{display:flex}}\
.menu-toggle{display:none}\
@media (max-width:768px){.menu-toggle{display:block}}";
