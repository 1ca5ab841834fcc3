//! One view function per section.
//!
//! Pages read a snapshot of state and return a tree; they own nothing.
//! Each gets the entrance sequence of its own section and numbers its
//! revealed children from 0 in document order.

pub mod about;
pub mod contact;
pub mod experiences;
pub mod hero;
pub mod projects;
pub mod skills;

use folio_i18n::Translator;
use folio_ui::EntranceSequence;
use web_time::Instant;

pub struct PageCtx<'a> {
    pub t: &'a Translator,
    pub entrance: &'a EntranceSequence,
    pub now: Instant,
}

impl PageCtx<'_> {
    pub fn t(&self, path: &str) -> String {
        self.t.t(path)
    }
}
