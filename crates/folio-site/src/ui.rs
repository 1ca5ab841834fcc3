#![allow(non_snake_case)]

use folio_core::prelude::*;
use folio_ui::*;
use web_time::Instant;

use crate::sections::SectionKey;

/// Page region for one section, content centred and capped at 1200px.
pub fn PageSection(key: SectionKey, body: View) -> View {
    Section(
        key.as_str(),
        Modifier::new()
            .fill_max_width()
            .padding_values(PaddingValues::symmetric(24.0, 80.0)),
    )
    .child(Column(Modifier::new().fill_max_width().max_width(1200.0).gap(32.0)).child(body))
}

/// Numbered section title, e.g. "02. Projects", with an optional tagline.
pub fn SectionHeader(number: &str, title: impl Into<String>, subtitle: Option<String>) -> View {
    let th = theme();
    Column(Modifier::new().class("section-header").gap(8.0).align_items(AlignItems::Center)).child((
        Row(Modifier::new().gap(12.0).align_items(AlignItems::Center)).child((
            Text(format!("{number}.")).color(th.primary).size(20.0),
            Heading(2, title),
        )),
        subtitle.map(|s| Text(s).color(th.muted)),
        Box(Modifier::new()
            .width(80.0)
            .height(4.0)
            .clip_rounded(2.0)
            .background(LinearGradient::diagonal(th.primary, th.secondary))),
    ))
}

pub fn Card(modifier: Modifier, body: impl IntoChildren) -> View {
    let th = theme();
    Column(
        modifier
            .padding(24.0)
            .gap(12.0)
            .clip_rounded(16.0)
            .background(th.surface),
    )
    .child(body)
}

/// Wrapping row of pill labels.
pub fn Chips<S: AsRef<str>>(items: &[S]) -> View {
    Row(Modifier::new().wrap().gap(8.0)).child(
        items
            .iter()
            .map(|s| Tag(s.as_ref()))
            .collect::<Vec<_>>(),
    )
}

/// `view` with child `index` of `entrance` applied at `now`.
pub fn Reveal(entrance: &EntranceSequence, index: usize, now: Instant, mut view: View) -> View {
    view.modifier = entrance.sample(index, now).apply(view.modifier);
    view
}

/// Full-screen spinner shown while the gate is closed.
pub fn Splash(message: impl Into<String>) -> View {
    let th = theme();
    Surface(
        Modifier::new()
            .class("splash")
            .fill_max_width()
            .min_height(600.0)
            .background(th.background)
            .center(),
        Column(Modifier::new().gap(16.0).align_items(AlignItems::Center)).child((
            Box(Modifier::new()
                .class("spinner")
                .width(64.0)
                .height(64.0)
                .clip_rounded(32.0)
                .background(th.outline)),
            Text(message).color(th.muted),
        )),
    )
}
