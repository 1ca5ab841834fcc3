use folio_core::prelude::*;
use folio_ui::*;

use super::PageCtx;
use crate::content::{Project, project_groups};
use crate::filter::{CategoryFilterState, ProjectCategory, filter};
use crate::sections::SectionKey;
use crate::ui::{Card, Chips, PageSection, Reveal, SectionHeader};

pub fn screen(ctx: &PageCtx, state: &CategoryFilterState) -> View {
    let (seq, now) = (ctx.entrance, ctx.now);
    let selected = state.selected();

    let tabs = Row(Modifier::new().class("filters").wrap().gap(12.0).center()).child(
        ProjectCategory::ALL
            .into_iter()
            .map(|c| {
                let state = state.clone();
                Button(format!("{} {}", c.icon(), ctx.t(&c.label_key())), move || {
                    state.select(c)
                })
                .active(c == selected)
            })
            .collect::<Vec<_>>(),
    );

    let groups = project_groups();
    let cards = filter(&groups, selected)
        .into_iter()
        .enumerate()
        .map(|(i, p)| Reveal(seq, i + 2, now, card(ctx, p)))
        .collect::<Vec<_>>();

    PageSection(
        SectionKey::Projects,
        Column(Modifier::new().gap(32.0)).child((
            Reveal(
                seq,
                0,
                now,
                SectionHeader("02", ctx.t("projects.title"), Some(ctx.t("projects.subtitle"))),
            ),
            Reveal(seq, 1, now, tabs),
            Row(Modifier::new().class("project-grid").wrap().gap(24.0)).child(cards),
        )),
    )
}

fn card(ctx: &PageCtx, p: &Project) -> View {
    let th = theme();
    let meta = match p.company {
        Some(company) => format!("{company} · {}", p.year),
        None => p.year.to_string(),
    };
    let badge = p
        .featured
        .then(|| Tag(ctx.t("common.featured")).color(th.highlight));

    Card(
        Modifier::new()
            .class(format!("project-card {}", p.accent.class()))
            .width(360.0),
        (
            Row(Modifier::new().gap(8.0).align_items(AlignItems::Center)).child((
                Text(p.kind.icon()).size(24.0),
                Spacer(),
                badge,
            )),
            Heading(3, ctx.t(&p.title_key())),
            Text(meta).color(th.primary).size(12.0),
            Text(ctx.t(&p.description_key())).color(th.muted).size(14.0),
            Chips(p.technologies),
        ),
    )
}
