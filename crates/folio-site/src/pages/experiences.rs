use folio_core::prelude::*;
use folio_ui::*;

use super::PageCtx;
use crate::content::{EXPERIENCES, Experience};
use crate::sections::SectionKey;
use crate::ui::{Card, Chips, PageSection, Reveal, SectionHeader};

pub fn screen(ctx: &PageCtx) -> View {
    let (seq, now) = (ctx.entrance, ctx.now);

    let header = SectionHeader(
        "03",
        ctx.t("experiences.title"),
        Some(ctx.t("experiences.subtitle")),
    );

    let timeline = EXPERIENCES
        .iter()
        .enumerate()
        .map(|(i, e)| Reveal(seq, i + 1, now, entry(ctx, e)))
        .collect::<Vec<_>>();

    PageSection(
        SectionKey::Experiences,
        Column(Modifier::new().gap(32.0)).child((
            Reveal(seq, 0, now, header),
            Column(Modifier::new().class("timeline").gap(24.0)).child(timeline),
        )),
    )
}

fn entry(ctx: &PageCtx, e: &Experience) -> View {
    let th = theme();
    let achievements = ctx
        .t
        .t_list(&e.field("achievements"))
        .into_iter()
        .map(|a| Text(format!("▹ {a}")).size(14.0))
        .collect::<Vec<_>>();

    Card(
        Modifier::new().class("timeline-entry"),
        (
            Row(Modifier::new().wrap().gap(8.0).align_items(AlignItems::Center)).child((
                Heading(3, ctx.t(&e.field("position"))),
                Spacer(),
                Tag(ctx.t(&e.field("period"))),
            )),
            Text(ctx.t(&e.field("company"))).color(th.primary),
            Text(ctx.t(&e.field("description"))).color(th.muted),
            Column(Modifier::new().gap(4.0)).child(achievements),
            Chips(e.technologies),
        ),
    )
}
