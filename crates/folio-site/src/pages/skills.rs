use folio_core::prelude::*;
use folio_ui::*;

use super::PageCtx;
use crate::content::{SKILLS, SkillCategory};
use crate::sections::SectionKey;
use crate::ui::{Card, PageSection, Reveal, SectionHeader};

pub fn screen(ctx: &PageCtx) -> View {
    let (seq, now) = (ctx.entrance, ctx.now);
    let categories = SKILLS
        .iter()
        .enumerate()
        .map(|(i, c)| Reveal(seq, i + 1, now, category(ctx, c)))
        .collect::<Vec<_>>();

    PageSection(
        SectionKey::Skills,
        Column(Modifier::new().gap(32.0)).child((
            Reveal(
                seq,
                0,
                now,
                SectionHeader("04", ctx.t("skills.title"), Some(ctx.t("skills.subtitle"))),
            ),
            Row(Modifier::new().class("skills-grid").wrap().gap(24.0)).child(categories),
        )),
    )
}

fn category(ctx: &PageCtx, c: &SkillCategory) -> View {
    let th = theme();
    let skills = c
        .skills
        .iter()
        .map(|s| {
            Column(Modifier::new().class("skill").width(72.0).gap(4.0).align_items(AlignItems::Center))
                .child((
                    Image(Modifier::new().width(40.0).height(40.0), s.icon, s.name, s.monogram()),
                    Text(s.name).size(12.0),
                ))
        })
        .collect::<Vec<_>>();

    Card(
        Modifier::new().width(360.0),
        (
            Row(Modifier::new().gap(8.0).align_items(AlignItems::Center)).child((
                Text(c.icon).color(th.primary).size(20.0),
                Heading(3, ctx.t(&c.title_key())),
            )),
            Row(Modifier::new().wrap().gap(12.0)).child(skills),
        ),
    )
}
