use folio_core::prelude::*;
use folio_ui::*;

use super::PageCtx;
use crate::content::{EDUCATION, SPOKEN};
use crate::sections::SectionKey;
use crate::ui::{Card, Chips, PageSection, Reveal, SectionHeader};

pub fn screen(ctx: &PageCtx) -> View {
    let th = theme();
    let (seq, now) = (ctx.entrance, ctx.now);

    let details = ["location", "age", "school"]
        .into_iter()
        .map(|d| Text(ctx.t(&format!("about.details.{d}"))).color(th.muted).size(14.0))
        .collect::<Vec<_>>();
    let profile = Card(
        Modifier::new().class("profile"),
        (
            Heading(3, ctx.t("about.role")),
            Column(Modifier::new().gap(4.0)).child(details),
        ),
    );

    let story = Column(Modifier::new().gap(12.0).weight(1.0)).child((
        Heading(3, ctx.t("about.profileHeading")),
        ctx.t.t_list("about.paragraphs")
            .into_iter()
            .map(|p| Text(p).color(th.on_surface))
            .collect::<Vec<_>>(),
    ));

    let education = Card(
        Modifier::new(),
        (
            Heading(3, ctx.t("about.education")),
            EDUCATION
                .iter()
                .map(|e| {
                    Column(Modifier::new().gap(2.0)).child((
                        Text(e.degree),
                        Text(e.school).color(th.muted).size(14.0),
                        Text(e.period).color(th.primary).size(12.0),
                    ))
                })
                .collect::<Vec<_>>(),
        ),
    );

    let languages = Card(
        Modifier::new(),
        (
            Heading(3, ctx.t("about.languages")),
            SPOKEN
                .iter()
                .map(|(name, level)| {
                    Row(Modifier::new().gap(8.0)).child((
                        Text(*name),
                        Spacer(),
                        Tag(*level),
                    ))
                })
                .collect::<Vec<_>>(),
        ),
    );

    let interests = Card(
        Modifier::new(),
        (
            Heading(3, ctx.t("about.interests")),
            Chips(&ctx.t.t_list("about.interestList")),
        ),
    );

    PageSection(
        SectionKey::About,
        Column(Modifier::new().gap(32.0)).child((
            Reveal(seq, 0, now, SectionHeader("01", ctx.t("about.title"), None)),
            Row(Modifier::new().wrap().gap(32.0)).child((
                Reveal(seq, 1, now, profile),
                Reveal(seq, 2, now, story),
            )),
            Row(Modifier::new().wrap().gap(24.0)).child((
                Reveal(seq, 3, now, education),
                Reveal(seq, 4, now, languages),
                Reveal(seq, 5, now, interests),
            )),
        )),
    )
}
