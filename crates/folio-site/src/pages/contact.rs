use folio_core::prelude::*;
use folio_ui::*;

use super::PageCtx;
use crate::content::PROFILE;
use crate::sections::SectionKey;
use crate::ui::{Card, PageSection, Reveal, SectionHeader};

pub fn screen(ctx: &PageCtx) -> View {
    let th = theme();
    let (seq, now) = (ctx.entrance, ctx.now);

    let info = Row(Modifier::new().wrap().gap(24.0)).child((
        Card(
            Modifier::new().weight(1.0),
            (
                Text(ctx.t("contact.social.email")).color(th.muted).size(14.0),
                Link(PROFILE.email, format!("mailto:{}", PROFILE.email)),
            ),
        ),
        Card(
            Modifier::new().weight(1.0),
            (
                Text(ctx.t("contact.info.phone")).color(th.muted).size(14.0),
                Link(PROFILE.phone, PROFILE.phone_href),
            ),
        ),
        Card(
            Modifier::new().weight(1.0),
            Text(ctx.t("contact.info.location")),
        ),
    ));

    let social = Row(Modifier::new().class("social").gap(16.0).center()).child((
        Link(ctx.t("contact.social.linkedin"), PROFILE.linkedin_url),
        Link(ctx.t("contact.social.github"), PROFILE.github_url),
        Link(ctx.t("contact.social.email"), format!("mailto:{}", PROFILE.email)),
    ));

    let footer = Text(ctx.t("contact.footer"))
        .color(th.muted)
        .size(12.0);

    PageSection(
        SectionKey::Contact,
        Column(Modifier::new().gap(32.0)).child((
            Reveal(
                seq,
                0,
                now,
                SectionHeader("05", ctx.t("contact.title"), Some(ctx.t("contact.subtitle"))),
            ),
            Reveal(seq, 1, now, Text(ctx.t("contact.description")).color(th.on_surface)),
            Reveal(seq, 2, now, info),
            Reveal(seq, 3, now, social),
            Reveal(
                seq,
                4,
                now,
                Column(Modifier::new().class("footer").padding(24.0).center()).child(footer),
            ),
        )),
    )
}
