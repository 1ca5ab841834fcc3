use std::rc::Rc;

use folio_core::prelude::*;
use folio_ui::*;

use super::PageCtx;
use crate::content::{PROFILE, STATS};
use crate::nav::Navbar;
use crate::sections::SectionKey;
use crate::ui::{PageSection, Reveal};

pub fn screen(ctx: &PageCtx, word: &str, navbar: &Rc<Navbar>) -> View {
    let th = theme();
    let (seq, now) = (ctx.entrance, ctx.now);

    let intro = Column(Modifier::new().gap(8.0)).child((
        Text(ctx.t("hero.greeting")).color(th.muted).size(20.0),
        Heading(1, PROFILE.name).modifier(
            Modifier::new().foreground(LinearGradient::diagonal(th.primary, th.secondary)),
        ),
    ));

    let role = Row(Modifier::new().gap(8.0).align_items(AlignItems::Center)).child((
        Text(ctx.t("hero.iAm")).size(24.0),
        Text(word).color(th.primary).size(24.0),
    ));

    let contact = Button(ctx.t("hero.cta.contact"), {
        let navbar = Rc::clone(navbar);
        move || {
            navbar.navigate(SectionKey::Contact);
        }
    })
    .modifier(
        Modifier::new()
            .class("cta primary")
            .anchor(SectionKey::Contact.anchor())
            .padding_values(PaddingValues::symmetric(24.0, 12.0))
            .clip_rounded(999.0)
            .background(LinearGradient::diagonal(th.primary, th.secondary)),
    );
    let cv = Link(ctx.t("hero.cta.cv"), PROFILE.cv_file).modifier(
        Modifier::new()
            .class("cta")
            .padding_values(PaddingValues::symmetric(24.0, 12.0))
            .clip_rounded(999.0),
    );

    let stats = Row(Modifier::new().class("stats").gap(32.0)).child(
        STATS
            .iter()
            .map(|(figure, caption)| {
                Column(Modifier::new().align_items(AlignItems::Center)).child((
                    Text(*figure).color(th.primary).size(32.0),
                    Text(ctx.t(caption)).color(th.muted).size(14.0),
                ))
            })
            .collect::<Vec<_>>(),
    );

    let text = Column(Modifier::new().weight(1.0).gap(24.0)).child((
        Reveal(seq, 0, now, intro),
        Reveal(seq, 1, now, role),
        Reveal(seq, 2, now, Text(ctx.t("hero.description")).color(th.on_surface)),
        Reveal(seq, 3, now, Row(Modifier::new().wrap().gap(16.0)).child((contact, cv))),
        Reveal(seq, 4, now, stats),
    ));

    let photo = Reveal(
        seq,
        5,
        now,
        Image(
            Modifier::new()
                .class("avatar")
                .width(320.0)
                .height(320.0)
                .clip_rounded(160.0),
            PROFILE.photo,
            PROFILE.name,
            PROFILE.initials,
        ),
    );

    PageSection(
        SectionKey::Home,
        Row(Modifier::new()
            .class("hero")
            .wrap()
            .gap(48.0)
            .min_height(560.0)
            .align_items(AlignItems::Center))
        .child((text, photo)),
    )
}
