use folio_core::prelude::*;
use folio_i18n::{Language, Translator};
use folio_ui::*;

/// Button that flips between the two languages. It names the language
/// you would switch to, not the current one.
pub struct LanguageSwitcher {
    translator: Translator,
}

impl LanguageSwitcher {
    pub fn new(translator: Translator) -> Self {
        Self { translator }
    }

    pub fn target(&self) -> Language {
        self.translator.language().toggle()
    }

    pub fn label(&self) -> &'static str {
        self.target().label()
    }

    pub fn aria_label(&self) -> String {
        format!("Switch to {}", self.target().name())
    }

    pub fn toggle(&self) -> Language {
        self.translator.toggle()
    }

    pub fn view(&self) -> View {
        let translator = self.translator.clone();
        Button(self.label(), move || {
            translator.toggle();
        })
        .semantics(Semantics::new(Role::Button).label(self.aria_label()))
        .modifier(
            Modifier::new()
                .class("lang-switch")
                .padding(8.0)
                .clip_rounded(8.0)
                .background(theme().surface),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_names_the_other_language() {
        let t = Translator::new(Language::En).unwrap();
        let switcher = LanguageSwitcher::new(t.clone());
        assert_eq!(switcher.label(), "FR");
        assert_eq!(switcher.aria_label(), "Switch to French");

        assert_eq!(switcher.toggle(), Language::Fr);
        assert_eq!(t.language(), Language::Fr);
        assert_eq!(switcher.label(), "EN");
        assert_eq!(switcher.aria_label(), "Switch to English");
    }

    #[test]
    fn clicking_the_view_toggles() {
        let t = Translator::new(Language::En).unwrap();
        let mut view = LanguageSwitcher::new(t.clone()).view();
        stamp_ids(&mut view);
        assert!(dispatch_click(&view, view.id));
        assert_eq!(t.language(), Language::Fr);
    }
}
