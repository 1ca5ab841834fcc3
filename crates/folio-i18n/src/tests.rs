#[cfg(test)]
mod tests {
    use crate::*;
    use folio_core::FolioError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn builtin_dictionaries_share_keys() {
        let en = Dictionary::builtin(Language::En).unwrap();
        let fr = Dictionary::builtin(Language::Fr).unwrap();
        assert_eq!(en.key_paths(), fr.key_paths());
        assert!(en.key_paths().contains(&"projects.items.game2d.title".to_string()));
    }

    #[test]
    fn lookup_follows_language() {
        let tr = Translator::new(Language::En).unwrap();
        assert_eq!(tr.t("common.loading"), "Loading...");
        assert_eq!(tr.t("navigation.skills"), "Skills");
        tr.set_language(Language::Fr);
        assert_eq!(tr.t("common.loading"), "Chargement...");
        assert_eq!(tr.toggle(), Language::En);
        assert_eq!(tr.t("projects.categories.academic"), "Academic");
    }

    #[test]
    fn lists_resolve() {
        let tr = Translator::new(Language::En).unwrap();
        let bullets = tr.t_list("experiences.items.snr.achievements");
        assert_eq!(bullets.len(), 3);
        assert!(bullets[1].contains("soldering"));
    }

    #[test]
    fn miss_returns_key_path() {
        let tr = Translator::new(Language::Fr).unwrap();
        assert_eq!(tr.t("projects.items.nope.title"), "projects.items.nope.title");
        assert_eq!(tr.t_list("nope"), vec!["nope".to_string()]);
        // A string is not a list and vice versa.
        assert_eq!(tr.t("about.paragraphs"), "about.paragraphs");
        assert!(!tr.has(""));
    }

    #[test]
    fn french_falls_back_to_english() {
        let en = Dictionary::from_json(Language::En, r#"{"a":{"b":"only english"}}"#).unwrap();
        let fr = Dictionary::from_json(Language::Fr, r#"{"a":{}}"#).unwrap();
        let tr = Translator::with_dictionaries(Language::Fr, en, fr);
        assert_eq!(tr.t("a.b"), "only english");
        assert!(!tr.has("a.b"));
    }

    #[test]
    fn rejects_malformed_dictionaries() {
        assert!(matches!(
            Dictionary::from_json(Language::Fr, "{"),
            Err(FolioError::Dictionary { .. })
        ));
        assert!(Dictionary::from_json(Language::En, "[1, 2]").is_err());
    }

    #[test]
    fn language_parsing_and_labels() {
        assert_eq!("FR".parse::<Language>().unwrap(), Language::Fr);
        assert_eq!("english".parse::<Language>().unwrap(), Language::En);
        assert!("de".parse::<Language>().is_err());
        assert_eq!(Language::En.toggle().label(), "FR");
        assert_eq!(serde_json::to_string(&Language::Fr).unwrap(), "\"fr\"");
    }

    #[test]
    fn language_signal_notifies_once_per_change() {
        let tr = Translator::new(Language::En).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        tr.language_signal().subscribe(move |l| s.borrow_mut().push(*l));
        tr.set_language(Language::En);
        tr.toggle();
        tr.clone().toggle();
        assert_eq!(*seen.borrow(), vec![Language::Fr, Language::En]);
    }
}
