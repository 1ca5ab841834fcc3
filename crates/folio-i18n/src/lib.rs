//! Translations.
//!
//! Dictionaries are nested JSON objects addressed by dot-separated key
//! paths such as `projects.items.healthChain.title`. Leaves are strings or
//! arrays of strings. A lookup that misses in the active language retries
//! in English and finally yields the key path itself, so missing text is
//! visible on the page instead of silently blank.

pub mod tests;

use std::fmt;
use std::str::FromStr;

use folio_core::{FolioError, Result, Signal, signal};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const EN_JSON: &str = include_str!("../locales/en.json");
const FR_JSON: &str = include_str!("../locales/fr.json");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Name of the language, in English.
    pub fn name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "French",
        }
    }

    /// Upper-case code, as shown on the switcher.
    pub fn label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Fr => "FR",
        }
    }

    pub fn toggle(self) -> Language {
        match self {
            Language::En => Language::Fr,
            Language::Fr => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "fr" | "french" | "français" => Ok(Language::Fr),
            other => Err(FolioError::Config(format!("unsupported language `{other}`"))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Dictionary {
    lang: Language,
    root: Value,
}

impl Dictionary {
    pub fn from_json(lang: Language, json: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(json).map_err(|e| FolioError::Dictionary {
            lang: lang.to_string(),
            reason: e.to_string(),
        })?;
        if !root.is_object() {
            return Err(FolioError::Dictionary {
                lang: lang.to_string(),
                reason: "top level must be an object".into(),
            });
        }
        Ok(Self { lang, root })
    }

    /// The dictionary shipped with the crate.
    pub fn builtin(lang: Language) -> Result<Self> {
        match lang {
            Language::En => Self::from_json(lang, EN_JSON),
            Language::Fr => Self::from_json(lang, FR_JSON),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    fn node(&self, path: &str) -> Option<&Value> {
        if path.is_empty() {
            return None;
        }
        path.split('.').try_fold(&self.root, |v, seg| v.get(seg))
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.node(path)?.as_str()
    }

    pub fn get_list(&self, path: &str) -> Option<Vec<String>> {
        let items = self.node(path)?.as_array()?;
        items
            .iter()
            .map(|v| v.as_str().map(str::to_owned))
            .collect()
    }

    /// Every string leaf path, sorted. Array leaves count as one path.
    pub fn key_paths(&self) -> Vec<String> {
        fn walk(prefix: &str, v: &Value, out: &mut Vec<String>) {
            match v {
                Value::Object(map) => {
                    for (k, child) in map {
                        let path = if prefix.is_empty() {
                            k.clone()
                        } else {
                            format!("{prefix}.{k}")
                        };
                        walk(&path, child, out);
                    }
                }
                _ => out.push(prefix.to_string()),
            }
        }
        let mut out = Vec::new();
        walk("", &self.root, &mut out);
        out.sort();
        out
    }
}

/// Looks up text in the current language.
///
/// Cloning is cheap and clones share the language signal, so a page can
/// hold a `Translator` while the switcher flips the language elsewhere.
#[derive(Clone)]
pub struct Translator {
    language: Signal<Language>,
    en: std::rc::Rc<Dictionary>,
    fr: std::rc::Rc<Dictionary>,
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("language", &self.language.get())
            .finish()
    }
}

impl Translator {
    pub fn new(language: Language) -> Result<Self> {
        Ok(Self::with_dictionaries(
            language,
            Dictionary::builtin(Language::En)?,
            Dictionary::builtin(Language::Fr)?,
        ))
    }

    pub fn with_dictionaries(language: Language, en: Dictionary, fr: Dictionary) -> Self {
        Self {
            language: signal(language),
            en: std::rc::Rc::new(en),
            fr: std::rc::Rc::new(fr),
        }
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }

    pub fn language_signal(&self) -> Signal<Language> {
        self.language.clone()
    }

    pub fn set_language(&self, lang: Language) {
        if self.language.set_if_changed(lang) {
            log::info!("language switched to {lang}");
        }
    }

    pub fn toggle(&self) -> Language {
        let next = self.language().toggle();
        self.set_language(next);
        next
    }

    fn dict(&self, lang: Language) -> &Dictionary {
        match lang {
            Language::En => &self.en,
            Language::Fr => &self.fr,
        }
    }

    fn candidates(&self) -> impl Iterator<Item = &Dictionary> {
        let lang = self.language();
        let fallback = (lang != Language::En).then(|| self.dict(Language::En));
        std::iter::once(self.dict(lang)).chain(fallback)
    }

    pub fn t(&self, path: &str) -> String {
        if let Some(s) = self.candidates().find_map(|d| d.get(path)) {
            return s.to_string();
        }
        log::warn!("missing translation `{path}` ({})", self.language());
        path.to_string()
    }

    pub fn t_list(&self, path: &str) -> Vec<String> {
        if let Some(items) = self.candidates().find_map(|d| d.get_list(path)) {
            return items;
        }
        log::warn!("missing translation list `{path}` ({})", self.language());
        vec![path.to_string()]
    }

    pub fn has(&self, path: &str) -> bool {
        let d = self.dict(self.language());
        d.get(path).is_some() || d.get_list(path).is_some()
    }
}
