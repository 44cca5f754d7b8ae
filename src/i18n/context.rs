use log::{debug, info};
use std::borrow::Cow;

use crate::i18n::strings;
use crate::i18n::{Direction, Language};

/// Read-only view of localization used by every component.
///
/// `t` must never fail: on a miss it hands back something printable,
/// usually the key itself.
pub trait Translate {
    fn t<'a>(&self, key: &'a str) -> Cow<'a, str>;

    fn direction(&self) -> Direction;

    fn is_rtl(&self) -> bool {
        self.direction().is_rtl()
    }
}

/// Session-wide language state backed by the bundled string tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageContext {
    language: Language,
}

impl LanguageContext {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        info!("Language set to {}", language.code());
        self.language = language;
    }

    /// Switch between the two bundled languages.
    pub fn toggle(&mut self) {
        self.set_language(self.language.toggled());
    }
}

impl Translate for LanguageContext {
    fn t<'a>(&self, key: &'a str) -> Cow<'a, str> {
        match strings::lookup(self.language, key) {
            Some(text) => Cow::Borrowed(text),
            None => {
                debug!("Missing {} translation for {:?}", self.language.code(), key);
                Cow::Borrowed(key)
            }
        }
    }

    fn direction(&self) -> Direction {
        self.language.direction()
    }
}
