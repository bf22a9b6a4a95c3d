//! Supported display languages and their translation tables.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::strings;

/// Display language of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Zh,
    En,
    Ja,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Zh, Locale::En, Locale::Ja];

    /// Identifier used in storage and in `data-lang` on switch controls.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
            Self::Ja => "ja",
        }
    }

    #[must_use]
    pub fn from_name(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.name() == raw)
    }

    /// BCP 47 tag written to the root `lang` attribute.
    #[must_use]
    pub fn language_tag(self) -> &'static str {
        match self {
            Self::Zh => "zh-CN",
            Self::En => "en",
            Self::Ja => "ja",
        }
    }
}

/// Key → display string mapping for one locale.
pub type Dictionary = HashMap<String, String>;

/// Every locale's dictionary.
#[derive(Clone, Debug, Default)]
pub struct LocaleTable {
    entries: HashMap<Locale, Dictionary>,
}

impl LocaleTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The table compiled into the crate, covering every supported locale.
    #[must_use]
    pub fn builtin() -> Self {
        Locale::ALL
            .into_iter()
            .fold(Self::new(), |table, locale| table.with(locale, strings::entries(locale)))
    }

    /// Add (or replace) the dictionary for `locale`.
    #[must_use]
    pub fn with(mut self, locale: Locale, pairs: &[(&str, &str)]) -> Self {
        let dict = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        self.entries.insert(locale, dict);
        self
    }

    #[must_use]
    pub fn dictionary(&self, locale: Locale) -> Option<&Dictionary> {
        self.entries.get(&locale)
    }

    /// Look up `key` in `locale`. Missing locales and keys both yield `None`.
    #[must_use]
    pub fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.entries.get(&locale)?.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn supports(&self, locale: Locale) -> bool {
        self.entries.contains_key(&locale)
    }
}
