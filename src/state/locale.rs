//! Locale controller: text substitution, switcher state, and persistence.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use crate::config::PageConfig;
use crate::consts::CLASS_ACTIVE;
use crate::locale::{Locale, LocaleTable};
use crate::prefs::{PreferenceStore, read_or_none, write_best_effort};
use crate::surface::{NodeSet, PageSurface};

/// Owns the active display language and rewrites translatable text.
#[derive(Debug)]
pub struct LocaleController<S> {
    store: S,
    table: LocaleTable,
    storage_key: String,
    translation_key_attr: String,
    locale_switch_attr: String,
    default_locale: Locale,
    current: Option<Locale>,
}

impl<S: PreferenceStore> LocaleController<S> {
    /// Controller over the built-in string table.
    pub fn new(store: S, config: &PageConfig) -> Self {
        Self::with_table(store, LocaleTable::builtin(), config)
    }

    pub fn with_table(store: S, table: LocaleTable, config: &PageConfig) -> Self {
        Self {
            store,
            table,
            storage_key: config.locale_storage_key.clone(),
            translation_key_attr: config.translation_key_attr.clone(),
            locale_switch_attr: config.locale_switch_attr.clone(),
            default_locale: config.default_locale,
            current: None,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<Locale> {
        self.current
    }

    #[must_use]
    pub fn table(&self) -> &LocaleTable {
        &self.table
    }

    /// The stored locale name, or the default's name when unset, empty, or
    /// unreadable.
    ///
    /// Any other raw name is returned as-is; [`Self::apply_locale`] decides
    /// whether it is supported.
    #[must_use]
    pub fn persisted_locale(&self) -> String {
        read_or_none(&self.store, &self.storage_key)
            .filter(|raw| !raw.is_empty())
            .unwrap_or_else(|| self.default_locale.name().to_owned())
    }

    /// Switch to the locale named `name`.
    ///
    /// Returns `false` without touching the page or the store when the name
    /// is not a supported locale.
    pub fn apply_locale<P: PageSurface>(&mut self, page: &mut P, name: &str) -> bool {
        let Some(locale) = Locale::from_name(name).filter(|l| self.table.supports(*l)) else {
            log::debug!("ignoring unsupported locale {name:?}");
            return false;
        };

        page.set_root_lang(locale.language_tag());

        for node in page.nodes(NodeSet::Translatable) {
            let Some(key) = page.attribute(&node, &self.translation_key_attr) else {
                continue;
            };
            if let Some(text) = self.table.lookup(locale, &key) {
                page.set_text(&node, text);
            }
        }

        for button in page.nodes(NodeSet::LocaleSwitches) {
            let target = page.attribute(&button, &self.locale_switch_attr);
            page.toggle_class(&button, CLASS_ACTIVE, target.as_deref() == Some(locale.name()));
        }

        write_best_effort(&self.store, &self.storage_key, locale.name());
        self.current = Some(locale);
        log::debug!("locale applied: {}", locale.name());
        true
    }
}
