//! Page bootstrap: composes the theme and locale controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser entry point builds one [`Page`], calls [`Page::boot`] once the
//! document is ready, and forwards cascade / language-switch clicks to the
//! `on_*` handlers. Native callers drive the same API against a
//! [`crate::surface::MemoryPage`].

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::config::PageConfig;
use crate::locale::Locale;
use crate::prefs::PreferenceStore;
use crate::state::{LocaleController, ThemeController};
use crate::surface::PageSurface;
use crate::theme::{Direction, Theme};

/// What boot applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootReport {
    pub theme: Theme,
    /// `None` when the stored locale name was not supported.
    pub locale: Option<Locale>,
}

/// Both preference controllers over one shared store.
#[derive(Debug)]
pub struct Page<S> {
    theme: ThemeController<S>,
    locale: LocaleController<S>,
}

impl<S: PreferenceStore + Clone> Page<S> {
    pub fn new(store: S, config: &PageConfig) -> Self {
        Self {
            theme: ThemeController::new(store.clone(), config),
            locale: LocaleController::new(store, config),
        }
    }
}

impl<S: PreferenceStore> Page<S> {
    #[must_use]
    pub fn from_parts(theme: ThemeController<S>, locale: LocaleController<S>) -> Self {
        Self { theme, locale }
    }

    /// Apply both persisted preferences. The theme goes on without
    /// transition cues since nothing has been painted yet.
    pub fn boot<P: PageSurface>(&mut self, surface: &mut P) -> BootReport {
        let theme = self.theme.persisted_theme();
        self.theme.apply_theme(surface, theme, true);

        let locale_name = self.locale.persisted_locale();
        self.locale.apply_locale(surface, &locale_name);

        let report = BootReport { theme, locale: self.locale.current() };
        log::info!("page booted: theme={} locale={locale_name}", theme.name());
        report
    }

    pub fn on_cascade_prev<P: PageSurface>(&mut self, surface: &mut P) -> Theme {
        self.theme.cycle_theme(surface, Direction::Previous)
    }

    pub fn on_cascade_next<P: PageSurface>(&mut self, surface: &mut P) -> Theme {
        self.theme.cycle_theme(surface, Direction::Next)
    }

    /// Handle a click on a language-switch control. `target` is the
    /// control's locale attribute, absent on malformed markup.
    pub fn on_locale_button<P: PageSurface>(&mut self, surface: &mut P, target: Option<&str>) -> bool {
        match target {
            Some(name) => self.locale.apply_locale(surface, name),
            None => false,
        }
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeController<S> {
        &self.theme
    }

    #[must_use]
    pub fn locale(&self) -> &LocaleController<S> {
        &self.locale
    }
}
