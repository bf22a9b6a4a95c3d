//! Theme controller: root markers, persistence, and cascade card layering.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::PageConfig;
use crate::consts::{ALL_THEME_MARKERS, CLASS_ACTIVE};
use crate::prefs::{PreferenceStore, read_or_none, write_best_effort};
use crate::surface::{NodeSet, PageSurface};
use crate::theme::{CardKey, Direction, Theme, stacking_order, step_from};

/// Owns the active theme and renders it onto a [`PageSurface`].
#[derive(Debug)]
pub struct ThemeController<S> {
    store: S,
    storage_key: String,
    card_key_attr: String,
    default_theme: Theme,
    /// `None` until the first apply, and after an unrecognized name.
    current: Option<Theme>,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S, config: &PageConfig) -> Self {
        Self {
            store,
            storage_key: config.theme_storage_key.clone(),
            card_key_attr: config.card_key_attr.clone(),
            default_theme: config.default_theme,
            current: None,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<Theme> {
        self.current
    }

    /// The stored theme, or the default when unset, unreadable, or unknown.
    #[must_use]
    pub fn persisted_theme(&self) -> Theme {
        let Some(raw) = read_or_none(&self.store, &self.storage_key) else {
            return self.default_theme;
        };
        Theme::from_name(&raw).unwrap_or_else(|| {
            log::warn!("ignoring stored theme {raw:?}");
            self.default_theme
        })
    }

    /// Make `theme` the active theme.
    ///
    /// `skip_transition` marks the initial, non-animated application: the
    /// root background override is kept and no card replays its entrance.
    pub fn apply_theme<P: PageSurface>(&mut self, page: &mut P, theme: Theme, skip_transition: bool) {
        page.remove_root_classes(&ALL_THEME_MARKERS);
        page.add_root_classes(theme.markers());
        if !skip_transition {
            page.clear_root_background();
        }

        write_best_effort(&self.store, &self.storage_key, theme.name());
        self.current = Some(theme);

        self.render_cards(page, theme.card_key(), skip_transition);
        log::debug!("theme applied: {}", theme.name());
    }

    /// Apply a raw identifier, e.g. one read from markup.
    ///
    /// Unknown names leave the page themeless: markers are cleared, cards
    /// and the stored preference are left as they were.
    pub fn apply_theme_named<P: PageSurface>(&mut self, page: &mut P, name: &str, skip_transition: bool) {
        if let Some(theme) = Theme::from_name(name) {
            self.apply_theme(page, theme, skip_transition);
            return;
        }
        log::warn!("unknown theme {name:?}, falling back to neutral styling");
        page.remove_root_classes(&ALL_THEME_MARKERS);
        if !skip_transition {
            page.clear_root_background();
        }
        self.current = None;
    }

    /// Step to the neighbouring theme and apply it with transitions.
    ///
    /// A neutral current state counts as the first position.
    pub fn cycle_theme<P: PageSurface>(&mut self, page: &mut P, direction: Direction) -> Theme {
        let position = self.current.map_or(0, Theme::position);
        let next = step_from(position, direction);
        self.apply_theme(page, next, false);
        next
    }

    fn render_cards<P: PageSurface>(&self, page: &mut P, active: CardKey, skip_transition: bool) {
        for card in page.nodes(NodeSet::Cards) {
            let key = page
                .attribute(&card, &self.card_key_attr)
                .and_then(|raw| CardKey::parse(&raw));
            let is_active = key == Some(active);
            let was_active = page.has_class(&card, CLASS_ACTIVE);

            if is_active && !was_active && !skip_transition {
                page.replay_entrance(&card);
            }
            page.toggle_class(&card, CLASS_ACTIVE, is_active);
            if let Some(key) = key {
                page.set_z_index(&card, stacking_order(active, key));
            }
        }
    }
}
