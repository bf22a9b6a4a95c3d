//! Page contract configuration.
//!
//! Defaults mirror the shipped markup; hosts can override any field by
//! passing a JSON object to the browser entry point. Unknown fields are
//! rejected.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{LOCALE_STORAGE_KEY, THEME_STORAGE_KEY};
use crate::locale::Locale;
use crate::theme::Theme;

/// Error returned by [`PageConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid page config: {field} must not be empty")]
    Empty { field: &'static str },
    #[error("invalid page config: scroll reveal threshold {0} outside 0..=1")]
    Threshold(f64),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub theme_storage_key: String,
    pub locale_storage_key: String,
    pub default_theme: Theme,
    pub default_locale: Locale,
    /// Cascade cards, each carrying `card_key_attr`.
    pub card_selector: String,
    pub card_key_attr: String,
    /// Elements whose text is replaced, keyed by `translation_key_attr`.
    pub translatable_selector: String,
    pub translation_key_attr: String,
    /// Locale-switch buttons, each targeting the locale in `locale_switch_attr`.
    pub locale_switch_selector: String,
    pub locale_switch_attr: String,
    pub prev_control_id: String,
    pub next_control_id: String,
    pub scroll_reveal: ScrollRevealConfig,
    pub smooth_scroll_selector: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: THEME_STORAGE_KEY.to_owned(),
            locale_storage_key: LOCALE_STORAGE_KEY.to_owned(),
            default_theme: Theme::default(),
            default_locale: Locale::default(),
            card_selector: ".cascade-card".to_owned(),
            card_key_attr: "data-theme".to_owned(),
            translatable_selector: "[data-i18n]".to_owned(),
            translation_key_attr: "data-i18n".to_owned(),
            locale_switch_selector: "#langSwitcher button".to_owned(),
            locale_switch_attr: "data-lang".to_owned(),
            prev_control_id: "cascadePrev".to_owned(),
            next_control_id: "cascadeNext".to_owned(),
            scroll_reveal: ScrollRevealConfig::default(),
            smooth_scroll_selector: "a[href^=\"#\"]".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollRevealConfig {
    pub selector: String,
    pub visible_class: String,
    /// Fraction of the element that must be visible, `0.0..=1.0`.
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for ScrollRevealConfig {
    fn default() -> Self {
        Self {
            selector: ".scroll-reveal".to_owned(),
            visible_class: "visible".to_owned(),
            threshold: 0.1,
            root_margin: "0px 0px -40px 0px".to_owned(),
        }
    }
}

impl PageConfig {
    /// Overlay a JSON object onto the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed, names an unknown
    /// field, or leaves a required key or selector empty.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("theme_storage_key", &self.theme_storage_key),
            ("locale_storage_key", &self.locale_storage_key),
            ("card_selector", &self.card_selector),
            ("card_key_attr", &self.card_key_attr),
            ("translatable_selector", &self.translatable_selector),
            ("translation_key_attr", &self.translation_key_attr),
            ("locale_switch_selector", &self.locale_switch_selector),
            ("locale_switch_attr", &self.locale_switch_attr),
            ("prev_control_id", &self.prev_control_id),
            ("next_control_id", &self.next_control_id),
            ("scroll_reveal.selector", &self.scroll_reveal.selector),
            ("scroll_reveal.visible_class", &self.scroll_reveal.visible_class),
            ("smooth_scroll_selector", &self.smooth_scroll_selector),
        ];
        if let Some(&(field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ConfigError::Empty { field });
        }
        let threshold = self.scroll_reveal.threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Threshold(threshold));
        }
        Ok(())
    }
}
