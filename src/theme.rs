//! Theme variants, cascade card keys, and the card stacking table.
//!
//! DESIGN
//! ======
//! The three themes form a fixed cyclic order. Each theme owns one cascade
//! card; the card stacking order is a pure lookup on (active key, card key)
//! so the layering never depends on DOM state.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

use crate::consts::{CLASS_DARK, CLASS_THEME_CLEAN, CLASS_THEME_PERSONA5, Z_ACTIVE, Z_FAR, Z_NEAR};

/// Visual theme applied to the whole page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    CleanLight,
    CleanDark,
    #[serde(rename = "persona5")]
    Persona5,
}

impl Theme {
    /// Fixed cycling order.
    pub const ORDER: [Theme; 3] = [Theme::CleanLight, Theme::CleanDark, Theme::Persona5];

    /// Identifier used in storage and markup.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::CleanLight => "clean-light",
            Self::CleanDark => "clean-dark",
            Self::Persona5 => "persona5",
        }
    }

    /// Parse a stored identifier. Unknown names yield `None`.
    #[must_use]
    pub fn from_name(raw: &str) -> Option<Self> {
        Self::ORDER.into_iter().find(|theme| theme.name() == raw)
    }

    /// Short key linking the theme to its cascade card.
    #[must_use]
    pub fn card_key(self) -> CardKey {
        match self {
            Self::CleanLight => CardKey::Light,
            Self::CleanDark => CardKey::Dark,
            Self::Persona5 => CardKey::P5,
        }
    }

    /// Marker classes this theme sets on the root element.
    #[must_use]
    pub fn markers(self) -> &'static [&'static str] {
        match self {
            Self::CleanLight => &[CLASS_THEME_CLEAN],
            Self::CleanDark => &[CLASS_THEME_CLEAN, CLASS_DARK],
            Self::Persona5 => &[CLASS_THEME_PERSONA5],
        }
    }

    /// Position in [`Theme::ORDER`].
    #[must_use]
    pub fn position(self) -> usize {
        match self {
            Self::CleanLight => 0,
            Self::CleanDark => 1,
            Self::Persona5 => 2,
        }
    }

    /// Step through the cyclic order, wrapping both ways.
    #[must_use]
    pub fn step(self, direction: Direction) -> Self {
        step_from(self.position(), direction)
    }
}

/// Step from an arbitrary position in [`Theme::ORDER`].
#[must_use]
pub fn step_from(position: usize, direction: Direction) -> Theme {
    let len = Theme::ORDER.len();
    let next = match direction {
        Direction::Next => (position % len + 1) % len,
        Direction::Previous => (position % len + len - 1) % len,
    };
    Theme::ORDER[next]
}

/// Cycling direction for the cascade navigation controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            Self::Previous => Self::Next,
            Self::Next => Self::Previous,
        }
    }
}

/// Key carried by each cascade card in its `data-theme` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKey {
    Light,
    Dark,
    P5,
}

impl CardKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::P5 => "p5",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "p5" => Some(Self::P5),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Light => 0,
            Self::Dark => 1,
            Self::P5 => 2,
        }
    }
}

/// Rows: active key. Columns: card key. Both in `light, dark, p5` order.
///
/// The inactive card adjacent to the active one always outranks the far one.
const STACKING: [[i32; 3]; 3] = [
    [Z_ACTIVE, Z_NEAR, Z_FAR],
    [Z_FAR, Z_ACTIVE, Z_NEAR],
    [Z_FAR, Z_NEAR, Z_ACTIVE],
];

/// z-index for `card` while `active` is the active card key.
#[must_use]
pub fn stacking_order(active: CardKey, card: CardKey) -> i32 {
    STACKING[active.index()][card.index()]
}
