//! Shared constants for the page contract.

// ── Stacking ────────────────────────────────────────────────────

/// z-index of the card matching the active theme.
pub const Z_ACTIVE: i32 = 10;

/// z-index of the inactive card that sits next to the active one.
pub const Z_NEAR: i32 = 5;

/// z-index of the inactive card furthest from the active one.
pub const Z_FAR: i32 = 4;

// ── Root markers ────────────────────────────────────────────────

pub const CLASS_THEME_CLEAN: &str = "theme-clean";
pub const CLASS_THEME_PERSONA5: &str = "theme-persona5";
pub const CLASS_DARK: &str = "dark";

/// Every marker class a theme may set on the root element.
pub const ALL_THEME_MARKERS: [&str; 3] = [CLASS_THEME_PERSONA5, CLASS_THEME_CLEAN, CLASS_DARK];

/// Class toggled on cards and locale-switch controls.
pub const CLASS_ACTIVE: &str = "active";

// ── Storage ─────────────────────────────────────────────────────

pub const THEME_STORAGE_KEY: &str = "futaba-static-theme";
pub const LOCALE_STORAGE_KEY: &str = "futaba-static-lang";
