//! Preference controllers.
//!
//! DESIGN
//! ======
//! Theme and locale are independent: each controller owns its own current
//! value and storage key, and neither reads the other's state.

pub mod locale;
pub mod theme;

pub use locale::LocaleController;
pub use theme::ThemeController;
