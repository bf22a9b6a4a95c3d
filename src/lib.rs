//! # futaba-page
//!
//! Client-side enhancement layer for the Futaba static landing page,
//! compiled to WASM.
//!
//! The crate cycles the page between three visual themes (with a stacked
//! "cascade" of preview cards), swaps translatable text between Chinese,
//! English, and Japanese, and persists both choices in `localStorage`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Theme variants, cycling order, card stacking table |
//! | [`locale`] | Supported locales and the translation table |
//! | [`strings`] | Compiled-in display strings |
//! | [`state`] | Theme and locale controllers |
//! | [`app`] | [`app::Page`] bootstrap and click handlers |
//! | [`prefs`] | Preference store trait and in-memory store |
//! | [`surface`] | Document abstraction and in-memory page |
//! | [`config`] | Page contract configuration |
//! | [`consts`] | Class names, storage keys, z-index values |
//! | `util` | Browser glue (`hydrate` feature only) |

pub mod app;
pub mod config;
pub mod consts;
pub mod locale;
pub mod prefs;
pub mod state;
pub mod strings;
pub mod surface;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod util;

pub use app::{BootReport, Page};
pub use config::{ConfigError, PageConfig};
pub use locale::{Locale, LocaleTable};
pub use prefs::{MemoryStore, PreferenceStore, StorageError};
pub use surface::{MemoryPage, NodeSet, PageSurface};
pub use theme::{CardKey, Direction, Theme};
