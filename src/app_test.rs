use super::*;
use crate::locale::LocaleTable;
use crate::prefs::MemoryStore;
use crate::surface::{MemoryPage, NodeSet};

fn surface() -> MemoryPage {
    MemoryPage::standard(&[("features.subtitle", "")], &["zh", "en", "ja"])
}

#[test]
fn boot_reports_applied_preferences() {
    let store = MemoryStore::new()
        .with("futaba-static-theme", "persona5")
        .with("futaba-static-lang", "en");
    let mut page = Page::new(store, &PageConfig::default());
    let mut surface = surface();

    let report = page.boot(&mut surface);

    assert_eq!(report, BootReport { theme: Theme::Persona5, locale: Some(Locale::En) });
    assert_eq!(page.theme().current(), Some(Theme::Persona5));
    assert_eq!(page.locale().current(), Some(Locale::En));
}

#[test]
fn boot_with_unsupported_stored_locale_leaves_text_alone() {
    let store = MemoryStore::new().with("futaba-static-lang", "fr");
    let mut page = Page::new(store.clone(), &PageConfig::default());
    let mut surface = surface();

    let report = page.boot(&mut surface);

    assert_eq!(report.locale, None);
    assert_eq!(surface.set(NodeSet::Translatable)[0].text, "");
    assert_eq!(surface.root_lang, None);
    assert_eq!(store.peek("futaba-static-lang").as_deref(), Some("fr"));
}

#[test]
fn cascade_handlers_cycle_in_opposite_directions() {
    let mut page = Page::new(MemoryStore::new(), &PageConfig::default());
    let mut surface = surface();
    page.boot(&mut surface);

    assert_eq!(page.on_cascade_next(&mut surface), Theme::CleanDark);
    assert_eq!(page.on_cascade_prev(&mut surface), Theme::CleanLight);
    assert_eq!(page.on_cascade_prev(&mut surface), Theme::Persona5);
}

#[test]
fn locale_button_without_target_is_ignored() {
    let mut page = Page::new(MemoryStore::new(), &PageConfig::default());
    let mut surface = surface();
    page.boot(&mut surface);

    assert!(!page.on_locale_button(&mut surface, None));
    assert_eq!(page.locale().current(), Some(Locale::Zh));
    assert!(page.on_locale_button(&mut surface, Some("ja")));
    assert_eq!(page.locale().current(), Some(Locale::Ja));
}

#[test]
fn controllers_share_one_store_without_key_collisions() {
    let store = MemoryStore::new();
    let mut page = Page::new(store.clone(), &PageConfig::default());
    let mut surface = surface();
    page.boot(&mut surface);
    page.on_cascade_next(&mut surface);
    page.on_locale_button(&mut surface, Some("en"));

    assert_eq!(store.len(), 2);
    assert_eq!(store.peek("futaba-static-theme").as_deref(), Some("clean-dark"));
    assert_eq!(store.peek("futaba-static-lang").as_deref(), Some("en"));
}

#[test]
fn from_parts_accepts_custom_table() {
    let store = MemoryStore::new();
    let config = PageConfig::default();
    let table = LocaleTable::new().with(Locale::Zh, &[("features.subtitle", "副标题")]);
    let mut page = Page::from_parts(
        ThemeController::new(store.clone(), &config),
        LocaleController::with_table(store, table, &config),
    );
    let mut surface = surface();
    page.boot(&mut surface);
    assert_eq!(surface.set(NodeSet::Translatable)[0].text, "副标题");
}
