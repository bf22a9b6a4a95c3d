use super::*;
use crate::prefs::MemoryStore;
use crate::surface::{MemoryNode, MemoryPage};

// =============================================================
// Helpers
// =============================================================

fn controller(store: &MemoryStore) -> LocaleController<MemoryStore> {
    LocaleController::new(store.clone(), &PageConfig::default())
}

fn page() -> MemoryPage {
    MemoryPage::standard(
        &[
            ("feature.accept.title", "自动接受对局"),
            ("tech.subtitle", "现代技术栈，原生性能"),
            ("nav.unknown", "keep me"),
        ],
        &["zh", "en", "ja"],
    )
}

fn texts(page: &MemoryPage) -> Vec<String> {
    page.set(NodeSet::Translatable).iter().map(|n| n.text.clone()).collect()
}

fn active_switches(page: &MemoryPage) -> Vec<String> {
    page.set(NodeSet::LocaleSwitches)
        .iter()
        .filter(|n| n.has_class("active"))
        .filter_map(|n| n.attributes.get("data-lang").cloned())
        .collect()
}

// =============================================================
// persisted_locale
// =============================================================

#[test]
fn persisted_locale_defaults_to_zh() {
    assert_eq!(controller(&MemoryStore::new()).persisted_locale(), "zh");
}

#[test]
fn persisted_locale_defaults_when_storage_unavailable() {
    let store = MemoryStore::unavailable().with("futaba-static-lang", "ja");
    assert_eq!(controller(&store).persisted_locale(), "zh");
}

#[test]
fn persisted_locale_treats_empty_value_as_unset() {
    let store = MemoryStore::new().with("futaba-static-lang", "");
    assert_eq!(controller(&store).persisted_locale(), "zh");
}

#[test]
fn persisted_locale_returns_stored_name() {
    let store = MemoryStore::new().with("futaba-static-lang", "en");
    assert_eq!(controller(&store).persisted_locale(), "en");
}

// =============================================================
// apply_locale
// =============================================================

#[test]
fn apply_locale_replaces_known_keys_and_keeps_others() {
    let mut ctl = controller(&MemoryStore::new());
    let mut page = page();
    assert!(ctl.apply_locale(&mut page, "en"));
    assert_eq!(
        texts(&page),
        vec!["Auto Accept", "Modern stack, native performance", "keep me"]
    );
}

#[test]
fn apply_locale_sets_root_language_tag() {
    let mut ctl = controller(&MemoryStore::new());
    let mut page = page();
    for (name, tag) in [("zh", "zh-CN"), ("en", "en"), ("ja", "ja")] {
        ctl.apply_locale(&mut page, name);
        assert_eq!(page.root_lang.as_deref(), Some(tag));
    }
}

#[test]
fn apply_locale_marks_only_matching_switch_active() {
    let mut ctl = controller(&MemoryStore::new());
    let mut page = page();
    ctl.apply_locale(&mut page, "ja");
    assert_eq!(active_switches(&page), vec!["ja"]);
    ctl.apply_locale(&mut page, "en");
    assert_eq!(active_switches(&page), vec!["en"]);
}

#[test]
fn apply_locale_persists_and_updates_current() {
    let store = MemoryStore::new();
    let mut ctl = controller(&store);
    let mut page = page();
    ctl.apply_locale(&mut page, "ja");
    assert_eq!(ctl.current(), Some(Locale::Ja));
    assert_eq!(store.peek("futaba-static-lang").as_deref(), Some("ja"));
    assert_eq!(ctl.persisted_locale(), "ja");
}

#[test]
fn apply_unsupported_locale_is_a_full_noop() {
    let store = MemoryStore::new();
    let mut ctl = controller(&store);
    let mut page = page();
    ctl.apply_locale(&mut page, "en");
    let before = texts(&page);

    assert!(!ctl.apply_locale(&mut page, "fr"));

    assert_eq!(texts(&page), before);
    assert_eq!(ctl.current(), Some(Locale::En));
    assert_eq!(page.root_lang.as_deref(), Some("en"));
    assert_eq!(active_switches(&page), vec!["en"]);
    assert_eq!(store.peek("futaba-static-lang").as_deref(), Some("en"));
}

#[test]
fn apply_locale_missing_from_table_is_a_noop() {
    let table = LocaleTable::new().with(Locale::En, &[("tech.subtitle", "Stack")]);
    let store = MemoryStore::new();
    let mut ctl = LocaleController::with_table(store.clone(), table, &PageConfig::default());
    let mut page = page();

    assert!(!ctl.apply_locale(&mut page, "ja"));
    assert_eq!(page.root_lang, None);
    assert!(store.is_empty());

    assert!(ctl.apply_locale(&mut page, "en"));
    assert_eq!(texts(&page), vec!["自动接受对局", "Stack", "keep me"]);
}

#[test]
fn apply_locale_skips_elements_without_key_attribute() {
    let mut ctl = controller(&MemoryStore::new());
    let mut page = page();
    let bare = page.push(NodeSet::Translatable, MemoryNode::new().text("raw"));
    ctl.apply_locale(&mut page, "en");
    assert_eq!(page.node(bare).unwrap().text, "raw");
}

#[test]
fn apply_locale_survives_unavailable_storage() {
    let mut ctl = controller(&MemoryStore::unavailable());
    let mut page = page();
    assert!(ctl.apply_locale(&mut page, "en"));
    assert_eq!(ctl.current(), Some(Locale::En));
    assert_eq!(ctl.persisted_locale(), "zh");
}
