use super::*;
use crate::strings::KEYS;

#[test]
fn locale_default_is_zh() {
    assert_eq!(Locale::default(), Locale::Zh);
}

#[test]
fn locale_names_round_trip() {
    for locale in Locale::ALL {
        assert_eq!(Locale::from_name(locale.name()), Some(locale));
    }
    assert_eq!(Locale::from_name("fr"), None);
    assert_eq!(Locale::from_name("ZH"), None);
}

#[test]
fn locale_language_tags() {
    assert_eq!(Locale::Zh.language_tag(), "zh-CN");
    assert_eq!(Locale::En.language_tag(), "en");
    assert_eq!(Locale::Ja.language_tag(), "ja");
}

#[test]
fn builtin_table_covers_every_key_in_every_locale() {
    let table = LocaleTable::builtin();
    for locale in Locale::ALL {
        let dict = table.dictionary(locale).unwrap();
        assert_eq!(dict.len(), KEYS.len(), "{locale:?} has stray or duplicate keys");
        for key in KEYS {
            assert!(dict.contains_key(key), "{locale:?} missing {key}");
        }
    }
}

#[test]
fn builtin_lookup_returns_locale_specific_text() {
    let table = LocaleTable::builtin();
    assert_eq!(table.lookup(Locale::En, "feature.accept.title"), Some("Auto Accept"));
    assert_eq!(table.lookup(Locale::Zh, "feature.accept.title"), Some("自动接受对局"));
    assert_eq!(table.lookup(Locale::Ja, "feature.accept.title"), Some("自動マッチ承認"));
}

#[test]
fn lookup_missing_key_is_none() {
    let table = LocaleTable::builtin();
    assert_eq!(table.lookup(Locale::En, "nav.home"), None);
}

#[test]
fn custom_table_only_supports_registered_locales() {
    let table = LocaleTable::new().with(Locale::En, &[("a", "A")]);
    assert!(table.supports(Locale::En));
    assert!(!table.supports(Locale::Ja));
    assert_eq!(table.lookup(Locale::Ja, "a"), None);
    assert_eq!(table.lookup(Locale::En, "a"), Some("A"));
}

#[test]
fn locale_serde_uses_short_names() {
    assert_eq!(serde_json::to_string(&Locale::Ja).unwrap(), "\"ja\"");
    let parsed: Locale = serde_json::from_str("\"en\"").unwrap();
    assert_eq!(parsed, Locale::En);
}
