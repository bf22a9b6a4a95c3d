use super::*;

#[test]
fn standard_page_has_three_cards_in_order() {
    let page = MemoryPage::standard(&[], &[]);
    let keys: Vec<String> = page
        .nodes(NodeSet::Cards)
        .iter()
        .filter_map(|id| page.attribute(id, "data-theme"))
        .collect();
    assert_eq!(keys, vec!["light", "dark", "p5"]);
    assert!(page.nodes(NodeSet::Translatable).is_empty());
}

#[test]
fn root_classes_add_and_remove() {
    let mut page = MemoryPage::new();
    page.add_root_classes(&["a", "b"]);
    page.remove_root_classes(&["a", "missing"]);
    assert!(!page.has_root_class("a"));
    assert!(page.has_root_class("b"));
}

#[test]
fn clear_root_background_counts_requests() {
    let mut page = MemoryPage::new();
    page.root_background = Some("#000".into());
    page.clear_root_background();
    assert_eq!(page.root_background, None);
    assert_eq!(page.background_clears, 1);
}

#[test]
fn node_mutations_apply_to_the_addressed_node() {
    let mut page = MemoryPage::new();
    let a = page.push(NodeSet::Translatable, MemoryNode::new().text("a"));
    let b = page.push(NodeSet::Translatable, MemoryNode::new().text("b"));
    page.set_text(&b, "B");
    page.toggle_class(&a, "active", true);
    page.set_z_index(&a, 3);
    page.replay_entrance(&a);

    assert_eq!(page.node(a).unwrap().text, "a");
    assert_eq!(page.node(b).unwrap().text, "B");
    assert!(page.has_class(&a, "active"));
    assert!(!page.has_class(&b, "active"));
    assert_eq!(page.node(a).unwrap().z_index, Some(3));
    assert_eq!(page.node(a).unwrap().replays, 1);

    page.toggle_class(&a, "active", false);
    assert!(!page.has_class(&a, "active"));
}

#[test]
fn out_of_range_node_is_ignored() {
    let mut page = MemoryPage::new();
    let ghost = NodeId { set: NodeSet::Cards, index: 7 };
    page.set_text(&ghost, "x");
    page.toggle_class(&ghost, "active", true);
    assert!(!page.has_class(&ghost, "active"));
    assert_eq!(page.attribute(&ghost, "data-theme"), None);
}

#[test]
fn with_config_tags_nodes_with_configured_attributes() {
    let config = PageConfig {
        card_key_attr: "data-card".into(),
        translation_key_attr: "data-t".into(),
        locale_switch_attr: "data-locale".into(),
        ..PageConfig::default()
    };
    let page = MemoryPage::with_config(&config, &[("tech.title", "x")], &["en"]);

    assert_eq!(page.set(NodeSet::Cards)[2].attributes.get("data-card").map(String::as_str), Some("p5"));
    assert!(page.set(NodeSet::Cards)[2].attributes.get("data-theme").is_none());
    assert_eq!(page.set(NodeSet::Translatable)[0].attributes.get("data-t").map(String::as_str), Some("tech.title"));
    assert_eq!(page.set(NodeSet::LocaleSwitches)[0].attributes.get("data-locale").map(String::as_str), Some("en"));
    assert!(page.card("p5").is_some());
}

#[test]
fn card_lookup_by_key() {
    let page = MemoryPage::standard(&[], &[]);
    assert!(page.card("dark").is_some());
    assert!(page.card("sepia").is_none());
}
