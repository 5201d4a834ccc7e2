#![allow(clippy::float_cmp)]

use super::*;

fn make_item(name: &str, span: Span) -> NewGridItem {
    NewGridItem {
        name: name.to_owned(),
        col_start: span.col_start,
        col_end: span.col_end,
        row_start: span.row_start,
        row_end: span.row_end,
        color: "#123456".to_owned(),
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_store_has_demo_layout() {
    let store = GridStore::new();
    assert_eq!(store.config(), GridConfig { rows: 5, columns: 5, gap: 10.0 });
    let names: Vec<&str> = store.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Header", "Sidebar", "Content", "Footer"]);
    assert!(store.selected_id().is_none());
}

#[test]
fn new_store_header_span_and_color() {
    let store = GridStore::new();
    let header = &store.items()[0];
    assert_eq!(header.span(), Span::new(1, 6, 1, 2));
    assert_eq!(header.color, "#ef4444");
}

#[test]
fn new_store_ids_are_unique() {
    let store = GridStore::new();
    let mut ids: Vec<ItemId> = store.items().iter().map(|i| i.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
}

#[test]
fn empty_store_defaults() {
    let store = GridStore::empty();
    assert_eq!(store.rows(), 5);
    assert_eq!(store.columns(), 5);
    assert_eq!(store.gap(), 10.0);
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn default_is_demo_layout() {
    assert_eq!(GridStore::default().len(), 4);
}

// =============================================================
// Setters
// =============================================================

#[test]
fn setters_replace_values() {
    let mut store = GridStore::empty();
    store.set_rows(8);
    store.set_columns(12);
    store.set_gap(2.5);
    assert_eq!(store.config(), GridConfig { rows: 8, columns: 12, gap: 2.5 });
}

#[test]
fn setters_do_not_touch_items() {
    let mut store = GridStore::new();
    let before = store.items().to_vec();
    store.set_columns(2);
    assert_eq!(store.items(), before.as_slice());
}

// =============================================================
// add_item / next_item
// =============================================================

#[test]
fn add_item_appends_with_fresh_id() {
    let mut store = GridStore::new();
    let id = store.add_item(make_item("Extra", Span::new(2, 3, 2, 3)));
    assert_eq!(store.len(), 5);
    let last = &store.items()[4];
    assert_eq!(last.id, id);
    assert_eq!(last.name, "Extra");
    assert!(store.items()[..4].iter().all(|i| i.id != id));
}

#[test]
fn add_item_leaves_selection() {
    let mut store = GridStore::new();
    let first = store.items()[0].id;
    store.select_item(Some(first));
    store.add_item(make_item("Extra", Span::new(1, 2, 1, 2)));
    assert_eq!(store.selected_id(), Some(first));
}

#[test]
fn next_item_after_four_is_item_5() {
    let mut store = GridStore::new();
    let next = store.next_item();
    assert_eq!(next.name, "Item 5");
    assert_eq!((next.col_start, next.col_end, next.row_start, next.row_end), (1, 2, 1, 2));
    assert!(is_hex_color(&next.color), "bad colour {}", next.color);

    store.add_item(next);
    assert_eq!(store.len(), 5);
    assert_eq!(store.items()[4].name, "Item 5");
}

#[test]
fn next_item_on_empty_store_is_item_1() {
    assert_eq!(GridStore::empty().next_item().name, "Item 1");
}

#[test]
fn random_color_is_six_hex_digits() {
    let mut rng = rand::rng();
    for _ in 0..200 {
        let c = random_color(&mut rng);
        assert!(is_hex_color(&c), "bad colour {c}");
        assert_eq!(c, c.to_lowercase());
    }
}

// =============================================================
// update_item
// =============================================================

#[test]
fn update_item_merges_present_fields() {
    let mut store = GridStore::new();
    let id = store.items()[1].id;
    let partial = PartialGridItem { name: Some("Nav".into()), col_end: Some(3), ..Default::default() };
    assert!(store.update_item(&id, &partial));
    let item = store.get(&id).cloned().unwrap();
    assert_eq!(item.name, "Nav");
    assert_eq!(item.span(), Span::new(1, 3, 2, 5));
    assert_eq!(item.color, "#3b82f6");
}

#[test]
fn update_item_unknown_id_is_noop() {
    let mut store = GridStore::new();
    let before = store.items().to_vec();
    let partial = PartialGridItem { name: Some("X".into()), ..Default::default() };
    assert!(!store.update_item(&Uuid::new_v4(), &partial));
    assert_eq!(store.items(), before.as_slice());
}

#[test]
fn update_item_does_not_validate_spans() {
    let mut store = GridStore::new();
    let id = store.items()[0].id;
    let partial = PartialGridItem { col_start: Some(9), col_end: Some(-2), ..Default::default() };
    assert!(store.update_item(&id, &partial));
    let item = store.get(&id).map(GridItem::span);
    assert_eq!(item, Some(Span::new(9, -2, 1, 2)));
}

#[test]
fn update_item_clamped_normalises_span() {
    let mut store = GridStore::new();
    let id = store.items()[0].id;
    let partial = PartialGridItem { col_start: Some(9), col_end: Some(-2), row_end: Some(40), ..Default::default() };
    assert!(store.update_item_clamped(&id, &partial));
    assert_eq!(store.get(&id).map(GridItem::span), Some(Span::new(5, 6, 1, 6)));
}

#[test]
fn update_item_clamped_unknown_id_is_noop() {
    let mut store = GridStore::new();
    assert!(!store.update_item_clamped(&Uuid::new_v4(), &PartialGridItem::default()));
}

#[test]
fn partial_from_span_sets_only_span_fields() {
    let partial = PartialGridItem::from(Span::new(2, 4, 3, 5));
    assert_eq!(partial.col_start, Some(2));
    assert_eq!(partial.col_end, Some(4));
    assert_eq!(partial.row_start, Some(3));
    assert_eq!(partial.row_end, Some(5));
    assert!(partial.name.is_none());
    assert!(partial.color.is_none());
}

#[test]
fn partial_serializes_only_present_fields() {
    let partial = PartialGridItem { color: Some("#fff".into()), ..Default::default() };
    let json = serde_json::to_string(&partial).unwrap();
    assert_eq!(json, r##"{"color":"#fff"}"##);
}

// =============================================================
// remove_item / select_item
// =============================================================

#[test]
fn remove_selected_item_clears_selection() {
    let mut store = GridStore::new();
    let id = store.items()[2].id;
    store.select_item(Some(id));
    let removed = store.remove_item(&id);
    assert_eq!(removed.map(|i| i.name), Some("Content".to_owned()));
    assert!(store.selected_id().is_none());
    assert_eq!(store.len(), 3);
}

#[test]
fn remove_unselected_item_keeps_selection() {
    let mut store = GridStore::new();
    let selected = store.items()[0].id;
    let other = store.items()[3].id;
    store.select_item(Some(selected));
    assert!(store.remove_item(&other).is_some());
    assert_eq!(store.selected_id(), Some(selected));
}

#[test]
fn remove_unknown_id_is_noop() {
    let mut store = GridStore::new();
    assert!(store.remove_item(&Uuid::new_v4()).is_none());
    assert_eq!(store.len(), 4);
}

#[test]
fn remove_preserves_order_of_rest() {
    let mut store = GridStore::new();
    let id = store.items()[1].id;
    store.remove_item(&id);
    let names: Vec<&str> = store.items().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Header", "Content", "Footer"]);
}

#[test]
fn select_item_sets_and_clears() {
    let mut store = GridStore::new();
    let id = store.items()[1].id;
    store.select_item(Some(id));
    assert_eq!(store.selected_item().map(|i| i.name.as_str()), Some("Sidebar"));
    store.select_item(None);
    assert!(store.selected_item().is_none());
}

// =============================================================
// reset
// =============================================================

#[test]
fn reset_yields_empty_default_grid() {
    let mut store = GridStore::new();
    store.set_rows(9);
    store.set_columns(3);
    store.set_gap(0.0);
    let id = store.items()[0].id;
    store.select_item(Some(id));

    store.reset();

    assert_eq!(store.config(), GridConfig { rows: 5, columns: 5, gap: 10.0 });
    assert!(store.is_empty());
    assert!(store.selected_id().is_none());
}

#[test]
fn reset_on_empty_store_is_stable() {
    let mut store = GridStore::empty();
    store.reset();
    assert_eq!(store.config(), GridConfig::default());
    assert!(store.is_empty());
}

// =============================================================
// Span
// =============================================================

#[test]
fn span_sizes() {
    let span = Span::new(2, 5, 1, 3);
    assert_eq!(span.col_span(), 3);
    assert_eq!(span.row_span(), 2);
}

#[test]
fn span_clamped_keeps_valid_span() {
    let config = GridConfig::default();
    let span = Span::new(2, 4, 1, 6);
    assert_eq!(span.clamped(&config), span);
}

#[test]
fn span_clamped_fixes_degenerate_span() {
    let config = GridConfig::default();
    assert_eq!(Span::new(3, 3, 4, 2).clamped(&config), Span::new(3, 4, 4, 5));
}

#[test]
fn span_clamped_with_zero_columns() {
    let config = GridConfig { rows: 1, columns: 0, gap: 0.0 };
    let span = Span::new(0, 0, 1, 2).clamped(&config);
    assert_eq!(span.col_start, 1);
    assert_eq!(span.col_end, 2);
}

#[test]
fn grid_config_last_lines() {
    let config = GridConfig { rows: 3, columns: 7, gap: 0.0 };
    assert_eq!(config.last_col_line(), 8);
    assert_eq!(config.last_row_line(), 4);
}

// =============================================================
// Layout conversion
// =============================================================

#[test]
fn layout_round_trip_keeps_items_and_config() {
    let mut store = GridStore::new();
    store.set_gap(4.0);
    let layout = store.layout();
    let rebuilt = GridStore::from_layout(layout.clone());
    assert_eq!(rebuilt.config(), store.config());
    assert_eq!(rebuilt.layout(), layout);
    assert!(rebuilt.selected_id().is_none());
}

#[test]
fn from_layout_assigns_new_ids() {
    let store = GridStore::new();
    let rebuilt = GridStore::from_layout(store.layout());
    for (a, b) in store.items().iter().zip(rebuilt.items()) {
        assert_ne!(a.id, b.id);
    }
}

#[test]
fn item_class_name() {
    let mut store = GridStore::empty();
    let id = store.add_item(make_item("Main  Area", Span::new(1, 2, 1, 2)));
    assert_eq!(store.get(&id).map(GridItem::class_name), Some("main-area".to_owned()));
}
