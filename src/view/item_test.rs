use super::*;
use crate::catalog::Product;

fn make_product(id: &str, name: &str, rating: Option<f64>, url: &str) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} for daily wellness"),
        category: "Health & Supplements".to_string(),
        rating,
        url: url.to_string(),
        icon: "fas fa-leaf".to_string(),
        keywords: vec![],
    }
}

#[test]
fn item_carries_navigation_info() {
    let product = make_product("puremoringa", "Pure Moringa", Some(4.9), "reviews/puremoringa");
    let item = ResultItem::build(&product, "moringa");
    assert_eq!(item.url, "reviews/puremoringa");
    assert!(!item.coming_soon);
}

#[test]
fn coming_soon_item_has_no_stars() {
    let product = make_product("spirulina", "Spirulina Tablets", None, "#");
    let item = ResultItem::build(&product, "spirulina");
    assert!(item.coming_soon);
    assert!(item.stars.is_none());
    assert!(item.rating.is_none());
}

#[test]
fn rated_item_has_star_breakdown() {
    let product = make_product("a", "Alpha", Some(4.8), "reviews/a");
    let item = ResultItem::build(&product, "alpha");
    let stars = item.stars.unwrap();
    assert_eq!(stars.full, 4);
    assert!(stars.half);
    assert_eq!(stars.empty, 0);
}

#[test]
fn name_and_description_are_highlighted() {
    let product = make_product("a", "Pure Moringa", Some(4.5), "reviews/a");
    let item = ResultItem::build(&product, "moringa");
    assert!(item.name_segments.iter().any(|s| s.highlighted));
    assert!(item.description_segments.iter().any(|s| s.highlighted));
}

#[test]
fn build_items_preserves_input_order() {
    let first = make_product("first", "Moringa One", Some(4.0), "reviews/first");
    let second = make_product("second", "Moringa Two", Some(4.0), "reviews/second");
    let refs: Vec<&Product> = vec![&first, &second];

    let items = build_items(&refs, "moringa");
    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second"]);
}

#[test]
fn unknown_icon_falls_back_to_default_glyph() {
    assert_eq!(icon_glyph("fas fa-unknown"), '✦');
    assert_ne!(icon_glyph("fas fa-leaf"), '✦');
}
