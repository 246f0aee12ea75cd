use super::*;
use crate::catalog::Catalog;
use crate::catalog::Product;
use crate::search::Query;

fn make_product(id: &str, name: &str, keywords: &[&str]) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} description"),
        category: "Health & Supplements".to_string(),
        rating: Some(4.5),
        url: format!("reviews/{id}"),
        icon: "fas fa-leaf".to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

fn query(raw: &str) -> Query {
    Query::parse(raw).expect("query passes the length gate")
}

#[test]
fn matches_by_name_substring() {
    let catalog = Catalog::for_test(vec![
        make_product("a", "Pure Moringa Supplement", &[]),
        make_product("b", "GlucoTrust", &[]),
    ]);
    let result = search(&catalog, &query("moringa"));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "a");
}

#[test]
fn matches_by_description_substring() {
    let mut product = make_product("a", "Alpha", &[]);
    product.description = "mitochondrial support supplement".to_string();
    let catalog = Catalog::for_test(vec![product, make_product("b", "Beta", &[])]);

    let result = search(&catalog, &query("mitochondrial"));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "a");
}

#[test]
fn matches_by_category_substring() {
    let catalog = Catalog::for_test(vec![make_product("a", "Alpha", &[])]);
    let result = search(&catalog, &query("supplements"));
    assert_eq!(result.len(), 1);
}

#[test]
fn matches_by_any_keyword() {
    let catalog = Catalog::for_test(vec![
        make_product("a", "Alpha", &["moringa", "organic"]),
        make_product("b", "Beta", &["sleep"]),
    ]);
    let result = search(&catalog, &query("organic"));
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "a");
}

#[test]
fn matching_is_case_insensitive() {
    let catalog = Catalog::for_test(vec![make_product("a", "Pure Moringa", &[])]);
    assert_eq!(search(&catalog, &query("MORINGA")).len(), 1);
    assert_eq!(search(&catalog, &query("MoRiN")).len(), 1);
}

#[test]
fn result_preserves_catalog_order() {
    let catalog = Catalog::for_test(vec![
        make_product("z-last", "Zeta Moringa", &[]),
        make_product("a-first", "Alpha Moringa", &[]),
        make_product("m-mid", "Mid Moringa", &[]),
    ]);
    let result = search(&catalog, &query("moringa"));
    let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["z-last", "a-first", "m-mid"]);
}

#[test]
fn no_match_returns_empty() {
    let catalog = Catalog::for_test(vec![make_product("a", "Alpha", &["moringa"])]);
    assert!(search(&catalog, &query("xyz123")).is_empty());
}

#[test]
fn empty_catalog_returns_empty() {
    let catalog = Catalog::empty();
    assert!(search(&catalog, &query("moringa")).is_empty());
}

#[test]
fn absent_rating_does_not_affect_matching() {
    let mut product = make_product("a", "Spirulina Tablets", &["spirulina"]);
    product.rating = None;
    product.url = "#".to_string();
    let catalog = Catalog::for_test(vec![product]);

    let result = search(&catalog, &query("spirulina"));
    assert_eq!(result.len(), 1);
}

#[test]
fn substring_matches_inside_words() {
    // 単語境界は考慮しない（"go" は "dragon" にもマッチする）
    let catalog = Catalog::for_test(vec![make_product("a", "Dragon Fruit Extract", &[])]);
    assert_eq!(search(&catalog, &query("go")).len(), 1);
}
