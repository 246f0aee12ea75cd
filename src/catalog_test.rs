use super::*;
use std::io::Write;

fn make_product(id: &str, rating: Option<f64>) -> Product {
    Product {
        id: id.to_string(),
        name: format!("{id} name"),
        description: format!("{id} description"),
        category: "Health & Supplements".to_string(),
        rating,
        url: format!("reviews/{id}"),
        icon: "fas fa-leaf".to_string(),
        keywords: vec![id.to_string()],
    }
}

#[test]
fn load_default_catalog() {
    let catalog = Catalog::load_default().unwrap();
    assert!(!catalog.is_empty());
    assert!(catalog.find("puremoringa").is_some());
}

#[test]
fn default_catalog_has_coming_soon_entries() {
    let catalog = Catalog::load_default().unwrap();
    let spirulina = catalog.find("spirulina").unwrap();
    assert!(spirulina.is_coming_soon());
    assert!(spirulina.rating.is_none());
}

#[test]
fn rating_out_of_range_is_rejected() {
    let json = r#"{"products": [
        {"id": "x", "name": "X", "description": "d", "category": "c",
         "rating": 5.1, "url": "reviews/x", "icon": "i", "keywords": []}
    ]}"#;
    let err = Catalog::from_json(json).unwrap_err();
    assert!(matches!(err, RabError::InvalidCatalog(_)));
}

#[test]
fn negative_rating_is_rejected() {
    let json = r#"{"products": [
        {"id": "x", "name": "X", "description": "d", "category": "c",
         "rating": -0.5, "url": "reviews/x", "icon": "i", "keywords": []}
    ]}"#;
    let err = Catalog::from_json(json).unwrap_err();
    assert!(matches!(err, RabError::InvalidCatalog(_)));
}

#[test]
fn duplicate_id_is_rejected() {
    let json = r##"{"products": [
        {"id": "x", "name": "X", "description": "d", "category": "c", "url": "#", "icon": "i"},
        {"id": "x", "name": "Y", "description": "d", "category": "c", "url": "#", "icon": "i"}
    ]}"##;
    let err = Catalog::from_json(json).unwrap_err();
    assert!(matches!(err, RabError::InvalidCatalog(_)));
}

#[test]
fn missing_rating_and_keywords_are_accepted() {
    let json = r##"{"products": [
        {"id": "x", "name": "X", "description": "d", "category": "c", "url": "#", "icon": "i"}
    ]}"##;
    let catalog = Catalog::from_json(json).unwrap();
    let product = catalog.find("x").unwrap();
    assert!(product.rating.is_none());
    assert!(product.keywords.is_empty());
}

#[test]
fn load_from_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"{{"products": [{{"id": "x", "name": "X", "description": "d",
            "category": "c", "rating": 4.0, "url": "reviews/x", "icon": "i",
            "keywords": ["x"]}}]}}"#
    )
    .unwrap();

    let catalog = Catalog::load_from(&path).unwrap();
    assert_eq!(catalog.len(), 1);
}

#[test]
fn load_from_missing_file_is_io_error() {
    let err = Catalog::load_from(std::path::Path::new("/nonexistent/catalog.json")).unwrap_err();
    assert!(matches!(err, RabError::Io(_)));
}

#[test]
fn find_unknown_id_returns_none() {
    let catalog = Catalog::for_test(vec![make_product("a", Some(4.0))]);
    assert!(catalog.find("b").is_none());
}

#[test]
fn related_returns_same_category_excluding_self() {
    let mut other = make_product("b", Some(4.0));
    other.category = "Other".to_string();
    let catalog = Catalog::for_test(vec![
        make_product("a", Some(4.0)),
        other,
        make_product("c", None),
    ]);

    let a = catalog.find("a").unwrap();
    let related = catalog.related(a);
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].id, "c");
}
