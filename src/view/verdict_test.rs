use super::*;
use crate::catalog::Product;

fn make_product(rating: Option<f64>) -> Product {
    Product {
        id: "puremoringa".to_string(),
        name: "Pure Moringa Supplement".to_string(),
        description: "Organic moringa leaf supplement".to_string(),
        category: "Health & Supplements".to_string(),
        rating,
        url: "reviews/puremoringa".to_string(),
        icon: "fas fa-leaf".to_string(),
        keywords: vec![],
    }
}

#[test]
fn verdict_thresholds() {
    assert_eq!(verdict_label(5.0), "Excellent");
    assert_eq!(verdict_label(4.5), "Excellent");
    assert_eq!(verdict_label(4.4), "Very Good");
    assert_eq!(verdict_label(4.0), "Very Good");
    assert_eq!(verdict_label(3.9), "Good");
    assert_eq!(verdict_label(3.5), "Good");
    assert_eq!(verdict_label(3.4), "Average");
    assert_eq!(verdict_label(3.0), "Average");
    assert_eq!(verdict_label(2.9), "Below Average");
}

#[test]
fn header_for_rated_product() {
    let header = ReviewHeader::build(&make_product(Some(4.9)), "August 2026".to_string());
    assert_eq!(header.title, "Pure Moringa Supplement Review");
    assert_eq!(
        header.breadcrumb,
        "Home > Health & Supplements > Pure Moringa Supplement"
    );
    assert_eq!(header.verdict, Some("Excellent"));
    assert_eq!(header.updated, "August 2026");
    assert!(header.stars.is_some());
}

#[test]
fn header_for_unrated_product_omits_rating_fields() {
    let header = ReviewHeader::build(&make_product(None), "August 2026".to_string());
    assert!(header.rating.is_none());
    assert!(header.stars.is_none());
    assert!(header.verdict.is_none());
}
