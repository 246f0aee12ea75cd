use super::*;
use crate::view::Segment;

#[test]
fn highlighted_segments_are_emphasized() {
    let segments = vec![
        Segment {
            text: "Pure ".to_string(),
            highlighted: false,
        },
        Segment {
            text: "Moringa".to_string(),
            highlighted: true,
        },
    ];
    let formatted = format_segments(&segments);
    // ハイライト区間のみ装飾される
    assert!(formatted.starts_with("Pure "));
    assert!(formatted.contains("Moringa"));
    assert_ne!(formatted, "Pure Moringa");
}

#[test]
fn plain_segments_pass_through_unchanged() {
    let segments = vec![Segment {
        text: "GlucoTrust".to_string(),
        highlighted: false,
    }];
    assert_eq!(format_segments(&segments), "GlucoTrust");
}
