use super::*;
use proptest::prelude::*;

proptest! {
    /// [0, 5] のどの評価値でもグリフ総数は5
    #[test]
    fn prop_star_counts_sum_to_five(rating in 0.0f64..=5.0) {
        let stars = StarLine::from_rating(rating);
        prop_assert_eq!(stars.full + usize::from(stars.half) + stars.empty, STAR_COUNT);
    }

    /// グリフ列の文字数も常に5
    #[test]
    fn prop_glyph_string_has_five_chars(rating in 0.0f64..=5.0) {
        let stars = StarLine::from_rating(rating);
        prop_assert_eq!(stars.glyphs().chars().count(), STAR_COUNT);
    }

    /// 満星数は floor(rating) と一致する
    #[test]
    fn prop_full_stars_equal_floor(rating in 0.0f64..=5.0) {
        let stars = StarLine::from_rating(rating);
        prop_assert_eq!(stars.full, rating.floor() as usize);
    }
}
