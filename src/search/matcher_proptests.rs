use super::*;
use crate::catalog::Catalog;
use crate::catalog::Product;
use crate::search::Query;
use proptest::prelude::*;

fn ascii_word_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z ]{3,19}".prop_map(|s| s)
}

proptest! {
    /// name の任意の部分文字列（2文字以上）で必ずその商品が見つかる
    #[test]
    fn prop_name_substring_always_matches(
        name in ascii_word_strategy(),
        start in 0usize..10,
        len in 2usize..8
    ) {
        let chars: Vec<char> = name.chars().collect();
        prop_assume!(start + len <= chars.len());
        let term: String = chars[start..start + len].iter().collect();
        prop_assume!(Query::parse(&term).is_some());

        let product = Product {
            id: "p".to_string(),
            name: name.clone(),
            description: String::new(),
            category: String::new(),
            rating: None,
            url: "#".to_string(),
            icon: String::new(),
            keywords: vec![],
        };
        let catalog = Catalog::for_test(vec![product]);

        let query = Query::parse(&term).unwrap();
        prop_assert_eq!(search(&catalog, &query).len(), 1);
    }

    /// 大文字化したクエリでも結果は変わらない
    #[test]
    fn prop_matching_ignores_query_case(word in ascii_word_strategy()) {
        prop_assume!(Query::parse(&word).is_some());

        let product = Product {
            id: "p".to_string(),
            name: String::new(),
            description: String::new(),
            category: String::new(),
            rating: None,
            url: "#".to_string(),
            icon: String::new(),
            keywords: vec![word.clone()],
        };
        let catalog = Catalog::for_test(vec![product]);

        let lower = Query::parse(&word.to_lowercase()).unwrap();
        let upper = Query::parse(&word.to_uppercase()).unwrap();
        prop_assert_eq!(search(&catalog, &lower).len(), search(&catalog, &upper).len());
    }
}
