//! Pure list operations over fetched products: slice, sort, filter, categories.
//!
//! All functions are deterministic and never touch the caller's data in place.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Field a product list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Price,
    /// `rating.rate`, with a missing rating counted as `0`.
    Rating,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortKey {
    fn value(self, product: &Product) -> f64 {
        match self {
            SortKey::Price => product.price,
            SortKey::Rating => product.rate(),
        }
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        self.value(a).total_cmp(&self.value(b))
    }
}

/// First `limit` products in their original order.
pub fn limited(mut products: Vec<Product>, limit: usize) -> Vec<Product> {
    products.truncate(limit);
    products
}

/// New vector ordered by `key`. Stable: equal keys keep their relative order
/// in both directions.
pub fn sorted(products: &[Product], key: SortKey, order: SortOrder) -> Vec<Product> {
    let mut out = products.to_vec();
    match order {
        SortOrder::Asc => out.sort_by(|a, b| key.compare(a, b)),
        SortOrder::Desc => out.sort_by(|a, b| key.compare(b, a)),
    }
    out
}

/// Distinct categories in order of first appearance.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    let mut seen = HashSet::new();
    products
        .iter()
        .filter(|p| seen.insert(p.category.as_str()))
        .map(|p| p.category.clone())
        .collect()
}

/// Products whose category matches exactly (case-sensitive).
pub fn in_category(products: Vec<Product>, category: &str) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| p.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::ProductId;
    use crate::product::Rating;

    fn priced(id: u64, price: f64) -> Product {
        Product::new(format!("p{id}"), "d", price, "c", "").with_id(ProductId::new(id))
    }

    fn in_cat(id: u64, category: &str) -> Product {
        Product::new(format!("p{id}"), "d", 1.0, category, "").with_id(ProductId::new(id))
    }

    fn ids(products: &[Product]) -> Vec<u64> {
        products.iter().map(|p| p.id.unwrap().get()).collect()
    }

    #[test]
    fn price_asc_keeps_original_order_for_ties() {
        let source = vec![priced(0, 10.0), priced(1, 5.0), priced(2, 5.0)];
        let out = sorted(&source, SortKey::Price, SortOrder::Asc);
        assert_eq!(ids(&out), vec![1, 2, 0]);
        // Source untouched.
        assert_eq!(ids(&source), vec![0, 1, 2]);
    }

    #[test]
    fn price_desc_keeps_original_order_for_ties() {
        let source = vec![priced(0, 5.0), priced(1, 10.0), priced(2, 5.0)];
        let out = sorted(&source, SortKey::Price, SortOrder::Desc);
        assert_eq!(ids(&out), vec![1, 0, 2]);
    }

    #[test]
    fn missing_rating_sorts_as_zero() {
        let source = vec![
            priced(0, 1.0).with_rating(Rating::new(2.5, 3)),
            priced(1, 1.0),
            priced(2, 1.0).with_rating(Rating::new(0.0, 9)),
            priced(3, 1.0).with_rating(Rating::new(1.0, 1)),
        ];
        let out = sorted(&source, SortKey::Rating, SortOrder::Asc);
        // 1 (none => 0) and 2 (0.0) tie and keep source order.
        assert_eq!(ids(&out), vec![1, 2, 3, 0]);
    }

    #[test]
    fn categories_are_distinct_in_first_seen_order() {
        let source = vec![in_cat(0, "a"), in_cat(1, "b"), in_cat(2, "a")];
        assert_eq!(distinct_categories(&source), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn category_filter_is_exact_and_case_sensitive() {
        let source = vec![in_cat(0, "Books"), in_cat(1, "books"), in_cat(2, "books ")];
        assert_eq!(ids(&in_category(source, "books")), vec![1]);
    }

    #[test]
    fn limited_handles_short_lists() {
        let source = vec![priced(0, 1.0), priced(1, 2.0)];
        assert_eq!(ids(&limited(source.clone(), 5)), vec![0, 1]);
        assert_eq!(ids(&limited(source.clone(), 1)), vec![0]);
        assert!(limited(source, 0).is_empty());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn catalog(prices: &[u16]) -> Vec<Product> {
            prices
                .iter()
                .enumerate()
                .map(|(i, p)| priced(i as u64, f64::from(*p) / 4.0))
                .collect()
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: ascending price sort is non-decreasing and stable.
            #[test]
            fn price_asc_is_ordered_and_stable(prices in prop::collection::vec(0u16..50, 0..40)) {
                let out = sorted(&catalog(&prices), SortKey::Price, SortOrder::Asc);
                prop_assert_eq!(out.len(), prices.len());
                for pair in out.windows(2) {
                    prop_assert!(pair[0].price <= pair[1].price);
                    if pair[0].price == pair[1].price {
                        prop_assert!(pair[0].id < pair[1].id);
                    }
                }
            }

            /// Property: descending price sort is non-increasing and stable.
            #[test]
            fn price_desc_is_ordered_and_stable(prices in prop::collection::vec(0u16..50, 0..40)) {
                let out = sorted(&catalog(&prices), SortKey::Price, SortOrder::Desc);
                for pair in out.windows(2) {
                    prop_assert!(pair[0].price >= pair[1].price);
                    if pair[0].price == pair[1].price {
                        prop_assert!(pair[0].id < pair[1].id);
                    }
                }
            }

            /// Property: limiting yields exactly min(n, total) leading elements.
            #[test]
            fn limited_is_a_prefix(prices in prop::collection::vec(0u16..50, 0..40), n in 0usize..60) {
                let source = catalog(&prices);
                let out = limited(source.clone(), n);
                prop_assert_eq!(out.len(), n.min(source.len()));
                prop_assert_eq!(&source[..out.len()], &out[..]);
            }

            /// Property: every category appears once, in first-seen order.
            #[test]
            fn categories_once_in_first_seen_order(cats in prop::collection::vec("[a-d]", 0..30)) {
                let source: Vec<Product> = cats
                    .iter()
                    .enumerate()
                    .map(|(i, c)| in_cat(i as u64, c))
                    .collect();
                let out = distinct_categories(&source);

                let mut expected: Vec<String> = Vec::new();
                for c in &cats {
                    if !expected.contains(c) {
                        expected.push(c.clone());
                    }
                }
                prop_assert_eq!(out, expected);
            }
        }
    }
}
