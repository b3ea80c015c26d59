//! Search, filter, and sort over catalog slices.
//!
//! All filters are conjunctive; omitted filters pass everything. These are
//! O(n) scans over lists of a few dozen records, so there is no indexing.

use core::cmp::Ordering;

use crate::product::{Product, StockLevel};

/// Sort key for [`sort`]. Parsed from the caller-facing string form; an
/// unrecognized key sorts nothing (plain copy).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Price,
    Stock,
    Category,
}

impl SortKey {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Self::Name),
            "price" => Some(Self::Price),
            "stock" => Some(Self::Stock),
            "category" => Some(Self::Category),
            _ => None,
        }
    }
}

/// Case-insensitive substring match on name/description AND exact category
/// match AND stock-level band, all conjunctive.
pub fn search<'a>(
    products: &'a [Product],
    query: &str,
    category: Option<&str>,
    level: Option<StockLevel>,
) -> Vec<&'a Product> {
    let needle = query.to_lowercase();

    products
        .iter()
        .filter(|p| {
            let matches_query = needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle);
            let matches_category = category.is_none_or(|c| p.category == c);
            let matches_level = level.is_none_or(|l| p.stock_level() == l);
            matches_query && matches_category && matches_level
        })
        .collect()
}

/// Returns a new ordered copy; the input slice is untouched.
///
/// Name/category compare case-insensitively with a raw-byte tiebreak; price
/// ascending; stock descending. `None` (unrecognized key) is a plain copy.
pub fn sort(products: &[Product], key: Option<SortKey>) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match key {
        Some(SortKey::Name) => sorted.sort_by(|a, b| caseless_cmp(&a.name, &b.name)),
        Some(SortKey::Price) => sorted.sort_by_key(|p| p.price),
        Some(SortKey::Stock) => sorted.sort_by(|a, b| b.stock.cmp(&a.stock)),
        Some(SortKey::Category) => sorted.sort_by(|a, b| caseless_cmp(&a.category, &b.category)),
        None => {}
    }
    sorted
}

fn caseless_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use martpos_core::ProductId;

    fn product(id: u32, name: &str, category: &str, price: u64, stock: i64, min_stock: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            category: category.to_string(),
            price,
            stock,
            min_stock,
            description: format!("{name} description"),
            supplier: String::new(),
            barcode: None,
            last_stock_in: NaiveDate::from_ymd_opt(2024, 11, 10).unwrap(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Cola", "Beverages", 1500, 45, 10),
            product(2, "Cider", "Beverages", 1500, 32, 10),
            product(3, "Chocopie", "Snacks", 2000, 8, 15),
            product(5, "Tissue", "Household", 3000, 2, 5),
            product(6, "Gum", "Snacks", 800, 50, 20),
        ]
    }

    #[test]
    fn empty_filters_pass_everything() {
        let catalog = catalog();
        let hits = search(&catalog, "", None, None);
        assert_eq!(hits.len(), catalog.len());
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let catalog = catalog();
        let hits = search(&catalog, "cOLa", None, None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Cola");
    }

    #[test]
    fn query_matches_description_too() {
        let catalog = catalog();
        let hits = search(&catalog, "tissue description", None, None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Tissue");
    }

    #[test]
    fn filters_are_conjunctive() {
        let catalog = catalog();
        let hits = search(&catalog, "cho", Some("Snacks"), None);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Chocopie");

        // Same query against the wrong category matches nothing.
        assert!(search(&catalog, "cho", Some("Beverages"), None).is_empty());

        // Category and band combine too: Gum is Snacks but well stocked.
        let hits = search(&catalog, "", Some("Snacks"), Some(StockLevel::Low));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Chocopie");
    }

    #[test]
    fn low_band_returns_exactly_at_or_below_threshold() {
        let catalog = catalog();
        let hits = search(&catalog, "", None, Some(StockLevel::Low));
        let names: Vec<&str> = hits.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Chocopie", "Tissue"]);
    }

    #[test]
    fn sort_by_name_is_caseless() {
        let sorted = sort(&catalog(), Some(SortKey::Name));
        let names: Vec<&str> = sorted.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Chocopie", "Cider", "Cola", "Gum", "Tissue"]);
    }

    #[test]
    fn sort_by_price_ascends_and_stock_descends() {
        let by_price = sort(&catalog(), Some(SortKey::Price));
        assert_eq!(by_price.first().unwrap().name, "Gum");
        assert_eq!(by_price.last().unwrap().name, "Tissue");

        let by_stock = sort(&catalog(), Some(SortKey::Stock));
        assert_eq!(by_stock.first().unwrap().name, "Gum");
        assert_eq!(by_stock.last().unwrap().name, "Tissue");
    }

    #[test]
    fn unrecognized_key_is_a_plain_copy() {
        let catalog = catalog();
        let sorted = sort(&catalog, SortKey::parse("flavor"));
        assert_eq!(sorted, catalog);
    }

    #[test]
    fn sort_leaves_the_input_untouched() {
        let catalog = catalog();
        let before = catalog.clone();
        let _ = sort(&catalog, Some(SortKey::Name));
        assert_eq!(catalog, before);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_row() -> impl Strategy<Value = (String, &'static str, u64, i64, i64)> {
            (
                "[A-Za-z][A-Za-z0-9 ]{0,19}",
                prop_oneof![Just("Beverages"), Just("Snacks"), Just("Household")],
                0u64..100_000,
                0i64..200,
                0i64..50,
            )
        }

        fn arb_catalog() -> impl Strategy<Value = Vec<Product>> {
            proptest::collection::vec(arb_row(), 0..20).prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (name, category, price, stock, min_stock))| Product {
                        id: ProductId::new(i as u32 + 1),
                        name,
                        category: category.to_string(),
                        price,
                        stock,
                        min_stock,
                        description: String::new(),
                        supplier: String::new(),
                        barcode: None,
                        last_stock_in: NaiveDate::from_ymd_opt(2024, 11, 10).unwrap(),
                    })
                    .collect()
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: the three stock-level bands partition the catalog.
            #[test]
            fn stock_bands_partition_the_catalog(catalog in arb_catalog()) {
                let low = search(&catalog, "", None, Some(StockLevel::Low)).len();
                let medium = search(&catalog, "", None, Some(StockLevel::Medium)).len();
                let high = search(&catalog, "", None, Some(StockLevel::High)).len();
                prop_assert_eq!(low + medium + high, catalog.len());
            }

            /// Property: sorting permutes, never drops or invents records.
            #[test]
            fn sort_preserves_the_record_multiset(catalog in arb_catalog()) {
                for key in [None, Some(SortKey::Name), Some(SortKey::Price), Some(SortKey::Stock), Some(SortKey::Category)] {
                    let sorted = sort(&catalog, key);
                    prop_assert_eq!(sorted.len(), catalog.len());
                    let mut expected: Vec<u32> = catalog.iter().map(|p| p.id.get()).collect();
                    let mut actual: Vec<u32> = sorted.iter().map(|p| p.id.get()).collect();
                    expected.sort_unstable();
                    actual.sort_unstable();
                    prop_assert_eq!(actual, expected);
                }
            }

            /// Property: price sort is monotone non-decreasing.
            #[test]
            fn price_sort_is_monotone(catalog in arb_catalog()) {
                let sorted = sort(&catalog, Some(SortKey::Price));
                for pair in sorted.windows(2) {
                    prop_assert!(pair[0].price <= pair[1].price);
                }
            }
        }
    }
}
