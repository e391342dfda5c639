//! Pure view projection over the fetched product list.
//!
//! A [`ProductView`] captures the three view controls — search text, category
//! filter, and price sort — and [`ProductView::apply`] derives the visible
//! rows from the canonical list without mutating it. Derivation always runs
//! in the same order: search, then category, then sort. The sort is stable,
//! so records with equal prices keep their relative order from the canonical
//! list.

use crate::core::product::Product;

/// Price sort applied as the final projection step.
///
/// `None` keeps the canonical order. A sort-toggle control advances through
/// the three states with [`SortOrder::cycled`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    None,
    PriceAscending,
    PriceDescending,
}

impl SortOrder {
    /// The next state in the toggle cycle: none → ascending → descending → none.
    pub fn cycled(self) -> Self {
        match self {
            SortOrder::None => SortOrder::PriceAscending,
            SortOrder::PriceAscending => SortOrder::PriceDescending,
            SortOrder::PriceDescending => SortOrder::None,
        }
    }
}

/// Category filter: everything, or exactly one category label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Label(String),
}

impl CategoryFilter {
    fn admits(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Label(label) => &product.category == label,
        }
    }
}

/// The view controls for the product list.
///
/// `Default` is the neutral view: no search text, all categories, canonical
/// order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductView {
    pub search: String,
    pub category: CategoryFilter,
    pub sort: SortOrder,
}

impl ProductView {
    /// Derive the visible rows from the canonical list.
    ///
    /// Search matches case-insensitively against the product name; the
    /// category filter is an exact, case-sensitive label match. The input
    /// slice is never reordered — sorting happens on the borrowed result.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut rows: Vec<&Product> = products.iter().collect();

        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            rows.retain(|p| p.name.to_lowercase().contains(&needle));
        }

        rows.retain(|p| self.category.admits(p));

        match self.sort {
            SortOrder::None => {}
            SortOrder::PriceAscending => rows.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortOrder::PriceDescending => rows.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }

        rows
    }
}

/// Category options for a filter control: `"All"` followed by each distinct
/// category in order of first appearance in the list.
pub fn category_options(products: &[Product]) -> Vec<String> {
    let mut options = vec!["All".to_string()];
    for product in products {
        if !options[1..].contains(&product.category) {
            options.push(product.category.clone());
        }
    }
    options
}
