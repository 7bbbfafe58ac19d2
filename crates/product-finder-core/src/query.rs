//! Search-term normalization and the synonym-aware product filter.
//!
//! # Matching
//!
//! A product matches a [`SearchTerm`] when either:
//!
//! 1. its lower-cased name contains the term as a substring, or
//! 2. the term is exactly one of the category [`SYNONYMS`] and the product's
//!    type is the category the synonym maps to.
//!
//! Filtering is a single linear pass that keeps the input order.

use thiserror::Error;

use crate::models::{Product, ProductType};

/// Terms that select a whole category regardless of product names.
pub const SYNONYMS: [(&str, ProductType); 6] = [
    ("pc", ProductType::Computer),
    ("computador", ProductType::Computer),
    ("celular", ProductType::Cellphone),
    ("celulares", ProductType::Cellphone),
    ("tablet", ProductType::Tablet),
    ("tableta", ProductType::Tablet),
];

/// The submitted term was empty after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search term must not be empty")]
pub struct EmptyTerm;

/// A trimmed, lower-cased, non-empty search term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Normalizes raw form input. Whitespace-only input is [`EmptyTerm`].
    pub fn parse(input: &str) -> Result<SearchTerm, EmptyTerm> {
        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(EmptyTerm);
        }
        Ok(SearchTerm(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The category this term selects, if it is a synonym.
    pub fn synonym(&self) -> Option<ProductType> {
        synonym_for(&self.0)
    }

    pub fn matches(&self, product: &Product) -> bool {
        if product.name.to_lowercase().contains(self.as_str()) {
            return true;
        }
        self.synonym() == Some(product.product_type)
    }
}

impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Exact-match synonym lookup on an already normalized term.
pub fn synonym_for(term: &str) -> Option<ProductType> {
    SYNONYMS
        .iter()
        .find(|(synonym, _)| *synonym == term)
        .map(|(_, product_type)| *product_type)
}

/// Concatenates per-category batches, keeping batch order then in-batch order.
pub fn merge_batches<I>(batches: I) -> Vec<Product>
where
    I: IntoIterator<Item = Vec<Product>>,
{
    batches.into_iter().flatten().collect()
}

/// Keeps the products matching `term`, in their original order.
pub fn filter_products(products: Vec<Product>, term: &SearchTerm) -> Vec<Product> {
    products.into_iter().filter(|p| term.matches(p)).collect()
}
