//! Catalog query filters.
//!
//! `ProductFilter` is the store-independent form of a catalog query. Each store
//! renders it into its own query language; `matches` is the reference semantics
//! that every rendering must agree with.

use regex::{Regex, RegexBuilder};

use crate::product::Product;

/// Conjunction of optional catalog predicates. The empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    brand: Option<String>,
    query: Option<String>,
    title: Option<String>,
}

/// Query-string values are optional, and an empty value counts as not given.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl ProductFilter {
    /// Filter that matches every product.
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a filter from the `brand` and `q` request parameters.
    pub fn from_params(brand: Option<String>, q: Option<String>) -> Self {
        Self {
            brand: non_empty(brand),
            query: non_empty(q),
            title: None,
        }
    }

    /// Exact title lookup (used to probe for existing records before seeding).
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = non_empty(Some(brand.into()));
        self
    }

    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.query = non_empty(Some(q.into()));
        self
    }

    /// Required exact `brand`, if any.
    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    /// Free-text needle matched case-insensitively against title or description.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Required exact `title`, if any.
    pub fn title_eq(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.brand.is_none() && self.query.is_none() && self.title.is_none()
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.matches_fields(&product.title, &product.description, &product.brand)
    }

    /// [`matches`](Self::matches) over bare field values, for callers that
    /// hold a raw stored record rather than a decoded `Product`.
    pub fn matches_fields(&self, title: &str, description: &str, brand: &str) -> bool {
        if self.brand.as_deref().is_some_and(|b| b != brand) {
            return false;
        }
        if self.title.as_deref().is_some_and(|t| t != title) {
            return false;
        }
        let Some(q) = &self.query else {
            return true;
        };
        match literal_ignoring_case(q) {
            Ok(re) => re.is_match(title) || re.is_match(description),
            Err(_) => false,
        }
    }
}

/// Literal needle with simple Unicode case folding, the same matcher MongoDB
/// applies to an escaped `$regex` with the `i` option.
fn literal_ignoring_case(needle: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
}
