//! Rendering `ProductFilter` as a MongoDB query document.

use bson::{doc, Document};

use meer_products::ProductFilter;

/// Build the `find` filter for a catalog query.
///
/// Top-level keys combine with implicit AND. The free-text needle is escaped so
/// the case-insensitive `$regex` behaves as a literal substring test.
pub fn filter_document(filter: &ProductFilter) -> Document {
    let mut query = Document::new();

    if let Some(brand) = filter.brand() {
        query.insert("brand", brand);
    }
    if let Some(title) = filter.title_eq() {
        query.insert("title", title);
    }
    if let Some(q) = filter.query() {
        let pattern = regex::escape(q);
        query.insert(
            "$or",
            vec![
                doc! { "title": { "$regex": pattern.as_str(), "$options": "i" } },
                doc! { "description": { "$regex": pattern.as_str(), "$options": "i" } },
            ],
        );
    }

    query
}
