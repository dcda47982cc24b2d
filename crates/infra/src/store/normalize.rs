//! Mapping between stored BSON documents and typed catalog records.

use bson::{Bson, Document};
use chrono::{DateTime, Utc};

use meer_core::ProductId;
use meer_products::{NewProduct, Product};

use super::StoreError;

/// Store-native identifier field.
pub const INTERNAL_ID_FIELD: &str = "_id";
/// Public identifier field.
pub const PUBLIC_ID_FIELD: &str = "id";

const TIMESTAMP_FIELDS: [&str; 2] = ["created_at", "updated_at"];

/// Turn a raw stored document into the public `Product` shape.
///
/// `_id` is removed and replaced by `id` holding its hex string form. BSON
/// datetimes are rewritten as RFC 3339 strings. Unknown fields are dropped.
pub fn normalize_document(mut doc: Document) -> Result<Product, StoreError> {
    let id = match doc.remove(INTERNAL_ID_FIELD) {
        Some(Bson::ObjectId(oid)) => ProductId::from_object_id(oid),
        Some(other) => {
            return Err(StoreError::Malformed(format!(
                "`{INTERNAL_ID_FIELD}` is not an ObjectId: {other}"
            )));
        }
        None => {
            return Err(StoreError::Malformed(format!(
                "document has no `{INTERNAL_ID_FIELD}`"
            )));
        }
    };
    doc.insert(PUBLIC_ID_FIELD, id.to_string());

    for field in TIMESTAMP_FIELDS {
        let dt = match doc.get(field) {
            Some(Bson::DateTime(dt)) => *dt,
            _ => continue,
        };
        let rendered = dt
            .try_to_rfc3339_string()
            .map_err(|e| StoreError::Malformed(format!("{id}: `{field}` out of range: {e}")))?;
        doc.insert(field, rendered);
    }

    bson::from_document(doc).map_err(|e| StoreError::Malformed(format!("{id}: {e}")))
}

/// Build the document inserted for a new product.
pub fn storage_document(
    id: ProductId,
    product: &NewProduct,
    now: DateTime<Utc>,
) -> Result<Document, StoreError> {
    let body = bson::to_document(product).map_err(|e| StoreError::Encode(e.to_string()))?;
    let stamp = bson::DateTime::from_chrono(now);

    let mut doc = Document::new();
    doc.insert(INTERNAL_ID_FIELD, *id.as_object_id());
    for (key, value) in body {
        doc.insert(key, value);
    }
    for field in TIMESTAMP_FIELDS {
        doc.insert(field, stamp);
    }
    Ok(doc)
}
