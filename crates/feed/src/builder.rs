//! Feed builder: accumulates product records and builds the feed document.

use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, warn};

use shopfeed_core::{FeedError, FeedResult};
use shopfeed_products::Product;

use crate::config::FeedConfig;
use crate::document::FeedDocument;
use crate::emit;

/// A record that could not be serialized in lenient mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("product {id} (position {index}): {error}")]
pub struct RecordError {
    /// Position of the record in insertion order.
    pub index: usize,
    pub id: String,
    pub error: FeedError,
}

/// Accumulates product records for one feed.
///
/// Records keep insertion order, which is also emission order. Ids must be
/// present, non-blank, and unique within one builder. The builder never
/// mutates the records it holds.
#[derive(Debug, Clone, Default)]
pub struct FeedBuilder {
    config: FeedConfig,
    /// Records keyed by the id they were accepted under.
    records: Vec<(String, Product)>,
    ids: HashSet<String>,
}

impl FeedBuilder {
    pub fn new(config: FeedConfig) -> Self {
        Self {
            config,
            records: Vec::new(),
            ids: HashSet::new(),
        }
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records added so far, in insertion order.
    pub fn products(&self) -> impl ExactSizeIterator<Item = &Product> + '_ {
        self.records.iter().map(|(_, product)| product)
    }

    /// Append one product.
    ///
    /// Fails with `Validation` when the id is unset, blank, or already used
    /// by a previously added product; the builder is unchanged on failure.
    pub fn add(&mut self, product: Product) -> FeedResult<()> {
        let id = match product.id() {
            None => return Err(FeedError::validation("product id is required")),
            Some(id) if id.trim().is_empty() => {
                return Err(FeedError::validation("product id cannot be empty"));
            }
            Some(id) => id.to_string(),
        };

        if self.ids.contains(&id) {
            return Err(FeedError::validation(format!("duplicate product id: {id}")));
        }

        if self.config.warn_on_unknown_values {
            for (field, value) in product.unknown_vocabulary_values() {
                warn!(
                    product_id = %id,
                    field = %field,
                    value = %value,
                    "value outside documented vocabulary"
                );
            }
        }

        debug!(product_id = %id, fields = product.field_count(), "product added to feed");
        self.ids.insert(id.clone());
        self.records.push((id, product));
        Ok(())
    }

    /// Append products in order, stopping at the first failure.
    ///
    /// Products before the failing one stay added.
    pub fn extend<I>(&mut self, products: I) -> FeedResult<()>
    where
        I: IntoIterator<Item = Product>,
    {
        for product in products {
            self.add(product)?;
        }
        Ok(())
    }

    /// Drop all accumulated products; the configuration is kept.
    pub fn reset(&mut self) {
        self.records.clear();
        self.ids.clear();
    }

    /// Build the feed document.
    ///
    /// Fails outright if any record cannot be serialized. An empty builder
    /// yields a valid document with no entries.
    pub fn build(&self) -> FeedResult<FeedDocument> {
        let mut entries = Vec::with_capacity(self.records.len());
        for (id, product) in &self.records {
            entries.push(emit::entry(id, product, self.config.date_format)?);
        }

        debug!(entries = entries.len(), "feed built");
        Ok(self.document(entries))
    }

    /// Build the feed, skipping records that cannot be serialized.
    ///
    /// Skipped records are reported alongside the document rather than
    /// dropped silently.
    pub fn build_lenient(&self) -> (FeedDocument, Vec<RecordError>) {
        let mut entries = Vec::with_capacity(self.records.len());
        let mut errors = Vec::new();

        for (index, (id, product)) in self.records.iter().enumerate() {
            match emit::entry(id, product, self.config.date_format) {
                Ok(entry) => entries.push(entry),
                Err(error) => {
                    warn!(product_id = %id, error = %error, "product skipped");
                    errors.push(RecordError {
                        index,
                        id: id.clone(),
                        error,
                    });
                }
            }
        }

        debug!(entries = entries.len(), skipped = errors.len(), "feed built");
        (self.document(entries), errors)
    }

    fn document(&self, entries: Vec<crate::document::FeedEntry>) -> FeedDocument {
        FeedDocument {
            title: self.config.title.clone(),
            link: self.config.link.clone(),
            description: self.config.description.clone(),
            entries,
            indent: self.config.indent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfeed_products::{Field, Money, ShippingRule};

    fn product(id: &str) -> Product {
        let mut product = Product::new(id);
        product.set_title(format!("Product {id}"));
        product
    }

    #[test]
    fn add_rejects_missing_id() {
        let mut builder = FeedBuilder::default();
        let err = builder.add(Product::default()).unwrap_err();
        assert_eq!(err, FeedError::validation("product id is required"));
        assert!(builder.is_empty());
    }

    #[test]
    fn add_rejects_blank_id() {
        let mut builder = FeedBuilder::default();
        let err = builder.add(Product::new("   ")).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn add_rejects_duplicate_id() {
        let mut builder = FeedBuilder::default();
        builder.add(product("sku-1")).unwrap();
        let err = builder.add(product("sku-1")).unwrap_err();
        assert_eq!(err, FeedError::validation("duplicate product id: sku-1"));
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn extend_stops_at_first_failure() {
        let mut builder = FeedBuilder::default();
        let err = builder
            .extend(vec![product("a"), product("b"), product("a"), product("c")])
            .unwrap_err();
        assert!(err.is_validation());
        let ids: Vec<_> = builder.products().filter_map(Product::id).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn build_preserves_insertion_order() {
        let mut builder = FeedBuilder::default();
        builder.extend(["c", "a", "b"].map(product)).unwrap();
        let doc = builder.build().unwrap();
        let ids: Vec<_> = doc.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn empty_builder_builds_empty_document() {
        let builder = FeedBuilder::new(FeedConfig::default().with_title("Empty"));
        let doc = builder.build().unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.title, "Empty");
    }

    #[test]
    fn reset_clears_records_and_ids() {
        let mut builder = FeedBuilder::default();
        builder.add(product("sku-1")).unwrap();
        builder.reset();
        assert!(builder.is_empty());
        builder.add(product("sku-1")).unwrap();
        assert_eq!(builder.build().unwrap().len(), 1);
    }

    #[test]
    fn build_fails_on_unserializable_record() {
        let mut builder = FeedBuilder::default();
        builder.add(product("ok")).unwrap();
        let mut bad = product("bad");
        bad.set_price(Money::new(f64::INFINITY, "USD"));
        builder.add(bad).unwrap();

        let err = builder.build().unwrap_err();
        assert!(matches!(err, FeedError::Serialization(_)));
    }

    #[test]
    fn build_lenient_reports_skipped_records() {
        let mut builder = FeedBuilder::default();
        builder.add(product("ok")).unwrap();
        let mut bad = product("bad");
        bad.set_shipping(vec![
            ShippingRule::new().with_country("US"),
            ShippingRule::new().with_price(Money::new(f64::NAN, "USD")),
        ]);
        builder.add(bad).unwrap();
        builder.add(product("also-ok")).unwrap();

        let (doc, errors) = builder.build_lenient();
        let ids: Vec<_> = doc.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["ok", "also-ok"]);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].index, 1);
        assert_eq!(errors[0].id, "bad");
        assert!(errors[0].to_string().starts_with("product bad (position 1): serialization failed"));
    }

    #[test]
    fn build_does_not_modify_records() {
        let mut builder = FeedBuilder::default();
        let mut p = product("sku-1");
        p.set(Field::Gtin, vec!["1", "2"]).unwrap();
        builder.add(p.clone()).unwrap();
        builder.build().unwrap();
        assert_eq!(builder.products().collect::<Vec<_>>(), vec![&p]);
    }

    #[test]
    fn every_accepted_record_is_emitted_or_reported() {
        let mut builder = FeedBuilder::default();
        for id in ["a", "b", "c"] {
            builder.add(product(id)).unwrap();
        }
        let mut bad = product("d");
        bad.set_title("Bad\u{1}title");
        builder.add(bad).unwrap();

        let (doc, errors) = builder.build_lenient();
        assert_eq!(doc.len() + errors.len(), builder.len());
        assert_eq!(errors[0].id, "d");
    }
}
