//! Per-field emission: turns a product's attribute values into feed fields.

use shopfeed_core::{FeedError, FeedResult};
use shopfeed_products::{AttributeValue, Product};

use crate::config::DateFormat;
use crate::document::{FeedEntry, FeedField, FieldValue};
use crate::xml;

/// Emit one entry for `product`.
///
/// Unset fields are omitted; repeated values become one field each, in
/// sequence order; composites become groups of their sub-fields.
pub(crate) fn entry(id: &str, product: &Product, dates: DateFormat) -> FeedResult<FeedEntry> {
    let mut fields = Vec::with_capacity(product.field_count());

    for (field, value) in product.populated_fields() {
        let mut items = Vec::new();
        flatten(value, &mut items);
        for item in items {
            fields.push(FeedField {
                name: field.wire_name(),
                value: value_of(field.name(), item, dates)?,
            });
        }
    }

    Ok(FeedEntry {
        id: id.to_string(),
        fields,
    })
}

fn flatten<'a>(value: &'a AttributeValue, out: &mut Vec<&'a AttributeValue>) {
    match value {
        AttributeValue::List(items) => items.iter().for_each(|item| flatten(item, out)),
        single => out.push(single),
    }
}

fn value_of(path: &str, value: &AttributeValue, dates: DateFormat) -> FeedResult<FieldValue> {
    let text = match value {
        AttributeValue::Text(text) => {
            xml::check_text(path, text)?;
            text.clone()
        }
        AttributeValue::Number(n) => number(path, *n)?,
        AttributeValue::Integer(n) => n.to_string(),
        AttributeValue::Bool(b) => (if *b { "yes" } else { "no" }).to_string(),
        AttributeValue::Date(d) => dates.format(path, d)?,
        AttributeValue::List(_) => {
            return Err(FeedError::serialization(format!(
                "{path}: lists are not allowed inside composite values"
            )));
        }
        composite => {
            let components = composite.components().unwrap_or_default();
            let mut group = Vec::with_capacity(components.len());
            for component in components {
                let sub_path = format!("{path}.{}", component.name);
                group.push(FeedField {
                    name: component.name,
                    value: value_of(&sub_path, &component.value, dates)?,
                });
            }
            return Ok(FieldValue::Group(group));
        }
    };
    Ok(FieldValue::Text(text))
}

fn number(path: &str, n: f64) -> FeedResult<String> {
    if n.is_finite() {
        Ok(n.to_string())
    } else {
        Err(FeedError::serialization(format!(
            "{path} is not a finite number ({n})"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use shopfeed_products::{Field, InstallmentPlan, Money, ShippingRule};

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    #[test]
    fn scalars_render_as_text() {
        let mut product = Product::new("sku-1");
        product.set_multipack(6);
        product.set_adult(false);
        product.set(Field::Color, 2.5).unwrap();
        let entry = entry("sku-1", &product, DateFormat::DateTime).unwrap();
        assert_eq!(entry.text("multipack"), Some("6"));
        assert_eq!(entry.text("adult"), Some("no"));
        assert_eq!(entry.text("color"), Some("2.5"));
    }

    #[test]
    fn dates_follow_the_configured_format() {
        let mut product = Product::new("sku-1");
        product.set_expiration_date(Utc.with_ymd_and_hms(2025, 1, 31, 8, 0, 0).unwrap());
        let long = entry("sku-1", &product, DateFormat::DateTime).unwrap();
        let short = entry("sku-1", &product, DateFormat::DateOnly).unwrap();
        assert_eq!(long.text("expiration_date"), Some("2025-01-31T08:00:00Z"));
        assert_eq!(short.text("expiration_date"), Some("2025-01-31"));
    }

    #[test]
    fn composites_nest_recursively() {
        let mut product = Product::new("sku-1");
        product.set_installment(InstallmentPlan::new(12, Money::new(8.25, "EUR")));
        let entry = entry("sku-1", &product, DateFormat::DateTime).unwrap();
        let installment = entry.get("installment").unwrap();
        assert_eq!(installment.get("months"), Some(&text("12")));
        let amount = installment.get("amount").unwrap();
        assert_eq!(amount.get("value"), Some(&text("8.25")));
        assert_eq!(amount.get("currency"), Some(&text("EUR")));
    }

    #[test]
    fn nested_lists_flatten_in_order() {
        let mut product = Product::new("sku-1");
        let nested = shopfeed_products::AttributeValue::List(vec![
            "a".into(),
            vec!["b", "c"].into(),
        ]);
        product.set(Field::PromotionId, nested).unwrap();
        let entry = entry("sku-1", &product, DateFormat::DateTime).unwrap();
        assert_eq!(
            entry.values("promotion_id"),
            vec![&text("a"), &text("b"), &text("c")]
        );
    }

    #[test]
    fn non_finite_numbers_fail_with_the_field_path() {
        let mut product = Product::new("sku-1");
        product.set_shipping(ShippingRule::new().with_price(Money::new(f64::NAN, "USD")));
        let err = entry("sku-1", &product, DateFormat::DateTime).unwrap_err();
        assert_eq!(
            err,
            FeedError::serialization("shipping.price.value is not a finite number (NaN)")
        );
    }

    #[test]
    fn control_characters_fail_with_the_field_path() {
        let mut product = Product::new("sku-1");
        product.set_shipping(ShippingRule::new().with_service("Next\u{0}day"));
        let err = entry("sku-1", &product, DateFormat::DateTime).unwrap_err();
        assert_eq!(
            err,
            FeedError::serialization(
                "shipping.service contains a character not allowed in XML (U+0000)"
            )
        );
    }

    #[test]
    fn far_future_dates_inside_composites_fail_with_the_field_path() {
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(12000, 1, 1, 0, 0, 0).unwrap();
        let mut product = Product::new("sku-1");
        product.set_sale_price_effective_date(shopfeed_products::DateRange::new(from, to));
        let err = entry("sku-1", &product, DateFormat::DateOnly).unwrap_err();
        assert_eq!(
            err,
            FeedError::serialization("salePriceEffectiveDate.to: year 12000 is outside 0000-9999")
        );
    }
}
