//! Dynamic attribute values: the runtime shape a product field holds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopfeed_core::{FeedError, FeedResult, ValueObject};

use crate::{
    DateRange, InstallmentPlan, LoyaltyPoints, Money, ShippingDimension, ShippingRule,
    ShippingWeight, TaxRule, UnitPricingMeasure,
};

/// A value assigned to a product field.
///
/// Typed setters on [`crate::Product`] build these for you; the dynamic
/// [`crate::Product::set`] path accepts any of them and checks the shape
/// against the field table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AttributeValue {
    Text(String),
    Number(f64),
    Integer(i64),
    Bool(bool),
    Date(DateTime<Utc>),
    Money(Money),
    UnitPricingMeasure(UnitPricingMeasure),
    ShippingWeight(ShippingWeight),
    ShippingDimension(ShippingDimension),
    DateRange(DateRange),
    Installment(InstallmentPlan),
    LoyaltyPoints(LoyaltyPoints),
    Shipping(ShippingRule),
    Tax(TaxRule),
    List(Vec<AttributeValue>),
}

impl AttributeValue {
    /// Shape name used in `TypeMismatch` messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Number(_) => "Number",
            Self::Integer(_) => "Integer",
            Self::Bool(_) => "Bool",
            Self::Date(_) => "Date",
            Self::Money(_) => Money::TYPE_NAME,
            Self::UnitPricingMeasure(_) => UnitPricingMeasure::TYPE_NAME,
            Self::ShippingWeight(_) => ShippingWeight::TYPE_NAME,
            Self::ShippingDimension(_) => ShippingDimension::TYPE_NAME,
            Self::DateRange(_) => DateRange::TYPE_NAME,
            Self::Installment(_) => InstallmentPlan::TYPE_NAME,
            Self::LoyaltyPoints(_) => LoyaltyPoints::TYPE_NAME,
            Self::Shipping(_) => ShippingRule::TYPE_NAME,
            Self::Tax(_) => TaxRule::TYPE_NAME,
            Self::List(_) => "List",
        }
    }

    /// True for text, numbers, integers and booleans.
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            Self::Text(_) | Self::Number(_) | Self::Integer(_) | Self::Bool(_)
        )
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Borrow the value as a composite type, if it has that shape.
    pub fn as_shape<T: AttributeShape>(&self) -> Option<&T> {
        T::peek(self)
    }

    /// Sub-values of a composite; `None` for scalars, dates and lists.
    pub fn components(&self) -> Option<Vec<Component>> {
        let components = match self {
            Self::Money(v) => v.components(),
            Self::UnitPricingMeasure(v) => v.components(),
            Self::ShippingWeight(v) => v.components(),
            Self::ShippingDimension(v) => v.components(),
            Self::DateRange(v) => v.components(),
            Self::Installment(v) => v.components(),
            Self::LoyaltyPoints(v) => v.components(),
            Self::Shipping(v) => v.components(),
            Self::Tax(v) => v.components(),
            Self::Text(_)
            | Self::Number(_)
            | Self::Integer(_)
            | Self::Bool(_)
            | Self::Date(_)
            | Self::List(_) => return None,
        };
        Some(components)
    }

    /// Single values become a one-element slice; lists are returned as-is.
    pub fn as_slice(&self) -> &[AttributeValue] {
        match self {
            Self::List(items) => items,
            single => core::slice::from_ref(single),
        }
    }

    /// Convert into a composite type, failing with `TypeMismatch` naming `field`.
    pub fn expect_shape<T: AttributeShape>(self, field: &str) -> FeedResult<T> {
        T::from_attribute(self)
            .map_err(|other| FeedError::type_mismatch(field, T::TYPE_NAME, other.kind()))
    }

    /// Convert into a date, failing with `TypeMismatch` naming `field`.
    pub fn expect_date(self, field: &str) -> FeedResult<DateTime<Utc>> {
        match self {
            Self::Date(d) => Ok(d),
            other => Err(FeedError::type_mismatch(field, "Date", other.kind())),
        }
    }
}

/// One named sub-value of a composite attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub name: &'static str,
    pub value: AttributeValue,
}

impl Component {
    pub fn new(name: &'static str, value: AttributeValue) -> Self {
        Self { name, value }
    }

    /// Component for an optional sub-field; `None` when unset.
    pub fn optional<T: Into<AttributeValue>>(name: &'static str, value: Option<T>) -> Option<Self> {
        value.map(|v| Self::new(name, v.into()))
    }
}

/// A value object that is emitted as a group of named sub-values.
pub trait Composite: ValueObject {
    /// Populated sub-fields, in emission order.
    fn components(&self) -> Vec<Component>;
}

/// Conversion between a composite type and its [`AttributeValue`] variant.
pub trait AttributeShape: Composite + Sized {
    fn from_attribute(value: AttributeValue) -> Result<Self, AttributeValue>;
    fn peek(value: &AttributeValue) -> Option<&Self>;
}

macro_rules! attribute_shape {
    ($($t:ident => $variant:ident),* $(,)?) => {
        $(
            impl AttributeShape for $t {
                fn from_attribute(value: AttributeValue) -> Result<Self, AttributeValue> {
                    match value {
                        AttributeValue::$variant(v) => Ok(v),
                        other => Err(other),
                    }
                }

                fn peek(value: &AttributeValue) -> Option<&Self> {
                    match value {
                        AttributeValue::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }

            impl From<$t> for AttributeValue {
                fn from(value: $t) -> Self {
                    AttributeValue::$variant(value)
                }
            }

            impl TryFrom<AttributeValue> for $t {
                type Error = FeedError;

                fn try_from(value: AttributeValue) -> Result<Self, Self::Error> {
                    value.expect_shape("value")
                }
            }
        )*
    };
}

attribute_shape!(
    Money => Money,
    UnitPricingMeasure => UnitPricingMeasure,
    ShippingWeight => ShippingWeight,
    ShippingDimension => ShippingDimension,
    DateRange => DateRange,
    InstallmentPlan => Installment,
    LoyaltyPoints => LoyaltyPoints,
    ShippingRule => Shipping,
    TaxRule => Tax,
);

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<DateTime<Utc>> for AttributeValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Date(value)
    }
}

impl<T: Into<AttributeValue>> From<Vec<T>> for AttributeValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expect_shape_returns_the_value_unchanged() {
        let price = Money::new(19.99, "USD");
        let back: Money = AttributeValue::from(price.clone())
            .expect_shape("price")
            .unwrap();
        assert_eq!(back, price);
    }

    #[test]
    fn expect_shape_reports_field_expected_and_found() {
        let err = AttributeValue::Number(19.99)
            .expect_shape::<Money>("price")
            .unwrap_err();
        assert_eq!(err, FeedError::type_mismatch("price", "Money", "Number"));
    }

    #[test]
    fn measure_kinds_are_not_interchangeable() {
        let err = ShippingDimension::try_from(AttributeValue::from(ShippingWeight::new(2.0, "kg")))
            .unwrap_err();
        assert!(err.is_type_mismatch());
    }

    #[test]
    fn expect_date_rejects_text() {
        let err = AttributeValue::from("2024-01-01").expect_date("availabilityDate").unwrap_err();
        assert_eq!(err, FeedError::type_mismatch("availabilityDate", "Date", "Text"));
    }

    #[test]
    fn only_composites_have_components() {
        assert!(AttributeValue::from("text").components().is_none());
        let components = AttributeValue::from(ShippingWeight::new(3.0, "lb"))
            .components()
            .unwrap();
        assert_eq!(components[1], Component::new("unit", AttributeValue::Text("lb".into())));
    }

    #[test]
    fn as_slice_normalizes_single_values() {
        let single = AttributeValue::from("a");
        assert_eq!(single.as_slice().len(), 1);
        let many = AttributeValue::from(vec!["a", "b", "c"]);
        assert_eq!(many.as_slice().len(), 3);
        assert_eq!(many.kind(), "List");
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(AttributeValue::from(Money::new(2.5, "EUR"))).unwrap();
        assert_eq!(json["type"], "money");
        assert_eq!(json["value"]["currency"], "EUR");
    }
}
