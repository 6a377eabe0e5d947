//! Value-unit pairs: unit pricing measures and shipping weight/dimensions.

use serde::{Deserialize, Serialize};

use shopfeed_core::ValueObject;

use crate::attribute::{AttributeValue, Component, Composite};

/// A numeric value with a free-form unit name (e.g. `kg`, `ml`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasuredValue {
    value: f64,
    unit: String,
}

impl MeasuredValue {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }
}

impl core::fmt::Display for MeasuredValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Declares a nominal measure kind: same `{value, unit}` shape, distinct type,
/// so a weight can never be assigned where a dimension is expected.
macro_rules! measure_kind {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $t(MeasuredValue);

        impl $t {
            pub fn new(value: f64, unit: impl Into<String>) -> Self {
                Self(MeasuredValue::new(value, unit))
            }

            pub fn value(&self) -> f64 {
                self.0.value
            }

            pub fn set_value(&mut self, value: f64) {
                self.0.value = value;
            }

            pub fn unit(&self) -> &str {
                &self.0.unit
            }

            pub fn set_unit(&mut self, unit: impl Into<String>) {
                self.0.unit = unit.into();
            }

            pub fn measure(&self) -> &MeasuredValue {
                &self.0
            }
        }

        impl From<MeasuredValue> for $t {
            fn from(value: MeasuredValue) -> Self {
                Self(value)
            }
        }

        impl ValueObject for $t {
            const TYPE_NAME: &'static str = stringify!($t);
        }

        impl Composite for $t {
            fn components(&self) -> Vec<Component> {
                vec![
                    Component::new("value", AttributeValue::Number(self.0.value)),
                    Component::new("unit", AttributeValue::Text(self.0.unit.clone())),
                ]
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

measure_kind!(
    /// Measure and dimension of a product, used to derive its cost per unit.
    UnitPricingMeasure
);
measure_kind!(
    /// Weight used to calculate shipping cost.
    ShippingWeight
);
measure_kind!(
    /// Length, width or height used to calculate shipping cost.
    ShippingDimension
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_share_shape_but_report_their_own_type_name() {
        let w = ShippingWeight::new(1.2, "kg");
        let d = ShippingDimension::new(1.2, "kg");
        assert_eq!(w.measure(), d.measure());
        assert_eq!(ShippingWeight::TYPE_NAME, "ShippingWeight");
        assert_eq!(ShippingDimension::TYPE_NAME, "ShippingDimension");
        assert_eq!(UnitPricingMeasure::TYPE_NAME, "UnitPricingMeasure");
    }

    #[test]
    fn unit_is_free_form() {
        let mut m = UnitPricingMeasure::new(750.0, "ml");
        m.set_unit("handful");
        m.set_value(3.0);
        assert_eq!(m.to_string(), "3 handful");
        assert_eq!(m.measure().unit(), "handful");
        assert_eq!(m.measure().value(), 3.0);
    }
}
