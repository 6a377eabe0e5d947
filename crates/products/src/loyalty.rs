use serde::{Deserialize, Serialize};

use shopfeed_core::ValueObject;

use crate::attribute::{AttributeValue, Component, Composite};

/// Ratio used when none is given.
pub const DEFAULT_RATIO: f64 = 1.0;

/// Loyalty points a buyer earns with a purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyPoints {
    /// Name of the loyalty program.
    name: String,
    /// Points earned when purchasing the product.
    points_value: f64,
    /// Value of one point when converted to currency.
    ratio: f64,
}

impl LoyaltyPoints {
    pub fn new(name: impl Into<String>, points_value: f64, ratio: Option<f64>) -> Self {
        Self {
            name: name.into(),
            points_value,
            ratio: ratio.unwrap_or(DEFAULT_RATIO),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn points_value(&self) -> f64 {
        self.points_value
    }

    pub fn set_points_value(&mut self, points_value: f64) {
        self.points_value = points_value;
    }

    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// `None` resets the ratio to [`DEFAULT_RATIO`].
    pub fn set_ratio(&mut self, ratio: Option<f64>) {
        self.ratio = ratio.unwrap_or(DEFAULT_RATIO);
    }
}

impl ValueObject for LoyaltyPoints {
    const TYPE_NAME: &'static str = "LoyaltyPoints";
}

impl Composite for LoyaltyPoints {
    fn components(&self) -> Vec<Component> {
        vec![
            Component::new("name", AttributeValue::Text(self.name.clone())),
            Component::new("points_value", AttributeValue::Number(self.points_value)),
            Component::new("ratio", AttributeValue::Number(self.ratio)),
        ]
    }
}
