use serde::{Deserialize, Serialize};

use shopfeed_core::ValueObject;

use crate::Money;
use crate::attribute::{Component, Composite};

/// A shipping cost and speed for one destination and service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingRule {
    /// ISO 3166-1 country code of the destination.
    pub country: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub location_id: Option<String>,
    pub location_group_name: Option<String>,
    /// Service class or carrier speed (e.g. "Express").
    pub service: Option<String>,
    pub price: Option<Money>,
    pub min_handling_time: Option<i64>,
    pub max_handling_time: Option<i64>,
    pub min_transit_time: Option<i64>,
    pub max_transit_time: Option<i64>,
}

impl ShippingRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn with_location_id(mut self, location_id: impl Into<String>) -> Self {
        self.location_id = Some(location_id.into());
        self
    }

    pub fn with_location_group_name(mut self, name: impl Into<String>) -> Self {
        self.location_group_name = Some(name.into());
        self
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    pub fn with_price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_handling_time(mut self, min: i64, max: i64) -> Self {
        self.min_handling_time = Some(min);
        self.max_handling_time = Some(max);
        self
    }

    pub fn with_transit_time(mut self, min: i64, max: i64) -> Self {
        self.min_transit_time = Some(min);
        self.max_transit_time = Some(max);
        self
    }
}

impl ValueObject for ShippingRule {
    const TYPE_NAME: &'static str = "ShippingRule";
}

impl Composite for ShippingRule {
    fn components(&self) -> Vec<Component> {
        [
            Component::optional("country", self.country.clone()),
            Component::optional("region", self.region.clone()),
            Component::optional("postal_code", self.postal_code.clone()),
            Component::optional("location_id", self.location_id.clone()),
            Component::optional("location_group_name", self.location_group_name.clone()),
            Component::optional("service", self.service.clone()),
            Component::optional("price", self.price.clone()),
            Component::optional("min_handling_time", self.min_handling_time),
            Component::optional("max_handling_time", self.max_handling_time),
            Component::optional("min_transit_time", self.min_transit_time),
            Component::optional("max_transit_time", self.max_transit_time),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AttributeValue;

    #[test]
    fn price_component_stays_money() {
        let rule = ShippingRule::new()
            .with_country("US")
            .with_service("Standard")
            .with_price(Money::new(4.95, "USD"));
        let components = rule.components();
        assert_eq!(components.len(), 3);
        assert_eq!(
            components[2].value,
            AttributeValue::Money(Money::new(4.95, "USD"))
        );
    }

    #[test]
    fn handling_and_transit_times_are_emitted_in_order() {
        let names: Vec<_> = ShippingRule::new()
            .with_transit_time(2, 5)
            .with_handling_time(0, 1)
            .components()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "min_handling_time",
                "max_handling_time",
                "min_transit_time",
                "max_transit_time"
            ]
        );
    }
}
