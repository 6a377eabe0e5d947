use serde::{Deserialize, Serialize};

use shopfeed_core::ValueObject;

use crate::attribute::{Component, Composite};

/// A tax rate applying to a product in one location.
///
/// Every field is optional; there is no cross-field rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxRule {
    /// Tax rate as a percentage of the price.
    pub rate: Option<f64>,
    /// ISO 3166-1 country code (e.g. `CH`).
    pub country: Option<String>,
    /// State, territory or prefecture without country prefix (e.g. `CA`, `NSW`).
    pub region: Option<String>,
    /// Postal code or postal code range.
    pub postal_code: Option<String>,
    /// Whether tax is also charged on shipping.
    pub tax_ship: Option<bool>,
    /// Numeric criteria ID of a location as defined by the Ads API.
    pub location_id: Option<String>,
    /// Location group set up in Merchant Center.
    pub location_group_name: Option<String>,
}

impl TaxRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = Some(rate);
        self
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

    pub fn with_tax_ship(mut self, tax_ship: bool) -> Self {
        self.tax_ship = Some(tax_ship);
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
}

impl ValueObject for TaxRule {
    const TYPE_NAME: &'static str = "TaxRule";
}

impl Composite for TaxRule {
    fn components(&self) -> Vec<Component> {
        [
            Component::optional("rate", self.rate),
            Component::optional("country", self.country.clone()),
            Component::optional("region", self.region.clone()),
            Component::optional("postal_code", self.postal_code.clone()),
            Component::optional("tax_ship", self.tax_ship),
            Component::optional("location_id", self.location_id.clone()),
            Component::optional("location_group_name", self.location_group_name.clone()),
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
    fn only_set_fields_become_components() {
        let tax = TaxRule::new().with_rate(8.25).with_region("CA").with_tax_ship(true);
        let components = tax.components();
        let names: Vec<_> = components.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["rate", "region", "tax_ship"]);
        assert_eq!(components[2].value, AttributeValue::Bool(true));
    }

    #[test]
    fn empty_rule_has_no_components() {
        assert!(TaxRule::default().components().is_empty());
    }
}
