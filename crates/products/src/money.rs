use serde::{Deserialize, Serialize};

use shopfeed_core::ValueObject;

use crate::attribute::{AttributeValue, Component, Composite};

/// A price with currency.
///
/// `currency` should be an ISO 4217 code (e.g. `EUR`, `USD`); the code is
/// stored as given and not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    amount: f64,
    currency: String,
}

impl Money {
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn set_amount(&mut self, amount: f64) {
        self.amount = amount;
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn set_currency(&mut self, currency: impl Into<String>) {
        self.currency = currency.into();
    }
}

impl ValueObject for Money {
    const TYPE_NAME: &'static str = "Money";
}

impl Composite for Money {
    fn components(&self) -> Vec<Component> {
        vec![
            Component::new("value", AttributeValue::Number(self.amount)),
            Component::new("currency", AttributeValue::Text(self.currency.clone())),
        ]
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_store_values_verbatim() {
        let mut price = Money::new(19.99, "USD");
        price.set_amount(-1.0);
        price.set_currency("not-a-code");
        assert_eq!(price.amount(), -1.0);
        assert_eq!(price.currency(), "not-a-code");
    }

    #[test]
    fn displays_amount_then_currency() {
        assert_eq!(Money::new(19.99, "USD").to_string(), "19.99 USD");
        assert_eq!(Money::new(20.0, "EUR").to_string(), "20 EUR");
    }

    #[test]
    fn components_are_value_then_currency() {
        let names: Vec<_> = Money::new(1.5, "CHF")
            .components()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["value", "currency"]);
    }
}
