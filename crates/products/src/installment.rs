use serde::{Deserialize, Serialize};

use shopfeed_core::{FeedResult, ValueObject};

use crate::Money;
use crate::attribute::{AttributeValue, Component, Composite};

/// A monthly installment plan: number of payments and the amount of each.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallmentPlan {
    months: i64,
    amount: Money,
}

impl InstallmentPlan {
    pub fn new(months: i64, amount: Money) -> Self {
        Self { months, amount }
    }

    pub fn months(&self) -> i64 {
        self.months
    }

    pub fn set_months(&mut self, months: i64) {
        self.months = months;
    }

    pub fn amount(&self) -> &Money {
        &self.amount
    }

    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
    }

    /// Assign the monthly amount from a dynamic value; must be `Money`.
    pub fn try_set_amount(&mut self, value: AttributeValue) -> FeedResult<()> {
        self.amount = value.expect_shape("amount")?;
        Ok(())
    }
}

impl ValueObject for InstallmentPlan {
    const TYPE_NAME: &'static str = "InstallmentPlan";
}

impl Composite for InstallmentPlan {
    fn components(&self) -> Vec<Component> {
        vec![
            Component::new("months", AttributeValue::Integer(self.months)),
            Component::new("amount", AttributeValue::Money(self.amount.clone())),
        ]
    }
}
