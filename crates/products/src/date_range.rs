use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopfeed_core::{FeedResult, ValueObject};

use crate::attribute::{AttributeValue, Component, Composite};

/// A window during which an offer (typically a sale price) is valid.
///
/// No ordering is enforced between `from` and `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    from: DateTime<Utc>,
    to: DateTime<Utc>,
}

impl DateRange {
    pub fn new(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self { from, to }
    }

    /// Start of the window.
    pub fn from_date(&self) -> DateTime<Utc> {
        self.from
    }

    pub fn set_from(&mut self, from: DateTime<Utc>) {
        self.from = from;
    }

    /// End of the window.
    pub fn to_date(&self) -> DateTime<Utc> {
        self.to
    }

    pub fn set_to(&mut self, to: DateTime<Utc>) {
        self.to = to;
    }

    /// Assign `from` from a dynamic value; anything but a date is a `TypeMismatch`.
    pub fn try_set_from(&mut self, value: AttributeValue) -> FeedResult<()> {
        self.from = value.expect_date("dateFrom")?;
        Ok(())
    }

    /// Assign `to` from a dynamic value; anything but a date is a `TypeMismatch`.
    pub fn try_set_to(&mut self, value: AttributeValue) -> FeedResult<()> {
        self.to = value.expect_date("dateTo")?;
        Ok(())
    }
}

impl ValueObject for DateRange {
    const TYPE_NAME: &'static str = "DateRange";
}

impl Composite for DateRange {
    fn components(&self) -> Vec<Component> {
        vec![
            Component::new("from", AttributeValue::Date(self.from)),
            Component::new("to", AttributeValue::Date(self.to)),
        ]
    }
}
