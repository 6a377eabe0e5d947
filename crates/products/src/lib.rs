//! Product data model for shopping feeds.
//!
//! This crate contains the product record and its composite attributes
//! (prices, measures, date ranges, installment plans, loyalty points, tax and
//! shipping rules), implemented purely as in-memory domain values (no IO, no
//! serialization format).

pub mod attribute;
pub mod date_range;
pub mod field;
pub mod installment;
pub mod loyalty;
pub mod measure;
pub mod money;
pub mod product;
pub mod shipping;
pub mod tax;
pub mod vocabulary;

pub use attribute::{AttributeShape, AttributeValue, Component, Composite};
pub use date_range::DateRange;
pub use field::{CUSTOM_LABEL_SLOTS, Field, FieldSpec, Shape};
pub use installment::InstallmentPlan;
pub use loyalty::LoyaltyPoints;
pub use measure::{MeasuredValue, ShippingDimension, ShippingWeight, UnitPricingMeasure};
pub use money::Money;
pub use product::{OneOrMany, Product};
pub use shipping::ShippingRule;
pub use tax::TaxRule;
pub use vocabulary::{AdsDestination, AgeGroup, Availability, Condition, Gender, SizeSystem, SizeType};
