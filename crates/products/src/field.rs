//! Declarative field table for product records.
//!
//! One row per product attribute: its attribute name, its wire name in the
//! feed, the value shape it accepts, and (for enumerated fields) the
//! documented vocabulary. Both [`crate::Product::set`] and the feed builder's
//! emission loop are driven by this table.

use serde::{Deserialize, Serialize};

use shopfeed_core::{FeedError, FeedResult, ValueObject};

use crate::vocabulary::{AdsDestination, AgeGroup, Availability, Condition, Gender, SizeSystem, SizeType};
use crate::{
    AttributeValue, DateRange, InstallmentPlan, LoyaltyPoints, Money, ShippingDimension,
    ShippingRule, ShippingWeight, TaxRule, UnitPricingMeasure,
};

/// Value shape a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Any value, stored verbatim.
    Any,
    /// Text only.
    Text,
    /// A date/time.
    Date,
    /// Exactly the named composite type.
    One(&'static str),
    /// Any single value or a list of values.
    Repeated,
    /// The named composite type, or a list of it.
    RepeatedOf(&'static str),
}

impl Shape {
    /// Human-readable description used as the `expected` part of a `TypeMismatch`.
    pub fn describe(self) -> String {
        match self {
            Shape::Any | Shape::Repeated => "any value".to_string(),
            Shape::Text => "Text".to_string(),
            Shape::Date => "Date".to_string(),
            Shape::One(t) => t.to_string(),
            Shape::RepeatedOf(t) => format!("{t} or list of {t}"),
        }
    }

    /// Check `value` against this shape; `field` names the field in the error.
    pub fn check(self, field: &str, value: &AttributeValue) -> FeedResult<()> {
        let ok = match self {
            Shape::Any | Shape::Repeated => true,
            Shape::Text => matches!(value, AttributeValue::Text(_)),
            Shape::Date => matches!(value, AttributeValue::Date(_)),
            Shape::One(t) => value.kind() == t,
            Shape::RepeatedOf(t) => match value {
                AttributeValue::List(items) => items.iter().all(|item| item.kind() == t),
                single => single.kind() == t,
            },
        };

        if ok {
            Ok(())
        } else {
            Err(FeedError::type_mismatch(field, self.describe(), value.kind()))
        }
    }

    pub fn is_repeated(self) -> bool {
        matches!(self, Shape::Repeated | Shape::RepeatedOf(_))
    }
}

/// One row of the field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Attribute name on the product record (e.g. `salePrice`).
    pub name: &'static str,
    /// Element name in the feed, without namespace prefix (e.g. `sale_price`).
    pub wire_name: &'static str,
    pub shape: Shape,
    /// Documented allowed values; not enforced.
    pub vocabulary: Option<&'static [&'static str]>,
}

macro_rules! field_table {
    ($($variant:ident => $name:literal, $wire:literal, $shape:expr $(, $vocab:expr)?;)+) => {
        /// A product attribute. Declaration order is emission order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum Field {
            $($variant),+
        }

        impl Field {
            /// Every field, in emission order.
            pub const ALL: &'static [Field] = &[$(Field::$variant),+];

            pub fn spec(self) -> FieldSpec {
                match self {
                    $(Field::$variant => FieldSpec {
                        name: $name,
                        wire_name: $wire,
                        shape: $shape,
                        vocabulary: field_table!(@vocab $($vocab)?),
                    }),+
                }
            }
        }
    };
    (@vocab) => { None };
    (@vocab $vocab:expr) => { Some($vocab) };
}

field_table! {
    Id => "id", "id", Shape::Text;
    Title => "title", "title", Shape::Any;
    Description => "description", "description", Shape::Any;
    Link => "link", "link", Shape::Any;
    ImageLink => "imageLink", "image_link", Shape::Any;
    AdditionalImageLink => "additionalImageLink", "additional_image_link", Shape::Repeated;
    MobileLink => "mobileLink", "mobile_link", Shape::Any;
    Availability => "availability", "availability", Shape::Any, Availability::VALUES;
    AvailabilityDate => "availabilityDate", "availability_date", Shape::Date;
    ExpirationDate => "expirationDate", "expiration_date", Shape::Date;
    Price => "price", "price", Shape::One(Money::TYPE_NAME);
    SalePrice => "salePrice", "sale_price", Shape::One(Money::TYPE_NAME);
    SalePriceEffectiveDate => "salePriceEffectiveDate", "sale_price_effective_date", Shape::One(DateRange::TYPE_NAME);
    CostOfGoodsSold => "costOfGoodsSold", "cost_of_goods_sold", Shape::One(Money::TYPE_NAME);
    UnitPricingMeasure => "unitPricingMeasure", "unit_pricing_measure", Shape::One(UnitPricingMeasure::TYPE_NAME);
    UnitPricingBaseMeasure => "unitPricingBaseMeasure", "unit_pricing_base_measure", Shape::One(UnitPricingMeasure::TYPE_NAME);
    Installment => "installment", "installment", Shape::One(InstallmentPlan::TYPE_NAME);
    LoyaltyPoints => "loyaltyPoints", "loyalty_points", Shape::One(LoyaltyPoints::TYPE_NAME);
    GoogleProductCategory => "googleProductCategory", "google_product_category", Shape::Any;
    ProductType => "productType", "product_type", Shape::Repeated;
    Brand => "brand", "brand", Shape::Any;
    Gtin => "gtin", "gtin", Shape::Repeated;
    Mpn => "mpn", "mpn", Shape::Any;
    IdentifierExists => "identifierExists", "identifier_exists", Shape::Any;
    Condition => "condition", "condition", Shape::Any, Condition::VALUES;
    Adult => "adult", "adult", Shape::Any;
    Multipack => "multipack", "multipack", Shape::Any;
    IsBundle => "isBundle", "is_bundle", Shape::Any;
    EnergyEfficiencyClass => "energyEfficiencyClass", "energy_efficiency_class", Shape::Any;
    MinEnergyEfficiencyClass => "minEnergyEfficiencyClass", "min_energy_efficiency_class", Shape::Any;
    MaxEnergyEfficiencyClass => "maxEnergyEfficiencyClass", "max_energy_efficiency_class", Shape::Any;
    AgeGroup => "ageGroup", "age_group", Shape::Any, AgeGroup::VALUES;
    Color => "color", "color", Shape::Any;
    Gender => "gender", "gender", Shape::Any, Gender::VALUES;
    Material => "material", "material", Shape::Any;
    Pattern => "pattern", "pattern", Shape::Any;
    Size => "size", "size", Shape::Any;
    SizeType => "sizeType", "size_type", Shape::Any, SizeType::VALUES;
    SizeSystem => "sizeSystem", "size_system", Shape::Any, SizeSystem::VALUES;
    ItemGroupId => "itemGroupId", "item_group_id", Shape::Any;
    AdwordsRedirect => "adwordsRedirect", "ads_redirect", Shape::Any;
    CustomLabel0 => "customLabel0", "custom_label_0", Shape::Any;
    CustomLabel1 => "customLabel1", "custom_label_1", Shape::Any;
    CustomLabel2 => "customLabel2", "custom_label_2", Shape::Any;
    CustomLabel3 => "customLabel3", "custom_label_3", Shape::Any;
    CustomLabel4 => "customLabel4", "custom_label_4", Shape::Any;
    PromotionId => "promotionId", "promotion_id", Shape::Repeated;
    IncludedDestination => "includedDestination", "included_destination", Shape::Repeated, AdsDestination::VALUES;
    ExcludedDestination => "excludedDestination", "excluded_destination", Shape::Repeated, AdsDestination::VALUES;
    Shipping => "shipping", "shipping", Shape::RepeatedOf(ShippingRule::TYPE_NAME);
    ShippingLabel => "shippingLabel", "shipping_label", Shape::Any;
    ShippingWeight => "shippingWeight", "shipping_weight", Shape::One(ShippingWeight::TYPE_NAME);
    ShippingLength => "shippingLength", "shipping_length", Shape::One(ShippingDimension::TYPE_NAME);
    ShippingWidth => "shippingWidth", "shipping_width", Shape::One(ShippingDimension::TYPE_NAME);
    ShippingHeight => "shippingHeight", "shipping_height", Shape::One(ShippingDimension::TYPE_NAME);
    MinHandlingTime => "minHandlingTime", "min_handling_time", Shape::Any;
    MaxHandlingTime => "maxHandlingTime", "max_handling_time", Shape::Any;
    Tax => "tax", "tax", Shape::RepeatedOf(TaxRule::TYPE_NAME);
    TaxCategory => "taxCategory", "tax_category", Shape::Any;
}

/// Number of custom label slots on a product.
pub const CUSTOM_LABEL_SLOTS: usize = 5;

impl Field {
    /// Custom label slots, in order.
    pub const CUSTOM_LABELS: [Field; CUSTOM_LABEL_SLOTS] = [
        Field::CustomLabel0,
        Field::CustomLabel1,
        Field::CustomLabel2,
        Field::CustomLabel3,
        Field::CustomLabel4,
    ];

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn wire_name(self) -> &'static str {
        self.spec().wire_name
    }

    pub fn shape(self) -> Shape {
        self.spec().shape
    }

    pub fn vocabulary(self) -> Option<&'static [&'static str]> {
        self.spec().vocabulary
    }

    /// Look up a field by its attribute name (e.g. `salePrice`).
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.name() == name)
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
