use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use shopfeed_core::{Entity, FeedError, FeedResult};

use crate::field::{CUSTOM_LABEL_SLOTS, Field};
use crate::vocabulary::AdsDestination;
use crate::{
    AttributeValue, DateRange, InstallmentPlan, LoyaltyPoints, Money, ShippingDimension,
    ShippingRule, ShippingWeight, TaxRule, UnitPricingMeasure,
};

/// A single value or an ordered sequence of values, for fields that repeat.
#[derive(Debug, Clone, PartialEq)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values)
    }
}

impl<T: Into<AttributeValue>> From<OneOrMany<T>> for AttributeValue {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::One(v) => v.into(),
            OneOrMany::Many(vs) => vs.into(),
        }
    }
}

macro_rules! one_or_many_from {
    ($target:ty: $($source:ty => $convert:expr),+ $(,)?) => {
        $(
            impl From<$source> for OneOrMany<$target> {
                fn from(value: $source) -> Self {
                    Self::One($convert(value))
                }
            }
        )+
    };
}

one_or_many_from!(String:
    String => core::convert::identity,
    &str => str::to_string,
    AdsDestination => String::from,
);
one_or_many_from!(ShippingRule: ShippingRule => core::convert::identity);
one_or_many_from!(TaxRule: TaxRule => core::convert::identity);

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<AdsDestination>> for OneOrMany<String> {
    fn from(values: Vec<AdsDestination>) -> Self {
        Self::Many(values.into_iter().map(String::from).collect())
    }
}

/// A product record: one offer in the feed.
///
/// Every field may be unset. Values are checked against the field table on
/// assignment; a failed assignment leaves the record unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    values: BTreeMap<Field, AttributeValue>,
}

impl Product {
    pub fn new(id: impl Into<String>) -> Self {
        let mut product = Self::default();
        product.set_id(id);
        product
    }

    /// Assign a dynamic value to `field`.
    ///
    /// Fails with `TypeMismatch` when the value's shape does not match the
    /// field (e.g. a number assigned to `price`).
    pub fn set(&mut self, field: Field, value: impl Into<AttributeValue>) -> FeedResult<()> {
        let value = value.into();
        field.shape().check(field.name(), &value)?;
        self.values.insert(field, value);
        Ok(())
    }

    pub fn get(&self, field: Field) -> Option<&AttributeValue> {
        self.values.get(&field)
    }

    /// Unset `field`, returning its previous value.
    pub fn clear(&mut self, field: Field) -> Option<AttributeValue> {
        self.values.remove(&field)
    }

    pub fn is_set(&self, field: Field) -> bool {
        self.values.contains_key(&field)
    }

    /// Set fields with their values, in field-table order.
    pub fn populated_fields(&self) -> impl Iterator<Item = (Field, &AttributeValue)> + '_ {
        self.values.iter().map(|(field, value)| (*field, value))
    }

    pub fn field_count(&self) -> usize {
        self.values.len()
    }

    /// Assign all custom labels at once, in slot order; slots past the given
    /// labels are cleared.
    ///
    /// More than five labels is a `Validation` error and changes nothing.
    pub fn set_custom_labels<I, S>(&mut self, labels: I) -> FeedResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() > CUSTOM_LABEL_SLOTS {
            return Err(FeedError::validation(format!(
                "customLabels holds at most {CUSTOM_LABEL_SLOTS} labels, got {}",
                labels.len()
            )));
        }

        let mut labels = labels.into_iter();
        for slot in Field::CUSTOM_LABELS {
            match labels.next() {
                Some(label) => {
                    self.values.insert(slot, AttributeValue::Text(label));
                }
                None => {
                    self.values.remove(&slot);
                }
            }
        }
        Ok(())
    }

    /// Assign one custom label slot (`0..5`).
    pub fn set_custom_label(&mut self, index: usize, label: impl Into<String>) -> FeedResult<()> {
        let slot = Field::CUSTOM_LABELS.get(index).ok_or_else(|| {
            FeedError::validation(format!(
                "custom label index {index} out of range (0..{CUSTOM_LABEL_SLOTS})"
            ))
        })?;
        self.values.insert(*slot, AttributeValue::Text(label.into()));
        Ok(())
    }

    /// Custom label slots; `None` for unset (or non-text) slots.
    pub fn custom_labels(&self) -> [Option<&str>; CUSTOM_LABEL_SLOTS] {
        Field::CUSTOM_LABELS.map(|slot| self.get(slot).and_then(AttributeValue::as_text))
    }

    /// Enumerated fields holding text outside their documented vocabulary.
    pub fn unknown_vocabulary_values(&self) -> Vec<(Field, String)> {
        let mut unknown = Vec::new();
        for (field, value) in self.populated_fields() {
            let Some(vocabulary) = field.vocabulary() else {
                continue;
            };
            for item in value.as_slice() {
                if let Some(text) = item.as_text() {
                    if !vocabulary.contains(&text) {
                        unknown.push((field, text.to_string()));
                    }
                }
            }
        }
        unknown
    }

    fn put(&mut self, field: Field, value: AttributeValue) {
        self.values.insert(field, value);
    }

    fn texts(&self, field: Field) -> Vec<&str> {
        self.get(field)
            .map(|v| v.as_slice().iter().filter_map(AttributeValue::as_text).collect())
            .unwrap_or_default()
    }

    fn shapes<T: crate::attribute::AttributeShape>(&self, field: Field) -> Vec<&T> {
        self.get(field)
            .map(|v| v.as_slice().iter().filter_map(AttributeValue::as_shape::<T>).collect())
            .unwrap_or_default()
    }
}

impl Entity for Product {
    type Id = String;

    fn id(&self) -> Option<&String> {
        match self.get(Field::Id) {
            Some(AttributeValue::Text(id)) => Some(id),
            _ => None,
        }
    }
}

macro_rules! text_fields {
    ($($get:ident, $set:ident => $field:ident;)+) => {
        impl Product {
            $(
                pub fn $get(&self) -> Option<&str> {
                    self.get(Field::$field).and_then(AttributeValue::as_text)
                }

                pub fn $set(&mut self, value: impl Into<String>) {
                    self.put(Field::$field, AttributeValue::Text(value.into()));
                }
            )+
        }
    };
}

macro_rules! integer_fields {
    ($($get:ident, $set:ident => $field:ident;)+) => {
        impl Product {
            $(
                pub fn $get(&self) -> Option<i64> {
                    self.get(Field::$field).and_then(AttributeValue::as_integer)
                }

                pub fn $set(&mut self, value: i64) {
                    self.put(Field::$field, AttributeValue::Integer(value));
                }
            )+
        }
    };
}

macro_rules! bool_fields {
    ($($get:ident, $set:ident => $field:ident;)+) => {
        impl Product {
            $(
                pub fn $get(&self) -> Option<bool> {
                    self.get(Field::$field).and_then(AttributeValue::as_bool)
                }

                pub fn $set(&mut self, value: bool) {
                    self.put(Field::$field, AttributeValue::Bool(value));
                }
            )+
        }
    };
}

macro_rules! date_fields {
    ($($get:ident, $set:ident => $field:ident;)+) => {
        impl Product {
            $(
                pub fn $get(&self) -> Option<DateTime<Utc>> {
                    self.get(Field::$field).and_then(AttributeValue::as_date)
                }

                pub fn $set(&mut self, value: DateTime<Utc>) {
                    self.put(Field::$field, AttributeValue::Date(value));
                }
            )+
        }
    };
}

macro_rules! composite_fields {
    ($($get:ident, $set:ident => $field:ident: $t:ty;)+) => {
        impl Product {
            $(
                pub fn $get(&self) -> Option<&$t> {
                    self.get(Field::$field).and_then(AttributeValue::as_shape::<$t>)
                }

                pub fn $set(&mut self, value: $t) {
                    self.put(Field::$field, value.into());
                }
            )+
        }
    };
}

/// Repeated fields: setters take one value or a `Vec`, getters always
/// return the values as a sequence.
macro_rules! repeated_fields {
    ($($get:ident, $set:ident => $field:ident: $item:ty, $owned:ty, $collect:ident;)+) => {
        impl Product {
            $(
                pub fn $get(&self) -> Vec<&$item> {
                    self.$collect(Field::$field)
                }

                pub fn $set(&mut self, value: impl Into<OneOrMany<$owned>>) {
                    let value: OneOrMany<$owned> = value.into();
                    self.put(Field::$field, value.into());
                }
            )+
        }
    };
}

text_fields! {
    title, set_title => Title;
    description, set_description => Description;
    link, set_link => Link;
    image_link, set_image_link => ImageLink;
    mobile_link, set_mobile_link => MobileLink;
    availability, set_availability => Availability;
    google_product_category, set_google_product_category => GoogleProductCategory;
    brand, set_brand => Brand;
    mpn, set_mpn => Mpn;
    condition, set_condition => Condition;
    energy_efficiency_class, set_energy_efficiency_class => EnergyEfficiencyClass;
    min_energy_efficiency_class, set_min_energy_efficiency_class => MinEnergyEfficiencyClass;
    max_energy_efficiency_class, set_max_energy_efficiency_class => MaxEnergyEfficiencyClass;
    age_group, set_age_group => AgeGroup;
    color, set_color => Color;
    gender, set_gender => Gender;
    material, set_material => Material;
    pattern, set_pattern => Pattern;
    size, set_size => Size;
    size_type, set_size_type => SizeType;
    size_system, set_size_system => SizeSystem;
    item_group_id, set_item_group_id => ItemGroupId;
    adwords_redirect, set_adwords_redirect => AdwordsRedirect;
    shipping_label, set_shipping_label => ShippingLabel;
    tax_category, set_tax_category => TaxCategory;
}

impl Product {
    pub fn id(&self) -> Option<&str> {
        Entity::id(self).map(String::as_str)
    }

    pub fn set_id(&mut self, value: impl Into<String>) {
        self.put(Field::Id, AttributeValue::Text(value.into()));
    }
}

integer_fields! {
    multipack, set_multipack => Multipack;
    min_handling_time, set_min_handling_time => MinHandlingTime;
    max_handling_time, set_max_handling_time => MaxHandlingTime;
}

bool_fields! {
    identifier_exists, set_identifier_exists => IdentifierExists;
    adult, set_adult => Adult;
    is_bundle, set_is_bundle => IsBundle;
}

date_fields! {
    availability_date, set_availability_date => AvailabilityDate;
    expiration_date, set_expiration_date => ExpirationDate;
}

composite_fields! {
    price, set_price => Price: Money;
    sale_price, set_sale_price => SalePrice: Money;
    sale_price_effective_date, set_sale_price_effective_date => SalePriceEffectiveDate: DateRange;
    cost_of_goods_sold, set_cost_of_goods_sold => CostOfGoodsSold: Money;
    unit_pricing_measure, set_unit_pricing_measure => UnitPricingMeasure: UnitPricingMeasure;
    unit_pricing_base_measure, set_unit_pricing_base_measure => UnitPricingBaseMeasure: UnitPricingMeasure;
    installment, set_installment => Installment: InstallmentPlan;
    loyalty_points, set_loyalty_points => LoyaltyPoints: LoyaltyPoints;
    shipping_weight, set_shipping_weight => ShippingWeight: ShippingWeight;
    shipping_length, set_shipping_length => ShippingLength: ShippingDimension;
    shipping_width, set_shipping_width => ShippingWidth: ShippingDimension;
    shipping_height, set_shipping_height => ShippingHeight: ShippingDimension;
}

repeated_fields! {
    additional_image_links, set_additional_image_link => AdditionalImageLink: str, String, texts;
    product_types, set_product_type => ProductType: str, String, texts;
    gtins, set_gtin => Gtin: str, String, texts;
    promotion_ids, set_promotion_id => PromotionId: str, String, texts;
    included_destinations, set_included_destination => IncludedDestination: str, String, texts;
    excluded_destinations, set_excluded_destination => ExcludedDestination: str, String, texts;
    shipping, set_shipping => Shipping: ShippingRule, ShippingRule, shapes;
    taxes, set_tax => Tax: TaxRule, TaxRule, shapes;
}
