//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two prices of `19.99 USD` are the same price.

/// Marker trait for value objects.
///
/// Every composite attribute of a product (money, measures, date ranges,
/// installment plans, loyalty points, tax and shipping rules) is a value object.
/// A product record holds its own copy; nothing keeps a reference back to the
/// record that contains it.
///
/// ## Design Constraints
///
/// - **Clone**: a value is copied into the record that uses it
/// - **PartialEq**: values compare by their sub-fields
/// - **Debug**: values show up in error messages and test failures
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Money {
///     amount: f64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {}
///
/// let m1 = Money { amount: 19.99, currency: "USD".to_string() };
/// let m2 = Money { amount: 19.99, currency: "USD".to_string() };
/// assert_eq!(m1, m2);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {
    /// Short type name used in `TypeMismatch` messages.
    const TYPE_NAME: &'static str;
}
