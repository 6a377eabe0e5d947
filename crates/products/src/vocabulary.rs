//! Documented value sets for enumerated product fields.
//!
//! These are allowed-value guidance only: product fields store plain strings
//! and accept values outside these sets, so new platform values keep working.

use serde::{Deserialize, Serialize};

use crate::AttributeValue;

macro_rules! vocabulary {
    ($(#[$meta:meta])* $t:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $t {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $t {
            /// Wire values of every variant, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($s),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }

            pub fn parse(s: &str) -> Option<Self> {
                match s {
                    $($s => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.as_str().to_string()
            }
        }

        impl From<$t> for AttributeValue {
            fn from(value: $t) -> Self {
                AttributeValue::Text(value.as_str().to_string())
            }
        }
    };
}

vocabulary!(
    /// Stock status of a product.
    Availability {
        InStock => "in stock",
        OutOfStock => "out of stock",
        Preorder => "preorder",
    }
);

vocabulary!(
    Condition {
        New => "new",
        Refurbished => "refurbished",
        Used => "used",
    }
);

vocabulary!(
    /// Demographic a product is designed for.
    AgeGroup {
        Newborn => "newborn",
        Infant => "infant",
        Toddler => "toddler",
        Kids => "kids",
        Adult => "adult",
    }
);

vocabulary!(
    Gender {
        Male => "male",
        Female => "female",
        Unisex => "unisex",
    }
);

vocabulary!(
    /// Cut of an apparel product.
    SizeType {
        Regular => "regular",
        Petite => "petite",
        Plus => "plus",
        Big => "big",
        Tall => "tall",
        Maternity => "maternity",
    }
);

vocabulary!(
    /// Country sizing system used for `size`.
    SizeSystem {
        Au => "AU",
        Br => "BR",
        Cn => "CN",
        De => "DE",
        Eu => "EU",
        Fr => "FR",
        It => "IT",
        Jp => "JP",
        Mex => "MEX",
        Uk => "UK",
        Us => "US",
    }
);

vocabulary!(
    /// Ad surface a product can be included in or excluded from.
    AdsDestination {
        Shopping => "Shopping",
        ShoppingActions => "ShoppingActions",
        DisplayAds => "DisplayAds",
    }
);
