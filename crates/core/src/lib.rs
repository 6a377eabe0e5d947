//! `shopfeed-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the product model
//! and the feed builder (no serialization or IO concerns).

pub mod entity;
pub mod error;
pub mod value_object;

pub use entity::Entity;
pub use error::{FeedError, FeedResult};
pub use value_object::ValueObject;
