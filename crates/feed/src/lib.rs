//! `shopfeed-feed` — assembles product records into a shopping feed.
//!
//! The [`FeedBuilder`] accumulates validated [`shopfeed_products::Product`]
//! records and produces a [`FeedDocument`]: an ordered, format-neutral tree
//! that renders to RSS 2.0 XML (Google Shopping `g:` namespace) or JSON.
//! Writing the result to disk or uploading it is left to the caller.

pub mod builder;
pub mod config;
pub mod document;
mod emit;
pub mod xml;

pub use builder::{FeedBuilder, RecordError};
pub use config::{DateFormat, FeedConfig};
pub use document::{FeedDocument, FeedEntry, FeedField, FieldValue};
pub use xml::GOOGLE_NAMESPACE;
