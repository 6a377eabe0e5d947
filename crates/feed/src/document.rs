//! The built feed: an ordered tree of entries and fields.

use serde::Serialize;

use shopfeed_core::{FeedError, FeedResult};

/// A field value in the feed: plain text, or a group of named sub-fields
/// for composite attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Group(Vec<FeedField>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Group(_) => None,
        }
    }

    /// First sub-field named `name` of a group.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        match self {
            FieldValue::Group(fields) => fields.iter().find(|f| f.name == name).map(|f| &f.value),
            FieldValue::Text(_) => None,
        }
    }
}

/// One emitted field, named by its wire name (without namespace prefix).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedField {
    pub name: &'static str,
    pub value: FieldValue,
}

/// The serialized form of one product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedEntry {
    pub id: String,
    pub fields: Vec<FeedField>,
}

impl FeedEntry {
    /// First value emitted under `name`.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|f| f.name == name).map(|f| &f.value)
    }

    /// Every value emitted under `name`, in emission order.
    pub fn values(&self, name: &str) -> Vec<&FieldValue> {
        self.fields
            .iter()
            .filter(|f| f.name == name)
            .map(|f| &f.value)
            .collect()
    }

    /// Text of the first value emitted under `name`.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    /// Distinct field names, in emission order.
    pub fn field_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for field in &self.fields {
            if !names.contains(&field.name) {
                names.push(field.name);
            }
        }
        names
    }
}

/// A complete feed: channel metadata plus one entry per product, in the
/// order products were added to the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedDocument {
    pub title: String,
    pub link: String,
    pub description: String,
    pub entries: Vec<FeedEntry>,
    #[serde(skip)]
    pub(crate) indent: Option<usize>,
}

impl FeedDocument {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, id: &str) -> Option<&FeedEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Pretty-printed JSON rendering of the document.
    pub fn to_json(&self) -> FeedResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| FeedError::serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    fn entry() -> FeedEntry {
        FeedEntry {
            id: "sku-1".into(),
            fields: vec![
                FeedField { name: "id", value: text("sku-1") },
                FeedField { name: "gtin", value: text("1") },
                FeedField { name: "gtin", value: text("2") },
                FeedField {
                    name: "price",
                    value: FieldValue::Group(vec![
                        FeedField { name: "value", value: text("19.99") },
                        FeedField { name: "currency", value: text("USD") },
                    ]),
                },
            ],
        }
    }

    #[test]
    fn lookups_by_wire_name() {
        let entry = entry();
        assert_eq!(entry.text("id"), Some("sku-1"));
        assert_eq!(entry.values("gtin"), vec![&text("1"), &text("2")]);
        assert_eq!(entry.field_names(), vec!["id", "gtin", "price"]);
        let price = entry.get("price").unwrap();
        assert_eq!(price.get("currency"), Some(&text("USD")));
        assert_eq!(price.as_text(), None);
    }

    #[test]
    fn json_groups_nest_and_text_stays_flat() {
        let doc = FeedDocument {
            title: "Feed".into(),
            link: String::new(),
            description: String::new(),
            entries: vec![entry()],
            indent: None,
        };
        let json: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        let fields = &json["entries"][0]["fields"];
        assert_eq!(fields[0]["value"], "sku-1");
        assert_eq!(fields[3]["value"][1]["name"], "currency");
        assert!(json.get("indent").is_none());
    }
}
