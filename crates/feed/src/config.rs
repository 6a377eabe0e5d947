//! Builder configuration.

use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use shopfeed_core::{FeedError, FeedResult};

/// How every date in the feed is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    /// RFC 3339 with seconds precision and `Z` suffix: `2024-06-01T12:00:00Z`.
    #[default]
    #[serde(rename = "datetime")]
    DateTime,
    /// Calendar date only: `2024-06-01`.
    #[serde(rename = "date")]
    DateOnly,
}

impl DateFormat {
    /// Format `value` for the field at `path`.
    ///
    /// Both formats carry a four-digit year; dates outside years 0000-9999
    /// have no representation and fail with `Serialization`.
    pub fn format(self, path: &str, value: &DateTime<Utc>) -> FeedResult<String> {
        let year = value.year();
        if !(0..=9999).contains(&year) {
            return Err(FeedError::serialization(format!(
                "{path}: year {year} is outside 0000-9999"
            )));
        }
        Ok(match self {
            DateFormat::DateTime => value.to_rfc3339_opts(SecondsFormat::Secs, true),
            DateFormat::DateOnly => value.format("%Y-%m-%d").to_string(),
        })
    }
}

impl core::str::FromStr for DateFormat {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "datetime" => Ok(DateFormat::DateTime),
            "date" => Ok(DateFormat::DateOnly),
            other => Err(FeedError::validation(format!("unknown date format: {other}"))),
        }
    }
}

/// Feed builder configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Channel title
    pub title: String,
    /// Channel link (usually the shop's home page)
    pub link: String,
    /// Channel description
    pub description: String,
    pub date_format: DateFormat,
    /// Spaces per indentation level in XML output; `None` writes compact XML.
    pub indent: Option<usize>,
    /// Log a warning for enumerated fields holding values outside their vocabulary.
    pub warn_on_unknown_values: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            title: "Product feed".to_string(),
            link: String::new(),
            description: String::new(),
            date_format: DateFormat::DateTime,
            indent: Some(2),
            warn_on_unknown_values: true,
        }
    }
}

impl FeedConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }

    pub fn with_indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_unknown_value_warnings(mut self, enabled: bool) -> Self {
        self.warn_on_unknown_values = enabled;
        self
    }

    /// Read configuration from `SHOPFEED_*` environment variables.
    ///
    /// Unset variables keep their defaults; unparseable ones are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`FeedConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(title) = lookup("SHOPFEED_TITLE") {
            config.title = title;
        }
        if let Some(link) = lookup("SHOPFEED_LINK") {
            config.link = link;
        }
        if let Some(description) = lookup("SHOPFEED_DESCRIPTION") {
            config.description = description;
        }

        if let Some(raw) = lookup("SHOPFEED_DATE_FORMAT") {
            match raw.parse() {
                Ok(format) => config.date_format = format,
                Err(_) => {
                    tracing::warn!(value = %raw, "SHOPFEED_DATE_FORMAT not recognized; using default")
                }
            }
        }

        if let Some(raw) = lookup("SHOPFEED_INDENT") {
            if raw.trim().eq_ignore_ascii_case("none") {
                config.indent = None;
            } else {
                match raw.trim().parse::<usize>() {
                    Ok(n) => config.indent = Some(n),
                    Err(_) => {
                        tracing::warn!(value = %raw, "SHOPFEED_INDENT not a number; using default")
                    }
                }
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn date_formats() {
        let t = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 5).unwrap();
        assert_eq!(DateFormat::DateTime.format("d", &t).unwrap(), "2024-06-01T12:30:05Z");
        assert_eq!(DateFormat::DateOnly.format("d", &t).unwrap(), "2024-06-01");
    }

    #[test]
    fn years_outside_four_digits_are_rejected() {
        let far = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
        let early = Utc.with_ymd_and_hms(-1, 12, 31, 0, 0, 0).unwrap();
        for format in [DateFormat::DateTime, DateFormat::DateOnly] {
            assert_eq!(
                format.format("expiration_date", &far).unwrap_err(),
                FeedError::serialization("expiration_date: year 10000 is outside 0000-9999")
            );
            assert!(format.format("expiration_date", &early).is_err());
        }

        let last = Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap();
        let text = DateFormat::DateTime.format("d", &last).unwrap();
        assert_eq!(text, "9999-12-31T23:59:59Z");
        assert!(DateTime::parse_from_rfc3339(&text).is_ok());
    }

    #[test]
    fn from_lookup_reads_all_variables() {
        let config = FeedConfig::from_lookup(lookup_from(&[
            ("SHOPFEED_TITLE", "Acme"),
            ("SHOPFEED_LINK", "https://acme.example"),
            ("SHOPFEED_DESCRIPTION", "All products"),
            ("SHOPFEED_DATE_FORMAT", "date"),
            ("SHOPFEED_INDENT", "none"),
        ]));
        assert_eq!(config.title, "Acme");
        assert_eq!(config.link, "https://acme.example");
        assert_eq!(config.description, "All products");
        assert_eq!(config.date_format, DateFormat::DateOnly);
        assert_eq!(config.indent, None);
    }

    #[test]
    fn from_lookup_ignores_unparseable_values() {
        let config = FeedConfig::from_lookup(lookup_from(&[
            ("SHOPFEED_DATE_FORMAT", "julian"),
            ("SHOPFEED_INDENT", "wide"),
        ]));
        assert_eq!(config, FeedConfig::default());
    }

    #[test]
    fn deserializes_partial_config_with_defaults() {
        let config: FeedConfig =
            serde_json::from_str(r#"{"title":"Shoes","date_format":"date"}"#).unwrap();
        assert_eq!(config.title, "Shoes");
        assert_eq!(config.date_format, DateFormat::DateOnly);
        assert_eq!(config.indent, Some(2));
    }
}
