//! RSS 2.0 rendering of a feed document, with product attributes in the
//! Google Shopping `g:` namespace.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use shopfeed_core::{FeedError, FeedResult};

use crate::document::{FeedDocument, FeedField, FieldValue};

/// Namespace URI bound to the `g` prefix.
pub const GOOGLE_NAMESPACE: &str = "http://base.google.com/ns/1.0";

fn xml_error(e: impl core::fmt::Display) -> FeedError {
    FeedError::serialization(format!("xml write failed: {e}"))
}

impl FeedDocument {
    /// Render the document as an XML string.
    pub fn to_xml(&self) -> FeedResult<String> {
        let mut buf = Vec::new();
        self.write_xml(&mut buf)?;
        String::from_utf8(buf).map_err(xml_error)
    }

    /// Write the document as XML to `out`. All text content is escaped.
    pub fn write_xml<W: Write>(&self, out: W) -> FeedResult<()> {
        let mut writer = match self.indent {
            Some(n) => Writer::new_with_indent(out, b' ', n),
            None => Writer::new(out),
        };

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_error)?;

        let mut rss = BytesStart::new("rss");
        rss.push_attribute(("version", "2.0"));
        rss.push_attribute(("xmlns:g", GOOGLE_NAMESPACE));
        writer.write_event(Event::Start(rss)).map_err(xml_error)?;
        start(&mut writer, "channel")?;

        check_text("channel.title", &self.title)?;
        check_text("channel.link", &self.link)?;
        check_text("channel.description", &self.description)?;

        text_element(&mut writer, "title", &self.title)?;
        text_element(&mut writer, "link", &self.link)?;
        text_element(&mut writer, "description", &self.description)?;

        for entry in &self.entries {
            start(&mut writer, "item")?;
            for field in &entry.fields {
                write_field(&mut writer, field)?;
            }
            end(&mut writer, "item")?;
        }

        end(&mut writer, "channel")?;
        end(&mut writer, "rss")?;
        Ok(())
    }
}

/// Characters allowed in XML 1.0 character data.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Fail with `Serialization` if `text` holds a character XML cannot carry,
/// even escaped.
pub(crate) fn check_text(path: &str, text: &str) -> FeedResult<()> {
    match text.chars().find(|c| !is_xml_char(*c)) {
        None => Ok(()),
        Some(c) => Err(FeedError::serialization(format!(
            "{path} contains a character not allowed in XML (U+{:04X})",
            c as u32
        ))),
    }
}

fn write_field<W: Write>(writer: &mut Writer<W>, field: &FeedField) -> FeedResult<()> {
    let name = format!("g:{}", field.name);
    match &field.value {
        FieldValue::Text(text) => text_element(writer, &name, text),
        FieldValue::Group(children) => {
            start(writer, &name)?;
            for child in children {
                write_field(writer, child)?;
            }
            end(writer, &name)
        }
    }
}

fn start<W: Write>(writer: &mut Writer<W>, name: &str) -> FeedResult<()> {
    writer
        .write_event(Event::Start(BytesStart::new(name)))
        .map_err(xml_error)
}

fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> FeedResult<()> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_error)
}

fn text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> FeedResult<()> {
    start(writer, name)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(xml_error)?;
    end(writer, name)
}
