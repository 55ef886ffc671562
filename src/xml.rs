//! XML encoding of records.
//!
//! Each record becomes a single `<root>` element with one child element per
//! field, named after the field and holding the field's textual value:
//!
//! ```text
//! <root>
//!   <name>John</name>
//!   <age>30</age>
//! </root>
//! ```
//!
//! No XML declaration, attributes or namespaces are written. Text content is
//! escaped by `quick-xml`. Characters XML 1.0 cannot carry at all (control
//! characters other than tab, newline and carriage return, plus U+FFFE and
//! U+FFFF) are rejected rather than escaped.

use crate::error::{FormatError, Result};
use crate::formats::Encoder;
use crate::record::Record;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Media type of [`XmlEncoder`] output.
pub const CONTENT_TYPE: &str = "application/xml";

/// Name of the wrapping element.
pub const ROOT_ELEMENT: &str = "root";

const INDENT_WIDTH: usize = 2;

/// Convert a record to XML.
///
/// # Examples
///
/// ```
/// use multiformat::{record, xml};
///
/// let xml = xml::record_to_xml(&record! { "name" => "John", "age" => 30 })?;
/// assert_eq!(xml, "<root>\n  <name>John</name>\n  <age>30</age>\n</root>");
/// # Ok::<(), multiformat::FormatError>(())
/// ```
///
/// # Errors
///
/// Returns [`FormatError::UnsupportedValue`] if a field name is not a valid
/// XML element name or a value holds a character XML 1.0 forbids.
pub fn record_to_xml(record: &Record) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT_WIDTH);

    write(&mut writer, Event::Start(BytesStart::new(ROOT_ELEMENT)))?;
    for (name, value) in record.iter() {
        if !is_element_name(name) {
            return Err(FormatError::unsupported_field(
                "xml",
                name,
                "field name is not a valid XML element name",
            ));
        }
        let text = value.to_string();
        if !text.chars().all(is_xml_char) {
            return Err(FormatError::unsupported_field(
                "xml",
                name,
                "value contains a character XML 1.0 does not allow",
            ));
        }
        write(&mut writer, Event::Start(BytesStart::new(name)))?;
        write(&mut writer, Event::Text(BytesText::new(&text)))?;
        write(&mut writer, Event::End(BytesEnd::new(name)))?;
    }
    write(&mut writer, Event::End(BytesEnd::new(ROOT_ELEMENT)))?;

    String::from_utf8(writer.into_inner()).map_err(|e| FormatError::encoding("xml", e))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| FormatError::encoding("xml", e))
}

/// Check a field name against the XML `Name` production, minus the colon
/// (namespaces are never written).
fn is_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// The XML 1.0 `Char` production. Surrogates cannot occur in a `char`.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

/// [`Encoder`] for `application/xml`.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlEncoder;

impl Encoder for XmlEncoder {
    fn encode(&self, record: &Record) -> Result<String> {
        record_to_xml(record)
    }

    fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }
}
