//! `dublin_core.xml` reading and writing.
//!
//! ```xml
//! <dublin_core>
//!   <dcvalue element="contributor" qualifier="author" language="en">Doe, Jane</dcvalue>
//! </dublin_core>
//! ```

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use super::{MetadataElement, MetadataError, MetadataRecord};

/// Root element of a metadata document
pub const ROOT_TAG: &str = "dublin_core";

/// Element wrapping one metadata value
pub const VALUE_TAG: &str = "dcvalue";

/// Schema assumed when the root element carries no `schema` attribute
pub const DEFAULT_SCHEMA: &str = "dc";

impl MetadataRecord {
    /// Serialize the record to a `dublin_core.xml` document.
    ///
    /// One `dcvalue` per element in insertion order. `qualifier` and
    /// `language` attributes are only written when set. No XML declaration
    /// is emitted.
    pub fn to_xml(&self) -> Result<String, MetadataError> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

        writer.write_event(Event::Start(BytesStart::new(ROOT_TAG)))?;
        for item in self.iter() {
            let mut tag = BytesStart::new(VALUE_TAG);
            tag.push_attribute(("element", item.element()));
            if let Some(qualifier) = item.qualifier() {
                tag.push_attribute(("qualifier", qualifier));
            }
            if let Some(language) = item.language() {
                tag.push_attribute(("language", language));
            }

            writer.write_event(Event::Start(tag))?;
            writer.write_event(Event::Text(BytesText::new(item.value())))?;
            writer.write_event(Event::End(BytesEnd::new(VALUE_TAG)))?;
        }
        writer.write_event(Event::End(BytesEnd::new(ROOT_TAG)))?;

        String::from_utf8(writer.into_inner()).map_err(|e| {
            MetadataError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })
    }

    /// Parse a `dublin_core.xml` document back into a record.
    ///
    /// Names are rebuilt as `schema.element[.qualifier]`, taking the schema
    /// from the root's `schema` attribute (`dc` when absent). Values that
    /// are empty are skipped. Characters outside the XML 1.0 character
    /// range are rejected, whether literal or written as references.
    pub fn from_xml(xml: &str) -> Result<Self, MetadataError> {
        if let Some((offset, character)) = find_illegal_char(xml) {
            return Err(MetadataError::IllegalCharacter {
                character,
                field: "document".to_string(),
                line: Some(line_at(xml, offset)),
            });
        }

        let mut reader = Reader::from_str(xml);
        let mut record = MetadataRecord::new();
        let mut schema = DEFAULT_SCHEMA.to_string();
        let mut root = RootState::NotSeen;
        let mut pending: Option<PendingValue> = None;

        loop {
            let position = reader.buffer_position() as usize;
            let event = reader.read_event()?;
            let line = || line_at(xml, position);

            match event {
                Event::Start(e) if e.name().as_ref() == ROOT_TAG.as_bytes() => {
                    schema = open_root(&root, &e, line())?.unwrap_or(schema);
                    root = RootState::Open;
                }
                Event::Empty(e) if e.name().as_ref() == ROOT_TAG.as_bytes() => {
                    // `<dublin_core/>` is a complete, empty document
                    schema = open_root(&root, &e, line())?.unwrap_or(schema);
                    root = RootState::Closed;
                }
                Event::Start(e) if e.name().as_ref() == VALUE_TAG.as_bytes() => {
                    if !matches!(root, RootState::Open) || pending.is_some() {
                        return Err(MetadataError::parse(line(), "misplaced <dcvalue>"));
                    }
                    pending = Some(PendingValue::from_start(&e, line())?);
                }
                Event::Empty(e) if e.name().as_ref() == VALUE_TAG.as_bytes() => {
                    if !matches!(root, RootState::Open) || pending.is_some() {
                        return Err(MetadataError::parse(line(), "misplaced <dcvalue>"));
                    }
                    // Validate the attributes even though the value is dropped
                    PendingValue::from_start(&e, line())?;
                }
                Event::Start(e) | Event::Empty(e) => {
                    return Err(MetadataError::parse(
                        line(),
                        format!(
                            "unexpected element <{}>",
                            String::from_utf8_lossy(e.name().as_ref())
                        ),
                    ));
                }
                Event::Text(t) => {
                    let text = t.unescape()?;
                    match pending.as_mut() {
                        Some(value) => value.text.push_str(&text),
                        None if text.trim().is_empty() => {}
                        None => {
                            return Err(MetadataError::parse(line(), "text outside <dcvalue>"));
                        }
                    }
                }
                Event::CData(c) => {
                    let text = std::str::from_utf8(&c)
                        .map_err(|e| MetadataError::parse(line(), e.to_string()))?;
                    match pending.as_mut() {
                        Some(value) => value.text.push_str(text),
                        None => {
                            return Err(MetadataError::parse(line(), "CDATA outside <dcvalue>"));
                        }
                    }
                }
                Event::End(e) if e.name().as_ref() == VALUE_TAG.as_bytes() => {
                    if let Some(value) = pending.take() {
                        if let Some(element) = value.into_element(&schema)? {
                            record.append(element);
                        }
                    }
                }
                Event::End(_) => {
                    root = RootState::Closed;
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions
                _ => {}
            }
        }

        match root {
            RootState::Closed => Ok(record),
            RootState::Open => Err(MetadataError::parse(
                line_at(xml, xml.len()),
                "<dublin_core> is never closed",
            )),
            RootState::NotSeen => Err(MetadataError::parse(1, "missing <dublin_core> root element")),
        }
    }
}

enum RootState {
    NotSeen,
    Open,
    Closed,
}

/// A `dcvalue` whose text is still being collected
struct PendingValue {
    element: String,
    qualifier: Option<String>,
    language: Option<String>,
    text: String,
    line: u64,
}

impl PendingValue {
    fn from_start(e: &BytesStart, line: u64) -> Result<Self, MetadataError> {
        let attribute = |name: &str| get_attribute(e, name).map_err(|err| err.at_line(line));
        let element = attribute("element")?
            .ok_or_else(|| MetadataError::parse(line, "<dcvalue> without element attribute"))?;

        Ok(Self {
            element,
            qualifier: attribute("qualifier")?,
            language: attribute("language")?.filter(|l| !l.is_empty()),
            text: String::new(),
            line,
        })
    }

    fn into_element(self, schema: &str) -> Result<Option<MetadataElement>, MetadataError> {
        if self.text.is_empty() {
            return Ok(None);
        }

        let mut name = format!("{}.{}", schema, self.element);
        if let Some(qualifier) = &self.qualifier {
            name.push('.');
            name.push_str(qualifier);
        }

        let line = self.line;
        MetadataElement::new(name, self.text, self.language)
            .map(Some)
            .map_err(|e| e.at_line(line))
    }
}

/// Get an attribute value from a start tag, unescaped
fn get_attribute(e: &BytesStart, name: &str) -> Result<Option<String>, MetadataError> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == name.as_bytes() {
            let value = attr.unescape_value()?.into_owned();
            // Character references can still spell out forbidden characters
            if let Some((_, character)) = find_illegal_char(&value) {
                return Err(MetadataError::IllegalCharacter {
                    character,
                    field: format!("{} attribute", name),
                    line: None,
                });
            }
            return Ok(Some(value));
        }
    }
    Ok(None)
}

/// Check that no root was seen yet and return its `schema` attribute
fn open_root(
    root: &RootState,
    e: &BytesStart,
    line: u64,
) -> Result<Option<String>, MetadataError> {
    if !matches!(root, RootState::NotSeen) {
        return Err(MetadataError::parse(line, "unexpected second root element"));
    }
    get_attribute(e, "schema")
}

/// First character that XML 1.0 forbids, with its byte offset.
///
/// Allowed: tab, newline, carriage return, U+0020..U+D7FF,
/// U+E000..U+FFFD and U+10000 up.
pub(crate) fn find_illegal_char(text: &str) -> Option<(usize, char)> {
    text.char_indices().find(|&(_, c)| {
        !matches!(
            c,
            '\t' | '\n'
                | '\r'
                | '\u{20}'..='\u{D7FF}'
                | '\u{E000}'..='\u{FFFD}'
                | '\u{10000}'..='\u{10FFFF}'
        )
    })
}

fn line_at(xml: &str, position: usize) -> u64 {
    let end = position.min(xml.len());
    xml.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() as u64 + 1
}
