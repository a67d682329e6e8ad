use std::fmt;

use super::xml::find_illegal_char;
use super::MetadataError;

/// One qualified Dublin Core value, e.g. `dc.contributor.author = "Doe, Jane"`.
///
/// The dotted name is checked when the element is built: it must have a
/// non-empty schema segment and a non-empty element segment. Everything
/// after the second dot is the qualifier, which may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataElement {
    name: String,
    value: String,
    language: Option<String>,
    // Byte offsets of the first and second dot in `name`
    first_dot: usize,
    second_dot: Option<usize>,
}

impl MetadataElement {
    /// Create a new element from a dotted name, a value and an optional
    /// language code. The value is stored verbatim.
    ///
    /// Fails when the name is malformed, the value is empty, or any field
    /// holds a character that cannot appear in an XML 1.0 document.
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        language: Option<String>,
    ) -> Result<Self, MetadataError> {
        let name = name.into();
        let value = value.into();
        let (first_dot, second_dot) = split_name(&name).ok_or_else(|| {
            MetadataError::MalformedName {
                name: name.clone(),
                line: None,
            }
        })?;

        if value.is_empty() {
            return Err(MetadataError::EmptyValue { name, line: None });
        }

        check_xml_chars(&name, &name)?;
        check_xml_chars(&value, &format!("value of {}", name))?;
        if let Some(lang) = &language {
            check_xml_chars(lang, &format!("language of {}", name))?;
        }

        Ok(Self {
            name,
            value,
            language,
            first_dot,
            second_dot,
        })
    }

    /// The full dotted name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The metadata value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The language code, if one was given
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Segment before the first dot (`dc`)
    pub fn schema(&self) -> &str {
        &self.name[..self.first_dot]
    }

    /// Segment between the first and second dot (`contributor`)
    pub fn element(&self) -> &str {
        let end = self.second_dot.unwrap_or(self.name.len());
        &self.name[self.first_dot + 1..end]
    }

    /// Everything after the second dot, or `None` for two-part names.
    ///
    /// `dc.title` has no qualifier, `dc.title.` has an empty one.
    pub fn qualifier(&self) -> Option<&str> {
        self.second_dot.map(|dot| &self.name[dot + 1..])
    }
}

impl fmt::Display for MetadataElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?}", self.name, self.value)?;
        if let Some(lang) = &self.language {
            write!(f, "@{}", lang)?;
        }
        Ok(())
    }
}

/// Locate the structural dots of a dotted name, rejecting names without a
/// non-empty schema and element.
fn split_name(name: &str) -> Option<(usize, Option<usize>)> {
    let first = name.find('.')?;
    if first == 0 {
        return None;
    }

    let rest = &name[first + 1..];
    let second = rest.find('.').map(|i| first + 1 + i);
    let element_end = second.unwrap_or(name.len());
    if element_end == first + 1 {
        return None;
    }

    Some((first, second))
}

fn check_xml_chars(text: &str, field: &str) -> Result<(), MetadataError> {
    match find_illegal_char(text) {
        Some((_, character)) => Err(MetadataError::IllegalCharacter {
            character,
            field: field.to_string(),
            line: None,
        }),
        None => Ok(()),
    }
}
