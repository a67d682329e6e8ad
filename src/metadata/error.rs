/// Errors that can occur during metadata processing
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// I/O error reading or writing a metadata file
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV reading/writing error
    #[error("CSV parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// XML reading/writing error
    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// Structurally invalid input (unbalanced quotes, short rows, bad XML layout)
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number of the offending input
        line: u64,
        /// What went wrong
        message: String,
    },

    /// Tag name lacking a schema or element segment
    #[error("Malformed metadata name {name:?}{}", line_suffix(.line))]
    MalformedName {
        /// The rejected dotted name
        name: String,
        /// CSV line the name came from, when known
        line: Option<u64>,
    },

    /// Element built with an empty value
    #[error("Empty value for {name:?}{}", line_suffix(.line))]
    EmptyValue {
        /// Dotted name of the element
        name: String,
        /// Input line the element came from, when known
        line: Option<u64>,
    },

    /// Character that XML 1.0 does not allow in a document
    #[error(
        "Character {character:?} is not allowed in XML ({field}){}",
        line_suffix(.line)
    )]
    IllegalCharacter {
        /// The rejected character
        character: char,
        /// Where it was found: a dotted name, or the field of one
        field: String,
        /// Input line it was found on, when known
        line: Option<u64>,
    },
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|l| format!(" on line {l}")).unwrap_or_default()
}

impl MetadataError {
    pub(crate) fn parse(line: u64, message: impl Into<String>) -> Self {
        MetadataError::Parse {
            line,
            message: message.into(),
        }
    }

    /// Attach an input line to errors raised while building an element
    pub(crate) fn at_line(self, line: u64) -> Self {
        match self {
            MetadataError::MalformedName { name, .. } => MetadataError::MalformedName {
                name,
                line: Some(line),
            },
            MetadataError::EmptyValue { name, .. } => MetadataError::EmptyValue {
                name,
                line: Some(line),
            },
            MetadataError::IllegalCharacter {
                character, field, ..
            } => MetadataError::IllegalCharacter {
                character,
                field,
                line: Some(line),
            },
            other => other,
        }
    }
}

impl From<quick_xml::events::attributes::AttrError> for MetadataError {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        MetadataError::XmlError(quick_xml::Error::from(e))
    }
}
