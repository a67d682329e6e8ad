use std::fs::File;
use std::io::Read;
use std::ops::Index;
use std::path::Path;

use super::{csv_dialect, MetadataElement, MetadataError};

/// Header row written at the top of every template and sheet.
pub const TEMPLATE_HEADER: [&str; 4] = [
    "Dublin core element",
    "Metadata value",
    "Language code",
    "Comment",
];

/// An ordered set of Dublin Core values for one item.
///
/// Elements keep their insertion order (CSV row order on import) and
/// repeated tags are kept as separate elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataRecord {
    elements: Vec<MetadataElement>,
}

impl MetadataRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element after all existing ones
    pub fn append(&mut self, element: MetadataElement) {
        self.elements.push(element);
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when the record holds no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element at `index`, in insertion order
    pub fn get(&self, index: usize) -> Option<&MetadataElement> {
        self.elements.get(index)
    }

    /// Iterate over elements in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, MetadataElement> {
        self.elements.iter()
    }

    /// All elements as a slice
    pub fn elements(&self) -> &[MetadataElement] {
        &self.elements
    }

    /// Load a record from a CSV metadata sheet on disk
    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self, MetadataError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a record from any CSV source
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, MetadataError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_csv_str(&text)
    }

    /// Parse a CSV metadata sheet.
    ///
    /// The first row is a header and is ignored. Each following row is read
    /// as `tag, value[, language[, ...]]`; rows with an empty value are
    /// skipped and an empty language means none. A row with a single field
    /// is rejected, as is a quoted field left open at end of input.
    pub fn from_csv_str(text: &str) -> Result<Self, MetadataError> {
        csv_dialect::check_balanced_quotes(text)?;

        let mut reader = csv_dialect::reader(text.as_bytes());
        let mut rows = reader.records();
        let mut record = MetadataRecord::new();

        // Header row, content unchecked
        if let Some(header) = rows.next() {
            header?;
        }

        for row in rows {
            let row = row?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);

            if row.len() == 1 && row[0].is_empty() {
                continue;
            }
            if row.len() < 2 {
                return Err(MetadataError::parse(
                    line,
                    format!(
                        "expected at least 2 fields (tag, value), found {}",
                        row.len()
                    ),
                ));
            }

            let value = &row[1];
            if value.is_empty() {
                continue;
            }

            let language = row
                .get(2)
                .filter(|lang| !lang.is_empty())
                .map(str::to_string);

            let element =
                MetadataElement::new(&row[0], value, language).map_err(|e| e.at_line(line))?;
            record.append(element);
        }

        Ok(record)
    }

    /// Write the record as a CSV sheet that [`MetadataRecord::from_csv_str`]
    /// reads back to the same elements.
    pub fn to_csv(&self) -> Result<String, MetadataError> {
        let mut writer = csv_dialect::writer(Vec::new());
        writer.write_record(TEMPLATE_HEADER)?;
        for element in &self.elements {
            writer.write_record([
                element.name(),
                element.value(),
                element.language().unwrap_or(""),
                "",
            ])?;
        }
        csv_dialect::finish(writer)
    }
}

/// Generate a CSV template with one empty row per tag, sorted by tag name.
///
/// The comment column is filled from the map (empty when unset). The output
/// does not depend on the iteration order of `tags`.
pub fn generate_template<I, K, C>(tags: I) -> Result<String, MetadataError>
where
    I: IntoIterator<Item = (K, Option<C>)>,
    K: AsRef<str>,
    C: AsRef<str>,
{
    let mut rows: Vec<(K, Option<C>)> = tags.into_iter().collect();
    rows.sort_by(|a, b| a.0.as_ref().cmp(b.0.as_ref()));

    let mut writer = csv_dialect::writer(Vec::new());
    writer.write_record(TEMPLATE_HEADER)?;
    for (tag, comment) in &rows {
        let comment = comment.as_ref().map(|c| c.as_ref()).unwrap_or("");
        writer.write_record([tag.as_ref(), "", "", comment])?;
    }
    csv_dialect::finish(writer)
}

/// Template for the built-in Dublin Core tag catalog.
pub fn default_template() -> Result<String, MetadataError> {
    generate_template(super::EXPECTED_TAGS.iter().map(|(tag, comment)| (*tag, *comment)))
}

impl Index<usize> for MetadataRecord {
    type Output = MetadataElement;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

impl From<Vec<MetadataElement>> for MetadataRecord {
    fn from(elements: Vec<MetadataElement>) -> Self {
        Self { elements }
    }
}

impl FromIterator<MetadataElement> for MetadataRecord {
    fn from_iter<T: IntoIterator<Item = MetadataElement>>(iter: T) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl Extend<MetadataElement> for MetadataRecord {
    fn extend<T: IntoIterator<Item = MetadataElement>>(&mut self, iter: T) {
        self.elements.extend(iter);
    }
}

impl IntoIterator for MetadataRecord {
    type Item = MetadataElement;
    type IntoIter = std::vec::IntoIter<MetadataElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a MetadataRecord {
    type Item = &'a MetadataElement;
    type IntoIter = std::slice::Iter<'a, MetadataElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
