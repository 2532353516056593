use csv::StringRecord;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::error::{Field, ScrapError};

/// Separator used to flatten tags into a single csv column
pub const TAG_SEPARATOR: &str = ", ";

lazy_static! {
    pub static ref QUOTES_HEADERS: StringRecord =
        StringRecord::from(vec!["text", "author", "tags", "page"]);
}

/// A quote found on a listing page.
///
/// Text and author are trimmed and never empty. Once built a record is not
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    text: String,
    author: String,
    tags: Vec<String>,
    page: u32,
}

impl Record {
    /// Trims every field, fails with the first of text and author that is blank
    pub fn new<S: AsRef<str>>(
        text: &str,
        author: &str,
        tags: impl IntoIterator<Item = S>,
        page: u32,
    ) -> Result<Self, Field> {
        let required = |value: &str, field: Field| {
            Some(value.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
                .ok_or(field)
        };

        Ok(Self {
            text: required(text, Field::Text)?,
            author: required(author, Field::Author)?,
            tags: tags
                .into_iter()
                .map(|t| t.as_ref().trim().to_string())
                .collect(),
            page,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Tags in on-page order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// 1-based index of the page the quote was found on
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn joined_tags(&self) -> String {
        self.tags.join(TAG_SEPARATOR)
    }

    /// First `len` chars of the text, for progress output
    pub fn preview(&self, len: usize) -> String {
        let mut preview: String = self.text.chars().take(len).collect();
        if self.text.chars().count() > len {
            preview.push_str("...");
        }
        preview
    }
}

/// Flat csv view of a [`Record`]
#[derive(Debug, Serialize)]
pub(crate) struct CsvRow<'a> {
    pub text: &'a str,
    pub author: &'a str,
    pub tags: String,
    pub page: u32,
}

impl<'a> From<&'a Record> for CsvRow<'a> {
    fn from(r: &'a Record) -> Self {
        Self {
            text: &r.text,
            author: &r.author,
            tags: r.joined_tags(),
            page: r.page,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct OwnedCsvRow {
    pub text: String,
    pub author: String,
    pub tags: String,
    pub page: u32,
}

impl OwnedCsvRow {
    /// `index` is the 0-based position of the row in the file
    pub fn into_record(self, index: usize) -> Result<Record, ScrapError> {
        let tags: Vec<&str> = if self.tags.is_empty() {
            vec![]
        } else {
            self.tags.split(TAG_SEPARATOR).collect()
        };
        Record::new(&self.text, &self.author, tags, self.page).map_err(|field| {
            ScrapError::MissingField {
                page: self.page,
                index,
                field,
            }
        })
    }
}
