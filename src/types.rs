use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tabled::Tabled;

use crate::utils::clean_string_data;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntry {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub date_of_publication: String,
    pub call_number: String,
}

impl BookEntry {
    pub fn from_record(record: &BibRecordResponse) -> Self {
        Self {
            title: clean_string_data(record.bib_data.title.as_ref()),
            author: clean_string_data(record.bib_data.author.as_ref()),
            isbn: clean_string_data(record.bib_data.isbn.as_ref()),
            date_of_publication: clean_string_data(record.bib_data.date_of_publication.as_ref()),
            call_number: clean_string_data(record.holding_data.call_number.as_ref()),
        }
    }
}

impl fmt::Display for BookEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}\nAuthor: {}\nISBN: {}\nDate Of Publication: {}\nCall Number: {}",
            self.title, self.author, self.isbn, self.date_of_publication, self.call_number
        )
    }
}

#[derive(Tabled)]
pub struct BookTableRow {
    pub title: String,
    pub author: String,
    pub published: String,
    pub isbn: String,
    pub call_number: String,
}

impl From<BookEntry> for BookTableRow {
    fn from(entry: BookEntry) -> Self {
        Self {
            title: entry.title,
            author: entry.author,
            published: entry.date_of_publication,
            isbn: entry.isbn,
            call_number: entry.call_number,
        }
    }
}

/// Listing of set members returned by the library system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MembersResponse {
    #[serde(default)]
    pub member: Vec<Member>,
    #[serde(default)]
    pub total_record_count: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub link: Option<String>,
}

/// Detail record behind a member link. Field values are kept as raw JSON
/// since the library system sends nulls and non-string values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BibRecordResponse {
    #[serde(default)]
    pub bib_data: BibData,
    #[serde(default)]
    pub holding_data: HoldingData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BibData {
    #[serde(default)]
    pub title: Option<Value>,
    #[serde(default)]
    pub author: Option<Value>,
    #[serde(default)]
    pub isbn: Option<Value>,
    #[serde(default)]
    pub date_of_publication: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HoldingData {
    #[serde(default)]
    pub call_number: Option<Value>,
}
