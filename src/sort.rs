//! Sort method tokens and the record orderings they select.
//!
//! A [`SortMethod`] is the raw token carried in the `sort_method` query
//! parameter and in the dropdown's option values. The page server maps it
//! onto a [`RecordOrder`]; anything it does not recognise falls back to the
//! default ordering.

use std::fmt;

use serde::Serialize;

use crate::{
    types::BookEntry,
    utils::{sort_records_by_publish_date, sort_records_by_title},
};

/// Name of the query parameter, and id of the dropdown control.
pub const SORT_METHOD_PARAM: &str = "sort_method";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SortMethod(String);

impl SortMethod {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SortMethod {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for SortMethod {
    fn from(token: String) -> Self {
        Self(token)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordOrder {
    #[default]
    TitleAscending,
    TitleDescending,
    PublishDateAscending,
    PublishDateDescending,
}

impl RecordOrder {
    /// All orderings, in dropdown order.
    pub const ALL: [RecordOrder; 4] = [
        RecordOrder::TitleAscending,
        RecordOrder::TitleDescending,
        RecordOrder::PublishDateAscending,
        RecordOrder::PublishDateDescending,
    ];

    pub fn token(self) -> &'static str {
        match self {
            RecordOrder::TitleAscending => "ascending_alphabetical",
            RecordOrder::TitleDescending => "descending_alphabetical",
            RecordOrder::PublishDateAscending => "ascending_publish_date",
            RecordOrder::PublishDateDescending => "descending_publish_date",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RecordOrder::TitleAscending => "Title (A-Z)",
            RecordOrder::TitleDescending => "Title (Z-A)",
            RecordOrder::PublishDateAscending => "Publish date (oldest first)",
            RecordOrder::PublishDateDescending => "Publish date (newest first)",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|order| order.token() == token)
    }

    /// Maps the incoming `sort_method` parameter onto an ordering. Absent and
    /// unknown tokens select the default.
    pub fn resolve(sort_method: Option<&str>) -> Self {
        sort_method.and_then(Self::from_token).unwrap_or_default()
    }

    pub fn sort_method(self) -> SortMethod {
        SortMethod::from(self.token())
    }

    pub fn apply(self, mut records: Vec<BookEntry>) -> Vec<BookEntry> {
        match self {
            RecordOrder::TitleAscending => sort_records_by_title(&mut records, false),
            RecordOrder::TitleDescending => sort_records_by_title(&mut records, true),
            RecordOrder::PublishDateAscending => sort_records_by_publish_date(&mut records, false),
            RecordOrder::PublishDateDescending => sort_records_by_publish_date(&mut records, true),
        }
        records
    }
}

impl fmt::Display for RecordOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One `<option>` of the sort dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

pub fn sort_options(selected: RecordOrder) -> Vec<SortOption> {
    RecordOrder::ALL
        .into_iter()
        .map(|order| SortOption {
            value: order.token(),
            label: order.label(),
            selected: order == selected,
        })
        .collect()
}
