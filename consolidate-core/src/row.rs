//! Header and row value types.
//!
//! A row is a fixed-width record (one value per header column) plus whatever
//! ragged values trailed past the header on the source line. Bank exports
//! commonly end lines with extra commas, and those must survive the round trip.

use serde::{Serialize, Serializer};

/// Ordered column names shared by every input file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Header(Vec<String>);

impl Header {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Index of the column called `name`, ignoring case.
    pub fn position(&self, name: &str) -> Option<usize> {
        let wanted = name.to_lowercase();
        self.0.iter().position(|col| col.to_lowercase() == wanted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    /// Exactly one value per header column.
    pub fields: Vec<String>,
    /// Values beyond the header width, in source order.
    pub extras: Vec<String>,
}

impl Row {
    pub fn new(fields: Vec<String>, extras: Vec<String>) -> Self {
        Self { fields, extras }
    }

    /// Split a raw record into declared fields and trailing extras.
    ///
    /// Records shorter than `width` are padded with empty strings.
    pub fn from_record<I, S>(values: I, width: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut fields: Vec<String> = values.into_iter().map(Into::into).collect();
        let extras = if fields.len() > width {
            fields.split_off(width)
        } else {
            fields.resize(width, String::new());
            Vec::new()
        };
        Self { fields, extras }
    }

    /// Value of a declared column.
    pub fn get(&self, idx: usize) -> Option<&str> {
        self.fields.get(idx).map(String::as_str)
    }

    /// Every value, declared fields first, then extras.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().chain(self.extras.iter()).map(String::as_str)
    }

    pub fn width(&self) -> usize {
        self.fields.len() + self.extras.len()
    }

    pub fn map_values<F>(self, mut f: F) -> Self
    where
        F: FnMut(String) -> String,
    {
        Self {
            fields: self.fields.into_iter().map(&mut f).collect(),
            extras: self.extras.into_iter().map(&mut f).collect(),
        }
    }
}

/// Serialized as one flat record so a csv writer emits fields then extras.
impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.values())
    }
}
