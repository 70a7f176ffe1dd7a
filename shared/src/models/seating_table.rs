//! Seating Table Model

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Table number as shown on the floor plan
///
/// Stored either as a number or as free text ("12", "Head table"). Whole
/// floats (`3.0`) read as numbers, other floats keep their decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TableNumber {
    Number(i64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberRepr {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for TableNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match NumberRepr::deserialize(deserializer)? {
            NumberRepr::Integer(n) => Self::Number(n),
            NumberRepr::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                Self::Number(f as i64)
            }
            NumberRepr::Float(f) => Self::Text(f.to_string()),
            NumberRepr::Text(text) => Self::Text(text),
        })
    }
}

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TableNumber {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for TableNumber {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Seating table entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatingTable {
    pub id: String,
    pub number: TableNumber,
    /// Seat count
    pub capacity: i32,
    /// Guest ids already seated here
    #[serde(default)]
    pub assigned_guests: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SeatingTable {
    pub fn new(id: impl Into<String>, number: impl Into<TableNumber>, capacity: i32) -> Self {
        Self {
            id: id.into(),
            number: number.into(),
            capacity,
            assigned_guests: Vec::new(),
            name: None,
        }
    }

    pub fn with_assigned<I, S>(mut self, guest_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assigned_guests = guest_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Label for logs: the name when set, otherwise "Table <number>"
    pub fn display_label(&self) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => format!("Table {}", self.number),
        }
    }
}

/// Update seating table payload
///
/// `None` fields are left untouched by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatingTableUpdate {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_guests: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
