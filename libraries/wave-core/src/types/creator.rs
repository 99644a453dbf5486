/// Content published by artists and hosts
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date format used by event payloads and artist pages
pub const EVENT_DATE_FORMAT: &str = "%d-%m-%Y";

/// Merchandise sold on an artist page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Merch {
    /// Product name, unique per artist
    pub name: String,
    /// Description shown on the artist page
    pub description: String,
    /// Price, never negative
    pub price: f64,
}

/// A dated event announced by an artist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Event name, unique per artist
    pub name: String,
    /// Description shown on the artist page
    pub description: String,
    /// Calendar date of the event
    pub date: NaiveDate,
}

impl Event {
    /// Build an event from a `dd-mm-yyyy` date.
    ///
    /// Returns `None` when the date does not exist on the calendar or its year
    /// falls outside 1900..=2023.
    pub fn parse(
        name: impl Into<String>,
        description: impl Into<String>,
        date: &str,
    ) -> Option<Self> {
        let date = NaiveDate::parse_from_str(date, EVENT_DATE_FORMAT).ok()?;
        if !(1900..=2023).contains(&date.year()) {
            return None;
        }

        Some(Self {
            name: name.into(),
            description: description.into(),
            date,
        })
    }

    /// Date rendered as `dd-mm-yyyy`
    pub fn formatted_date(&self) -> String {
        self.date.format(EVENT_DATE_FORMAT).to_string()
    }
}

/// An announcement published by a host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// Announcement name, unique per host
    pub name: String,
    /// Body text
    pub description: String,
}
