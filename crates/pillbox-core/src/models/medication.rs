//! Medication descriptor.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::datefmt::parse_date;

/// A prescribed medication with its validity window.
///
/// Dates are stored as `YYYY-MM-DD` strings exactly as the app persists
/// them; the parsed accessors treat malformed values as absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medication {
    /// Unique medication ID
    pub medication_id: String,
    /// Human-readable name
    pub name: String,
    /// First valid date, set by the user
    pub start_date: Option<String>,
    /// Last valid date (inclusive)
    pub end_date: Option<String>,
    /// Date the medication was registered; fallback anchor when no start
    /// date and no dose history exist
    pub registration_date: Option<String>,
}

impl Medication {
    /// Create a new medication registered today.
    pub fn new(name: String) -> Self {
        Self {
            medication_id: uuid::Uuid::new_v4().to_string(),
            name,
            start_date: None,
            end_date: None,
            registration_date: Some(chrono::Local::now().date_naive().to_string()),
        }
    }

    /// Parsed user-set start date. Malformed values behave as unset.
    pub fn start_day(&self) -> Option<NaiveDate> {
        self.start_date.as_deref().and_then(parse_date)
    }

    /// Parsed inclusive end date. Malformed values behave as unset.
    pub fn end_day(&self) -> Option<NaiveDate> {
        self.end_date.as_deref().and_then(parse_date)
    }

    /// Parsed registration date. Malformed values behave as unset.
    pub fn registration_day(&self) -> Option<NaiveDate> {
        self.registration_date.as_deref().and_then(parse_date)
    }
}
