//! The in-progress ride listing edited by the share form and the search bar.

use crate::error::DraftError;
use chrono::NaiveDate;

/// Date format used by `<input type="date">` values: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Every editable field of a `RideDraft`.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum DraftField {
    OrganizerName,
    PhoneNumber,
    Origin,
    Destination,
    Description,
    Date,
    StartTime,
    EndTime,
    AdditionalPassengers,
}

/// Form state for a ride that has not been submitted yet.
///
/// All mutation goes through [`RideDraft::update_field`]. Optional text
/// fields are empty strings when absent.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct RideDraft {
    organizer_name: String,
    phone_number: String,
    origin: String,
    destination: String,
    description: String,
    date: Option<NaiveDate>,
    start_time: String,
    end_time: String,
    additional_passengers: u32,
}

impl RideDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw input for `field`.
    ///
    /// Text fields take the value as-is. The passenger count treats empty
    /// input as 0 and rejects anything that is not a non-negative integer.
    /// The date takes "YYYY-MM-DD", or empty to clear it.
    pub fn update_field(&mut self, field: DraftField, value: &str) -> Result<(), DraftError> {
        match field {
            DraftField::OrganizerName => self.organizer_name = value.to_string(),
            DraftField::PhoneNumber => self.phone_number = value.to_string(),
            DraftField::Origin => self.origin = value.to_string(),
            DraftField::Destination => self.destination = value.to_string(),
            DraftField::Description => self.description = value.to_string(),
            DraftField::StartTime => self.start_time = value.to_string(),
            DraftField::EndTime => self.end_time = value.to_string(),
            DraftField::Date => self.date = parse_date_input(value)?,
            DraftField::AdditionalPassengers => {
                self.additional_passengers = parse_passenger_count(value)?
            }
        }
        Ok(())
    }

    /// Current value of `field` as it should appear in its input element.
    pub fn value_of(&self, field: DraftField) -> String {
        match field {
            DraftField::OrganizerName => self.organizer_name.clone(),
            DraftField::PhoneNumber => self.phone_number.clone(),
            DraftField::Origin => self.origin.clone(),
            DraftField::Destination => self.destination.clone(),
            DraftField::Description => self.description.clone(),
            DraftField::StartTime => self.start_time.clone(),
            DraftField::EndTime => self.end_time.clone(),
            DraftField::Date => self
                .date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            DraftField::AdditionalPassengers => self.additional_passengers.to_string(),
        }
    }

    pub fn organizer_name(&self) -> &str {
        &self.organizer_name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    pub fn end_time(&self) -> &str {
        &self.end_time
    }

    pub fn additional_passengers(&self) -> u32 {
        self.additional_passengers
    }
}

fn parse_passenger_count(value: &str) -> Result<u32, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    // u32::from_str accepts a leading '+'
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DraftError::InvalidPassengerCount(value.to_string()));
    }
    trimmed
        .parse()
        .map_err(|_| DraftError::InvalidPassengerCount(value.to_string()))
}

fn parse_date_input(value: &str) -> Result<Option<NaiveDate>, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| DraftError::InvalidDate(value.to_string()))
}
