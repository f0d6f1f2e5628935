//! The payload posted to the ride-creation endpoint.

use crate::draft::RideDraft;
use crate::error::{SubmitError, TimeField};
use crate::time_of_day::{combine_local, parse_time_of_day, to_iso_string};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use serde::{Serialize, Serializer};

/// A finalized ride listing. Field names follow the `/api/ride` JSON contract.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RideSubmission {
    pub owner_name: String,
    pub owner_phone: String,
    pub beginning: String,
    pub destination: String,
    pub description: String,
    #[serde(serialize_with = "serialize_iso")]
    pub start_time: DateTime<Utc>,
    #[serde(serialize_with = "serialize_iso")]
    pub end_time: DateTime<Utc>,
    /// The organizer plus every additional passenger; always at least 1.
    pub total_seats: u32,
}

fn serialize_iso<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_iso_string(ts))
}

impl RideSubmission {
    /// Build a submission in the local time zone. A draft without a date
    /// uses today's local date.
    pub fn from_draft(draft: &RideDraft) -> Result<Self, SubmitError> {
        Self::from_draft_in(draft, Local::now().date_naive(), &Local)
    }

    /// Build a submission, placing the draft's times on its date (or on
    /// `today` when absent) in `tz`.
    pub fn from_draft_in<Tz: TimeZone>(
        draft: &RideDraft,
        today: NaiveDate,
        tz: &Tz,
    ) -> Result<Self, SubmitError> {
        let date = draft.date().unwrap_or(today);
        let start_time = resolve_timestamp(tz, date, TimeField::Start, draft.start_time())?;
        let end_time = resolve_timestamp(tz, date, TimeField::End, draft.end_time())?;

        Ok(RideSubmission {
            owner_name: draft.organizer_name().to_string(),
            owner_phone: draft.phone_number().to_string(),
            beginning: draft.origin().to_string(),
            destination: draft.destination().to_string(),
            description: draft.description().to_string(),
            start_time,
            end_time,
            total_seats: draft.additional_passengers().saturating_add(1),
        })
    }
}

pub(crate) fn resolve_timestamp<Tz: TimeZone>(
    tz: &Tz,
    date: NaiveDate,
    field: TimeField,
    value: &str,
) -> Result<DateTime<Utc>, SubmitError> {
    parse_time_of_day(value)
        .and_then(|time| combine_local(tz, date, time))
        .ok_or_else(|| SubmitError::MalformedTimeInput {
            field,
            value: value.to_string(),
        })
}
