//! Quick-search intent built from the fields the search bar shares with the
//! share form.

use crate::draft::RideDraft;
use crate::error::TimeField;
use crate::submission::resolve_timestamp;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// What the user is looking for. Handed to an external search collaborator.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SearchQuery {
    pub origin: String,
    pub destination: String,
    pub date: Option<NaiveDate>,
    /// Start and end of the wanted departure window, when both times parse.
    pub window: Option<(DateTime<Utc>, DateTime<Utc>)>,
}

impl SearchQuery {
    pub fn from_draft(draft: &RideDraft) -> Self {
        Self::from_draft_in(draft, Local::now().date_naive(), &Local)
    }

    pub fn from_draft_in<Tz: TimeZone>(draft: &RideDraft, today: NaiveDate, tz: &Tz) -> Self {
        let date = draft.date().unwrap_or(today);
        let start = resolve_timestamp(tz, date, TimeField::Start, draft.start_time()).ok();
        let end = resolve_timestamp(tz, date, TimeField::End, draft.end_time()).ok();

        SearchQuery {
            origin: draft.origin().to_string(),
            destination: draft.destination().to_string(),
            date: draft.date(),
            window: start.zip(end),
        }
    }

    /// True when the user has typed nothing to search on.
    pub fn is_empty(&self) -> bool {
        self.origin.trim().is_empty()
            && self.destination.trim().is_empty()
            && self.date.is_none()
            && self.window.is_none()
    }
}
