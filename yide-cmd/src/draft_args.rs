//! Ride fields as command-line arguments.

use clap::Args;
use yide_core::{DraftError, DraftField, RideDraft};

#[derive(Args, Debug, Clone, Default)]
pub struct DraftArgs {
    /// Where the ride leaves from
    #[arg(long)]
    pub from: String,

    /// Where the ride is heading
    #[arg(long)]
    pub to: String,

    /// Departure date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub date: Option<String>,

    /// Start of the departure window (HH:MM)
    #[arg(long)]
    pub start: String,

    /// End of the departure window (HH:MM)
    #[arg(long)]
    pub end: String,

    /// Riders joining you, not counting yourself
    #[arg(short, long, default_value = "0")]
    pub passengers: String,

    /// Organizer name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Organizer phone number
    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub description: String,
}

impl DraftArgs {
    /// Fill a fresh draft field by field.
    pub fn to_draft(&self) -> Result<RideDraft, DraftError> {
        let mut draft = RideDraft::new();
        for (field, value) in self.fields() {
            draft.update_field(field, value)?;
        }
        Ok(draft)
    }

    pub fn fields(&self) -> Vec<(DraftField, &str)> {
        vec![
            (DraftField::OrganizerName, self.name.as_str()),
            (DraftField::PhoneNumber, self.phone.as_str()),
            (DraftField::Origin, self.from.as_str()),
            (DraftField::Destination, self.to.as_str()),
            (DraftField::Description, self.description.as_str()),
            (DraftField::Date, self.date.as_deref().unwrap_or("")),
            (DraftField::StartTime, self.start.as_str()),
            (DraftField::EndTime, self.end.as_str()),
            (DraftField::AdditionalPassengers, self.passengers.as_str()),
        ]
    }
}
