//! Print the ride payload without posting it.

use crate::draft_args::DraftArgs;
use chrono::{Local, NaiveDate, TimeZone};
use yide_core::RideSubmission;

/// Pretty JSON for the ride `args` describe.
pub fn preview_json<Tz: TimeZone>(
    args: &DraftArgs,
    today: NaiveDate,
    tz: &Tz,
) -> anyhow::Result<String> {
    let draft = args.to_draft()?;
    let ride = RideSubmission::from_draft_in(&draft, today, tz)?;
    Ok(serde_json::to_string_pretty(&ride)?)
}

pub fn run_preview(args: &DraftArgs) -> anyhow::Result<()> {
    println!("{}", preview_json(args, Local::now().date_naive(), &Local)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft_args::tests::sample_args;
    use chrono::Utc;

    #[test]
    fn test_preview_json() {
        let today = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let json = preview_json(&sample_args(), today, &Utc).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["beginning"], "Yale");
        assert_eq!(value["startTime"], "2024-05-01T09:30:00.000Z");
        assert_eq!(value["endTime"], "2024-05-01T11:00:00.000Z");
        assert_eq!(value["totalSeats"], 4);
        assert_eq!(value["ownerPhone"], "");
    }

    #[test]
    fn test_preview_rejects_malformed_time() {
        let mut args = sample_args();
        args.end = "eleven".to_string();
        let today = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let err = preview_json(&args, today, &Utc).unwrap_err();
        assert!(err.to_string().contains("endTime"));
    }
}
