//! Share-form submit lifecycle.
//!
//! A submit builds the payload from the draft, posts it once through a
//! `RideService`, and closes the dialog only on success. Errors are logged
//! here and returned for callers that want them; the form itself never
//! shows them to the user.

use crate::draft::{DraftField, RideDraft};
use crate::error::{DraftError, SubmitError};
use crate::modal::ModalVisibility;
use crate::search::SearchQuery;
use crate::service::RideService;
use crate::submission::RideSubmission;
use chrono::{Local, NaiveDate, TimeZone};
use log::{error, info};

/// Build and post a ride from `draft` in one attempt, logging the outcome.
pub async fn submit_ride<S, Tz>(
    service: &S,
    draft: &RideDraft,
    today: NaiveDate,
    tz: &Tz,
) -> Result<serde_json::Value, SubmitError>
where
    S: RideService,
    Tz: TimeZone,
{
    let outcome = post_ride(service, draft, today, tz).await;
    if let Err(e) = &outcome {
        error!("Error creating ride: {}", e);
    }
    outcome
}

async fn post_ride<S: RideService, Tz: TimeZone>(
    service: &S,
    draft: &RideDraft,
    today: NaiveDate,
    tz: &Tz,
) -> Result<serde_json::Value, SubmitError> {
    let ride = RideSubmission::from_draft_in(draft, today, tz)?;
    info!(
        "Posting new ride: {}",
        serde_json::to_string(&ride).unwrap_or_default()
    );
    let created = service.create_ride(&ride).await?;
    info!("Ride created successfully: {}", created);
    Ok(created)
}

/// The share dialog: a draft plus whether the dialog is open.
#[derive(Debug, Default, Clone)]
pub struct RideShareForm {
    draft: RideDraft,
    modal: ModalVisibility,
}

impl RideShareForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &RideDraft {
        &self.draft
    }

    pub fn modal(&self) -> ModalVisibility {
        self.modal
    }

    pub fn open(&mut self) {
        self.modal = ModalVisibility::Open;
    }

    /// Close without submitting. The draft is kept.
    pub fn dismiss(&mut self) {
        self.modal = ModalVisibility::Closed;
    }

    pub fn update_field(&mut self, field: DraftField, value: &str) -> Result<(), DraftError> {
        self.draft.update_field(field, value)
    }

    pub fn search_query(&self) -> SearchQuery {
        SearchQuery::from_draft(&self.draft)
    }

    /// Submit using the local time zone and today's local date.
    pub async fn submit<S: RideService>(
        &mut self,
        service: &S,
    ) -> Result<serde_json::Value, SubmitError> {
        self.submit_in(service, Local::now().date_naive(), &Local)
            .await
    }

    pub async fn submit_in<S: RideService, Tz: TimeZone>(
        &mut self,
        service: &S,
        today: NaiveDate,
        tz: &Tz,
    ) -> Result<serde_json::Value, SubmitError> {
        let outcome = submit_ride(service, &self.draft, today, tz).await;
        self.modal = self.modal.after_submit(outcome.is_ok());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ServiceError, TimeField};
    use chrono::Utc;
    use serde_json::json;
    use std::cell::RefCell;

    struct MockService {
        response: Result<serde_json::Value, ServiceError>,
        posted: RefCell<Vec<RideSubmission>>,
    }

    impl MockService {
        fn ok() -> Self {
            Self {
                response: Ok(json!({ "id": 7 })),
                posted: RefCell::new(Vec::new()),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                response: Err(ServiceError::Status {
                    status,
                    body: "boom".to_string(),
                }),
                posted: RefCell::new(Vec::new()),
            }
        }
    }

    impl RideService for MockService {
        async fn create_ride(
            &self,
            ride: &RideSubmission,
        ) -> Result<serde_json::Value, ServiceError> {
            self.posted.borrow_mut().push(ride.clone());
            self.response.clone()
        }
    }

    fn filled_form() -> RideShareForm {
        let mut form = RideShareForm::new();
        form.update_field(DraftField::Origin, "Yale").unwrap();
        form.update_field(DraftField::Destination, "Hartford (BDL)").unwrap();
        form.update_field(DraftField::Date, "2024-05-01").unwrap();
        form.update_field(DraftField::StartTime, "09:30").unwrap();
        form.update_field(DraftField::EndTime, "11:00").unwrap();
        form.update_field(DraftField::AdditionalPassengers, "3").unwrap();
        form
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 30).unwrap()
    }

    #[test]
    fn test_open_and_dismiss_keep_draft() {
        let mut form = filled_form();
        assert_eq!(form.modal(), ModalVisibility::Closed);

        form.open();
        assert_eq!(form.modal(), ModalVisibility::Open);

        let before = form.draft().clone();
        form.dismiss();
        assert_eq!(form.modal(), ModalVisibility::Closed);
        assert_eq!(form.draft(), &before);
    }

    #[test]
    fn test_search_query_shares_fields() {
        let form = filled_form();
        let query = form.search_query();
        assert_eq!(query.origin, "Yale");
        assert_eq!(query.destination, "Hartford (BDL)");
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert!(query.window.is_some());
    }

    #[tokio::test]
    async fn test_successful_submit_closes_modal() {
        let service = MockService::ok();
        let mut form = filled_form();
        form.open();

        let created = form.submit_in(&service, today(), &Utc).await.unwrap();
        assert_eq!(created, json!({ "id": 7 }));
        assert_eq!(form.modal(), ModalVisibility::Closed);

        let posted = service.posted.borrow();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].total_seats, 4);
        assert_eq!(posted[0].beginning, "Yale");

        // Fields are not reset on success
        assert_eq!(form.draft().origin(), "Yale");
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_modal_open() {
        let service = MockService::failing(500);
        let mut form = filled_form();
        form.open();

        let err = form.submit_in(&service, today(), &Utc).await.unwrap_err();
        assert_eq!(
            err,
            SubmitError::SubmissionFailed(ServiceError::Status {
                status: 500,
                body: "boom".to_string()
            })
        );
        assert_eq!(form.modal(), ModalVisibility::Open);
        assert_eq!(form.draft().additional_passengers(), 3);
        assert_eq!(service.posted.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_malformed_time_skips_request() {
        let service = MockService::ok();
        let mut form = filled_form();
        form.update_field(DraftField::StartTime, "half past nine").unwrap();
        form.open();

        let err = form.submit_in(&service, today(), &Utc).await.unwrap_err();
        assert!(matches!(
            err,
            SubmitError::MalformedTimeInput {
                field: TimeField::Start,
                ..
            }
        ));
        assert_eq!(form.modal(), ModalVisibility::Open);
        assert!(service.posted.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_repeated_submits_are_not_deduplicated() {
        let service = MockService::failing(503);
        let mut form = filled_form();
        form.open();

        let _ = form.submit_in(&service, today(), &Utc).await;
        let _ = form.submit_in(&service, today(), &Utc).await;
        assert_eq!(service.posted.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_submit_ride_without_form() {
        let service = MockService::ok();
        let mut draft = RideDraft::new();
        draft.update_field(DraftField::StartTime, "07:15").unwrap();
        draft.update_field(DraftField::EndTime, "08:00").unwrap();

        submit_ride(&service, &draft, today(), &Utc).await.unwrap();
        let posted = service.posted.borrow();
        assert_eq!(posted[0].start_time.date_naive(), today());
        assert_eq!(posted[0].total_seats, 1);
    }
}
