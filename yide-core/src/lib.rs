//! Core types for sharing and searching rides.
//!
//! This crate provides:
//! - `draft`: the editable `RideDraft` and its single keyed update entry point
//! - `submission`: the `RideSubmission` wire payload derived from a draft
//! - `time_of_day`: "HH:MM" parsing and local timestamp construction
//! - `modal`: visibility state machine for the share dialog
//! - `service`: the `RideService` seam the form submits through
//! - `form`: the share-form submit lifecycle
//! - `search`: the quick-search intent built from the shared fields

pub mod draft;
pub mod error;
pub mod form;
pub mod modal;
pub mod search;
pub mod service;
pub mod submission;
pub mod time_of_day;

pub use draft::{DraftField, RideDraft};
pub use error::{DraftError, ServiceError, SubmitError, TimeField};
pub use form::{submit_ride, RideShareForm};
pub use modal::ModalVisibility;
pub use search::SearchQuery;
pub use service::RideService;
pub use submission::RideSubmission;
