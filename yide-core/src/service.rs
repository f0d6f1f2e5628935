//! The external collaborator that stores rides.

use crate::error::ServiceError;
use crate::submission::RideSubmission;

/// Persists a ride listing and returns the backend's JSON response.
///
/// Futures are not required to be `Send` so implementations can run on the
/// browser's single thread.
#[allow(async_fn_in_trait)]
pub trait RideService {
    async fn create_ride(&self, ride: &RideSubmission) -> Result<serde_json::Value, ServiceError>;
}
