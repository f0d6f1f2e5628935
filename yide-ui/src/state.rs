//! Form state managed via Dioxus context.
//!
//! `FormState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<FormState>()`. The search bar and the share dialog edit the
//! same draft.

use dioxus::prelude::*;
use log::{error, warn};
use yide_client::ServiceConfig;
use yide_core::{DraftField, ModalVisibility, RideDraft};

/// Shared state for the top bar.
#[derive(Clone, Copy)]
pub struct FormState {
    /// Everything typed so far
    pub draft: Signal<RideDraft>,
    /// Whether the share dialog is shown
    pub modal: Signal<ModalVisibility>,
    /// Where rides are posted (None if the page origin could not be read)
    pub config: Signal<Option<ServiceConfig>>,
}

impl FormState {
    /// Create a FormState posting to the page's own origin.
    pub fn new() -> Self {
        Self {
            draft: Signal::new(RideDraft::new()),
            modal: Signal::new(ModalVisibility::Closed),
            config: Signal::new(page_service_config()),
        }
    }

    /// Store raw input for `field`. Rejected input is logged and dropped.
    pub fn update_field(&mut self, field: DraftField, value: &str) {
        if let Err(e) = self.draft.write().update_field(field, value) {
            warn!("Ignoring input for {:?}: {}", field, e);
        }
    }

    pub fn value_of(&self, field: DraftField) -> String {
        self.draft.read().value_of(field)
    }
}

/// Ride endpoint on the origin the app was served from.
fn page_service_config() -> Option<ServiceConfig> {
    let origin = web_sys::window().and_then(|w| w.location().origin().ok())?;
    match ServiceConfig::new(&origin) {
        Ok(config) => Some(config),
        Err(e) => {
            error!("Cannot post rides from origin {}: {}", origin, e);
            None
        }
    }
}
