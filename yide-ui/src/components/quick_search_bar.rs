//! The top bar: quick-search fields plus the "Share a Yide" button.

use super::{ShareRideDialog, TextField, TimeRangePicker};
use crate::state::FormState;
use dioxus::prelude::*;
use log::debug;
use yide_core::{DraftField, ModalVisibility, SearchQuery};

/// Origin, destination and time window for finding a ride.
#[component]
pub fn QuickSearchBar() -> Element {
    let mut state = use_context::<FormState>();

    // Search results are rendered elsewhere; hand over the current intent.
    use_effect(move || {
        let query = SearchQuery::from_draft(&state.draft.read());
        if !query.is_empty() {
            debug!("Search intent: {:?}", query);
        }
    });

    let on_share_click = move |_| {
        state.modal.set(ModalVisibility::Open);
    };

    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; align-items: flex-end; gap: 16px; padding: 16px; margin: 0 16px; background: #F5F5F5; border-radius: 6px;",
            TextField {
                field: DraftField::Origin,
                label: "Leaving from".to_string(),
                placeholder: "e.g. Yale".to_string(),
            }
            TextField {
                field: DraftField::Destination,
                label: "Heading to".to_string(),
                placeholder: "e.g. Hartford (BDL)".to_string(),
            }
            TimeRangePicker {}
            div {
                style: "margin-left: auto;",
                button {
                    r#type: "button",
                    style: "padding: 8px 16px; background: #212121; color: white; border: none; border-radius: 4px; cursor: pointer;",
                    onclick: on_share_click,
                    "Share a Yide"
                }
            }
            if (state.modal)().is_open() {
                ShareRideDialog {}
            }
        }
    }
}
