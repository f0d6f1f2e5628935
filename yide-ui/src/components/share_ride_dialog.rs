//! Modal form for publishing a new ride.

use super::{PassengerField, TextField, TimeRangePicker};
use crate::state::FormState;
use chrono::Local;
use dioxus::prelude::*;
use log::error;
use yide_client::HttpRideService;
use yide_core::{submit_ride, DraftField, ModalVisibility};

/// "Share a Yide" dialog.
///
/// Submitting posts the draft once. The dialog closes when the backend
/// accepts the ride and stays open otherwise; failures only reach the log.
#[component]
pub fn ShareRideDialog() -> Element {
    let mut state = use_context::<FormState>();

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let draft = state.draft.read().clone();
        let Some(config) = state.config.read().clone() else {
            error!("Error creating ride: no ride endpoint for this page");
            return;
        };

        spawn(async move {
            let service = HttpRideService::new(config);
            let outcome = submit_ride(&service, &draft, Local::now().date_naive(), &Local).await;
            let current = (state.modal)();
            state.modal.set(current.after_submit(outcome.is_ok()));
        });
    };

    let on_cancel = move |_| {
        state.modal.set(ModalVisibility::Closed);
    };

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); display: flex; justify-content: center; align-items: center; z-index: 50;",
            div {
                style: "background: white; border-radius: 8px; padding: 24px; width: 100%; max-width: 640px; font-family: system-ui, -apple-system, sans-serif;",
                role: "dialog",
                h2 { style: "margin: 0 0 4px 0; font-size: 18px;", "Share a Yide" }
                p {
                    style: "font-size: 14px; color: #666; margin: 0 0 16px 0;",
                    "Fill out the details below to create a new ride listing."
                }

                form {
                    style: "display: flex; flex-direction: column; gap: 12px;",
                    onsubmit: on_submit,

                    TextField {
                        field: DraftField::OrganizerName,
                        label: "Organizer name".to_string(),
                        placeholder: "Peter Salovey".to_string(),
                        optional: true,
                    }
                    TextField {
                        field: DraftField::PhoneNumber,
                        label: "Phone number".to_string(),
                        placeholder: "555-555-5555".to_string(),
                        optional: true,
                    }
                    div {
                        style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
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
                    }
                    TimeRangePicker { with_date: false }
                    PassengerField {}
                    TextField {
                        field: DraftField::Description,
                        label: "Description".to_string(),
                        placeholder: "I have two suitcases, planning to order an UberXL...".to_string(),
                        optional: true,
                        multiline: true,
                    }

                    div {
                        style: "display: flex; justify-content: flex-end; gap: 8px;",
                        button {
                            r#type: "button",
                            style: "padding: 8px 16px; background: white; border: 1px solid #ccc; border-radius: 4px; cursor: pointer;",
                            onclick: on_cancel,
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            style: "padding: 8px 16px; background: #212121; color: white; border: none; border-radius: 4px; cursor: pointer;",
                            "Post Yide"
                        }
                    }
                }
            }
        }
    }
}
