//! Additional-passenger count input.

use crate::state::FormState;
use dioxus::prelude::*;
use yide_core::DraftField;

/// Number of riders joining the organizer.
#[component]
pub fn PassengerField() -> Element {
    let mut state = use_context::<FormState>();
    let value = state.value_of(DraftField::AdditionalPassengers);

    let on_input = move |evt: Event<FormData>| {
        state.update_field(DraftField::AdditionalPassengers, &evt.value());
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; margin: 4px 0;",
            label {
                style: "font-size: 14px; font-weight: 500; margin-bottom: 4px;",
                "Number of additional passengers"
            }
            input {
                style: "border: 1px solid #ccc; padding: 6px 8px; border-radius: 4px;",
                r#type: "number",
                min: "0",
                placeholder: "e.g. 3",
                value: "{value}",
                oninput: on_input,
            }
            p {
                style: "font-size: 12px; color: #666; margin: 4px 0 0 0;",
                "This does "
                em { "not" }
                " include you. (So total seats = you + additional.)"
            }
        }
    }
}
