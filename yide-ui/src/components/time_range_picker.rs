//! Date plus start/end time inputs.

use crate::state::FormState;
use dioxus::prelude::*;
use yide_core::DraftField;

#[derive(Props, Clone, PartialEq)]
pub struct TimeRangePickerProps {
    /// Include the date input (the share dialog only asks for times)
    #[props(default = true)]
    pub with_date: bool,
}

/// Date and time window picker shared by the search bar and the share dialog.
#[component]
pub fn TimeRangePicker(props: TimeRangePickerProps) -> Element {
    let mut state = use_context::<FormState>();
    let date = state.value_of(DraftField::Date);
    let start = state.value_of(DraftField::StartTime);
    let end = state.value_of(DraftField::EndTime);

    let on_date_change = move |evt: Event<FormData>| {
        state.update_field(DraftField::Date, &evt.value());
    };

    let on_start_change = move |evt: Event<FormData>| {
        state.update_field(DraftField::StartTime, &evt.value());
    };

    let on_end_change = move |evt: Event<FormData>| {
        state.update_field(DraftField::EndTime, &evt.value());
    };

    rsx! {
        div {
            style: "margin: 4px 0; display: flex; gap: 12px; align-items: flex-end;",
            if props.with_date {
                label {
                    style: "display: flex; flex-direction: column; font-size: 14px; font-weight: 500;",
                    "Date"
                    input {
                        r#type: "date",
                        value: "{date}",
                        onchange: on_date_change,
                    }
                }
            }
            label {
                style: "display: flex; flex-direction: column; font-size: 14px; font-weight: 500;",
                "Start time"
                input {
                    r#type: "time",
                    value: "{start}",
                    onchange: on_start_change,
                }
            }
            label {
                style: "display: flex; flex-direction: column; font-size: 14px; font-weight: 500;",
                "End time"
                input {
                    r#type: "time",
                    value: "{end}",
                    onchange: on_end_change,
                }
            }
        }
    }
}
