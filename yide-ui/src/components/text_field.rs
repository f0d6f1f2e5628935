//! Labeled text input bound to one draft field.

use crate::state::FormState;
use dioxus::prelude::*;
use yide_core::DraftField;

#[derive(Props, Clone, PartialEq)]
pub struct TextFieldProps {
    pub field: DraftField,
    pub label: String,
    #[props(default)]
    pub placeholder: String,
    /// Shows "(optional)" after the label
    #[props(default)]
    pub optional: bool,
    /// Render a multi-line textarea instead of an input
    #[props(default)]
    pub multiline: bool,
}

#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let mut state = use_context::<FormState>();
    let field = props.field;
    let value = state.value_of(field);

    let on_input = move |evt: Event<FormData>| {
        state.update_field(field, &evt.value());
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; margin: 4px 0;",
            label {
                style: "font-size: 14px; font-weight: 500; margin-bottom: 4px;",
                "{props.label} "
                if props.optional {
                    span { style: "color: #9E9E9E;", "(optional)" }
                }
            }
            if props.multiline {
                textarea {
                    style: "width: 100%; border: 1px solid #ccc; padding: 8px; border-radius: 4px; font-size: 14px;",
                    rows: "3",
                    placeholder: "{props.placeholder}",
                    value: "{value}",
                    oninput: on_input,
                }
            } else {
                input {
                    style: "border: 1px solid #ccc; padding: 6px 8px; border-radius: 4px;",
                    r#type: "text",
                    placeholder: "{props.placeholder}",
                    value: "{value}",
                    oninput: on_input,
                }
            }
        }
    }
}
