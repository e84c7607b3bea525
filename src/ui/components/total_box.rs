use dioxus::prelude::*;

use crate::util::format_value;

#[component]
pub fn TotalBox(label: String, value: u64) -> Element {
    let display = format_value(value);
    rsx! {
        div { class: "total-box",
            div { class: "total-label", "{label}" }
            div { class: "total-value", "{display}" }
        }
    }
}
