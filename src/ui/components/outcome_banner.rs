use dioxus::prelude::*;

use crate::domain::ValuationResult;
use crate::ui::theme;

#[component]
pub fn OutcomeBanner(result: ValuationResult) -> Element {
    let class = theme::outcome_banner(result.outcome);
    let message = theme::outcome_message(result.outcome);
    let headline = result.headline();

    rsx! {
        div { class: "{class}",
            h3 { "{message}" }
            p { class: "muted", "{headline}" }
        }
    }
}
