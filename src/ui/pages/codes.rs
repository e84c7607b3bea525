use dioxus::prelude::*;

use crate::{
    domain::{ACTIVE_CODES, RESET_CODES},
    ui::theme,
};

#[component]
pub fn CodesPage() -> Element {
    rsx! {
        div { class: "stack",
            p { class: "hint", "🎟️ Select a code to copy it, then redeem it with the Twitter-bird button in game." }

            section { class: "panel",
                h2 { class: "panel-title", "🔥 Stat reset" }
                for promo in RESET_CODES.iter() {
                    div { class: "code-box",
                        span { class: "code-text", "{promo.code}" }
                        span { class: "code-reward", "🎁 {promo.reward}" }
                    }
                }
            }

            section { class: "panel",
                h2 { class: "panel-title", "⚡ EXP boosts and more" }
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Code" }
                            th { "Reward" }
                            th { "Type" }
                        }
                    }
                    tbody {
                        for promo in ACTIVE_CODES.iter() {
                            tr {
                                td { span { class: "code-text", "{promo.code}" } }
                                td { "{promo.reward}" }
                                td { span { class: theme::code_kind_badge(promo.kind), "{promo.kind.label()}" } }
                            }
                        }
                    }
                }
            }
        }
    }
}
