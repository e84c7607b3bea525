use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME, DATA_UPDATED};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let item_count = state.with(|st| st.catalog.len());

    let current_route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        div { class: "app-shell",
            header { class: "app-header",
                div {
                    h1 { class: "app-title", "⚖️ {APP_NAME}" }
                    p { class: "app-subtitle", "{item_count} items in catalog" }
                }
                nav { class: "app-nav",
                    NavButton { active: matches!(current_route, Route::Calculator {}), onclick: move |_| { nav.push(Route::Calculator {}); }, label: "🧮 Calculator" }
                    NavButton { active: matches!(current_route, Route::Tiers {}), onclick: move |_| { nav.push(Route::Tiers {}); }, label: "💰 Value tiers" }
                    NavButton { active: matches!(current_route, Route::Codes {}), onclick: move |_| { nav.push(Route::Codes {}); }, label: "🏴‍☠️ Codes" }
                    NavButton { active: matches!(current_route, Route::Settings {}), onclick: move |_| { nav.push(Route::Settings {}); }, label: "⚙️" }
                }
            }
            main { class: "app-main",
                {children}
            }
            footer { class: "app-footer",
                "Values updated: {DATA_UPDATED} · {version_label()}"
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: theme::nav_tab(active),
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
