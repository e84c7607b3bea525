use dioxus::prelude::*;

use crate::{
    domain::{share_summary, AppState, Side},
    ui::components::{outcome_banner::OutcomeBanner, side_panel::SidePanel},
};

#[component]
pub fn CalculatorPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    let (result, mine, theirs, has_selection, catalog_empty) = state.with(|st| {
        (
            st.valuation(),
            st.my_selection.clone(),
            st.their_selection.clone(),
            st.has_selection(),
            st.catalog.is_empty(),
        )
    });
    let summary = share_summary(&result, &mine, &theirs);
    let unresolved_count = result.unresolved.len();

    rsx! {
        div { class: "stack",
            p { class: "hint", "Add the items on each side of the trade to see who comes out ahead." }
            if catalog_empty {
                div { class: "notice notice-warning",
                    "⚠️ No item data is loaded. Check the catalog file in Settings."
                }
            }
            section { class: "columns",
                SidePanel { side: Side::Mine, total: result.my_total }
                SidePanel { side: Side::Theirs, total: result.their_total }
            }
            if has_selection {
                OutcomeBanner { result: result.clone() }
                if unresolved_count > 0 {
                    div { class: "notice notice-warning",
                        "{unresolved_count} selected item(s) are no longer in the catalog and count as $0."
                    }
                }
                section { class: "panel",
                    h2 { class: "panel-title", "📤 Share the result" }
                    pre { class: "share-text", "{summary}" }
                }
                div { class: "btn-row",
                    button {
                        class: "btn",
                        onclick: move |_| state.with_mut(|st| st.clear_selections()),
                        "Clear both sides"
                    }
                }
            } else {
                div { class: "notice notice-info", "👆 Pick items above and the result shows up here." }
            }
        }
    }
}
