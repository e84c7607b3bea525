use dioxus::prelude::*;

use crate::{
    domain::{AppState, Tier, TOP_PICKS},
    ui::{
        components::{
            item_view::ItemView,
            tier_table::{TierRows, TopPicks},
        },
        theme,
    },
};

#[component]
pub fn TiersPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let mut active_tier = use_signal(|| Tier::SS);

    let catalog = state.with(|st| st.catalog.clone());
    if catalog.is_empty() {
        return rsx! {
            div { class: "notice notice-warning",
                "⚠️ The item data file is missing, so the tier table cannot be shown."
            }
        };
    }

    let current = active_tier();
    let picks: Vec<ItemView> = catalog
        .top_n(TOP_PICKS)
        .into_iter()
        .map(ItemView::from)
        .collect();
    let tabs: Vec<(Tier, usize)> = Tier::ALL
        .iter()
        .map(|tier| (*tier, catalog.tier_count(*tier)))
        .collect();
    let rows: Vec<ItemView> = catalog
        .tier_group(current)
        .into_iter()
        .map(ItemView::from)
        .collect();

    rsx! {
        div { class: "stack",
            section {
                h2 { class: "panel-title", "🏆 Top {TOP_PICKS} by value" }
                TopPicks { picks }
            }
            section {
                h2 { class: "panel-title", "📊 All tiers" }
                div { class: "tier-tabs",
                    for (tier, count) in tabs {
                        button {
                            class: theme::tier_tab(tier, tier == current),
                            onclick: move |_| active_tier.set(tier),
                            "{tier.emoji()} {tier}"
                            span { class: "tier-count", "{count}" }
                        }
                    }
                }
                TierRows { rows }
            }
        }
    }
}
