use dioxus::prelude::*;

use super::item_view::ItemView;
use crate::ui::theme;

/// Rows of one tier, already sorted by value.
#[component]
pub fn TierRows(rows: Vec<ItemView>) -> Element {
    if rows.is_empty() {
        return rsx! {
            p { class: "hint", "No items in this tier." }
        };
    }

    rsx! {
        div {
            for row in rows {
                div { class: "fruit-row",
                    if !row.image.is_empty() {
                        img { class: "fruit-img", src: "{row.image}", alt: "{row.short_name}" }
                    }
                    div { class: "fruit-name",
                        div { "{row.display_name}" }
                        if !row.category.is_empty() {
                            div { class: "fruit-category", "{row.category}" }
                        }
                    }
                    div { class: "fruit-price",
                        div { class: "price-text", "{row.value_label}" }
                        div { class: "trend-icon", "{theme::trend_icon(row.is_hot)}" }
                    }
                }
            }
        }
    }
}

/// Gold, silver and bronze cards for the most valuable items.
#[component]
pub fn TopPicks(picks: Vec<ItemView>) -> Element {
    rsx! {
        div { class: "columns-3",
            for (rank, item) in picks.into_iter().enumerate() {
                PodiumCard { rank, item }
            }
        }
    }
}

#[component]
fn PodiumCard(rank: usize, item: ItemView) -> Element {
    let (medal, class) = theme::podium(rank);
    rsx! {
        div { class: "{class}",
            div { class: "podium-medal", "{medal}" }
            if !item.image.is_empty() {
                img { class: "podium-img", src: "{item.image}", alt: "{item.short_name}" }
            }
            div { class: "podium-name", "{item.short_name}" }
            div { class: "podium-value", "{item.value_label}" }
        }
    }
}
