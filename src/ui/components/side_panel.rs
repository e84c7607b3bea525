use dioxus::prelude::*;

use super::{
    item_view::ChipView,
    toast::{push_toast, ToastKind, ToastMessage},
    total_box::TotalBox,
};
use crate::domain::{AppState, Side};

/// Picker, selected chips and running total for one side of the trade.
#[component]
pub fn SidePanel(side: Side, total: u64) -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut query = use_signal(String::new);

    let catalog = state.with(|st| st.catalog.clone());
    let options: Vec<String> = catalog.options().into_iter().map(str::to_string).collect();
    let chips: Vec<ChipView> = state.with(|st| {
        st.selection(side)
            .iter()
            .map(|name| ChipView::resolve(&catalog, name))
            .collect()
    });
    let list_id = match side {
        Side::Mine => "items-mine",
        Side::Theirs => "items-theirs",
    };
    let placeholder = if options.is_empty() {
        "No items available"
    } else {
        "Type or pick an item"
    };

    let on_add = move |evt: FormEvent| {
        evt.prevent_default();
        let name = query().trim().to_string();
        if name.is_empty() {
            push_toast(toasts.clone(), ToastKind::Warning, "Pick an item first.");
            return;
        }
        if !state.with(|st| st.catalog.contains(&name)) {
            push_toast(
                toasts.clone(),
                ToastKind::Error,
                format!("{name} is not in the catalog. Use the suggestion list."),
            );
            return;
        }
        state.with_mut(|st| st.add_selection(side, name));
        query.set(String::new());
    };

    rsx! {
        section { class: "panel",
            h2 { class: "panel-title", "{side.emoji()} {side.title()}" }
            form { class: "picker", onsubmit: on_add,
                div { style: "flex: 1;",
                    label { class: "field-label", "Item" }
                    input {
                        class: "input",
                        value: query(),
                        oninput: move |evt| query.set(evt.value()),
                        list: list_id,
                        placeholder: placeholder,
                        disabled: options.is_empty(),
                    }
                    datalist {
                        id: list_id,
                        for name in options.iter() {
                            option { value: name.clone() }
                        }
                    }
                }
                button { class: "btn btn-primary", r#type: "submit", disabled: options.is_empty(), "Add" }
            }
            if !chips.is_empty() {
                ul { class: "chip-list",
                    for (position, chip) in chips.into_iter().enumerate() {
                        li { class: "chip",
                            button {
                                class: "chip-remove",
                                title: "Remove",
                                onclick: move |_| {
                                    state.with_mut(|st| {
                                        st.remove_selection(side, position);
                                    });
                                },
                                "✕"
                            }
                            match chip.item {
                                Some(item) => rsx! {
                                    if !item.image.is_empty() {
                                        img { class: "chip-img", src: "{item.image}", alt: "{item.short_name}" }
                                    }
                                    div { class: "chip-name", title: "{item.display_name}", "{item.short_name}" }
                                    div { class: "chip-value", "{item.value_label}" }
                                },
                                None => rsx! {
                                    div { class: "chip-name", title: "{chip.display_name}", "{chip.display_name}" }
                                    div { class: "chip-value muted", "not in catalog" }
                                },
                            }
                        }
                    }
                }
            }
            TotalBox { label: side.total_label().to_string(), value: total }
        }
    }
}
