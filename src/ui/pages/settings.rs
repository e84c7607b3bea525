use std::path::PathBuf;

use dioxus::prelude::*;

use crate::{
    app::{persist_settings, reload_catalog},
    domain::{
        app_state::{CATALOG_PATH_ENV, DEFAULT_CATALOG_FILE},
        AppState, CatalogStatus, LabelMode,
    },
    ui::components::toast::{push_toast, ToastKind, ToastMessage},
    util::version::{version_label, APP_NAME, DATA_UPDATED},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let initial_path = state.with(|st| {
        st.settings
            .catalog_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_default()
    });
    let mut path_input = use_signal(|| initial_path);

    let label_mode = state.with(|st| st.settings.label_mode);
    let status_line = state.with(|st| status_label(&st.catalog_status));
    let env_override = std::env::var(CATALOG_PATH_ENV).ok().filter(|v| !v.is_empty());

    let on_apply_path = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let catalog_path = parse_catalog_path(&path_input());
            state.with_mut(|st| st.settings.catalog_path = catalog_path);
            save_and_reload(state, toasts, "Catalog path saved.");
        }
    };

    let on_reload = {
        let state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            reload_catalog(state, toasts);
            // Failed loads already raised their own warning.
            if let Some(message) = state.with(|st| reload_confirmation(&st.catalog_status)) {
                push_toast(toasts.clone(), ToastKind::Success, message);
            }
        }
    };

    rsx! {
        div { class: "stack",
            section { class: "panel",
                h2 { class: "panel-title", "Item data" }
                form { class: "picker", onsubmit: on_apply_path,
                    div { style: "flex: 1;",
                        label { class: "field-label", "Catalog file" }
                        input {
                            class: "input",
                            value: path_input(),
                            oninput: move |evt| path_input.set(evt.value()),
                            placeholder: DEFAULT_CATALOG_FILE,
                        }
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Save" }
                    button { class: "btn", r#type: "button", onclick: on_reload, "Reload" }
                }
                if let Some(ref path) = env_override {
                    p { class: "hint", "{CATALOG_PATH_ENV} is set; reading {path} instead." }
                }
                p { class: "hint", "{status_line}" }
            }

            section { class: "panel",
                h2 { class: "panel-title", "Item names" }
                div { class: "btn-row",
                    for mode in [LabelMode::Bilingual, LabelMode::CanonicalOnly] {
                        button {
                            class: mode_button_class(mode == label_mode),
                            onclick: move |_| apply_label_mode(state, toasts, mode),
                            "{mode.name()}"
                        }
                    }
                }
                p { class: "hint", "Changing this rebuilds the item list. Current picks carry over." }
            }

            section { class: "panel",
                h2 { class: "panel-title", "About" }
                p { "{APP_NAME} {version_label()}" }
                p { class: "hint", "Values updated {DATA_UPDATED}. Trade picks are never saved." }
            }
        }
    }
}

fn save_and_reload(
    state: Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    message: impl Into<String>,
) {
    match persist_settings(&state) {
        Ok(()) => push_toast(toasts.clone(), ToastKind::Success, message),
        Err(err) => push_toast(
            toasts.clone(),
            ToastKind::Error,
            format!("Could not save settings: {err}"),
        ),
    }
    reload_catalog(state, toasts);
}

fn apply_label_mode(mut state: Signal<AppState>, toasts: Signal<Vec<ToastMessage>>, mode: LabelMode) {
    if state.with(|st| st.settings.label_mode) == mode {
        return;
    }
    state.with_mut(|st| st.settings.label_mode = mode);
    save_and_reload(
        state,
        toasts,
        format!("Item names now shown as {}.", mode.name()),
    );
}

fn mode_button_class(active: bool) -> &'static str {
    if active {
        "btn btn-primary"
    } else {
        "btn"
    }
}

fn reload_confirmation(status: &CatalogStatus) -> Option<String> {
    match status {
        CatalogStatus::Loaded { items, .. } => Some(format!("Catalog reloaded: {items} items.")),
        CatalogStatus::NotLoaded | CatalogStatus::Unavailable { .. } => None,
    }
}

/// Blank input means "use the default file".
fn parse_catalog_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

fn status_label(status: &CatalogStatus) -> String {
    match status {
        CatalogStatus::NotLoaded => "Catalog not loaded yet.".to_string(),
        CatalogStatus::Loaded {
            path,
            items,
            rejected: 0,
        } => format!("Loaded {items} items from {}.", path.display()),
        CatalogStatus::Loaded {
            path,
            items,
            rejected,
        } => format!(
            "Loaded {items} items from {} ({rejected} malformed entries skipped).",
            path.display()
        ),
        CatalogStatus::Unavailable { reason, .. } => format!("No items loaded: {reason}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_path() {
        assert_eq!(parse_catalog_path("   "), None);
        assert_eq!(
            parse_catalog_path(" data/fruits.json "),
            Some(PathBuf::from("data/fruits.json"))
        );
    }

    #[test]
    fn test_status_label() {
        let loaded = CatalogStatus::Loaded {
            path: PathBuf::from("fruits_data.json"),
            items: 47,
            rejected: 0,
        };
        assert_eq!(status_label(&loaded), "Loaded 47 items from fruits_data.json.");

        let partial = CatalogStatus::Loaded {
            path: PathBuf::from("fruits_data.json"),
            items: 40,
            rejected: 2,
        };
        assert!(status_label(&partial).contains("2 malformed entries skipped"));

        let missing = CatalogStatus::Unavailable {
            path: PathBuf::from("nope.json"),
            reason: "not found".to_string(),
        };
        assert_eq!(status_label(&missing), "No items loaded: not found");
    }

    #[test]
    fn test_reload_confirmation_only_after_successful_load() {
        let loaded = CatalogStatus::Loaded {
            path: PathBuf::from("fruits_data.json"),
            items: 47,
            rejected: 1,
        };
        assert_eq!(
            reload_confirmation(&loaded).as_deref(),
            Some("Catalog reloaded: 47 items.")
        );

        let missing = CatalogStatus::Unavailable {
            path: PathBuf::from("nope.json"),
            reason: "not found".to_string(),
        };
        assert_eq!(reload_confirmation(&missing), None);
        assert_eq!(reload_confirmation(&CatalogStatus::NotLoaded), None);
    }
}
