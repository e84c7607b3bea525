use dioxus::{prelude::*, signals::Signal};
use tracing::{info, warn};

use crate::{
    domain::{AppState, CatalogIndex, CatalogStatus},
    infra::catalog_source::load_catalog,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{CalculatorPage, CodesPage, SettingsPage, TiersPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_settings, save_settings, PersistSaveError},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Calculator {},
    #[route("/tiers")]
    Tiers {},
    #[route("/codes")]
    Codes {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    // The catalog is read once per session; later reloads come from the settings page.
    use_hook({
        let mut state = state.clone();
        let toasts = toasts.clone();
        move || {
            if let Some(saved) = load_settings() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
            reload_catalog(state, toasts);
        }
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Reads the catalog source and swaps a freshly built index into the session.
/// Source problems leave an empty catalog and a warning toast.
pub fn reload_catalog(mut state: Signal<AppState>, toasts: Signal<Vec<ToastMessage>>) {
    let (path, label_mode) = state.with(|st| {
        (
            st.settings.resolved_catalog_path(),
            st.settings.label_mode,
        )
    });

    let load = load_catalog(&path);
    let status = match &load.error {
        Some(err) => CatalogStatus::Unavailable {
            path: load.path.clone(),
            reason: err.to_string(),
        },
        None => CatalogStatus::Loaded {
            path: load.path.clone(),
            items: load.records.len(),
            rejected: load.rejected.len(),
        },
    };

    if !load.is_available() {
        push_toast(
            toasts.clone(),
            ToastKind::Warning,
            format!(
                "No item data found at {}. Lists will stay empty.",
                path.display()
            ),
        );
    } else if !load.rejected.is_empty() {
        push_toast(
            toasts.clone(),
            ToastKind::Warning,
            format!("Skipped {} malformed catalog entries.", load.rejected.len()),
        );
    }

    let index = CatalogIndex::build(load.records, label_mode);
    info!(items = index.len(), ?label_mode, "catalog index built");
    state.with_mut(|st| st.replace_catalog(index, status));
}

pub fn persist_settings(state: &Signal<AppState>) -> Result<(), PersistSaveError> {
    let snapshot = state.with(|st| st.to_persisted());
    save_settings(&snapshot).inspect_err(|err| warn!("Failed to persist settings: {err}"))
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn Tiers() -> Element {
    rsx! { Shell { TiersPage {} } }
}

#[component]
pub fn Codes() -> Element {
    rsx! { Shell { CodesPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
