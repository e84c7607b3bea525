#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod infra;
mod ui;
mod util;

use dioxus::prelude::*;
use tracing::info;

#[cfg(feature = "desktop")]
use dioxus_desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config as DesktopConfig,
};

use crate::util::{
    logging::init_tracing,
    version::{version_label, APP_NAME},
};

fn main() {
    init_tracing("info");
    info!(version = %version_label(), "starting {APP_NAME}");

    #[cfg(feature = "desktop")]
    {
        prefer_stable_webview_renderer();
        LaunchBuilder::new()
            .with_cfg(desktop! { desktop_config() })
            .launch(app::App);
    }

    #[cfg(not(feature = "desktop"))]
    LaunchBuilder::new().launch(app::App);
}

#[cfg(feature = "desktop")]
fn desktop_config() -> DesktopConfig {
    DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(format!("{APP_NAME} {}", version_label()))
            .with_inner_size(LogicalSize::new(1100.0, 820.0))
            .with_min_inner_size(LogicalSize::new(720.0, 560.0)),
    )
}

/// WebKitGTK under Wayland can crash with explicit sync. Falls back to the GL
/// backend and the non-DMABUF renderer unless the user already chose.
#[cfg(feature = "desktop")]
fn prefer_stable_webview_renderer() {
    if std::env::var_os("WAYLAND_DISPLAY").is_none() {
        return;
    }
    for (key, value) in [("WGPU_BACKEND", "gl"), ("WEBKIT_DISABLE_DMABUF_RENDERER", "1")] {
        if std::env::var_os(key).is_none() {
            std::env::set_var(key, value);
        }
    }
}
