use std::time::Duration;

use dioxus::prelude::*;
use tracing::debug;

use crate::util::generate_id;

const TOAST_LIFETIME: Duration = Duration::from_secs(6);
/// Oldest notice is dropped once the stack is full.
const MAX_VISIBLE_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast-info",
            ToastKind::Success => "toast toast-success",
            ToastKind::Warning => "toast toast-warning",
            ToastKind::Error => "toast toast-error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Success => "✅",
            ToastKind::Warning => "⚠️",
            ToastKind::Error => "⛔",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

pub fn push_toast(
    mut toasts: Signal<Vec<ToastMessage>>,
    kind: ToastKind,
    message: impl Into<String>,
) {
    let toast = ToastMessage {
        id: generate_id("toast"),
        kind,
        text: message.into(),
    };
    debug!(?kind, text = %toast.text, "toast");
    toasts.with_mut(|stack| enqueue(stack, toast));
}

fn enqueue(stack: &mut Vec<ToastMessage>, toast: ToastMessage) {
    if stack.len() >= MAX_VISIBLE_TOASTS {
        stack.remove(0);
    }
    stack.push(toast);
}

fn dismiss(mut toasts: Signal<Vec<ToastMessage>>, id: &str) {
    toasts.with_mut(|stack| stack.retain(|toast| toast.id != id));
}

/// Bottom-of-window notice stack; reads the toast list from context.
#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let stack = toasts();

    rsx! {
        if !stack.is_empty() {
            ul { class: "toast-stack",
                for toast in stack {
                    ToastCard { key: "{toast.id}", toast, toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(toast: ToastMessage, toasts: Signal<Vec<ToastMessage>>) -> Element {
    let expiring_id = toast.id.clone();
    use_future(move || {
        let id = expiring_id.clone();
        async move {
            tokio::time::sleep(TOAST_LIFETIME).await;
            dismiss(toasts, &id);
        }
    });

    let id = toast.id.clone();
    rsx! {
        li { class: toast.kind.class(),
            span { "{toast.kind.icon()}" }
            p { "{toast.text}" }
            button { onclick: move |_| dismiss(toasts, &id), "Dismiss" }
        }
    }
}
