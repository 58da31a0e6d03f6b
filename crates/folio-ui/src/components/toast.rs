//! Toast stack for notifications pushed through context.

use dioxus::prelude::*;
use folio_core::notifications::NOTIFICATION_TIMEOUT;
use folio_core::Notification;

use super::CloseButton;
use crate::context::use_notifications;

#[component]
pub fn ToastStack() -> Element {
    let notifications = use_notifications();
    let items: Vec<Notification> = notifications.read().iter().cloned().collect();

    rsx! {
        div { class: "toast-stack", role: "status",
            for item in items {
                Toast { key: "{item.id}", notification: item.clone() }
            }
        }
    }
}

#[component]
fn Toast(notification: Notification) -> Element {
    let mut notifications = use_notifications();
    let id = notification.id;
    let kind_class = notification.kind.class();

    use_future(move || async move {
        tokio::time::sleep(NOTIFICATION_TIMEOUT).await;
        notifications.write().dismiss(id);
    });

    rsx! {
        div { class: "toast {kind_class}",
            div { class: "toast-body",
                strong { class: "toast-title", "{notification.title}" }
                p { class: "toast-message", "{notification.message}" }
            }
            CloseButton {
                onclick: move |_| {
                    notifications.write().dismiss(id);
                }
            }
        }
    }
}
