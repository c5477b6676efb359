//! Feedback components for errors and notifications

use dioxus::prelude::*;

use crate::hooks::Notifications;

/// Props for the ErrorMessage component
#[derive(Props, Clone, PartialEq)]
pub struct ErrorMessageProps {
    /// Error message to display
    pub message: String,
}

/// Inline error message, used under forms and in place of failed lists
#[component]
pub fn ErrorMessage(props: ErrorMessageProps) -> Element {
    rsx! {
        div { class: "rounded-md bg-red-50 p-4 text-sm text-red-800",
            span { class: "mr-2", "⚠" }
            span { "{props.message}" }
        }
    }
}

/// Props for the EmptyState component
#[derive(Props, Clone, PartialEq)]
pub struct EmptyStateProps {
    pub message: String,
}

#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div { class: "text-center py-12 text-gray-500", "{props.message}" }
    }
}

/// Props for the Toast component
#[derive(Props, Clone, PartialEq)]
pub struct ToastProps {
    /// Toast message
    pub message: String,
    /// Toast type (success, error, info)
    #[props(default = "info".to_string())]
    pub toast_type: String,
    /// Callback when toast is dismissed
    #[props(default = EventHandler::default())]
    pub ondismiss: EventHandler<()>,
}

/// Toast notification component
#[component]
pub fn Toast(props: ToastProps) -> Element {
    let color = match props.toast_type.as_str() {
        "success" => "bg-green-600",
        "error" => "bg-red-600",
        _ => "bg-gray-800",
    };

    rsx! {
        div { class: "flex items-center gap-3 rounded-md px-4 py-3 text-white shadow-lg {color}",
            span { class: "flex-1", "{props.message}" }
            button {
                class: "text-white/80 hover:text-white",
                onclick: move |_| props.ondismiss.call(()),
                "×"
            }
        }
    }
}

/// Props for the NotificationStack component
#[derive(Props, Clone, PartialEq)]
pub struct NotificationStackProps {
    pub notifications: Notifications,
}

/// Active notifications of a page, newest last
#[component]
pub fn NotificationStack(props: NotificationStackProps) -> Element {
    let mut notifications = props.notifications;
    let active = notifications.active();
    if active.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80",
            for notification in active {
                Toast {
                    key: "{notification.id}",
                    message: notification.message.clone(),
                    toast_type: notification.kind.toast_type().to_string(),
                    ondismiss: move |_| notifications.dismiss(notification.id),
                }
            }
        }
    }
}
