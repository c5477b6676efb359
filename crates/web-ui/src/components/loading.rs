//! Loading indicators

use dioxus::prelude::*;

/// Props for the Spinner component
#[derive(Props, Clone, PartialEq)]
pub struct SpinnerProps {
    /// Optional loading message
    #[props(default = None)]
    pub message: Option<String>,
}

/// Spinner loading indicator
#[component]
pub fn Spinner(props: SpinnerProps) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center py-12",
            div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600" }
            if let Some(message) = &props.message {
                p { class: "mt-4 text-gray-600", "{message}" }
            }
        }
    }
}

/// Props for the InlineLoader component
#[derive(Props, Clone, PartialEq)]
pub struct InlineLoaderProps {
    /// Whether the loader is visible
    pub visible: bool,
}

/// Small spinner for buttons
#[component]
pub fn InlineLoader(props: InlineLoaderProps) -> Element {
    if !props.visible {
        return rsx! {};
    }

    rsx! {
        span { class: "inline-block animate-spin rounded-full h-4 w-4 border-b-2 border-white mr-2" }
    }
}
