//! Form controls

use dioxus::prelude::*;

/// Props for the Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Select label
    pub label: String,
    /// Current selected value
    pub value: String,
    /// Available options (value, label)
    pub options: Vec<(String, String)>,
    #[props(default = false)]
    pub disabled: bool,
    /// Callback when value changes
    pub onchange: EventHandler<String>,
}

/// Labelled select dropdown
#[component]
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        label { class: "flex flex-col text-sm font-medium text-gray-700",
            "{props.label}"
            select {
                class: "mt-1 rounded-md border border-gray-300 px-3 py-2 text-sm",
                value: "{props.value}",
                disabled: props.disabled,
                onchange: move |evt| props.onchange.call(evt.value()),
                for (value, label) in props.options.iter() {
                    option { value: "{value}", selected: *value == props.value, "{label}" }
                }
            }
        }
    }
}

/// Props for the TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    pub label: String,
    pub value: String,
    /// HTML input type (text, number, email)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default)]
    pub placeholder: String,
    #[props(default = false)]
    pub required: bool,
    pub oninput: EventHandler<String>,
}

/// Labelled single-line input
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    rsx! {
        label { class: "flex flex-col text-sm font-medium text-gray-700",
            "{props.label}"
            input {
                r#type: "{props.input_type}",
                class: "mt-1 rounded-md border border-gray-300 px-3 py-2 text-sm",
                placeholder: "{props.placeholder}",
                required: props.required,
                value: "{props.value}",
                oninput: move |evt| props.oninput.call(evt.value())
            }
        }
    }
}

/// Props for the TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    pub label: String,
    pub value: String,
    #[props(default = 3)]
    pub rows: u32,
    #[props(default)]
    pub placeholder: String,
    pub oninput: EventHandler<String>,
}

#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        label { class: "flex flex-col text-sm font-medium text-gray-700",
            "{props.label}"
            textarea {
                class: "mt-1 rounded-md border border-gray-300 px-3 py-2 text-sm",
                rows: "{props.rows}",
                placeholder: "{props.placeholder}",
                value: "{props.value}",
                oninput: move |evt| props.oninput.call(evt.value())
            }
        }
    }
}

/// Props for the Checkbox component
#[derive(Props, Clone, PartialEq)]
pub struct CheckboxProps {
    pub label: String,
    pub checked: bool,
    /// Callback when checked state changes
    pub onchange: EventHandler<bool>,
}

#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    rsx! {
        label { class: "flex items-center gap-2 text-sm text-gray-700",
            input {
                r#type: "checkbox",
                class: "h-4 w-4",
                checked: props.checked,
                onchange: move |evt| props.onchange.call(evt.checked())
            }
            span { "{props.label}" }
        }
    }
}

/// Props for the Button component
#[derive(Props, Clone, PartialEq)]
pub struct ButtonProps {
    /// Button text
    pub children: Element,
    /// Button variant (primary, secondary, danger, success)
    #[props(default = "primary".to_string())]
    pub variant: String,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Click handler
    #[props(default = EventHandler::default())]
    pub onclick: EventHandler<MouseEvent>,
}

/// Tailwind classes for a button variant
pub fn button_class(variant: &str) -> &'static str {
    match variant {
        "secondary" => "bg-gray-200 text-gray-800 hover:bg-gray-300",
        "danger" => "bg-red-600 text-white hover:bg-red-700",
        "success" => "bg-green-600 text-white hover:bg-green-700",
        _ => "bg-blue-600 text-white hover:bg-blue-700",
    }
}

/// Button component with variants
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let variant_class = button_class(&props.variant);
    let disabled = props.disabled;

    rsx! {
        button {
            r#type: "button",
            class: "px-4 py-2 rounded-md text-sm font-medium disabled:opacity-50 disabled:cursor-not-allowed {variant_class}",
            disabled,
            onclick: move |evt| {
                if !disabled {
                    props.onclick.call(evt)
                }
            },
            {props.children}
        }
    }
}
