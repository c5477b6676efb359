//! Login page component

use dioxus::prelude::*;

use crate::components::{ErrorMessage, InlineLoader};
use crate::hooks::use_session;
use crate::services::AuthService;

/// Login page component
#[component]
pub fn LoginPage() -> Element {
    let context = use_session();
    let navigator = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let handle_login = move |_| {
        if submitting() {
            return;
        }
        let mut context = context.clone();
        let auth_service = context.auth_service();
        let email_val = email.read().clone();
        let password_val = password.read().clone();

        submitting.set(true);
        error.set(None);
        spawn(async move {
            match auth_service.login(&email_val, &password_val).await {
                Ok(user) => {
                    let home = AuthService::home_for(&user);
                    context.on_login(user);
                    navigator.replace(home);
                }
                Err(e) => {
                    tracing::warn!(code = e.error_code(), "login failed");
                    error.set(Some(e.user_message()));
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "flex items-center justify-center py-12 px-4",
            div { class: "max-w-md w-full space-y-8 bg-white p-8 rounded-lg shadow",
                div {
                    h2 { class: "text-center text-3xl font-extrabold text-gray-900", "Sign in to BuatEvent" }
                    p { class: "mt-2 text-center text-sm text-gray-600",
                        "Hotel staff are taken to the room layout editor"
                    }
                }

                form {
                    class: "space-y-6",
                    onsubmit: move |evt| evt.prevent_default(),

                    div { class: "space-y-4",
                        input {
                            id: "email",
                            name: "email",
                            r#type: "email",
                            required: true,
                            class: "block w-full px-3 py-2 border border-gray-300 rounded-md text-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500",
                            placeholder: "Email address",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value())
                        }
                        input {
                            id: "password",
                            name: "password",
                            r#type: "password",
                            required: true,
                            class: "block w-full px-3 py-2 border border-gray-300 rounded-md text-sm focus:outline-none focus:ring-blue-500 focus:border-blue-500",
                            placeholder: "Password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value())
                        }
                    }

                    if let Some(message) = error() {
                        ErrorMessage { message }
                    }

                    button {
                        r#type: "submit",
                        onclick: handle_login,
                        disabled: submitting(),
                        class: "w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-white bg-blue-600 hover:bg-blue-700 disabled:opacity-50 disabled:cursor-not-allowed",
                        InlineLoader { visible: submitting() }
                        if submitting() { "Signing in..." } else { "Sign in" }
                    }
                }
            }
        }
    }
}
