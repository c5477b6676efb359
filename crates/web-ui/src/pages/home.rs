//! Landing redirect

use dioxus::prelude::*;

use crate::components::Spinner;
use crate::hooks::use_session;
use crate::services::{AuthService, GUEST_HOME};

/// Sends staff to the layout editor and everyone else to the hotel list
#[component]
pub fn HomePage() -> Element {
    let context = use_session();
    let navigator = use_navigator();
    let target = context
        .current_user()
        .map(|user| AuthService::home_for(&user))
        .unwrap_or(GUEST_HOME);

    use_effect(move || {
        navigator.replace(target);
    });

    rsx! { Spinner {} }
}
