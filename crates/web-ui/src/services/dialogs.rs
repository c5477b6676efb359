//! Blocking operator dialogs (alert, confirm, prompt)

/// Modal dialogs shown to the operator
pub trait Dialogs {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
    /// `None` when the operator cancels
    fn prompt(&self, message: &str, default: &str) -> Option<String>;
}

/// `window.alert` / `confirm` / `prompt`
///
/// Outside a browser every dialog is logged and treated as cancelled.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct BrowserDialogs;

#[cfg(target_arch = "wasm32")]
impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.alert_with_message(message) {
                    tracing::warn!(%message, "alert failed: {e:?}");
                }
            }
            None => tracing::info!(%message, "alert"),
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn prompt(&self, message: &str, default: &str) -> Option<String> {
        web_sys::window()
            .and_then(|window| window.prompt_with_message_and_default(message, default).ok())
            .flatten()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Dialogs for BrowserDialogs {
    fn alert(&self, message: &str) {
        tracing::info!(%message, "alert");
    }

    fn confirm(&self, message: &str) -> bool {
        tracing::info!(%message, "confirm (no browser, declined)");
        false
    }

    fn prompt(&self, message: &str, _default: &str) -> Option<String> {
        tracing::info!(%message, "prompt (no browser, cancelled)");
        None
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Dialogs with scripted answers that records every alert
    #[derive(Default)]
    pub struct ScriptedDialogs {
        pub alerts: RefCell<Vec<String>>,
        pub confirms: RefCell<VecDeque<bool>>,
        pub prompts: RefCell<VecDeque<Option<String>>>,
    }

    impl ScriptedDialogs {
        pub fn confirming(answer: bool) -> Self {
            let dialogs = Self::default();
            dialogs.confirms.borrow_mut().push_back(answer);
            dialogs
        }

        pub fn prompting(answer: Option<&str>) -> Self {
            let dialogs = Self::default();
            dialogs
                .prompts
                .borrow_mut()
                .push_back(answer.map(str::to_string));
            dialogs
        }

        pub fn alerts(&self) -> Vec<String> {
            self.alerts.borrow().clone()
        }
    }

    impl Dialogs for ScriptedDialogs {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn confirm(&self, _message: &str) -> bool {
            self.confirms.borrow_mut().pop_front().unwrap_or(false)
        }

        fn prompt(&self, _message: &str, _default: &str) -> Option<String> {
            self.prompts.borrow_mut().pop_front().flatten()
        }
    }
}
