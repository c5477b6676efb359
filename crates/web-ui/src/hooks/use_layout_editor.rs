//! Room layout editor bound to component state

use dioxus::prelude::*;
use std::rc::Rc;

use crate::editor::{EditorState, EditorStore, LayoutEditor};
use crate::hooks::use_session;
use crate::services::{BrowserDialogs, LayoutApi};

/// Layout editor whose state lives in a component signal
pub type EditorHandle = LayoutEditor<Signal<EditorState>>;

impl EditorStore for Signal<EditorState> {
    fn with_state<R>(&self, f: impl FnOnce(&EditorState) -> R) -> R {
        f(&self.peek())
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut EditorState) -> R) -> R {
        let mut signal = *self;
        let mut state = signal.write();
        f(&mut state)
    }
}

/// Editor for `hotel_id`; starts loading room types, floors and rooms on mount
pub fn use_layout_editor(hotel_id: i64) -> EditorHandle {
    let context = use_session();
    let state = use_signal(EditorState::new);

    use_hook(move || {
        let api = LayoutApi::new(context.client(), hotel_id);
        let editor = LayoutEditor::new(api, state, Rc::new(BrowserDialogs));
        let loader = editor.clone();
        spawn(async move {
            loader.initialize().await;
        });
        editor
    })
}
