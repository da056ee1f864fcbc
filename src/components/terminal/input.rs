//! Terminal input component with ghost-text hints and key bindings.

use leptos::{ev, prelude::*};
use wasm_bindgen::JsCast;

use crate::core::EditorEvent;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Map a keydown to an editor event. ArrowRight is handled separately
/// because it depends on the caret position.
fn editor_event(key: &str, ctrl: bool) -> Option<EditorEvent> {
    match key {
        "Enter" => Some(EditorEvent::Submit),
        "ArrowUp" => Some(EditorEvent::RecallPrevious),
        "ArrowDown" => Some(EditorEvent::RecallNext),
        "Tab" => Some(EditorEvent::Complete),
        "c" | "C" if ctrl => Some(EditorEvent::Cancel),
        "l" | "L" if ctrl => Some(EditorEvent::ClearScreen),
        _ => None,
    }
}

/// Caret offset of the end of `text`.
///
/// DOM selection offsets count UTF-16 code units, not bytes.
fn caret_end(text: &str) -> u32 {
    text.encode_utf16().count() as u32
}

/// Prompt line: `user@host:path$ ` followed by the text field.
///
/// The buffer itself lives in the line editor; this component mirrors it
/// through `value` and reports edits with `on_edit`.
#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] hint: Signal<Option<String>>,
    on_event: Callback<EditorEvent>,
    on_edit: Callback<String>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let end = caret_end(&input.value());
            let _ = input.set_selection_range(end, end);
        }
    };

    // Accept the ghost hint when the caret sits at the end of the line
    let handle_arrow_right = move || -> Option<String> {
        let input = input_ref.get()?;
        let current = value.get_untracked();
        let pos = input.selection_start().ok().flatten().unwrap_or(0);
        if pos != caret_end(&current) {
            return None;
        }
        hint.get_untracked().map(|h| format!("{}{}", current, h))
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        let key = ev.key();
        if key == "ArrowRight" {
            if let Some(completed) = handle_arrow_right() {
                ev.prevent_default();
                on_edit.run(completed);
                move_cursor_to_end();
            }
            return;
        }

        let Some(event) = editor_event(&key, ev.ctrl_key()) else {
            return;
        };
        if event != EditorEvent::Submit {
            ev.prevent_default();
        }
        on_event.run(event);
        if matches!(
            event,
            EditorEvent::RecallPrevious | EditorEvent::RecallNext | EditorEvent::Complete
        ) {
            move_cursor_to_end();
        }
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        on_edit.run(input.value());
    };

    view! {
        <div class=css::inputWrapper>
            <div class=css::line>
                <span class=format!("{} glow", css::prompt)>{prompt}</span>
                <span class=css::separator>"$ "</span>
                <div class=css::field>
                    // Ghost text overlay (shows input value + hint)
                    <div class=css::ghostOverlay>
                        <span class=css::ghostText>{move || value.get()}</span>
                        <span class=css::ghostHint>{move || hint.get().unwrap_or_default()}</span>
                    </div>
                    <input
                        node_ref=input_ref
                        type="text"
                        class=css::input
                        autocomplete="off"
                        spellcheck="false"
                        prop:value=value
                        on:input=handle_input
                        on:keydown=handle_keydown
                    />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(editor_event("Enter", false), Some(EditorEvent::Submit));
        assert_eq!(editor_event("ArrowUp", false), Some(EditorEvent::RecallPrevious));
        assert_eq!(editor_event("ArrowDown", false), Some(EditorEvent::RecallNext));
        assert_eq!(editor_event("Tab", false), Some(EditorEvent::Complete));
        assert_eq!(editor_event("c", true), Some(EditorEvent::Cancel));
        assert_eq!(editor_event("l", true), Some(EditorEvent::ClearScreen));
    }

    #[test]
    fn test_caret_end_counts_utf16_units() {
        assert_eq!(caret_end("cat ab"), 6);
        assert_eq!(caret_end("cd café"), 7);
        assert_eq!(caret_end("ls 🦀"), 5);
        assert_eq!(caret_end(""), 0);
    }

    #[test]
    fn test_plain_letters_are_not_bound() {
        assert_eq!(editor_event("c", false), None);
        assert_eq!(editor_event("l", false), None);
        assert_eq!(editor_event("ArrowRight", false), None);
        assert_eq!(editor_event("a", true), None);
    }
}
