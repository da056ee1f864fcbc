//! Terminal view component.
//!
//! The terminal interface with transcript and command input.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::terminal::{Input, Output};
use crate::core::EditorEvent;
use crate::models::ScreenMode;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

#[component]
pub fn Terminal(output_ref: NodeRef<leptos::html::Div>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let terminal = ctx.terminal;

    // Derived signals
    let prompt = Signal::derive(move || terminal.prompt());
    let value = Signal::derive(move || terminal.editor.with(|e| e.buffer().to_string()));
    let hint = Signal::derive(move || terminal.hint());

    // Callbacks
    let on_event = Callback::new(move |event: EditorEvent| terminal.dispatch(event));
    let on_edit = Callback::new(move |value: String| terminal.set_input(value));

    let handle_click = move |_| {
        if !terminal.is_booting() {
            dom::focus_terminal_input();
        }
    };

    view! {
        <div class=css::container on:click=handle_click>
            <div node_ref=output_ref class=css::output>
                <For
                    each=move || terminal.session.with(|s| s.transcript().to_vec())
                    key=|line| line.id
                    children=|line| view! { <Output line=line /> }
                />
            </div>

            <Show
                when=move || terminal.screen_mode.get() == ScreenMode::Terminal
                fallback=|| ()
            >
                <div class=css::inputArea>
                    <Input
                        prompt=prompt
                        value=value
                        hint=hint
                        on_event=on_event
                        on_edit=on_edit
                    />
                </div>
            </Show>
        </div>
    }
}
