//! Main shell component.
//!
//! Full-screen CRT frame around the terminal. Applies the active theme's
//! palette and starts the boot sequence.

use leptos::prelude::*;

use super::boot;
use super::terminal::Terminal;
use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/terminal/shell.module.css");

/// Auto-scroll output to bottom when the transcript changes.
fn setup_autoscroll_effect(ctx: AppContext, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        ctx.terminal.session.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

/// Shell component.
///
/// - Provides global UI effects (CRT overlay, scanlines)
/// - Exposes the theme palette as CSS variables
/// - Handles boot sequence initialization
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let output_ref = NodeRef::<leptos::html::Div>::new();

    boot::run(ctx);
    setup_autoscroll_effect(ctx, output_ref);

    let palette_vars = move || ctx.terminal.theme().palette.css_vars();

    view! {
        <div class=css::screen style=palette_vars>
            <div class=css::crtOverlay></div>
            <div class=css::scanline></div>

            <div class=css::main>
                <Terminal output_ref=output_ref />
            </div>
        </div>
    }
}
