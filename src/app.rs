//! Root application module.
//!
//! Contains the main App component, AppContext definition and TerminalState,
//! following Leptos conventions.

use leptos::prelude::*;

use crate::components::Shell;
use crate::core::{get_hint, EditorEvent, LineEditor, Session, VirtualFs};
use crate::models::{ScreenMode, Theme};

// ============================================================================
// TerminalState
// ============================================================================

/// Terminal state managed with Leptos signals.
///
/// The session and line editor are plain core types; this wrapper owns them
/// as signals so the view re-renders when a key event changes them.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct TerminalState {
    /// Working directory, theme, transcript and recall buffer.
    pub session: RwSignal<Session>,
    /// Current input line.
    pub editor: RwSignal<LineEditor>,
    /// Booting or accepting input.
    pub screen_mode: RwSignal<ScreenMode>,
}

impl TerminalState {
    /// Creates a new terminal state: fresh session, empty input, booting.
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::new()),
            editor: RwSignal::new(LineEditor::new()),
            screen_mode: RwSignal::new(ScreenMode::Booting),
        }
    }

    /// Gets the current prompt string for display, without the trailing `$`.
    pub fn prompt(&self) -> String {
        self.session.with(Session::prompt)
    }

    pub fn theme(&self) -> &'static Theme {
        self.session.with(Session::theme)
    }

    pub fn is_booting(&self) -> bool {
        self.screen_mode.get() == ScreenMode::Booting
    }

    /// Mirror the text field into the editor buffer.
    pub fn set_input(&self, value: String) {
        self.editor.update(|editor| editor.set_buffer(value));
    }

    /// Route a key event through the line editor.
    pub fn dispatch(&self, event: EditorEvent) {
        let fs = VirtualFs::builtin();
        self.session.update(|session| {
            self.editor.update(|editor| editor.apply(event, session, fs));
        });
    }

    /// Ghost-text suffix for the current input.
    pub fn hint(&self) -> Option<String> {
        let input = self.editor.with(|editor| editor.buffer().to_string());
        self.session
            .with(|session| get_hint(&input, session.cwd(), VirtualFs::builtin()))
    }

    pub fn push_boot_line(&self, text: &str) {
        self.session.update(|session| session.push_boot_line(text));
    }

    /// Print the welcome hint and start accepting input.
    pub fn finish_boot(&self) {
        self.session.update(Session::push_welcome);
        self.screen_mode.set(ScreenMode::Terminal);
    }
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Terminal state (session, input line, boot status).
    pub terminal: TerminalState,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            terminal: TerminalState::new(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the main Shell component
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #1a1b26;
                    color: #a9b1d6;
                    font-family: 'Courier New', monospace;
                ">
                    <h1 style="color: #f7768e; margin-bottom: 1rem;">"Kernel panic"</h1>
                    <ul style="color: #f7768e; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="
                            background: #7aa2f7;
                            color: #1a1b26;
                            border: none;
                            padding: 0.75rem 2rem;
                            cursor: pointer;
                            font-family: 'Courier New', monospace;
                        "
                    >
                        "Reboot"
                    </button>
                </div>
            }
        >
            <Shell />
        </ErrorBoundary>
    }
}
