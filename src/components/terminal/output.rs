//! Transcript line rendering.

use leptos::prelude::*;

use crate::config::{APP_HOST, APP_USER};
use crate::models::{
    Fragment, InfoBlock, LineContent, LineData, LineKind, ListEntry, TextStyle, TranscriptLine,
};

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// Get CSS class for a TextStyle
fn style_class(style: TextStyle) -> &'static str {
    match style {
        TextStyle::Plain => css::textFg,
        TextStyle::Bold => css::bold,
        TextStyle::Heading => css::heading,
        TextStyle::Primary => css::textPrimary,
        TextStyle::Secondary => css::textSecondary,
        TextStyle::Info => css::textInfo,
        TextStyle::Code => css::code,
    }
}

fn fragment_view(fragment: Fragment) -> impl IntoView {
    if fragment.style == TextStyle::Code {
        view! { <pre class=css::code>{fragment.text}</pre> }.into_any()
    } else {
        view! { <span class=style_class(fragment.style)>{fragment.text}</span> }.into_any()
    }
}

/// Text color for lines that carry a bare string.
fn kind_class(kind: LineKind) -> &'static str {
    match kind {
        LineKind::Input => css::textPrimary,
        LineKind::Output | LineKind::Boot => css::textFg,
        LineKind::Error => css::textError,
    }
}

/// Directories are bold in the prompt color, files in body text.
fn entry_class(entry: &ListEntry) -> String {
    if entry.is_dir {
        format!("{} {}", css::textPrimary, css::fontBold)
    } else {
        css::textFg.to_string()
    }
}

fn listing_view(entries: Vec<ListEntry>) -> impl IntoView {
    view! {
        <div class=css::listing>
            {entries
                .into_iter()
                .map(|entry| view! { <span class=entry_class(&entry)>{entry.display_name()}</span> })
                .collect_view()}
        </div>
    }
}

fn info_view(block: InfoBlock) -> impl IntoView {
    view! {
        <div class=css::info>
            <pre class=format!("{} glow", css::logo)>{block.logo}</pre>
            <div class=css::infoFields>
                <div>
                    <span class=css::textPrimary>{block.user}</span>
                    <span class=css::textFg>"@"</span>
                    <span class=css::textPrimary>{block.host}</span>
                </div>
                <div class=css::textFg>"----------------"</div>
                {block
                    .fields
                    .into_iter()
                    .map(|field| {
                        view! {
                            <div>
                                <span class=css::textInfo>{format!("{}: ", field.label)}</span>
                                <span class=css::textFg>{field.value}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn content_view(content: LineContent) -> AnyView {
    match content {
        LineContent::Text(text) => {
            view! { <div class=format!("{} {}", css::line, css::textFg)>{text}</div> }.into_any()
        }
        LineContent::Fragments(fragments) => view! {
            <div class=css::line>
                {fragments.into_iter().map(fragment_view).collect_view()}
            </div>
        }
        .into_any(),
        LineContent::Listing(entries) => listing_view(entries).into_any(),
        LineContent::Info(block) => info_view(block).into_any(),
    }
}

#[component]
pub fn Output(line: TranscriptLine) -> impl IntoView {
    let color = kind_class(line.kind());
    match line.data {
        LineData::Input { path, command } => view! {
            <div class=css::command>
                <span class=format!("{} glow", color)>
                    {format!("{}@{}:{}", APP_USER, APP_HOST, path)}
                </span>
                <span class=css::textFg>"$ "</span>
                <span class=css::textSecondary>{command}</span>
            </div>
        }
        .into_any(),
        LineData::Output(content) => content_view(content),
        LineData::Boot(text) | LineData::Error(text) => {
            view! { <div class=format!("{} {}", css::line, color)>{text}</div> }.into_any()
        }
    }
}
