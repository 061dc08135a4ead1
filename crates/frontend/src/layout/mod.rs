pub mod footer;
pub mod global_context;
pub mod header;
pub mod overlay;

use leptos::prelude::*;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |                Header                    |
/// +------------------------------------------+
/// |          Content (league cards)          |
/// +------------------------------------------+
/// |                Footer                    |
/// +------------------------------------------+
/// ```
///
/// The league overlay is rendered above the content.
#[component]
pub fn Shell<C>(content: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="app-main">
                {content()}
            </main>
            <overlay::LeagueOverlay />
            <footer::Footer />
        </div>
    }
}
