use crate::layout::global_context::use_app_context;
use crate::routes::router::RouterIntent;
use crate::routes::service::use_router;
use contracts::routing::HOME_TITLE;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let router = use_router();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <button
                    class="header__title button button--ghost"
                    on:click=move |_| {
                        if ctx.overlay_visible.get_untracked() {
                            router.dispatch(RouterIntent::BackRequested);
                        }
                    }
                >
                    {HOME_TITLE}
                </button>
                <span class="header__subtitle">"Teams, rosters and results across NCAA and professional volleyball"</span>
            </div>
        </header>
    }
}
