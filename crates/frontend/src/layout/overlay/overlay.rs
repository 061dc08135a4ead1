use crate::domain::league::ui::overview::LeagueOverview;
use crate::domain::league::ui::placeholder::ComingSoon;
use crate::domain::match_result::ui::schedule::ScheduleTab;
use crate::domain::player::ui::list::PlayersTab;
use crate::domain::team::ui::details::TeamDetail;
use crate::domain::team::ui::list::TeamsTab;
use crate::layout::global_context::use_app_context;
use crate::routes::panel::{ResolvedView, TeamPresentation};
use crate::routes::router::RouterIntent;
use crate::routes::service::use_router;
use crate::shared::icons::{icon, league_badge};
use contracts::enums::TabId;
use contracts::routing::Route;
use leptos::logging::log;
use leptos::prelude::*;

/// Tab highlighted in the overlay navigation for a route.
pub fn highlighted_tab(route: &Route) -> Option<TabId> {
    match route {
        Route::Home => None,
        Route::LeagueTab { tab, .. } => Some(tab.clone()),
        Route::TeamDetail { .. } => Some(TabId::Teams),
    }
}

fn panel_body(view: ResolvedView) -> AnyView {
    match view.route {
        Route::Home => ().into_any(),
        Route::LeagueTab { league, tab } => match tab {
            TabId::Overview => view! { <LeagueOverview league=league /> }.into_any(),
            TabId::Teams => view! { <TeamsTab league=league /> }.into_any(),
            TabId::Players => view! { <PlayersTab league=league /> }.into_any(),
            TabId::Standings => view! { <ComingSoon what="Standings" league=league /> }.into_any(),
            TabId::Schedule => view! { <ScheduleTab league=league /> }.into_any(),
            TabId::Other(name) => {
                let what = TabId::Other(name).label();
                view! { <ComingSoon what=what league=league /> }.into_any()
            }
        },
        Route::TeamDetail {
            league, team_id, ..
        } => {
            let team = view
                .team
                .unwrap_or_else(|| TeamPresentation::from_lookup(&team_id, None));
            view! { <TeamDetail league=league team_id=team_id team=team /> }.into_any()
        }
    }
}

/// Full-screen league panel. Visibility and transition classes follow the
/// plan effects written into the global context.
#[component]
pub fn LeagueOverlay() -> impl IntoView {
    let ctx = use_app_context();
    let router = use_router();

    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" && ctx.dismiss_bound.get_untracked() {
            log!("⎋ escape closes the panel");
            router.dispatch(RouterIntent::BackRequested);
        }
    });
    on_cleanup(move || escape.remove());

    let overlay_class = move || {
        let mut class = String::from("league-overlay");
        if ctx.overlay_visible.get() {
            class.push_str(" league-overlay--visible");
        }
        if ctx.content_active.get() {
            class.push_str(" league-overlay--active");
        }
        class
    };

    let route = Memo::new(move |_| ctx.view.with(|v| v.as_ref().map(|v| v.route.clone())));

    let header = move || {
        let route = route.get()?;
        let league = route.league()?.clone();
        let active = highlighted_tab(&route);
        let tabs = TabId::all()
            .into_iter()
            .map(|tab| {
                let is_active = active.as_ref() == Some(&tab);
                let label = tab.label();
                view! {
                    <button
                        class="overlay-tab"
                        class:overlay-tab--active=is_active
                        on:click=move |_| router.dispatch(RouterIntent::TabSelected { tab: tab.clone() })
                    >
                        {label}
                    </button>
                }
            })
            .collect_view();

        Some(view! {
            <div class="league-overlay__header">
                <button
                    class="league-overlay__back"
                    aria-label="Back"
                    disabled=move || !ctx.dismiss_bound.get()
                    on:click=move |_| router.dispatch(RouterIntent::BackRequested)
                >
                    {icon("arrow-left")}
                </button>
                {league_badge(&league)}
                <h2 class="league-overlay__title">{league.display_name().to_string()}</h2>
                <button
                    class="league-overlay__close"
                    aria-label="Close"
                    disabled=move || !ctx.dismiss_bound.get()
                    on:click=move |_| router.dispatch(RouterIntent::BackRequested)
                >
                    {icon("x")}
                </button>
            </div>
            <nav class="league-overlay__tabs">{tabs}</nav>
        })
    };

    view! {
        <div class=overlay_class aria-hidden=move || (!ctx.overlay_visible.get()).to_string()>
            <div class="league-overlay__content">
                {header}
                <div class="league-overlay__body">
                    {move || ctx.view.get().map(panel_body)}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::LeagueId;

    #[test]
    fn test_highlighted_tab() {
        assert_eq!(highlighted_tab(&Route::Home), None);
        assert_eq!(
            highlighted_tab(&Route::league_tab(LeagueId::Lovb, TabId::Schedule)),
            Some(TabId::Schedule)
        );
        assert_eq!(
            highlighted_tab(&Route::team_detail(LeagueId::Lovb, "Houston", "7")),
            Some(TabId::Teams)
        );
    }
}
