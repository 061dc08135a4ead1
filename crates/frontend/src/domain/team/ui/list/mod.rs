pub mod state;
pub mod view_model;

use crate::layout::global_context::use_app_context;
use crate::routes::router::RouterIntent;
use crate::routes::service::use_router;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::TEAMS_PAGE_SIZE;
use crate::shared::data::{LeagueStore, LoadStatus};
use crate::shared::list_utils::SearchInput;
use contracts::enums::LeagueId;
use leptos::prelude::*;
use state::{create_state, TeamsTabState, STATE_KEY};
use thaw::*;
use view_model::teams_view_model;

#[component]
pub fn TeamsTab(league: LeagueId) -> impl IntoView {
    let store = use_context::<LeagueStore>().expect("LeagueStore context not found");
    let ctx = use_app_context();
    let router = use_router();

    let state = create_state(ctx.get_tab_state::<TeamsTabState>(STATE_KEY));
    Effect::new(move |_| {
        state.with(|s| ctx.set_tab_state(STATE_KEY, s));
    });

    let league_for_teams = league.clone();
    let view_model = Memo::new(move |_| {
        let teams = store.league_teams(&league_for_teams);
        state.with(|s| teams_view_model(s, &teams, TEAMS_PAGE_SIZE))
    });
    let loading = move || store.status.get() == LoadStatus::Loading;

    let open_team = Callback::new(move |(team_id, team_name): (String, String)| {
        router.dispatch(RouterIntent::TeamSelected {
            league: league.clone(),
            team_name,
            team_id,
        });
    });

    view! {
        <div class="teams-tab">
            <div class="tab-toolbar">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search.clone()))
                    on_change=Callback::new(move |search: String| {
                        state.update(|s| {
                            s.search = search;
                            s.page = 0;
                        })
                    })
                    placeholder="Search teams by name or conference..."
                />
                <select
                    class="division-filter"
                    prop:value=move || state.with(|s| s.division.clone().unwrap_or_default())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| {
                            s.division = if value.is_empty() { None } else { Some(value) };
                            s.page = 0;
                        });
                    }
                >
                    <option value="">"All divisions"</option>
                    {move || view_model.with(|vm| {
                        vm.divisions
                            .iter()
                            .map(|d| view! { <option value=d.clone()>{d.clone()}</option> })
                            .collect_view()
                    })}
                </select>
            </div>

            <Show
                when=move || !loading()
                fallback=|| view! { <div class="tab-loading"><Spinner /><span>"Loading teams..."</span></div> }
            >
                {move || view_model.with(|vm| vm.empty_message).map(|msg| view! {
                    <div class="empty-state">{msg}</div>
                })}
                <div class="team-grid">
                    <For
                        each=move || view_model.with(|vm| vm.cards.clone())
                        key=|card| card.id.clone()
                        children=move |card| {
                            let id = card.id.clone();
                            let name = card.name.clone();
                            view! {
                                <button
                                    class="team-card"
                                    on:click=move |_| open_team.run((id.clone(), name.clone()))
                                >
                                    {card.image_ref.clone().map(|src| view! {
                                        <img class="team-card__logo" src=src alt="" loading="lazy" />
                                    })}
                                    <span class="team-card__name">{card.name.clone()}</span>
                                    <span class="team-card__meta">{card.subtitle.clone()}</span>
                                </button>
                            }
                        }
                    />
                </div>
                <PaginationControls
                    current_page=Signal::derive(move || view_model.with(|vm| vm.page))
                    total_pages=Signal::derive(move || view_model.with(|vm| vm.total_pages))
                    total_count=Signal::derive(move || view_model.with(|vm| vm.total_count))
                    page_size=Signal::derive(|| TEAMS_PAGE_SIZE)
                    on_page_change=Callback::new(move |page| state.update(|s| s.page = page))
                />
            </Show>
        </div>
    }
}
