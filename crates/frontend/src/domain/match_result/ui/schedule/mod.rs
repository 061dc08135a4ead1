pub mod state;
pub mod view_model;

use crate::domain::league::ui::placeholder::ComingSoon;
use crate::layout::global_context::use_app_context;
use crate::shared::config::AppConfig;
use crate::shared::data::api;
use contracts::domain::match_result::MatchResult;
use contracts::enums::LeagueId;
use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use state::{create_state, ScheduleTabState, STATE_KEY};
use thaw::*;
use view_model::{schedule_view_model, MatchCard};

#[component]
pub fn ScheduleTab(league: LeagueId) -> impl IntoView {
    if !league.has_results() {
        return view! { <ComingSoon what="Schedule" league=league /> }.into_any();
    }

    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let ctx = use_app_context();

    let state = create_state(ctx.get_tab_state::<ScheduleTabState>(STATE_KEY));
    Effect::new(move |_| {
        state.with(|s| ctx.set_tab_state(STATE_KEY, s));
    });

    let results = RwSignal::new(Vec::<MatchResult>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let league_for_load = league.clone();
    spawn_local(async move {
        match api::fetch_results(&config, &league_for_load).await {
            Ok(list) => {
                log!("📅 loaded {} results for {}", list.len(), league_for_load);
                results.set(list);
            }
            Err(e) => {
                log::error!("failed to load results for {}: {}", league_for_load, e);
                set_error.set(Some(format!("Could not load results: {}", e)));
            }
        }
        set_loading.set(false);
    });

    let view_model = Memo::new(move |_| {
        results.with(|list| state.with(|s| schedule_view_model(s, &league, list)))
    });

    view! {
        <div class="schedule-tab">
            <div class="tab-toolbar">
                <select
                    class="team-filter"
                    prop:value=move || state.with(|s| s.team.clone().unwrap_or_default())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.team = if value.is_empty() { None } else { Some(value) });
                    }
                >
                    <option value="">"All teams"</option>
                    {move || view_model.with(|vm| {
                        vm.teams
                            .iter()
                            .map(|t| view! { <option value=t.clone()>{t.clone()}</option> })
                            .collect_view()
                    })}
                </select>
            </div>

            {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="tab-loading"><Spinner /><span>"Loading schedule..."</span></div> }
            >
                {move || view_model.with(|vm| vm.empty_message).map(|msg| view! {
                    <div class="empty-state">{msg}</div>
                })}
                <div class="match-grid">
                    <For
                        each=move || view_model.with(|vm| vm.matches.clone())
                        key=|card| card.key.clone()
                        children=|card| view! { <MatchCardView card=card /> }
                    />
                </div>
            </Show>
        </div>
    }
    .into_any()
}

#[component]
fn MatchCardView(card: MatchCard) -> impl IntoView {
    let logo = |src: Option<String>| {
        src.map(|src| view! { <img class="match-card__logo" src=src alt="" loading="lazy" /> })
    };

    view! {
        <div class="match-card">
            <div class="match-card__date">{card.date}</div>
            <div class="match-card__teams">
                <div class="match-card__team">
                    {logo(card.home_img)}
                    <span>{card.home}</span>
                </div>
                <span class="match-card__score">{card.score}</span>
                <div class="match-card__team">
                    {logo(card.away_img)}
                    <span>{card.away}</span>
                </div>
            </div>
            {card.location.map(|loc| view! { <div class="match-card__location">{loc}</div> })}
            {card.match_url.map(|href| view! {
                <a class="match-card__link" href=href target="_blank" rel="noopener">"Match details"</a>
            })}
        </div>
    }
}
