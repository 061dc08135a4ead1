use crate::routes::router::RouterIntent;
use crate::routes::service::use_router;
use crate::shared::data::{LeagueStore, LoadStatus};
use crate::shared::icons::{icon, league_badge};
use contracts::enums::LeagueId;
use leptos::prelude::*;

/// Home view: one card per league.
#[component]
pub fn LeagueCards() -> impl IntoView {
    let store = use_context::<LeagueStore>().expect("LeagueStore context not found");
    let router = use_router();

    view! {
        <section class="league-cards">
            {LeagueId::all()
                .into_iter()
                .map(|league| {
                    let count_league = league.clone();
                    let team_count = move || match store.status.get() {
                        LoadStatus::Loaded => {
                            format!("{} teams", store.league_teams(&count_league).len())
                        }
                        LoadStatus::Failed(_) => "Teams unavailable".to_string(),
                        _ => "Loading teams...".to_string(),
                    };
                    let name = league.display_name().to_string();
                    let badge = league_badge(&league);
                    view! {
                        <button
                            class="league-card"
                            on:click=move |_| {
                                router.dispatch(RouterIntent::LeagueSelected {
                                    league: league.clone(),
                                })
                            }
                        >
                            {badge}
                            <span class="league-card__name">{name}</span>
                            <span class="league-card__meta">{icon("users")} {team_count}</span>
                        </button>
                    }
                })
                .collect_view()}
        </section>
    }
}
