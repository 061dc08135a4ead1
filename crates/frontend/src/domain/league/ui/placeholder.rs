use crate::shared::icons::icon;
use contracts::enums::LeagueId;
use leptos::prelude::*;

/// Empty state for sections without published data.
#[component]
pub fn ComingSoon(#[prop(into)] what: String, league: LeagueId) -> impl IntoView {
    view! {
        <div class="coming-soon">
            {icon("calendar")}
            <h3>{format!("{} coming soon", what)}</h3>
            <p>{format!("{} data for {} is not available yet.", what, league.display_name())}</p>
        </div>
    }
}
