use crate::shared::config::AppConfig;
use crate::shared::data::{LeagueStore, LoadStatus};
use leptos::prelude::*;

fn status_text(status: &LoadStatus) -> String {
    match status {
        LoadStatus::Idle => "Data: not loaded".to_string(),
        LoadStatus::Loading => "Data: loading...".to_string(),
        LoadStatus::Loaded => "Data: ready".to_string(),
        LoadStatus::Failed(msg) => format!("Data: unavailable ({})", msg),
    }
}

fn status_class(status: &LoadStatus) -> &'static str {
    match status {
        LoadStatus::Loaded => "status-online",
        LoadStatus::Failed(_) => "status-offline",
        LoadStatus::Idle | LoadStatus::Loading => "status-checking",
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let store = use_context::<LeagueStore>().expect("LeagueStore context not found");
    let config = use_context::<AppConfig>().expect("AppConfig context not found");

    let team_total = move || {
        store
            .teams
            .with(|teams| teams.values().map(Vec::len).sum::<usize>())
    };

    view! {
        <footer data-zone="footer" class="status-bar">
            <span class=move || store.status.with(status_class)>
                {move || store.status.with(status_text)}
            </span>
            <Show when=move || store.status.get() == LoadStatus::Loaded>
                <span class="status-bar__count">{move || format!("{} teams", team_total())}</span>
            </Show>
            <Show when=move || matches!(store.status.get(), LoadStatus::Failed(_))>
                {
                    let config = config.clone();
                    view! {
                        <button class="button button--ghost" on:click=move |_| store.load(config.clone())>
                            "Retry"
                        </button>
                    }
                }
            </Show>
        </footer>
    }
}
