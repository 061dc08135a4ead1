use crate::domain::league::ui::cards::LeagueCards;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell content=|| view! {
            <section class="hero">
                <h1>"Volleyball Database"</h1>
                <p>"Browse teams, rosters and schedules by league."</p>
            </section>
            <LeagueCards />
        }.into_any() />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! { <MainLayout /> }
}
