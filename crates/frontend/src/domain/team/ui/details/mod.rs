pub mod view_model;

use crate::routes::panel::TeamPresentation;
use crate::routes::router::RouterIntent;
use crate::routes::service::use_router;
use crate::shared::config::AppConfig;
use crate::shared::data::api;
use crate::shared::icons::icon;
use crate::shared::list_utils::get_sort_indicator;
use contracts::domain::player::PlayerRecord;
use contracts::enums::{LeagueId, TabId};
use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use thaw::*;
use view_model::{roster_rows, team_header_view_model, RosterSort};

const ROSTER_COLUMNS: [(&str, &str); 5] = [
    ("name", "Name"),
    ("position", "Position"),
    ("class_year", "Year"),
    ("height", "Height"),
    ("hometown", "Hometown"),
];

#[component]
pub fn TeamDetail(league: LeagueId, team_id: String, team: TeamPresentation) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let router = use_router();
    let header = team_header_view_model(&league, &team);

    let roster = RwSignal::new(Vec::<PlayerRecord>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let sort = RwSignal::new(RosterSort::default());

    spawn_local(async move {
        match api::fetch_team_roster(&config, &league, &team_id).await {
            Ok(list) => {
                log!("📋 roster for {}: {} players", team_id, list.len());
                roster.set(list);
            }
            Err(e) => {
                log::warn!("no roster for {}: {}", team_id, e);
                set_error.set(Some("Roster data could not be loaded.".to_string()));
            }
        }
        set_loading.set(false);
    });

    let rows = Memo::new(move |_| roster.with(|list| roster_rows(list, sort.get())));

    view! {
        <div class="team-detail">
            <div class="team-detail__header">
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| router.dispatch(RouterIntent::TabSelected { tab: TabId::Teams })
                >
                    {icon("arrow-left")}
                    " All teams"
                </Button>
                {header.image_ref.clone().map(|src| view! {
                    <img class="team-detail__logo" src=src alt="" />
                })}
                <div class="team-detail__summary">
                    <h2 class="team-detail__name">{header.title.clone()}</h2>
                    <span class="team-detail__league">{header.league.clone()}</span>
                    {if header.found {
                        header.facts.iter().map(|(label, value)| view! {
                            <span class="team-meta">
                                <span class="team-meta__label">{*label}": "</span>
                                {value.clone()}
                            </span>
                        }).collect_view().into_any()
                    } else {
                        view! { <p class="team-meta">"Team details not found"</p> }.into_any()
                    }}
                    {header.website.clone().map(|href| view! {
                        <a class="team-detail__website" href=href target="_blank" rel="noopener">
                            "Official site " {icon("external-link")}
                        </a>
                    })}
                </div>
            </div>

            <h3 class="team-detail__section">"Roster"</h3>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="tab-loading"><Spinner /><span>"Loading roster..."</span></div> }
            >
                {move || {
                    if let Some(err) = error.get() {
                        return view! { <div class="empty-state">{err}</div> }.into_any();
                    }
                    if rows.with(|r| r.is_empty()) {
                        return view! { <div class="empty-state">"No roster data available for this team."</div> }.into_any();
                    }
                    view! {
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    {ROSTER_COLUMNS.iter().map(|&(field, label)| view! {
                                        <TableHeaderCell>
                                            <div
                                                class="table__sortable-header"
                                                on:click=move |_| sort.update(|s| *s = s.toggle(field))
                                            >
                                                {label}
                                                <span class="sort-indicator">
                                                    {move || {
                                                        let s = sort.get();
                                                        get_sort_indicator(s.field, field, s.ascending)
                                                    }}
                                                </span>
                                            </div>
                                        </TableHeaderCell>
                                    }).collect_view()}
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <For
                                    each=move || rows.get()
                                    key=|row| row.key.clone()
                                    children=|row| view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {row.jersey.clone()}" "{row.name.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout>{row.position.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{row.class_year.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{row.height.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{row.hometown.clone()}</TableCellLayout></TableCell>
                                        </TableRow>
                                    }
                                />
                            </TableBody>
                        </Table>
                    }
                    .into_any()
                }}
            </Show>
        </div>
    }
}
