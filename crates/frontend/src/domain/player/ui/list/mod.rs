pub mod state;
pub mod view_model;

use crate::layout::global_context::use_app_context;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::{AppConfig, PLAYERS_PAGE_SIZE_OPTIONS};
use crate::shared::data::api;
use crate::shared::list_utils::{get_sort_indicator, SearchInput};
use contracts::domain::player::PlayerRecord;
use contracts::enums::LeagueId;
use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use state::{create_state, PlayersTabState, STATE_KEY};
use thaw::*;
use view_model::players_view_model;

const COLUMNS: [(&str, &str); 6] = [
    ("name", "Name"),
    ("jersey", "#"),
    ("position", "Position"),
    ("team", "Team"),
    ("class_year", "Class"),
    ("hometown", "Hometown"),
];

#[component]
pub fn PlayersTab(league: LeagueId) -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let ctx = use_app_context();

    let state = create_state(ctx.get_tab_state::<PlayersTabState>(STATE_KEY));
    Effect::new(move |_| {
        state.with(|s| ctx.set_tab_state(STATE_KEY, s));
    });

    let players = RwSignal::new(Vec::<PlayerRecord>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    spawn_local(async move {
        match api::fetch_players(&config, &league).await {
            Ok(list) => {
                log!("👥 loaded {} players for {}", list.len(), league);
                players.set(list);
            }
            Err(e) => {
                log::error!("failed to load players for {}: {}", league, e);
                set_error.set(Some(format!("Could not load players: {}", e)));
            }
        }
        set_loading.set(false);
    });

    let view_model = Memo::new(move |_| {
        players.with(|list| state.with(|s| players_view_model(s, list)))
    });

    view! {
        <div class="players-tab">
            <div class="tab-toolbar">
                <SearchInput
                    value=Signal::derive(move || state.with(|s| s.search.clone()))
                    on_change=Callback::new(move |search: String| {
                        state.update(|s| {
                            s.search = search;
                            s.page = 0;
                        })
                    })
                    placeholder="Search by name, position, team or hometown..."
                />
                <select
                    class="position-filter"
                    prop:value=move || state.with(|s| s.position.clone().unwrap_or_default())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| {
                            s.position = if value.is_empty() { None } else { Some(value) };
                            s.page = 0;
                        });
                    }
                >
                    <option value="">"All positions"</option>
                    {move || view_model.with(|vm| {
                        vm.positions
                            .iter()
                            .map(|p| view! { <option value=p.clone()>{p.clone()}</option> })
                            .collect_view()
                    })}
                </select>
            </div>

            {move || error.get().map(|err| view! { <div class="alert alert--error">{err}</div> })}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="tab-loading"><Spinner /><span>"Loading players..."</span></div> }
            >
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            {COLUMNS.iter().map(|&(field, label)| view! {
                                <TableHeaderCell>
                                    <div
                                        class="table__sortable-header"
                                        on:click=move |_| state.update(|s| s.toggle_sort(field))
                                    >
                                        {label}
                                        <span class="sort-indicator">
                                            {move || state.with(|s| get_sort_indicator(&s.sort_field, field, s.sort_ascending))}
                                        </span>
                                    </div>
                                </TableHeaderCell>
                            }).collect_view()}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || view_model.with(|vm| vm.rows.clone())
                            key=|row| row.key.clone()
                            children=move |row| {
                                let name = match row.profile_url.clone() {
                                    Some(href) => view! {
                                        <a href=href target="_blank" rel="noopener" class="table__link">{row.name.clone()}</a>
                                    }.into_any(),
                                    None => view! { <span>{row.name.clone()}</span> }.into_any(),
                                };
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout truncate=true>{name}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{row.jersey.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{row.position.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{row.team.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout>{row.class_year.clone()}</TableCellLayout></TableCell>
                                        <TableCell><TableCellLayout truncate=true>{row.hometown.clone()}</TableCellLayout></TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
                {move || view_model.with(|vm| vm.empty_message).map(|msg| view! {
                    <div class="empty-state">{msg}</div>
                })}
                <PaginationControls
                    current_page=Signal::derive(move || view_model.with(|vm| vm.page))
                    total_pages=Signal::derive(move || view_model.with(|vm| vm.total_pages))
                    total_count=Signal::derive(move || view_model.with(|vm| vm.total_count))
                    page_size=Signal::derive(move || state.with(|s| s.page_size))
                    on_page_change=Callback::new(move |page| state.update(|s| s.page = page))
                    on_page_size_change=Callback::new(move |size| state.update(|s| {
                        s.page_size = size;
                        s.page = 0;
                    }))
                    page_size_options=PLAYERS_PAGE_SIZE_OPTIONS.to_vec()
                />
            </Show>
        </div>
    }
}
