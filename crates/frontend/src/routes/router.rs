//! View router state machine.
//!
//! Navigation happens in two steps. [`ViewRouter::begin`] makes the route
//! current, pushes history and hands out a [`NavigationTicket`]. Once the
//! readiness gate has let the ticket through, [`ViewRouter::settle`] turns it
//! into a [`PanelPlan`], or drops it if a newer navigation started meanwhile.

use super::history::HistoryBackend;
use super::panel::{PanelPlan, ResolvedView, TeamPresentation, EXIT_ANIMATION_MS};
use contracts::domain::team::{find_team, TeamRecord, TeamsByLeague};
use contracts::enums::{LeagueId, TabId, DEFAULT_TAB};
use contracts::routing::{parse_location, NavigationEntry, Route};

/// User intents delivered by the panels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterIntent {
    LeagueSelected {
        league: LeagueId,
    },
    TeamSelected {
        league: LeagueId,
        team_name: String,
        team_id: String,
    },
    TabSelected {
        tab: TabId,
    },
    BackRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigateOptions {
    pub record_history: bool,
}

impl NavigateOptions {
    pub const RECORD: Self = Self {
        record_history: true,
    };
    pub const SILENT: Self = Self {
        record_history: false,
    };
}

/// A navigation that has started but whose panel is not resolved yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTicket {
    pub generation: u64,
    pub route: Route,
    pub record_history: bool,
}

impl NavigationTicket {
    /// Whether resolution has to go through the readiness gate
    pub fn needs_data(&self) -> bool {
        !self.route.is_home()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Open(Route),
}

pub struct ViewRouter {
    current: Route,
    panel: PanelState,
    /// League whose per-tab state is currently held by the panels
    panel_league: Option<LeagueId>,
    generation: u64,
    /// Generation of the last plan handed to the executor
    last_plan: u64,
    history: Box<dyn HistoryBackend>,
    exit_animation_ms: u32,
}

impl ViewRouter {
    pub fn new(history: Box<dyn HistoryBackend>) -> Self {
        Self {
            current: Route::Home,
            panel: PanelState::Closed,
            panel_league: None,
            generation: 0,
            last_plan: 0,
            history,
            exit_animation_ms: EXIT_ANIMATION_MS,
        }
    }

    pub fn with_exit_animation(mut self, ms: u32) -> Self {
        self.exit_animation_ms = ms;
        self
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Deferred effects of a plan run only while no newer plan has been
    /// produced, so a pending exit animation cannot hide a panel that was
    /// opened after it.
    pub fn is_latest_plan(&self, generation: u64) -> bool {
        self.last_plan == generation
    }

    /// Start a navigation. The history entry is written before anything is
    /// rendered for it.
    pub fn begin(&mut self, route: Route, options: NavigateOptions) -> NavigationTicket {
        self.generation += 1;
        log::debug!(
            "navigate #{} -> {} (record: {})",
            self.generation,
            route.to_hash(),
            options.record_history
        );

        if options.record_history {
            let entry = NavigationEntry::for_route(route.clone());
            if let Err(e) = self.history.push(&entry) {
                log::warn!("navigation to {} not recorded: {}", entry.url_hint, e);
            }
        }

        self.current = route.clone();
        NavigationTicket {
            generation: self.generation,
            route,
            record_history: options.record_history,
        }
    }

    pub fn navigate_to(&mut self, route: Route, options: NavigateOptions) -> NavigationTicket {
        self.begin(route, options)
    }

    /// Adopt the route the page was opened with. The landing entry is
    /// rewritten so it carries a payload and the canonical URL.
    pub fn restore(&mut self, route: Route) -> NavigationTicket {
        let entry = NavigationEntry::for_route(route.clone());
        if let Err(e) = self.history.replace(&entry) {
            log::warn!("could not rewrite landing entry {}: {}", entry.url_hint, e);
        }
        self.begin(route, NavigateOptions::SILENT)
    }

    /// Map an intent to a navigation. `TabSelected` outside a league is ignored.
    pub fn handle_intent(&mut self, intent: RouterIntent) -> Option<NavigationTicket> {
        let route = match intent {
            RouterIntent::LeagueSelected { league } => Route::league_tab(league, DEFAULT_TAB),
            RouterIntent::TeamSelected {
                league,
                team_name,
                team_id,
            } => Route::team_detail(league, team_name, team_id),
            RouterIntent::TabSelected { tab } => {
                let league = self.current.league()?.clone();
                Route::league_tab(league, tab)
            }
            RouterIntent::BackRequested => Route::Home,
        };
        Some(self.begin(route, NavigateOptions::RECORD))
    }

    /// Back/forward. A missing payload means the user left the app's own
    /// entries and lands on home.
    pub fn handle_pop_state(&mut self, entry: Option<NavigationEntry>) -> NavigationTicket {
        let route = entry.map(|e| e.route).unwrap_or(Route::Home);
        self.begin(route, NavigateOptions::SILENT)
    }

    /// Hash or path change not caused by the router itself.
    pub fn handle_location(&mut self, location: &str) -> Option<NavigationTicket> {
        let route = parse_location(location);
        if route == self.current {
            return None;
        }
        Some(self.begin(route, NavigateOptions::SILENT))
    }

    /// Resolve a ticket into panel effects. Stale tickets yield `None`, as
    /// does closing a panel that is already closed.
    pub fn settle(
        &mut self,
        ticket: NavigationTicket,
        team: Option<TeamRecord>,
    ) -> Option<PanelPlan> {
        if !self.is_current(ticket.generation) {
            log::debug!(
                "dropping stale navigation #{} ({}), current is #{}",
                ticket.generation,
                ticket.route.to_hash(),
                self.generation
            );
            return None;
        }

        match ticket.route {
            Route::Home => {
                if self.panel == PanelState::Closed {
                    return None;
                }
                self.panel = PanelState::Closed;
                self.panel_league = None;
                self.last_plan = ticket.generation;
                Some(PanelPlan::close(ticket.generation, self.exit_animation_ms))
            }
            route => {
                let (route, team) = match route {
                    Route::TeamDetail {
                        league,
                        team_name,
                        team_id,
                    } => {
                        let presentation = TeamPresentation::from_lookup(&team_id, team);
                        let name = match &presentation {
                            TeamPresentation::Found(record) => record.name.clone(),
                            TeamPresentation::NotFound { .. } if !team_name.is_empty() => team_name,
                            TeamPresentation::NotFound {
                                placeholder_name, ..
                            } => placeholder_name.clone(),
                        };
                        (Route::team_detail(league, name, team_id), Some(presentation))
                    }
                    other => (other, None),
                };

                let league = route.league().cloned();
                let reset_tabs = self.panel_league != league;
                self.current = route.clone();
                self.panel = PanelState::Open(route.clone());
                self.panel_league = league;
                self.last_plan = ticket.generation;

                Some(PanelPlan::open(
                    ticket.generation,
                    ResolvedView { route, team },
                    reset_tabs,
                ))
            }
        }
    }
}

/// Team record for a team route. Falls back to the name hint when the id is
/// unknown.
pub fn lookup_route_team(route: &Route, teams: &TeamsByLeague) -> Option<TeamRecord> {
    let Route::TeamDetail {
        league,
        team_name,
        team_id,
    } = route
    else {
        return None;
    };
    let roster = teams.get(league)?;
    find_team(team_id, roster)
        .or_else(|| find_team(team_name, roster))
        .cloned()
}
