//! Panel switcher output.
//!
//! A transition of the router produces a [`PanelPlan`]: the effects to apply
//! right away and an optional deferred phase. The Leptos layer executes the
//! plan against the overlay signals.

use contracts::domain::team::TeamRecord;
use contracts::routing::{placeholder_team_name, Route};

/// Delay between marking the panel inactive and hiding the overlay.
pub const EXIT_ANIMATION_MS: u32 = 300;

#[derive(Debug, Clone, PartialEq)]
pub enum TeamPresentation {
    Found(TeamRecord),
    /// Lookup failed. The detail panel still opens with a placeholder.
    NotFound {
        team_id: String,
        placeholder_name: String,
    },
}

impl TeamPresentation {
    pub fn from_lookup(team_id: &str, record: Option<TeamRecord>) -> Self {
        match record {
            Some(team) => TeamPresentation::Found(team),
            None => TeamPresentation::NotFound {
                team_id: team_id.to_string(),
                placeholder_name: placeholder_team_name(team_id),
            },
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            TeamPresentation::Found(team) => &team.name,
            TeamPresentation::NotFound {
                placeholder_name, ..
            } => placeholder_name,
        }
    }

    pub fn record(&self) -> Option<&TeamRecord> {
        match self {
            TeamPresentation::Found(team) => Some(team),
            TeamPresentation::NotFound { .. } => None,
        }
    }
}

/// Payload the panels render from
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedView {
    pub route: Route,
    /// Set for team routes only
    pub team: Option<TeamPresentation>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelEffect {
    /// Forget per-tab UI state (filters, pages) of the previous league
    ResetTabState,
    SetContent(ResolvedView),
    ShowOverlay,
    LockScroll,
    MarkActive,
    BindDismiss,
    MarkInactive,
    HideOverlay,
    UnlockScroll,
    ClearContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// After the renderer has run once
    NextFrame,
    ExitAnimation { delay_ms: u32 },
}

impl Phase {
    pub fn delay_ms(&self) -> u32 {
        match self {
            Phase::NextFrame => 0,
            Phase::ExitAnimation { delay_ms } => *delay_ms,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeferredEffects {
    pub phase: Phase,
    pub effects: Vec<PanelEffect>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelPlan {
    /// Navigation generation the plan belongs to
    pub generation: u64,
    pub immediate: Vec<PanelEffect>,
    pub deferred: Option<DeferredEffects>,
}

impl PanelPlan {
    pub fn open(generation: u64, view: ResolvedView, reset_tabs: bool) -> Self {
        let mut immediate = Vec::with_capacity(4);
        if reset_tabs {
            immediate.push(PanelEffect::ResetTabState);
        }
        immediate.push(PanelEffect::SetContent(view));
        immediate.push(PanelEffect::ShowOverlay);
        immediate.push(PanelEffect::LockScroll);

        Self {
            generation,
            immediate,
            deferred: Some(DeferredEffects {
                phase: Phase::NextFrame,
                effects: vec![PanelEffect::MarkActive, PanelEffect::BindDismiss],
            }),
        }
    }

    pub fn close(generation: u64, exit_animation_ms: u32) -> Self {
        Self {
            generation,
            immediate: vec![PanelEffect::MarkInactive, PanelEffect::ResetTabState],
            deferred: Some(DeferredEffects {
                phase: Phase::ExitAnimation {
                    delay_ms: exit_animation_ms,
                },
                effects: vec![
                    PanelEffect::HideOverlay,
                    PanelEffect::UnlockScroll,
                    PanelEffect::ClearContent,
                ],
            }),
        }
    }

    /// All effects in execution order
    pub fn effects(&self) -> impl Iterator<Item = &PanelEffect> {
        self.immediate
            .iter()
            .chain(self.deferred.iter().flat_map(|d| d.effects.iter()))
    }

    pub fn view(&self) -> Option<&ResolvedView> {
        self.immediate.iter().find_map(|effect| match effect {
            PanelEffect::SetContent(view) => Some(view),
            _ => None,
        })
    }

    pub fn is_close(&self) -> bool {
        self.immediate.first() == Some(&PanelEffect::MarkInactive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::{LeagueId, TabId};

    fn position(plan: &PanelPlan, effect: &PanelEffect) -> usize {
        plan.effects().position(|e| e == effect).unwrap()
    }

    #[test]
    fn test_close_marks_inactive_before_hiding() {
        let plan = PanelPlan::close(3, EXIT_ANIMATION_MS);
        assert!(plan.is_close());
        assert!(position(&plan, &PanelEffect::MarkInactive) < position(&plan, &PanelEffect::HideOverlay));
        assert!(!plan.immediate.contains(&PanelEffect::HideOverlay));
        assert_eq!(
            plan.deferred.as_ref().map(|d| d.phase),
            Some(Phase::ExitAnimation { delay_ms: 300 })
        );
    }

    #[test]
    fn test_open_order() {
        let view = ResolvedView {
            route: Route::league_tab(LeagueId::Lovb, TabId::Teams),
            team: None,
        };
        let plan = PanelPlan::open(1, view.clone(), true);
        let order: Vec<_> = plan.effects().cloned().collect();
        assert_eq!(
            order,
            vec![
                PanelEffect::ResetTabState,
                PanelEffect::SetContent(view.clone()),
                PanelEffect::ShowOverlay,
                PanelEffect::LockScroll,
                PanelEffect::MarkActive,
                PanelEffect::BindDismiss,
            ]
        );
        assert_eq!(plan.view(), Some(&view));
        assert!(!PanelPlan::open(1, view, false)
            .immediate
            .contains(&PanelEffect::ResetTabState));
    }

    #[test]
    fn test_not_found_presentation() {
        let p = TeamPresentation::from_lookup("77", None);
        assert_eq!(p.display_name(), "Team 77");
        assert!(p.record().is_none());
    }
}
