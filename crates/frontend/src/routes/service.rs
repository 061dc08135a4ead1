//! Browser side of the router: intent dispatch, readiness-gated resolution,
//! plan execution against the overlay signals, and the popstate/hashchange
//! listeners.

use super::history::{entry_from_state, BrowserHistory, HistoryBackend};
use super::location::{read_browser_location, select_initial_location, take_session_redirect};
use super::panel::{PanelEffect, PanelPlan};
use super::readiness::ReadinessGate;
use super::router::{lookup_route_team, NavigationTicket, RouterIntent, ViewRouter};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::AppConfig;
use crate::shared::data::LeagueStore;
use crate::shared::dom;
use crate::shared::tasks::TaskScope;
use contracts::routing::{parse_location, Route, HOME_TITLE};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

struct ServiceInner {
    router: RefCell<ViewRouter>,
    gate: ReadinessGate,
    /// Deferred panel phases
    deferred: TaskScope,
    store: LeagueStore,
    ctx: AppGlobalContext,
    config: AppConfig,
    listeners: RefCell<Vec<WindowListenerHandle>>,
}

#[derive(Clone)]
pub struct RouterService {
    inner: Rc<ServiceInner>,
}

impl RouterService {
    pub fn new(
        history: Box<dyn HistoryBackend>,
        store: LeagueStore,
        ctx: AppGlobalContext,
        config: AppConfig,
    ) -> Self {
        let router = ViewRouter::new(history).with_exit_animation(config.exit_animation_ms);
        Self {
            inner: Rc::new(ServiceInner {
                router: RefCell::new(router),
                gate: ReadinessGate::new(store.readiness()),
                deferred: TaskScope::new(),
                store,
                ctx,
                config,
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn for_browser(store: LeagueStore, ctx: AppGlobalContext, config: AppConfig) -> Self {
        let history = BrowserHistory::new(config.base_path.clone());
        Self::new(Box::new(history), store, ctx, config)
    }

    pub fn current_route(&self) -> Route {
        self.inner.router.borrow().current().clone()
    }

    pub fn dispatch(&self, intent: RouterIntent) {
        leptos::logging::log!("🧭 intent: {:?}", intent);
        let ticket = self.inner.router.borrow_mut().handle_intent(intent);
        match ticket {
            Some(ticket) => self.resolve(ticket),
            None => log::debug!("intent ignored on {}", self.current_route().to_hash()),
        }
    }

    /// Settle a ticket. Routes that need team data always pass the gate,
    /// even when the data is already there.
    fn resolve(&self, ticket: NavigationTicket) {
        if !ticket.needs_data() {
            self.settle(ticket);
            return;
        }

        let this = self.clone();
        let route = ticket.route.to_hash();
        self.inner.gate.await_ready(
            move |outcome| {
                if !outcome.is_ready() {
                    log::warn!("resolving {} without team data: {:?}", route, outcome);
                }
                this.settle(ticket);
            },
            self.inner.config.max_wait_ms,
            self.inner.config.poll_interval_ms,
        );
    }

    fn settle(&self, ticket: NavigationTicket) {
        let team = lookup_route_team(&ticket.route, &self.inner.store.teams_snapshot());
        let plan = self.inner.router.borrow_mut().settle(ticket, team);
        if let Some(plan) = plan {
            self.execute(plan);
        }
    }

    fn execute(&self, plan: PanelPlan) {
        log::debug!(
            "panel plan #{}: {} immediate, deferred {:?}",
            plan.generation,
            plan.immediate.len(),
            plan.deferred.as_ref().map(|d| d.phase)
        );
        if plan.is_close() {
            dom::set_document_title(HOME_TITLE);
        }
        for effect in &plan.immediate {
            self.apply(effect);
        }

        let Some(deferred) = plan.deferred else {
            return;
        };
        let this = self.clone();
        let generation = plan.generation;
        self.inner.deferred.spawn(async move {
            TimeoutFuture::new(deferred.phase.delay_ms()).await;
            if !this.inner.router.borrow().is_latest_plan(generation) {
                log::debug!("skipping deferred phase of superseded plan #{}", generation);
                return;
            }
            for effect in &deferred.effects {
                this.apply(effect);
            }
        });
    }

    fn apply(&self, effect: &PanelEffect) {
        let ctx = self.inner.ctx;
        match effect {
            PanelEffect::ResetTabState => ctx.reset_tab_states(),
            PanelEffect::SetContent(view) => {
                dom::set_document_title(&view.route.title());
                ctx.view.set(Some(view.clone()));
            }
            PanelEffect::ShowOverlay => ctx.overlay_visible.set(true),
            PanelEffect::LockScroll => dom::set_body_scroll_locked(true),
            PanelEffect::MarkActive => ctx.content_active.set(true),
            PanelEffect::BindDismiss => ctx.dismiss_bound.set(true),
            PanelEffect::MarkInactive => {
                ctx.dismiss_bound.set(false);
                ctx.content_active.set(false);
            }
            PanelEffect::HideOverlay => ctx.overlay_visible.set(false),
            PanelEffect::UnlockScroll => dom::set_body_scroll_locked(false),
            PanelEffect::ClearContent => ctx.view.set(None),
        }
    }

    /// Route from the landing URL and start listening for browser navigation.
    pub fn start(&self) {
        let location = read_browser_location();
        let redirect = take_session_redirect();
        if let Some(initial) = select_initial_location(&location, redirect.as_deref(), &self.inner.config) {
            let route = parse_location(&initial.location);
            leptos::logging::log!("🔗 deep link ({:?}): {}", initial.source, route.to_hash());
            let ticket = self.inner.router.borrow_mut().restore(route);
            self.resolve(ticket);
        }

        let this = self.clone();
        let popstate = window_event_listener(leptos::ev::popstate, move |ev| {
            this.on_pop_state(ev.state());
        });
        let this = self.clone();
        let hashchange = window_event_listener(leptos::ev::hashchange, move |_| {
            let hash = read_browser_location().hash;
            let ticket = this.inner.router.borrow_mut().handle_location(&hash);
            if let Some(ticket) = ticket {
                this.resolve(ticket);
            }
        });
        self.inner
            .listeners
            .borrow_mut()
            .extend([popstate, hashchange]);
    }

    /// A popstate without a readable payload means home.
    fn on_pop_state(&self, state: wasm_bindgen::JsValue) {
        let entry = entry_from_state(state);
        let ticket = self.inner.router.borrow_mut().handle_pop_state(entry);
        self.resolve(ticket);
    }

    /// Teardown: no wait, timer or listener outlives the app.
    pub fn dispose(&self) {
        self.inner.gate.cancel_all();
        self.inner.deferred.cancel_all();
        for handle in self.inner.listeners.borrow_mut().drain(..) {
            handle.remove();
        }
    }
}

/// Copyable, thread-safe handle for the component tree.
#[derive(Clone, Copy)]
pub struct RouterHandle(StoredValue<RouterService, LocalStorage>);

impl RouterHandle {
    pub fn new(service: RouterService) -> Self {
        Self(StoredValue::new_local(service))
    }

    pub fn dispatch(&self, intent: RouterIntent) {
        let service = self.0.get_value();
        service.dispatch(intent);
    }

    pub fn start(&self) {
        self.0.get_value().start();
    }

    pub fn dispose(&self) {
        self.0.get_value().dispose();
    }
}

pub fn use_router() -> RouterHandle {
    use_context::<RouterHandle>().expect("RouterHandle context not found")
}
