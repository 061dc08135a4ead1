use crate::layout::global_context::AppGlobalContext;
use crate::routes::readiness::DataReadiness;
use crate::routes::routes::AppRoutes;
use crate::routes::service::{RouterHandle, RouterService};
use crate::shared::config::AppConfig;
use crate::shared::data::LeagueStore;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log!("⚙️ config: {:?}", config);

    // Overlay state written by the router and read by the panels.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);
    provide_context(config.clone());

    let store = LeagueStore::new(DataReadiness::new());
    provide_context(store);

    let router = RouterHandle::new(RouterService::for_browser(store, ctx, config.clone()));
    provide_context(router);

    store.load(config);
    router.start();
    on_cleanup(move || router.dispose());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
