//! Task Tracker Frontend App
//!
//! Root component: builds the store and controller, restores the session,
//! then shows either the auth forms or the task board.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::HttpTaskApi;
use crate::components::{AuthSection, NoticeBar, TaskSection};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::Controller;
use crate::session::BrowserStorage;
use crate::store::{AppState, AppStateStoreFields, StoreFrontend};
use crate::view::Screen;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let controller = Controller::new(
        HttpTaskApi::new(config.api_base_url),
        BrowserStorage,
        StoreFrontend::new(store),
    );
    let ctx = AppContext::new(controller);
    provide_context(ctx);

    // Restore a persisted session on mount
    Effect::new(move |_| {
        ctx.dispatch(|controller| async move { controller.start().await });
    });

    let screen = move || Screen::for_session(&store.session().read());

    view! {
        <main class="container">
            <h1>"Task Tracker"</h1>

            <NoticeBar />

            {move || match screen() {
                Screen::SignedOut => view! { <AuthSection /> }.into_any(),
                Screen::SignedIn { username } => view! { <TaskSection username=username /> }.into_any(),
            }}
        </main>
    }
}
