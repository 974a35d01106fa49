//! Task Tracker State
//!
//! Session, task list and notices as one `reactive_stores` store. The
//! controller writes here through [`StoreFrontend`]; components only read.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::controller::Frontend;
use crate::models::Task;
use crate::notice::{Notice, NoticeBoard, NOTICE_DURATION_MS};
use crate::session::Session;

/// What the page renders from. Each field is tracked separately.
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in identity (or none)
    pub session: Session,
    /// Latest list from the server; `None` until the first fetch completes
    pub tasks: Option<Vec<Task>>,
    /// Transient error/success messages
    pub notices: NoticeBoard,
}

pub type AppStore = Store<AppState>;

/// Panics outside `App`, which provides the store
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// [`Frontend`] backed by the app store and browser dialogs
#[derive(Clone, Copy)]
pub struct StoreFrontend {
    store: AppStore,
}

impl StoreFrontend {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }
}

impl Frontend for StoreFrontend {
    fn session_changed(&self, session: &Session) {
        if !session.is_authenticated() {
            *self.store.tasks().write() = None;
        }
        *self.store.session().write() = session.clone();
    }

    fn show_tasks(&self, tasks: Vec<Task>) {
        *self.store.tasks().write() = Some(tasks);
    }

    fn notify(&self, notice: Notice) {
        let kind = notice.kind;
        let ticket = self.store.notices().write().post(notice);
        let store = self.store;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_DURATION_MS).await;
            store.notices().write().expire(kind, ticket);
        });
    }

    fn confirm(&self, prompt: &str) -> bool {
        window().confirm_with_message(prompt).unwrap_or(false)
    }
}
