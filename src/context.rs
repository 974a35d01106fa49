//! Application Context
//!
//! Shared controller handle provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;

use crate::api::HttpTaskApi;
use crate::controller::Controller;
use crate::session::BrowserStorage;
use crate::store::StoreFrontend;

pub type AppController = Controller<HttpTaskApi, BrowserStorage, StoreFrontend>;

/// App-wide handle to the controller
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The controller holds `Rc`s, so it lives in local (non-`Send`) storage
    controller: StoredValue<AppController, LocalStorage>,
}

impl AppContext {
    pub fn new(controller: AppController) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
        }
    }

    /// Run a controller command on the browser event loop
    pub fn dispatch<F, Fut>(&self, command: F)
    where
        F: FnOnce(AppController) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        let controller = self.controller.get_value();
        spawn_local(command(controller));
    }

    pub fn logout(&self) {
        self.controller.with_value(|controller| controller.logout());
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
