//! Task Section Component
//!
//! Everything shown while signed in.

use leptos::prelude::*;

use crate::components::{NewTaskForm, TaskList};
use crate::context::use_app_context;

#[component]
pub fn TaskSection(username: String) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section id="app-section" class="app-section">
            <div class="session-bar">
                <span>"Signed in as " <strong id="user-info">{username}</strong></span>
                <button class="logout-btn" on:click=move |_| ctx.logout()>"Logout"</button>
            </div>

            <NewTaskForm />

            <h3>"Your Tasks"</h3>
            <TaskList />
        </section>
    }
}
