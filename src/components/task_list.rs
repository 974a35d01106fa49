//! Task List Component
//!
//! Renders whatever the last list fetch returned.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view::{TaskListView, EMPTY_LIST};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();

    let list = move || TaskListView::from_tasks(store.tasks().read().as_deref());

    view! {
        <div id="tasks-list" class="tasks-list">
            {move || match list() {
                TaskListView::Loading => view! { <p class="muted">"Loading tasks..."</p> }.into_any(),
                TaskListView::Empty => view! { <p>{EMPTY_LIST}</p> }.into_any(),
                TaskListView::Rows(rows) => rows
                    .into_iter()
                    .map(|row| view! { <TaskItem row=row /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
