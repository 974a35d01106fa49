//! Task Item Component
//!
//! A single row in the task list.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::view::TaskRow;

/// A single task row with toggle and delete actions
#[component]
pub fn TaskItem(row: TaskRow) -> impl IntoView {
    let ctx = use_app_context();

    let class = row.css_class();
    let toggle_label = row.toggle_label();
    let TaskRow { id, title, description, .. } = row;

    view! {
        <div class=class>
            <div class="task-details">
                <strong>{title}</strong>
                <p>{description}</p>
            </div>
            <div class="task-actions">
                <button on:click=move |_| {
                    ctx.dispatch(move |controller| async move { controller.toggle_task(id).await });
                }>
                    {toggle_label}
                </button>
                // Confirmation is asked by the controller before anything is sent
                <button class="delete-btn" on:click=move |_| {
                    ctx.dispatch(move |controller| async move { controller.delete_task(id).await });
                }>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
