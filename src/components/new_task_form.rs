//! New Task Form Component
//!
//! Title + optional description. Inputs reset only after the server
//! accepts the task.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_text = title.get_untracked();
        let description_text = description.get_untracked();

        ctx.dispatch(move |controller| async move {
            if controller.create_task(&title_text, &description_text).await {
                // The form is gone if the session ended meanwhile
                let _ = set_title.try_set(String::new());
                let _ = set_description.try_set(String::new());
            }
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <h3>"Create New Task"</h3>
            <input
                id="task-title"
                type="text"
                placeholder="Task title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                id="task-description"
                placeholder="Description (optional)"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            <button type="submit">"Add Task"</button>
        </form>
    }
}
