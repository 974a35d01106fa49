//! Auth Section Component
//!
//! Login and register forms, shown while signed out.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn AuthSection() -> impl IntoView {
    view! {
        <section id="auth-section" class="auth-section">
            <LoginForm />
            <RegisterForm />
        </section>
    }
}

#[component]
fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get_untracked();
        let password = password.get_untracked();
        // On success this section unmounts, which resets the inputs
        ctx.dispatch(move |controller| async move {
            controller.login(&username, &password).await;
        });
    };

    view! {
        <form class="auth-form" on:submit=login>
            <h2>"Login"</h2>
            <input
                id="login-username"
                type="text"
                placeholder="Username"
                autocomplete="username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <input
                id="login-password"
                type="password"
                placeholder="Password"
                autocomplete="current-password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit">"Login"</button>
        </form>
    }
}

#[component]
fn RegisterForm() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let register = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let username = username.get_untracked();
        let password = password.get_untracked();
        ctx.dispatch(move |controller| async move {
            if controller.register(&username, &password).await {
                let _ = set_username.try_set(String::new());
                let _ = set_password.try_set(String::new());
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=register>
            <h2>"Register"</h2>
            <input
                id="register-username"
                type="text"
                placeholder="Username"
                autocomplete="username"
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
            />
            <input
                id="register-password"
                type="password"
                placeholder="Password"
                autocomplete="new-password"
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
            />
            <button type="submit">"Register"</button>
        </form>
    }
}
