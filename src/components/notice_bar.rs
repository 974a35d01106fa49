//! Notice Bar Component
//!
//! Shows the current error and success notices. Expiry is handled by the
//! store frontend's timers.

use leptos::prelude::*;

use crate::notice::NoticeKind;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn NoticeBar() -> impl IntoView {
    let store = use_app_store();

    let message = move |kind: NoticeKind| store.notices().read().message(kind).map(str::to_string);

    view! {
        <div class="notice-bar">
            {move || message(NoticeKind::Error).map(|text| view! {
                <div id="message-box" class="notice notice-error" role="alert">{text}</div>
            })}
            {move || message(NoticeKind::Success).map(|text| view! {
                <div id="success-box" class="notice notice-success" role="status">{text}</div>
            })}
        </div>
    }
}
