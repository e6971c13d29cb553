//! Notice Stack Component
//!
//! Renders the transient notices from [`crate::state::notice`] in a
//! fixed corner stack. Clicking a notice dismisses it early.

use leptos::prelude::*;

use crate::state::notice::{use_notice_context, NoticeKind};

#[component]
pub fn NoticeStack() -> impl IntoView {
    let notices = use_notice_context();

    view! {
        <div class="notice-stack">
            <For
                each=move || notices.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let class = match notice.kind {
                        NoticeKind::Success => "notice notice-success",
                        NoticeKind::Error => "notice notice-error",
                    };
                    let id = notice.id;
                    view! {
                        <div class=class on:click=move |_| notices.dismiss(id)>
                            <p class="notice-title">{notice.title}</p>
                            <p class="notice-message">{notice.message}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
