//! Transient user notices
//!
//! Success and error notifications shown briefly in a corner stack.
//! Every fallible wallet operation reports its outcome here; nothing is
//! fatal to the page.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::utils::constants::NOTICE_TIMEOUT_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

/// Global notice context
#[derive(Clone, Copy)]
pub struct NoticeContext {
    pub notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl NoticeContext {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NoticeKind::Success, title.into(), message.into());
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NoticeKind::Error, title.into(), message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }

    fn push(&self, kind: NoticeKind, title: String, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.notices.update(|list| {
            list.push(Notice {
                id,
                kind,
                title,
                message,
            })
        });

        // Auto-dismiss after a few seconds
        let notices = self.notices;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            notices.update(|list| list.retain(|n| n.id != id));
        });
    }
}

impl Default for NoticeContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notice_context() -> NoticeContext {
    let context = NoticeContext::new();
    provide_context(context);
    context
}

pub fn use_notice_context() -> NoticeContext {
    expect_context::<NoticeContext>()
}
