//! Transient notifications (toasts).
//!
//! [`Notifier`] is provided once in the app context; any component pushes
//! success/warning/error notices through it and [`NotificationHost`] renders
//! them. Each notice disappears on its own after `NOTICE_TIMEOUT_MS`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::{MAX_NOTICES, NOTICE_TIMEOUT_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Warning => "notice notice--warning",
            NoticeKind::Error => "notice notice--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
    /// Bumped each time the notice is pushed again
    stamp: u64,
}

/// Handle for the timer that hides a pushed notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTicket {
    pub id: u64,
    stamp: u64,
}

/// Bounded queue of visible notices; the oldest is dropped when full
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeQueue {
    items: Vec<Notice>,
    next_id: u64,
    next_stamp: u64,
}

impl NoticeQueue {
    pub fn push(&mut self, kind: NoticeKind, text: impl Into<String>) -> NoticeTicket {
        let text = text.into();
        self.next_stamp += 1;
        let stamp = self.next_stamp;
        // the same message twice in a row is shown once, with its timeout restarted
        if let Some(last) = self.items.last_mut() {
            if last.kind == kind && last.text == text {
                last.stamp = stamp;
                return NoticeTicket { id: last.id, stamp };
            }
        }
        self.next_id += 1;
        self.items.push(Notice {
            id: self.next_id,
            kind,
            text,
            stamp,
        });
        if self.items.len() > MAX_NOTICES {
            self.items.remove(0);
        }
        NoticeTicket {
            id: self.next_id,
            stamp,
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    /// Timeout for `ticket`; a no-op if the notice was pushed again since
    pub fn expire(&mut self, ticket: NoticeTicket) {
        self.items
            .retain(|n| !(n.id == ticket.id && n.stamp == ticket.stamp));
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<NoticeQueue>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NoticeQueue::default()),
        }
    }

    pub fn push(&self, kind: NoticeKind, text: impl Into<String>) {
        let text = text.into();
        match kind {
            NoticeKind::Error => log::error!("{}", text),
            NoticeKind::Warning => log::warn!("{}", text),
            NoticeKind::Success => log::info!("{}", text),
        }
        let mut ticket = None;
        self.queue.update(|q| ticket = Some(q.push(kind, text)));
        let Some(ticket) = ticket else {
            return;
        };

        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            queue.update(|q| q.expire(ticket));
        });
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(NoticeKind::Success, text);
    }

    pub fn warning(&self, text: impl Into<String>) {
        self.push(NoticeKind::Warning, text);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(NoticeKind::Error, text);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Notifier from the app context
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().expect("Notifier not provided in context")
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifier = use_notifier();

    view! {
        <div class="notice-host">
            <For
                each=move || notifier.queue.with(|q| q.items().to_vec())
                key=|n| n.id
                children=move |n: Notice| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class() on:click=move |_| notifier.dismiss(id)>
                            {n.text}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut q = NoticeQueue::default();
        let a = q.push(NoticeKind::Success, "Guardado");
        let b = q.push(NoticeKind::Error, "Falló");
        assert_ne!(a.id, b.id);
        q.dismiss(a.id);
        assert_eq!(q.items().len(), 1);
        assert_eq!(q.items()[0].text, "Falló");
    }

    #[test]
    fn test_repeated_notice_is_collapsed() {
        let mut q = NoticeQueue::default();
        let a = q.push(NoticeKind::Error, "Sin conexión");
        let b = q.push(NoticeKind::Error, "Sin conexión");
        assert_eq!(a.id, b.id);
        assert_eq!(q.items().len(), 1);
    }

    #[test]
    fn test_repeated_notice_restarts_timeout() {
        let mut q = NoticeQueue::default();
        let first = q.push(NoticeKind::Error, "Sin conexión");
        let again = q.push(NoticeKind::Error, "Sin conexión");
        q.expire(first);
        assert_eq!(q.items().len(), 1);
        q.expire(again);
        assert!(q.items().is_empty());
    }

    #[test]
    fn test_queue_is_bounded() {
        let mut q = NoticeQueue::default();
        for i in 0..(MAX_NOTICES + 2) {
            q.push(NoticeKind::Warning, format!("aviso {i}"));
        }
        assert_eq!(q.items().len(), MAX_NOTICES);
        assert_eq!(q.items()[0].text, "aviso 2");
    }
}
