//! One fetch per list query.
//!
//! [`use_remote_list`] refetches whenever the request path changes. A request
//! counter tags every fetch; a response is applied only if no newer request
//! was issued meanwhile, so a slow answer for old parameters never overwrites
//! the current page.

use contracts::shared::api::ListResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

use super::http::get_json;
use super::notify::use_notifier;

pub struct RemoteList<T: Send + Sync + 'static> {
    pub data: RwSignal<Option<ListResponse<T>>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    reload_tick: RwSignal<u32>,
}

// derive would require `T: Copy`
impl<T: Send + Sync + 'static> Clone for RemoteList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for RemoteList<T> {}

impl<T: Send + Sync + 'static> RemoteList<T> {
    /// Fetch again with the same parameters
    pub fn reload(&self) {
        self.reload_tick.update(|t| *t = t.wrapping_add(1));
    }

    pub fn total(&self) -> Signal<usize> {
        let data = self.data;
        Signal::derive(move || data.with(|d| d.as_ref().map(|d| d.total).unwrap_or(0)))
    }

    pub fn total_pages(&self) -> Signal<usize> {
        let data = self.data;
        Signal::derive(move || data.with(|d| d.as_ref().map(|d| d.total_pages).unwrap_or(0)))
    }
}

/// Tracks the latest issued request
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RequestCounter(u64);

impl RequestCounter {
    pub fn issue(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

pub fn use_remote_list<T>(path: Signal<String>) -> RemoteList<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    let notifier = use_notifier();
    let list = RemoteList {
        data: RwSignal::new(None),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
        reload_tick: RwSignal::new(0),
    };
    let counter = StoredValue::new(RequestCounter::default());

    Effect::new(move |_| {
        let path = path.get();
        list.reload_tick.track();

        let mut ticket = 0;
        counter.update_value(|c| ticket = c.issue());
        list.loading.set(true);
        list.error.set(None);

        spawn_local(async move {
            let result = get_json::<ListResponse<T>>(&path).await;
            if !counter.with_value(|c| c.is_current(ticket)) {
                log::debug!("Discarding stale response for {}", path);
                return;
            }
            match result {
                Ok(page) => list.data.set(Some(page)),
                Err(e) => {
                    notifier.error(e.to_string());
                    list.error.set(Some(e.to_string()));
                }
            }
            list.loading.set(false);
        });
    });

    list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut counter = RequestCounter::default();
        let first = counter.issue();
        let second = counter.issue();
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
    }
}
