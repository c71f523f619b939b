//! Session-wide cart state shared by every view.
//!
//! The store is the single owner of the cart snapshot. Views read it or
//! subscribe to it; only the store writes it, and every write replaces the
//! whole snapshot. Loads are numbered: a response is applied only while its
//! load is still the most recent one, so a slow early response can never
//! overwrite a later one.

use academy_core::auth::{AuthScope, CredentialStore};
use academy_core::cart::{CartApi, CartLine, CartSnapshot, CartStatus, CourseId};
use academy_core::error::Result;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

/// Shared cart store. Clones share the same state.
#[derive(Clone)]
pub struct SessionCartStore {
    inner: Arc<Inner>,
}

struct Inner {
    api: Arc<dyn CartApi>,
    credentials: Arc<dyn CredentialStore>,
    state: watch::Sender<CartSnapshot>,
    /// Number of the most recently started load or reset.
    latest_ticket: AtomicU64,
}

impl SessionCartStore {
    /// Creates an idle, empty store. Nothing is fetched until [`load`](Self::load).
    pub fn new(api: Arc<dyn CartApi>, credentials: Arc<dyn CredentialStore>) -> Self {
        let (state, _) = watch::channel(CartSnapshot::default());
        Self {
            inner: Arc::new(Inner {
                api,
                credentials,
                state,
                latest_ticket: AtomicU64::new(0),
            }),
        }
    }

    /// Loads the cart for the current session.
    ///
    /// Without an end-user token the cart becomes the empty guest cart and no
    /// request is made. Otherwise the status turns `Loading` and the server
    /// cart replaces the items, or the status turns `Error` with no items.
    /// Never fails; the outcome is observable through the snapshot.
    pub async fn load(&self) {
        if !self.has_session() {
            tracing::debug!("[CartStore] No end-user session, using guest cart");
            self.reset(CartSnapshot::guest());
            return;
        }

        let ticket = self.begin_load();
        let next = match self.inner.api.fetch_cart().await {
            Ok(items) => {
                tracing::debug!("[CartStore] Load #{} returned {} item(s)", ticket, items.len());
                CartSnapshot::synced(items)
            }
            Err(e) => {
                tracing::warn!("[CartStore] Load #{} failed: {}", ticket, e);
                CartSnapshot::failed(e.to_string())
            }
        };

        if !self.apply(ticket, next) {
            tracing::debug!("[CartStore] Discarded stale response of load #{}", ticket);
        }
    }

    /// Same as [`load`](Self::load). Any view may call it after a mutation.
    pub async fn reload(&self) {
        self.load().await;
    }

    /// Removes a course from the server cart, then reloads.
    ///
    /// The reload happens whether or not the removal succeeded, so the
    /// snapshot shows the server's view either way. The removal error, if
    /// any, is returned after the reload.
    pub async fn remove(&self, course_id: CourseId) -> Result<()> {
        let outcome = self.inner.api.remove_from_cart(course_id).await;
        if let Err(e) = &outcome {
            tracing::warn!("[CartStore] Failed to remove course {}: {}", course_id, e);
        }

        self.reload().await;
        outcome
    }

    /// Empties the cart locally, e.g. on logout. Any load in flight is
    /// superseded.
    pub fn clear(&self) {
        tracing::debug!("[CartStore] Cleared");
        self.reset(CartSnapshot::guest());
    }

    /// Number of cart lines.
    pub fn count(&self) -> usize {
        self.inner.state.borrow().count()
    }

    /// Copy of the current snapshot.
    pub fn snapshot(&self) -> CartSnapshot {
        self.inner.state.borrow().clone()
    }

    pub fn items(&self) -> Vec<CartLine> {
        self.inner.state.borrow().items.clone()
    }

    pub fn status(&self) -> CartStatus {
        self.inner.state.borrow().status
    }

    pub fn contains(&self, course_id: CourseId) -> bool {
        self.inner.state.borrow().contains(course_id)
    }

    /// Receiver notified on every applied change.
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.inner.state.subscribe()
    }

    fn has_session(&self) -> bool {
        match self.inner.credentials.token(AuthScope::EndUser) {
            Ok(token) => token.is_some(),
            Err(e) => {
                tracing::warn!("[CartStore] Failed to read end-user credential: {}", e);
                false
            }
        }
    }

    /// Takes a new ticket and marks the cart as loading, atomically with
    /// respect to other writers.
    fn begin_load(&self) -> u64 {
        let mut ticket = 0;
        self.inner.state.send_modify(|snapshot| {
            ticket = self.inner.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
            *snapshot = snapshot.loading();
        });
        ticket
    }

    /// Applies `next` only if `ticket` is still the latest.
    fn apply(&self, ticket: u64, next: CartSnapshot) -> bool {
        self.inner.state.send_if_modified(|snapshot| {
            if self.inner.latest_ticket.load(Ordering::SeqCst) != ticket {
                return false;
            }
            *snapshot = next;
            true
        })
    }

    /// Replaces the snapshot and invalidates every load in flight.
    fn reset(&self, next: CartSnapshot) {
        self.inner.state.send_modify(|snapshot| {
            self.inner.latest_ticket.fetch_add(1, Ordering::SeqCst);
            *snapshot = next;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeCartServer, credentials, line};

    fn store(server: &Arc<FakeCartServer>, token: Option<&str>) -> SessionCartStore {
        SessionCartStore::new(server.clone(), credentials(token))
    }

    async fn wait_for_fetches(server: &FakeCartServer, calls: usize) {
        while server.fetch_calls() < calls {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_initial_state_is_idle() {
        let server = FakeCartServer::with_lines(vec![line(1, 10)]);
        let store = store(&server, Some("tok"));

        assert_eq!(store.status(), CartStatus::Idle);
        assert_eq!(store.count(), 0);
        assert_eq!(server.fetch_calls(), 0);
    }

    #[tokio::test]
    async fn test_load_mirrors_server_cart() {
        let server = FakeCartServer::with_lines(vec![line(1, 10), line(2, 22)]);
        let store = store(&server, Some("tok"));

        store.load().await;

        let snapshot = store.snapshot();
        assert_eq!(snapshot.status, CartStatus::Ready);
        assert_eq!(snapshot.items, server.lines());
        assert_eq!(store.count(), 2);
        assert!(snapshot.synced_at.is_some());
        assert!(store.contains(22));
    }

    #[tokio::test]
    async fn test_guest_load_makes_no_request() {
        let server = FakeCartServer::with_lines(vec![line(1, 10)]);
        let store = store(&server, None);

        store.load().await;

        assert_eq!(server.fetch_calls(), 0);
        assert_eq!(store.status(), CartStatus::Ready);
        assert_eq!(store.count(), 0);
    }

    #[tokio::test]
    async fn test_failed_load_sets_error_then_recovers() {
        let server = FakeCartServer::with_lines(vec![line(1, 10)]);
        let store = store(&server, Some("tok"));
        store.load().await;
        assert_eq!(store.count(), 1);

        server.fail_fetch(true);
        store.reload().await;

        let snapshot = store.snapshot();
        assert_eq!(snapshot.status, CartStatus::Error);
        assert_eq!(snapshot.count(), 0);
        assert!(snapshot.last_error.unwrap().contains("connection refused"));

        server.fail_fetch(false);
        store.reload().await;
        assert_eq!(store.status(), CartStatus::Ready);
        assert_eq!(store.items(), vec![line(1, 10)]);
        assert!(store.snapshot().last_error.is_none());
    }

    #[tokio::test]
    async fn test_remove_then_reload_reflects_server() {
        let server = FakeCartServer::with_lines(vec![line(1, 10), line(2, 22)]);
        let store = store(&server, Some("tok"));
        store.load().await;

        store.remove(10).await.unwrap();

        assert_eq!(server.remove_calls(), 1);
        assert_eq!(store.items(), vec![line(2, 22)]);
        assert_eq!(store.status(), CartStatus::Ready);
    }

    #[tokio::test]
    async fn test_failed_remove_still_reloads() {
        let server = FakeCartServer::with_lines(vec![line(1, 10)]);
        let store = store(&server, Some("tok"));
        store.load().await;
        server.fail_remove(true);

        let result = store.remove(10).await;

        assert_eq!(result.unwrap_err().status_code(), Some(500));
        assert_eq!(server.fetch_calls(), 2);
        assert_eq!(store.items(), vec![line(1, 10)]);
    }

    #[tokio::test]
    async fn test_remove_of_absent_course_leaves_cart_unchanged() {
        let server = FakeCartServer::with_lines(vec![line(1, 10)]);
        let store = store(&server, Some("tok"));
        store.load().await;

        store.remove(99).await.unwrap();

        assert_eq!(store.items(), vec![line(1, 10)]);
    }

    #[tokio::test]
    async fn test_back_to_back_reloads_converge() {
        let server = FakeCartServer::with_lines(vec![line(1, 10), line(2, 22), line(3, 33)]);
        let store = store(&server, Some("tok"));

        tokio::join!(
            store.reload(),
            store.reload(),
            store.reload(),
            store.reload(),
            store.reload()
        );

        assert_eq!(server.fetch_calls(), 5);
        assert_eq!(store.status(), CartStatus::Ready);
        assert_eq!(store.items(), server.lines());
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let server = FakeCartServer::with_lines(vec![line(1, 10)]);
        let store = store(&server, Some("tok"));

        let release_first = server.hold_next_fetch();
        let first = tokio::spawn({
            let store = store.clone();
            async move { store.load().await }
        });
        wait_for_fetches(&server, 1).await;
        assert_eq!(store.status(), CartStatus::Loading);

        server.set_lines(vec![line(1, 10), line(2, 22)]);
        store.reload().await;
        assert_eq!(store.count(), 2);

        release_first.send(()).unwrap();
        first.await.unwrap();

        assert_eq!(store.count(), 2);
        assert_eq!(store.items(), server.lines());
        assert_eq!(store.status(), CartStatus::Ready);
    }

    #[tokio::test]
    async fn test_clear_supersedes_load_in_flight() {
        let server = FakeCartServer::with_lines(vec![line(1, 10)]);
        let store = store(&server, Some("tok"));

        let release = server.hold_next_fetch();
        let pending = tokio::spawn({
            let store = store.clone();
            async move { store.load().await }
        });
        wait_for_fetches(&server, 1).await;

        store.clear();
        release.send(()).unwrap();
        pending.await.unwrap();

        assert_eq!(store.count(), 0);
        assert_eq!(store.status(), CartStatus::Ready);
    }

    #[tokio::test]
    async fn test_subscribers_see_every_applied_snapshot() {
        let server = FakeCartServer::with_lines(vec![line(1, 10)]);
        let store = store(&server, Some("tok"));
        let mut header = store.subscribe();
        let mut cart_page = store.subscribe();

        store.load().await;

        assert!(header.has_changed().unwrap());
        assert_eq!(header.borrow_and_update().count(), 1);
        assert_eq!(*cart_page.borrow_and_update(), store.snapshot());

        store.remove(10).await.unwrap();
        assert!(header.has_changed().unwrap());
        assert_eq!(header.borrow_and_update().count(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let server = FakeCartServer::with_lines(vec![line(1, 10)]);
        let store = store(&server, Some("tok"));
        let other_view = store.clone();

        other_view.load().await;

        assert_eq!(store.count(), 1);
    }
}
