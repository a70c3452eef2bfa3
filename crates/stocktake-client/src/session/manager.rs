/*
[INPUT]:  Persisted token and server validation results
[OUTPUT]: Observable sign-in/sign-out state transitions
[POS]:    Session layer - single source of truth for authentication
[UPDATE]: When the startup flow or transition rules change
*/

use std::sync::Arc;

use tokio::sync::{OnceCell, watch};
use tracing::{debug, warn};

use crate::http::{Result, StocktakeClient};
use crate::session::{Session, TokenStore};

/// Owns the authentication state and mediates every transition.
///
/// The only writer of the token store. Consumers observe state through
/// [`SessionManager::subscribe`]; every transition is published
/// synchronously, so the navigation layer never sees an intermediate
/// state.
#[derive(Debug)]
pub struct SessionManager {
    client: Arc<StocktakeClient>,
    store: Arc<dyn TokenStore>,
    state_tx: watch::Sender<Session>,
    init_once: OnceCell<()>,
}

impl SessionManager {
    pub fn new(client: Arc<StocktakeClient>, store: Arc<dyn TokenStore>) -> Self {
        let (state_tx, _) = watch::channel(Session::Initializing);
        Self {
            client,
            store,
            state_tx,
            init_once: OnceCell::new(),
        }
    }

    /// The client this manager shares with the rest of the application
    pub fn client(&self) -> &Arc<StocktakeClient> {
        &self.client
    }

    /// Current state snapshot
    pub fn current(&self) -> Session {
        self.state_tx.borrow().clone()
    }

    /// Watch every state transition
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state_tx.subscribe()
    }

    /// Restore the session from the persisted token.
    ///
    /// No stored token: settles to `Unauthenticated` without a network
    /// call. Stored token: validates it against the server and keeps the
    /// refreshed value on success. Any failure along the way - an
    /// unreadable store, bad status, network error, timeout - falls back
    /// silently to the signed-out flow; it is logged, never surfaced, and
    /// the state always leaves `Initializing`. Runs at most once, even
    /// under concurrent callers: later calls are no-ops.
    pub async fn initialize(&self) -> Result<()> {
        self.init_once
            .get_or_init(|| self.restore_session())
            .await;
        Ok(())
    }

    async fn restore_session(&self) {
        let candidate = match self.store.load() {
            Ok(Some(token)) => token,
            Ok(None) => {
                debug!("no persisted token, starting signed out");
                self.transition(Session::Unauthenticated);
                return;
            }
            Err(err) => {
                warn!(error = %err, "token store unreadable, starting signed out");
                self.clear_store_best_effort();
                self.transition(Session::Unauthenticated);
                return;
            }
        };

        match self.client.validate_token(&candidate).await {
            Ok(refreshed) => {
                if let Err(e) = self.store.save(&refreshed) {
                    warn!(error = %e, "failed to persist refreshed token");
                }
                self.transition(Session::Authenticated { token: refreshed });
            }
            Err(err) => {
                warn!(error = %err, "token validation failed, falling back to signed out");
                self.clear_store_best_effort();
                self.transition(Session::Unauthenticated);
            }
        }
    }

    /// Record a server-issued token after a successful login
    pub fn sign_in(&self, token: &str) -> Result<()> {
        self.store.save(token)?;
        self.transition(Session::Authenticated {
            token: token.to_string(),
        });
        Ok(())
    }

    /// Drop the session. Aborts in-flight requests first so a late
    /// response cannot resurrect the signed-out state. Idempotent. The
    /// transition is never gated on persistence: a failing store clear
    /// is logged and the session still ends up signed out.
    pub fn sign_out(&self) -> Result<()> {
        self.client.abort_in_flight();
        self.clear_store_best_effort();
        self.transition(Session::Unauthenticated);
        Ok(())
    }

    fn clear_store_best_effort(&self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to clear persisted token");
        }
    }

    fn transition(&self, next: Session) {
        debug!(state = ?next, "session transition");
        self.state_tx.send_replace(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::http::ClientConfig;
    use crate::session::{FileTokenStore, MemoryTokenStore, StoreError};

    /// Persists normally but refuses to clear, for sign-out error paths
    #[derive(Debug, Default)]
    struct StickyStore {
        token: std::sync::RwLock<Option<String>>,
    }

    impl TokenStore for StickyStore {
        fn load(&self) -> std::result::Result<Option<String>, StoreError> {
            Ok(self.token.read().unwrap().clone())
        }

        fn save(&self, token: &str) -> std::result::Result<(), StoreError> {
            *self.token.write().unwrap() = Some(token.to_string());
            Ok(())
        }

        fn clear(&self) -> std::result::Result<(), StoreError> {
            Err(StoreError::Corrupt("clear refused".to_string()))
        }
    }

    fn manager_for(server: &MockServer, config: ClientConfig) -> SessionManager {
        let store = Arc::new(MemoryTokenStore::new());
        let client = Arc::new(
            StocktakeClient::with_config_and_base_url(
                config,
                &server.uri(),
                Arc::clone(&store) as Arc<dyn TokenStore>,
            )
            .expect("client init"),
        );
        SessionManager::new(client, store)
    }

    #[tokio::test]
    async fn test_initialize_without_token_skips_network() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/_ValidateToken/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("x"))
            .expect(0)
            .mount(&server)
            .await;

        let manager = manager_for(&server, ClientConfig::default());
        assert!(manager.current().is_loading());

        manager.initialize().await.unwrap();

        assert_eq!(manager.current(), Session::Unauthenticated);
        assert!(!manager.current().is_loading());
    }

    #[tokio::test]
    async fn test_initialize_keeps_refreshed_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/_ValidateToken/"))
            .and(header("Authorization", "Bearer stored-token"))
            .respond_with(ResponseTemplate::new(200).set_body_string("refreshed-token"))
            .expect(1)
            .mount(&server)
            .await;

        let manager = manager_for(&server, ClientConfig::default());
        manager.store.save("stored-token").unwrap();

        manager.initialize().await.unwrap();

        assert_eq!(
            manager.current(),
            Session::Authenticated {
                token: "refreshed-token".to_string()
            }
        );
        assert_eq!(
            manager.store.load().unwrap(),
            Some("refreshed-token".to_string())
        );
    }

    #[tokio::test]
    async fn test_initialize_clears_rejected_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/_ValidateToken/"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": "Unauthorized",
                "message": "token expired",
            })))
            .mount(&server)
            .await;

        let manager = manager_for(&server, ClientConfig::default());
        manager.store.save("stale").unwrap();

        manager.initialize().await.unwrap();

        assert_eq!(manager.current(), Session::Unauthenticated);
        assert_eq!(manager.store.load().unwrap(), None);
    }

    #[tokio::test]
    async fn test_initialize_falls_back_on_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/_ValidateToken/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("late-token")
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let config = ClientConfig {
            timeout: Duration::from_millis(100),
            ..ClientConfig::default()
        };
        let manager = manager_for(&server, config);
        manager.store.save("stored").unwrap();

        manager.initialize().await.unwrap();

        // Timed out: signed out, and the late body never resurrects it.
        assert_eq!(manager.current(), Session::Unauthenticated);
        assert_eq!(manager.store.load().unwrap(), None);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(manager.current(), Session::Unauthenticated);
    }

    #[tokio::test]
    async fn test_initialize_runs_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/_ValidateToken/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("refreshed"))
            .expect(1)
            .mount(&server)
            .await;

        let manager = manager_for(&server, ClientConfig::default());
        manager.store.save("stored").unwrap();

        manager.initialize().await.unwrap();
        manager.initialize().await.unwrap();

        assert_eq!(
            manager.current(),
            Session::Authenticated {
                token: "refreshed".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_corrupt_persisted_record_starts_signed_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/_ValidateToken/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("x"))
            .expect(0)
            .mount(&server)
            .await;

        let dir = tempfile::TempDir::new().unwrap();
        let store = Arc::new(FileTokenStore::new(dir.path()));
        std::fs::write(store.path(), "not json").unwrap();

        let client = Arc::new(
            StocktakeClient::with_config_and_base_url(
                ClientConfig::default(),
                &server.uri(),
                Arc::clone(&store) as Arc<dyn TokenStore>,
            )
            .unwrap(),
        );
        let manager = SessionManager::new(client, Arc::clone(&store) as Arc<dyn TokenStore>);

        // An unreadable record falls back silently, like a failed validation.
        manager.initialize().await.unwrap();

        assert_eq!(manager.current(), Session::Unauthenticated);
        assert!(!manager.current().is_loading());
        assert_eq!(store.load().unwrap(), None);
    }

    #[tokio::test]
    async fn test_concurrent_initialize_validates_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/_ValidateToken/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("refreshed")
                    .set_delay(Duration::from_millis(50)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let manager = manager_for(&server, ClientConfig::default());
        manager.store.save("stored").unwrap();

        let (a, b) = tokio::join!(manager.initialize(), manager.initialize());
        a.unwrap();
        b.unwrap();

        assert_eq!(
            manager.current(),
            Session::Authenticated {
                token: "refreshed".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_sign_out_completes_when_clear_fails() {
        let server = MockServer::start().await;
        let store = Arc::new(StickyStore::default());
        let client = Arc::new(
            StocktakeClient::with_config_and_base_url(
                ClientConfig::default(),
                &server.uri(),
                Arc::clone(&store) as Arc<dyn TokenStore>,
            )
            .unwrap(),
        );
        let manager = SessionManager::new(client, Arc::clone(&store) as Arc<dyn TokenStore>);

        manager.sign_in("t").unwrap();
        assert!(manager.current().is_authenticated());

        // The transition is not gated on the store: still ends signed out.
        manager.sign_out().unwrap();
        assert_eq!(manager.current(), Session::Unauthenticated);
    }

    #[tokio::test]
    async fn test_sign_in_then_sign_out_round_trip() {
        let server = MockServer::start().await;
        let manager = manager_for(&server, ClientConfig::default());

        manager.sign_in("fresh-token").unwrap();
        assert_eq!(
            manager.current(),
            Session::Authenticated {
                token: "fresh-token".to_string()
            }
        );
        assert_eq!(manager.store.load().unwrap(), Some("fresh-token".to_string()));

        manager.sign_out().unwrap();
        assert_eq!(manager.current(), Session::Unauthenticated);
        assert_eq!(manager.store.load().unwrap(), None);

        // Idempotent: a second sign-out produces the same end state.
        manager.sign_out().unwrap();
        assert_eq!(manager.current(), Session::Unauthenticated);
        assert_eq!(manager.store.load().unwrap(), None);
    }

    #[tokio::test]
    async fn test_subscribers_observe_transitions() {
        let server = MockServer::start().await;
        let manager = manager_for(&server, ClientConfig::default());
        let mut rx = manager.subscribe();

        assert!(rx.borrow().is_loading());

        manager.sign_in("t1").unwrap();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().token(), Some("t1"));

        manager.sign_out().unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow().is_signed_out());
    }
}
