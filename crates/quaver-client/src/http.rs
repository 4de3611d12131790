//! Shared HTTP session and response status mapping.

use std::sync::{Mutex, MutexGuard, PoisonError};

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::route::Route;
use crate::{QuaverError, Result};

enum Session {
    /// No session yet; one is built from the config on first request.
    Pending,
    Open(reqwest::Client),
    Closed,
}

/// Turns [`Route`]s into HTTP calls over a single shared session.
pub struct HttpClient {
    config: ClientConfig,
    session: Mutex<Session>,
}

impl HttpClient {
    /// Create a client. Without a supplied session one is built lazily
    /// on the first request.
    pub fn new(config: ClientConfig, session: Option<reqwest::Client>) -> Self {
        let session = match session {
            Some(client) => Session::Open(client),
            None => Session::Pending,
        };
        Self {
            config,
            session: Mutex::new(session),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current session, creating it on first use.
    fn session(&self) -> Result<reqwest::Client> {
        let mut guard = self.lock();
        match &*guard {
            Session::Open(client) => return Ok(client.clone()),
            Session::Closed => return Err(QuaverError::Closed),
            Session::Pending => {}
        }

        let client = self.config.build_session()?;
        tracing::debug!(user_agent = %self.config.user_agent, "Created HTTP session");
        *guard = Session::Open(client.clone());
        Ok(client)
    }

    /// Execute a route and return the decoded JSON body.
    pub async fn make_request(&self, route: &Route) -> Result<Value> {
        self.make_request_as(route).await
    }

    /// Execute a route and decode the body into `T`.
    pub async fn make_request_as<T: DeserializeOwned>(&self, route: &Route) -> Result<T> {
        let session = self.session()?;
        let url = url::Url::parse(&route.url_with_base(&self.config.base_url))?;
        let resp = session
            .request(route.method().into(), url)
            .query(route.params())
            .send()
            .await?;

        let status = resp.status();
        tracing::debug!(
            method = %route.method(),
            url = %resp.url(),
            status = status.as_u16(),
            "Quaver API request"
        );
        check_status(status)?;

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Release the session. Safe to call repeatedly or before any request.
    ///
    /// Returns `true` only for the call that actually shut an open session down.
    pub fn close(&self) -> bool {
        let previous = std::mem::replace(&mut *self.lock(), Session::Closed);
        match previous {
            Session::Open(client) => {
                drop(client);
                tracing::info!("Closed Quaver HTTP session");
                true
            }
            Session::Pending | Session::Closed => false,
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(*self.lock(), Session::Closed)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match *self.lock() {
            Session::Pending => "pending",
            Session::Open(_) => "open",
            Session::Closed => "closed",
        };
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.base_url)
            .field("session", &state)
            .finish()
    }
}

/// Map a response status onto the client's error taxonomy.
pub(crate) fn check_status(status: StatusCode) -> Result<()> {
    if status.as_u16() < 400 {
        return Ok(());
    }
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        return Err(QuaverError::ApiDown);
    }
    Err(QuaverError::Status {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
    })
}
