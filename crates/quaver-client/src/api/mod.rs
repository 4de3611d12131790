//! Quaver REST API endpoint groups.
//!
//! Every group is an `impl Quaver` block. Each operation is split into a
//! pure route builder and the async call that sends it, so request shapes
//! can be checked without a network.

mod leaderboards;
mod maps;
mod mapsets;
mod misc;
mod multiplayer;
mod playlists;
mod users;

pub mod models;

pub use models::{IdSet, MapKey, MapsetSearch, ScoreQuery, UserQuery, UserRef, UserSummary};

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;

use crate::config::ClientConfig;
use crate::enums::{EnumOrInt, GameMode, RankStatus};
use crate::http::HttpClient;
use crate::route::{Method, Params, Route};
use crate::{QuaverError, Result};

/// Facade over every endpoint group, owning the one shared [`HttpClient`].
///
/// Cloning is cheap; clones share the same session.
#[derive(Debug, Clone)]
pub struct Quaver {
    pub(super) client: Arc<HttpClient>,
}

impl Default for Quaver {
    fn default() -> Self {
        Self::new()
    }
}

impl Quaver {
    /// Client with default settings and a lazily created session.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default(), None)
    }

    /// Client reusing a caller-owned session.
    pub fn with_session(session: reqwest::Client) -> Self {
        Self::with_config(ClientConfig::default(), Some(session))
    }

    pub fn with_config(config: ClientConfig, session: Option<reqwest::Client>) -> Self {
        Self {
            client: Arc::new(HttpClient::new(config, session)),
        }
    }

    pub fn http(&self) -> &HttpClient {
        &self.client
    }

    /// Close the underlying session. Repeated calls are no-ops.
    pub fn close(&self) -> bool {
        self.client.close()
    }

    /// Run `f` with this client and close the session afterwards, whether
    /// `f` succeeded or failed. Dropping the returned future before it
    /// finishes closes the session as well.
    pub fn scope<F, Fut, T, E>(self, f: F) -> impl Future<Output = Result<T, E>>
    where
        F: FnOnce(Quaver) -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let guard = CloseOnDrop(self.client.clone());
        async move {
            let _guard = guard;
            f(self).await
        }
    }

    async fn send(&self, route: Route) -> Result<Value> {
        self.client.make_request(&route).await
    }
}

/// Closes the shared session when a [`Quaver::scope`] ends, however it ends.
struct CloseOnDrop(Arc<HttpClient>);

impl Drop for CloseOnDrop {
    fn drop(&mut self) {
        self.0.close();
    }
}

/// `page` value sent for a boolean pagination flag.
pub(super) fn page(paginate: bool) -> u8 {
    u8::from(paginate)
}
