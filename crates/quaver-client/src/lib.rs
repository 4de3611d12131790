//! Quaver statistics API client library.
//!
//! Provides a typed async wrapper over the public Quaver REST API:
//! route construction, a shared HTTP client with status mapping,
//! and endpoint groups exposed through the [`Quaver`] facade.

pub mod api;
pub mod config;
pub mod enums;
pub mod http;
pub mod route;

pub use api::{IdSet, MapKey, MapsetSearch, Quaver, ScoreQuery, UserQuery, UserRef};
pub use config::ClientConfig;
pub use enums::{EnumOrInt, GameMode, RankStatus};
pub use http::HttpClient;
pub use route::{BASE_URL, Method, Params, Route};

/// Crate version as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Release metadata printed by the diagnostics command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionInfo {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
    pub release_level: &'static str,
    pub serial: u32,
}

pub const VERSION_INFO: VersionInfo = VersionInfo {
    major: 0,
    minor: 2,
    micro: 0,
    release_level: "candidate",
    serial: 0,
};

impl std::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{}.{}-{}",
            self.major, self.minor, self.micro, self.release_level
        )
    }
}

/// Unified error type for the quaver-client crate.
#[derive(Debug, thiserror::Error)]
pub enum QuaverError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The API answered with HTTP 500.
    #[error("API is down please try again later")]
    ApiDown,

    #[error("{0}")]
    InvalidArgumentPassed(String),

    #[error("{status} {reason}")]
    Status { status: u16, reason: String },

    #[error("No user found matching {0:?}")]
    UserNotFound(String),

    #[error("HTTP client is closed")]
    Closed,

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

pub type Result<T, E = QuaverError> = std::result::Result<T, E>;
