use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{EnumOrInt, GameMode, RankStatus};

/// A user addressed by numeric ID or by username.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserRef {
    Id(u64),
    Name(String),
}

impl From<u64> for UserRef {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for UserRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for UserRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl fmt::Display for UserRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Argument of [`Quaver::get_users`](super::Quaver::get_users).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserQuery {
    Name(String),
    Id(u64),
    /// Any mix of names and IDs, looked up in one batch request.
    Mixed(Vec<UserRef>),
}

impl From<&str> for UserQuery {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for UserQuery {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<u64> for UserQuery {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<UserRef> for UserQuery {
    fn from(user: UserRef) -> Self {
        match user {
            UserRef::Id(id) => Self::Id(id),
            UserRef::Name(name) => Self::Name(name),
        }
    }
}

impl From<Vec<UserRef>> for UserQuery {
    fn from(users: Vec<UserRef>) -> Self {
        Self::Mixed(users)
    }
}

impl From<Vec<&str>> for UserQuery {
    fn from(names: Vec<&str>) -> Self {
        Self::Mixed(names.into_iter().map(UserRef::from).collect())
    }
}

impl From<Vec<String>> for UserQuery {
    fn from(names: Vec<String>) -> Self {
        Self::Mixed(names.into_iter().map(UserRef::from).collect())
    }
}

impl From<Vec<u64>> for UserQuery {
    fn from(ids: Vec<u64>) -> Self {
        Self::Mixed(ids.into_iter().map(UserRef::from).collect())
    }
}

/// Options shared by the best/recent/first-place score listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreQuery {
    pub mode: EnumOrInt<GameMode>,
    pub paginate: bool,
    /// Capped at [`ScoreQuery::MAX_LIMIT`] when the request is built.
    pub limit: u32,
}

impl ScoreQuery {
    pub const MAX_LIMIT: u32 = 50;

    pub fn mode(mut self, mode: impl Into<EnumOrInt<GameMode>>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn paginate(mut self, paginate: bool) -> Self {
        self.paginate = paginate;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub(super) fn clamped_limit(&self) -> u32 {
        self.limit.min(Self::MAX_LIMIT)
    }
}

impl Default for ScoreQuery {
    fn default() -> Self {
        Self {
            mode: EnumOrInt::default(),
            paginate: false,
            limit: Self::MAX_LIMIT,
        }
    }
}

/// A map addressed by numeric ID or by its content hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapKey {
    Id(u64),
    Hash(String),
}

impl From<u64> for MapKey {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for MapKey {
    fn from(hash: &str) -> Self {
        Self::Hash(hash.to_string())
    }
}

impl From<String> for MapKey {
    fn from(hash: String) -> Self {
        Self::Hash(hash)
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Hash(hash) => f.write_str(hash),
        }
    }
}

/// One mapset ID or several fetched concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdSet {
    One(u64),
    Many(Vec<u64>),
}

impl From<u64> for IdSet {
    fn from(id: u64) -> Self {
        Self::One(id)
    }
}

impl From<Vec<u64>> for IdSet {
    fn from(ids: Vec<u64>) -> Self {
        Self::Many(ids)
    }
}

impl From<&[u64]> for IdSet {
    fn from(ids: &[u64]) -> Self {
        Self::Many(ids.to_vec())
    }
}

/// Filters for [`Quaver::search_mapset`](super::Quaver::search_mapset).
///
/// Range filters left as `None` are not sent at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapsetSearch {
    pub search: String,
    pub mode: EnumOrInt<GameMode>,
    pub status: EnumOrInt<RankStatus>,
    pub pagination: bool,
    pub limit: u32,
    pub mindiff: Option<i64>,
    pub maxdiff: Option<i64>,
    pub minbpm: Option<i64>,
    pub maxbpm: Option<i64>,
    pub minlns: Option<i64>,
    pub maxlns: Option<i64>,
    pub minplaycount: Option<i64>,
    pub maxplaycount: Option<i64>,
    pub mindate: Option<DateTime<Utc>>,
    pub maxdate: Option<DateTime<Utc>>,
}

impl MapsetSearch {
    pub fn new(
        search: impl Into<String>,
        mode: impl Into<EnumOrInt<GameMode>>,
        status: impl Into<EnumOrInt<RankStatus>>,
    ) -> Self {
        Self {
            search: search.into(),
            mode: mode.into(),
            status: status.into(),
            pagination: false,
            limit: 50,
            mindiff: None,
            maxdiff: None,
            minbpm: None,
            maxbpm: None,
            minlns: None,
            maxlns: None,
            minplaycount: None,
            maxplaycount: None,
            mindate: None,
            maxdate: None,
        }
    }

    pub fn pagination(mut self, pagination: bool) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn difficulty(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.mindiff = min;
        self.maxdiff = max;
        self
    }

    pub fn bpm(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.minbpm = min;
        self.maxbpm = max;
        self
    }

    pub fn long_notes(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.minlns = min;
        self.maxlns = max;
        self
    }

    pub fn play_count(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.minplaycount = min;
        self.maxplaycount = max;
        self
    }

    pub fn date(mut self, min: Option<DateTime<Utc>>, max: Option<DateTime<Utc>>) -> Self {
        self.mindate = min;
        self.maxdate = max;
        self
    }
}

/// User entry from GET /users and GET /users/search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: u64,
    #[serde(default)]
    pub username: String,
}

/// Response of GET /users and GET /users/search/{query}.
#[derive(Debug, Deserialize)]
pub(super) struct UsersResponse {
    #[serde(default)]
    pub(super) users: Vec<UserSummary>,
}
