use futures_util::future::try_join_all;

use super::models::UsersResponse;
use super::*;

/// Score listing served under `/users/scores/{kind}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ScoreKind {
    Best,
    Recent,
    FirstPlace,
}

impl ScoreKind {
    fn segment(self) -> &'static str {
        match self {
            Self::Best => "best",
            Self::Recent => "recent",
            Self::FirstPlace => "firstplace",
        }
    }
}

impl Quaver {
    /// Look users up by name, ID or a mix of both.
    ///
    /// With `full`, every name/ID is fetched from its full profile endpoint
    /// concurrently and the profiles come back as a JSON array in input
    /// order. The first failing profile request fails the whole call.
    pub async fn get_users(&self, query: impl Into<UserQuery>, full: bool) -> Result<Value> {
        let params = users_params(&query.into())?;

        if full {
            let keys: Vec<&str> = params.values().collect();
            tracing::debug!(count = keys.len(), "Fetching full user profiles");
            let profiles = try_join_all(keys.into_iter().map(|key| self.get_full_user(key))).await?;
            return Ok(Value::Array(profiles));
        }

        self.send(Route::create("/users", Method::Get, Some(params)))
            .await
    }

    async fn get_full_user(&self, key: &str) -> Result<Value> {
        self.send(full_user_route(key)).await
    }

    /// Search users whose name contains `query`.
    ///
    /// With `fetch_full`, each match is re-fetched through the full profile
    /// path and a JSON array of profiles is returned instead.
    pub async fn search_user(&self, query: &str, fetch_full: bool) -> Result<Value> {
        let found = self.send(search_user_route(query)).await?;
        if !fetch_full {
            return Ok(found);
        }

        let found: UsersResponse = serde_json::from_value(found)?;
        let names: Vec<UserRef> = found
            .users
            .into_iter()
            .map(|user| UserRef::Name(user.username))
            .collect();
        if names.is_empty() {
            return Ok(Value::Array(Vec::new()));
        }
        self.get_users(UserQuery::Mixed(names), true).await
    }

    /// Numeric ID for `user`, looking the name up when needed.
    pub async fn resolve_user_id(&self, user: &UserRef) -> Result<u64> {
        let name = match user {
            UserRef::Id(id) => return Ok(*id),
            UserRef::Name(name) => name,
        };
        if name.is_empty() {
            return Err(QuaverError::InvalidArgumentPassed(format!(
                "{name:?} is not a valid argument for the id."
            )));
        }

        let params = users_params(&UserQuery::Name(name.clone()))?;
        let route = Route::create("/users", Method::Get, Some(params));
        let resp: UsersResponse = self.client.make_request_as(&route).await?;
        resp.users
            .first()
            .map(|u| u.id)
            .ok_or_else(|| QuaverError::UserNotFound(name.clone()))
    }

    pub async fn get_user_best(&self, user: impl Into<UserRef>, query: ScoreQuery) -> Result<Value> {
        self.user_scores(ScoreKind::Best, &user.into(), query).await
    }

    pub async fn get_user_recent(
        &self,
        user: impl Into<UserRef>,
        query: ScoreQuery,
    ) -> Result<Value> {
        self.user_scores(ScoreKind::Recent, &user.into(), query).await
    }

    pub async fn get_user_firstplace(
        &self,
        user: impl Into<UserRef>,
        query: ScoreQuery,
    ) -> Result<Value> {
        self.user_scores(ScoreKind::FirstPlace, &user.into(), query)
            .await
    }

    async fn user_scores(&self, kind: ScoreKind, user: &UserRef, query: ScoreQuery) -> Result<Value> {
        let id = self.resolve_user_id(user).await?;
        self.send(scores_route(kind, id, &query)).await
    }

    /// Mapsets uploaded by a user. The reference is placed in the path as given.
    ///
    /// A status of `0` is treated like `None` and sends no `status` key.
    pub async fn user_mapsets(
        &self,
        user: impl Into<UserRef>,
        mode: impl Into<EnumOrInt<GameMode>>,
        status: Option<EnumOrInt<RankStatus>>,
        paginate: bool,
    ) -> Result<Value> {
        let route = user_mapsets_route(&user.into(), mode.into(), status, paginate);
        self.send(route).await
    }

    pub async fn get_user_graph(
        &self,
        user: impl Into<UserRef>,
        mode: impl Into<EnumOrInt<GameMode>>,
    ) -> Result<Value> {
        let id = self.resolve_user_id(&user.into()).await?;
        let params = Params::new()
            .with("id", id)
            .with("mode", mode.into().normalize());
        self.send(Route::create("/users/graph/rank", Method::Get, Some(params)))
            .await
    }

    pub async fn get_user_playlist(&self, user: impl Into<UserRef>) -> Result<Value> {
        let id = self.resolve_user_id(&user.into()).await?;
        self.send(Route::get(format!("/users/{id}/playlists"))).await
    }

    pub async fn check_song_in_user_playlist(
        &self,
        user: impl Into<UserRef>,
        map_id: u64,
    ) -> Result<Value> {
        let id = self.resolve_user_id(&user.into()).await?;
        self.send(Route::get(format!("/users/{id}/playlists/map/{map_id}")))
            .await
    }

    pub async fn get_user_achievements(&self, user: impl Into<UserRef>) -> Result<Value> {
        let id = self.resolve_user_id(&user.into()).await?;
        self.send(Route::get(format!("/users/{id}/achievements"))).await
    }
}

pub(super) fn full_user_route(key: &str) -> Route {
    Route::get(format!("/users/full/{}", urlencoding::encode(key)))
}

pub(super) fn search_user_route(query: &str) -> Route {
    Route::get(format!("/users/search/{}", urlencoding::encode(query)))
}

/// `name`/`id` pairs for GET /users. Names and IDs may repeat.
pub(super) fn users_params(query: &UserQuery) -> Result<Params> {
    let mut params = Params::new();
    match query {
        UserQuery::Name(name) => {
            push_user(&mut params, &UserRef::Name(name.clone()))?;
        }
        UserQuery::Id(id) => {
            params.push("id", id);
        }
        UserQuery::Mixed(users) => {
            if users.is_empty() {
                return Err(QuaverError::InvalidArgumentPassed(
                    "The name argument must be a string, int or a non-empty list of strings or ints."
                        .into(),
                ));
            }
            for user in users {
                push_user(&mut params, user)?;
            }
        }
    }
    Ok(params)
}

fn push_user(params: &mut Params, user: &UserRef) -> Result<()> {
    match user {
        UserRef::Id(id) => {
            params.push("id", id);
        }
        UserRef::Name(name) if name.is_empty() => {
            return Err(QuaverError::InvalidArgumentPassed(format!(
                "{name:?} is not a valid argument for the username."
            )));
        }
        UserRef::Name(name) => {
            params.push("name", name);
        }
    }
    Ok(())
}

pub(super) fn scores_route(kind: ScoreKind, id: u64, query: &ScoreQuery) -> Route {
    let params = Params::new()
        .with("id", id)
        .with("page", page(query.paginate))
        .with("limit", query.clamped_limit())
        .with("mode", query.mode.normalize());
    Route::create(
        format!("/users/scores/{}", kind.segment()),
        Method::Get,
        Some(params),
    )
}

pub(super) fn user_mapsets_route(
    user: &UserRef,
    mode: EnumOrInt<GameMode>,
    status: Option<EnumOrInt<RankStatus>>,
    paginate: bool,
) -> Route {
    let mut params = Params::new().with("page", page(paginate));
    params.push_opt(
        "status",
        status
            .filter(|status| *status != EnumOrInt::Int(0))
            .map(EnumOrInt::normalize),
    );
    params.push("mode", mode.normalize());
    let user = urlencoding::encode(&user.to_string()).into_owned();
    Route::create(format!("/users/mapsets/{user}"), Method::Get, Some(params))
}
