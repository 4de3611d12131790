use super::*;

impl Quaver {
    /// Global or per-country rating leaderboard.
    pub async fn get_leaderboard(
        &self,
        country: Option<&str>,
        mode: impl Into<EnumOrInt<GameMode>>,
        pagination: bool,
    ) -> Result<Value> {
        self.send(leaderboard_route(country, mode.into(), pagination))
            .await
    }

    /// Leaderboard ordered by total hits.
    pub async fn get_leaderboard_hits(&self, pagination: bool) -> Result<Value> {
        let params = Params::new().with("page", page(pagination));
        self.send(Route::create("/leaderboards/hits", Method::Get, Some(params)))
            .await
    }
}

pub(super) fn leaderboard_route(
    country: Option<&str>,
    mode: EnumOrInt<GameMode>,
    pagination: bool,
) -> Route {
    let mut params = Params::new()
        .with("mode", mode.normalize())
        .with("page", page(pagination));
    params.push_opt("country", country.filter(|c| !c.is_empty()));
    Route::create("/leaderboards", Method::Get, Some(params))
}
