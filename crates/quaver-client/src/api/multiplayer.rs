use super::*;

impl Quaver {
    /// Active multiplayer rooms.
    pub async fn get_multiplayer_rooms(&self) -> Result<Value> {
        self.send(Route::get("/multiplayer/games")).await
    }

    pub async fn get_multiplayer_room(&self, room_id: u64) -> Result<Value> {
        self.send(Route::get(format!("/multiplayer/games/{room_id}")))
            .await
    }

    /// Players currently in a room.
    pub async fn get_multiplayer_room_members(&self, room_id: u64) -> Result<Value> {
        self.send(Route::get(format!("/multiplayer/games/{room_id}/live")))
            .await
    }

    /// Leaderboard of multiplayer wins.
    pub async fn get_multiplayer_leaderboard(
        &self,
        paginate: bool,
        mode: impl Into<EnumOrInt<GameMode>>,
    ) -> Result<Value> {
        self.send(multiplayer_leaderboard_route(paginate, mode.into()))
            .await
    }

    pub async fn get_one_match(&self, match_id: u64) -> Result<Value> {
        self.send(Route::get(format!("/multiplayer/match/{match_id}")))
            .await
    }
}

pub(super) fn multiplayer_leaderboard_route(paginate: bool, mode: EnumOrInt<GameMode>) -> Route {
    let params = Params::new()
        .with("mode", mode.normalize())
        .with("page", page(paginate));
    Route::create("/multiplayer/leaderboard", Method::Get, Some(params))
}
