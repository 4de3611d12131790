use super::*;

impl Quaver {
    pub async fn get_playlist(&self, playlist_id: u64) -> Result<Value> {
        self.send(Route::get(format!("/playlists/{playlist_id}"))).await
    }

    pub async fn get_playlist_maps(&self, playlist_id: u64) -> Result<Value> {
        self.send(Route::get(format!("/playlists/{playlist_id}/maps")))
            .await
    }

    /// Search playlists by title.
    ///
    /// Unlike the other listings, `page` is only sent when `paginate` is set.
    pub async fn search_playlist(&self, search: &str, paginate: bool) -> Result<Value> {
        self.send(search_playlist_route(search, paginate)).await
    }
}

pub(super) fn search_playlist_route(search: &str, paginate: bool) -> Route {
    let mut params = Params::new().with("search", search);
    params.push_opt("page", paginate.then(|| page(paginate)));
    Route::create("/playlists/all/search", Method::Get, Some(params))
}
