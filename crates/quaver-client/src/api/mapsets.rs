use futures_util::future::try_join_all;

use super::*;

impl Quaver {
    /// IDs of every ranked mapset.
    pub async fn get_ranked_maps(&self) -> Result<Value> {
        self.send(Route::get("/mapsets/ranked")).await
    }

    /// Mapsets waiting in the ranking queue.
    ///
    /// The queue endpoint's `mode` key is normalized against rank status
    /// values, so out-of-range integers fall back to `Ranked` (2).
    pub async fn get_mapsets_pending(
        &self,
        paginate: bool,
        mode: impl Into<EnumOrInt<RankStatus>>,
    ) -> Result<Value> {
        self.send(mapsets_pending_route(paginate, mode.into())).await
    }

    /// One mapset, or several fetched concurrently.
    ///
    /// [`IdSet::Many`] yields a JSON array in the same order as the IDs;
    /// any failing request fails the whole call.
    pub async fn get_mapset_data(&self, ids: impl Into<IdSet>) -> Result<Value> {
        match ids.into() {
            IdSet::One(id) => self.send(mapset_route(id)).await,
            IdSet::Many(ids) => {
                tracing::debug!(count = ids.len(), "Fetching mapsets");
                let mapsets = try_join_all(ids.into_iter().map(|id| self.send(mapset_route(id))))
                    .await?;
                Ok(Value::Array(mapsets))
            }
        }
    }

    pub async fn search_mapset(&self, search: &MapsetSearch) -> Result<Value> {
        self.send(search_mapset_route(search)).await
    }

    pub async fn get_map_comments(&self, map_id: u64) -> Result<Value> {
        self.send(Route::get(format!("/mapsets/{map_id}/comments")))
            .await
    }
}

fn mapset_route(id: u64) -> Route {
    Route::get(format!("/mapsets/{id}"))
}

pub(super) fn mapsets_pending_route(paginate: bool, mode: EnumOrInt<RankStatus>) -> Route {
    let params = Params::new()
        .with("page", page(paginate))
        .with("mode", mode.normalize());
    Route::create("/mapsets/queue", Method::Get, Some(params))
}

pub(super) fn search_mapset_route(search: &MapsetSearch) -> Route {
    let mut params = Params::new()
        .with("search", &search.search)
        .with("mode", search.mode.normalize())
        .with("status", search.status.normalize())
        .with("page", page(search.pagination))
        .with("limit", search.limit);

    params
        .push_opt("mindiff", search.mindiff)
        .push_opt("maxdiff", search.maxdiff)
        .push_opt("minbpm", search.minbpm)
        .push_opt("maxbpm", search.maxbpm)
        .push_opt("minlns", search.minlns)
        .push_opt("maxlns", search.maxlns)
        .push_opt("minplaycount", search.minplaycount)
        .push_opt("maxplaycount", search.maxplaycount)
        .push_opt("mindate", search.mindate.map(|d| d.timestamp()))
        .push_opt("maxdate", search.maxdate.map(|d| d.timestamp()));

    Route::create("/mapsets/maps/search", Method::Get, Some(params))
}
