use super::*;

impl Quaver {
    /// A single map by numeric ID or content hash; both hit the same endpoint.
    pub async fn get_map(&self, key: impl Into<MapKey>) -> Result<Value> {
        self.send(map_route(&key.into())).await
    }

    pub async fn get_map_scores(&self, map_id: u64) -> Result<Value> {
        self.send(Route::get(format!("/scores/map/{map_id}/"))).await
    }

    /// Hit timing data recorded for one score.
    pub async fn get_hit_graph(&self, score_id: u64) -> Result<Value> {
        self.send(Route::get(format!("/scores/data/{score_id}"))).await
    }
}

pub(super) fn map_route(key: &MapKey) -> Route {
    match key {
        MapKey::Id(id) => Route::get(format!("/maps/{id}/")),
        MapKey::Hash(hash) => Route::get(format!("/maps/{}/", urlencoding::encode(hash))),
    }
}
