use super::*;

impl Quaver {
    /// Members of the Quaver team.
    pub async fn get_team(&self) -> Result<Value> {
        self.send(Route::get("/team")).await
    }

    pub async fn get_server_stats(&self) -> Result<Value> {
        self.send(Route::get("/stats")).await
    }

    pub async fn get_country_stats(&self) -> Result<Value> {
        self.send(Route::get("/stats/country")).await
    }
}
