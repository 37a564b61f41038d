use serde_json::Value;

use crate::client::HypixelClient;
use crate::error::Result;
use crate::models::PlayerLookup;

impl HypixelClient {
    /// Get a player's data, selecting them by UUID or display name.
    pub async fn player(&self, lookup: PlayerLookup, query: &str) -> Result<Value> {
        self.request("player", &[(lookup.param(), query)]).await
    }

    pub async fn player_by_name(&self, name: &str) -> Result<Value> {
        self.player(PlayerLookup::Name, name).await
    }

    pub async fn player_by_uuid(&self, uuid: &str) -> Result<Value> {
        self.player(PlayerLookup::Uuid, uuid).await
    }

    /// Online status and current session of a player.
    pub async fn player_status(&self, uuid: &str) -> Result<Value> {
        self.request("status", &[("uuid", uuid)]).await
    }

    /// Friends list of a player.
    pub async fn friends(&self, uuid: &str) -> Result<Value> {
        self.request("friends", &[("uuid", uuid)]).await
    }

    /// Games a player has played recently.
    pub async fn recent_games(&self, uuid: &str) -> Result<Value> {
        self.request("recentGames", &[("uuid", uuid)]).await
    }
}
