use serde_json::Value;

use crate::client::HypixelClient;
use crate::error::Result;

impl HypixelClient {
    /// Current number of players online across the network.
    pub async fn player_count(&self) -> Result<Value> {
        self.request("playerCount", &[]).await
    }

    /// Active network boosters.
    pub async fn boosters(&self) -> Result<Value> {
        self.request("boosters", &[]).await
    }

    /// Player count of each public game and mode.
    pub async fn game_counts(&self) -> Result<Value> {
        self.request("gameCounts", &[]).await
    }

    /// Leaderboards and their current standings for every game.
    pub async fn leaderboards(&self) -> Result<Value> {
        self.request("leaderboards", &[]).await
    }

    /// Watchdog and staff ban statistics.
    pub async fn watchdog_stats(&self) -> Result<Value> {
        self.request("watchdogstats", &[]).await
    }

    /// Metadata about the key this client was built with.
    pub async fn key_info(&self) -> Result<Value> {
        self.request("key", &[]).await
    }
}
