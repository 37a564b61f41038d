use serde_json::Value;

use crate::client::HypixelClient;
use crate::error::Result;
use crate::models::GuildLookup;

impl HypixelClient {
    /// Find a guild through `findGuild`.
    pub async fn guild(&self, lookup: GuildLookup, query: &str) -> Result<Value> {
        self.request("findGuild", &[(lookup.param(), query)]).await
    }

    /// Guild that the player with this UUID belongs to.
    pub async fn guild_by_uuid(&self, uuid: &str) -> Result<Value> {
        self.guild(GuildLookup::ByUuid, uuid).await
    }

    pub async fn guild_by_name(&self, name: &str) -> Result<Value> {
        self.guild(GuildLookup::ByName, name).await
    }
}
