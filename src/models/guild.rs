use serde::{Deserialize, Serialize};

/// How a guild is looked up on the `findGuild` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuildLookup {
    /// By the UUID of a guild member.
    #[serde(rename = "byUuid")]
    ByUuid,
    /// By the guild's name.
    #[serde(rename = "byName")]
    ByName,
}

impl GuildLookup {
    pub fn param(self) -> &'static str {
        match self {
            GuildLookup::ByUuid => "byUuid",
            GuildLookup::ByName => "byName",
        }
    }
}
